use clap::{Args, Subcommand};

use crate::cli::subcommands::{OwnerCommands, PetCommands, TaskCommands, VetCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Owners.
    Owner {
        #[command(subcommand)]
        action: OwnerCommands,
    },
    /// Pets of an owner.
    Pet {
        #[command(subcommand)]
        action: PetCommands,
    },
    /// Recurring care tasks of a pet.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Vet record entries.
    Vet {
        #[command(subcommand)]
        action: VetCommands,
    },
    /// List every task due on a date across all owners and pets.
    Due(DueArgs),
    /// Bulk-import tasks from a CSV file.
    Import(ImportArgs),
    /// Export one pet as a standalone JSON document.
    Export(ExportArgs),
    /// Dump JSON schema for a registered document type.
    Schema(SchemaArgs),
}

/// Arguments for `petcare due`.
#[derive(Clone, Debug, Args)]
pub struct DueArgs {
    /// Date to check (YYYY-MM-DD, defaults to today).
    #[arg(long)]
    pub on: Option<String>,
}

/// Arguments for `petcare import`.
#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    /// CSV file with columns owner,pet,task_label,every_days,start_date[,notes].
    pub path: String,
}

/// Arguments for `petcare export`.
#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    #[arg(long)]
    pub owner: String,
    #[arg(long)]
    pub pet: String,
    /// Output file path.
    #[arg(long)]
    pub out: String,
}

/// Arguments for `petcare schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Registered schema name; lists all names when omitted.
    pub type_name: Option<String>,
}
