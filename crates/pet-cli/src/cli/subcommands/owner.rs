use clap::Subcommand;

/// Owner commands.
#[derive(Clone, Debug, Subcommand)]
pub enum OwnerCommands {
    /// Register an owner. An existing owner with the same name is replaced.
    Add {
        name: String,
        #[arg(long)]
        email: Option<String>,
    },
    /// Remove an owner and all their pets.
    Remove { name: String },
    /// List owners in registration order.
    List,
}
