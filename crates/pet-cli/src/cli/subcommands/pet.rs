use clap::Subcommand;

/// Pet commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PetCommands {
    /// Add a pet to an owner.
    Add {
        #[arg(long)]
        owner: String,
        #[arg(long)]
        name: String,
        /// dog, cat or bird
        #[arg(long)]
        species: String,
        #[arg(long)]
        breed: String,
        /// Weight in kilograms.
        #[arg(long)]
        weight: f64,
        /// Age in years.
        #[arg(long)]
        age: f64,
    },
    /// Remove a pet from an owner.
    Remove {
        #[arg(long)]
        owner: String,
        #[arg(long)]
        name: String,
    },
    /// List an owner's pets.
    List {
        #[arg(long)]
        owner: String,
    },
    /// Show care details for one pet.
    Info {
        #[arg(long)]
        owner: String,
        #[arg(long)]
        name: String,
    },
}
