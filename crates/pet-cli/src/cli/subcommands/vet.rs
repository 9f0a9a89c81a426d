use clap::Subcommand;

/// Vet record commands.
#[derive(Clone, Debug, Subcommand)]
pub enum VetCommands {
    /// Record a vaccination.
    Vaccination {
        #[arg(long)]
        owner: String,
        #[arg(long)]
        pet: String,
        name: String,
    },
    /// Record an appointment note.
    Appointment {
        #[arg(long)]
        owner: String,
        #[arg(long)]
        pet: String,
        note: String,
    },
}
