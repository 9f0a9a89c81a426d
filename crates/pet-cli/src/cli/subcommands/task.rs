use clap::Subcommand;

/// Care task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// Add a recurring task to a pet.
    Add {
        #[arg(long)]
        owner: String,
        #[arg(long)]
        pet: String,
        #[arg(long)]
        label: String,
        /// Cadence in days.
        #[arg(long)]
        every: u32,
        /// First due date (YYYY-MM-DD).
        #[arg(long)]
        start: String,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Mark a task completed.
    Complete {
        #[arg(long)]
        owner: String,
        #[arg(long)]
        pet: String,
        #[arg(long)]
        label: String,
        /// Completion date (YYYY-MM-DD, defaults to today).
        #[arg(long)]
        on: Option<String>,
    },
    /// Remove a task.
    Remove {
        #[arg(long)]
        owner: String,
        #[arg(long)]
        pet: String,
        #[arg(long)]
        label: String,
    },
    /// List a pet's tasks.
    List {
        #[arg(long)]
        owner: String,
        #[arg(long)]
        pet: String,
    },
}
