use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Owner { action } => commands::owner::handle(&action, ctx, flags),
        Commands::Pet { action } => commands::pet::handle(&action, ctx, flags),
        Commands::Task { action } => commands::task::handle(&action, ctx, flags),
        Commands::Vet { action } => commands::vet::handle(&action, ctx, flags),
        Commands::Due(args) => commands::due::handle(&args, ctx, flags),
        Commands::Import(args) => commands::import::handle(&args, ctx, flags),
        Commands::Export(args) => commands::export::handle(&args, ctx, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
