use pet_core::entities::Owner;
use pet_core::responses::OwnerSummary;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::OwnerCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `petcare owner`.
pub fn handle(
    action: &OwnerCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        OwnerCommands::Add { name, email } => {
            let owner = Owner::new(name, email.clone())?;
            let summary = OwnerSummary::from(&owner);
            if let Some(previous) = ctx.tracker.register_owner(owner) {
                tracing::warn!(
                    owner = previous.name(),
                    dropped_pets = previous.pets().len(),
                    "replaced existing owner"
                );
            }
            output(&summary, flags.format)
        }
        OwnerCommands::Remove { name } => {
            let removed = ctx.tracker.remove_owner(name.trim()).is_some();
            output(&json!({ "owner": name.trim(), "removed": removed }), flags.format)
        }
        OwnerCommands::List => {
            let owners: Vec<OwnerSummary> =
                ctx.tracker.owners().iter().map(OwnerSummary::from).collect();
            output(&owners, flags.format)
        }
    }
}
