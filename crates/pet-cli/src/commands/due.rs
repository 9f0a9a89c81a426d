use crate::cli::GlobalFlags;
use crate::cli::root_commands::DueArgs;
use crate::commands::shared::parse::parse_date_or;
use crate::context::AppContext;
use crate::output::output;

/// Handle `petcare due`.
pub fn handle(args: &DueArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let on = parse_date_or(args.on.as_deref(), "on", ctx.today)?;
    output(&ctx.tracker.all_due(on), flags.format)
}
