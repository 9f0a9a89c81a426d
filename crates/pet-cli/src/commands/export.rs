use std::path::Path;

use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `petcare export`.
pub fn handle(args: &ExportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    pet_store::export_pet_summary(&ctx.tracker, &args.owner, &args.pet, Path::new(&args.out))?;
    output(
        &json!({ "owner": args.owner, "pet": args.pet, "path": args.out }),
        flags.format,
    )
}
