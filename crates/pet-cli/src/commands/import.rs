use std::path::Path;

use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImportArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `petcare import`.
pub fn handle(args: &ImportArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = pet_store::import_tasks_csv(&mut ctx.tracker, Path::new(&args.path))
        .with_context(|| format!("failed to import {}", args.path))?;
    output(&report, flags.format)
}
