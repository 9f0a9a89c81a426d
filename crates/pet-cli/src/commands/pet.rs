use pet_core::entities::{Pet, Species};
use pet_core::responses::{PetInfo, PetSummary};
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PetCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `petcare pet`.
pub fn handle(
    action: &PetCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PetCommands::Add {
            owner,
            name,
            species,
            breed,
            weight,
            age,
        } => {
            let species: Species = species.parse()?;
            let pet = Pet::new(species, name, breed.trim(), *weight, *age)?;
            let summary = PetSummary::from(&pet);
            ctx.owner_mut(owner)?.add_pet(pet)?;
            output(&summary, flags.format)
        }
        PetCommands::Remove { owner, name } => {
            let removed = ctx.owner_mut(owner)?.remove_pet(name.trim()).is_some();
            output(
                &json!({ "owner": owner, "pet": name.trim(), "removed": removed }),
                flags.format,
            )
        }
        PetCommands::List { owner } => {
            let pets: Vec<PetSummary> =
                ctx.owner(owner)?.pets().iter().map(PetSummary::from).collect();
            output(&pets, flags.format)
        }
        PetCommands::Info { owner, name } => {
            output(&PetInfo::from(ctx.pet(owner, name)?), flags.format)
        }
    }
}
