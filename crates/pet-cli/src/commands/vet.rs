use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::VetCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `petcare vet`.
pub fn handle(
    action: &VetCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let (owner, pet) = match action {
        VetCommands::Vaccination { owner, pet, name } => {
            ctx.pet_mut(owner, pet)?.vet_record_mut().add_vaccination(name)?;
            (owner, pet)
        }
        VetCommands::Appointment { owner, pet, note } => {
            ctx.pet_mut(owner, pet)?.vet_record_mut().add_appointment(note)?;
            (owner, pet)
        }
    };

    let record = ctx.pet(owner, pet)?.vet_record();
    output(
        &json!({
            "owner": owner,
            "pet": pet,
            "vaccinations": record.vaccinations(),
            "appointments": record.appointments(),
        }),
        flags.format,
    )
}
