use std::fs;

use chrono::NaiveDate;
use pet_core::document::PetDocument;
use pet_core::entities::{CareTask, Owner, Pet, Species};
use pet_core::errors::CoreError;
use pet_core::schedule::Schedule;
use pet_core::tracker::Tracker;
use pet_store::{StoreError, export_pet_summary};
use pretty_assertions::assert_eq;

fn tracker() -> Tracker {
    let mut kiwi = Pet::new(Species::Bird, "Kiwi", "Budgie", 0.5, 1.0).unwrap();
    kiwi.add_task(
        CareTask::new(
            "Seed",
            Schedule::new(1, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()).unwrap(),
            "Millet",
        )
        .unwrap(),
    )
    .unwrap();
    let mut owner = Owner::new("Bea", None).unwrap();
    owner.add_pet(kiwi).unwrap();
    let mut tracker = Tracker::new();
    tracker.register_owner(owner);
    tracker
}

#[test]
fn exported_pet_decodes_to_the_same_pet() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("exports").join("kiwi.json");
    let tracker = tracker();

    export_pet_summary(&tracker, "Bea", "Kiwi", &out).unwrap();

    let document: PetDocument = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let pet = Pet::try_from(document).unwrap();
    assert_eq!(&pet, tracker.get_owner("Bea").unwrap().get_pet("Kiwi").unwrap());
}

#[test]
fn unknown_owner_or_pet_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("x.json");
    let tracker = tracker();

    let err = export_pet_summary(&tracker, "Nobody", "Kiwi", &out).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Core(CoreError::NotFound { ref entity_type, .. }) if entity_type == "owner"
    ));

    let err = export_pet_summary(&tracker, "Bea", "Ghost", &out).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Core(CoreError::NotFound { ref entity_type, .. }) if entity_type == "pet"
    ));
    assert!(!out.exists());
}
