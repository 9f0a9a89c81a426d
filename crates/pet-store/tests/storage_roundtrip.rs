//! Save/load behaviour of the file store, including backup recovery.

use std::fs;

use chrono::NaiveDate;
use pet_core::document::TrackerDocument;
use pet_core::entities::{CareTask, Owner, Pet, Species};
use pet_core::schedule::Schedule;
use pet_core::tracker::Tracker;
use pet_schema::SchemaRegistry;
use pet_store::{LoadOutcome, Storage};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_tracker() -> Tracker {
    let mut luna = Pet::new(Species::Dog, "Luna", "Lab", 10.0, 5.0).unwrap();
    let mut feed = CareTask::new("Feed", Schedule::new(1, date(2025, 1, 1)).unwrap(), "").unwrap();
    feed.complete(date(2025, 1, 2));
    luna.add_task(feed).unwrap();
    luna.vet_record_mut().add_vaccination("Rabies").unwrap();

    let mut owner = Owner::new("Amar", Some("amar@example.com".into())).unwrap();
    owner.add_pet(luna).unwrap();

    let mut tracker = Tracker::new();
    tracker.register_owner(owner);
    tracker
}

fn storage() -> (TempDir, Storage) {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::new(dir.path().join("data").join("data.json")).unwrap();
    (dir, storage)
}

#[test]
fn missing_file_loads_fresh() {
    let (_dir, storage) = storage();
    assert_eq!(storage.load(), LoadOutcome::Fresh);
    assert!(storage.load_tracker().is_none());
}

#[test]
fn save_then_load_roundtrips() {
    let (_dir, storage) = storage();
    let tracker = sample_tracker();

    storage.save(&tracker).unwrap();

    assert_eq!(storage.load(), LoadOutcome::Primary(tracker));
}

#[test]
fn first_save_writes_no_backup() {
    let (_dir, storage) = storage();
    storage.save(&sample_tracker()).unwrap();
    assert!(storage.data_file().exists());
    assert!(!storage.backup_file().exists());
}

#[test]
fn second_save_backs_up_previous_file() {
    let (_dir, storage) = storage();
    storage.save(&Tracker::new()).unwrap();
    let first = fs::read_to_string(storage.data_file()).unwrap();

    storage.save(&sample_tracker()).unwrap();

    assert_eq!(fs::read_to_string(storage.backup_file()).unwrap(), first);
}

#[test]
fn corrupted_file_recovers_from_backup() {
    let (_dir, storage) = storage();
    let tracker = sample_tracker();
    storage.save(&tracker).unwrap();
    storage.save(&tracker).unwrap();

    fs::write(storage.data_file(), "THIS IS NOT JSON").unwrap();

    assert_eq!(storage.load(), LoadOutcome::Backup(tracker));
}

#[test]
fn invalid_domain_data_falls_back_to_backup() {
    let (_dir, storage) = storage();
    let tracker = sample_tracker();
    storage.save(&tracker).unwrap();
    storage.save(&tracker).unwrap();

    let broken = fs::read_to_string(storage.data_file())
        .unwrap()
        .replace("\"Dog\"", "\"Dragon\"");
    fs::write(storage.data_file(), broken).unwrap();

    assert_eq!(storage.load(), LoadOutcome::Backup(tracker));
}

#[test]
fn corrupted_without_backup_loads_fresh() {
    let (_dir, storage) = storage();
    fs::write(storage.data_file(), "{ nope").unwrap();
    assert_eq!(storage.load(), LoadOutcome::Fresh);
}

#[test]
fn corrupted_file_and_backup_load_fresh() {
    let (_dir, storage) = storage();
    fs::write(storage.data_file(), "{ nope").unwrap();
    fs::write(storage.backup_file(), "also nope").unwrap();
    assert_eq!(storage.load(), LoadOutcome::Fresh);
}

#[test]
fn saved_file_validates_against_schema() {
    let (_dir, storage) = storage();
    storage.save(&sample_tracker()).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(storage.data_file()).unwrap()).unwrap();

    SchemaRegistry::new()
        .validate("tracker_document", &value)
        .expect("saved file should match schema");
    let document: TrackerDocument = serde_json::from_value(value).unwrap();
    assert_eq!(document.owners[0].pets[0].pet_type, "Dog");
    assert_eq!(
        document.owners[0].pets[0].tasks[0].schedule.last_completed,
        Some(date(2025, 1, 2))
    );
}

#[test]
fn legacy_document_without_optional_fields_loads() {
    let (_dir, storage) = storage();
    fs::write(
        storage.data_file(),
        r#"{"owners":[{"name":"Amar","pets":[{"type":"Cat","name":"Tom","breed":"Tabby","weight_kg":4,"age":2,"tasks":[{"label":"Litter","schedule":{"every_days":2,"start":"2025-01-01","last_completed":null}}]}]}]}"#,
    )
    .unwrap();

    let tracker = storage.load_tracker().expect("document should load");
    let pet = tracker.get_owner("Amar").unwrap().get_pet("Tom").unwrap();
    assert_eq!(pet.species(), Species::Cat);
    assert_eq!(pet.task("Litter").unwrap().next_due_date(), date(2025, 1, 1));
}
