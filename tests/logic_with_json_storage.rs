use condonery::error::{CommandError, Error, ParseError};
use condonery::logic::Logic;
use condonery::model::{Model, Name};
use condonery::prefs::UserPrefs;
use condonery::store::json::JsonStorage;
use condonery::store::Storage;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, Logic<JsonStorage>) {
    let dir = TempDir::new().unwrap();
    let storage = JsonStorage::new(
        dir.path().join("data").join("condonery.json"),
        dir.path().join("preferences.json"),
    );
    let logic = Logic::new(Model::new(Default::default(), UserPrefs::default()), storage);
    (dir, logic)
}

fn reload(dir: &TempDir) -> JsonStorage {
    JsonStorage::new(
        dir.path().join("data").join("condonery.json"),
        dir.path().join("preferences.json"),
    )
}

#[test]
fn every_successful_command_is_on_disk() {
    let (dir, mut logic) = setup();
    logic
        .execute("add -c n/Alice Pauline p/94351253 e/alice@example.com a/123 Jurong West Ave 6")
        .unwrap();
    logic
        .execute("add n/Sunny Villa a/123 Orchard Rd t/luxury ic/Alice Pauline")
        .unwrap();

    let on_disk = reload(&dir).read_directory().unwrap().unwrap();
    assert_eq!(&on_disk, logic.directory());
}

#[test]
fn renaming_a_client_rewrites_saved_references() {
    let (dir, mut logic) = setup();
    logic
        .execute("add -c n/Alice Pauline p/94351253 e/alice@example.com a/1 Road")
        .unwrap();
    logic
        .execute("add n/Sunny Villa a/123 Orchard Rd ic/Alice Pauline")
        .unwrap();
    logic.execute("edit -c 1 n/Alice Tan").unwrap();

    let content = fs::read_to_string(dir.path().join("data").join("condonery.json")).unwrap();
    assert!(content.contains("\"Alice Tan\""));
    assert!(!content.contains("Alice Pauline"));

    let on_disk = reload(&dir).read_directory().unwrap().unwrap();
    let villa = on_disk
        .properties()
        .get(&Name::new("Sunny Villa").unwrap())
        .unwrap();
    assert!(villa.is_client_interested(&Name::new("Alice Tan").unwrap()));
}

#[test]
fn stale_index_after_find_targets_the_filtered_entry() {
    let (_dir, mut logic) = setup();
    logic.execute("add n/Sunny Villa a/123 Orchard Rd").unwrap();
    logic.execute("add n/Pinnacle Duxton a/1 Cantonment Rd").unwrap();

    logic.execute("find duxton").unwrap();
    let deleted = logic.execute("delete 1").unwrap();

    assert!(deleted.feedback.starts_with("Deleted Property: Pinnacle Duxton"));
    assert!(logic.filtered_properties().is_empty());
    assert_eq!(logic.directory().properties().len(), 1);
}

#[test]
fn errors_keep_their_kind() {
    let (_dir, mut logic) = setup();

    match logic.execute("edit 1") {
        Err(Error::Parse(ParseError::NothingToEdit)) => {}
        other => panic!("unexpected: {:?}", other),
    }
    match logic.execute("delete -c 1") {
        Err(Error::Command(CommandError::InvalidClientIndex)) => {}
        other => panic!("unexpected: {:?}", other),
    }
    match logic.execute("add n/Sunny Villa a/1 Road ic/Nobody") {
        Err(Error::Command(CommandError::ClientNotFound(name))) => assert_eq!(name, "Nobody"),
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn preferences_are_written_on_request() {
    let (dir, mut logic) = setup();
    logic.save_user_prefs().unwrap();

    let written = fs::read_to_string(dir.path().join("preferences.json")).unwrap();
    assert!(written.contains("\"windowWidth\": 740.0"));
    assert!(written.contains("\"directoryFilePath\": \"data/condonery.json\""));
}

#[test]
fn reports_the_file_actually_written() {
    let dir = TempDir::new().unwrap();
    let custom = dir.path().join("elsewhere.json");
    let storage = JsonStorage::new(&custom, dir.path().join("preferences.json"));
    let mut logic = Logic::new(Model::new(Default::default(), UserPrefs::default()), storage);

    logic.execute("add n/Sunny Villa a/123 Orchard Rd").unwrap();

    assert_eq!(logic.directory_file_path(), custom.as_path());
    assert_eq!(
        logic.model().directory_file_path(),
        std::path::Path::new("data/condonery.json")
    );
    assert!(custom.exists());
}
