use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn condonery(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("condonery").unwrap();
    cmd.env("CONDONERY_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn data_file(home: &Path) -> std::path::PathBuf {
    home.join("data").join("condonery.json")
}

#[test]
fn one_shot_add_writes_the_data_file() {
    let home = TempDir::new().unwrap();

    condonery(home.path())
        .args(["add", "n/Sunny Villa", "a/123 Orchard Rd", "t/luxury"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "New property added: Sunny Villa; Address: 123 Orchard Rd; Tags: [luxury]",
        ))
        .stdout(predicate::str::contains("1. Sunny Villa"));

    let saved = fs::read_to_string(data_file(home.path())).unwrap();
    assert!(saved.contains("\"name\": \"Sunny Villa\""));
    assert!(saved.contains("\"interestedClients\": []"));
    assert!(home.path().join("preferences.json").exists());
}

#[test]
fn one_shot_failure_exits_with_error() {
    let home = TempDir::new().unwrap();
    condonery(home.path())
        .args(["add", "n/Sunny Villa", "a/123 Orchard Rd"])
        .assert()
        .success();

    condonery(home.path())
        .args(["add", "n/Sunny Villa", "a/123 Orchard Rd"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: This property already exists in the directory",
        ));
}

#[test]
fn unknown_command_fails() {
    let home = TempDir::new().unwrap();
    condonery(home.path())
        .args(["frobnicate", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown command"));
}

#[test]
fn session_runs_commands_until_exit() {
    let home = TempDir::new().unwrap();
    let script = "\
add -c n/Alice Pauline p/94351253 e/alice@example.com a/123 Jurong West Ave 6
add n/Sunny Villa a/123 Orchard Rd ic/Alice Pauline
add n/Sunny Villa a/123 Orchard Rd
find villa
exit
list
";

    condonery(home.path())
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("New client added: Alice Pauline"))
        .stdout(predicate::str::contains("interested: Alice Pauline"))
        .stdout(predicate::str::contains("1 properties listed!"))
        .stdout(predicate::str::contains("Exiting Condonery as requested ..."))
        .stdout(predicate::str::contains("Listed all properties").not())
        .stderr(predicate::str::contains(
            "This property already exists in the directory",
        ));
}

#[test]
fn session_skips_lines_that_are_not_utf8() {
    let home = TempDir::new().unwrap();
    condonery(home.path())
        .write_stdin(&b"list\n\xff\xfe\nlist -c\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("Listed all properties"))
        .stdout(predicate::str::contains("Listed all clients"))
        .stderr(predicate::str::contains("Input is not valid UTF-8"));
}

#[test]
fn session_ends_at_end_of_input() {
    let home = TempDir::new().unwrap();
    condonery(home.path())
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Opened help window."))
        .stdout(predicate::str::contains("delete -c: Deletes the client"));
}

#[test]
fn data_survives_between_runs() {
    let home = TempDir::new().unwrap();
    condonery(home.path())
        .write_stdin("add n/Sunny Villa a/123 Orchard Rd\nadd n/Sunny Loft a/8 Marine Parade\n")
        .assert()
        .success();

    condonery(home.path())
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted Property: Sunny Villa"))
        .stdout(predicate::str::contains("1. Sunny Loft"));
}

#[test]
fn data_flag_overrides_the_preferences() {
    let home = TempDir::new().unwrap();
    let custom = home.path().join("elsewhere.json");

    condonery(home.path())
        .arg("--data")
        .arg(&custom)
        .args(["add", "-c", "n/Benson Meier", "p/98765432", "e/benson@example.com", "a/2 Road"])
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!data_file(home.path()).exists());
}

#[test]
fn broken_data_file_is_fatal() {
    let home = TempDir::new().unwrap();
    let path = data_file(home.path());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{ not json").unwrap();

    condonery(home.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Serialization error"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn verbose_logs_to_stderr() {
    let home = TempDir::new().unwrap();
    condonery(home.path())
        .args(["-v", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Listed all properties"))
        .stderr(predicate::str::contains("executing"));
}
