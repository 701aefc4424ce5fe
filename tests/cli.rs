#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const WINNING_ROUTE: &str = "go West
get Picture
go West
get Fruit
go East
go South
get Capitans Hat
go West
get Ancient Armor
go West
get Ancient Sword
go North
get Shiny Object
go South
go East
go East
go East
go East
go East
get Pirate Blaster
go West
go North
";

fn odyssey() -> Command {
    Command::cargo_bin("space-odyssey").unwrap()
}

/// A temp directory holding a two-room world, optionally broken.
fn tiny_world(target: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tiny.toml");
    fs::write(
        &path,
        format!(
            r#"[world]
name = "Tiny"
start_room = "Hall"
goal_room = "Vault"
win_text = "The vault opens."
lose_text = "The vault stays shut."

[[room]]
name = "Hall"
item = "Key"

[[room.exit]]
direction = "North"
target = "{target}"

[[room]]
name = "Vault"
"#
        ),
    )
    .unwrap();
    (dir, path)
}

// ---------------------------------------------------------------------------
// --check
// ---------------------------------------------------------------------------

#[test]
fn check_builtin_world() {
    odyssey()
        .arg("--check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Space Odyssey: 12 rooms, 7 items"));
}

#[test]
fn check_rejects_dangling_exit() {
    let (_dir, path) = tiny_world("Cellar");
    odyssey()
        .arg("--check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("targets missing room 'Cellar'"));
}

#[test]
fn missing_world_file_fails() {
    odyssey()
        .arg("/no/such/world.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read world file"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn intro_and_status_are_shown() {
    odyssey()
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Space Odyssey!"))
        .stdout(predicate::str::contains(
            "You are in the Hibernation Chambers.",
        ))
        .stdout(predicate::str::contains("Inventory: []"))
        .stdout(predicate::str::contains("Goodbye."));
}

#[test]
fn invalid_move_is_reported() {
    odyssey()
        .write_stdin("go North\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid Move!"))
        .stdout(predicate::str::contains("Invalid input"));
}

#[test]
fn reaching_the_throne_empty_handed_loses() {
    odyssey()
        .write_stdin("go West\ngo South\ngo East\ngo East\ngo North\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You have lost the game!"))
        .stdout(predicate::str::contains("Goodbye.").not());
}

#[test]
fn collecting_everything_wins() {
    odyssey()
        .write_stdin(WINNING_ROUTE)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Congrats! you have collected all items and defeated the Captain",
        ))
        .stdout(predicate::str::contains("lost").not());
}

#[test]
fn end_of_input_ends_session() {
    odyssey()
        .write_stdin("go West\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You are in the Storage."))
        .stdout(predicate::str::contains("Goodbye."));
}

#[test]
fn custom_exit_word() {
    odyssey()
        .args(["--exit-word", "quit"])
        .write_stdin("exit\nquit\ngo West\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("or quit to exit the game"))
        .stdout(predicate::str::contains("Invalid input"))
        .stdout(predicate::str::contains("You are in the Storage.").not());
}

#[test]
fn plays_a_world_file() {
    let (_dir, path) = tiny_world("Vault");
    odyssey()
        .arg(&path)
        .write_stdin("get Key\ngo North\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You see a Key"))
        .stdout(predicate::str::contains("The vault opens."));
}

#[test]
fn undecodable_input_does_not_end_session() {
    odyssey()
        .write_stdin(&b"go West\n\xff\ngo West\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("You are in the Cockpit."))
        .stdout(predicate::str::contains("Goodbye."));
}
