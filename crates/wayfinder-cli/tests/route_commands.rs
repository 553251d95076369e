use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .join(name)
        .canonicalize()
        .expect("fixture world present")
}

fn prepare_command(fixture: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("wayfinder");
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .arg("--world")
        .arg(fixture_path(fixture));
    cmd
}

#[test]
fn route_prefers_quicker_detour() {
    let mut cmd = prepare_command("world.json");
    cmd.args(["route", "--from", "Forgotten Graveyard", "--to", "Bone Crypt"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Route: Forgotten Graveyard -> Bone Crypt (3 hops, 4 hours, danger 65)",
        ))
        .stdout(predicate::str::contains("  @ Forgotten Graveyard (1 hour, danger: 15)"))
        .stdout(predicate::str::contains("  -> Weeping Marsh"))
        .stdout(predicate::str::contains("  * Bone Crypt"));
}

#[test]
fn route_accepts_numeric_ids() {
    let mut cmd = prepare_command("world.json");
    cmd.args(["route", "--from", "7", "--to", "2"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("(2 hops, 11 hours, danger 10)"));
}

#[test]
fn route_marks_locked_hops() {
    let mut cmd = prepare_command("world.json");
    cmd.args(["route", "--from", "Hollow Keep", "--to", "Death Spire"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[requires spire_sigil]"));
}

#[test]
fn respecting_locks_blocks_sealed_route() {
    let mut cmd = prepare_command("world.json");
    cmd.args([
        "route",
        "--from",
        "Forgotten Graveyard",
        "--to",
        "Death Spire",
        "--respect-locks",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "No route found between Forgotten Graveyard and Death Spire.",
        ));
}

#[test]
fn unlocked_requirement_reopens_route() {
    let mut cmd = prepare_command("world.json");
    cmd.args([
        "route",
        "--from",
        "Forgotten Graveyard",
        "--to",
        "Death Spire",
        "--respect-locks",
        "--unlocked",
        "spire_sigil",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("(5 hops, 10 hours, danger 160)"));
}

#[test]
fn json_route_output_is_structured() {
    let mut cmd = prepare_command("world.json");
    cmd.args(["--format", "json", "route", "--from", "1", "--to", "3"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["total_time"], 4);
    assert_eq!(value["total_danger"], 65);
    assert_eq!(value["danger_rating"], "high");
    assert_eq!(value["steps"].as_array().map(Vec::len), Some(4));
}

#[test]
fn unknown_location_error_is_friendly() {
    let mut cmd = prepare_command("world.json");
    cmd.args(["route", "--from", "Forgotten Graveyard", "--to", "Bone Cript"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown location: Bone Cript"))
        .stderr(predicate::str::contains("Did you mean"));
}

#[test]
fn routing_to_current_location_is_rejected() {
    let mut cmd = prepare_command("world.json");
    cmd.args(["route", "--from", "Ashbrook Village", "--to", "2"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("You are already at Ashbrook Village"));
}

#[test]
fn unreachable_destination_fails() {
    let mut cmd = prepare_command("world_disconnected.json");
    cmd.args(["route", "--from", "Forgotten Graveyard", "--to", "Lighthouse"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No route found"));
}
