use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn main_help_describes_the_tour_and_subcommands() {
    Command::cargo_bin("cosmodeck")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Step through the epochs of cosmic history",
        ))
        .stdout(predicate::str::contains("epochs"));
}

#[test]
fn epochs_help_shows_format_flag() {
    Command::cargo_bin("cosmodeck")
        .unwrap()
        .args(["epochs", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("plain"))
        .stdout(predicate::str::contains("json"));
}

#[test]
fn version_flag_works() {
    Command::cargo_bin("cosmodeck")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cosmodeck"));
}

#[test]
fn unknown_subcommand_fails() {
    Command::cargo_bin("cosmodeck")
        .unwrap()
        .arg("simulate")
        .assert()
        .failure();
}
