use assert_cmd::Command;
use predicates::prelude::*;

const EXPECTED_ORDER: [&str; 9] = [
    "Big Bang Singularity",
    "Inflation",
    "Nucleosynthesis",
    "Recombination",
    "Dark Ages & First Stars",
    "Galaxy Formation Peak",
    "Present Day",
    "Future - Continued Expansion",
    "Future - Heat Death?",
];

fn epochs_stdout(args: &[&str]) -> String {
    let output = Command::cargo_bin("cosmodeck")
        .unwrap()
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn plain_output_lists_every_epoch_in_catalog_order() {
    let stdout = epochs_stdout(&["epochs"]);

    let mut cursor = 0;
    for name in EXPECTED_ORDER {
        let position = stdout[cursor..]
            .find(name)
            .unwrap_or_else(|| panic!("{name} missing or out of order"));
        cursor += position + name.len();
    }
}

#[test]
fn plain_output_shows_placeholder_for_missing_temperature() {
    Command::cargo_bin("cosmodeck")
        .unwrap()
        .arg("epochs")
        .assert()
        .success()
        .stdout(predicate::str::contains("temp:  n/a"))
        .stdout(predicate::str::contains("temp:  2.7 K (CMB)"));
}

#[test]
fn json_output_parses_with_expected_fields() {
    let stdout = epochs_stdout(&["epochs", "--format", "json"]);
    let records: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let records = records.as_array().unwrap();

    assert_eq!(records.len(), 9);
    assert_eq!(records[0]["name"], "Big Bang Singularity");
    assert_eq!(records[0]["temperature"], serde_json::Value::Null);
    assert_eq!(records[0]["visual_style"], "singularity");
    assert_eq!(records[2]["visual_style"], "plasma-soup");
    assert_eq!(records[8]["visual_style"], "empty-cold");

    // Prediction notes ride along only on the speculative entries.
    for (position, record) in records.iter().enumerate() {
        let has_note = record.get("note").is_some();
        assert_eq!(has_note, position >= 7, "note policy broken at {position}");
    }
}
