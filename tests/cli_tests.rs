mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use std::error::Error;

#[test]
fn prints_month_table_for_fixed_date() -> Result<(), Box<dyn Error>> {
    let payload = common::write_payload("summary.json", common::SUMMARY_PAYLOAD);
    let config = common::write_payload("config.json", r#"{"locale":"en-US"}"#);

    let mut cmd = Command::cargo_bin("tally_cli")?;
    cmd.arg(&payload)
        .args(["--frame", "month", "--now", "2024-03-15", "--plain", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("This month (from 2024-03-01)")
                .and(predicate::str::contains("Week 5"))
                .and(predicate::str::contains("Total income:   $1250.00"))
                .and(predicate::str::contains("$400.40"))
                .and(predicate::str::contains("Week 6").not()),
        );
    Ok(())
}

#[test]
fn json_output_uses_config_labels() -> Result<(), Box<dyn Error>> {
    let payload = common::write_payload("summary.json", common::SUMMARY_PAYLOAD);
    let config = common::write_payload(
        "config.json",
        r#"{"locale":"fr-FR","currency_symbol":"€","default_time_frame":"week","label_overrides":{"mon":"lun."}}"#,
    );

    let mut cmd = Command::cargo_bin("tally_cli")?;
    let output = cmd
        .arg(&payload)
        .args(["--now", "2024-03-15", "--json", "--config"])
        .arg(&config)
        .output()?;
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(summary["time_frame"], "week");
    assert_eq!(summary["period"]["start"], "2024-03-11");
    assert_eq!(summary["chart"]["labels"][0], "lun.");
    assert_eq!(summary["chart"]["labels"].as_array().map(Vec::len), Some(7));
    Ok(())
}

#[test]
fn unknown_frame_exits_with_error() -> Result<(), Box<dyn Error>> {
    let payload = common::write_payload("summary.json", common::SUMMARY_PAYLOAD);

    let mut cmd = Command::cargo_bin("tally_cli")?;
    cmd.arg(&payload)
        .args(["--frame", "decade"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Unknown time frame `decade`"));
    Ok(())
}

#[test]
fn missing_payload_path_prints_usage() -> Result<(), Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("tally_cli")?;
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("missing payload path").and(predicate::str::contains("Usage:")));
    Ok(())
}
