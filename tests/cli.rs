use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

const BINARY_NAME: &str = "vitalboard";

/// Helper to get a temporary home directory, isolating the config file.
fn temp_home() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Write a data fixture under the given directory.
fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

const FULL_CSV: &str = "Date,Blood Pressure,Heart Rate,Weight\n\
                        2024-03-01,120/80,72,70.5\n\
                        2024-03-02,125/82,75,70.1\n";

const NO_WEIGHT_CSV: &str = "Date,Blood Pressure,Heart Rate\n\
                             2024-03-01,120/80,72\n";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
fn check_reports_a_valid_csv_file() {
    let home = temp_home();
    let data = write_fixture(&home, "vitals.csv", FULL_CSV);

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("check").arg("--data").arg(&data);
    cmd.assert()
        .success()
        .stdout(contains("format CSV, 2 rows, 4 columns"))
        .stdout(contains("column `Weight`: present"));
}

#[test]
fn check_flags_missing_chart_columns() {
    let home = temp_home();
    let data = write_fixture(&home, "vitals.csv", NO_WEIGHT_CSV);

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("check").arg("--data").arg(&data);
    cmd.assert()
        .success()
        .stdout(contains("column `Weight`: missing"));
}

#[test]
fn check_fails_on_malformed_json() {
    let home = temp_home();
    let data = write_fixture(&home, "vitals.json", "this is not json");

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("check").arg("--data").arg(&data);
    cmd.assert()
        .failure()
        .stderr(contains("malformed JSON"));
}

#[test]
fn check_treats_unknown_extensions_as_json() {
    let home = temp_home();

    // Valid JSON behind an unknown extension loads fine
    let good = write_fixture(&home, "vitals.txt", r#"[{"Date": "2024-03-01", "Weight": 70}]"#);
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("check").arg("--data").arg(&good);
    cmd.assert()
        .success()
        .stdout(contains("unknown (parsed as JSON)"));

    // Anything else fails the JSON parse
    let bad = write_fixture(&home, "vitals.dat", "Date,Weight\n2024-03-01,70\n");
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("check").arg("--data").arg(&bad);
    cmd.assert().failure().stderr(contains("malformed JSON"));
}

#[test]
fn headless_pass_renders_every_section_with_data() {
    let home = temp_home();
    let data = write_fixture(&home, "vitals.csv", FULL_CSV);

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("start")
        .arg("--headless")
        .arg("--data")
        .arg(&data)
        .env("HOME", home.path());
    cmd.assert()
        .success()
        .stdout(contains("[TABLE] 2 rows x 4 columns"))
        .stdout(contains("[CHART] Blood Pressure Over Time (line, 2 points)"))
        .stdout(contains("[CHART] Weight Trend (area, 2 points)"))
        .stdout(contains("[MAP] 3 hospital locations"))
        .stdout(contains("[ERROR-DEMO] FileNotFound: patient data file not found"))
        .stdout(contains("[CAPTION] This dashboard is for demo purposes only."))
        .stdout(contains("Loaded 2 rows"));
}

#[test]
fn headless_pass_without_data_skips_table_and_charts() {
    let home = temp_home();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("start").arg("--headless").env("HOME", home.path());
    let assert = cmd.assert().success();
    let output = assert.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("[FORM] awaiting submission"));
    assert!(stdout.contains("[PLOT] sample chart with 4 points"));
    assert!(stdout.contains("[ERROR-DEMO]"));
    assert!(!stdout.contains("[TABLE]"));
    assert!(!stdout.contains("[CHART]"));
}

#[test]
fn headless_pass_faults_on_a_missing_weight_column() {
    let home = temp_home();
    let data = write_fixture(&home, "vitals.csv", NO_WEIGHT_CSV);

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("start")
        .arg("--headless")
        .arg("--data")
        .arg(&data)
        .env("HOME", home.path());
    let assert = cmd.assert().success();
    let output = assert.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);

    // The pass halts at the weight chart: the two line charts render, the
    // sections after the fault do not.
    assert!(stdout.contains("[CHART] Heart Rate Over Time"));
    assert!(stdout.contains("[FAULT] column `Weight` not found"));
    assert!(!stdout.contains("[MAP]"));
    assert!(!stdout.contains("[CAPTION]"));
}

#[test]
fn reset_removes_the_config_file() {
    let home = temp_home();
    let config_dir = home.path().join(".vitalboard");
    fs::create_dir_all(&config_dir).expect("create config dir");
    let config_path = config_dir.join("config.json");
    fs::write(&config_path, r##"{"theme": "#2e86de", "data_path": null}"##)
        .expect("write config");

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("reset").env("HOME", home.path());
    cmd.assert()
        .success()
        .stdout(contains("Clearing saved configuration file..."));

    assert!(!config_path.exists());
}
