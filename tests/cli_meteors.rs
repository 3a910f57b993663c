// Binary-level checks for the meteors report tool.

use assert_cmd::Command;
use std::io::Write;

const SAMPLE_CSV: &str = "\
Name,Mass,Year,Coordinates,Fall,Classification
Aachen,\"Quantity[21, \"\"Grams\"\"]\",\"DateObject[{1880}, \"\"Year\"\"]\",\"GeoPosition[{50.775, 6.08333}]\",Fell,L5
Abee,\"Quantity[107000, \"\"Grams\"\"]\",\"DateObject[{1952}, \"\"Year\"\"]\",\"GeoPosition[{54.21667, -113.0}]\",Fell,EH4
Acapulco,\"Quantity[1914, \"\"Grams\"\"]\",\"DateObject[{1976}, \"\"Year\"\"]\",\"GeoPosition[{16.88333, -99.9}]\",Found,Acapulcoite
";

fn sample_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{SAMPLE_CSV}").unwrap();
    file
}

#[test]
fn text_report_prints_sections() {
    let file = sample_file();

    let assert = Command::cargo_bin("meteors")
        .unwrap()
        .arg(file.path())
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("Cleaned records: 3"));
    assert!(stdout.contains("Heaviest meteorites"));
    assert!(stdout.contains("Abee"));
    assert!(stdout.contains("Fell vs Found"));
}

#[test]
fn json_report_is_valid_json() {
    let file = sample_file();

    let assert = Command::cargo_bin("meteors")
        .unwrap()
        .arg(file.path())
        .arg("--json")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(value["total_records"], 3);
    assert_eq!(value["heaviest"][0]["name"], "Abee");
    assert_eq!(value["mass_summary"]["max_g"], 107000.0);
}

#[test]
fn top_flag_limits_result_rows() {
    let file = sample_file();

    let assert = Command::cargo_bin("meteors")
        .unwrap()
        .arg(file.path())
        .args(["--json", "-t", "1"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["heaviest"].as_array().unwrap().len(), 1);
}

#[test]
fn missing_file_fails_with_error() {
    Command::cargo_bin("meteors")
        .unwrap()
        .arg("/nonexistent/landings.csv")
        .assert()
        .failure();
}
