// End-to-end dataset path: CSV on disk -> raw records -> cleaned collection
// -> report, using the same templated field syntax as the real dataset.

use std::io::Write;
use wordfall::clean::{clean_records, filter_valid};
use wordfall::record::load_records;
use wordfall::report::{render_text, Report};

const SAMPLE_CSV: &str = "\
Name,Mass,Year,Coordinates,Fall,Classification
Aachen,\"Quantity[21, \"\"Grams\"\"]\",\"DateObject[{1880}, \"\"Year\"\"]\",\"GeoPosition[{50.775, 6.08333}]\",Fell,L5
Aarhus,\"Quantity[720, \"\"Grams\"\"]\",\"DateObject[{1951}, \"\"Year\"\"]\",\"GeoPosition[{56.18333, 10.23333}]\",Fell,H6
Abee,\"Quantity[107000, \"\"Grams\"\"]\",\"DateObject[{1952}, \"\"Year\"\"]\",\"GeoPosition[{54.21667, -113.}]\",Fell,EH4
Adhi Kot,\"Quantity[4239, \"\"Grams\"\"]\",\"DateObject[{1919}, \"\"Year\"\"]\",\"GeoPosition[{32.1, 71.8}]\",Fell,EH4
Acapulco,\"Quantity[1914, \"\"Grams\"\"]\",\"DateObject[{1976}, \"\"Year\"\"]\",\"GeoPosition[{16.88333, -99.9}]\",Found,Acapulcoite
Weightless,\"Quantity[0, \"\"Grams\"\"]\",\"DateObject[{1976}, \"\"Year\"\"]\",\"GeoPosition[{0., 0.}]\",Found,L6
Tomorrow,\"Quantity[100, \"\"Grams\"\"]\",\"DateObject[{2030}, \"\"Year\"\"]\",\"GeoPosition[{0., 0.}]\",Found,L6
Nameless,,\"DateObject[{1950}, \"\"Year\"\"]\",,Found,L6
Garbled,not a mass,\"DateObject[{1950}, \"\"Year\"\"]\",,Found,L6
";

fn sample_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{SAMPLE_CSV}").unwrap();
    file
}

#[test]
fn pipeline_keeps_only_valid_rows() {
    let file = sample_file();
    let raw = load_records(file.path()).unwrap();
    assert_eq!(raw.len(), 9);

    let cleaned = clean_records(&raw);
    let names: Vec<&str> = cleaned.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Aachen", "Aarhus", "Abee", "Adhi Kot", "Acapulco"]);
}

#[test]
fn extraction_matches_known_values() {
    let file = sample_file();
    let cleaned = clean_records(&load_records(file.path()).unwrap());

    let adhi_kot = cleaned.iter().find(|m| m.name == "Adhi Kot").unwrap();
    assert_eq!(adhi_kot.mass_g, 4239.0);
    assert_eq!(adhi_kot.year, 1919);
    assert_eq!(adhi_kot.decade, 1910);
    assert_eq!(adhi_kot.latitude, Some(32.1));
    assert_eq!(adhi_kot.longitude, Some(71.8));
    assert_eq!(adhi_kot.mass_kg, 4.239);
}

#[test]
fn cleaning_is_idempotent() {
    let file = sample_file();
    let cleaned = clean_records(&load_records(file.path()).unwrap());

    assert_eq!(filter_valid(cleaned.clone()), cleaned);
}

#[test]
fn report_reflects_the_cleaned_collection() {
    let file = sample_file();
    let cleaned = clean_records(&load_records(file.path()).unwrap());
    let report = Report::build(&cleaned, 3);

    assert_eq!(report.total_records, 5);
    assert_eq!(report.heaviest[0].name, "Abee");
    assert_eq!(report.fall_counts[0], ("Fell".to_string(), 4));
    assert_eq!(report.fall_counts[1], ("Found".to_string(), 1));

    // EH4 mean = (107000 + 4239) / 2
    let (top_class, top_mean) = &report.mean_mass_by_classification[0];
    assert_eq!(top_class, "EH4");
    assert_eq!(*top_mean, 55619.5);

    let summary = report.mass_summary.as_ref().unwrap();
    assert_eq!(summary.max_g, 107000.0);
    assert_eq!(summary.total_g, 21.0 + 720.0 + 107000.0 + 4239.0 + 1914.0);
    assert_eq!(summary.median_g, 1914.0);
}

#[test]
fn text_report_contains_every_section() {
    let file = sample_file();
    let cleaned = clean_records(&load_records(file.path()).unwrap());
    let report = Report::build(&cleaned, 3);

    let mut out = Vec::new();
    render_text(&report, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    for section in [
        "Cleaned records: 5",
        "Heaviest meteorites",
        "Fell vs Found",
        "Classifications by average mass",
        "Most common classifications",
        "Discoveries by decade",
        "Mass statistics (grams)",
    ] {
        assert!(text.contains(section), "missing section {section:?}");
    }
}
