use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// One meteorite observation as it appears in the CSV, templated text fields
/// and all. Numeric payloads are pulled out later by `extract`.
#[derive(Clone, Debug, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Mass")]
    pub mass: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Coordinates")]
    pub coordinates: Option<String>,
    #[serde(rename = "Fall")]
    pub fall: Option<String>,
    #[serde(rename = "Classification")]
    pub classification: Option<String>,
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Read all rows from a meteorite-landings CSV.
///
/// Structural problems (missing file, bad header, ragged rows) are fatal;
/// messy field *contents* are not — they survive into `RawRecord` as text.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<RawRecord>, DataError> {
    let mut reader = csv::Reader::from_path(&path)?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: RawRecord = row?;
        records.push(record);
    }

    log::info!(
        "loaded {} rows from {}",
        records.len(),
        path.as_ref().display()
    );

    Ok(records)
}
