use crate::extract;
use crate::record::RawRecord;
use serde::Serialize;

/// Upper sanity limit on mass: 6e7 g (60 tonnes). Values above it are
/// treated as data errors and excluded.
pub const MASS_UPPER_LIMIT_G: f64 = 6.0e7;
/// Accepted recorded-year range.
pub const YEAR_MIN: i32 = 860;
pub const YEAR_MAX: i32 = 2025;

const UNKNOWN: &str = "Unknown";

/// A fully cleaned observation: extraction succeeded and the range filters
/// passed. Coordinates stay optional; no downstream aggregate requires them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Meteorite {
    pub name: String,
    pub mass_g: f64,
    pub mass_kg: f64,
    pub year: i32,
    pub decade: i32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub fall: String,
    pub classification: String,
}

/// Extraction stage: parse the templated fields of one raw row.
/// Returns `None` when mass or year cannot be extracted.
pub fn extract_record(raw: &RawRecord) -> Option<Meteorite> {
    let mass_g = raw.mass.as_deref().and_then(extract::mass_grams)?;
    let year = raw.year.as_deref().and_then(extract::year)? as i32;
    let coords = raw.coordinates.as_deref().and_then(extract::coordinates);

    Some(Meteorite {
        name: raw.name.clone(),
        mass_g,
        mass_kg: mass_g / 1000.0,
        year,
        decade: (year / 10) * 10,
        latitude: coords.map(|(lat, _)| lat),
        longitude: coords.map(|(_, lon)| lon),
        fall: raw.fall.clone().unwrap_or_else(|| UNKNOWN.to_string()),
        classification: raw
            .classification
            .clone()
            .unwrap_or_else(|| UNKNOWN.to_string()),
    })
}

/// Range-filter stage. Idempotent: applying it to an already-clean
/// collection returns the collection unchanged.
pub fn filter_valid(records: Vec<Meteorite>) -> Vec<Meteorite> {
    records
        .into_iter()
        .filter(|m| m.mass_g > 0.0 && m.mass_g <= MASS_UPPER_LIMIT_G)
        .filter(|m| (YEAR_MIN..=YEAR_MAX).contains(&m.year))
        .collect()
}

/// Full pipeline: extract every row, drop rows missing mass or year, then
/// apply the range filters. A row either survives every stage or is gone.
pub fn clean_records(raw: &[RawRecord]) -> Vec<Meteorite> {
    let extracted: Vec<Meteorite> = raw.iter().filter_map(extract_record).collect();
    log::info!(
        "dropped {} rows with missing mass or year",
        raw.len() - extracted.len()
    );

    let extracted_len = extracted.len();
    let cleaned = filter_valid(extracted);
    log::info!(
        "filtered {} rows outside mass/year bounds, {} remain",
        extracted_len - cleaned.len(),
        cleaned.len()
    );

    cleaned
}
