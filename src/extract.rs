use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Mass fields look like: Quantity[4239, "Grams"]
    static ref MASS_RE: Regex =
        Regex::new(r"Quantity\[\s*([0-9]+(?:\.[0-9]+)?)\s*,").unwrap();
    // Year fields look like: DateObject[{1919}, "Year", ...]
    static ref YEAR_RE: Regex = Regex::new(r"DateObject\[\{\s*(\d{3,4})\s*\}").unwrap();
    // Coordinate fields look like: GeoPosition[{32.1, 71.8}]
    static ref COORD_RE: Regex =
        Regex::new(r"\{\s*(-?\d+(?:\.\d+)?)\s*,\s*(-?\d+(?:\.\d+)?)\s*\}").unwrap();
}

/// Pull the gram value out of a `Quantity[...]` wrapper.
/// Anything that does not match the template is a missing value, not an error.
pub fn mass_grams(field: &str) -> Option<f64> {
    MASS_RE
        .captures(field)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Pull the 3-4 digit year out of a `DateObject[{...}]` wrapper.
pub fn year(field: &str) -> Option<f64> {
    YEAR_RE
        .captures(field)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Pull (latitude, longitude) out of the braced pair in a `GeoPosition[...]`.
pub fn coordinates(field: &str) -> Option<(f64, f64)> {
    let caps = COORD_RE.captures(field)?;
    let lat = caps.get(1)?.as_str().parse().ok()?;
    let lon = caps.get(2)?.as_str().parse().ok()?;
    Some((lat, lon))
}
