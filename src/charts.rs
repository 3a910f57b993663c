use crate::clean::Meteorite;

/// One histogram bar: label for the bucket's lower bound plus a count.
pub type Bucket = (String, u64);

/// Bucket the mass values (kg) on a log10 scale.
///
/// Cleaned masses are strictly positive so the log is always defined.
/// All-identical masses collapse into a single bucket.
pub fn log_mass_histogram(records: &[Meteorite], bins: usize) -> Vec<Bucket> {
    if records.is_empty() || bins == 0 {
        return Vec::new();
    }

    let logs: Vec<f64> = records.iter().map(|m| m.mass_kg.log10()).collect();
    let min = logs.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = logs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if (max - min).abs() < f64::EPSILON {
        return vec![(format_mass_kg(10f64.powf(min)), records.len() as u64)];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0u64; bins];
    for log in &logs {
        let mut idx = ((log - min) / width) as usize;
        if idx >= bins {
            idx = bins - 1;
        }
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let lower = 10f64.powf(min + i as f64 * width);
            (format_mass_kg(lower), count)
        })
        .collect()
}

/// Split geolocated records into (longitude, latitude) point sets for
/// meteorites seen falling vs everything else.
pub fn scatter_split(records: &[Meteorite]) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
    let mut fell = Vec::new();
    let mut other = Vec::new();

    for m in records {
        if let (Some(lat), Some(lon)) = (m.latitude, m.longitude) {
            if m.fall == "Fell" {
                fell.push((lon, lat));
            } else {
                other.push((lon, lat));
            }
        }
    }

    (fell, other)
}

/// Axis bounds for the geographic scatter: ((lon_min, lon_max),
/// (lat_min, lat_max)), padded slightly; world bounds when there are no points.
pub fn geo_bounds(points: &[(f64, f64)]) -> ((f64, f64), (f64, f64)) {
    if points.is_empty() {
        return ((-180.0, 180.0), (-90.0, 90.0));
    }

    let mut lon = (f64::INFINITY, f64::NEG_INFINITY);
    let mut lat = (f64::INFINITY, f64::NEG_INFINITY);
    for &(x, y) in points {
        lon = (lon.0.min(x), lon.1.max(x));
        lat = (lat.0.min(y), lat.1.max(y));
    }

    let pad = |lo: f64, hi: f64| {
        let margin = ((hi - lo) * 0.05).max(1.0);
        (lo - margin, hi + margin)
    };

    (pad(lon.0, lon.1), pad(lat.0, lat.1))
}

/// Format a kg value for a bucket label.
pub fn format_mass_kg(val: f64) -> String {
    if val >= 100.0 {
        format!("{}", val.round())
    } else if val >= 1.0 {
        format!("{val:.1}")
    } else {
        format!("{val:.3}")
    }
}
