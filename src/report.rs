use crate::clean::Meteorite;
use crate::util;
use itertools::Itertools;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::io::{self, Write};

/// Descriptive statistics over the mass values of a cleaned collection.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MassSummary {
    pub mean_g: f64,
    pub median_g: f64,
    pub std_dev_g: f64,
    pub total_g: f64,
    pub max_g: f64,
}

/// Everything the reporter computes, in one serializable value.
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub total_records: usize,
    pub heaviest: Vec<Meteorite>,
    pub fall_counts: Vec<(String, usize)>,
    pub mean_mass_by_classification: Vec<(String, f64)>,
    pub classification_counts: Vec<(String, usize)>,
    pub decade_counts: Vec<(i32, usize)>,
    pub mass_summary: Option<MassSummary>,
}

impl Report {
    pub fn build(records: &[Meteorite], top_n: usize) -> Self {
        Self {
            total_records: records.len(),
            heaviest: heaviest(records, top_n),
            fall_counts: fall_counts(records),
            mean_mass_by_classification: mean_mass_by_classification(records, top_n),
            classification_counts: classification_counts(records, top_n),
            decade_counts: decade_counts(records),
            mass_summary: summarize_mass(records),
        }
    }
}

fn by_mass_desc(a: &Meteorite, b: &Meteorite) -> Ordering {
    b.mass_g.partial_cmp(&a.mass_g).unwrap_or(Ordering::Equal)
}

/// The n heaviest meteorites, by extracted mass.
pub fn heaviest(records: &[Meteorite], n: usize) -> Vec<Meteorite> {
    records
        .iter()
        .sorted_by(|a, b| by_mass_desc(a, b))
        .take(n)
        .cloned()
        .collect()
}

/// How many meteorites were seen falling vs found later, most common first.
pub fn fall_counts(records: &[Meteorite]) -> Vec<(String, usize)> {
    records
        .iter()
        .map(|m| m.fall.clone())
        .counts()
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
        .collect()
}

/// Mean mass per classification, the n largest means first.
pub fn mean_mass_by_classification(records: &[Meteorite], n: usize) -> Vec<(String, f64)> {
    let mut sums: HashMap<&str, (f64, usize)> = HashMap::new();
    for m in records {
        let entry = sums.entry(&m.classification).or_insert((0.0, 0));
        entry.0 += m.mass_g;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(class, (sum, count))| (class.to_string(), sum / count as f64))
        .sorted_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        })
        .take(n)
        .collect()
}

/// The n most common classifications.
pub fn classification_counts(records: &[Meteorite], n: usize) -> Vec<(String, usize)> {
    records
        .iter()
        .map(|m| m.classification.clone())
        .counts()
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
        .take(n)
        .collect()
}

/// Observation counts per decade bucket, earliest decade first.
pub fn decade_counts(records: &[Meteorite]) -> Vec<(i32, usize)> {
    let mut buckets: BTreeMap<i32, usize> = BTreeMap::new();
    for m in records {
        *buckets.entry(m.decade).or_insert(0) += 1;
    }
    buckets.into_iter().collect()
}

/// Mean, median, standard deviation, sum, and max over the mass values.
/// `None` for an empty collection.
pub fn summarize_mass(records: &[Meteorite]) -> Option<MassSummary> {
    let masses: Vec<f64> = records.iter().map(|m| m.mass_g).collect();

    Some(MassSummary {
        mean_g: util::mean(&masses)?,
        median_g: util::median(&masses)?,
        std_dev_g: util::std_dev(&masses)?,
        total_g: masses.iter().sum(),
        max_g: masses.iter().cloned().fold(f64::MIN, f64::max),
    })
}

/// Write the report as sectioned plain text.
pub fn render_text<W: Write>(report: &Report, mut out: W) -> io::Result<()> {
    let rule = "-".repeat(80);

    writeln!(out, "{rule}")?;
    writeln!(out, "Cleaned records: {}", report.total_records)?;

    writeln!(out, "{rule}")?;
    writeln!(out, "Heaviest meteorites")?;
    for m in &report.heaviest {
        writeln!(
            out,
            "  {:<24} {:>14.1} g  {}",
            m.name, m.mass_g, m.year
        )?;
    }

    writeln!(out, "{rule}")?;
    writeln!(out, "Fell vs Found")?;
    for (fall, count) in &report.fall_counts {
        writeln!(out, "  {fall:<10} {count}")?;
    }

    writeln!(out, "{rule}")?;
    writeln!(out, "Classifications by average mass")?;
    for (class, mean) in &report.mean_mass_by_classification {
        writeln!(out, "  {class:<24} {mean:>14.1} g")?;
    }

    writeln!(out, "{rule}")?;
    writeln!(out, "Most common classifications")?;
    for (class, count) in &report.classification_counts {
        writeln!(out, "  {class:<24} {count}")?;
    }

    writeln!(out, "{rule}")?;
    writeln!(out, "Discoveries by decade")?;
    for (decade, count) in &report.decade_counts {
        writeln!(out, "  {decade}s  {count}")?;
    }

    writeln!(out, "{rule}")?;
    writeln!(out, "Mass statistics (grams)")?;
    match &report.mass_summary {
        Some(s) => {
            writeln!(out, "  mean:    {:.2}", s.mean_g)?;
            writeln!(out, "  median:  {:.2}", s.median_g)?;
            writeln!(out, "  std dev: {:.2}", s.std_dev_g)?;
            writeln!(out, "  total:   {:.2}", s.total_g)?;
            writeln!(out, "  max:     {:.2}", s.max_g)?;
        }
        None => writeln!(out, "  no records")?,
    }
    writeln!(out, "{rule}")?;

    Ok(())
}
