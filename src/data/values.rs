use anyhow::{Context, Result, anyhow};
use csv::{Reader, ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ValueRow {
    label: String,
    value: f64,
}

/// Labels and values, one pair per axis, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

fn parse_series_from_reader<R: std::io::Read>(mut rdr: Reader<R>) -> Result<Series> {
    let mut out = Series::default();
    for (i, rec) in rdr.deserialize().enumerate() {
        let row: ValueRow = rec.with_context(|| format!("row {}", i + 1))?;
        out.labels.push(row.label);
        out.values.push(row.value);
    }
    debug!(axes = out.values.len(), "loaded series");
    Ok(out)
}

/// Read a `label,value` CSV (with header).
pub fn load_values(path: &str) -> Result<Series> {
    let rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {path}"))?;
    parse_series_from_reader(rdr)
}

/// Parse "3, 5.5, 7" into numbers.
pub fn parse_values(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<f64>().map_err(|_| anyhow!("bad value: {p}")))
        .collect()
}
