use crate::error::{PipelineError, PipelineResult};
use crate::models::{DataPoint, coerce_numeric_str};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// One CSV row as text; converted leniently into a [`DataPoint`].
#[derive(Debug, Deserialize)]
struct CsvRecord {
    category: String,
    #[serde(default)]
    value: String,
    #[serde(default)]
    color: Option<String>,
    #[serde(default, alias = "seriesName", alias = "series")]
    series_name: Option<String>,
    #[serde(default, alias = "originalOrder", alias = "order")]
    original_order: Option<String>,
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl From<CsvRecord> for DataPoint {
    fn from(r: CsvRecord) -> Self {
        Self {
            category: r.category,
            value: coerce_numeric_str(&r.value),
            color: non_empty(r.color),
            series_name: non_empty(r.series_name),
            original_order: r
                .original_order
                .and_then(|s| s.trim().parse::<i64>().ok()),
        }
    }
}

/// Read records from CSV with a header row (`category,value[,color,seriesName,originalOrder]`).
pub fn read_csv<R: Read>(reader: R) -> PipelineResult<Vec<DataPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut out = Vec::new();
    for rec in rdr.deserialize::<CsvRecord>() {
        out.push(rec?.into());
    }
    Ok(out)
}

/// Parse a JSON array of records.
pub fn parse_json(s: &str) -> PipelineResult<Vec<DataPoint>> {
    Ok(serde_json::from_str(s)?)
}

/// Load records from a `.csv` or `.json` file.
pub fn load_records<P: AsRef<Path>>(path: P) -> PipelineResult<Vec<DataPoint>> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "csv" => read_csv(std::fs::File::open(path)?),
        "json" => parse_json(&std::fs::read_to_string(path)?),
        other => Err(PipelineError::UnsupportedFormat(other.to_string())),
    }
}
