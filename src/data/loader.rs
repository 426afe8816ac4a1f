use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::SurveyTable;
use super::normalize::{normalize, RawTable};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load and normalize a survey export.
///
/// The file is comma-delimited, double-quote-quoted UTF-8 with a header row
/// holding the question texts exactly as the form tool wrote them.
pub fn load_file(path: &Path) -> Result<SurveyTable> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    load_reader(file).with_context(|| format!("loading survey {}", path.display()))
}

/// Same as [`load_file`], over any reader.
pub fn load_reader<R: Read>(reader: R) -> Result<SurveyTable> {
    let raw = read_raw(reader)?;
    let respondents = raw.rows.len();
    let table = normalize(raw)?;

    log::info!(
        "Loaded {respondents} respondents as {} rows across {} ministries",
        table.len(),
        table.ministries.len()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

fn read_raw<R: Read>(reader: R) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .quote(b'"')
        .has_headers(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    Ok(RawTable::new(headers, rows))
}
