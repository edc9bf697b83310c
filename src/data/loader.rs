use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

use crate::error::{CatalogueError, CatalogueResult};

use super::model::{infer_column, MutationRecord};

/// Columns every catalogue must carry, matched case-sensitively.
pub const DRUG: &str = "DRUG";
pub const MUTATION: &str = "MUTATION";
pub const PREDICTION: &str = "PREDICTION";

// ---------------------------------------------------------------------------
// Line loader
// ---------------------------------------------------------------------------

/// Read a catalogue as plain text and return its distinct lines, each with
/// surrounding whitespace removed.
pub fn load_lines(path: &Path) -> CatalogueResult<BTreeSet<String>> {
    let text = std::fs::read_to_string(path).map_err(|source| CatalogueError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let lines: BTreeSet<String> = split_lines(&text)
        .into_iter()
        .map(|line| line.trim().to_string())
        .collect();
    log::debug!("{}: {} distinct lines", path.display(), lines.len());
    Ok(lines)
}

/// Split on `\r\n`, lone `\r` and `\n`. A final terminator does not open an
/// extra empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(at) => {
                lines.push(&rest[..at]);
                let width = if rest[at..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[at + width..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}

// ---------------------------------------------------------------------------
// Record loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, at least `DRUG`, `MUTATION`
/// and `PREDICTION`. Other columns are ignored. Each of the three columns is
/// typed as a whole (see [`infer_column`]) before rows are turned into
/// records, and duplicate records collapse.
pub fn load_mutations(path: &Path) -> CatalogueResult<BTreeSet<MutationRecord>> {
    let file = File::open(path).map_err(|source| CatalogueError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let csv_error = |source: csv::Error| CatalogueError::Csv {
        path: path.to_path_buf(),
        source,
    };

    // Short rows are read as missing cells; long rows are rejected below.
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
    let headers = reader.headers().map_err(csv_error)?.clone();

    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| CatalogueError::MissingColumn {
                path: path.to_path_buf(),
                column: name,
            })
    };
    let drug_idx = column(DRUG)?;
    let mutation_idx = column(MUTATION)?;
    let prediction_idx = column(PREDICTION)?;

    let mut drugs = Vec::new();
    let mut mutations = Vec::new();
    let mut predictions = Vec::new();

    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        if record.len() > headers.len() {
            return Err(CatalogueError::RaggedRow {
                path: path.to_path_buf(),
                line: record.position().map_or(0, |p| p.line()),
                expected: headers.len(),
                found: record.len(),
            });
        }
        drugs.push(record.get(drug_idx).unwrap_or("").to_string());
        mutations.push(record.get(mutation_idx).unwrap_or("").to_string());
        predictions.push(record.get(prediction_idx).unwrap_or("").to_string());
    }
    let rows = drugs.len();

    let records: BTreeSet<MutationRecord> = infer_column(&drugs)
        .into_iter()
        .zip(infer_column(&mutations))
        .zip(infer_column(&predictions))
        .map(|((drug, mutation), prediction)| MutationRecord::new(drug, mutation, prediction))
        .collect();

    log::debug!(
        "{}: {} rows, {} unique mutations",
        path.display(),
        rows,
        records.len()
    );
    Ok(records)
}
