//! Wide-format CSV loading for the prevalence matrix.
//!
//! Layout: the first header cell names the symptom column (its text is
//! ignored), every further header cell is a condition name, and each record
//! is one symptom label followed by integer presence cells.

use std::path::Path;

use csv::ReaderBuilder;
use symcheck_model::{PrevalenceTable, SymptomRecord};

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Loads the prevalence dataset from a wide CSV file.
///
/// Blank records are skipped; an empty presence cell reads as 0. Any other
/// non-integer cell is rejected.
pub fn load_prevalence_csv(path: &Path) -> Result<PrevalenceTable> {
    let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers = reader.headers()?.clone();
    if headers.len() < 2 {
        return Err(IngestError::EmptyDataset);
    }
    let conditions: Vec<String> = headers.iter().skip(1).map(normalize_header).collect();

    let mut symptoms = Vec::new();
    let mut data = Vec::new();
    for (line, result) in reader.records().enumerate() {
        let record = result?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let label = normalize_cell(record.get(0).unwrap_or(""));
        let mut row = Vec::with_capacity(conditions.len());
        for (col, condition) in conditions.iter().enumerate() {
            let cell = record.get(col + 1).unwrap_or("").trim();
            let value = if cell.is_empty() {
                0
            } else {
                cell.parse::<u32>().map_err(|_| IngestError::BadCell {
                    row: line + 1,
                    column: condition.clone(),
                    value: cell.to_string(),
                })?
            };
            row.push(value);
        }

        symptoms.push(SymptomRecord::new(label));
        data.push(row);
    }

    if symptoms.is_empty() {
        return Err(IngestError::EmptyDataset);
    }

    let table = PrevalenceTable::new(symptoms, conditions, data)?;
    tracing::debug!(
        symptoms = table.symptom_count(),
        conditions = table.condition_count(),
        path = %path.display(),
        "loaded prevalence table from csv"
    );
    Ok(table)
}
