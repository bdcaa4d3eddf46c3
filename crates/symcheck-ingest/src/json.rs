//! JSON dataset loading.
//!
//! The primary dataset is one JSON object with three aligned parts:
//! `symptoms` (row labels), `conditions` (column names) and `data`
//! (row-major presence matrix). The optional secondary dataset is a flat
//! object of condition name to URL.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use symcheck_model::{ConditionLinks, PrevalenceTable};

use crate::error::{IngestError, Result};

/// Loads the primary prevalence dataset.
///
/// Failure here is session-fatal: without the table no condition can ever be
/// scored. The shape invariant is checked before the table is handed out.
pub fn load_prevalence_json(path: &Path) -> Result<PrevalenceTable> {
    let file = File::open(path)?;
    let table: PrevalenceTable = serde_json::from_reader(BufReader::new(file))?;
    table.validate()?;
    if table.symptoms.is_empty() || table.conditions.is_empty() {
        return Err(IngestError::EmptyDataset);
    }

    tracing::debug!(
        symptoms = table.symptom_count(),
        conditions = table.condition_count(),
        path = %path.display(),
        "loaded prevalence table"
    );
    Ok(table)
}

/// Loads the optional condition-to-URL lookup.
///
/// Errors are reported normally here; the session boundary downgrades them
/// to a warning and runs without links.
pub fn load_condition_links(path: &Path) -> Result<ConditionLinks> {
    let file = File::open(path)?;
    let links: ConditionLinks = serde_json::from_reader(BufReader::new(file))?;

    tracing::debug!(
        entries = links.len(),
        path = %path.display(),
        "loaded condition links"
    );
    Ok(links)
}
