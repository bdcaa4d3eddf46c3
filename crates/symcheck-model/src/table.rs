//! The symptom-by-condition prevalence table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::record::SymptomRecord;

/// Optional lookup from condition name to an external reference URL.
///
/// Keys match the table's condition names exactly; a missing entry simply
/// means no link is available for that condition.
pub type ConditionLinks = BTreeMap<String, String>;

/// The prevalence dataset: symptom rows, condition columns, and a row-major
/// presence matrix.
///
/// `data[row][col]` holds the association value for symptom `row` and
/// condition `col`. Values are expected to be 0/1 but are summed verbatim by
/// the prioritizer, so a weighted dataset still scores consistently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrevalenceTable {
    pub symptoms: Vec<SymptomRecord>,
    pub conditions: Vec<String>,
    pub data: Vec<Vec<u32>>,
}

impl PrevalenceTable {
    pub fn new(
        symptoms: Vec<SymptomRecord>,
        conditions: Vec<String>,
        data: Vec<Vec<u32>>,
    ) -> Result<Self> {
        let table = Self {
            symptoms,
            conditions,
            data,
        };
        table.validate()?;
        Ok(table)
    }

    /// Checks the shape invariant: one matrix row per symptom, one cell per
    /// condition in every row.
    pub fn validate(&self) -> Result<()> {
        if self.data.len() != self.symptoms.len() {
            return Err(ModelError::RowCountMismatch {
                rows: self.data.len(),
                symptoms: self.symptoms.len(),
            });
        }
        for (row, cells) in self.data.iter().enumerate() {
            if cells.len() != self.conditions.len() {
                return Err(ModelError::RowWidthMismatch {
                    row,
                    width: cells.len(),
                    conditions: self.conditions.len(),
                });
            }
        }
        Ok(())
    }

    pub fn symptom_count(&self) -> usize {
        self.symptoms.len()
    }

    pub fn condition_count(&self) -> usize {
        self.conditions.len()
    }

    /// Row index of a full symptom label, by exact match.
    pub fn row_of(&self, full_label: &str) -> Option<usize> {
        self.symptoms.iter().position(|s| s.as_str() == full_label)
    }

    /// Presence value for one symptom row and condition column.
    pub fn value(&self, row: usize, col: usize) -> u32 {
        self.data[row][col]
    }
}
