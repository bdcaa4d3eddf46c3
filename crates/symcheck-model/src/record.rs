//! Symptom labels as they appear in the prevalence dataset.

use serde::{Deserialize, Serialize};

/// A full symptom label from the dataset, e.g. `"Muscle weakness (HP:0001324)"`.
///
/// Labels may carry a trailing parenthetical ontology code. Records are loaded
/// once with the dataset and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymptomRecord(String);

impl SymptomRecord {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The full label, exactly as loaded.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The label with any parenthetical ontology code stripped.
    ///
    /// `"Muscle weakness (HP:0001324)"` becomes `"Muscle weakness"`. A label
    /// without both `(` and `)` is returned whole, trimmed.
    pub fn simple_name(&self) -> &str {
        if self.0.contains(')')
            && let Some((head, _)) = self.0.split_once('(')
        {
            head.trim()
        } else {
            self.0.trim()
        }
    }

    /// Case-folded simple name, the lookup key for the vocabulary index.
    pub fn key(&self) -> String {
        self.simple_name().to_lowercase()
    }

    /// The ontology code embedded in a trailing parenthetical, if any.
    ///
    /// `"Scoliosis (HP:0002650)"` yields `Some("HP:0002650")`.
    pub fn ontology_code(&self) -> Option<&str> {
        let rest = self.0.trim().strip_suffix(')')?;
        let open = rest.rfind('(')?;
        let code = rest[open + 1..].trim();
        if code.is_empty() { None } else { Some(code) }
    }
}

impl std::fmt::Display for SymptomRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
