//! Session context: loaded data plus the user's selected symptoms.

use std::path::Path;

use symcheck_ingest::{load_condition_links, load_prevalence_json};
use symcheck_match::VocabularyIndex;
use symcheck_model::{AnalysisResult, ConditionLinks, PrevalenceTable};

use crate::analyze::analyze;
use crate::error::SessionError;

/// Explicit state for one checker session.
///
/// Owns the immutable loaded data (table, vocabulary index, optional links)
/// and the mutable selected-symptom list. [`Session::analyze`] only reads,
/// so calls are re-entrant-safe and always run against the list as it stood
/// at invocation.
#[derive(Debug, Clone)]
pub struct Session {
    table: PrevalenceTable,
    index: VocabularyIndex,
    links: Option<ConditionLinks>,
    symptoms: Vec<String>,
}

impl Session {
    /// Loads the primary dataset and, when a path is given, the optional
    /// condition-links dataset.
    ///
    /// The primary load is fatal on failure; a failed links load degrades to
    /// a warning and the session runs without external links.
    pub fn load(table_path: &Path, links_path: Option<&Path>) -> Result<Self, SessionError> {
        let table = load_prevalence_json(table_path)?;

        let links = links_path.and_then(|path| match load_condition_links(path) {
            Ok(links) => Some(links),
            Err(err) => {
                tracing::warn!(error = %err, "condition links unavailable, external links disabled");
                None
            }
        });

        Ok(Self::with_links(table, links))
    }

    /// Builds a session from an already-loaded table, for hosts that bring
    /// their own data (e.g. via [`symcheck_ingest::load_prevalence_csv`]).
    pub fn from_table(table: PrevalenceTable) -> Self {
        Self::with_links(table, None)
    }

    pub fn with_links(table: PrevalenceTable, links: Option<ConditionLinks>) -> Self {
        let index = VocabularyIndex::build(&table.symptoms);
        tracing::info!(
            symptoms = table.symptom_count(),
            conditions = table.condition_count(),
            indexed = index.len(),
            links = links.as_ref().map_or(0, |l| l.len()),
            "session ready"
        );
        Self {
            table,
            index,
            links,
            symptoms: Vec::new(),
        }
    }

    /// Adds one free-text entry. Blanks and exact duplicates are rejected.
    pub fn add_symptom(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() || self.symptoms.iter().any(|s| s == text) {
            return false;
        }
        self.symptoms.push(text.to_string());
        true
    }

    /// Removes an entry by exact text.
    pub fn remove_symptom(&mut self, text: &str) -> bool {
        let before = self.symptoms.len();
        self.symptoms.retain(|s| s != text);
        before != self.symptoms.len()
    }

    /// Replaces an entry in place, preserving its position. Used by the
    /// suggestion affordance; the host re-runs [`Session::analyze`] from
    /// scratch afterwards, there is no incremental state.
    pub fn replace_symptom(&mut self, old: &str, new: &str) -> bool {
        match self.symptoms.iter().position(|s| s == old) {
            Some(idx) => {
                self.symptoms[idx] = new.trim().to_string();
                true
            }
            None => false,
        }
    }

    pub fn clear_symptoms(&mut self) {
        self.symptoms.clear();
    }

    /// Selected entries, in insertion order.
    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }

    pub fn table(&self) -> &PrevalenceTable {
        &self.table
    }

    pub fn index(&self) -> &VocabularyIndex {
        &self.index
    }

    /// External reference URL for a condition, when the optional dataset
    /// loaded and carries an entry. Absence is not an error.
    pub fn link_for(&self, condition: &str) -> Option<&str> {
        self.links.as_ref()?.get(condition).map(String::as_str)
    }

    /// Runs one synchronous analysis over a snapshot of the current list.
    pub fn analyze(&self) -> AnalysisResult {
        tracing::info!(selected = self.symptoms.len(), "analyzing symptoms");
        analyze(&self.symptoms, &self.table, &self.index)
    }
}

#[cfg(test)]
mod tests {
    use symcheck_model::SymptomRecord;

    use super::*;

    fn session() -> Session {
        let table = PrevalenceTable::new(
            vec![
                SymptomRecord::new("Fever (HP:1)"),
                SymptomRecord::new("Cough (HP:2)"),
            ],
            vec!["Flu".to_string(), "Cold".to_string()],
            vec![vec![1, 1], vec![0, 1]],
        )
        .expect("consistent fixture");
        Session::from_table(table)
    }

    #[test]
    fn selected_list_keeps_insertion_order_without_duplicates() {
        let mut session = session();
        assert!(session.add_symptom("Cough"));
        assert!(session.add_symptom("  Fever "));
        assert!(!session.add_symptom("Cough"));
        assert!(!session.add_symptom("   "));
        assert_eq!(session.symptoms(), ["Cough", "Fever"]);
    }

    #[test]
    fn replace_preserves_position() {
        let mut session = session();
        session.add_symptom("Feverr");
        session.add_symptom("Cough");

        assert!(session.replace_symptom("Feverr", "Fever"));
        assert_eq!(session.symptoms(), ["Fever", "Cough"]);
        assert!(!session.replace_symptom("Feverr", "Fever"));
    }

    #[test]
    fn remove_and_clear() {
        let mut session = session();
        session.add_symptom("Fever");
        session.add_symptom("Cough");

        assert!(session.remove_symptom("Fever"));
        assert!(!session.remove_symptom("Fever"));
        assert_eq!(session.symptoms(), ["Cough"]);

        session.clear_symptoms();
        assert!(session.symptoms().is_empty());
    }

    #[test]
    fn links_are_absent_without_the_secondary_dataset() {
        let session = session();
        assert_eq!(session.link_for("Flu"), None);
    }
}
