//! Case-folded simple-name lookup over the dataset's symptom records.

use std::collections::BTreeMap;

use symcheck_model::SymptomRecord;

/// Index from case-folded simple name to its canonical full record.
///
/// Built once per dataset load and read-only afterwards. When several records
/// collapse to the same simple name after code stripping, the first one
/// encountered wins; later duplicates stay in the table for scoring but are
/// not indexed. Downstream row lookups depend on this tie-break staying put.
#[derive(Debug, Clone, Default)]
pub struct VocabularyIndex {
    entries: BTreeMap<String, SymptomRecord>,
}

impl VocabularyIndex {
    pub fn build(records: &[SymptomRecord]) -> Self {
        let mut entries = BTreeMap::new();
        for record in records {
            entries
                .entry(record.key())
                .or_insert_with(|| record.clone());
        }
        Self { entries }
    }

    /// The canonical record for a simple name, matched case-insensitively.
    pub fn resolve(&self, simple: &str) -> Option<&SymptomRecord> {
        self.entries.get(&simple.to_lowercase())
    }

    pub fn contains(&self, simple: &str) -> bool {
        self.entries.contains_key(&simple.to_lowercase())
    }

    /// Canonical simple names, deduplicated, in case-folded key order (not
    /// display-string sort order).
    ///
    /// Hosts use this for autocomplete-style symptom pickers.
    pub fn simple_names(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(SymptomRecord::simple_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(labels: &[&str]) -> Vec<SymptomRecord> {
        labels.iter().copied().map(SymptomRecord::new).collect()
    }

    #[test]
    fn first_record_wins_on_simple_name_collision() {
        let records = records(&["Fever (HP:1)", "Fever (HP:9)", "Cough (HP:2)"]);
        let index = VocabularyIndex::build(&records);

        assert_eq!(index.len(), 2);
        assert_eq!(
            index.resolve("fever").map(SymptomRecord::as_str),
            Some("Fever (HP:1)")
        );
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let records = records(&["Muscle weakness (HP:0001324)"]);
        let index = VocabularyIndex::build(&records);

        assert!(index.contains("MUSCLE WEAKNESS"));
        assert_eq!(
            index.resolve("muscle Weakness").map(SymptomRecord::simple_name),
            Some("Muscle weakness")
        );
        assert!(!index.contains("weakness"));
    }

    #[test]
    fn simple_names_are_deduplicated() {
        let records = records(&["Fever (HP:1)", "Fever (HP:9)", "Cough (HP:2)"]);
        let index = VocabularyIndex::build(&records);

        let names: Vec<&str> = index.simple_names().collect();
        assert_eq!(names, vec!["Cough", "Fever"]);
    }
}
