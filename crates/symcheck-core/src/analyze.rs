//! One synchronous analysis pass: validation, suggestions, prioritization.
//!
//! The pass runs to completion against the inputs it was handed; per-entry
//! irregularities accumulate into the result instead of aborting early.

use std::collections::BTreeMap;

use symcheck_match::{DEFAULT_MATCH_THRESHOLD, VocabularyIndex, find_closest_matches};
use symcheck_model::{AnalysisResult, PrevalenceTable, SymptomRecord};

use crate::prioritize::{Prioritized, prioritize};

/// How many fuzzy suggestions are surfaced per unrecognized entry.
pub const SUGGESTION_LIMIT: usize = 3;

/// Free-text entries split into recognized and unrecognized ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validated {
    /// Canonical-cased simple names, in entry order.
    pub valid: Vec<String>,
    /// Entries with no exact vocabulary match, verbatim.
    pub invalid: Vec<String>,
}

/// Validates entries against the vocabulary index.
///
/// Each entry is stripped of any parenthetical suffix and case-folded for
/// lookup. A hit forwards the canonical casing from the index, never the
/// user's raw casing.
pub fn validate_symptoms(entries: &[String], index: &VocabularyIndex) -> Validated {
    let mut validated = Validated::default();
    for entry in entries {
        let record = SymptomRecord::new(entry.clone());
        match index.resolve(record.simple_name()) {
            Some(canonical) => validated
                .valid
                .push(canonical.simple_name().to_string()),
            None => validated.invalid.push(entry.clone()),
        }
    }
    validated
}

/// Runs one full analysis over a snapshot of entered symptoms.
///
/// Pure over its inputs: the same entries, table and index always produce
/// the same result. Unrecognized entries are warnings with fuzzy
/// suggestions, not failures, and an empty outcome is a normal result.
pub fn analyze(
    entries: &[String],
    table: &PrevalenceTable,
    index: &VocabularyIndex,
) -> AnalysisResult {
    let Validated { valid, invalid } = validate_symptoms(entries, index);

    let mut suggested_matches = BTreeMap::new();
    for entry in &invalid {
        tracing::warn!(symptom = %entry, "unrecognized symptom entry");
        let mut candidates =
            find_closest_matches(entry, &table.symptoms, DEFAULT_MATCH_THRESHOLD);
        candidates.truncate(SUGGESTION_LIMIT);
        if !candidates.is_empty() {
            suggested_matches.insert(entry.clone(), candidates);
        }
    }

    let prioritized = if valid.is_empty() {
        Prioritized::default()
    } else {
        prioritize(&valid, table, index)
    };
    let top_condition = prioritized.top_condition().map(str::to_string);

    AnalysisResult {
        valid_symptoms: valid,
        invalid_symptoms: invalid,
        suggested_matches,
        condition_scores: prioritized.scores,
        matched_symptoms: prioritized.matched,
        top_condition,
    }
}

/// Symptom-to-ontology-code pairs for the top-ranked condition.
///
/// Re-scans the matched records for a trailing parenthetical identifier;
/// records without one are skipped. Turning the pairs into a downloadable
/// artifact is the host's concern.
pub fn ontology_pairs(result: &AnalysisResult, table: &PrevalenceTable) -> Vec<(String, String)> {
    let Some(top) = result.top_condition.as_deref() else {
        return Vec::new();
    };
    let Some(matched) = result.matched_symptoms.get(top) else {
        return Vec::new();
    };

    matched
        .iter()
        .filter_map(|simple| {
            table
                .symptoms
                .iter()
                .find(|record| record.simple_name() == simple)
                .and_then(SymptomRecord::ontology_code)
                .map(|code| (simple.clone(), code.to_string()))
        })
        .collect()
}
