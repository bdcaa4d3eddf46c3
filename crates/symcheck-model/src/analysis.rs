//! Output types handed across the presentation boundary.
//!
//! An [`AnalysisResult`] is recomputed from scratch on every analysis request;
//! nothing in it outlives a single call.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A fuzzy-match candidate for an unrecognized symptom entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCandidate {
    /// Full dataset label, e.g. `"Muscle weakness (HP:0001324)"`.
    pub full: String,
    /// Display form with the ontology code stripped.
    pub simple: String,
    /// Similarity ratio in `[0, 1]`, rounded to 2 decimal places.
    pub similarity: f64,
}

/// Match count for one condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionScore {
    pub condition: String,
    /// Count of selected symptoms associated with the condition.
    pub score: u32,
}

/// Everything one analysis pass produces for the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Recognized entries, as canonical-cased simple names, in entry order.
    pub valid_symptoms: Vec<String>,
    /// Unrecognized entries, verbatim, in entry order.
    pub invalid_symptoms: Vec<String>,
    /// Ranked suggestions per unrecognized entry (entries with no candidate
    /// above the threshold are absent).
    pub suggested_matches: BTreeMap<String, Vec<MatchCandidate>>,
    /// Positive-score conditions, descending; ties keep table column order.
    pub condition_scores: Vec<ConditionScore>,
    /// Matched simple names per condition, covering every table condition.
    pub matched_symptoms: BTreeMap<String, Vec<String>>,
    /// Highest-scoring condition, absent when no condition scored.
    pub top_condition: Option<String>,
}

impl AnalysisResult {
    /// Score for one condition, zero when it did not rank.
    pub fn score_for(&self, condition: &str) -> u32 {
        self.condition_scores
            .iter()
            .find(|entry| entry.condition == condition)
            .map_or(0, |entry| entry.score)
    }
}
