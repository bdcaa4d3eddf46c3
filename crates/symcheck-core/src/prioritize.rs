//! Condition prioritization over the prevalence matrix.

use std::collections::BTreeMap;

use symcheck_match::VocabularyIndex;
use symcheck_model::{ConditionScore, PrevalenceTable};

/// Per-condition scores plus the matched-symptom membership behind them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Prioritized {
    /// Positive scores only, descending; ties keep table column order.
    pub scores: Vec<ConditionScore>,
    /// Matched simple names per condition, covering every table condition,
    /// in the order the symptoms were resolved.
    pub matched: BTreeMap<String, Vec<String>>,
}

impl Prioritized {
    /// Highest-scoring condition, if anything scored at all.
    pub fn top_condition(&self) -> Option<&str> {
        self.scores.first().map(|entry| entry.condition.as_str())
    }
}

/// Scores every condition by the number of selected symptoms associated
/// with it.
///
/// Inputs are canonical simple names (the caller validates first). A name
/// missing from the index passes through unchanged as a defensive fallback;
/// a label without an exact table row is dropped. Zero resolved rows is a
/// normal outcome and yields empty output. Never fails.
pub fn prioritize(
    valid_symptoms: &[String],
    table: &PrevalenceTable,
    index: &VocabularyIndex,
) -> Prioritized {
    let rows: Vec<usize> = valid_symptoms
        .iter()
        .map(|symptom| {
            index
                .resolve(symptom)
                .map_or_else(|| symptom.clone(), |record| record.as_str().to_string())
        })
        .filter_map(|full| table.row_of(&full))
        .collect();

    if rows.is_empty() {
        tracing::debug!("no selected symptom resolved to a table row");
        return Prioritized::default();
    }

    let mut scores: Vec<ConditionScore> = table
        .conditions
        .iter()
        .enumerate()
        .map(|(col, condition)| ConditionScore {
            condition: condition.clone(),
            score: rows.iter().map(|&row| table.value(row, col)).sum(),
        })
        .filter(|entry| entry.score > 0)
        .collect();
    // Stable sort: equal scores keep table column order.
    scores.sort_by(|a, b| b.score.cmp(&a.score));

    let mut matched = BTreeMap::new();
    for (col, condition) in table.conditions.iter().enumerate() {
        let names: Vec<String> = rows
            .iter()
            .filter(|&&row| table.value(row, col) == 1)
            .map(|&row| table.symptoms[row].simple_name().to_string())
            .collect();
        matched.insert(condition.clone(), names);
    }

    Prioritized { scores, matched }
}
