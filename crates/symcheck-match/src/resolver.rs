//! Fuzzy resolution of free-text entries against the symptom table.

use symcheck_model::{MatchCandidate, SymptomRecord};

use crate::score::{round2, similarity};

/// Minimum similarity for a candidate to be suggested.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.6;

/// Scores `input` against the simple name of every record and returns the
/// candidates at or above `threshold`, best first.
///
/// The whole table is scanned, not just the indexed records, so duplicates
/// behind a first-wins index entry can still surface as candidates. Kept
/// scores are rounded to 2 decimals and the sort compares the rounded value;
/// the sort is stable, so ties keep table-encounter order.
pub fn find_closest_matches(
    input: &str,
    records: &[SymptomRecord],
    threshold: f64,
) -> Vec<MatchCandidate> {
    let mut matches: Vec<MatchCandidate> = records
        .iter()
        .filter_map(|record| {
            let simple = record.simple_name();
            let ratio = similarity(input, simple);
            (ratio >= threshold).then(|| MatchCandidate {
                full: record.as_str().to_string(),
                simple: simple.to_string(),
                similarity: round2(ratio),
            })
        })
        .collect();

    matches.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    matches
}
