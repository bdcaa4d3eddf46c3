use symcheck_match::{DEFAULT_MATCH_THRESHOLD, VocabularyIndex, find_closest_matches};
use symcheck_model::SymptomRecord;

fn sample_records() -> Vec<SymptomRecord> {
    [
        "Muscle weakness (HP:0001324)",
        "Progressive muscle degeneration",
        "Elevated creatinine phosphokinase (HP:0040081)",
        "Scoliosis (HP:0002650)",
        "Joint contractures (HP:0034392)",
        "Cardiac abnormalities",
        "Respiratory insufficiency (HP:0002093)",
        "Developmental delay (HP:0001263)",
    ]
    .into_iter()
    .map(SymptomRecord::new)
    .collect()
}

#[test]
fn misspelled_entry_resolves_to_vocabulary_neighbor() {
    let records = sample_records();
    let matches = find_closest_matches("Musle weakness", &records, DEFAULT_MATCH_THRESHOLD);

    assert_eq!(matches[0].simple, "Muscle weakness");
    assert!(matches[0].similarity > 0.9);
}

#[test]
fn candidates_are_sorted_descending() {
    let records = sample_records();
    let matches = find_closest_matches("muscle", &records, 0.3);

    assert!(!matches.is_empty());
    for pair in matches.windows(2) {
        assert!(pair[0].similarity >= pair[1].similarity);
    }
}

#[test]
fn index_and_resolver_agree_on_exact_entries() {
    let records = sample_records();
    let index = VocabularyIndex::build(&records);

    for record in &records {
        let canonical = index
            .resolve(record.simple_name())
            .expect("every simple name is indexed");
        // Exact entries are also the resolver's best candidate.
        let matches =
            find_closest_matches(record.simple_name(), &records, DEFAULT_MATCH_THRESHOLD);
        assert_eq!(matches[0].similarity, 1.0);
        assert_eq!(matches[0].simple, canonical.simple_name());
    }
}
