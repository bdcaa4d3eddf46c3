use symcheck_model::{PrevalenceTable, SymptomRecord};

#[test]
fn prevalence_table_matches_dataset_json_shape() {
    let json = r#"{
        "symptoms": ["Fever (HP:1)", "Cough (HP:2)"],
        "conditions": ["Flu", "Cold"],
        "data": [[1, 1], [0, 1]]
    }"#;

    let table: PrevalenceTable = serde_json::from_str(json).expect("parse table json");
    table.validate().expect("shape invariant");

    assert_eq!(table.symptom_count(), 2);
    assert_eq!(table.condition_count(), 2);
    assert_eq!(table.symptoms[0], SymptomRecord::new("Fever (HP:1)"));
    assert_eq!(table.symptoms[0].simple_name(), "Fever");
    assert_eq!(table.value(1, 0), 0);
    assert_eq!(table.value(1, 1), 1);
}

#[test]
fn record_round_trips_as_plain_string() {
    let record = SymptomRecord::new("Scoliosis (HP:0002650)");
    let json = serde_json::to_string(&record).expect("serialize record");
    assert_eq!(json, "\"Scoliosis (HP:0002650)\"");
    let round: SymptomRecord = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round, record);
}
