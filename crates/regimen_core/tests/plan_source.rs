use regimen_core::{read_plan_file, PlanSourceError, RegimenStore};
use std::io::Write;

const PLAN_JSON: &str = r#"[
  {"date":"2024-01-03","time":"08:00","period":"morning",
   "supplements":"Vitamin D, Omega-3","hair_care":"","skin_care":"Sunscreen"},
  {"date":"2024-01-03","time":"21:00","period":"night",
   "supplements":"Magnesium","hair_care":"Rosemary Oil","skin_care":null}
]"#;

#[test]
fn plan_file_loads_into_store() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PLAN_JSON.as_bytes()).unwrap();

    let rows = read_plan_file(file.path()).unwrap();
    assert_eq!(rows.len(), 2);

    let store = RegimenStore::new();
    let snapshot = store.reload_from_path(file.path()).unwrap();
    assert_eq!(snapshot.item_list().len(), 5);
    assert_eq!(
        snapshot.day_schedule("2024-01-03").unwrap().night.hair,
        vec!["Rosemary Oil"]
    );
}

#[test]
fn missing_file_is_io_error_and_keeps_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let store = RegimenStore::new();
    store.reload_from_json(PLAN_JSON).unwrap();

    let err = store
        .reload_from_path(dir.path().join("missing.json"))
        .unwrap_err();
    assert!(matches!(err, PlanSourceError::Io { .. }));
    assert!(err.to_string().contains("missing.json"));
    assert_eq!(store.snapshot().item_list().len(), 5);
}

#[test]
fn malformed_file_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[{\"date\":").unwrap();

    let err = read_plan_file(file.path()).unwrap_err();
    assert!(matches!(err, PlanSourceError::Parse(_)));
}
