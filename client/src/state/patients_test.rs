use super::*;
use crate::storage::MemoryStore;

fn draft() -> PatientDraft {
    PatientDraft {
        first_name: "Jane".to_owned(),
        last_name: "Smith".to_owned(),
        email: "jane@example.com".to_owned(),
        phone_number: "5551234567".to_owned(),
        date_of_birth: "1985-04-12".to_owned(),
        gender: "female".to_owned(),
        address: "12 Oak Street".to_owned(),
        city: "Springfield".to_owned(),
        state: "IL".to_owned(),
        postal_code: "62701".to_owned(),
        notes: String::new(),
    }
}

fn patient(id: &str) -> Patient {
    draft().validate(id.to_owned()).unwrap()
}

#[test]
fn valid_draft_builds_patient() {
    let p = patient("P-1001");
    assert_eq!(p.full_name(), "Jane Smith");
    assert_eq!(p.date_of_birth, NaiveDate::from_ymd_opt(1985, 4, 12));
    assert_eq!(p.notes, None);
    assert_eq!(p.location(), "Springfield, IL");
}

#[test]
fn invalid_draft_reports_each_field() {
    let bad = PatientDraft { first_name: "J".to_owned(), email: "nope".to_owned(), ..PatientDraft::default() };
    let errors = bad.validate("P-1".to_owned()).unwrap_err();
    assert!(errors.contains("first_name"));
    assert!(errors.contains("last_name"));
    assert_eq!(errors.get("email"), Some(INVALID_EMAIL));
    assert!(errors.contains("date_of_birth"));
    assert!(errors.contains("gender"));
    assert!(errors.contains("postal_code"));
}

#[test]
fn future_birth_date_rejected() {
    let future = crate::util::format::today() + chrono::Days::new(2);
    let d = PatientDraft { date_of_birth: future.format("%Y-%m-%d").to_string(), ..draft() };
    let errors = d.validate("P-1".to_owned()).unwrap_err();
    assert_eq!(errors.get("date_of_birth"), Some("Date of birth cannot be in the future."));
}

#[test]
fn next_id_starts_at_first_number_and_follows_max() {
    assert_eq!(next_patient_id(&[]), "P-1001");
    let existing = vec![patient("P-1004"), patient("P-1002"), patient("legacy")];
    assert_eq!(next_patient_id(&existing), "P-1005");
}

#[test]
fn create_appends_exactly_one_record() {
    let store = MemoryStore::new();
    let first = create_patient(&store, &draft()).unwrap();
    let second = create_patient(&store, &draft()).unwrap();
    assert_eq!(first.id, "P-1001");
    assert_eq!(second.id, "P-1002");
    assert_eq!(load_patients(&store).unwrap().len(), 2);
}

#[test]
fn create_with_invalid_draft_writes_nothing() {
    let store = MemoryStore::new();
    let result = create_patient(&store, &PatientDraft::default());
    assert!(matches!(result, Err(PatientError::Invalid(_))));
    assert_eq!(store.get_item(PATIENTS_KEY).unwrap(), None);
}

#[test]
fn missing_collection_loads_empty() {
    assert!(load_patients(&MemoryStore::new()).unwrap().is_empty());
}

#[test]
fn malformed_collection_is_a_parse_error() {
    let store = MemoryStore::new().with_item(PATIENTS_KEY, "[{oops");
    assert!(matches!(load_patients(&store), Err(StorageError::Parse { .. })));
    let state = PatientsState::from_load(load_patients(&store));
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_some());
}

#[test]
fn stored_timestamps_and_camel_case_fields_load() {
    let raw = r#"[{"id":"P-1001","firstName":"John","lastName":"Doe","email":"john@x.io",
        "phoneNumber":"5550000000","dateOfBirth":"1990-01-02T12:00:00.000Z","gender":"male",
        "address":"1 Main St","city":"Austin","state":"TX","postalCode":"73301"}]"#;
    let store = MemoryStore::new().with_item(PATIENTS_KEY, raw);
    let found = find_patient(&store, "P-1001").unwrap().unwrap();
    assert_eq!(found.first_name, "John");
    assert_eq!(found.date_of_birth, NaiveDate::from_ymd_opt(1990, 1, 2));
}

#[test]
fn stored_timestamp_date_of_birth_is_the_local_day() {
    let stamp = "1990-01-01T23:00:00.000Z";
    let raw = format!(r#"[{{"id":"P-1001","firstName":"Ann","lastName":"Lee","dateOfBirth":"{stamp}"}}]"#);
    let store = MemoryStore::new().with_item(PATIENTS_KEY, &raw);
    let local_day = chrono::DateTime::parse_from_rfc3339(stamp).unwrap().with_timezone(&chrono::Local).date_naive();
    let found = find_patient(&store, "P-1001").unwrap().unwrap();
    assert_eq!(found.date_of_birth, Some(local_day));
}

#[test]
fn saved_patient_uses_camel_case_and_plain_date() {
    let json = serde_json::to_value(patient("P-1001")).unwrap();
    assert_eq!(json["firstName"], "Jane");
    assert_eq!(json["dateOfBirth"], "1985-04-12");
    assert!(json.get("notes").is_none());
}

#[test]
fn find_unknown_id_is_none() {
    let store = MemoryStore::new();
    create_patient(&store, &draft()).unwrap();
    assert_eq!(find_patient(&store, "P-9999").unwrap(), None);
}

#[test]
fn delete_removes_first_match_only() {
    let store = MemoryStore::new();
    save_patients(&store, &[patient("P-1001"), patient("P-1001"), patient("P-1002")]).unwrap();
    assert!(delete_patient(&store, "P-1001").unwrap());
    let remaining: Vec<String> = load_patients(&store).unwrap().into_iter().map(|p| p.id).collect();
    assert_eq!(remaining, vec!["P-1001", "P-1002"]);
    assert!(!delete_patient(&store, "P-4040").unwrap());
}

#[test]
fn filter_matches_name_id_and_email() {
    let mut john = patient("P-1001");
    john.first_name = "John".to_owned();
    john.last_name = "Doe".to_owned();
    john.email = "jd@clinic.org".to_owned();
    let items = vec![john, patient("P-1002")];
    assert_eq!(filter_patients(&items, "jane smi").len(), 1);
    assert_eq!(filter_patients(&items, "p-100").len(), 2);
    assert_eq!(filter_patients(&items, "CLINIC")[0].id, "P-1001");
    assert_eq!(filter_patients(&items, "").len(), 2);
    assert!(filter_patients(&items, "zzz").is_empty());
}
