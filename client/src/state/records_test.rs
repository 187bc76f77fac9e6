use super::*;
use crate::util::search::filter_items;

fn filled() -> RecordDraft {
    RecordDraft {
        patient_name: "Ann Lee".to_owned(),
        patient_id: "P-1010".to_owned(),
        record_type: "Progress Note".to_owned(),
        date: "2025-04-01".to_owned(),
        description: "  Improving range of motion ".to_owned(),
        created_by: "Dr. Smith".to_owned(),
    }
}

#[test]
fn seed_has_three_records() {
    let state = RecordsState::default();
    assert_eq!(state.items.len(), 3);
    assert_eq!(state.items[0].patient_name, "John Doe");
    assert_eq!(state.items[2].date, NaiveDate::from_ymd_opt(2025, 3, 8).unwrap());
}

#[test]
fn dated_draft_prefills_date() {
    let draft = RecordDraft::dated(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    assert_eq!(draft.date, "2025-06-01");
    assert!(draft.patient_name.is_empty());
}

#[test]
fn each_required_field_is_checked() {
    let errors = RecordDraft::default().validate(9).unwrap_err();
    for field in ["patient_name", "patient_id", "record_type", "date"] {
        assert_eq!(errors.get(field), Some(REQUIRED_FIELDS_MISSING), "{field}");
    }
    assert!(!errors.contains("description"));
    assert!(!errors.contains("created_by"));
}

#[test]
fn unknown_record_type_is_rejected() {
    let draft = RecordDraft { record_type: "Invoice".to_owned(), ..filled() };
    assert!(draft.validate(1).unwrap_err().contains("record_type"));
}

#[test]
fn add_appends_with_next_id() {
    let mut state = RecordsState::default();
    let added = state.add(&filled()).unwrap();
    assert_eq!(added.id, 4);
    assert_eq!(added.description, "Improving range of motion");
    assert_eq!(state.items.len(), 4);
}

#[test]
fn failed_add_leaves_collection() {
    let mut state = RecordsState::default();
    assert!(state.add(&RecordDraft::default()).is_err());
    assert_eq!(state.items, seed_records());
}

#[test]
fn remove_deletes_only_that_record() {
    let mut state = RecordsState::default();
    assert!(state.remove(2));
    let ids: Vec<u32> = state.items.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert!(!state.remove(2));
}

#[test]
fn search_covers_name_id_and_type() {
    let items = seed_records();
    assert_eq!(filter_items(&items, "jane")[0].id, 2);
    assert_eq!(filter_items(&items, "p-1003")[0].id, 3);
    assert_eq!(filter_items(&items, "CONSULT")[0].id, 1);
    assert!(filter_items(&items, "lower back").is_empty());
}
