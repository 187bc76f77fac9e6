#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn memory_store_get_missing_key_is_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get_item("missing").unwrap(), None);
}

#[test]
fn memory_store_set_then_get() {
    let store = MemoryStore::new();
    store.set_item("k", "v").unwrap();
    assert_eq!(store.get_item("k").unwrap(), Some("v".to_owned()));
}

#[test]
fn memory_store_remove_clears_key() {
    let store = MemoryStore::new().with_item("k", "v");
    store.remove_item("k").unwrap();
    assert_eq!(store.get_item("k").unwrap(), None);
    store.remove_item("k").unwrap();
}

#[test]
fn load_json_missing_key_is_none() {
    let store = MemoryStore::new();
    let value: Option<Vec<u32>> = load_json(&store, "nums").unwrap();
    assert!(value.is_none());
}

#[test]
fn load_json_reports_parse_error_with_key() {
    let store = MemoryStore::new().with_item(PATIENTS_KEY, "{not json");
    let err = load_json::<Vec<u32>>(&store, PATIENTS_KEY).unwrap_err();
    assert!(matches!(err, StorageError::Parse { ref key, .. } if key == PATIENTS_KEY));
    assert!(err.to_string().contains("patients"));
}

#[test]
fn save_json_writes_compact_json() {
    let store = MemoryStore::new();
    save_json(&store, "nums", &[1, 2, 3]).unwrap();
    assert_eq!(store.get_item("nums").unwrap(), Some("[1,2,3]".to_owned()));
    let back: Option<Vec<u32>> = load_json(&store, "nums").unwrap();
    assert_eq!(back, Some(vec![1, 2, 3]));
}

#[test]
fn local_storage_is_unavailable_outside_browser() {
    let store = LocalStorage;
    assert!(matches!(store.get_item(USER_KEY), Err(StorageError::Unavailable)));
    assert!(matches!(store.set_item(USER_KEY, "{}"), Err(StorageError::Unavailable)));
}

#[test]
fn default_store_starts_empty() {
    let store = default_store();
    assert_eq!(store.get_item(USER_KEY).unwrap(), None);
}
