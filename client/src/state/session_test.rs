use super::*;
use crate::storage::MemoryStore;

fn admin() -> SessionUser {
    SessionUser { email: "admin@patienttrack.com".to_owned(), name: None, role: Role::Admin }
}

#[test]
fn default_state_is_loading_without_user() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn loaded_clears_loading_flag() {
    let state = SessionState::loaded(Some(admin()));
    assert!(!state.loading);
    assert!(state.is_authenticated());
}

#[test]
fn save_then_load_round_trips_marker() {
    let store = MemoryStore::new();
    save_session(&store, &admin()).unwrap();
    assert_eq!(load_session(&store), Some(admin()));
}

#[test]
fn marker_uses_compact_wire_shape() {
    let store = MemoryStore::new();
    save_session(&store, &admin()).unwrap();
    let raw = store.get_item(USER_KEY).unwrap().unwrap();
    assert_eq!(raw, r#"{"email":"admin@patienttrack.com","role":"admin"}"#);
}

#[test]
fn registration_marker_with_name_is_accepted() {
    let store = MemoryStore::new().with_item(USER_KEY, r#"{"name":"Ada","email":"ada@x.io","role":"admin"}"#);
    let user = load_session(&store).unwrap();
    assert_eq!(user.display_name(), "Ada");
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn malformed_marker_counts_as_signed_out() {
    let store = MemoryStore::new().with_item(USER_KEY, "not-json");
    assert_eq!(load_session(&store), None);
}

#[test]
fn clear_session_removes_marker() {
    let store = MemoryStore::new();
    save_session(&store, &admin()).unwrap();
    clear_session(&store).unwrap();
    assert_eq!(load_session(&store), None);
    assert_eq!(store.get_item(USER_KEY).unwrap(), None);
}

#[test]
fn role_parse_and_labels() {
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
    assert_eq!(Role::parse("therapist"), Some(Role::Therapist));
    assert_eq!(Role::parse("owner"), None);
    assert_eq!(Role::Therapist.label(), "Therapist");
    assert_eq!(Role::Admin.as_str(), "admin");
}

#[test]
fn display_name_falls_back_to_email() {
    assert_eq!(admin().display_name(), "admin@patienttrack.com");
}
