use super::*;
use crate::util::search::filter_items;
use crate::util::validation::{PASSWORDS_DO_NOT_MATCH, PASSWORD_TOO_SHORT};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
}

fn filled() -> UserDraft {
    UserDraft {
        name: "Dr. Priya Patel".to_owned(),
        email: "priya.patel@patienttrack.com".to_owned(),
        password: "s3cure-pass".to_owned(),
        confirm_password: "s3cure-pass".to_owned(),
        ..UserDraft::default()
    }
}

#[test]
fn seed_directory_matches_mock_data() {
    let users = seed_users();
    assert_eq!(users.len(), 4);
    assert_eq!(users[2].status, UserStatus::Inactive);
    assert_eq!(users[3].role, Role::Admin);
    assert_eq!(users[3].specialization, NO_SPECIALIZATION);
}

#[test]
fn new_user_is_active_joined_today_without_specialization() {
    let mut state = UsersState::default();
    let user = state.add(&filled(), today()).unwrap();
    assert_eq!(user.id, 5);
    assert_eq!(user.status, UserStatus::Active);
    assert_eq!(user.join_date, today());
    assert_eq!(user.specialization, "N/A");
    assert_eq!(user.role, Role::Therapist);
    assert_eq!(state.items.len(), 5);
}

#[test]
fn id_follows_highest_existing_after_deletes() {
    let mut state = UsersState::default();
    state.remove(2);
    assert_eq!(state.add(&filled(), today()).unwrap().id, 5);
}

#[test]
fn validation_messages() {
    let draft = UserDraft {
        name: "A".to_owned(),
        email: "bad".to_owned(),
        role: "owner".to_owned(),
        specialization: "X".to_owned(),
        password: "short".to_owned(),
        confirm_password: "other".to_owned(),
    };
    let errors = draft.validate(1, today()).unwrap_err();
    assert_eq!(errors.get("name"), Some("Name must be at least 2 characters."));
    assert_eq!(errors.get("email"), Some(INVALID_EMAIL));
    assert!(errors.contains("role"));
    assert_eq!(errors.get("specialization"), Some("Specialization must be at least 2 characters."));
    assert_eq!(errors.get("password"), Some(PASSWORD_TOO_SHORT));
    assert_eq!(errors.get("confirm_password"), Some(PASSWORDS_DO_NOT_MATCH));
}

#[test]
fn given_specialization_is_kept() {
    let draft = UserDraft { specialization: " Hand Therapy ".to_owned(), role: "admin".to_owned(), ..filled() };
    let user = draft.validate(1, today()).unwrap();
    assert_eq!(user.specialization, "Hand Therapy");
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn toggle_status_flips_only_target() {
    let mut state = UsersState::default();
    assert_eq!(state.toggle_status(3).map(|u| u.status), Some(UserStatus::Active));
    assert_eq!(state.toggle_status(1).map(|u| u.status), Some(UserStatus::Inactive));
    assert_eq!(state.find(2).unwrap().status, UserStatus::Active);
    assert!(state.toggle_status(99).is_none());
}

#[test]
fn remove_returns_deleted_user() {
    let mut state = UsersState::default();
    let removed = state.remove(1).unwrap();
    assert_eq!(removed.name, "Dr. Sarah Johnson");
    assert_eq!(state.items.len(), 3);
    assert!(state.remove(1).is_none());
}

#[test]
fn search_covers_role_and_specialization() {
    let users = seed_users();
    assert_eq!(filter_items(&users, "admin").len(), 1);
    assert_eq!(filter_items(&users, "therapy").len(), 3);
    assert_eq!(filter_items(&users, "CHEN")[0].id, 2);
}

#[test]
fn status_wire_format_is_lowercase() {
    assert_eq!(serde_json::to_string(&UserStatus::Inactive).unwrap(), r#""inactive""#);
}
