use super::*;
use crate::util::validation::{PASSWORDS_DO_NOT_MATCH, PASSWORD_TOO_SHORT};

fn filled() -> RegisterDraft {
    RegisterDraft {
        name: "Ada Lovelace".to_owned(),
        email: "ada@clinic.org".to_owned(),
        password: "analytical".to_owned(),
        confirm_password: "analytical".to_owned(),
        accept_terms: true,
    }
}

#[test]
fn valid_registration_creates_admin_session() {
    let user = filled().validate().unwrap();
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(user.email, "ada@clinic.org");
}

#[test]
fn short_name_rejected() {
    let draft = RegisterDraft { name: " A ".to_owned(), ..filled() };
    assert_eq!(draft.validate().unwrap_err().get("name"), Some("Name must be at least 2 characters."));
}

#[test]
fn invalid_email_rejected() {
    let draft = RegisterDraft { email: "ada@".to_owned(), ..filled() };
    assert_eq!(draft.validate().unwrap_err().get("email"), Some(INVALID_EMAIL));
}

#[test]
fn short_password_rejected() {
    let draft = RegisterDraft { password: "seven77".to_owned(), confirm_password: "seven77".to_owned(), ..filled() };
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.get("password"), Some(PASSWORD_TOO_SHORT));
    assert!(!errors.contains("confirm_password"));
}

#[test]
fn mismatched_confirmation_rejected() {
    let draft = RegisterDraft { confirm_password: "analytica1".to_owned(), ..filled() };
    assert_eq!(draft.validate().unwrap_err().get("confirm_password"), Some(PASSWORDS_DO_NOT_MATCH));
}

#[test]
fn terms_must_be_accepted() {
    let draft = RegisterDraft { accept_terms: false, ..filled() };
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.get("accept_terms"), Some(TERMS_NOT_ACCEPTED));
    assert_eq!(errors.len(), 1);
}

#[test]
fn session_marker_matches_stored_shape() {
    let user = filled().validate().unwrap();
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json, serde_json::json!({"name": "Ada Lovelace", "email": "ada@clinic.org", "role": "admin"}));
}
