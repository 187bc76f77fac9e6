use super::*;

// =============================================================
// is_valid_email
// =============================================================

#[test]
fn accepts_ordinary_addresses() {
    assert!(is_valid_email("admin@patienttrack.com"));
    assert!(is_valid_email("  jane.doe+clinic@mail.example.org "));
}

#[test]
fn rejects_malformed_addresses() {
    for bad in ["", "plain", "@x.com", "a@", "a@b", "a@b..com", "a@@b.com", "a b@c.com", "a@b.com@c.com"] {
        assert!(!is_valid_email(bad), "expected {bad:?} to be rejected");
    }
}

// =============================================================
// FieldErrors
// =============================================================

#[test]
fn first_message_per_field_wins() {
    let mut errors = FieldErrors::new();
    errors.add("email", "first");
    errors.add("email", "second");
    assert_eq!(errors.get("email"), Some("first"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn require_flags_blank_values() {
    let mut errors = FieldErrors::new();
    errors.require("name", "   ", "Required");
    errors.require("city", "Boston", "Required");
    assert!(errors.contains("name"));
    assert!(!errors.contains("city"));
}

#[test]
fn min_chars_counts_trimmed_characters() {
    let mut errors = FieldErrors::new();
    errors.min_chars("name", " a ", 2, "too short");
    errors.min_chars("other", "ab", 2, "too short");
    assert_eq!(errors.get("name"), Some("too short"));
    assert!(!errors.contains("other"));
}

#[test]
fn into_result_is_ok_only_without_errors() {
    assert_eq!(FieldErrors::new().into_result(5), Ok(5));
    let mut errors = FieldErrors::new();
    errors.add("x", "bad");
    assert!(errors.into_result(5).is_err());
}

#[test]
fn password_pair_checks_length_and_match() {
    let mut errors = FieldErrors::new();
    check_password_pair(&mut errors, "short", "other");
    assert_eq!(errors.get("password"), Some(PASSWORD_TOO_SHORT));
    assert_eq!(errors.get("confirm_password"), Some(PASSWORDS_DO_NOT_MATCH));

    let mut ok = FieldErrors::new();
    check_password_pair(&mut ok, "longenough", "longenough");
    assert!(ok.is_empty());
}
