//! Form validation primitives.
//!
//! DESIGN
//! ======
//! Every form validates into `Result<T, FieldErrors>`. `FieldErrors` keeps the
//! first message per field so pages can render one inline message under each
//! input.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

/// Field name -> first validation message for that field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    messages: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless the field already has one.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.messages.entry(field).or_insert_with(|| message.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.messages.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.messages.contains_key(field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// `Ok(value)` when no field failed, otherwise the collected errors.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one field has a message.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }

    /// Record `message` for `field` when `value` is blank.
    pub fn require(&mut self, field: &'static str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.add(field, message);
        }
    }

    /// Record `message` for `field` when `value` has fewer than `min` chars.
    pub fn min_chars(&mut self, field: &'static str, value: &str, min: usize, message: &str) {
        if value.trim().chars().count() < min {
            self.add(field, message);
        }
    }

    /// Record `message` for `field` when `value` is not a plausible email.
    pub fn email(&mut self, field: &'static str, value: &str, message: &str) {
        if !is_valid_email(value) {
            self.add(field, message);
        }
    }
}

pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters.";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match.";
pub const MIN_PASSWORD_CHARS: usize = 8;

/// Structural email check: one `@`, a non-empty local part, and a dotted
/// domain without empty labels or whitespace.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// Shared password + confirmation rules used by registration and user admin.
pub fn check_password_pair(errors: &mut FieldErrors, password: &str, confirm: &str) {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        errors.add("password", PASSWORD_TOO_SHORT);
    }
    if password != confirm {
        errors.add("confirm_password", PASSWORDS_DO_NOT_MATCH);
    }
}
