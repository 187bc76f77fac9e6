//! Current-user session marker.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only process-wide state in the dashboard. It is stored as JSON under
//! the `user` key, read once when the app mounts, and written by login,
//! registration and logout. Components read it from context to decide what
//! to render; nothing here enforces access.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::storage::{self, KeyValueStore, StorageError, USER_KEY};

/// Staff role, shared by the session marker and the user directory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Therapist,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Therapist => "therapist",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Therapist => "Therapist",
        }
    }

    /// Parse a form value. Unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "admin" => Some(Self::Admin),
            "therapist" => Some(Self::Therapist),
            _ => None,
        }
    }
}

/// Identity written to storage on login or registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub role: Role,
}

impl SessionUser {
    /// Name if known, otherwise the email address.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// Session state provided through context.
///
/// Starts in `loading` so server-rendered markup and the first client render
/// agree; the app clears it after reading storage in the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    pub fn loaded(user: Option<SessionUser>) -> Self {
        Self { user, loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Read the session marker. Unreadable or malformed markers count as signed out.
pub fn load_session(store: &dyn KeyValueStore) -> Option<SessionUser> {
    match storage::load_json::<SessionUser>(store, USER_KEY) {
        Ok(user) => user,
        Err(StorageError::Unavailable) => None,
        Err(e) => {
            leptos::logging::warn!("ignoring session marker: {e}");
            None
        }
    }
}

/// Persist the session marker.
///
/// # Errors
///
/// Returns an error if the marker cannot be encoded or written.
pub fn save_session(store: &dyn KeyValueStore, user: &SessionUser) -> Result<(), StorageError> {
    storage::save_json(store, USER_KEY, user)
}

/// Remove the session marker.
///
/// # Errors
///
/// Returns an error if the store cannot be reached.
pub fn clear_session(store: &dyn KeyValueStore) -> Result<(), StorageError> {
    store.remove_item(USER_KEY)
}
