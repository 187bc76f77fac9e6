//! Role gate for admin-only screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Purely presentational: the session marker lives in browser storage and can
//! be edited by the user, so this only decides which view to render.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::{Role, SessionState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Session not read from storage yet.
    Pending,
    Granted,
    /// Nobody is signed in.
    SignedOut,
    /// Signed in without the required role.
    Forbidden,
}

/// Decide whether the current session may view a screen that needs `role`.
pub fn access_for(session: &SessionState, role: Role) -> Access {
    if session.loading {
        return Access::Pending;
    }
    match &session.user {
        None => Access::SignedOut,
        Some(user) if user.role == role => Access::Granted,
        Some(_) => Access::Forbidden,
    }
}
