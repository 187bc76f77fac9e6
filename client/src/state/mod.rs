//! Application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module owns one view's data: its record type, seed data, form draft,
//! validation and list operations. Pages wrap these plain structs in
//! `RwSignal`s provided through Leptos context, so everything here can be
//! tested without a browser.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod appointments;
pub mod dashboard;
pub mod exercises;
pub mod patients;
pub mod records;
pub mod reports;
pub mod session;
pub mod ui;
pub mod users;

/// Next integer id for an in-memory collection: one past the highest in use.
pub(crate) fn next_numeric_id(ids: impl Iterator<Item = u32>) -> u32 {
    ids.max().map_or(1, |max| max.saturating_add(1))
}
