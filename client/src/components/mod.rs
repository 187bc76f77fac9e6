//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome (navbar, sidebar, toasts) and the
//! shared form and list building blocks, reading and writing shared state
//! from Leptos context providers.

pub mod confirm_dialog;
pub mod dashboard_card;
pub mod form_field;
pub mod navbar;
pub mod page_shell;
pub mod search_input;
pub mod sidebar;
pub mod toast_region;
