//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and cross-page rules
//! (search, validation, formatting) from page and component logic to improve
//! reuse and testability.

pub mod format;
pub mod guard;
pub mod navigation;
pub mod search;
pub mod timing;
pub mod validation;
