//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page maps to one entry in the route table and composes shared
//! components and state into a complete screen.

pub mod appointment_create;
pub mod appointments;
pub mod billing;
pub mod billing_create;
pub mod exercise_create;
pub mod exercises;
pub mod index;
pub mod login;
pub mod not_found;
pub mod patient_create;
pub mod patient_details;
pub mod patients;
pub mod record_create;
pub mod records;
pub mod register;
pub mod reports;
pub mod users;
