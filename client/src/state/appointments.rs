//! Appointment scheduling form. Submitting is not wired to any storage yet.

#[cfg(test)]
#[path = "appointments_test.rs"]
mod appointments_test;

/// Notice shown on every submit of the scheduling form.
pub const NOT_IMPLEMENTED: &str = "This feature is not implemented yet";

/// Raw text of the scheduling form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppointmentDraft {
    pub patient: String,
    pub date: String,
    pub time: String,
    pub appointment_type: String,
    pub notes: String,
}

impl AppointmentDraft {
    /// Outcome of submitting the form: always the not-implemented notice.
    /// The draft is left as entered.
    pub fn submit(&self) -> &'static str {
        leptos::logging::log!("appointment scheduling requested for '{}'", self.patient.trim());
        NOT_IMPLEMENTED
    }
}
