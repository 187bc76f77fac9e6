//! Figures for the signed-in landing dashboard.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use super::patients::Patient;

/// Number of patients listed under "Recent Patients".
pub const RECENT_PATIENT_LIMIT: usize = 5;

/// Percentage change shown under a card value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trend {
    pub value: i32,
}

impl Trend {
    pub fn is_positive(self) -> bool {
        self.value >= 0
    }

    /// Signed percentage, e.g. `+12%` or `-3%`.
    pub fn label(self) -> String {
        let sign = if self.is_positive() { '+' } else { '-' };
        format!("{sign}{}%", self.value.unsigned_abs())
    }
}

/// One summary card on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub icon: &'static str,
    pub trend: Option<Trend>,
}

/// The four summary cards. Only the patient total is live; the others are
/// fixed figures until appointments and billing carry real data.
pub fn stat_cards(patient_count: usize) -> Vec<StatCard> {
    let card = |title, value: &str, icon, trend| StatCard {
        title,
        value: value.to_owned(),
        icon,
        trend: Some(Trend { value: trend }),
    };
    vec![
        card("Total Patients", &patient_count.to_string(), "👥", 12),
        card("Appointments Today", "8", "📅", 5),
        card("New Records", "12", "📄", 3),
        card("Revenue", "$8,590", "$", 7),
    ]
}

/// First few stored patients, in storage order.
pub fn recent_patients(patients: &[Patient]) -> &[Patient] {
    &patients[..patients.len().min(RECENT_PATIENT_LIMIT)]
}
