//! Route table for the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app.rs` declares the `<Routes>` tree for rendering; this module is the
//! typed view of the same table used for page titles, sidebar highlighting
//! and tests. Paths that are not listed here resolve to [`AppRoute::NotFound`].

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Index,
    Login,
    Register,
    Patients,
    PatientCreate,
    PatientDetails(String),
    Appointments,
    AppointmentCreate,
    Records,
    RecordCreate,
    Billing,
    BillingCreate,
    Exercises,
    ExerciseCreate,
    Users,
    Reports,
    NotFound,
}

impl AppRoute {
    /// Map a location path (query and fragment allowed) to its route.
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Index,
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["patients"] => Self::Patients,
            ["patients", "new"] => Self::PatientCreate,
            ["patients", id] => Self::PatientDetails((*id).to_owned()),
            ["appointments"] => Self::Appointments,
            ["appointments", "new"] => Self::AppointmentCreate,
            ["records"] => Self::Records,
            ["records", "new"] => Self::RecordCreate,
            ["billing"] => Self::Billing,
            ["billing", "new"] => Self::BillingCreate,
            ["exercises"] => Self::Exercises,
            ["exercises", "new"] => Self::ExerciseCreate,
            ["users"] => Self::Users,
            ["reports"] => Self::Reports,
            _ => Self::NotFound,
        }
    }

    /// Canonical path. `NotFound` has no path of its own and maps to `/404`.
    pub fn path(&self) -> String {
        match self {
            Self::Index => "/".to_owned(),
            Self::Login => "/login".to_owned(),
            Self::Register => "/register".to_owned(),
            Self::Patients => "/patients".to_owned(),
            Self::PatientCreate => "/patients/new".to_owned(),
            Self::PatientDetails(id) => format!("/patients/{id}"),
            Self::Appointments => "/appointments".to_owned(),
            Self::AppointmentCreate => "/appointments/new".to_owned(),
            Self::Records => "/records".to_owned(),
            Self::RecordCreate => "/records/new".to_owned(),
            Self::Billing => "/billing".to_owned(),
            Self::BillingCreate => "/billing/new".to_owned(),
            Self::Exercises => "/exercises".to_owned(),
            Self::ExerciseCreate => "/exercises/new".to_owned(),
            Self::Users => "/users".to_owned(),
            Self::Reports => "/reports".to_owned(),
            Self::NotFound => "/404".to_owned(),
        }
    }

    /// Document title suffix.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Index => "Dashboard",
            Self::Login => "Sign In",
            Self::Register => "Create Account",
            Self::Patients => "Patients",
            Self::PatientCreate => "Add New Patient",
            Self::PatientDetails(_) => "Patient Details",
            Self::Appointments => "Appointments",
            Self::AppointmentCreate => "Schedule New Appointment",
            Self::Records => "Medical Records",
            Self::RecordCreate => "New Medical Record",
            Self::Billing => "Billing",
            Self::BillingCreate => "Create New Invoice",
            Self::Exercises => "Exercise Library",
            Self::ExerciseCreate => "New Exercise",
            Self::Users => "User Management",
            Self::Reports => "Analytics & Reports",
            Self::NotFound => "Page Not Found",
        }
    }
}

/// One sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub badge: Option<&'static str>,
}

const fn item(title: &'static str, href: &'static str, icon: &'static str) -> NavItem {
    NavItem { title, href, icon, badge: None }
}

pub const NAV_ITEMS: [NavItem; 8] = [
    item("Dashboard", "/", "⌂"),
    NavItem { badge: Some("New"), ..item("Patients", "/patients", "👥") },
    item("Appointments", "/appointments", "📅"),
    item("Medical Records", "/records", "📄"),
    item("Billing", "/billing", "$"),
    item("Exercises", "/exercises", "📖"),
    item("Reports", "/reports", "📊"),
    item("Users", "/users", "🛡"),
];

/// Sidebar highlight rule: `/` matches only itself, other entries match
/// their own path and anything nested below it.
pub fn is_nav_active(current: &str, href: &str) -> bool {
    let current = current.split(['?', '#']).next().unwrap_or_default();
    let current = if current.len() > 1 { current.trim_end_matches('/') } else { current };
    if href == "/" {
        return current == "/" || current.is_empty();
    }
    current == href || current.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}
