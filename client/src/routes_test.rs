use super::*;

#[test]
fn resolves_every_listed_route() {
    let cases = [
        ("/", AppRoute::Index),
        ("/login", AppRoute::Login),
        ("/register", AppRoute::Register),
        ("/patients", AppRoute::Patients),
        ("/patients/new", AppRoute::PatientCreate),
        ("/patients/P-1001", AppRoute::PatientDetails("P-1001".to_owned())),
        ("/appointments", AppRoute::Appointments),
        ("/appointments/new", AppRoute::AppointmentCreate),
        ("/records", AppRoute::Records),
        ("/records/new", AppRoute::RecordCreate),
        ("/billing", AppRoute::Billing),
        ("/billing/new", AppRoute::BillingCreate),
        ("/exercises", AppRoute::Exercises),
        ("/exercises/new", AppRoute::ExerciseCreate),
        ("/users", AppRoute::Users),
        ("/reports", AppRoute::Reports),
    ];
    for (path, route) in cases {
        assert_eq!(AppRoute::resolve(path), route, "{path}");
        assert_eq!(route.path(), path);
    }
}

#[test]
fn unknown_paths_resolve_to_not_found() {
    for path in ["/settings", "/patients/P-1/edit", "/records/1", "/nope", "/users/new"] {
        assert_eq!(AppRoute::resolve(path), AppRoute::NotFound, "{path}");
    }
}

#[test]
fn new_is_not_treated_as_patient_id() {
    assert_eq!(AppRoute::resolve("/patients/new"), AppRoute::PatientCreate);
}

#[test]
fn query_fragment_and_trailing_slash_are_ignored() {
    assert_eq!(AppRoute::resolve("/records/?q=jane"), AppRoute::Records);
    assert_eq!(AppRoute::resolve("/users#top"), AppRoute::Users);
}

#[test]
fn nav_items_all_resolve() {
    for item in NAV_ITEMS {
        assert_ne!(AppRoute::resolve(item.href), AppRoute::NotFound, "{}", item.href);
    }
}

#[test]
fn nav_active_rules() {
    assert!(is_nav_active("/", "/"));
    assert!(!is_nav_active("/patients", "/"));
    assert!(is_nav_active("/patients", "/patients"));
    assert!(is_nav_active("/patients/P-1001", "/patients"));
    assert!(is_nav_active("/patients/", "/patients"));
    assert!(!is_nav_active("/patientsx", "/patients"));
}

#[test]
fn titles() {
    assert_eq!(AppRoute::NotFound.title(), "Page Not Found");
    assert_eq!(AppRoute::PatientDetails("x".to_owned()).title(), "Patient Details");
}
