use super::*;

#[test]
fn submit_reports_not_implemented_for_any_draft() {
    assert_eq!(AppointmentDraft::default().submit(), NOT_IMPLEMENTED);
    let filled = AppointmentDraft {
        patient: "John Doe".to_owned(),
        date: "2025-04-02".to_owned(),
        time: "09:30".to_owned(),
        appointment_type: "Follow-up".to_owned(),
        notes: String::new(),
    };
    assert_eq!(filled.submit(), NOT_IMPLEMENTED);
}
