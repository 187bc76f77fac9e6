//! `/appointments`: scheduling overview. No appointments are stored yet.

use leptos::prelude::*;

use crate::components::page_shell::{EmptyState, PageHeader, PageShell};

#[component]
pub fn AppointmentsPage() -> impl IntoView {
    view! {
        <PageShell>
            <PageHeader
                title="Appointments"
                subtitle="Manage patient appointments"
                action=("Schedule Appointment", "/appointments/new")
            />
            <EmptyState
                icon="📅"
                title="No appointments scheduled"
                message="Start by scheduling your first appointment.".to_owned()
                action=("Schedule Appointment", "/appointments/new")
            />
        </PageShell>
    }
}
