//! `/appointments/new`: scheduling form. Submitting only reports that
//! scheduling is not available.

use leptos::prelude::*;

use crate::components::form_field::{TextField, TextAreaField};
use crate::components::page_shell::{BackHeader, PageShell};
use crate::state::appointments::AppointmentDraft;
use crate::state::ui::{ToastKind, ToastState};
use crate::util::validation::FieldErrors;

#[component]
pub fn AppointmentCreatePage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let patient = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let time = RwSignal::new(String::new());
    let appointment_type = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = AppointmentDraft {
            patient: patient.get(),
            date: date.get(),
            time: time.get(),
            appointment_type: appointment_type.get(),
            notes: notes.get(),
        };
        let notice = draft.submit();
        toasts.update(|t| {
            t.push(ToastKind::Info, notice, None);
        });
    };

    view! {
        <PageShell>
            <BackHeader title="Schedule New Appointment" back_href="/appointments" back_label="Back to Appointments" />
            <div class="panel">
                <h2 class="panel__title">"New Appointment"</h2>
                <p class="panel__description">"Schedule an appointment for a patient"</p>
                <form class="form" on:submit=on_submit>
                    <TextField
                        label="Patient"
                        field="patient"
                        value=patient
                        errors=errors
                        placeholder="Select or search for a patient"
                    />
                    <div class="form__grid">
                        <TextField label="Date" field="date" value=date errors=errors input_type="date" />
                        <TextField label="Time" field="time" value=time errors=errors input_type="time" />
                    </div>
                    <TextField
                        label="Appointment Type"
                        field="appointment_type"
                        value=appointment_type
                        errors=errors
                        placeholder="Select appointment type"
                    />
                    <TextAreaField
                        label="Notes"
                        field="notes"
                        value=notes
                        errors=errors
                        placeholder="Add notes about this appointment"
                        rows=3
                    />
                    <div class="form__actions">
                        <button class="btn btn--primary" type="submit">"Schedule Appointment"</button>
                    </div>
                </form>
            </div>
        </PageShell>
    }
}
