//! `/records/new`: add a medical record to the in-memory list.

use leptos::prelude::*;

use crate::components::form_field::{SelectField, TextAreaField, TextField, same_value_options};
use crate::components::page_shell::{BackHeader, PageShell};
use crate::routes::AppRoute;
use crate::state::records::{RECORD_TYPES, REQUIRED_FIELDS_MISSING, RecordDraft, RecordsState};
use crate::state::ui::ToastState;
use crate::util::format::today;
use crate::util::navigation::use_redirect;
use crate::util::timing::run_after;
use crate::util::validation::FieldErrors;

const SUBMIT_DELAY_MS: u64 = 800;

#[component]
pub fn RecordCreatePage() -> impl IntoView {
    let records = expect_context::<RwSignal<RecordsState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let redirect = use_redirect();

    let initial = RecordDraft::dated(today());
    let patient_name = RwSignal::new(String::new());
    let patient_id = RwSignal::new(String::new());
    let record_type = RwSignal::new(String::new());
    let date = RwSignal::new(initial.date);
    let description = RwSignal::new(String::new());
    let created_by = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let draft = RecordDraft {
            patient_name: patient_name.get(),
            patient_id: patient_id.get(),
            record_type: record_type.get(),
            date: date.get(),
            description: description.get(),
            created_by: created_by.get(),
        };
        if let Err(e) = draft.validate(0) {
            errors.set(e);
            toasts.update(|t| {
                t.error("Validation Error", REQUIRED_FIELDS_MISSING);
            });
            return;
        }
        errors.set(FieldErrors::new());
        busy.set(true);
        run_after(SUBMIT_DELAY_MS, move || {
            let mut outcome = None;
            records.update(|r| outcome = Some(r.add(&draft)));
            busy.set(false);
            if let Some(Ok(_)) = outcome {
                toasts.update(|t| {
                    t.success("Record created", "The medical record has been created successfully");
                });
                redirect.set(Some(AppRoute::Records));
            }
        });
    };

    view! {
        <PageShell>
            <BackHeader title="New Medical Record" back_href="/records" back_label="Back" />
            <div class="panel panel--narrow">
                <h2 class="panel__title">"Record Information"</h2>
                <form class="form" on:submit=on_submit>
                    <div class="form__grid">
                        <TextField
                            label="Patient Name *"
                            field="patient_name"
                            value=patient_name
                            errors=errors
                            placeholder="Enter patient name"
                        />
                        <TextField
                            label="Patient ID *"
                            field="patient_id"
                            value=patient_id
                            errors=errors
                            placeholder="Enter patient ID"
                        />
                        <SelectField
                            label="Record Type *"
                            field="record_type"
                            value=record_type
                            errors=errors
                            options=same_value_options(&RECORD_TYPES)
                            placeholder="Select record type"
                        />
                        <TextField label="Date *" field="date" value=date errors=errors input_type="date" />
                    </div>
                    <TextAreaField
                        label="Description"
                        field="description"
                        value=description
                        errors=errors
                        placeholder="Enter record details"
                        rows=5
                    />
                    <TextField
                        label="Created By"
                        field="created_by"
                        value=created_by
                        errors=errors
                        placeholder="Enter your name"
                    />
                    <div class="form__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { "Save Record" }}
                        </button>
                    </div>
                </form>
            </div>
        </PageShell>
    }
}
