//! `/patients/new`: patient intake form.

use leptos::prelude::*;

use crate::components::form_field::{SelectField, TextAreaField, TextField};
use crate::components::page_shell::{BackHeader, PageShell};
use crate::routes::AppRoute;
use crate::state::patients::{GENDERS, PatientDraft, PatientError, create_patient};
use crate::state::ui::ToastState;
use crate::storage::SharedStore;
use crate::util::navigation::use_redirect;
use crate::util::validation::FieldErrors;

#[component]
pub fn PatientCreatePage() -> impl IntoView {
    let store = expect_context::<SharedStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let redirect = use_redirect();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let date_of_birth = RwSignal::new(String::new());
    let gender = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let state = RwSignal::new(String::new());
    let postal_code = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = PatientDraft {
            first_name: first_name.get(),
            last_name: last_name.get(),
            email: email.get(),
            phone_number: phone_number.get(),
            date_of_birth: date_of_birth.get(),
            gender: gender.get(),
            address: address.get(),
            city: city.get(),
            state: state.get(),
            postal_code: postal_code.get(),
            notes: notes.get(),
        };
        match create_patient(store.as_ref(), &draft) {
            Ok(patient) => {
                errors.set(FieldErrors::new());
                toasts.update(|t| {
                    t.success("Patient created", format!("{} has been added.", patient.full_name()));
                });
                redirect.set(Some(AppRoute::Patients));
            }
            Err(PatientError::Invalid(e)) => errors.set(e),
            Err(PatientError::Storage(e)) => {
                leptos::logging::error!("failed to save patient: {e}");
                toasts.update(|t| {
                    t.error("Could not save patient", e.to_string());
                });
            }
        }
    };

    view! {
        <PageShell>
            <BackHeader title="Create New Patient" back_href="/patients" back_label="Back to Patients" />
            <div class="panel">
                <form class="form" on:submit=on_submit>
                    <h2 class="form__section">"Personal Information"</h2>
                    <div class="form__grid">
                        <TextField label="First Name" field="first_name" value=first_name errors=errors placeholder="John" />
                        <TextField label="Last Name" field="last_name" value=last_name errors=errors placeholder="Doe" />
                        <TextField
                            label="Email"
                            field="email"
                            value=email
                            errors=errors
                            input_type="email"
                            placeholder="john.doe@example.com"
                        />
                        <TextField
                            label="Phone Number"
                            field="phone_number"
                            value=phone_number
                            errors=errors
                            input_type="tel"
                            placeholder="(555) 123-4567"
                        />
                        <TextField
                            label="Date of Birth"
                            field="date_of_birth"
                            value=date_of_birth
                            errors=errors
                            input_type="date"
                        />
                        <SelectField
                            label="Gender"
                            field="gender"
                            value=gender
                            errors=errors
                            options=GENDERS.to_vec()
                            placeholder="Select gender"
                        />
                    </div>
                    <h2 class="form__section">"Address"</h2>
                    <div class="form__grid">
                        <TextField label="Street Address" field="address" value=address errors=errors placeholder="123 Main St" />
                        <TextField label="City" field="city" value=city errors=errors />
                        <TextField label="State" field="state" value=state errors=errors />
                        <TextField label="Postal Code" field="postal_code" value=postal_code errors=errors />
                    </div>
                    <TextAreaField
                        label="Notes"
                        field="notes"
                        value=notes
                        errors=errors
                        placeholder="Additional information about the patient"
                    />
                    <div class="form__actions">
                        <a class="btn btn--outline" href="/patients">"Cancel"</a>
                        <button class="btn btn--primary" type="submit">"Create Patient"</button>
                    </div>
                </form>
            </div>
        </PageShell>
    }
}
