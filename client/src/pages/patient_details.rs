//! `/patients/:id`: one patient's profile with a confirmed delete.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::page_shell::PageShell;
use crate::routes::AppRoute;
use crate::state::patients::{Patient, delete_patient, find_patient};
use crate::state::ui::ToastState;
use crate::storage::SharedStore;
use crate::util::format::{capitalize, long_date_or};
use crate::util::navigation::use_redirect;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Lookup {
    Loading,
    Found(Patient),
    Missing,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum DetailTab {
    #[default]
    Overview,
    MedicalInfo,
    Appointments,
    Billing,
}

impl DetailTab {
    const ALL: [Self; 4] = [Self::Overview, Self::MedicalInfo, Self::Appointments, Self::Billing];

    fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::MedicalInfo => "Medical Info",
            Self::Appointments => "Appointments",
            Self::Billing => "Billing",
        }
    }
}

#[component]
pub fn PatientDetailsPage() -> impl IntoView {
    let store = expect_context::<SharedStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let redirect = use_redirect();
    let lookup = RwSignal::new(Lookup::Loading);
    let confirm_delete = RwSignal::new(false);

    let patient_id = move || params.read().get("id").unwrap_or_default();

    let store_load = store.clone();
    Effect::new(move || {
        let id = patient_id();
        let found = match find_patient(store_load.as_ref(), &id) {
            Ok(found) => found,
            Err(e) => {
                leptos::logging::error!("Error fetching patient details: {e}");
                None
            }
        };
        lookup.set(found.map_or(Lookup::Missing, Lookup::Found));
    });

    let on_cancel = Callback::new(move |()| confirm_delete.set(false));
    let on_confirm = Callback::new(move |()| {
        confirm_delete.set(false);
        let id = patient_id();
        match delete_patient(store.as_ref(), &id) {
            Ok(_) => {
                toasts.update(|t| {
                    t.success("Patient deleted successfully", format!("{id} has been removed."));
                });
                redirect.set(Some(AppRoute::Patients));
            }
            Err(e) => {
                leptos::logging::error!("Error deleting patient: {e}");
                toasts.update(|t| {
                    t.error("Error deleting patient", e.to_string());
                });
            }
        }
    });

    move || match lookup.get() {
        Lookup::Loading => view! {
            <div class="page-loading">
                <div class="spinner"></div>
            </div>
        }
        .into_any(),
        Lookup::Missing => view! {
            <div class="not-found">
                <h1 class="not-found__title">"Patient Not Found"</h1>
                <p class="not-found__text">"The patient record you're looking for doesn't exist or has been removed."</p>
                <a class="btn btn--primary" href="/patients">"← Back to Patients"</a>
            </div>
        }
        .into_any(),
        Lookup::Found(patient) => view! {
            <PageShell>
                <div class="page-header">
                    <div class="back-header">
                        <a class="btn btn--ghost" href="/patients">"← Back"</a>
                        <h1 class="back-header__title">"Patient Details"</h1>
                    </div>
                    <div class="page-header__actions">
                        <button class="btn btn--danger" on:click=move |_| confirm_delete.set(true)>
                            "Delete"
                        </button>
                    </div>
                </div>
                <div class="details-layout">
                    <ProfileCard patient=patient.clone() />
                    <DetailTabs notes=patient.notes.clone() />
                </div>
                <Show when=move || confirm_delete.get()>
                    <ConfirmDialog
                        title="Delete Patient Record"
                        message="Are you sure you want to delete this patient record? This action cannot be undone.".to_owned()
                        on_cancel=on_cancel
                        on_confirm=on_confirm
                    />
                </Show>
            </PageShell>
        }
        .into_any(),
    }
}

#[component]
fn ProfileCard(patient: Patient) -> impl IntoView {
    let address = format!("{}, {} {}", patient.city, patient.state, patient.postal_code);
    view! {
        <section class="panel profile-card">
            <div class="profile-card__head">
                <div class="profile-card__avatar">"👤"</div>
                <h2 class="profile-card__name">{patient.full_name()}</h2>
                <p class="profile-card__id">{patient.id.clone()}</p>
            </div>
            <dl class="profile-card__facts">
                <dt>"Email"</dt>
                <dd>{patient.email.clone()}</dd>
                <dt>"Phone"</dt>
                <dd>{patient.phone_number.clone()}</dd>
                <dt>"Date of Birth"</dt>
                <dd>{long_date_or(patient.date_of_birth, "N/A")}</dd>
                <dt>"Gender"</dt>
                <dd>{capitalize(&patient.gender)}</dd>
                <dt>"Address"</dt>
                <dd>{patient.address.clone()} <br /> {address}</dd>
            </dl>
        </section>
    }
}

#[component]
fn DetailTabs(notes: Option<String>) -> impl IntoView {
    let active = RwSignal::new(DetailTab::default());

    let body = move || match active.get() {
        DetailTab::Overview => {
            let notes = notes.clone();
            view! {
                <section class="panel">
                    <h3 class="panel__title">"Patient Notes"</h3>
                    <p class="panel__description">"Additional information about the patient"</p>
                    {match notes {
                        Some(text) => view! { <p class="panel__text">{text}</p> }.into_any(),
                        None => view! { <p class="panel__muted">"No notes available"</p> }.into_any(),
                    }}
                </section>
                <section class="panel">
                    <h3 class="panel__title">"Recent Activity"</h3>
                    <p class="panel__description">"Latest updates on this patient"</p>
                    <p class="panel__muted">"No recent activity"</p>
                </section>
            }
            .into_any()
        }
        DetailTab::MedicalInfo => placeholder("Medical Information", "Clinical history and details", "Add Medical Record", "/records/new"),
        DetailTab::Appointments => placeholder("Appointments", "Schedule and history", "Schedule Appointment", "/appointments/new"),
        DetailTab::Billing => placeholder("Billing Information", "Invoices and payment history", "Create Invoice", "/billing/new"),
    };

    view! {
        <div class="tabs">
            <div class="tabs__list" role="tablist">
                {DetailTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="tabs__trigger"
                                class:tabs__trigger--active=move || active.get() == tab
                                role="tab"
                                on:click=move |_| active.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="tabs__content">{body}</div>
        </div>
    }
}

fn placeholder(title: &'static str, description: &'static str, action: &'static str, href: &'static str) -> AnyView {
    view! {
        <section class="panel">
            <h3 class="panel__title">{title}</h3>
            <p class="panel__description">{description}</p>
            <div class="panel__empty">
                <p>"No information recorded yet."</p>
                <a class="btn btn--primary btn--sm" href=href>"+ " {action}</a>
            </div>
        </section>
    }
    .into_any()
}
