//! `/patients`: searchable table of stored patients.

use leptos::prelude::*;

use crate::components::page_shell::{EmptyState, PageHeader, PageShell};
use crate::components::search_input::SearchInput;
use crate::routes::AppRoute;
use crate::state::patients::{PatientsState, filter_patients, load_patients};
use crate::storage::SharedStore;
use crate::util::format::{capitalize, long_date_or};

/// Patient list read from storage once the page mounts in the browser.
/// Server rendering and the first client render both show the loading state.
pub fn use_patients() -> RwSignal<PatientsState> {
    let store = expect_context::<SharedStore>();
    let patients = RwSignal::new(PatientsState::default());
    Effect::new(move || {
        patients.set(PatientsState::from_load(load_patients(store.as_ref())));
    });
    patients
}

#[component]
pub fn PatientsPage() -> impl IntoView {
    let patients = use_patients();
    let query = RwSignal::new(String::new());

    let table = move || {
        let state = patients.get();
        if state.loading {
            return view! {
                <div class="panel panel--center">
                    <div class="spinner"></div>
                    <p>"Loading patient records..."</p>
                </div>
            }
            .into_any();
        }
        if state.items.is_empty() {
            return view! {
                <EmptyState
                    icon="👤"
                    title="No patients found"
                    message="Start by adding your first patient record to the system.".to_owned()
                    action=("Add New Patient", "/patients/new")
                />
            }
            .into_any();
        }
        let q = query.get();
        let rows = filter_patients(&state.items, &q)
            .into_iter()
            .map(|p| {
                view! {
                    <tr>
                        <td class="table__strong">{p.id.clone()}</td>
                        <td>
                            <div class="table__person">
                                <span class="table__avatar">"👤"</span>
                                <div>
                                    <div class="table__strong">{p.full_name()}</div>
                                    <div class="table__muted">{p.email.clone()}</div>
                                </div>
                            </div>
                        </td>
                        <td>{p.phone_number.clone()}</td>
                        <td>{long_date_or(p.date_of_birth, "N/A")}</td>
                        <td>{capitalize(&p.gender)}</td>
                        <td>{p.location()}</td>
                        <td class="table__actions">
                            <a class="btn btn--ghost btn--sm" href=AppRoute::PatientDetails(p.id.clone()).path()>"View"</a>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>();
        let empty = rows.is_empty();
        view! {
            <div class="panel panel--flush">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Patient ID"</th>
                            <th>"Patient Name"</th>
                            <th>"Phone Number"</th>
                            <th>"Date of Birth"</th>
                            <th>"Gender"</th>
                            <th>"Location"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
                {empty.then(|| view! { <p class="table__no-results">"No patients match your search."</p> })}
            </div>
        }
        .into_any()
    };

    view! {
        <PageShell>
            <PageHeader title="Patients" subtitle="Manage patient records" action=("Add New Patient", "/patients/new") />
            <div class="toolbar-row">
                <SearchInput query=query placeholder="Search patients..." />
            </div>
            {table}
        </PageShell>
    }
}
