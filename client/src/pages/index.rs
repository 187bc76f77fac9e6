//! `/`: landing screen when signed out, practice dashboard when signed in.

use leptos::prelude::*;
use leptos_meta::Title;

use super::patients::use_patients;
use crate::components::dashboard_card::DashboardCard;
use crate::components::page_shell::PageShell;
use crate::routes::AppRoute;
use crate::state::dashboard::{recent_patients, stat_cards};
use crate::state::session::SessionState;

#[component]
pub fn IndexPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    move || {
        let state = session.get();
        if state.loading {
            view! { <div class="page-loading">"Loading..."</div> }.into_any()
        } else if state.is_authenticated() {
            view! { <Dashboard /> }.into_any()
        } else {
            view! { <Landing /> }.into_any()
        }
    }
}

#[component]
fn Landing() -> impl IntoView {
    view! {
        <Title text="Welcome" />
        <div class="landing">
            <div class="landing__body">
                <div class="auth-card__logo landing__logo">"P"</div>
                <h1 class="landing__title">"Welcome to PatientTrack Pro"</h1>
                <p class="landing__subtitle">"A complete management solution for your therapeutic clinic"</p>
                <div class="landing__actions">
                    <a class="btn btn--primary btn--lg" href="/login">"Sign In"</a>
                    <a class="btn btn--outline btn--lg" href="/register">"Register"</a>
                </div>
            </div>
        </div>
    }
}

const QUICK_ACTIONS: [(&str, &str); 4] = [
    ("New Patient Record", "/patients/new"),
    ("Schedule Appointment", "/appointments/new"),
    ("Add Medical Record", "/records/new"),
    ("Create Invoice", "/billing/new"),
];

#[component]
fn Dashboard() -> impl IntoView {
    let patients = use_patients();

    view! {
        <PageShell>
            <div class="page-header">
                <div>
                    <h1 class="page-header__title">"Dashboard"</h1>
                    <p class="page-header__subtitle">"Welcome to PatientTrack Pro"</p>
                </div>
                <div class="page-header__actions">
                    <a class="btn btn--outline" href="/appointments">"View Calendar"</a>
                    <a class="btn btn--primary" href="/reports">"Generate Report"</a>
                </div>
            </div>
            <div class="card-grid card-grid--four">
                {move || {
                    stat_cards(patients.get().items.len())
                        .into_iter()
                        .map(|card| view! { <DashboardCard card=card /> })
                        .collect_view()
                }}
            </div>
            <div class="card-grid card-grid--three">
                <section class="panel">
                    <div class="panel__header">
                        <h2 class="panel__title">"Recent Patients"</h2>
                        <a class="panel__link" href="/patients">"View all ↗"</a>
                    </div>
                    <p class="panel__description">"Latest patient records added"</p>
                    {move || {
                        let state = patients.get();
                        if state.items.is_empty() {
                            view! {
                                <div class="panel__empty">
                                    <h3>"No patients yet"</h3>
                                    <p>"Start by adding your first patient record"</p>
                                    <a class="btn btn--primary btn--sm" href="/patients/new">"+ Add Patient"</a>
                                </div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <ul class="recent-list">
                                    {recent_patients(&state.items)
                                        .iter()
                                        .map(|p| {
                                            view! {
                                                <li class="recent-list__item">
                                                    <div class="recent-list__avatar">"👤"</div>
                                                    <div class="recent-list__text">
                                                        <p class="recent-list__name">{p.full_name()}</p>
                                                        <p class="recent-list__meta">{p.id.clone()}</p>
                                                    </div>
                                                    <a class="btn btn--ghost btn--sm" href=AppRoute::PatientDetails(p.id.clone()).path()>
                                                        "Details"
                                                    </a>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            }
                                .into_any()
                        }
                    }}
                </section>
                <section class="panel">
                    <div class="panel__header">
                        <h2 class="panel__title">"Today's Appointments"</h2>
                        <a class="panel__link" href="/appointments">"View all ↗"</a>
                    </div>
                    <p class="panel__description">"Scheduled for today"</p>
                    <div class="panel__empty">
                        <h3>"No appointments today"</h3>
                        <p>"Schedule a new appointment to get started"</p>
                        <a class="btn btn--primary btn--sm" href="/appointments/new">"+ Add Appointment"</a>
                    </div>
                </section>
                <section class="panel">
                    <div class="panel__header">
                        <h2 class="panel__title">"Quick Actions"</h2>
                    </div>
                    <p class="panel__description">"Frequently used actions"</p>
                    <div class="quick-actions">
                        {QUICK_ACTIONS
                            .iter()
                            .map(|(label, href)| view! { <a class="btn btn--outline btn--block" href=*href>"+ " {*label}</a> })
                            .collect_view()}
                    </div>
                </section>
            </div>
        </PageShell>
    }
}
