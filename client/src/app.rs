//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_region::ToastRegion;
use crate::pages::{
    appointment_create::AppointmentCreatePage, appointments::AppointmentsPage, billing::BillingPage,
    billing_create::BillingCreatePage, exercise_create::ExerciseCreatePage, exercises::ExercisesPage,
    index::IndexPage, login::LoginPage, not_found::NotFoundPage, patient_create::PatientCreatePage,
    patient_details::PatientDetailsPage, patients::PatientsPage, record_create::RecordCreatePage,
    records::RecordsPage, register::RegisterPage, reports::ReportsPage, users::UsersPage,
};
use crate::state::{
    exercises::ExercisesState,
    records::RecordsState,
    session::{SessionState, load_session},
    ui::{ToastState, UiState},
    users::UsersState,
};
use crate::storage::{SharedStore, default_store};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the storage handle and every shared state signal, then sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store: SharedStore = default_store();
    let session = RwSignal::new(SessionState::default());

    provide_context(store.clone());
    provide_context(session);
    provide_context(RwSignal::new(UiState::default()));
    provide_context(RwSignal::new(ToastState::default()));
    provide_context(RwSignal::new(RecordsState::default()));
    provide_context(RwSignal::new(ExercisesState::default()));
    provide_context(RwSignal::new(UsersState::default()));

    // Storage is only readable in the browser, so the marker is read after mount.
    Effect::new(move |_| {
        session.set(SessionState::loaded(load_session(store.as_ref())));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/patienttrack.css"/>
        <Title formatter=|text: String| {
            if text.is_empty() { "PatientTrack".to_owned() } else { format!("{text} | PatientTrack") }
        }/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=IndexPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("patients") view=PatientsPage/>
                <Route path=(StaticSegment("patients"), StaticSegment("new")) view=PatientCreatePage/>
                <Route path=(StaticSegment("patients"), ParamSegment("id")) view=PatientDetailsPage/>
                <Route path=StaticSegment("appointments") view=AppointmentsPage/>
                <Route path=(StaticSegment("appointments"), StaticSegment("new")) view=AppointmentCreatePage/>
                <Route path=StaticSegment("records") view=RecordsPage/>
                <Route path=(StaticSegment("records"), StaticSegment("new")) view=RecordCreatePage/>
                <Route path=StaticSegment("billing") view=BillingPage/>
                <Route path=(StaticSegment("billing"), StaticSegment("new")) view=BillingCreatePage/>
                <Route path=StaticSegment("exercises") view=ExercisesPage/>
                <Route path=(StaticSegment("exercises"), StaticSegment("new")) view=ExerciseCreatePage/>
                <Route path=StaticSegment("users") view=UsersPage/>
                <Route path=StaticSegment("reports") view=ReportsPage/>
            </Routes>
            <ToastRegion/>
        </Router>
    }
}
