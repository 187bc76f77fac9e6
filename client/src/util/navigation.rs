//! Deferred navigation for handlers that cannot hold the router's navigate fn.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Callback`s must be `Send + Sync`, the navigate closure is not. Handlers
//! write a target path into the returned signal and an effect owned by the
//! page performs the navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::AppRoute;

/// Create a redirect slot for the current page. Setting it to `Some(route)`
/// navigates there once and clears the slot.
pub fn use_redirect() -> RwSignal<Option<AppRoute>> {
    let target = RwSignal::new(None::<AppRoute>);
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(route) = target.get() {
            target.set(None);
            navigate(&route.path(), NavigateOptions::default());
        }
    });
    target
}
