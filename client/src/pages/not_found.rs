//! Fallback for unknown paths.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;

use crate::routes::AppRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    Effect::new(move |_| {
        leptos::logging::warn!("404: no route for {}", location.pathname.get());
    });

    view! {
        <Title text=AppRoute::NotFound.title() />
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__message">"Oops! Page not found"</p>
            <a class="btn btn--primary" href="/">"Return to Home"</a>
        </div>
    }
}
