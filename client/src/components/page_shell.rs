//! Layout shared by every signed-in page: navbar, sidebar and content area.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;

use super::navbar::Navbar;
use super::sidebar::Sidebar;
use crate::routes::AppRoute;

/// Page frame with the app chrome. The document title follows the route.
#[component]
pub fn PageShell(children: Children) -> impl IntoView {
    let location = use_location();
    let title = move || AppRoute::resolve(&location.pathname.get()).title();

    view! {
        <Title text=title />
        <div class="app-shell">
            <Navbar />
            <Sidebar />
            <main class="app-shell__main">
                <div class="app-shell__content">{children()}</div>
            </main>
        </div>
    }
}

/// Heading row with an optional primary action link.
#[component]
pub fn PageHeader(
    title: &'static str,
    subtitle: &'static str,
    #[prop(optional)] action: Option<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div>
                <h1 class="page-header__title">{title}</h1>
                <p class="page-header__subtitle">{subtitle}</p>
            </div>
            {action.map(|(label, href)| view! { <a class="btn btn--primary" href=href>"+ " {label}</a> })}
        </div>
    }
}

/// Heading with a back link, used by create and detail pages.
#[component]
pub fn BackHeader(title: &'static str, back_href: &'static str, back_label: &'static str) -> impl IntoView {
    view! {
        <div class="back-header">
            <a class="btn btn--ghost" href=back_href>"← " {back_label}</a>
            <h1 class="back-header__title">{title}</h1>
        </div>
    }
}

/// Placeholder panel for empty lists and stubbed screens.
#[component]
pub fn EmptyState(
    icon: &'static str,
    title: &'static str,
    #[prop(into)] message: Signal<String>,
    #[prop(optional)] action: Option<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__icon">{icon}</div>
            <h3 class="empty-state__title">{title}</h3>
            <p class="empty-state__message">{move || message.get()}</p>
            {action.map(|(label, href)| view! { <a class="btn btn--primary" href=href>"+ " {label}</a> })}
        </div>
    }
}
