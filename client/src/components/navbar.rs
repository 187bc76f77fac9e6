//! Top bar with sidebar toggle, brand link and account menu.

use leptos::prelude::*;

use crate::routes::AppRoute;
use crate::state::session::{self, SessionState};
use crate::state::ui::{ToastState, UiState};
use crate::storage::SharedStore;
use crate::util::navigation::use_redirect;

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let store = expect_context::<SharedStore>();
    let redirect = use_redirect();
    let menu_open = RwSignal::new(false);

    let on_logout = Callback::new(move |()| {
        menu_open.set(false);
        if let Err(e) = session::clear_session(store.as_ref()) {
            leptos::logging::warn!("failed to clear session: {e}");
        }
        session.set(SessionState::loaded(None));
        toasts.update(|t| {
            t.success("Signed out", "You have been logged out.");
        });
        redirect.set(Some(AppRoute::Login));
    });

    let account_label = move || {
        session
            .get()
            .user
            .map_or_else(|| "Account".to_owned(), |u| u.display_name().to_owned())
    };

    view! {
        <header class="navbar">
            <div class="navbar__left">
                <button
                    id="sidebar-toggle"
                    class="btn btn--ghost navbar__toggle"
                    aria-label="Toggle sidebar"
                    on:click=move |_| ui.update(UiState::toggle_sidebar)
                >
                    "☰"
                </button>
                <a href="/" class="navbar__brand">
                    <span class="navbar__logo">"P"</span>
                    <span class="navbar__name">"PatientTrack"</span>
                </a>
            </div>
            <div class="navbar__right">
                <button class="btn btn--ghost navbar__bell" aria-label="Notifications">
                    "🔔"
                    <span class="navbar__dot"></span>
                </button>
                <div class="navbar__menu">
                    <button
                        class="btn btn--ghost navbar__account"
                        aria-label="User menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {account_label}
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class="navbar__dropdown" on:click=move |ev| ev.stop_propagation()>
                            <p class="navbar__dropdown-label">"My Account"</p>
                            <Show
                                when=move || session.get().is_authenticated()
                                fallback=|| view! { <a class="navbar__dropdown-item" href="/login">"Sign in"</a> }
                            >
                                <button class="navbar__dropdown-item" on:click=move |_| on_logout.run(())>
                                    "Log out"
                                </button>
                            </Show>
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}
