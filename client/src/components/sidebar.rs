//! Primary navigation. Slides in on narrow screens, fixed on wide ones.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes::{NAV_ITEMS, is_nav_active};
use crate::state::ui::UiState;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    // Close the mobile drawer whenever the route changes.
    Effect::new(move || {
        let _ = location.pathname.get();
        if ui.get_untracked().sidebar_open {
            ui.update(UiState::close_sidebar);
        }
    });

    let aside_class = move || {
        if ui.get().sidebar_open { "sidebar sidebar--open" } else { "sidebar" }
    };

    view! {
        <div
            class=move || if ui.get().sidebar_open { "sidebar-overlay sidebar-overlay--visible" } else { "sidebar-overlay" }
            on:click=move |_| ui.update(UiState::close_sidebar)
        ></div>
        <aside id="sidebar" class=aside_class>
            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let href = item.href;
                        let class = move || {
                            if is_nav_active(&location.pathname.get(), href) {
                                "sidebar__link sidebar__link--active"
                            } else {
                                "sidebar__link"
                            }
                        };
                        view! {
                            <a href=href class=class>
                                <span class="sidebar__icon">{item.icon}</span>
                                <span class="sidebar__title">{item.title}</span>
                                {item.badge.map(|badge| view! { <span class="sidebar__badge">{badge}</span> })}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="sidebar__footer">
                <p class="sidebar__footer-title">"PatientTrack"</p>
                <p class="sidebar__footer-text">"Clinic management dashboard"</p>
            </div>
        </aside>
    }
}
