//! Stack of transient notifications in the corner of the viewport.

use leptos::prelude::*;

use crate::state::ui::{Toast, ToastState};

#[component]
pub fn ToastRegion() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-region" aria-live="polite">
            <For each=move || toasts.get().items key=|toast| toast.id let:toast>
                <ToastItem toast=toast />
            </For>
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    crate::util::timing::run_after(crate::state::ui::TOAST_TIMEOUT_MS, move || toasts.update(|t| t.dismiss(id)));

    view! {
        <div class=toast.kind.class() role="status">
            <div class="toast__text">
                <p class="toast__title">{toast.title}</p>
                {toast.description.map(|d| view! { <p class="toast__description">{d}</p> })}
            </div>
            <button class="toast__close" aria-label="Dismiss" on:click=move |_| toasts.update(|t| t.dismiss(id))>
                "✕"
            </button>
        </div>
    }
}
