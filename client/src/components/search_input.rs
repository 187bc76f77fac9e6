//! Search box bound to a list view's query signal.

use leptos::prelude::*;

#[component]
pub fn SearchInput(query: RwSignal<String>, placeholder: &'static str) -> impl IntoView {
    view! {
        <div class="search-input">
            <span class="search-input__icon" aria-hidden="true">"🔍"</span>
            <input
                class="input search-input__field"
                type="search"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
        </div>
    }
}
