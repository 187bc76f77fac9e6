//! Sign-in page with a single demo credential pair.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::form_field::FieldError;
use crate::routes::AppRoute;
use crate::state::session::{self, Role, SessionState, SessionUser};
use crate::state::ui::ToastState;
use crate::storage::SharedStore;
use crate::util::navigation::use_redirect;
use crate::util::timing::run_after;
use crate::util::validation::{FieldErrors, INVALID_EMAIL, MIN_PASSWORD_CHARS, PASSWORD_TOO_SHORT};

pub const DEMO_EMAIL: &str = "admin@patienttrack.com";
pub const DEMO_PASSWORD: &str = "password123";
pub const LOGIN_FAILED: &str = "Invalid email or password. Try admin@patienttrack.com / password123";

/// Simulated round-trip before the credential check completes.
const SUBMIT_DELAY_MS: u64 = 1_000;

/// Shape checks run before the credential comparison.
///
/// # Errors
///
/// Returns per-field messages for a malformed email or short password.
pub fn validate_login_input(email: &str, password: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    errors.email("email", email, INVALID_EMAIL);
    if password.chars().count() < MIN_PASSWORD_CHARS {
        errors.add("password", PASSWORD_TOO_SHORT);
    }
    errors.into_result(())
}

/// Session for the demo account, or `None` for any other pair.
pub fn authenticate(email: &str, password: &str) -> Option<SessionUser> {
    (email.trim() == DEMO_EMAIL && password == DEMO_PASSWORD)
        .then(|| SessionUser { email: DEMO_EMAIL.to_owned(), name: None, role: Role::Admin })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let store = expect_context::<SharedStore>();
    let redirect = use_redirect();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(false);
    let show_password = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get();
        let password_value = password.get();
        if let Err(e) = validate_login_input(&email_value, &password_value) {
            errors.set(e);
            return;
        }
        errors.set(FieldErrors::new());
        busy.set(true);

        let store = store.clone();
        run_after(SUBMIT_DELAY_MS, move || {
            match authenticate(&email_value, &password_value) {
                Some(user) => {
                    if let Err(e) = session::save_session(store.as_ref(), &user) {
                        leptos::logging::error!("failed to persist session: {e}");
                    }
                    session.set(SessionState::loaded(Some(user)));
                    toasts.update(|t| {
                        t.success("Login successful!", "Welcome to PatientTrack Pro");
                    });
                    redirect.set(Some(AppRoute::Index));
                }
                None => {
                    toasts.update(|t| {
                        t.error("Login failed", LOGIN_FAILED);
                    });
                }
            }
            busy.set(false);
        });
    };

    view! {
        <Title text=AppRoute::Login.title() />
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__header">
                    <div class="auth-card__logo">"P"</div>
                    <h1>"Sign in to PatientTrack"</h1>
                    <p class="auth-card__subtitle">"Enter your credentials to access your account"</p>
                </div>
                <form class="auth-form" on:submit=on_submit>
                    <div class="field">
                        <label class="field__label" for="email">"Email"</label>
                        <input
                            id="email"
                            class="input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <FieldError errors=errors field="email" />
                    </div>
                    <div class="field">
                        <div class="field__label-row">
                            <label class="field__label" for="password">"Password"</label>
                            <a class="auth-form__link" href="/login">"Forgot password?"</a>
                        </div>
                        <div class="input-group">
                            <input
                                id="password"
                                class="input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="••••••••"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="btn btn--ghost input-group__toggle"
                                on:click=move |_| show_password.update(|s| *s = !*s)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                        <FieldError errors=errors field="password" />
                    </div>
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || remember_me.get()
                            on:change=move |ev| remember_me.set(event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
