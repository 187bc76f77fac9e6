//! Account registration. Creates a local admin session; nothing is sent anywhere.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::form_field::{FieldError, TextField};
use crate::routes::AppRoute;
use crate::state::session::{self, Role, SessionState, SessionUser};
use crate::state::ui::ToastState;
use crate::storage::SharedStore;
use crate::util::navigation::use_redirect;
use crate::util::timing::run_after;
use crate::util::validation::{FieldErrors, INVALID_EMAIL, check_password_pair};

pub const TERMS_NOT_ACCEPTED: &str = "You must accept the terms and conditions.";

const SUBMIT_DELAY_MS: u64 = 1_000;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

impl RegisterDraft {
    /// Build the admin session for a valid form.
    ///
    /// # Errors
    ///
    /// Returns one message per failing field.
    pub fn validate(&self) -> Result<SessionUser, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.min_chars("name", &self.name, 2, "Name must be at least 2 characters.");
        errors.email("email", &self.email, INVALID_EMAIL);
        check_password_pair(&mut errors, &self.password, &self.confirm_password);
        if !self.accept_terms {
            errors.add("accept_terms", TERMS_NOT_ACCEPTED);
        }
        errors.into_result(SessionUser {
            email: self.email.trim().to_owned(),
            name: Some(self.name.trim().to_owned()),
            role: Role::Admin,
        })
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let store = expect_context::<SharedStore>();
    let redirect = use_redirect();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let accept_terms = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let draft = RegisterDraft {
            name: name.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
            accept_terms: accept_terms.get(),
        };
        let user = match draft.validate() {
            Ok(user) => user,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::new());
        busy.set(true);

        let store = store.clone();
        run_after(SUBMIT_DELAY_MS, move || {
            if let Err(e) = session::save_session(store.as_ref(), &user) {
                leptos::logging::error!("failed to persist session: {e}");
            }
            session.set(SessionState::loaded(Some(user)));
            toasts.update(|t| {
                t.success("Registration successful!", "Your account has been created.");
            });
            busy.set(false);
            redirect.set(Some(AppRoute::Index));
        });
    };

    view! {
        <Title text=AppRoute::Register.title() />
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__header">
                    <div class="auth-card__logo">"P"</div>
                    <h1>"Create your account"</h1>
                    <p class="auth-card__subtitle">"Enter your details to get started"</p>
                </div>
                <form class="auth-form" on:submit=on_submit>
                    <TextField label="Full Name" field="name" value=name errors=errors placeholder="John Doe" />
                    <TextField
                        label="Email"
                        field="email"
                        value=email
                        errors=errors
                        input_type="email"
                        placeholder="you@example.com"
                    />
                    <TextField label="Password" field="password" value=password errors=errors input_type="password" />
                    <TextField
                        label="Confirm Password"
                        field="confirm_password"
                        value=confirm_password
                        errors=errors
                        input_type="password"
                    />
                    <div class="field">
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || accept_terms.get()
                                on:change=move |ev| accept_terms.set(event_target_checked(&ev))
                            />
                            "I agree to the terms of service and privacy policy"
                        </label>
                        <FieldError errors=errors field="accept_terms" />
                    </div>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
