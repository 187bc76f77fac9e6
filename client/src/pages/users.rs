//! `/users`: staff directory for administrators.
//!
//! The role gate is presentational. A non-admin session sees a notice in
//! place of the directory; nothing here protects data.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::form_field::{SelectField, TextField};
use crate::components::page_shell::PageShell;
use crate::components::search_input::SearchInput;
use crate::state::session::{Role, SessionState};
use crate::state::ui::ToastState;
use crate::state::users::{UserDraft, UserStatus, UsersState};
use crate::util::format::{short_date, today};
use crate::util::guard::{Access, access_for};
use crate::util::search::filter_items;
use crate::util::validation::FieldErrors;

const ROLE_OPTIONS: [(&str, &str); 2] = [("admin", "Admin"), ("therapist", "Therapist")];

#[component]
pub fn UsersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let gate = move || match access_for(&session.get(), Role::Admin) {
        Access::Pending => view! { <div class="page-loading">"Loading..."</div> }.into_any(),
        Access::Granted => view! { <UserDirectory /> }.into_any(),
        Access::SignedOut => view! {
            <div class="panel panel--center">
                <h2 class="panel__title">"Sign in required"</h2>
                <p class="panel__muted">"You need to sign in as an administrator to manage users."</p>
                <a class="btn btn--primary" href="/login">"Sign In"</a>
            </div>
        }
        .into_any(),
        Access::Forbidden => view! {
            <div class="panel panel--center">
                <h2 class="panel__title">"Access restricted"</h2>
                <p class="panel__muted">"Only administrators can manage user accounts."</p>
                <a class="btn btn--outline" href="/">"Back to Dashboard"</a>
            </div>
        }
        .into_any(),
    };

    view! { <PageShell>{gate}</PageShell> }
}

#[component]
fn UserDirectory() -> impl IntoView {
    let users = expect_context::<RwSignal<UsersState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let query = RwSignal::new(String::new());
    let show_add = RwSignal::new(false);
    let pending_delete = RwSignal::new(None::<u32>);

    let on_toggle = move |id: u32| {
        let mut changed = None;
        users.update(|u| changed = u.toggle_status(id).map(|user| (user.name.clone(), user.status)));
        if let Some((name, status)) = changed {
            toasts.update(|t| {
                t.success("User status changed", format!("{name} is now {}.", status.label().to_lowercase()));
            });
        }
    };

    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        let mut removed = None;
        users.update(|u| removed = u.remove(id));
        if let Some(user) = removed {
            toasts.update(|t| {
                t.success("User deleted", format!("{} has been removed.", user.name));
            });
        }
    });
    let on_add_close = Callback::new(move |()| show_add.set(false));

    let table = move || {
        let state = users.get();
        let q = query.get();
        let visible = filter_items(&state.items, &q);
        let rows = visible
            .iter()
            .map(|user| {
                let id = user.id;
                let (status_class, toggle_label) = match user.status {
                    UserStatus::Active => ("status-pill status-pill--active", "Deactivate"),
                    UserStatus::Inactive => ("status-pill status-pill--inactive", "Activate"),
                };
                let role_icon = if user.role == Role::Admin { "🛡" } else { "👤" };
                view! {
                    <tr>
                        <td>{user.name.clone()}</td>
                        <td>{user.email.clone()}</td>
                        <td>{role_icon} " " {user.role.label()}</td>
                        <td>{user.specialization.clone()}</td>
                        <td>
                            <span class=status_class>{user.status.label()}</span>
                        </td>
                        <td>{short_date(user.join_date)}</td>
                        <td class="table__actions">
                            <button class="btn btn--ghost btn--sm" on:click=move |_| on_toggle(id)>
                                {toggle_label}
                            </button>
                            <button
                                class="btn btn--ghost btn--sm btn--danger-text"
                                on:click=move |_| pending_delete.set(Some(id))
                            >
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view();
        let empty = visible.is_empty().then(|| {
            let message = if q.is_empty() { "Get started by adding a new user." } else { "No users match your search criteria." };
            view! {
                <div class="table__no-results">
                    <h3>"No users found"</h3>
                    <p>{message}</p>
                </div>
            }
        });
        view! {
            <div class="panel panel--flush">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Specialization"</th>
                            <th>"Status"</th>
                            <th>"Join Date"</th>
                            <th class="table__actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
                {empty}
            </div>
        }
    };

    view! {
        <div class="page-header">
            <div>
                <h1 class="page-header__title">"User Management"</h1>
                <p class="page-header__subtitle">"Manage therapists and admin accounts"</p>
            </div>
            <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                "+ Add User"
            </button>
        </div>
        <div class="toolbar-row">
            <SearchInput query=query placeholder="Search users..." />
        </div>
        {table}
        <Show when=move || show_add.get()>
            <AddUserDialog on_close=on_add_close />
        </Show>
        <Show when=move || pending_delete.get().is_some()>
            <ConfirmDialog
                title="Confirm Deletion"
                message="Are you sure you want to delete this user? This action cannot be undone.".to_owned()
                on_cancel=on_delete_cancel
                on_confirm=on_delete_confirm
            />
        </Show>
    }
}

#[component]
fn AddUserDialog(on_close: Callback<()>) -> impl IntoView {
    let users = expect_context::<RwSignal<UsersState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let defaults = UserDraft::default();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let role = RwSignal::new(defaults.role);
    let specialization = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = UserDraft {
            name: name.get(),
            email: email.get(),
            role: role.get(),
            specialization: specialization.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
        };
        let mut outcome = None;
        users.update(|u| outcome = Some(u.add(&draft, today())));
        match outcome {
            Some(Ok(user)) => {
                toasts.update(|t| {
                    t.success(
                        "User created successfully!",
                        format!("{} has been added as a {}.", user.name, user.role.as_str()),
                    );
                });
                on_close.run(());
            }
            Some(Err(e)) => errors.set(e),
            None => {}
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2 class="dialog__title">"Add New User"</h2>
                <p class="dialog__message">"Create a new therapist or admin account."</p>
                <form class="form" on:submit=on_submit>
                    <TextField label="Full Name" field="name" value=name errors=errors placeholder="Dr. John Doe" />
                    <TextField
                        label="Email"
                        field="email"
                        value=email
                        errors=errors
                        input_type="email"
                        placeholder="john.doe@example.com"
                    />
                    <SelectField
                        label="Role"
                        field="role"
                        value=role
                        errors=errors
                        options=ROLE_OPTIONS.to_vec()
                        placeholder="Select a role"
                    />
                    <TextField
                        label="Specialization"
                        field="specialization"
                        value=specialization
                        errors=errors
                        placeholder="Physical Therapy"
                    />
                    <TextField
                        label="Password"
                        field="password"
                        value=password
                        errors=errors
                        input_type="password"
                        placeholder="••••••••"
                    />
                    <TextField
                        label="Confirm Password"
                        field="confirm_password"
                        value=confirm_password
                        errors=errors
                        input_type="password"
                        placeholder="••••••••"
                    />
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary">
                            "Create User"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
