//! `/exercises/new`: add an exercise to the in-memory library.

use leptos::prelude::*;

use crate::components::form_field::{FieldError, SelectField, TextAreaField, TextField, same_value_options};
use crate::components::page_shell::{BackHeader, PageShell};
use crate::routes::AppRoute;
use crate::state::exercises::{CATEGORIES, DIFFICULTIES, ExerciseDraft, ExercisesState, first_error};
use crate::state::ui::ToastState;
use crate::util::navigation::use_redirect;
use crate::util::timing::run_after;
use crate::util::validation::FieldErrors;

const SUBMIT_DELAY_MS: u64 = 800;

#[component]
pub fn ExerciseCreatePage() -> impl IntoView {
    let exercises = expect_context::<RwSignal<ExercisesState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let redirect = use_redirect();

    let defaults = ExerciseDraft::default();
    let name = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let difficulty = RwSignal::new(String::new());
    let duration = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let image_url = RwSignal::new(defaults.image_url);
    let target_input = RwSignal::new(String::new());
    let target_areas = RwSignal::new(Vec::<String>::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let draft = move || ExerciseDraft {
        name: name.get(),
        category: category.get(),
        difficulty: difficulty.get(),
        duration: duration.get(),
        description: description.get(),
        image_url: image_url.get(),
        target_areas: target_areas.get(),
    };

    let add_area = move || {
        let mut current = ExerciseDraft { target_areas: target_areas.get(), ..ExerciseDraft::default() };
        if current.add_target_area(&target_input.get()) {
            target_areas.set(current.target_areas);
            target_input.set(String::new());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let draft = draft();
        if let Err(e) = draft.validate(0) {
            let message = first_error(&e).to_owned();
            errors.set(e);
            toasts.update(|t| {
                t.error("Validation Error", message);
            });
            return;
        }
        errors.set(FieldErrors::new());
        busy.set(true);
        run_after(SUBMIT_DELAY_MS, move || {
            let mut outcome = None;
            exercises.update(|e| outcome = Some(e.add(&draft)));
            busy.set(false);
            if let Some(Ok(_)) = outcome {
                toasts.update(|t| {
                    t.success("Exercise created", "The exercise has been added to the library successfully");
                });
                redirect.set(Some(AppRoute::Exercises));
            }
        });
    };

    view! {
        <PageShell>
            <BackHeader title="New Exercise" back_href="/exercises" back_label="Back" />
            <div class="panel panel--narrow">
                <h2 class="panel__title">"Exercise Information"</h2>
                <form class="form" on:submit=on_submit>
                    <TextField label="Exercise Name *" field="name" value=name errors=errors placeholder="Enter exercise name" />
                    <div class="form__grid">
                        <SelectField
                            label="Category *"
                            field="category"
                            value=category
                            errors=errors
                            options=same_value_options(&CATEGORIES)
                            placeholder="Select category"
                        />
                        <SelectField
                            label="Difficulty Level *"
                            field="difficulty"
                            value=difficulty
                            errors=errors
                            options=same_value_options(&DIFFICULTIES)
                            placeholder="Select difficulty"
                        />
                    </div>
                    <TextField label="Duration *" field="duration" value=duration errors=errors placeholder="e.g., 10 mins" />
                    <TextAreaField
                        label="Description"
                        field="description"
                        value=description
                        errors=errors
                        placeholder="Enter exercise description"
                    />
                    <div class="field">
                        <label class="field__label" for="target_area">"Target Areas *"</label>
                        <div class="input-group">
                            <input
                                id="target_area"
                                class="input"
                                placeholder="e.g., Shoulders"
                                prop:value=move || target_input.get()
                                on:input=move |ev| target_input.set(event_target_value(&ev))
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        add_area();
                                    }
                                }
                            />
                            <button type="button" class="btn btn--outline" on:click=move |_| add_area()>
                                "Add"
                            </button>
                        </div>
                        <div class="chip-row">
                            {move || {
                                target_areas
                                    .get()
                                    .into_iter()
                                    .map(|area| {
                                        let remove = area.clone();
                                        view! {
                                            <span class="chip chip--removable">
                                                {area}
                                                <button
                                                    type="button"
                                                    class="chip__remove"
                                                    aria-label="Remove target area"
                                                    on:click=move |_| {
                                                        target_areas.update(|areas| areas.retain(|a| *a != remove));
                                                    }
                                                >
                                                    "✕"
                                                </button>
                                            </span>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                        <FieldError errors=errors field="target_areas" />
                    </div>
                    <TextField label="Image URL" field="image_url" value=image_url errors=errors input_type="url" />
                    <div class="form__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { "Save Exercise" }}
                        </button>
                    </div>
                </form>
            </div>
        </PageShell>
    }
}
