//! `/exercises`: searchable exercise library.

use leptos::prelude::*;

use crate::components::page_shell::{EmptyState, PageHeader, PageShell};
use crate::components::search_input::SearchInput;
use crate::state::exercises::{Exercise, ExercisesState, difficulty_class};
use crate::state::ui::ToastState;
use crate::util::search::filter_items;

#[component]
pub fn ExercisesPage() -> impl IntoView {
    let exercises = expect_context::<RwSignal<ExercisesState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let query = RwSignal::new(String::new());

    let on_delete = Callback::new(move |id: u32| {
        let mut removed = false;
        exercises.update(|e| removed = e.remove(id));
        if removed {
            toasts.update(|t| {
                t.success("Exercise deleted", "The exercise has been removed from the library");
            });
        }
    });

    let grid = move || {
        let state = exercises.get();
        let q = query.get();
        let visible = filter_items(&state.items, &q);
        if visible.is_empty() {
            let message = if q.is_empty() {
                "Start by adding your first exercise to the library."
            } else {
                "No exercises match your search criteria."
            };
            return view! {
                <EmptyState
                    icon="🏋"
                    title="No exercises found"
                    message=message.to_owned()
                    action=("Add Exercise", "/exercises/new")
                />
            }
            .into_any();
        }
        view! {
            <div class="card-grid card-grid--three">
                {visible
                    .into_iter()
                    .map(|exercise| view! { <ExerciseCard exercise=exercise.clone() on_delete=on_delete /> })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <PageShell>
            <PageHeader
                title="Exercise Library"
                subtitle="Browse and manage therapeutic exercises"
                action=("Add Exercise", "/exercises/new")
            />
            <div class="toolbar-row">
                <SearchInput query=query placeholder="Search exercises..." />
            </div>
            {grid}
        </PageShell>
    }
}

#[component]
fn ExerciseCard(exercise: Exercise, on_delete: Callback<u32>) -> impl IntoView {
    let favorite = RwSignal::new(false);
    let id = exercise.id;
    let badge_class = format!("{} exercise-card__difficulty", difficulty_class(&exercise.difficulty));

    view! {
        <article class="panel panel--flush exercise-card">
            <div class="exercise-card__media">
                <img src=exercise.image_url.clone() alt=exercise.name.clone() />
                <span class=badge_class>{exercise.difficulty.clone()}</span>
            </div>
            <div class="exercise-card__body">
                <div class="exercise-card__head">
                    <div>
                        <h3 class="exercise-card__name">{exercise.name.clone()}</h3>
                        <p class="exercise-card__category">{exercise.category.clone()}</p>
                    </div>
                    <button
                        class="btn btn--ghost btn--sm btn--danger-text"
                        aria-label="Delete exercise"
                        on:click=move |_| on_delete.run(id)
                    >
                        "🗑"
                    </button>
                </div>
                <p class="exercise-card__description">{exercise.description.clone()}</p>
                <p class="exercise-card__duration">"⏱ " {exercise.duration.clone()}</p>
                <div class="chip-row">
                    {exercise
                        .target_areas
                        .iter()
                        .map(|area| view! { <span class="chip">"🏷 " {area.clone()}</span> })
                        .collect_view()}
                </div>
            </div>
            <div class="exercise-card__foot">
                <button class="btn btn--ghost btn--block" on:click=move |_| favorite.update(|f| *f = !*f)>
                    {move || if favorite.get() { "♥ Favorited" } else { "♡ Add to Favorites" }}
                </button>
            </div>
        </article>
    }
}
