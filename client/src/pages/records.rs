//! `/records`: searchable medical record cards with delete.

use leptos::prelude::*;

use crate::components::page_shell::{EmptyState, PageHeader, PageShell};
use crate::components::search_input::SearchInput;
use crate::state::records::RecordsState;
use crate::state::ui::ToastState;
use crate::util::format::long_date;
use crate::util::search::filter_items;

#[component]
pub fn RecordsPage() -> impl IntoView {
    let records = expect_context::<RwSignal<RecordsState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let query = RwSignal::new(String::new());

    let on_delete = move |id: u32| {
        let mut removed = false;
        records.update(|r| removed = r.remove(id));
        if removed {
            toasts.update(|t| {
                t.success("Record deleted", "The medical record has been deleted successfully");
            });
        }
    };

    let list = move || {
        let state = records.get();
        let q = query.get();
        let visible = filter_items(&state.items, &q);
        if visible.is_empty() {
            let message = if q.is_empty() {
                "Start by adding your first medical record."
            } else {
                "No records match your search criteria."
            };
            return view! {
                <EmptyState
                    icon="📄"
                    title="No medical records found"
                    message=message.to_owned()
                    action=("Add Medical Record", "/records/new")
                />
            }
            .into_any();
        }
        view! {
            <div class="card-list">
                {visible
                    .into_iter()
                    .map(|record| {
                        let id = record.id;
                        view! {
                            <article class="panel record-card">
                                <div class="record-card__head">
                                    <div>
                                        <h3 class="record-card__patient">{record.patient_name.clone()}</h3>
                                        <p class="record-card__meta">"Patient ID: " {record.patient_id.clone()}</p>
                                    </div>
                                    <span class="badge">{record.record_type.clone()}</span>
                                </div>
                                <p class="record-card__description">{record.description.clone()}</p>
                                <div class="record-card__foot">
                                    <span class="record-card__meta">{long_date(record.date)}</span>
                                    <span class="record-card__meta">"By " {record.created_by.clone()}</span>
                                    <button
                                        class="btn btn--ghost btn--sm btn--danger-text"
                                        aria-label="Delete record"
                                        on:click=move |_| on_delete(id)
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <PageShell>
            <PageHeader title="Medical Records" subtitle="Manage patient medical records" action=("New Record", "/records/new") />
            <div class="toolbar-row">
                <SearchInput query=query placeholder="Search records..." />
            </div>
            {list}
        </PageShell>
    }
}
