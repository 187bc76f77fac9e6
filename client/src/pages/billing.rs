//! `/billing`: invoice overview. Invoices are not stored yet.

use leptos::prelude::*;

use crate::components::page_shell::{EmptyState, PageHeader, PageShell};

#[component]
pub fn BillingPage() -> impl IntoView {
    view! {
        <PageShell>
            <PageHeader title="Billing" subtitle="Manage invoices and payments" action=("Create New Invoice", "/billing/new") />
            <EmptyState
                icon="$"
                title="No invoices found"
                message="Start by creating your first invoice.".to_owned()
                action=("Create New Invoice", "/billing/new")
            />
        </PageShell>
    }
}
