//! `/billing/new`: placeholder until invoicing exists.

use leptos::prelude::*;

use crate::components::page_shell::{BackHeader, EmptyState, PageShell};

#[component]
pub fn BillingCreatePage() -> impl IntoView {
    view! {
        <PageShell>
            <BackHeader title="Create New Invoice" back_href="/billing" back_label="Back to Billing" />
            <EmptyState
                icon="$"
                title="Invoicing is not available yet"
                message="Invoices cannot be created in this version of PatientTrack.".to_owned()
            />
        </PageShell>
    }
}
