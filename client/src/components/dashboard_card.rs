//! Summary tile used on the dashboard.

use leptos::prelude::*;

use crate::state::dashboard::StatCard;

#[component]
pub fn DashboardCard(card: StatCard) -> impl IntoView {
    let trend = card.trend.map(|trend| {
        let class = if trend.is_positive() { "dashboard-card__trend dashboard-card__trend--up" } else { "dashboard-card__trend dashboard-card__trend--down" };
        view! {
            <div class="dashboard-card__trend-row">
                <span class=class>{trend.label()}</span>
                <span class="dashboard-card__trend-note">"vs last month"</span>
            </div>
        }
    });

    view! {
        <div class="dashboard-card">
            <div class="dashboard-card__body">
                <p class="dashboard-card__title">{card.title}</p>
                <h4 class="dashboard-card__value">{card.value}</h4>
                {trend}
            </div>
            <div class="dashboard-card__icon">{card.icon}</div>
        </div>
    }
}
