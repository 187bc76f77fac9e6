//! `/reports`: practice analytics with CSS bar charts.

use leptos::prelude::*;

use crate::components::page_shell::PageShell;
use crate::state::reports::{
    APPOINTMENT_STATUS, DEMOGRAPHICS, DateRange, PATIENT_GROWTH, REVENUE, ReportTab, SUMMARIES, TREATMENT_TYPES,
    bar_percent, export_message, net_income, series_max,
};
use crate::state::ui::{ToastKind, ToastState};

/// One bar inside a chart group.
#[derive(Clone, Copy)]
struct Bar {
    value: u32,
    class: &'static str,
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let tab = RwSignal::new(ReportTab::default());
    let range = RwSignal::new(DateRange::default());

    let export = Callback::new(move |key: &'static str| {
        toasts.update(|t| {
            t.push(ToastKind::Info, "Export", Some(export_message(key)));
        });
    });

    let body = move || match tab.get() {
        ReportTab::Overview => view! { <OverviewTab /> }.into_any(),
        ReportTab::Patients => view! { <PatientsTab export=export /> }.into_any(),
        ReportTab::Appointments => view! { <AppointmentsTab export=export /> }.into_any(),
        ReportTab::Billing => view! { <BillingTab export=export /> }.into_any(),
    };

    view! {
        <PageShell>
            <div class="page-header">
                <div>
                    <h1 class="page-header__title">"Analytics & Reports"</h1>
                    <p class="page-header__subtitle">"View and export practice analytics"</p>
                </div>
                <div class="toolbar-row">
                    <select
                        class="input input--compact"
                        prop:value=move || range.get().value()
                        on:change=move |ev| range.set(DateRange::parse(&event_target_value(&ev)))
                    >
                        {DateRange::ALL
                            .into_iter()
                            .map(|r| view! { <option value=r.value()>{r.label()}</option> })
                            .collect_view()}
                    </select>
                    <button class="btn btn--outline btn--sm" on:click=move |_| export.run(ReportTab::Overview.export_key())>
                        "Export All"
                    </button>
                </div>
            </div>
            <div class="tabs__list" role="tablist">
                {ReportTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="tabs__trigger"
                                class:tabs__trigger--active=move || tab.get() == t
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="tabs__content">{body}</div>
        </PageShell>
    }
}

#[component]
fn ChartCard(
    title: &'static str,
    description: &'static str,
    #[prop(optional)] export: Option<(Callback<&'static str>, &'static str)>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="panel chart-card">
            <div class="chart-card__head">
                <div>
                    <h3 class="panel__title">{title}</h3>
                    <p class="panel__muted">{description}</p>
                </div>
                {export
                    .map(|(cb, key)| {
                        view! {
                            <button class="btn btn--outline btn--sm" on:click=move |_| cb.run(key)>
                                "Export"
                            </button>
                        }
                    })}
            </div>
            {children()}
        </section>
    }
}

/// Grouped vertical bars; every group shares the same scale.
#[component]
fn BarChart(groups: Vec<(&'static str, Vec<Bar>)>, legend: Vec<(&'static str, &'static str)>) -> impl IntoView {
    let max = series_max(groups.iter().flat_map(|(_, bars)| bars.iter().map(|b| b.value)));
    view! {
        <div class="bar-chart">
            {groups
                .into_iter()
                .map(|(label, bars)| {
                    view! {
                        <div class="bar-chart__group">
                            <div class="bar-chart__bars">
                                {bars
                                    .into_iter()
                                    .map(|bar| {
                                        let height = format!("height: {}%", bar_percent(bar.value, max));
                                        view! {
                                            <div class=format!("bar-chart__bar {}", bar.class) style=height title=bar.value.to_string()></div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <span class="bar-chart__label">{label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
        <div class="chart-legend">
            {legend
                .into_iter()
                .map(|(name, class)| {
                    view! {
                        <span class="chart-legend__item">
                            <span class=format!("chart-legend__swatch {class}")></span>
                            {name}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn OverviewTab() -> impl IntoView {
    let growth: Vec<_> = PATIENT_GROWTH
        .iter()
        .map(|&(month, patients)| (month, vec![Bar { value: patients, class: "bar--primary" }]))
        .collect();
    let treatment_max = series_max(TREATMENT_TYPES.iter().map(|&(_, share)| share));

    view! {
        <div class="stat-grid">
            {SUMMARIES
                .iter()
                .map(|s| {
                    view! {
                        <div class="panel stat-card">
                            <p class="stat-card__title">{s.title}</p>
                            <p class="stat-card__value">{s.value}</p>
                            <p class="stat-card__trend">{s.change}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
        <div class="chart-grid">
            <ChartCard title="Patients Growth" description="New patients over the past 6 months">
                <BarChart groups=growth legend=vec![("Patients", "bar--primary")] />
            </ChartCard>
            <ChartCard title="Treatment Types" description="Distribution of treatments by type">
                <ul class="share-list">
                    {TREATMENT_TYPES
                        .iter()
                        .enumerate()
                        .map(|(i, &(name, share))| {
                            let width = format!("width: {}%", bar_percent(share, treatment_max));
                            view! {
                                <li class="share-list__row">
                                    <span class="share-list__name">{name}</span>
                                    <div class="share-list__track">
                                        <div class=format!("share-list__fill bar--series-{i}") style=width></div>
                                    </div>
                                    <span class="share-list__value">{format!("{share}%")}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </ChartCard>
        </div>
    }
}

#[component]
fn PatientsTab(export: Callback<&'static str>) -> impl IntoView {
    let groups: Vec<_> = DEMOGRAPHICS
        .iter()
        .map(|&(band, male, female)| {
            (band, vec![Bar { value: male, class: "bar--primary" }, Bar { value: female, class: "bar--accent" }])
        })
        .collect();
    view! {
        <ChartCard
            title="Patient Demographics"
            description="Patient age and gender distribution"
            export=(export, ReportTab::Patients.export_key())
        >
            <BarChart groups=groups legend=vec![("Male", "bar--primary"), ("Female", "bar--accent")] />
        </ChartCard>
    }
}

#[component]
fn AppointmentsTab(export: Callback<&'static str>) -> impl IntoView {
    let groups: Vec<_> = APPOINTMENT_STATUS
        .iter()
        .map(|m| {
            (
                m.month,
                vec![
                    Bar { value: m.completed, class: "bar--success" },
                    Bar { value: m.cancelled, class: "bar--danger" },
                    Bar { value: m.rescheduled, class: "bar--warning" },
                ],
            )
        })
        .collect();
    let total: u32 = APPOINTMENT_STATUS.iter().map(|m| m.total()).sum();
    let completed: u32 = APPOINTMENT_STATUS.iter().map(|m| m.completed).sum();
    view! {
        <ChartCard
            title="Appointment Status"
            description="Monthly appointment completion rates"
            export=(export, ReportTab::Appointments.export_key())
        >
            <BarChart
                groups=groups
                legend=vec![("Completed", "bar--success"), ("Cancelled", "bar--danger"), ("Rescheduled", "bar--warning")]
            />
            <p class="panel__muted">{format!("{completed} of {total} appointments completed")}</p>
        </ChartCard>
    }
}

#[component]
fn BillingTab(export: Callback<&'static str>) -> impl IntoView {
    let groups: Vec<_> = REVENUE
        .iter()
        .map(|&(month, revenue, expenses)| {
            (month, vec![Bar { value: revenue, class: "bar--primary" }, Bar { value: expenses, class: "bar--danger" }])
        })
        .collect();
    view! {
        <ChartCard
            title="Revenue Analysis"
            description="Monthly revenue breakdown"
            export=(export, ReportTab::Billing.export_key())
        >
            <BarChart groups=groups legend=vec![("Revenue", "bar--primary"), ("Expenses", "bar--danger")] />
            <table class="table table--compact">
                <thead>
                    <tr>
                        <th>"Month"</th>
                        <th>"Revenue"</th>
                        <th>"Expenses"</th>
                        <th>"Net"</th>
                    </tr>
                </thead>
                <tbody>
                    {REVENUE
                        .iter()
                        .map(|&(month, revenue, expenses)| {
                            let net = net_income(revenue, expenses);
                            let class = if net < 0 { "text-danger" } else { "text-success" };
                            view! {
                                <tr>
                                    <td>{month}</td>
                                    <td>{format!("${revenue}")}</td>
                                    <td>{format!("${expenses}")}</td>
                                    <td class=class>{format!("{net:+}")}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </ChartCard>
    }
}
