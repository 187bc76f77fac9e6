//! Static practice analytics for the reports page.
//!
//! The series are fixed sample figures. Charts render as CSS bars, so the
//! helpers here turn raw values into percentages of the series maximum.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportTab {
    #[default]
    Overview,
    Patients,
    Appointments,
    Billing,
}

impl ReportTab {
    pub const ALL: [Self; 4] = [Self::Overview, Self::Patients, Self::Appointments, Self::Billing];

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Patients => "Patients",
            Self::Appointments => "Appointments",
            Self::Billing => "Billing",
        }
    }

    /// Report name used by the per-tab export button.
    pub fn export_key(self) -> &'static str {
        match self {
            Self::Overview => "all",
            Self::Patients => "patients",
            Self::Appointments => "appointments",
            Self::Billing => "billing",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateRange {
    #[default]
    LastSixMonths,
    ThisYear,
    LastYear,
    AllTime,
}

impl DateRange {
    pub const ALL: [Self; 4] = [Self::LastSixMonths, Self::ThisYear, Self::LastYear, Self::AllTime];

    pub fn value(self) -> &'static str {
        match self {
            Self::LastSixMonths => "last6Months",
            Self::ThisYear => "thisYear",
            Self::LastYear => "lastYear",
            Self::AllTime => "allTime",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::LastSixMonths => "Last 6 Months",
            Self::ThisYear => "This Year",
            Self::LastYear => "Last Year",
            Self::AllTime => "All Time",
        }
    }

    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|r| r.value() == raw).unwrap_or_default()
    }
}

/// Headline figure on the overview tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

pub const SUMMARIES: [Summary; 4] = [
    Summary { title: "Total Patients", value: "254", change: "+12% from last month" },
    Summary { title: "Monthly Appointments", value: "145", change: "+5% from last month" },
    Summary { title: "Revenue", value: "$12,234", change: "+18% from last month" },
    Summary { title: "Avg. Session Duration", value: "45 min", change: "+2 min from last month" },
];

/// New patients per month.
pub const PATIENT_GROWTH: [(&str, u32); 6] =
    [("Jan", 65), ("Feb", 59), ("Mar", 80), ("Apr", 81), ("May", 56), ("Jun", 55)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppointmentMonth {
    pub month: &'static str,
    pub completed: u32,
    pub cancelled: u32,
    pub rescheduled: u32,
}

impl AppointmentMonth {
    pub fn total(self) -> u32 {
        self.completed + self.cancelled + self.rescheduled
    }
}

const fn month(month: &'static str, completed: u32, cancelled: u32, rescheduled: u32) -> AppointmentMonth {
    AppointmentMonth { month, completed, cancelled, rescheduled }
}

pub const APPOINTMENT_STATUS: [AppointmentMonth; 6] = [
    month("Jan", 40, 5, 10),
    month("Feb", 45, 3, 8),
    month("Mar", 55, 7, 12),
    month("Apr", 60, 4, 9),
    month("May", 50, 6, 11),
    month("Jun", 48, 5, 7),
];

/// Share of sessions by treatment type, in percent.
pub const TREATMENT_TYPES: [(&str, u32); 4] =
    [("Physical Therapy", 45), ("Manual Therapy", 25), ("Exercise Therapy", 20), ("Electrotherapy", 10)];

/// Patients per age band as (band, male, female).
pub const DEMOGRAPHICS: [(&str, u32, u32); 5] =
    [("0-18", 15, 20), ("19-35", 25, 30), ("36-50", 35, 40), ("51-65", 30, 25), ("66+", 20, 15)];

/// Monthly (revenue, expenses) in dollars.
pub const REVENUE: [(&str, u32, u32); 6] = [
    ("Jan", 4000, 2400),
    ("Feb", 3000, 1398),
    ("Mar", 5000, 3200),
    ("Apr", 2780, 3908),
    ("May", 1890, 4800),
    ("Jun", 2390, 3800),
];

/// `value` as a whole percentage of `max`, clamped to 0..=100.
pub fn bar_percent(value: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    (u64::from(value) * 100 / u64::from(max)).min(100).try_into().unwrap_or(100)
}

/// Largest value in a series, used as the 100% mark for its bars.
pub fn series_max(values: impl IntoIterator<Item = u32>) -> u32 {
    values.into_iter().max().unwrap_or(0)
}

/// Net result per month; negative when expenses exceed revenue.
pub fn net_income(revenue: u32, expenses: u32) -> i64 {
    i64::from(revenue) - i64::from(expenses)
}

/// Message shown when an export button is pressed. Exports are not generated.
pub fn export_message(report: &str) -> String {
    format!("Downloading {report} report...")
}
