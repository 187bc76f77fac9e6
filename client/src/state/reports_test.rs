use super::*;

#[test]
fn bar_percent_scales_and_clamps() {
    assert_eq!(bar_percent(40, 80), 50);
    assert_eq!(bar_percent(81, 81), 100);
    assert_eq!(bar_percent(90, 81), 100);
    assert_eq!(bar_percent(5, 0), 0);
}

#[test]
fn patient_growth_peaks_in_april() {
    let max = series_max(PATIENT_GROWTH.iter().map(|(_, v)| *v));
    assert_eq!(max, 81);
    assert_eq!(PATIENT_GROWTH[3].0, "Apr");
}

#[test]
fn treatment_shares_sum_to_one_hundred() {
    assert_eq!(TREATMENT_TYPES.iter().map(|(_, v)| v).sum::<u32>(), 100);
}

#[test]
fn appointment_month_total() {
    assert_eq!(APPOINTMENT_STATUS[0].total(), 55);
    assert_eq!(APPOINTMENT_STATUS[2].total(), 74);
}

#[test]
fn net_income_can_go_negative() {
    let (_, revenue, expenses) = REVENUE[4];
    assert_eq!(net_income(revenue, expenses), -2910);
}

#[test]
fn date_range_parse_defaults_to_last_six_months() {
    assert_eq!(DateRange::parse("lastYear"), DateRange::LastYear);
    assert_eq!(DateRange::parse("bogus"), DateRange::LastSixMonths);
    assert_eq!(DateRange::AllTime.label(), "All Time");
}

#[test]
fn export_keys_and_message() {
    assert_eq!(ReportTab::Overview.export_key(), "all");
    assert_eq!(export_message(ReportTab::Billing.export_key()), "Downloading billing report...");
}
