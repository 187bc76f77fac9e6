use super::*;

fn patients(n: usize) -> Vec<Patient> {
    (0..n)
        .map(|i| {
            let raw = format!(r#"{{"id":"P-{}","firstName":"Test","lastName":"Patient{i}"}}"#, 1001 + i);
            serde_json::from_str(&raw).unwrap()
        })
        .collect()
}

#[test]
fn total_patients_card_uses_live_count() {
    let cards = stat_cards(7);
    assert_eq!(cards.len(), 4);
    assert_eq!(cards[0].title, "Total Patients");
    assert_eq!(cards[0].value, "7");
    assert_eq!(cards[3].value, "$8,590");
}

#[test]
fn trend_labels_are_signed_percentages() {
    assert_eq!(Trend { value: 12 }.label(), "+12%");
    assert_eq!(Trend { value: -3 }.label(), "-3%");
    assert!(!Trend { value: -3 }.is_positive());
}

#[test]
fn recent_patients_caps_at_five() {
    let all = patients(8);
    let recent = recent_patients(&all);
    assert_eq!(recent.len(), RECENT_PATIENT_LIMIT);
    assert_eq!(recent[0].id, "P-1001");
    assert_eq!(recent_patients(&all[..2]).len(), 2);
    assert!(recent_patients(&[]).is_empty());
}
