use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn long_date_spells_month() {
    assert_eq!(long_date(date(2025, 3, 10)), "March 10, 2025");
    assert_eq!(long_date(date(1990, 1, 5)), "January 5, 1990");
}

#[test]
fn short_date_has_no_padding() {
    assert_eq!(short_date(date(2025, 3, 9)), "3/9/2025");
}

#[test]
fn long_date_or_uses_placeholder() {
    assert_eq!(long_date_or(None, "Not provided"), "Not provided");
}

#[test]
fn parse_date_accepts_plain_and_timestamp_forms() {
    assert_eq!(parse_date("2025-03-10"), Some(date(2025, 3, 10)));
    assert_eq!(parse_date("1990-05-01T12:00:00.000Z"), Some(date(1990, 5, 1)));
    assert_eq!(parse_date("1990-05-01T08:30"), Some(date(1990, 5, 1)));
    assert_eq!(parse_date(""), None);
    assert_eq!(parse_date("soon"), None);
}

#[test]
fn parse_date_reads_timestamps_in_local_time() {
    let raw = "1990-01-01T23:00:00.000Z";
    let local = chrono::DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&chrono::Local).date_naive();
    assert_eq!(parse_date(raw), Some(local));
}

#[derive(serde::Deserialize)]
struct Holder {
    #[serde(default, deserialize_with = "deserialize_lenient_date")]
    dob: Option<NaiveDate>,
}

#[test]
fn lenient_date_deserializer_handles_null_and_garbage() {
    let h: Holder = serde_json::from_str(r#"{"dob":"2001-02-03T12:00:00Z"}"#).unwrap();
    assert_eq!(h.dob, Some(date(2001, 2, 3)));
    let h: Holder = serde_json::from_str(r#"{"dob":null}"#).unwrap();
    assert_eq!(h.dob, None);
    let h: Holder = serde_json::from_str(r#"{"dob":"n/a"}"#).unwrap();
    assert_eq!(h.dob, None);
    let h: Holder = serde_json::from_str("{}").unwrap();
    assert_eq!(h.dob, None);
}

#[test]
fn capitalize_first_letter_only() {
    assert_eq!(capitalize("female"), "Female");
    assert_eq!(capitalize(""), "");
    assert_eq!(capitalize("non-binary"), "Non-binary");
}
