use super::*;

#[test]
fn next_numeric_id_starts_at_one() {
    assert_eq!(next_numeric_id(std::iter::empty()), 1);
}

#[test]
fn next_numeric_id_skips_past_gaps() {
    assert_eq!(next_numeric_id([1, 7, 3].into_iter()), 8);
}
