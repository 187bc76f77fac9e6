use super::*;

struct Row {
    name: &'static str,
    tag: &'static str,
}

impl Searchable for Row {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name, self.tag]
    }
}

const ROWS: [Row; 3] = [
    Row { name: "John Doe", tag: "Consultation" },
    Row { name: "Jane Smith", tag: "Therapy Session" },
    Row { name: "Robert Brown", tag: "Assessment" },
];

#[test]
fn empty_query_matches_everything() {
    assert_eq!(filter_items(&ROWS, "").len(), 3);
}

#[test]
fn query_is_case_insensitive() {
    let hits = filter_items(&ROWS, "JOHN");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "John Doe");
}

#[test]
fn query_matches_any_searched_field() {
    let hits = filter_items(&ROWS, "session");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Jane Smith");
}

#[test]
fn query_matches_substrings_across_rows_in_order() {
    let names: Vec<_> = filter_items(&ROWS, "n").iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["John Doe", "Jane Smith", "Robert Brown"]);
}

#[test]
fn unmatched_query_returns_nothing() {
    assert!(filter_items(&ROWS, "zzz").is_empty());
}

#[test]
fn whitespace_is_part_of_the_needle() {
    assert!(matches_query("n d", ["John Doe"]));
    assert!(!matches_query("  doe ", ["John Doe"]));
    assert!(!matches_query("doe", ["Jane Smith"]));
}
