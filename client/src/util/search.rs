//! Case-insensitive substring search shared by every list view.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// A record that exposes the text fields a list view searches over.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// True when `query` is empty or any field contains it, ignoring case.
pub fn matches_query<'a>(query: &str, fields: impl IntoIterator<Item = &'a str>) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields.into_iter().any(|field| field.to_lowercase().contains(&needle))
}

/// Keep the items whose searched fields match `query`, preserving order.
pub fn filter_items<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| matches_query(query, item.search_fields()))
        .collect()
}
