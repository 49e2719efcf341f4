//! Case-insensitive substring filtering

/// Whether `haystack` contains `term`, ignoring case. The empty term matches.
pub fn matches_term(haystack: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&term.to_lowercase())
}

/// Keep the items whose `field` contains `term`, preserving input order.
///
/// A missing term is treated as the empty string and therefore keeps
/// everything.
pub fn filter_by_term<T, F>(items: impl IntoIterator<Item = T>, term: Option<&str>, field: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    let term = term.unwrap_or_default();
    items
        .into_iter()
        .filter(|item| matches_term(field(item), term))
        .collect()
}
