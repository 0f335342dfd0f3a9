/// Whether a query is empty or only whitespace. Blank queries are never sent.
#[must_use]
pub fn is_blank_query(query: &str) -> bool {
    query.trim().is_empty()
}
