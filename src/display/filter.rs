//! Case-insensitive row filtering for listing tables

/// True when `row` contains `query`, ignoring case.
///
/// An empty query matches every row.
pub fn row_matches(row: &str, query: &str) -> bool {
    row.to_lowercase().contains(&query.to_lowercase())
}

/// Keep the rows that contain `query`, in their original order
pub fn filter_rows<'a, I, S>(rows: I, query: &str) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a S>,
    S: AsRef<str> + ?Sized + 'a,
{
    let needle = query.to_lowercase();
    rows.into_iter()
        .map(|row: &'a S| -> &'a str { row.as_ref() })
        .filter(|row| row.to_lowercase().contains(&needle))
        .collect()
}
