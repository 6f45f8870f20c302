//! Text search over the flat schedule table.

use crate::index::table::ScheduleRow;

/// Keeps rows whose concatenated cell text contains `query`, ignoring case.
///
/// An empty query keeps every row.
pub fn search_rows<'a>(rows: &'a [ScheduleRow], query: &str) -> Vec<&'a ScheduleRow> {
    let needle = query.to_lowercase();
    rows.iter()
        .filter(|row| needle.is_empty() || row.search_text().contains(needle.as_str()))
        .collect()
}
