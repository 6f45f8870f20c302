//! Flat schedule table projection.
//!
//! One row per `(raw row, category, item)` in input order, categories in
//! field order. Backs the full-schedule table and its text search.

use crate::ingest::normalize::RowItems;
use crate::model::category::Category;
use crate::model::entry::RawEntry;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    pub date: String,
    pub time: String,
    pub category: Category,
    pub item: String,
}

impl ScheduleRow {
    /// Cell values as displayed: date, time, category label, item.
    pub fn cells(&self) -> [&str; 4] {
        [
            self.date.as_str(),
            self.time.as_str(),
            self.category.label(),
            self.item.as_str(),
        ]
    }

    /// Lowercased concatenation of all cells, used for text search.
    pub fn search_text(&self) -> String {
        self.cells().concat().to_lowercase()
    }
}

/// Appends the table rows contributed by one raw row.
pub fn push_rows(table: &mut Vec<ScheduleRow>, row: &RawEntry, items: &RowItems) {
    table.extend(items.iter().map(|(category, item)| ScheduleRow {
        date: row.date().to_string(),
        time: row.time().to_string(),
        category,
        item: item.to_string(),
    }));
}

pub fn build_table(rows: &[RawEntry]) -> Vec<ScheduleRow> {
    let mut table = Vec::new();
    for row in rows {
        push_rows(&mut table, row, &RowItems::extract(row));
    }
    table
}
