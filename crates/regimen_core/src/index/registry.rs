//! Deduplicated item registry.
//!
//! # Responsibility
//! - Fold item occurrences into one record per normalized name.
//! - Materialize the item list handed to card and filter views.
//! - Serve occurrence lookups by name.
//!
//! # Invariants
//! - One normalized name maps to exactly one record.
//! - `display_name` and `category` are fixed by the first occurrence and
//!   never updated afterwards.
//! - `periods` is a set (idempotent union); `occurrences` keeps input
//!   encounter order and may repeat.
//! - Records are kept in first-seen order.

use crate::ingest::normalize::{normalize_name, RowItems};
use crate::model::category::Category;
use crate::model::entry::RawEntry;
use crate::model::period::{Period, PeriodKey, PeriodSet};
use serde::Serialize;
use std::collections::HashMap;

/// One raw appearance of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub date: String,
    pub time: String,
}

impl Occurrence {
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
        }
    }

    /// `"<date> <time>"` display stamp.
    pub fn stamp(&self) -> String {
        format!("{} {}", self.date, self.time)
    }
}

/// Registry entry for one unique item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
    /// Normalized key (`lowercase(trim(name))`).
    pub key: String,
    /// Casing of the first occurrence.
    pub display_name: String,
    /// Category of the first occurrence.
    pub category: Category,
    pub periods: PeriodSet,
    pub occurrences: Vec<Occurrence>,
}

/// Materialized item view for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub name: String,
    pub category: Category,
    /// Period order; consumers should not rely on it. Empty when the item
    /// only occurs under literal (unknown) periods.
    pub periods: Vec<Period>,
}

impl From<&ItemRecord> for ItemView {
    fn from(record: &ItemRecord) -> Self {
        Self {
            name: record.display_name.clone(),
            category: record.category,
            periods: record.periods.to_vec(),
        }
    }
}

/// Outcome of folding one item occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldOutcome {
    Created,
    Merged,
    /// Merged into a record whose first-seen category differs.
    CategoryConflict { kept: Category, seen: Category },
}

/// Name-keyed catalog of regimen items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemRegistry {
    records: Vec<ItemRecord>,
    by_key: HashMap<String, usize>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in first-seen order.
    pub fn records(&self) -> &[ItemRecord] {
        &self.records
    }

    /// Looks up a record by any casing/spacing of its name.
    pub fn get(&self, name: &str) -> Option<&ItemRecord> {
        self.by_key
            .get(normalize_name(name).as_str())
            .map(|index| &self.records[*index])
    }

    /// Occurrences of `name`; empty when the item is unknown.
    pub fn occurrences_of(&self, name: &str) -> &[Occurrence] {
        self.get(name)
            .map(|record| record.occurrences.as_slice())
            .unwrap_or(&[])
    }

    pub fn occurrence_count_of(&self, name: &str) -> usize {
        self.occurrences_of(name).len()
    }

    /// Materializes one view per unique item, in first-seen order.
    pub fn to_item_list(&self) -> Vec<ItemView> {
        self.records.iter().map(ItemView::from).collect()
    }

    /// Folds one occurrence into the registry.
    ///
    /// `period` is `None` for literal periods: the occurrence is still
    /// recorded but the period set only tracks known periods.
    pub fn record(
        &mut self,
        name: &str,
        category: Category,
        period: Option<Period>,
        occurrence: Occurrence,
    ) -> FoldOutcome {
        let key = normalize_name(name);
        let (index, mut outcome) = match self.by_key.get(key.as_str()) {
            Some(index) => (*index, FoldOutcome::Merged),
            None => {
                let index = self.records.len();
                self.records.push(ItemRecord {
                    key: key.clone(),
                    display_name: name.to_string(),
                    category,
                    periods: PeriodSet::EMPTY,
                    occurrences: Vec::new(),
                });
                self.by_key.insert(key, index);
                (index, FoldOutcome::Created)
            }
        };

        let record = &mut self.records[index];
        if record.category != category {
            outcome = FoldOutcome::CategoryConflict {
                kept: record.category,
                seen: category,
            };
        }
        if let Some(period) = period {
            record.periods.insert(period);
        }
        record.occurrences.push(occurrence);
        outcome
    }

    /// Folds every item of one row.
    pub fn fold_row(
        &mut self,
        row: &RawEntry,
        period: PeriodKey<'_>,
        items: &RowItems,
    ) -> Vec<FoldOutcome> {
        items
            .iter()
            .map(|(category, name)| {
                self.record(
                    name,
                    category,
                    period.known(),
                    Occurrence::new(row.date(), row.time()),
                )
            })
            .collect()
    }
}

/// Builds the item registry for `rows`.
pub fn build_registry(rows: &[RawEntry]) -> ItemRegistry {
    let mut registry = ItemRegistry::new();
    for row in rows {
        let items = RowItems::extract(row);
        registry.fold_row(row, PeriodKey::resolve(row.period()), &items);
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::{FoldOutcome, ItemRegistry, Occurrence};
    use crate::model::category::Category;
    use crate::model::period::Period;

    #[test]
    fn record_keeps_first_display_name() {
        let mut registry = ItemRegistry::new();
        let first = registry.record(
            "Vitamin D",
            Category::Supplement,
            Some(Period::Morning),
            Occurrence::new("2024-01-03", "08:00"),
        );
        let second = registry.record(
            "VITAMIN D",
            Category::Supplement,
            Some(Period::Night),
            Occurrence::new("2024-01-03", "21:00"),
        );

        assert_eq!(first, FoldOutcome::Created);
        assert_eq!(second, FoldOutcome::Merged);
        let record = registry.get("vitamin d").unwrap();
        assert_eq!(record.display_name, "Vitamin D");
        assert_eq!(record.periods.to_vec(), vec![Period::Morning, Period::Night]);
    }

    #[test]
    fn literal_period_records_occurrence_only() {
        let mut registry = ItemRegistry::new();
        registry.record(
            "Zinc",
            Category::Supplement,
            None,
            Occurrence::new("2024-01-03", "18:00"),
        );

        let record = registry.get("Zinc").unwrap();
        assert!(record.periods.is_empty());
        assert_eq!(registry.occurrence_count_of("zinc"), 1);
    }

    #[test]
    fn unknown_name_has_no_occurrences() {
        let registry = ItemRegistry::new();
        assert!(registry.occurrences_of("nothing").is_empty());
        assert_eq!(registry.occurrence_count_of("nothing"), 0);
    }

    #[test]
    fn occurrence_stamp_joins_date_and_time() {
        assert_eq!(
            Occurrence::new("2024-01-03", "08:00").stamp(),
            "2024-01-03 08:00"
        );
    }
}
