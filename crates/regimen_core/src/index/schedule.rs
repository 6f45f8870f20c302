//! Date-bucketed schedule index.
//!
//! # Responsibility
//! - Fold normalized row items into `date -> period -> category` buckets.
//! - Expose per-day lookups used by calendar dots and day details.
//!
//! # Invariants
//! - Every date seen by the indexer has exactly one `DaySchedule`.
//! - A new `DaySchedule` starts with all three known periods present and every
//!   category bucket empty.
//! - Rows sharing `(date, period)` concatenate in input order.
//! - Literal (unknown) periods get their own default-initialized slot.

use crate::ingest::normalize::RowItems;
use crate::model::category::Category;
use crate::model::entry::RawEntry;
use crate::model::period::{Period, PeriodKey};
use serde::Serialize;
use std::collections::BTreeMap;

/// Date-keyed schedule, ordered by date string.
pub type ScheduleIndex = BTreeMap<String, DaySchedule>;

/// Category buckets for one `(date, period)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DaySlot {
    pub sup: Vec<String>,
    pub hair: Vec<String>,
    pub skin: Vec<String>,
}

impl DaySlot {
    pub fn bucket(&self, category: Category) -> &[String] {
        match category {
            Category::Supplement => &self.sup,
            Category::Hair => &self.hair,
            Category::Skin => &self.skin,
        }
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Supplement => &mut self.sup,
            Category::Hair => &mut self.hair,
            Category::Skin => &mut self.skin,
        }
    }

    /// True when any category bucket is non-empty.
    pub fn has_entries(&self) -> bool {
        !(self.sup.is_empty() && self.hair.is_empty() && self.skin.is_empty())
    }

    /// Iterates items in day-details order: supplements, hair, skin.
    pub fn items(&self) -> impl Iterator<Item = (Category, &str)> + '_ {
        Category::ALL.into_iter().flat_map(move |category| {
            self.bucket(category)
                .iter()
                .map(move |name| (category, name.as_str()))
        })
    }

    fn append(&mut self, items: &RowItems) {
        for category in Category::ALL {
            self.bucket_mut(category)
                .extend(items.get(category).iter().cloned());
        }
    }
}

/// Schedule for one date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DaySchedule {
    pub morning: DaySlot,
    pub midday: DaySlot,
    pub night: DaySlot,
    /// Slots for rows whose period did not resolve, keyed by the raw value.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub other: BTreeMap<String, DaySlot>,
}

impl DaySchedule {
    pub fn slot(&self, period: Period) -> &DaySlot {
        match period {
            Period::Morning => &self.morning,
            Period::Midday => &self.midday,
            Period::Night => &self.night,
        }
    }

    /// Looks up a slot by raw period value, known or literal.
    pub fn slot_by_key(&self, raw_period: &str) -> Option<&DaySlot> {
        match PeriodKey::resolve(raw_period) {
            PeriodKey::Known(period) => Some(self.slot(period)),
            PeriodKey::Literal(raw) => self.other.get(raw),
        }
    }

    fn slot_mut(&mut self, key: PeriodKey<'_>) -> &mut DaySlot {
        match key {
            PeriodKey::Known(Period::Morning) => &mut self.morning,
            PeriodKey::Known(Period::Midday) => &mut self.midday,
            PeriodKey::Known(Period::Night) => &mut self.night,
            PeriodKey::Literal(raw) => self.other.entry(raw.to_string()).or_default(),
        }
    }

    /// True when any category bucket of `period` is non-empty.
    pub fn has_entries(&self, period: Period) -> bool {
        self.slot(period).has_entries()
    }

    /// Known periods with at least one item, in period order.
    pub fn active_periods(&self) -> Vec<Period> {
        Period::ALL
            .into_iter()
            .filter(|period| self.has_entries(*period))
            .collect()
    }
}

/// Incremental builder for `ScheduleIndex`.
#[derive(Debug, Default)]
pub struct ScheduleIndexer {
    days: ScheduleIndex,
}

impl ScheduleIndexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one row's items into its date bucket.
    ///
    /// The date entry is created (fully shaped) before appending, so a row
    /// without any items still registers its date.
    pub fn fold(&mut self, date: &str, period: PeriodKey<'_>, items: &RowItems) {
        let day = self.days.entry(date.to_string()).or_default();
        let slot = day.slot_mut(period);
        slot.append(items);
    }

    pub fn finish(self) -> ScheduleIndex {
        self.days
    }
}

/// Builds the schedule index for `rows`, bucketing unknown periods literally.
pub fn index_by_date(rows: &[RawEntry]) -> ScheduleIndex {
    let mut indexer = ScheduleIndexer::new();
    for row in rows {
        let items = RowItems::extract(row);
        indexer.fold(row.date(), PeriodKey::resolve(row.period()), &items);
    }
    indexer.finish()
}

#[cfg(test)]
mod tests {
    use super::{index_by_date, DaySchedule};
    use crate::model::category::Category;
    use crate::model::entry::RawEntry;
    use crate::model::period::Period;

    #[test]
    fn new_day_is_fully_shaped() {
        let rows = vec![RawEntry::new("2024-01-03", "21:00", "night")
            .with_items(Category::Hair, "Rosemary oil")];
        let index = index_by_date(&rows);
        let day = index.get("2024-01-03").expect("day should exist");

        assert!(day.morning.sup.is_empty());
        assert!(day.midday.skin.is_empty());
        assert_eq!(day.night.hair, vec!["Rosemary oil".to_string()]);
        assert_eq!(day.active_periods(), vec![Period::Night]);
    }

    #[test]
    fn literal_period_gets_own_slot() {
        let rows = vec![RawEntry::new("2024-01-03", "18:00", "evening")
            .with_items(Category::Supplement, "Magnesium")];
        let index = index_by_date(&rows);
        let day = index.get("2024-01-03").unwrap();

        assert!(day.active_periods().is_empty());
        let evening = day.slot_by_key("evening").expect("literal slot");
        assert_eq!(evening.sup, vec!["Magnesium".to_string()]);
    }

    #[test]
    fn slot_items_follow_category_order() {
        let mut day = DaySchedule::default();
        day.morning.skin.push("Sunscreen".to_string());
        day.morning.sup.push("Zinc".to_string());

        let names: Vec<_> = day.morning.items().map(|(_, name)| name).collect();
        assert_eq!(names, vec!["Zinc", "Sunscreen"]);
    }
}
