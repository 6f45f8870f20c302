//! Item card filter predicate.
//!
//! # Responsibility
//! - Parse type/time filter tokens from the presentation layer.
//! - Decide whether one item passes both filters.
//!
//! # Invariants
//! - The predicate is stateless and never fails.
//! - Unknown filter tokens match nothing (only `all` is a wildcard).
//! - `daily` means the item occurs in every one of the three known periods.

use crate::index::registry::{ItemRecord, ItemView};
use crate::model::category::Category;
use crate::model::period::{Period, PeriodSet};

/// Token for the "no filter" choice on both axes.
pub const FILTER_ALL: &str = "all";
/// Time filter token selecting items present in all three periods.
pub const FILTER_DAILY: &str = "daily";

/// Category filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Category(Category),
    /// Unrecognized token, kept for diagnostics.
    Unknown(String),
}

impl TypeFilter {
    pub fn from_token(token: &str) -> Self {
        let trimmed = token.trim();
        if trimmed == FILTER_ALL {
            return Self::All;
        }
        match Category::parse(trimmed) {
            Some(category) => Self::Category(category),
            None => Self::Unknown(trimmed.to_string()),
        }
    }

    pub fn accepts(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => *wanted == category,
            Self::Unknown(_) => false,
        }
    }
}

/// Time-of-day filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TimeFilter {
    #[default]
    All,
    Daily,
    Period(Period),
    Unknown(String),
}

impl TimeFilter {
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            FILTER_ALL => Self::All,
            FILTER_DAILY => Self::Daily,
            other => match Period::parse(other) {
                Some(period) => Self::Period(period),
                None => Self::Unknown(other.to_string()),
            },
        }
    }

    pub fn accepts(&self, periods: PeriodSet) -> bool {
        match self {
            Self::All => true,
            Self::Daily => periods.is_full(),
            Self::Period(period) => periods.contains(*period),
            Self::Unknown(_) => false,
        }
    }
}

/// Anything the card filters can be applied to.
pub trait Filterable {
    fn category(&self) -> Category;
    fn period_set(&self) -> PeriodSet;
}

impl Filterable for ItemView {
    fn category(&self) -> Category {
        self.category
    }

    fn period_set(&self) -> PeriodSet {
        self.periods.iter().copied().collect()
    }
}

impl Filterable for ItemRecord {
    fn category(&self) -> Category {
        self.category
    }

    fn period_set(&self) -> PeriodSet {
        self.periods
    }
}

/// True iff `item` passes both the type and the time filter.
pub fn matches<T: Filterable + ?Sized>(
    item: &T,
    type_filter: &TypeFilter,
    time_filter: &TimeFilter,
) -> bool {
    type_filter.accepts(item.category()) && time_filter.accepts(item.period_set())
}

/// Returns the items passing both filters, preserving input order.
pub fn filter_items<'a, T: Filterable>(
    items: &'a [T],
    type_filter: &TypeFilter,
    time_filter: &TimeFilter,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| matches(*item, type_filter, time_filter))
        .collect()
}
