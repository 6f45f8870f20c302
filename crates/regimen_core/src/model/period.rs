//! Time-of-day period model.
//!
//! # Responsibility
//! - Define the three fixed periods a schedule row belongs to.
//! - Provide a fixed-domain bitset for per-item period membership.
//! - Resolve raw period strings into known periods or literal keys.
//!
//! # Invariants
//! - `PeriodSet` never holds duplicates; iteration is always in period order.
//! - A raw period that does not resolve is kept verbatim as `PeriodKey::Literal`.

use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// One of the three fixed times of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Morning,
    Midday,
    Night,
}

impl Period {
    /// All periods in display order.
    pub const ALL: [Period; 3] = [Period::Morning, Period::Midday, Period::Night];

    /// Stable lowercase token (`morning|midday|night`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Midday => "midday",
            Self::Night => "night",
        }
    }

    /// Capitalized label used for badges and day details.
    pub fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Midday => "Midday",
            Self::Night => "Night",
        }
    }

    /// Parses an exact period token (`morning|midday|night`).
    ///
    /// No case folding or trimming: `"Morning"` is not a known period.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|period| period.as_str() == value)
    }

    fn bit(self) -> u8 {
        match self {
            Self::Morning => 0b001,
            Self::Midday => 0b010,
            Self::Night => 0b100,
        }
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved grouping key of one raw row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodKey<'a> {
    Known(Period),
    /// Missing or unrecognized period, kept as the literal raw value.
    Literal(&'a str),
}

impl<'a> PeriodKey<'a> {
    pub fn resolve(raw: &'a str) -> Self {
        match Period::parse(raw) {
            Some(period) => Self::Known(period),
            None => Self::Literal(raw),
        }
    }

    pub fn known(self) -> Option<Period> {
        match self {
            Self::Known(period) => Some(period),
            Self::Literal(_) => None,
        }
    }
}

/// Set of periods over the closed three-element domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PeriodSet(u8);

impl PeriodSet {
    pub const EMPTY: PeriodSet = PeriodSet(0);
    pub const FULL: PeriodSet = PeriodSet(0b111);

    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Adds `period`; returns `true` when it was not present yet.
    pub fn insert(&mut self, period: Period) -> bool {
        let before = self.0;
        self.0 |= period.bit();
        before != self.0
    }

    pub fn contains(self, period: Period) -> bool {
        self.0 & period.bit() != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every defined period is present.
    pub fn is_full(self) -> bool {
        self == Self::FULL
    }

    /// Iterates members in period order.
    pub fn iter(self) -> impl Iterator<Item = Period> {
        Period::ALL
            .into_iter()
            .filter(move |period| self.contains(*period))
    }

    pub fn to_vec(self) -> Vec<Period> {
        self.iter().collect()
    }
}

impl FromIterator<Period> for PeriodSet {
    fn from_iter<I: IntoIterator<Item = Period>>(iter: I) -> Self {
        let mut set = PeriodSet::EMPTY;
        for period in iter {
            set.insert(period);
        }
        set
    }
}

impl Serialize for PeriodSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for period in self.iter() {
            seq.serialize_element(&period)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::{Period, PeriodKey, PeriodSet};

    #[test]
    fn insert_is_idempotent() {
        let mut set = PeriodSet::new();
        assert!(set.insert(Period::Night));
        assert!(!set.insert(Period::Night));
        assert_eq!(set.len(), 1);
        assert!(set.contains(Period::Night));
        assert!(!set.contains(Period::Morning));
    }

    #[test]
    fn iteration_follows_period_order() {
        let set: PeriodSet = [Period::Night, Period::Morning].into_iter().collect();
        assert_eq!(set.to_vec(), vec![Period::Morning, Period::Night]);
        assert!(!set.is_full());

        let full: PeriodSet = Period::ALL.into_iter().collect();
        assert!(full.is_full());
        assert_eq!(full.len(), 3);
    }

    #[test]
    fn resolve_keeps_unknown_values_literal() {
        assert_eq!(PeriodKey::resolve("morning"), PeriodKey::Known(Period::Morning));
        assert_eq!(PeriodKey::resolve("Morning"), PeriodKey::Literal("Morning"));
        assert_eq!(PeriodKey::resolve(" night "), PeriodKey::Literal(" night "));
        assert_eq!(PeriodKey::resolve("evening"), PeriodKey::Literal("evening"));
        assert_eq!(PeriodKey::resolve(""), PeriodKey::Literal(""));
    }

    #[test]
    fn serializes_as_ordered_token_list() {
        let set: PeriodSet = [Period::Midday, Period::Morning].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["morning","midday"]"#);
    }
}
