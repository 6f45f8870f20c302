//! Item category model.
//!
//! # Responsibility
//! - Define the closed set of regimen categories.
//! - Map each category to its raw source field and schedule bucket name.
//!
//! # Invariants
//! - Category is derived 1:1 from the raw field an item name came from.
//! - Adding a category is an enum change; every dispatch below is an
//!   exhaustive `match`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Regimen category of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Items from the `supplements` field.
    Supplement,
    /// Items from the `hair_care` field.
    Hair,
    /// Items from the `skin_care` field.
    Skin,
}

impl Category {
    /// All categories in field order (`supplements`, `hair_care`, `skin_care`).
    pub const ALL: [Category; 3] = [Category::Supplement, Category::Hair, Category::Skin];

    /// Stable lowercase token (`supplement|hair|skin`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Supplement => "supplement",
            Self::Hair => "hair",
            Self::Skin => "skin",
        }
    }

    /// Capitalized label used by cards and the schedule table.
    pub fn label(self) -> &'static str {
        match self {
            Self::Supplement => "Supplement",
            Self::Hair => "Hair",
            Self::Skin => "Skin",
        }
    }

    /// Bucket name inside a day slot (`sup|hair|skin`).
    pub fn bucket_key(self) -> &'static str {
        match self {
            Self::Supplement => "sup",
            Self::Hair => "hair",
            Self::Skin => "skin",
        }
    }

    /// Raw JSON field carrying this category's items.
    pub fn source_field(self) -> &'static str {
        match self {
            Self::Supplement => "supplements",
            Self::Hair => "hair_care",
            Self::Skin => "skin_care",
        }
    }

    /// Parses a category token. Returns `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "supplement" => Some(Self::Supplement),
            "hair" => Some(Self::Hair),
            "skin" => Some(Self::Skin),
            _ => None,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Category;

    #[test]
    fn tokens_round_trip_through_parse() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
        assert_eq!(Category::parse("supplements"), None);
    }

    #[test]
    fn supplement_uses_short_bucket_key() {
        assert_eq!(Category::Supplement.bucket_key(), "sup");
        assert_eq!(Category::Hair.source_field(), "hair_care");
        assert_eq!(Category::Skin.label(), "Skin");
    }
}
