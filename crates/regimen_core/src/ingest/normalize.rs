//! Delimited field normalization.
//!
//! # Responsibility
//! - Split raw comma-separated fields into clean item names.
//! - Derive the case-insensitive registry key for an item name.
//!
//! # Invariants
//! - Output never contains empty or whitespace-only names.
//! - Display casing is preserved; only registry keys are lowercased.
//! - Malformed input yields fewer items, never an error.

use crate::model::category::Category;
use crate::model::entry::RawEntry;

const ITEM_DELIMITER: char = ',';

/// Splits one delimited field into trimmed, non-empty item names.
///
/// Absent, empty and whitespace-only input returns an empty list. Order of
/// output matches order of appearance.
pub fn split_items(field: Option<&str>) -> Vec<String> {
    let Some(raw) = field else {
        return Vec::new();
    };
    raw.split(ITEM_DELIMITER)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Registry key for an item name: trimmed and lowercased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Per-category item lists extracted from one raw row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowItems {
    pub supplements: Vec<String>,
    pub hair: Vec<String>,
    pub skin: Vec<String>,
}

impl RowItems {
    /// Runs the normalizer on every category field of `entry`.
    pub fn extract(entry: &RawEntry) -> Self {
        Self {
            supplements: split_items(entry.field(Category::Supplement)),
            hair: split_items(entry.field(Category::Hair)),
            skin: split_items(entry.field(Category::Skin)),
        }
    }

    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Supplement => &self.supplements,
            Category::Hair => &self.hair,
            Category::Skin => &self.skin,
        }
    }

    /// Iterates `(category, name)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &str)> + '_ {
        Category::ALL.into_iter().flat_map(move |category| {
            self.get(category)
                .iter()
                .map(move |name| (category, name.as_str()))
        })
    }

    pub fn len(&self) -> usize {
        self.supplements.len() + self.hair.len() + self.skin.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
