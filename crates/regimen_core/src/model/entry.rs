//! Raw schedule row as decoded from the plan file.
//!
//! Every field is optional on the wire; missing or `null` values read as
//! empty strings through the accessors below. Item fields holding anything
//! other than a string are dropped so the rest of the row survives.

use crate::model::category::Category;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One dated schedule slot from the source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawEntry {
    /// ISO date (`YYYY-MM-DD`), used verbatim as the schedule key.
    pub date: Option<String>,
    pub time: Option<String>,
    /// Expected `morning|midday|night`; other values are resolved by build policy.
    pub period: Option<String>,
    /// Comma-separated supplement names.
    #[serde(deserialize_with = "lenient_items")]
    pub supplements: Option<String>,
    /// Comma-separated hair care item names.
    #[serde(deserialize_with = "lenient_items")]
    pub hair_care: Option<String>,
    /// Comma-separated skin care item names.
    #[serde(deserialize_with = "lenient_items")]
    pub skin_care: Option<String>,
}

impl RawEntry {
    /// Creates a row with grouping keys and no items.
    pub fn new(date: impl Into<String>, time: impl Into<String>, period: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            time: Some(time.into()),
            period: Some(period.into()),
            ..Self::default()
        }
    }

    /// Sets the delimited item field for `category`.
    pub fn with_items(mut self, category: Category, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match category {
            Category::Supplement => self.supplements = value,
            Category::Hair => self.hair_care = value,
            Category::Skin => self.skin_care = value,
        }
        self
    }

    pub fn date(&self) -> &str {
        self.date.as_deref().unwrap_or("")
    }

    pub fn time(&self) -> &str {
        self.time.as_deref().unwrap_or("")
    }

    pub fn period(&self) -> &str {
        self.period.as_deref().unwrap_or("")
    }

    /// Returns the raw delimited field carrying `category` items.
    pub fn field(&self, category: Category) -> Option<&str> {
        match category {
            Category::Supplement => self.supplements.as_deref(),
            Category::Hair => self.hair_care.as_deref(),
            Category::Skin => self.skin_care.as_deref(),
        }
    }
}

/// Reads an item field, treating non-string values as absent.
fn lenient_items<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(other) => {
            debug!(
                "event=field_dropped module=model reason=non_string kind={}",
                value_kind(&other)
            );
            Ok(None)
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
