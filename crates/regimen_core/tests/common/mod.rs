#![allow(dead_code)]

use regimen_core::{Category, RawEntry};

pub fn row(date: &str, time: &str, period: &str) -> RawEntry {
    RawEntry::new(date, time, period)
}

pub fn sample_rows() -> Vec<RawEntry> {
    vec![
        row("2024-01-03", "08:00", "morning")
            .with_items(Category::Supplement, "Vitamin D, Omega-3")
            .with_items(Category::Hair, "")
            .with_items(Category::Skin, "Sunscreen"),
        row("2024-01-03", "13:00", "midday").with_items(Category::Supplement, "vitamin d "),
        row("2024-01-03", "21:00", "night")
            .with_items(Category::Supplement, "Vitamin D, Magnesium")
            .with_items(Category::Hair, "Rosemary Oil"),
        row("2024-01-04", "08:00", "morning")
            .with_items(Category::Skin, "Sunscreen, Vitamin C Serum"),
    ]
}
