//! FFI use-case API for the Flutter regimen viewer.
//!
//! # Responsibility
//! - Load plan data into the process-wide snapshot store.
//! - Expose read-only projections for cards, calendar, day details and the
//!   schedule table.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Read functions only observe complete snapshots.
//! - A failed load keeps the previously loaded plan visible.

use regimen_core::{
    core_version as core_version_inner, filter_items, init_logging as init_logging_inner,
    search_rows, DaySlot, ItemView, Period, RegimenSnapshot, RegimenStore, ScheduleRow,
    TimeFilter, TypeFilter, DEFAULT_PLAN_FILE,
};
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

const PLAN_PATH_ENV: &str = "REGIMEN_PLAN_PATH";
static STORE: OnceLock<RegimenStore> = OnceLock::new();

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - `level`: `trace|debug|info|warn|error`, case-insensitive.
/// - `log_dir`: absolute directory for rolling logs.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Result envelope for plan loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanLoadResponse {
    pub ok: bool,
    /// Human-readable outcome for diagnostics/UI.
    pub message: String,
    /// Dates in the visible snapshot after the call.
    pub date_count: u32,
    /// Unique items in the visible snapshot after the call.
    pub item_count: u32,
}

/// One item card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCard {
    pub name: String,
    /// `supplement|hair|skin`.
    pub category: String,
    /// Capitalized badge label.
    pub category_label: String,
    /// Period tokens in period order.
    pub periods: Vec<String>,
    pub occurrence_count: u32,
}

/// One period of the day-details panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySlotView {
    /// Raw period key (`morning|midday|night` or a literal value).
    pub period: String,
    pub label: String,
    pub supplements: Vec<String>,
    pub hair: Vec<String>,
    pub skin: Vec<String>,
    pub has_entries: bool,
}

/// Day-details panel content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayView {
    pub date: String,
    /// Known periods first, then literal periods in key order.
    pub slots: Vec<DaySlotView>,
}

/// One schedule table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRowView {
    pub date: String,
    pub time: String,
    pub category: String,
    pub item: String,
}

/// Loads the plan file at `path`, or the default plan path when `None`.
///
/// Default path: `$REGIMEN_PLAN_PATH`, then `master_plan.json` in the
/// working directory.
#[flutter_rust_bridge::frb(sync)]
pub fn load_plan(path: Option<String>) -> PlanLoadResponse {
    let path = path
        .map(|value| PathBuf::from(value.trim()))
        .unwrap_or_else(resolve_plan_path);
    match store().reload_from_path(&path) {
        Ok(snapshot) => load_success(&snapshot),
        Err(err) => load_failure(format!("load_plan failed: {err}")),
    }
}

/// Loads plan rows from JSON text already fetched by the caller.
#[flutter_rust_bridge::frb(sync)]
pub fn load_plan_json(json: String) -> PlanLoadResponse {
    match store().reload_from_json(json.as_str()) {
        Ok(snapshot) => load_success(&snapshot),
        Err(err) => load_failure(format!("load_plan_json failed: {err}")),
    }
}

/// Lists item cards passing the type and time filter tokens.
///
/// Unknown tokens match nothing; `all` disables a filter.
#[flutter_rust_bridge::frb(sync)]
pub fn item_cards(type_filter: String, time_filter: String) -> Vec<ItemCard> {
    let snapshot = store().snapshot();
    let type_filter = TypeFilter::from_token(type_filter.as_str());
    let time_filter = TimeFilter::from_token(time_filter.as_str());
    filter_items(snapshot.item_list(), &type_filter, &time_filter)
        .into_iter()
        .map(|item| to_item_card(&snapshot, item))
        .collect()
}

/// Returns `"<date> <time>"` stamps for one item, in load order.
#[flutter_rust_bridge::frb(sync)]
pub fn item_occurrences(name: String) -> Vec<String> {
    store()
        .snapshot()
        .occurrences_of(name.as_str())
        .iter()
        .map(|occurrence| occurrence.stamp())
        .collect()
}

/// Returns day details, or `None` when the date has no rows.
#[flutter_rust_bridge::frb(sync)]
pub fn day_details(date: String) -> Option<DayView> {
    let snapshot = store().snapshot();
    let day = snapshot.day_schedule(date.trim())?;

    let mut slots: Vec<DaySlotView> = Period::ALL
        .into_iter()
        .map(|period| to_slot_view(period.as_str(), period.label(), day.slot(period)))
        .collect();
    slots.extend(
        day.other
            .iter()
            .map(|(raw, slot)| to_slot_view(raw, raw, slot)),
    );

    Some(DayView {
        date: date.trim().to_string(),
        slots,
    })
}

/// Period tokens to mark as dots on the calendar cell of `date`.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_dots(date: String) -> Vec<String> {
    store()
        .snapshot()
        .day_schedule(date.trim())
        .map(|day| {
            day.active_periods()
                .into_iter()
                .map(|period| period.as_str().to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Full schedule table rows matching `query` (case-insensitive; empty keeps all).
///
/// The query is used as typed; surrounding whitespace is part of the needle.
#[flutter_rust_bridge::frb(sync)]
pub fn schedule_table(query: String) -> Vec<ScheduleRowView> {
    let snapshot = store().snapshot();
    search_rows(snapshot.table(), query.as_str())
        .into_iter()
        .map(to_row_view)
        .collect()
}

fn store() -> &'static RegimenStore {
    STORE.get_or_init(RegimenStore::new)
}

fn resolve_plan_path() -> PathBuf {
    if let Ok(raw) = std::env::var(PLAN_PATH_ENV) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    PathBuf::from(DEFAULT_PLAN_FILE)
}

fn load_success(snapshot: &RegimenSnapshot) -> PlanLoadResponse {
    let date_count = count_u32(snapshot.schedule().len());
    let item_count = count_u32(snapshot.item_list().len());
    PlanLoadResponse {
        ok: true,
        message: format!("Loaded {date_count} day(s), {item_count} item(s)."),
        date_count,
        item_count,
    }
}

fn load_failure(message: String) -> PlanLoadResponse {
    log::warn!("event=plan_load module=ffi status=error");
    let snapshot = store().snapshot();
    PlanLoadResponse {
        ok: false,
        message,
        date_count: count_u32(snapshot.schedule().len()),
        item_count: count_u32(snapshot.item_list().len()),
    }
}

fn to_item_card(snapshot: &Arc<RegimenSnapshot>, item: &ItemView) -> ItemCard {
    ItemCard {
        name: item.name.clone(),
        category: item.category.as_str().to_string(),
        category_label: item.category.label().to_string(),
        periods: item
            .periods
            .iter()
            .map(|period| period.as_str().to_string())
            .collect(),
        occurrence_count: count_u32(snapshot.occurrence_count_of(item.name.as_str())),
    }
}

fn to_slot_view(period: &str, label: &str, slot: &DaySlot) -> DaySlotView {
    DaySlotView {
        period: period.to_string(),
        label: label.to_string(),
        supplements: slot.sup.clone(),
        hair: slot.hair.clone(),
        skin: slot.skin.clone(),
        has_entries: slot.has_entries(),
    }
}

fn to_row_view(row: &ScheduleRow) -> ScheduleRowView {
    ScheduleRowView {
        date: row.date.clone(),
        time: row.time.clone(),
        category: row.category.label().to_string(),
        item: row.item.clone(),
    }
}

fn count_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{
        calendar_dots, core_version, day_details, init_logging, item_cards, item_occurrences,
        load_plan, load_plan_json, schedule_table,
    };
    use std::io::Write;

    // Every test loads this same plan, so parallel tests observe identical data.
    const PLAN_JSON: &str = r#"[
      {"date":"2024-01-03","time":"08:00","period":"morning",
       "supplements":"Vitamin D, Omega-3","hair_care":"","skin_care":"Sunscreen"},
      {"date":"2024-01-03","time":"13:00","period":"midday","supplements":"Vitamin D"},
      {"date":"2024-01-03","time":"21:00","period":"night",
       "supplements":"vitamin d, Magnesium","hair_care":"Rosemary Oil"},
      {"date":"2024-01-04","time":"18:00","period":"evening","skin_care":"Sunscreen"}
    ]"#;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_bad_input() {
        assert!(!init_logging("info".to_string(), String::new()).is_empty());
        assert!(!init_logging("verbose".to_string(), "/tmp/logs".to_string()).is_empty());
    }

    #[test]
    fn load_plan_json_reports_counts() {
        let response = load_plan_json(PLAN_JSON.to_string());
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.date_count, 2);
        assert_eq!(response.item_count, 5);
    }

    #[test]
    fn failed_load_keeps_previous_plan() {
        assert!(load_plan_json(PLAN_JSON.to_string()).ok);

        let response = load_plan_json("{ broken".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("load_plan_json failed"));
        assert_eq!(response.item_count, 5);
        assert!(day_details("2024-01-03".to_string()).is_some());
    }

    #[test]
    fn load_plan_reads_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PLAN_JSON.as_bytes()).unwrap();

        let response = load_plan(Some(file.path().to_string_lossy().into_owned()));
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.item_count, 5);
    }

    #[test]
    fn item_cards_apply_filters() {
        assert!(load_plan_json(PLAN_JSON.to_string()).ok);

        let daily = item_cards("all".to_string(), "daily".to_string());
        assert_eq!(daily.len(), 1);
        assert_eq!(daily[0].name, "Vitamin D");
        assert_eq!(daily[0].occurrence_count, 3);
        assert_eq!(daily[0].periods, vec!["morning", "midday", "night"]);

        let hair = item_cards("hair".to_string(), "all".to_string());
        assert_eq!(hair.len(), 1);
        assert_eq!(hair[0].category_label, "Hair");

        assert!(item_cards("makeup".to_string(), "all".to_string()).is_empty());
    }

    #[test]
    fn occurrences_and_dots_follow_loaded_plan() {
        assert!(load_plan_json(PLAN_JSON.to_string()).ok);

        assert_eq!(
            item_occurrences("SUNSCREEN".to_string()),
            vec!["2024-01-03 08:00", "2024-01-04 18:00"]
        );
        assert_eq!(
            calendar_dots("2024-01-03".to_string()),
            vec!["morning", "midday", "night"]
        );
        assert!(calendar_dots("2024-01-04".to_string()).is_empty());
        assert!(calendar_dots("2030-01-01".to_string()).is_empty());
    }

    #[test]
    fn day_details_include_literal_periods() {
        assert!(load_plan_json(PLAN_JSON.to_string()).ok);

        let day = day_details("2024-01-04".to_string()).expect("day should exist");
        assert_eq!(day.slots.len(), 4);
        assert!(day.slots[..3].iter().all(|slot| !slot.has_entries));
        assert_eq!(day.slots[3].period, "evening");
        assert_eq!(day.slots[3].skin, vec!["Sunscreen"]);

        assert!(day_details("2030-01-01".to_string()).is_none());
    }

    #[test]
    fn schedule_table_filters_by_query() {
        assert!(load_plan_json(PLAN_JSON.to_string()).ok);

        assert_eq!(schedule_table(String::new()).len(), 8);
        let rows = schedule_table("rosemary".to_string());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, "Hair");
        assert_eq!(rows[0].time, "21:00");
    }

    #[test]
    fn schedule_table_query_is_not_trimmed() {
        assert!(load_plan_json(PLAN_JSON.to_string()).ok);

        // Only multi-word item names contain a space.
        let rows = schedule_table(" ".to_string());
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| row.item.contains(' ')));
        assert!(schedule_table(" rosemary ".to_string()).is_empty());
    }
}
