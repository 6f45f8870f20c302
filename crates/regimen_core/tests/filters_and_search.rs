mod common;

use common::sample_rows;
use regimen_core::{
    activity_for_date, build_snapshot, filter_items, has_entries, matches, search_rows, Category,
    Period, TimeFilter, TypeFilter,
};

#[test]
fn daily_filter_selects_items_in_every_period() {
    let snapshot = build_snapshot(&sample_rows());

    let daily = filter_items(snapshot.item_list(), &TypeFilter::All, &TimeFilter::Daily);
    let names: Vec<_> = daily.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Vitamin D"]);

    for item in snapshot.item_list() {
        assert_eq!(
            matches(item, &TypeFilter::All, &TimeFilter::Daily),
            item.periods.len() == 3
        );
    }
}

#[test]
fn type_and_time_filters_combine() {
    let snapshot = build_snapshot(&sample_rows());

    let night_supplements = filter_items(
        snapshot.item_list(),
        &TypeFilter::from_token("supplement"),
        &TimeFilter::from_token("night"),
    );
    let names: Vec<_> = night_supplements.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Vitamin D", "Magnesium"]);

    let skin = filter_items(
        snapshot.item_list(),
        &TypeFilter::Category(Category::Skin),
        &TimeFilter::All,
    );
    assert_eq!(skin.len(), 2);
}

#[test]
fn predicate_works_on_registry_records() {
    let snapshot = build_snapshot(&sample_rows());
    let record = snapshot.registry().get("rosemary oil").unwrap();

    assert!(matches(
        record,
        &TypeFilter::Category(Category::Hair),
        &TimeFilter::Period(Period::Night)
    ));
    assert!(!matches(record, &TypeFilter::All, &TimeFilter::Daily));
}

#[test]
fn day_lookup_reports_activity() {
    let snapshot = build_snapshot(&sample_rows());
    let day = snapshot.day_schedule("2024-01-04").unwrap();

    assert!(has_entries(day, Period::Morning));
    assert!(!has_entries(day, Period::Midday));
    assert_eq!(
        activity_for_date(snapshot.schedule(), "2024-01-04"),
        vec![Period::Morning]
    );
}

#[test]
fn table_search_matches_any_cell() {
    let snapshot = build_snapshot(&sample_rows());
    assert_eq!(snapshot.table().len(), 9);

    let serum = search_rows(snapshot.table(), "serum");
    assert_eq!(serum.len(), 1);
    assert_eq!(serum[0].category, Category::Skin);

    assert_eq!(search_rows(snapshot.table(), "skin").len(), 3);
    assert_eq!(search_rows(snapshot.table(), "21:00").len(), 3);
}
