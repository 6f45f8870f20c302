//! CLI smoke entry point.
//!
//! # Responsibility
//! - Load one plan file through `regimen_core` and print a deterministic
//!   summary of the derived structures.
//!
//! Usage: `regimen_cli [plan.json] [log-level]`

use regimen_core::{
    core_version, default_log_level, init_logging, RegimenStore, DEFAULT_PLAN_FILE,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let plan_path = args.next().unwrap_or_else(|| DEFAULT_PLAN_FILE.to_string());
    let level = args.next().unwrap_or_else(|| default_log_level().to_string());

    let log_dir = std::env::temp_dir().join("regimen-cli-logs");
    if let Err(err) = init_logging(&level, &log_dir.to_string_lossy()) {
        eprintln!("logging disabled: {err}");
    }

    println!("regimen_core version={}", core_version());

    let store = RegimenStore::new();
    let snapshot = match store.reload_from_path(&plan_path) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            eprintln!("failed to load plan: {err}");
            return ExitCode::FAILURE;
        }
    };

    let report = snapshot.report();
    println!(
        "rows={} skipped={} unknown_period={} conflicts={}",
        report.rows_seen, report.rows_skipped, report.unknown_period_rows, report.category_conflicts
    );
    println!(
        "dates={} items={}",
        snapshot.schedule().len(),
        snapshot.item_list().len()
    );

    for item in snapshot.item_list() {
        let periods: Vec<&str> = item.periods.iter().map(|period| period.as_str()).collect();
        println!(
            "  {} [{}] periods={} occurrences={}",
            item.name,
            item.category.label(),
            periods.join(","),
            snapshot.occurrence_count_of(&item.name)
        );
    }

    ExitCode::SUCCESS
}
