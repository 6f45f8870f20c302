//! Day-level activity lookups for the calendar view.

use crate::index::schedule::{DaySchedule, ScheduleIndex};
use crate::model::period::Period;

/// True iff any category bucket of `period` on `day` is non-empty.
///
/// Callers check date presence first; an absent date has no activity.
pub fn has_entries(day: &DaySchedule, period: Period) -> bool {
    day.has_entries(period)
}

/// Periods to mark on the calendar cell for `date`, in period order.
pub fn activity_for_date(schedule: &ScheduleIndex, date: &str) -> Vec<Period> {
    schedule
        .get(date)
        .map(DaySchedule::active_periods)
        .unwrap_or_default()
}
