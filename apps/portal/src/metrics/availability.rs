use std::collections::BTreeMap;

use chrono::NaiveTime;

use crate::metrics::percentage::round_to_tenth;
use crate::models::{AvailabilitySlot, Weekday};

const DAYS_PER_WEEK: f64 = 7.0;

/// Length of a slot in hours. Unparseable or inverted times count as zero.
pub fn slot_hours(slot: &AvailabilitySlot) -> f64 {
    let parse = |t: &str| NaiveTime::parse_from_str(t, "%H:%M").ok();
    match (parse(&slot.start_time), parse(&slot.end_time)) {
        (Some(start), Some(end)) if end > start => {
            (end - start).num_minutes() as f64 / 60.0
        }
        _ => 0.0,
    }
}

/// Total bookable hours across all available slots.
pub fn total_available_hours(slots: &[AvailabilitySlot]) -> f64 {
    slots
        .iter()
        .filter(|s| s.is_available)
        .map(slot_hours)
        .sum()
}

/// Weekly available hours spread over seven days, one decimal.
pub fn average_daily_hours(slots: &[AvailabilitySlot]) -> f64 {
    round_to_tenth(total_available_hours(slots) / DAYS_PER_WEEK)
}

/// Available hours per weekday; days without available slots are omitted.
pub fn hours_by_day(slots: &[AvailabilitySlot]) -> BTreeMap<Weekday, f64> {
    let mut by_day = BTreeMap::new();
    for slot in slots.iter().filter(|s| s.is_available) {
        *by_day.entry(slot.day).or_insert(0.0) += slot_hours(slot);
    }
    by_day
}
