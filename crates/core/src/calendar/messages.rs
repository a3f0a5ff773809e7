//! Confirmation prompts shown before a grid candidate is applied.

use chrono::{Datelike, NaiveDate};

use super::column_hour;
use crate::slot_grid::{Slot, TimeColumn};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Label of the first slot's column and the hour after the last slot's
/// column. `None` for empty slot lists or unknown columns.
fn bounds<'a>(slots: &[Slot], columns: &'a [TimeColumn]) -> Option<(&'a str, String)> {
    let find = |slot: &Slot| columns.iter().find(|c| c.id == slot.column_id);
    let start = find(slots.first()?)?;
    let end = find(slots.last()?)?;
    let end_hour = column_hour(&end.id)?.checked_add(1)?;
    Some((start.label.as_str(), format!("{end_hour}:00")))
}

/// `"Create a reservation on March 15, 2024 from 9:00 to 11:00?"`
pub fn create_message(slots: &[Slot], columns: &[TimeColumn], date: NaiveDate) -> String {
    let Some((start, end)) = bounds(slots, columns) else {
        return String::new();
    };
    let month = MONTH_NAMES[date.month0() as usize];
    format!(
        "Create a reservation on {month} {}, {} from {start} to {end}?",
        date.day(),
        date.year()
    )
}

/// `"Move reservation to 9:00 - 11:00?"`
pub fn move_message(slots: &[Slot], columns: &[TimeColumn]) -> String {
    match bounds(slots, columns) {
        Some((start, end)) => format!("Move reservation to {start} - {end}?"),
        None => String::new(),
    }
}
