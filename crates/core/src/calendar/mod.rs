//! Client-side calendar view model.
//!
//! Everything here is pure: filters are explicit values, reservation lists
//! are projected onto grid slots, and confirmed [`GridEvent`]s are turned
//! into backend commands. Network access stays with the caller.
//!
//! [`GridEvent`]: crate::slot_grid::GridEvent

pub mod commands;
pub mod filters;
pub mod messages;
pub mod projection;

use crate::slot_grid::TimeColumn;

pub use commands::{command_for, CalendarCommand};
pub use filters::{CalendarFilters, RoomRow};
pub use messages::{create_message, move_message};
pub use projection::{derive_groups, slots_for};

/// First hour shown in the day grid.
pub const FIRST_HOUR: u32 = 8;

/// Last hour shown in the day grid.
pub const LAST_HOUR: u32 = 19;

/// Hourly columns `8:00` through `19:00`.
pub fn default_columns() -> Vec<TimeColumn> {
    TimeColumn::hourly(FIRST_HOUR, LAST_HOUR)
}

/// Hour encoded in a column id such as `"14:00"`.
pub(crate) fn column_hour(column_id: &str) -> Option<u32> {
    column_id.split(':').next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_columns_cover_business_hours() {
        let columns = default_columns();
        assert_eq!(columns.len(), 12);
        assert_eq!(columns[0].id, "8:00");
        assert_eq!(columns[11].label, "19:00");
    }

    #[test]
    fn column_hour_parses_leading_hour() {
        assert_eq!(column_hour("9:00"), Some(9));
        assert_eq!(column_hour("17:00"), Some(17));
        assert_eq!(column_hour("noon"), None);
    }
}
