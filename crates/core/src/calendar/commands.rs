//! Translation of confirmed grid events into backend commands.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use super::column_hour;
use crate::slot_grid::{GridEvent, Slot};
use crate::types::{DbId, Timestamp};

/// A reservation mutation to send to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum CalendarCommand {
    #[serde(rename_all = "camelCase")]
    Create {
        room_id: DbId,
        start_date: Timestamp,
        end_date: Timestamp,
    },
    #[serde(rename_all = "camelCase")]
    Update {
        reservation_id: DbId,
        room_id: DbId,
        start_date: Timestamp,
        end_date: Timestamp,
    },
    #[serde(rename_all = "camelCase")]
    Delete { reservation_id: DbId },
}

/// Command for `event` on `date`, or `None` when the slots do not resolve
/// to a room, an hour span or a reservation id.
pub fn command_for(event: &GridEvent, date: NaiveDate) -> Option<CalendarCommand> {
    match event {
        GridEvent::Create { slots } => {
            let (room_id, start_date, end_date) = span(slots, date)?;
            Some(CalendarCommand::Create {
                room_id,
                start_date,
                end_date,
            })
        }
        GridEvent::Move { from, to } => {
            let reservation_id = reservation_id(from).or_else(|| reservation_id(to))?;
            let (room_id, start_date, end_date) = span(to, date)?;
            Some(CalendarCommand::Update {
                reservation_id,
                room_id,
                start_date,
                end_date,
            })
        }
        GridEvent::Delete { slots } => Some(CalendarCommand::Delete {
            reservation_id: reservation_id(slots)?,
        }),
    }
}

fn reservation_id(slots: &[Slot]) -> Option<DbId> {
    slots.iter().find_map(|s| s.reservation_id)
}

/// Room and `[first hour, last hour + 1)` covered by `slots` on `date`.
fn span(slots: &[Slot], date: NaiveDate) -> Option<(DbId, Timestamp, Timestamp)> {
    let first = slots.first()?;
    let last = slots.last()?;
    let room_id = first.row_id.parse().ok()?;
    let start = at_hour(date, column_hour(&first.column_id)?)?;
    let end = at_hour(date, column_hour(&last.column_id)?.checked_add(1)?)?;
    Some((room_id, start, end))
}

fn at_hour(date: NaiveDate, hour: u32) -> Option<Timestamp> {
    if hour == 24 {
        let next = date.succ_opt()?;
        return Some(next.and_time(NaiveTime::MIN).and_utc());
    }
    Some(date.and_time(NaiveTime::from_hms_opt(hour, 0, 0)?).and_utc())
}
