//! Projection of stored reservations onto grid slots.

use chrono::Timelike;

use crate::interval::Booking;
use crate::slot_grid::Slot;

/// One slot per UTC hour in `[start.hour, end.hour)`, tagged with the
/// reservation id. Partial hours are truncated to the hour they start in.
/// An end on a later day than the start counts as hour 24.
pub fn slots_for(booking: &Booking) -> Vec<Slot> {
    let row_id = booking.room_id.to_string();
    let (start, end) = (booking.range.start(), booking.range.end());
    let first = start.hour();
    let last = if end.date_naive() > start.date_naive() {
        24
    } else {
        end.hour()
    };
    (first..last)
        .map(|h| Slot::new(row_id.clone(), format!("{h}:00")).with_reservation(Some(booking.id)))
        .collect()
}

/// Grid groups for a reservation list. Reservations that cover no whole
/// hour on the grid day produce no group.
pub fn derive_groups(bookings: &[Booking]) -> Vec<Vec<Slot>> {
    bookings
        .iter()
        .map(slots_for)
        .filter(|g| !g.is_empty())
        .collect()
}
