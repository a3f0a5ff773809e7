//! Reservation intervals and the per-room conflict rules.
//!
//! A reservation occupies the half-open interval `[start, end)`. Two
//! reservations on the same room conflict when their intervals intersect
//! under strict inequality on both bounds, so back-to-back bookings
//! (`a.end == b.start`) never conflict.
//!
//! Listings select with inclusive containment ([`TimeRange::is_within`]),
//! which is a different predicate from [`TimeRange::overlaps`].

use serde::Serialize;

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Message returned when a new reservation overlaps an existing one.
pub const MSG_ROOM_ALREADY_BOOKED: &str = "This room is already booked for this time slot.";

/// Message returned when an update would overlap another reservation.
pub const MSG_UPDATE_CONFLICT: &str = "A reservation conflict exists for this time slot";

// ---------------------------------------------------------------------------
// TimeRange
// ---------------------------------------------------------------------------

/// A validated half-open interval `[start, end)` with `end > start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    start: Timestamp,
    end: Timestamp,
}

impl TimeRange {
    /// Build a range, rejecting empty and inverted intervals.
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self, CoreError> {
        if end <= start {
            return Err(CoreError::InvalidRange(format!(
                "end ({}) must be after start ({})",
                end.to_rfc3339(),
                start.to_rfc3339()
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Strict open-interval overlap. Touching endpoints do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Inclusive containment in `[lower, upper]`, as used by listings.
    pub fn is_within(&self, lower: Timestamp, upper: Timestamp) -> bool {
        self.start >= lower && self.end <= upper
    }
}

// ---------------------------------------------------------------------------
// Bookings
// ---------------------------------------------------------------------------

/// A stored reservation as seen by the conflict checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Booking {
    pub id: DbId,
    pub room_id: DbId,
    pub range: TimeRange,
}

/// Partial replacement of a reservation. `None` keeps the current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingPatch {
    pub room_id: Option<DbId>,
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
}

/// Find the first booking on `room_id` overlapping `range`, skipping `exclude`.
pub fn find_conflict<'a>(
    room_id: DbId,
    range: &TimeRange,
    existing: &'a [Booking],
    exclude: Option<DbId>,
) -> Option<&'a Booking> {
    existing.iter().find(|b| {
        b.room_id == room_id && Some(b.id) != exclude && b.range.overlaps(range)
    })
}

/// Validate a new reservation against the bookings already on the room.
///
/// Fails with [`CoreError::InvalidRange`] when `end <= start`, whatever the
/// conflict status, and with [`CoreError::Conflict`] when any booking on
/// `room_id` overlaps. Returns the validated range on success.
pub fn check_create(
    room_id: DbId,
    start: Timestamp,
    end: Timestamp,
    existing: &[Booking],
) -> Result<TimeRange, CoreError> {
    let range = TimeRange::new(start, end)?;
    match find_conflict(room_id, &range, existing, None) {
        Some(_) => Err(CoreError::Conflict(MSG_ROOM_ALREADY_BOOKED.to_string())),
        None => Ok(range),
    }
}

/// Resolve a partial update against `current` and validate the result.
///
/// Omitted fields default to the current values before validation. The
/// booking being updated is excluded from the conflict set, so an update
/// that leaves the interval unchanged always succeeds.
pub fn check_update(
    current: &Booking,
    patch: &BookingPatch,
    existing: &[Booking],
) -> Result<Booking, CoreError> {
    let room_id = patch.room_id.unwrap_or(current.room_id);
    let start = patch.start.unwrap_or(current.range.start);
    let end = patch.end.unwrap_or(current.range.end);

    let range = TimeRange::new(start, end)?;
    if find_conflict(room_id, &range, existing, Some(current.id)).is_some() {
        return Err(CoreError::Conflict(MSG_UPDATE_CONFLICT.to_string()));
    }

    Ok(Booking {
        id: current.id,
        room_id,
        range,
    })
}
