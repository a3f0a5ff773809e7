//! Reservation models.

use roombook_core::error::CoreError;
use roombook_core::interval::{Booking, TimeRange};
use roombook_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use super::room::RoomWithEquipment;

/// A row from the `reservations` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: DbId,
    pub room_id: DbId,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Reservation {
    pub fn range(&self) -> Result<TimeRange, CoreError> {
        TimeRange::new(self.start_date, self.end_date)
    }

    /// The reservation as seen by the conflict checker.
    pub fn booking(&self) -> Result<Booking, CoreError> {
        Ok(Booking {
            id: self.id,
            room_id: self.room_id,
            range: self.range()?,
        })
    }
}

/// A reservation with its room and the room's equipment embedded.
#[derive(Debug, Clone, Serialize)]
pub struct ReservationWithRoom {
    #[serde(flatten)]
    pub reservation: Reservation,
    pub room: RoomWithEquipment,
}

/// Validated input for inserting a reservation.
#[derive(Debug, Clone, Copy)]
pub struct CreateReservation {
    pub room_id: DbId,
    pub range: TimeRange,
}
