//! Repository for the `reservations` table.

use roombook_core::interval::TimeRange;
use roombook_core::types::{DbId, Timestamp};
use sqlx::postgres::PgExecutor;
use sqlx::PgPool;

use super::RoomRepo;
use crate::models::reservation::{CreateReservation, Reservation, ReservationWithRoom};

/// Column list for reservations queries.
const COLUMNS: &str = "id, room_id, start_date, end_date, created_at, updated_at";

pub struct ReservationRepo;

impl ReservationRepo {
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Reservation>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM reservations WHERE id = $1");
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Reservations lying entirely inside `[start, end]`, with room and
    /// equipment attached, ordered by start date.
    ///
    /// This is containment, not overlap: a reservation straddling either
    /// bound is not listed.
    pub async fn list_in_range(
        pool: &PgPool,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<ReservationWithRoom>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reservations
             WHERE start_date >= $1 AND end_date <= $2
             ORDER BY start_date ASC, id ASC"
        );
        let reservations = sqlx::query_as::<_, Reservation>(&query)
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await?;

        let mut room_ids: Vec<DbId> = reservations.iter().map(|r| r.room_id).collect();
        room_ids.sort_unstable();
        room_ids.dedup();
        let rooms = RoomRepo::find_by_ids_with_equipment(pool, &room_ids).await?;

        Ok(reservations
            .into_iter()
            .filter_map(|reservation| {
                let room = rooms.iter().find(|r| r.room.id == reservation.room_id)?;
                Some(ReservationWithRoom {
                    reservation,
                    room: room.clone(),
                })
            })
            .collect())
    }

    /// Reservations on `room_id` strictly overlapping `range`, optionally
    /// ignoring `exclude`.
    pub async fn find_overlapping<'e, E>(
        executor: E,
        room_id: DbId,
        range: &TimeRange,
        exclude: Option<DbId>,
    ) -> Result<Vec<Reservation>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM reservations
             WHERE room_id = $1
               AND start_date < $3
               AND end_date > $2
               AND ($4::BIGINT IS NULL OR id <> $4)
             ORDER BY start_date ASC"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(room_id)
            .bind(range.start())
            .bind(range.end())
            .bind(exclude)
            .fetch_all(executor)
            .await
    }

    pub async fn insert<'e, E>(executor: E, input: &CreateReservation) -> Result<Reservation, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO reservations (room_id, start_date, end_date)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(input.room_id)
            .bind(input.range.start())
            .bind(input.range.end())
            .fetch_one(executor)
            .await
    }

    /// Replace room and interval of a reservation. Returns `None` if the
    /// row does not exist.
    pub async fn update_times<'e, E>(
        executor: E,
        id: DbId,
        room_id: DbId,
        range: &TimeRange,
    ) -> Result<Option<Reservation>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "UPDATE reservations SET room_id = $2, start_date = $3, end_date = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .bind(room_id)
            .bind(range.start())
            .bind(range.end())
            .fetch_optional(executor)
            .await
    }

    /// Delete a reservation, returning the removed row.
    pub async fn delete<'e, E>(executor: E, id: DbId) -> Result<Option<Reservation>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("DELETE FROM reservations WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Take a row lock on the room so concurrent bookings for it serialize.
    /// Returns `false` if the room does not exist.
    pub async fn lock_room<'e, E>(executor: E, room_id: DbId) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let locked: Option<(DbId,)> = sqlx::query_as("SELECT id FROM rooms WHERE id = $1 FOR UPDATE")
            .bind(room_id)
            .fetch_optional(executor)
            .await?;
        Ok(locked.is_some())
    }
}
