//! Reservation booking service.
//!
//! Composes the repository layer with the core conflict checker. Create and
//! update run in a single transaction that first locks the target room row,
//! so two requests for the same room cannot both pass the overlap check.
//! The `ex_reservations_room_overlap` exclusion constraint backs this up.

use roombook_core::error::CoreError;
use roombook_core::interval::{
    check_create, check_update, Booking, BookingPatch, TimeRange, MSG_ROOM_ALREADY_BOOKED,
    MSG_UPDATE_CONFLICT,
};
use roombook_core::types::{DbId, Timestamp};
use roombook_db::models::reservation::{CreateReservation, Reservation, ReservationWithRoom};
use roombook_db::repositories::ReservationRepo;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

fn room_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Room", id })
}

fn reservation_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Reservation",
        id,
    })
}

/// Exclusion violations (`23P01`) become a booking conflict with `message`.
fn overlap_as_conflict(err: sqlx::Error, message: &str) -> AppError {
    let is_overlap = err
        .as_database_error()
        .and_then(|db_err| db_err.code())
        .is_some_and(|code| code == "23P01");
    if is_overlap {
        AppError::Core(CoreError::Conflict(message.to_string()))
    } else {
        AppError::Database(err)
    }
}

/// Stored rows always satisfy `end > start`; a row that does not is corrupt.
fn to_bookings(rows: &[Reservation]) -> Result<Vec<Booking>, CoreError> {
    rows.iter()
        .map(|r| {
            r.booking()
                .map_err(|e| CoreError::Internal(format!("reservation {} is corrupt: {e}", r.id)))
        })
        .collect()
}

/// Book `room_id` for `[start, end)`.
pub async fn create(
    pool: &PgPool,
    room_id: DbId,
    start: Timestamp,
    end: Timestamp,
) -> AppResult<Reservation> {
    let range = TimeRange::new(start, end).inspect_err(|e| {
        tracing::debug!(room_id, error = %e, "Rejected reservation with invalid range");
    })?;

    let mut tx = pool.begin().await?;

    if !ReservationRepo::lock_room(&mut *tx, room_id).await? {
        return Err(room_not_found(room_id));
    }

    let overlapping = ReservationRepo::find_overlapping(&mut *tx, room_id, &range, None).await?;
    let existing = to_bookings(&overlapping)?;
    let range = check_create(room_id, range.start(), range.end(), &existing).inspect_err(|_| {
        tracing::warn!(room_id, start = %start, end = %end, "Reservation conflicts with an existing booking");
    })?;

    let reservation = ReservationRepo::insert(&mut *tx, &CreateReservation { room_id, range })
        .await
        .map_err(|e| overlap_as_conflict(e, MSG_ROOM_ALREADY_BOOKED))?;
    tx.commit().await?;

    tracing::info!(
        reservation_id = reservation.id,
        room_id,
        start = %reservation.start_date,
        end = %reservation.end_date,
        "Reservation created"
    );
    Ok(reservation)
}

/// Apply a partial update. Omitted fields keep their current values and the
/// reservation never conflicts with itself.
pub async fn update(pool: &PgPool, id: DbId, patch: BookingPatch) -> AppResult<Reservation> {
    let mut tx = pool.begin().await?;

    let current = ReservationRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| reservation_not_found(id))?;
    let current = current.booking().map_err(|e| CoreError::Internal(e.to_string()))?;

    let room_id = patch.room_id.unwrap_or(current.room_id);
    let range = TimeRange::new(
        patch.start.unwrap_or(current.range.start()),
        patch.end.unwrap_or(current.range.end()),
    )
    .inspect_err(|e| {
        tracing::debug!(reservation_id = id, error = %e, "Rejected update with invalid range");
    })?;

    if !ReservationRepo::lock_room(&mut *tx, room_id).await? {
        return Err(room_not_found(room_id));
    }

    let overlapping = ReservationRepo::find_overlapping(&mut *tx, room_id, &range, Some(id)).await?;
    let existing = to_bookings(&overlapping)?;
    let updated = check_update(&current, &patch, &existing).inspect_err(|_| {
        tracing::warn!(reservation_id = id, room_id, "Update conflicts with an existing booking");
    })?;

    let reservation = ReservationRepo::update_times(&mut *tx, id, updated.room_id, &updated.range)
        .await
        .map_err(|e| overlap_as_conflict(e, MSG_UPDATE_CONFLICT))?
        .ok_or_else(|| reservation_not_found(id))?;
    tx.commit().await?;

    tracing::info!(
        reservation_id = id,
        room_id = reservation.room_id,
        start = %reservation.start_date,
        end = %reservation.end_date,
        "Reservation updated"
    );
    Ok(reservation)
}

/// Delete a reservation, returning the removed row.
pub async fn remove(pool: &PgPool, id: DbId) -> AppResult<Reservation> {
    let reservation = ReservationRepo::delete(pool, id)
        .await?
        .ok_or_else(|| reservation_not_found(id))?;
    tracing::info!(reservation_id = id, room_id = reservation.room_id, "Reservation deleted");
    Ok(reservation)
}

/// Reservations lying entirely within `[start, end]`.
pub async fn find_in_range(
    pool: &PgPool,
    start: Timestamp,
    end: Timestamp,
) -> AppResult<Vec<ReservationWithRoom>> {
    let reservations = ReservationRepo::list_in_range(pool, start, end).await?;
    tracing::debug!(count = reservations.len(), start = %start, end = %end, "Listed reservations");
    Ok(reservations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    fn range(start: u32, end: u32) -> TimeRange {
        TimeRange::new(
            Utc.with_ymd_and_hms(2024, 3, 15, start, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 15, end, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[sqlx::test(migrations = "../db/migrations")]
    async fn exclusion_violation_on_update_reports_update_conflict(pool: PgPool) {
        let room_id: DbId = sqlx::query_scalar("SELECT id FROM rooms ORDER BY id LIMIT 1")
            .fetch_one(&pool)
            .await
            .unwrap();
        ReservationRepo::insert(&pool, &CreateReservation { room_id, range: range(9, 11) })
            .await
            .unwrap();
        let other = ReservationRepo::insert(&pool, &CreateReservation { room_id, range: range(13, 14) })
            .await
            .unwrap();

        // Bypass the service check so only the constraint can reject the write.
        let err = ReservationRepo::update_times(&pool, other.id, room_id, &range(10, 12))
            .await
            .unwrap_err();

        assert_matches!(
            overlap_as_conflict(err, MSG_UPDATE_CONFLICT),
            AppError::Core(CoreError::Conflict(msg)) if msg == MSG_UPDATE_CONFLICT
        );
    }

    #[sqlx::test(migrations = "../db/migrations")]
    async fn other_database_errors_pass_through(pool: PgPool) {
        let err = ReservationRepo::insert(&pool, &CreateReservation { room_id: 999_999, range: range(9, 10) })
            .await
            .unwrap_err();

        assert_matches!(overlap_as_conflict(err, MSG_ROOM_ALREADY_BOOKED), AppError::Database(_));
    }
}
