//! Handlers for the `/reservations` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use roombook_core::interval::BookingPatch;
use roombook_core::time::parse_instant;
use roombook_core::types::DbId;
use roombook_db::models::reservation::{Reservation, ReservationWithRoom};
use serde::Deserialize;
use validator::Validate;

use crate::booking;
use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::query::ReservationRangeParams;
use crate::state::AppState;

/// Request body for `POST /reservations`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[validate(range(min = 1, message = "roomId must be a positive integer"))]
    pub room_id: DbId,
    pub start_date: String,
    pub end_date: String,
}

/// Request body for `PUT /reservations/{id}`. Every field is optional.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationRequest {
    #[validate(range(min = 1, message = "roomId must be a positive integer"))]
    pub room_id: Option<DbId>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl UpdateReservationRequest {
    fn into_patch(self) -> AppResult<BookingPatch> {
        let start = self
            .start_date
            .as_deref()
            .map(|v| parse_instant("startDate", v))
            .transpose()?;
        let end = self
            .end_date
            .as_deref()
            .map(|v| parse_instant("endDate", v))
            .transpose()?;
        Ok(BookingPatch {
            room_id: self.room_id,
            start,
            end,
        })
    }
}

/// GET /reservations?startDate=&endDate=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ReservationRangeParams>,
) -> AppResult<Json<Vec<ReservationWithRoom>>> {
    let (start, end) = params.bounds()?;
    let reservations = booking::find_in_range(&state.pool, start, end).await?;
    Ok(Json(reservations))
}

/// POST /reservations
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateReservationRequest>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    input.validate()?;
    let start = parse_instant("startDate", &input.start_date)?;
    let end = parse_instant("endDate", &input.end_date)?;

    let reservation = booking::create(&state.pool, input.room_id, start, end).await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

/// PUT /reservations/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateReservationRequest>,
) -> AppResult<Json<Reservation>> {
    input.validate()?;
    let patch = input.into_patch()?;
    let reservation = booking::update(&state.pool, id, patch).await?;
    Ok(Json(reservation))
}

/// DELETE /reservations/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Reservation>> {
    let reservation = booking::remove(&state.pool, id).await?;
    Ok(Json(reservation))
}
