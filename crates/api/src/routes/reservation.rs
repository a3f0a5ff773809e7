//! Route definitions for the `/reservations` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::reservation;
use crate::state::AppState;

/// Routes mounted at `/reservations`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reservation::list).post(reservation::create))
        .route("/{id}", put(reservation::update).delete(reservation::delete))
}
