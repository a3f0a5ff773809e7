pub mod health;
pub mod reservation;
pub mod room;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the root.
///
/// ```text
/// GET    /rooms                   list (capacity?, equipment?)
///
/// GET    /reservations            list (startDate, endDate)
/// POST   /reservations            create
/// PUT    /reservations/{id}       update
/// DELETE /reservations/{id}       delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/rooms", room::router())
        .nest("/reservations", reservation::router())
}
