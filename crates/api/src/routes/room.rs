use axum::routing::get;
use axum::Router;

use crate::handlers::room;
use crate::state::AppState;

/// Routes mounted at `/rooms`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(room::list))
}
