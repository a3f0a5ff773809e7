//! Handlers for the `/rooms` resource.

use axum::extract::State;
use axum::Json;
use roombook_core::room_filter::filter_rooms;
use roombook_db::models::room::RoomWithEquipment;
use roombook_db::repositories::RoomRepo;

use crate::error::AppResult;
use crate::extract::ApiQuery;
use crate::query::RoomListParams;
use crate::state::AppState;

/// GET /rooms
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<RoomListParams>,
) -> AppResult<Json<Vec<RoomWithEquipment>>> {
    let criteria = params.criteria()?;
    let rooms = RoomRepo::list_with_equipment(&state.pool).await?;
    Ok(Json(filter_rooms(rooms, &criteria)))
}
