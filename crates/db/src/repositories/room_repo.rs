//! Repository for the `rooms` and `equipment` tables.

use roombook_core::types::DbId;
use sqlx::postgres::PgExecutor;
use sqlx::PgPool;

use crate::models::room::{attach_equipment, Equipment, Room, RoomWithEquipment};

/// Column list for rooms queries.
const COLUMNS: &str = "id, name, description, capacity, created_at, updated_at";

/// Column list for equipment queries.
const EQUIPMENT_COLUMNS: &str = "id, room_id, name";

pub struct RoomRepo;

impl RoomRepo {
    /// List every room with its equipment, ordered by id.
    pub async fn list_with_equipment(pool: &PgPool) -> Result<Vec<RoomWithEquipment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms ORDER BY id ASC");
        let rooms = sqlx::query_as::<_, Room>(&query).fetch_all(pool).await?;
        let ids: Vec<DbId> = rooms.iter().map(|r| r.id).collect();
        let equipment = Self::equipment_for_rooms(pool, &ids).await?;
        Ok(attach_equipment(rooms, equipment))
    }

    /// Load the given rooms with their equipment, ordered by id.
    pub async fn find_by_ids_with_equipment(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<RoomWithEquipment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE id = ANY($1) ORDER BY id ASC");
        let rooms = sqlx::query_as::<_, Room>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await?;
        let equipment = Self::equipment_for_rooms(pool, ids).await?;
        Ok(attach_equipment(rooms, equipment))
    }

    /// Equipment rows belonging to any of `room_ids`, ordered by id.
    pub async fn equipment_for_rooms<'e, E>(
        executor: E,
        room_ids: &[DbId],
    ) -> Result<Vec<Equipment>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {EQUIPMENT_COLUMNS} FROM equipment WHERE room_id = ANY($1) ORDER BY id ASC"
        );
        sqlx::query_as::<_, Equipment>(&query)
            .bind(room_ids)
            .fetch_all(executor)
            .await
    }
}
