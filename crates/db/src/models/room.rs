//! Room and equipment models.

use roombook_core::room_filter::RoomFacts;
use roombook_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `rooms` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub capacity: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `equipment` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Equipment {
    pub id: DbId,
    #[serde(skip_serializing)]
    pub room_id: DbId,
    pub name: String,
}

/// A room with its equipment list, as served by the listing endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct RoomWithEquipment {
    #[serde(flatten)]
    pub room: Room,
    pub equipment: Vec<Equipment>,
}

impl RoomFacts for RoomWithEquipment {
    fn id(&self) -> DbId {
        self.room.id
    }

    fn name(&self) -> &str {
        &self.room.name
    }

    fn capacity(&self) -> i32 {
        self.room.capacity
    }

    fn equipment_names(&self) -> impl Iterator<Item = &str> {
        self.equipment.iter().map(|e| e.name.as_str())
    }
}

/// Pair each room with the equipment rows that reference it.
pub fn attach_equipment(rooms: Vec<Room>, equipment: Vec<Equipment>) -> Vec<RoomWithEquipment> {
    rooms
        .into_iter()
        .map(|room| {
            let items = equipment
                .iter()
                .filter(|e| e.room_id == room.id)
                .cloned()
                .collect();
            RoomWithEquipment {
                room,
                equipment: items,
            }
        })
        .collect()
}
