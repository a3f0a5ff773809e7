//! Stateless room filtering by capacity, equipment and name search.

use crate::types::DbId;

/// Read access to the room attributes the filters look at.
///
/// Implemented by the persistence model so filtering stays independent of
/// how rooms are loaded.
pub trait RoomFacts {
    fn id(&self) -> DbId;
    fn name(&self) -> &str;
    fn capacity(&self) -> i32;
    fn equipment_names(&self) -> impl Iterator<Item = &str>;
}

/// Filters accepted by the room listing. Both filters compose with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomCriteria {
    /// Keep rooms with `capacity >= min_capacity`.
    pub min_capacity: Option<i32>,
    /// Keep rooms with at least one equipment item containing this text,
    /// compared case-insensitively.
    pub equipment: Option<String>,
}

impl RoomCriteria {
    pub fn new(min_capacity: Option<i32>, equipment: Option<String>) -> Self {
        let equipment = equipment
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());
        Self {
            min_capacity,
            equipment,
        }
    }

    pub fn matches<R: RoomFacts>(&self, room: &R) -> bool {
        if let Some(min) = self.min_capacity {
            if room.capacity() < min {
                return false;
            }
        }
        if let Some(needle) = &self.equipment {
            let needle = needle.to_lowercase();
            if !room
                .equipment_names()
                .any(|name| name.to_lowercase().contains(&needle))
            {
                return false;
            }
        }
        true
    }
}

/// Keep the rooms matching `criteria`, preserving order.
pub fn filter_rooms<R: RoomFacts>(rooms: Vec<R>, criteria: &RoomCriteria) -> Vec<R> {
    rooms.into_iter().filter(|r| criteria.matches(r)).collect()
}

/// True when every whitespace-separated term of `search` occurs in the
/// room name, ignoring case. A blank search matches everything.
pub fn name_matches_search(name: &str, search: &str) -> bool {
    let name = name.to_lowercase();
    search
        .split_whitespace()
        .all(|term| name.contains(&term.to_lowercase()))
}
