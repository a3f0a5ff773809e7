//! Explicit calendar filter state and the room rows it selects.

use chrono::NaiveDate;
use serde::Serialize;

use crate::room_filter::{name_matches_search, RoomCriteria, RoomFacts};
use crate::time::day_bounds;
use crate::types::Timestamp;

/// Filters driving the calendar page. Transitions return a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarFilters {
    pub selected_date: NaiveDate,
    pub quantity: i32,
    pub equipment: Option<String>,
    pub search: String,
}

/// One grid row: the room id as row id and a display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRow {
    pub id: String,
    pub label: String,
}

impl CalendarFilters {
    pub fn new(selected_date: NaiveDate) -> Self {
        Self {
            selected_date,
            quantity: 1,
            equipment: None,
            search: String::new(),
        }
    }

    pub fn with_date(self, selected_date: NaiveDate) -> Self {
        Self {
            selected_date,
            ..self
        }
    }

    pub fn with_quantity(self, quantity: i32) -> Self {
        Self { quantity, ..self }
    }

    pub fn with_equipment(self, equipment: Option<String>) -> Self {
        Self { equipment, ..self }
    }

    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self
        }
    }

    /// Capacity and equipment part of the filters, as sent to the room listing.
    pub fn room_criteria(&self) -> RoomCriteria {
        RoomCriteria::new(Some(self.quantity), self.equipment.clone())
    }

    /// Listing window `[startDate, endDate]` for the selected day.
    pub fn day_bounds(&self) -> (Timestamp, Timestamp) {
        day_bounds(self.selected_date)
    }

    pub fn matches<R: RoomFacts>(&self, room: &R) -> bool {
        self.room_criteria().matches(room) && name_matches_search(room.name(), &self.search)
    }

    /// Rows for the rooms passing every filter, in input order.
    pub fn visible_rows<R: RoomFacts>(&self, rooms: &[R]) -> Vec<RoomRow> {
        rooms
            .iter()
            .filter(|r| self.matches(*r))
            .map(|r| RoomRow {
                id: r.id().to_string(),
                label: format!("{} ({}p)", r.name(), r.capacity()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DbId;
    use chrono::{TimeZone, Utc};

    struct Room(DbId, &'static str, i32, &'static [&'static str]);

    impl RoomFacts for Room {
        fn id(&self) -> DbId {
            self.0
        }

        fn name(&self) -> &str {
            self.1
        }

        fn capacity(&self) -> i32 {
            self.2
        }

        fn equipment_names(&self) -> impl Iterator<Item = &str> {
            self.3.iter().copied()
        }
    }

    fn rooms() -> Vec<Room> {
        vec![
            Room(1, "Salle de réunion A", 10, &["TV"]),
            Room(2, "Salle de conférence B", 4, &["Retro Projecteur"]),
            Room(3, "Open space", 20, &[]),
        ]
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn defaults_show_every_room() {
        let filters = CalendarFilters::new(date());
        assert_eq!(filters.quantity, 1);
        assert_eq!(filters.visible_rows(&rooms()).len(), 3);
    }

    #[test]
    fn rows_are_labelled_with_capacity() {
        let rows = CalendarFilters::new(date()).visible_rows(&rooms());
        assert_eq!(
            rows[0],
            RoomRow {
                id: "1".into(),
                label: "Salle de réunion A (10p)".into()
            }
        );
    }

    #[test]
    fn quantity_equipment_and_search_compose() {
        let filters = CalendarFilters::new(date()).with_quantity(5);
        let ids: Vec<_> = filters.visible_rows(&rooms()).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["1", "3"]);

        let filters = filters.with_equipment(Some("tv".into()));
        assert_eq!(filters.visible_rows(&rooms()).len(), 1);

        let filters = CalendarFilters::new(date()).with_search("salle B");
        let rows = filters.visible_rows(&rooms());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "2");
    }

    #[test]
    fn transitions_leave_other_fields_alone() {
        let filters = CalendarFilters::new(date())
            .with_quantity(3)
            .with_search("open");
        let next = filters.clone().with_date(date().succ_opt().unwrap());
        assert_eq!(next.quantity, 3);
        assert_eq!(next.search, "open");
        assert_ne!(next, filters);
    }

    #[test]
    fn day_bounds_follow_selected_date() {
        let (start, end) = CalendarFilters::new(date()).day_bounds();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 3, 16, 0, 0, 0).unwrap());
    }
}
