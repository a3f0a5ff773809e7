pub mod calendar;
pub mod error;
pub mod interval;
pub mod room_filter;
pub mod slot_grid;
pub mod time;
pub mod types;
