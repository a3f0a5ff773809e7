//! Row models and input DTOs.

pub mod reservation;
pub mod room;
