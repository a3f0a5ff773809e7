//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods. Methods
//! that run inside the booking transaction take any Postgres executor, so
//! they accept both `&PgPool` and `&mut *tx`.

pub mod reservation_repo;
pub mod room_repo;

pub use reservation_repo::ReservationRepo;
pub use room_repo::RoomRepo;
