//! Shared scalar aliases for rooms and reservations.

/// Room, equipment and reservation ids (PostgreSQL `BIGSERIAL`).
pub type DbId = i64;

/// Reservation bounds and audit columns, always resolved to UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
