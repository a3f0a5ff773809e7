//! Room booking API server library.
//!
//! Exposes config, state, error handling, the booking service and the
//! routes so integration tests and the binary entrypoint can share them.

pub mod booking;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod query;
pub mod router;
pub mod routes;
pub mod state;
