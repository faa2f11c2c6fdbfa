//! # storage-adapters
//!
//! Storage-backed implementations of the repository ports in `domains`.
//! Backends are compiled in by feature (`db-postgres`).

pub mod ids;

#[cfg(feature = "db-postgres")]
pub mod postgres;

pub use ids::IdGenerator;
