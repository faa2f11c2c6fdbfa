//! forum/crates/domains/src/lib.rs
//!
//! Entities, their payload validation, and the repository ports of the forum.
//! Nothing in here performs I/O.

pub mod error;
pub mod models;
pub mod traits;

mod payload;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use traits::*;
