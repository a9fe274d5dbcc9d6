//! MarginDesk Core - Domain entities, services, and traits.
//!
//! This crate contains the margin evaluation engine and its collaborators.
//! It is database-agnostic and defines repository traits that are
//! implemented by the `storage-sqlite` crate.

pub mod clients;
pub mod constants;
pub mod errors;
pub mod margin;
pub mod market_data;
pub mod positions;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
