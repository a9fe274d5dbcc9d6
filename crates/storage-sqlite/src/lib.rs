//! SQLite storage implementation for MarginDesk.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `margindesk-core` and contains:
//! - Database connection pooling and management
//! - Embedded Diesel migrations
//! - Repository implementations for clients, positions, market data, and
//!   margin accounts
//! - Database-specific row types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. The core crate is database-agnostic and works with traits.

pub mod clients;
pub mod db;
pub mod errors;
pub mod margin;
pub mod market_data;
pub mod positions;
pub mod schema;
pub mod seed;

// Re-export database utilities
pub use db::{create_pool, get_connection, run_migrations, DbConnection, DbPool, WriteHandle};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from margindesk-core for convenience
pub use margindesk_core::errors::{DatabaseError, Error, Result};
