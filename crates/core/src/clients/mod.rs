//! Clients module - domain models and traits.

mod clients_model;
mod clients_traits;

// Re-export the public interface
pub use clients_model::{Client, NewClient};
pub use clients_traits::ClientRepositoryTrait;
