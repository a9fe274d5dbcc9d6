//! Client repository trait.
//!
//! Defines the contract for client lookups without any database-specific
//! types, allowing for different storage implementations.

use async_trait::async_trait;

use super::clients_model::{Client, NewClient};
use crate::errors::Result;

/// Trait defining the contract for Client repository operations.
#[async_trait]
pub trait ClientRepositoryTrait: Send + Sync {
    /// Retrieves a client by id.
    ///
    /// Fails with `Error::ClientNotFound` when no such client exists.
    fn get_by_id(&self, client_id: i64) -> Result<Client>;

    /// Lists all clients.
    fn list(&self) -> Result<Vec<Client>>;

    /// Creates a new client. Used by onboarding/seeding, not by the margin
    /// engine.
    async fn create(&self, new_client: NewClient) -> Result<Client>;
}
