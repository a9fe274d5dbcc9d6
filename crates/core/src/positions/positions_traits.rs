//! Position repository and service traits.

use async_trait::async_trait;

use super::positions_model::{NewPosition, Position};
use crate::errors::Result;

/// Trait defining the contract for Position repository operations.
#[async_trait]
pub trait PositionRepositoryTrait: Send + Sync {
    /// Lists a client's positions in stored (insertion) order.
    ///
    /// An unknown client yields an empty list; distinguishing a missing
    /// client from a client with no holdings is the caller's job via the
    /// client repository.
    fn get_for_client(&self, client_id: i64) -> Result<Vec<Position>>;

    /// Creates a new position. Used by onboarding/seeding, not by the
    /// margin engine.
    async fn create(&self, new_position: NewPosition) -> Result<Position>;
}

/// Trait defining the contract for Position service operations.
#[async_trait]
pub trait PositionServiceTrait: Send + Sync {
    /// Returns a client's positions, failing with `ClientNotFound` when the
    /// client does not exist.
    fn get_client_positions(&self, client_id: i64) -> Result<Vec<Position>>;
}
