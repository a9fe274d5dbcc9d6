use log::debug;
use std::sync::Arc;

use super::positions_model::Position;
use super::positions_traits::{PositionRepositoryTrait, PositionServiceTrait};
use crate::clients::ClientRepositoryTrait;
use crate::errors::Result;

/// Service for reading client positions.
pub struct PositionService {
    client_repository: Arc<dyn ClientRepositoryTrait>,
    position_repository: Arc<dyn PositionRepositoryTrait>,
}

impl PositionService {
    /// Creates a new PositionService instance
    pub fn new(
        client_repository: Arc<dyn ClientRepositoryTrait>,
        position_repository: Arc<dyn PositionRepositoryTrait>,
    ) -> Self {
        Self {
            client_repository,
            position_repository,
        }
    }
}

#[async_trait::async_trait]
impl PositionServiceTrait for PositionService {
    /// Returns the client's positions after confirming the client exists.
    fn get_client_positions(&self, client_id: i64) -> Result<Vec<Position>> {
        let client = self.client_repository.get_by_id(client_id)?;
        debug!("Listing positions for client {} ({})", client.id, client.name);
        self.position_repository.get_for_client(client_id)
    }
}
