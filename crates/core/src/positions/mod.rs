//! Positions module - domain models, service, and traits.

mod positions_model;
mod positions_service;
mod positions_traits;

// Re-export the public interface
pub use positions_model::{NewPosition, Position};
pub use positions_service::PositionService;
pub use positions_traits::{PositionRepositoryTrait, PositionServiceTrait};
