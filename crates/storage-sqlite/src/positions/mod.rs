mod model;
mod repository;

pub use model::PositionRow;
pub use repository::PositionRepository;
