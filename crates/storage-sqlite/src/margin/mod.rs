mod model;
mod repository;

pub use model::MarginAccountRow;
pub use repository::MarginRepository;
