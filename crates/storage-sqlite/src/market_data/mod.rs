mod model;
mod repository;

pub use model::PricePointRow;
pub use repository::PriceRepository;
