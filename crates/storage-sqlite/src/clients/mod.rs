mod model;
mod repository;

pub use model::ClientRow;
pub use repository::ClientRepository;
