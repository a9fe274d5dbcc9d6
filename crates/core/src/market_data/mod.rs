//! Market data module - price points, ingestion, and the provider seam.

mod market_data_errors;
mod market_data_model;
mod market_data_service;
mod market_data_traits;
pub mod providers;

// Re-export the public interface
pub use market_data_errors::MarketDataError;
pub use market_data_model::{NewPricePoint, PricePoint};
pub use market_data_service::MarketDataService;
pub use market_data_traits::{
    MarketDataProviderTrait, MarketDataServiceTrait, PriceRepositoryTrait,
};
