//! Market data repository, provider, and service traits.

use async_trait::async_trait;

use super::market_data_errors::MarketDataError;
use super::market_data_model::{NewPricePoint, PricePoint};
use crate::errors::Result;

/// Storage interface for price observations.
#[async_trait]
pub trait PriceRepositoryTrait: Send + Sync {
    /// Returns the price point with the greatest observation timestamp for
    /// the symbol.
    ///
    /// Identical timestamps resolve to any one of the tied rows; no
    /// insertion-order tie-break is guaranteed. Fails with
    /// `Error::PriceNotFound` when no observation exists for the symbol.
    fn get_latest_price(&self, symbol: &str) -> Result<PricePoint>;

    /// Appends a price observation. Observations are never updated or
    /// deleted.
    async fn append_price_point(&self, new_point: NewPricePoint) -> Result<PricePoint>;

    /// Returns the full stored price history, most recent first.
    fn list_price_points(&self) -> Result<Vec<PricePoint>>;
}

/// External quote feed. Implementations fetch the current price for a
/// symbol from a market data vendor.
#[async_trait]
pub trait MarketDataProviderTrait: Send + Sync {
    /// Fetches the latest available quote for `symbol` from the feed.
    async fn fetch_latest_quote(
        &self,
        symbol: &str,
    ) -> std::result::Result<PricePoint, MarketDataError>;
}

/// Service trait for market data operations.
#[async_trait]
pub trait MarketDataServiceTrait: Send + Sync {
    /// Fetches the current quote from the provider, stores it, and returns
    /// the stored observation.
    async fn ingest_latest(&self, symbol: &str) -> Result<PricePoint>;

    /// Returns the full stored price history.
    fn history(&self) -> Result<Vec<PricePoint>>;
}
