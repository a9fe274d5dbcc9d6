use log::{debug, info};
use std::sync::Arc;

use super::market_data_model::{NewPricePoint, PricePoint};
use super::market_data_traits::{
    MarketDataProviderTrait, MarketDataServiceTrait, PriceRepositoryTrait,
};
use crate::errors::{Result, ValidationError};
use crate::margin::round_money;

/// Service for ingesting and reading market prices.
pub struct MarketDataService {
    price_repository: Arc<dyn PriceRepositoryTrait>,
    provider: Arc<dyn MarketDataProviderTrait>,
}

impl MarketDataService {
    /// Creates a new MarketDataService instance
    pub fn new(
        price_repository: Arc<dyn PriceRepositoryTrait>,
        provider: Arc<dyn MarketDataProviderTrait>,
    ) -> Self {
        Self {
            price_repository,
            provider,
        }
    }

    fn validate_symbol(symbol: &str) -> Result<()> {
        if symbol.trim().is_empty() {
            return Err(ValidationError::MissingField("symbol".to_string()).into());
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl MarketDataServiceTrait for MarketDataService {
    async fn ingest_latest(&self, symbol: &str) -> Result<PricePoint> {
        Self::validate_symbol(symbol)?;

        let quote = self.provider.fetch_latest_quote(symbol).await?;
        debug!(
            "Fetched quote for {}: {} at {}",
            symbol, quote.price, quote.timestamp
        );

        // Quantize at the ingestion boundary so every stored price already
        // carries the money scale.
        let stored = self
            .price_repository
            .append_price_point(NewPricePoint {
                symbol: symbol.to_string(),
                price: round_money(quote.price),
                timestamp: quote.timestamp,
            })
            .await?;

        info!(
            "Ingested price for {}: {} as of {}",
            stored.symbol, stored.price, stored.timestamp
        );
        Ok(stored)
    }

    fn history(&self) -> Result<Vec<PricePoint>> {
        self.price_repository.list_price_points()
    }
}
