use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use log::debug;
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use yahoo_finance_api as yahoo;

use crate::market_data::market_data_errors::MarketDataError;
use crate::market_data::market_data_model::PricePoint;
use crate::market_data::market_data_traits::MarketDataProviderTrait;

/// Yahoo Finance backed quote feed.
pub struct YahooProvider {
    provider: yahoo::YahooConnector,
}

impl YahooProvider {
    pub fn new() -> Result<Self, MarketDataError> {
        let provider = yahoo::YahooConnector::new()?;
        Ok(YahooProvider { provider })
    }

    fn to_price_point(
        symbol: &str,
        quote: yahoo::Quote,
    ) -> Result<PricePoint, MarketDataError> {
        let timestamp = Utc
            .timestamp_opt(quote.timestamp as i64, 0)
            .single()
            .ok_or_else(|| {
                MarketDataError::InvalidData(format!("Invalid timestamp: {}", quote.timestamp))
            })?;

        let price = Decimal::from_f64(quote.close).ok_or_else(|| {
            MarketDataError::InvalidData(format!("Invalid close price: {}", quote.close))
        })?;

        Ok(PricePoint {
            symbol: symbol.to_string(),
            price,
            timestamp,
        })
    }
}

#[async_trait]
impl MarketDataProviderTrait for YahooProvider {
    /// Fetches the most recent intraday quote for `symbol`.
    async fn fetch_latest_quote(
        &self,
        symbol: &str,
    ) -> Result<PricePoint, MarketDataError> {
        debug!("Fetching latest quote for {} from Yahoo", symbol);
        let response = self.provider.get_latest_quotes(symbol, "1m").await?;
        let quote = response.last_quote()?;
        Self::to_price_point(symbol, quote)
    }
}
