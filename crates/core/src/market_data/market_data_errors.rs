use thiserror::Error;
use yahoo_finance_api::YahooError;

/// Errors from the external market data feed.
///
/// These only surface on the ingestion path; the margin engine never talks
/// to a provider, it reads stored price points.
#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Parsing error: {0}")]
    ParsingError(String),

    #[error("No data found for symbol {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<YahooError> for MarketDataError {
    fn from(error: YahooError) -> Self {
        match error {
            YahooError::FetchFailed(e) => MarketDataError::ProviderError(e),
            YahooError::NoQuotes => MarketDataError::NotFound("no quotes returned".to_string()),
            YahooError::NoResult => MarketDataError::NotFound("no result returned".to_string()),
            _ => MarketDataError::Unknown(error.to_string()),
        }
    }
}
