//! Price point domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An observed market price for a symbol at a point in time.
///
/// Price points are append-only: the ingestion path writes them, nothing
/// mutates them afterwards. Only the most recent observation per symbol is
/// relevant to a margin evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub symbol: String,
    /// Observed price, quantized to the money scale on ingest. Never
    /// negative.
    pub price: Decimal,
    /// Observation time reported by the feed, not the time of ingestion.
    pub timestamp: DateTime<Utc>,
}

/// Payload for appending a price observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPricePoint {
    pub symbol: String,
    pub price: Decimal,
    pub timestamp: DateTime<Utc>,
}
