//! Position domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A securities position held by a client.
///
/// `quantity` is nullable in storage; valuation treats an unset quantity as
/// zero shares, so a null can never produce a negative portfolio
/// contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: i64,
    pub client_id: i64,
    pub symbol: String,
    pub quantity: Option<i64>,
    /// Purchase price per share.
    pub cost_basis: Decimal,
}

impl Position {
    /// Shares held for valuation purposes. Unset quantity counts as zero.
    pub fn effective_quantity(&self) -> Decimal {
        Decimal::from(self.quantity.unwrap_or(0))
    }
}

/// Payload for creating a position (onboarding/seeding).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPosition {
    pub client_id: i64,
    pub symbol: String,
    pub quantity: Option<i64>,
    pub cost_basis: Decimal,
}
