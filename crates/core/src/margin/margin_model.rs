//! Margin domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A client's margin account.
///
/// `margin_requirement` is a derived cache, recomputed and overwritten on
/// every evaluation; no history of past requirement values is retained
/// here. `loan` is the outstanding loan balance and is carried forward
/// unchanged by evaluations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginAccount {
    pub client_id: i64,
    pub margin_requirement: Decimal,
    pub loan: Decimal,
    pub updated_at: DateTime<Utc>,
}

/// Total portfolio market value together with the observation time that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioValuation {
    pub total_value: Decimal,
    /// Greatest price observation timestamp contributing to the total.
    pub as_of: DateTime<Utc>,
}

/// Output of the pure margin calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarginOutcome {
    pub required: Decimal,
    pub net_equity: Decimal,
    pub shortfall: Decimal,
    pub call_triggered: bool,
}

/// The full numeric breakdown of one margin evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginDecision {
    #[serde(rename = "clientId")]
    pub client_id: i64,
    /// Observation time of the latest price contributing to the valuation,
    /// not the system time of the evaluation.
    pub timestamp: DateTime<Utc>,
    pub portfolio_value: Decimal,
    pub loan_amount: Decimal,
    pub net_equity: Decimal,
    pub margin_requirement: Decimal,
    pub margin_shortfall: Decimal,
    pub margin_call_triggered: bool,
}
