//! Margin repository and service traits.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::margin_model::{MarginAccount, MarginDecision};
use crate::errors::Result;

/// Storage interface for margin accounts.
#[async_trait]
pub trait MarginRepositoryTrait: Send + Sync {
    /// Retrieves the margin account for a client.
    ///
    /// Fails with `Error::MarginAccountNotFound` when the client has no
    /// margin account. Accounts are never created implicitly.
    fn get_account(&self, client_id: i64) -> Result<MarginAccount>;

    /// Upserts the margin record for a client, keyed by client id.
    ///
    /// Idempotent: re-running with identical inputs yields an identical
    /// stored record (modulo `updated_at`).
    async fn upsert(
        &self,
        client_id: i64,
        margin_requirement: Decimal,
        loan: Decimal,
    ) -> Result<MarginAccount>;
}

/// The margin decision engine.
#[async_trait]
pub trait MarginServiceTrait: Send + Sync {
    /// Evaluates margin sufficiency for a client and persists the updated
    /// margin record.
    ///
    /// Fails with `ClientNotFound`, `NoPositions`, `MarginAccountNotFound`,
    /// or `PriceNotFound` when the underlying data is missing; nothing is
    /// persisted on any failure.
    async fn evaluate_margin(&self, client_id: i64) -> Result<MarginDecision>;
}
