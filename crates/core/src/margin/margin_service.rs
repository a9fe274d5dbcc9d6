use dashmap::DashMap;
use log::{error, info};
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::margin_calculator::compute_margin;
use super::margin_model::MarginDecision;
use super::margin_traits::{MarginRepositoryTrait, MarginServiceTrait};
use super::margin_valuation::value_positions;
use crate::clients::ClientRepositoryTrait;
use crate::errors::{Error, Result};
use crate::market_data::PriceRepositoryTrait;
use crate::positions::PositionRepositoryTrait;

/// The margin decision engine.
///
/// Orchestrates one evaluation: resolve client, positions, and margin
/// account, value the portfolio against latest prices, derive the margin
/// outcome, persist the updated margin record, and emit the decision.
/// Persistence is the single commit point - it only runs once every read
/// and computation has succeeded.
pub struct MarginService {
    client_repository: Arc<dyn ClientRepositoryTrait>,
    position_repository: Arc<dyn PositionRepositoryTrait>,
    price_repository: Arc<dyn PriceRepositoryTrait>,
    margin_repository: Arc<dyn MarginRepositoryTrait>,
    mmr_ratio: Decimal,
    // Concurrent evaluations of the same client would race on the upsert;
    // a per-client lock serializes them. Different clients never contend.
    evaluation_locks: DashMap<i64, Arc<Mutex<()>>>,
}

impl MarginService {
    /// Creates a new MarginService instance. `mmr_ratio` is the configured
    /// maintenance margin ratio, already validated to lie in (0, 1].
    pub fn new(
        client_repository: Arc<dyn ClientRepositoryTrait>,
        position_repository: Arc<dyn PositionRepositoryTrait>,
        price_repository: Arc<dyn PriceRepositoryTrait>,
        margin_repository: Arc<dyn MarginRepositoryTrait>,
        mmr_ratio: Decimal,
    ) -> Self {
        Self {
            client_repository,
            position_repository,
            price_repository,
            margin_repository,
            mmr_ratio,
            evaluation_locks: DashMap::new(),
        }
    }

    fn lock_for_client(&self, client_id: i64) -> Arc<Mutex<()>> {
        self.evaluation_locks
            .entry(client_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    async fn evaluate_inner(&self, client_id: i64) -> Result<MarginDecision> {
        let client = self.client_repository.get_by_id(client_id)?;

        let positions = self.position_repository.get_for_client(client.id)?;
        if positions.is_empty() {
            return Err(Error::NoPositions(client.id));
        }

        // The account must pre-exist; evaluations update margin records,
        // they never materialize one from nothing.
        let account = self.margin_repository.get_account(client.id)?;

        let valuation = value_positions(&positions, self.price_repository.as_ref())?;
        let outcome = compute_margin(valuation.total_value, account.loan, self.mmr_ratio);

        // Single commit point. The loan is carried forward unchanged; only
        // the requirement is recomputed.
        self.margin_repository
            .upsert(client.id, outcome.required, account.loan)
            .await?;

        Ok(MarginDecision {
            client_id: client.id,
            timestamp: valuation.as_of,
            portfolio_value: valuation.total_value,
            loan_amount: account.loan,
            net_equity: outcome.net_equity,
            margin_requirement: outcome.required,
            margin_shortfall: outcome.shortfall,
            margin_call_triggered: outcome.call_triggered,
        })
    }
}

#[async_trait::async_trait]
impl MarginServiceTrait for MarginService {
    async fn evaluate_margin(&self, client_id: i64) -> Result<MarginDecision> {
        let lock = self.lock_for_client(client_id);
        let _guard = lock.lock().await;

        info!("Evaluating margin for client {}", client_id);
        match self.evaluate_inner(client_id).await {
            Ok(decision) => {
                info!(
                    "Margin evaluation for client {}: value={} equity={} required={} shortfall={} call={}",
                    client_id,
                    decision.portfolio_value,
                    decision.net_equity,
                    decision.margin_requirement,
                    decision.margin_shortfall,
                    decision.margin_call_triggered
                );
                Ok(decision)
            }
            Err(err) => {
                error!("Margin evaluation for client {} failed: {}", client_id, err);
                Err(err)
            }
        }
    }
}
