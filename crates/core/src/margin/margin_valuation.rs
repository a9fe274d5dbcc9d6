//! Position valuation against latest known prices.

use log::debug;

use super::margin_calculator::round_money;
use super::margin_model::PortfolioValuation;
use crate::errors::Result;
use crate::market_data::PriceRepositoryTrait;
use crate::positions::Position;

/// Values a position list against each symbol's latest stored price.
///
/// Valuation is all-or-nothing: the first symbol without a resolvable price
/// aborts with `Error::PriceNotFound` and no partial total survives.
/// Positions are visited in stored order. Each per-position contribution
/// and the running total are quantized to the money scale.
///
/// The caller is responsible for rejecting an empty position list up front
/// (`Error::NoPositions`); an empty slice here would be a programming error
/// and is answered with the same failure to stay on the safe side.
pub fn value_positions(
    positions: &[Position],
    prices: &dyn PriceRepositoryTrait,
) -> Result<PortfolioValuation> {
    let mut total = rust_decimal::Decimal::ZERO;
    let mut as_of = None;

    for position in positions {
        let point = prices.get_latest_price(&position.symbol)?;

        let contribution = round_money(position.effective_quantity() * point.price);
        total = round_money(total + contribution);
        debug!(
            "Valued {} x {} @ {} = {}",
            position.effective_quantity(),
            position.symbol,
            point.price,
            contribution
        );

        as_of = Some(match as_of {
            Some(prev) if prev >= point.timestamp => prev,
            _ => point.timestamp,
        });
    }

    match as_of {
        Some(as_of) => Ok(PortfolioValuation {
            total_value: total,
            as_of,
        }),
        None => Err(crate::errors::Error::NoPositions(
            positions.first().map(|p| p.client_id).unwrap_or_default(),
        )),
    }
}
