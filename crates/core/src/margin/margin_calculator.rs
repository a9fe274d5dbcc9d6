//! Pure margin math over exact decimals. No I/O, no side effects.

use rust_decimal::{Decimal, RoundingStrategy};

use super::margin_model::MarginOutcome;
use crate::constants::MONEY_SCALE;

/// Quantizes a monetary amount to the money scale, rounding half-up away
/// from zero. Applied to every intermediate product and running total so
/// exposure is never underestimated by truncation.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Derives the margin outcome for a portfolio.
///
/// * `net_equity = total_value - loan` (negative equity is a valid signal,
///   not an error)
/// * `required = total_value * mmr_ratio`, quantized
/// * `shortfall = max(required - net_equity, 0)`, quantized
/// * `call_triggered <=> shortfall > 0`
///
/// `mmr_ratio` is validated by the surrounding configuration; an
/// out-of-range ratio here is a programming error.
pub fn compute_margin(total_value: Decimal, loan: Decimal, mmr_ratio: Decimal) -> MarginOutcome {
    debug_assert!(
        mmr_ratio >= Decimal::ZERO && mmr_ratio <= Decimal::ONE,
        "maintenance margin ratio out of range: {mmr_ratio}"
    );

    let net_equity = total_value - loan;
    let required = round_money(total_value * mmr_ratio);
    let shortfall = round_money((required - net_equity).max(Decimal::ZERO));

    MarginOutcome {
        required,
        net_equity,
        shortfall,
        call_triggered: shortfall > Decimal::ZERO,
    }
}
