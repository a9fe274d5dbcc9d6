//! Margin module - valuation, margin math, and the decision engine.

mod margin_calculator;
mod margin_model;
mod margin_service;
mod margin_traits;
mod margin_valuation;

#[cfg(test)]
mod margin_calculator_tests;

#[cfg(test)]
mod margin_service_tests;

// Re-export the public interface
pub use margin_calculator::{compute_margin, round_money};
pub use margin_model::{MarginAccount, MarginDecision, MarginOutcome, PortfolioValuation};
pub use margin_service::MarginService;
pub use margin_traits::{MarginRepositoryTrait, MarginServiceTrait};
pub use margin_valuation::value_positions;
