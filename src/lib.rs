//! # feewise
//!
//! Deterministic brokerage cost comparison for Canadian investment orders.
//!
//! Given an order amount and an investment category, feewise computes an
//! itemized [`CostBreakdown`] for three platform/strategy combinations:
//!
//! | Strategy | Conversion | Commission | ECN fees |
//! |----------|------------|------------|----------|
//! | Wealthsimple | 1.5% on USD assets | none | not modeled |
//! | Questrade (Regular) | 2% on USD assets | $4.95 minimum, ETFs free | per share |
//! | Questrade (Norbert's Gambit) | eliminated | 2 × $9.95 | per share, two legs |
//!
//! and recommends the cheapest. Everything is a pure function of the
//! inputs and an explicit [`FeeSchedule`], so alternate fee tables drop in
//! for testing without any global state.
//!
//! ## Quick start
//!
//! ```
//! use feewise::{compare, FeeModel, InvestmentCategory, Platform};
//!
//! let model = FeeModel::default();
//! let result = compare(&model, 1000.0, InvestmentCategory::UsStock).unwrap();
//!
//! // Wealthsimple's 1.5% conversion beats Questrade's 2% plus commission,
//! // and the gambit's two commissions, at this order size.
//! assert_eq!(result.recommended, Platform::Wealthsimple);
//! assert_eq!(result.breakdowns.len(), 3);
//! ```
//!
//! ## Zero versus not modeled
//!
//! Optional fee components distinguish "costs nothing for this order" from
//! "this strategy does not have that component":
//!
//! ```
//! use feewise::{FeeModel, InvestmentCategory};
//!
//! let model = FeeModel::default();
//!
//! // A CAD order converts nothing, but conversion is still modeled: Some(0.0).
//! let ws = model.wealthsimple(500.0, InvestmentCategory::CadStock).unwrap();
//! assert_eq!(ws.conversion_fee, Some(0.0));
//!
//! // The gambit eliminates conversion structurally: None, not zero.
//! let ng = model.norberts_gambit(500.0, InvestmentCategory::UsStock).unwrap();
//! assert_eq!(ng.conversion_fee, None);
//! ```
//!
//! ## Share estimates
//!
//! ECN fees are approximated from fixed reference share prices in the
//! schedule, never from a live quote; a live price would change
//! recommendations between runs. Live prices only feed the downstream
//! [`shares_after_fees`] display helper.

mod breakdown;
mod category;
mod compare;
mod error;
mod estimate;
mod model;
mod platform;
mod schedule;

// Re-export public API
pub use breakdown::CostBreakdown;
pub use category::InvestmentCategory;
pub use compare::{Comparison, RankedCost, Ranking, candidates, compare, rank, recommend};
pub use error::FeeError;
pub use estimate::shares_after_fees;
pub use model::FeeModel;
pub use platform::Platform;
pub use schedule::FeeSchedule;
