//! Quantitative engine for personal finance calculators
//!
//! This crate holds the pure computations behind a set of calculators:
//! - Compound growth projections with annual, monthly or daily quoted rates
//! - Goal planning: target portfolio and required return for a monthly income
//! - Historical backtests over a static table of annual index returns
//! - Win rate / payoff expectancy with risk of ruin
//! - Household budget review against a safe withdrawal allowance
//!
//! Every operation is a synchronous function of its inputs. Results that cannot
//! be computed are `None` or empty rather than errors.
//!
//! ```ignore
//! use fincalc_core::backtest;
//! use fincalc_core::model::{BacktestInput, ContributionPolicy};
//!
//! let result = backtest::simulate(&BacktestInput {
//!     asset_id: "sp500".into(),
//!     start_year: 2019,
//!     end_year: 2020,
//!     policy: ContributionPolicy::LumpSum,
//!     initial_amount: 1000.0,
//!     periodic_amount: 0.0,
//! });
//! assert!((result.end_value - 1548.9).abs() < 0.1);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Calculator modules
// ============================================================================

pub mod backtest;
pub mod compound;
pub mod expectancy;
pub mod goal;
pub mod review;

// ============================================================================
// Data and shared helpers
// ============================================================================

pub mod error;
pub mod history;
pub mod metrics;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::{LookupError, ParseError};
pub use history::{AssetOption, AssetSeries, SourceInfo, YearPrice, YearReturn};
