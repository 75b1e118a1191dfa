//! Calculator results
//!
//! Values that may be impossible to compute (division by zero, zero-th roots,
//! non-positive bases) are `Option`s. `None` means "no result" and must not be
//! shown as zero.

use serde::Serialize;

use super::inputs::Granularity;

/// One point of a compound projection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionPoint {
    /// Months or days elapsed, depending on the series
    pub index: u32,
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompoundProjection {
    /// Effective annual rate as a fraction (0.2 = 20%)
    pub annual_rate: f64,
    pub horizon_years: f64,
    pub principal: f64,
    /// Value at the exact (possibly fractional) horizon
    pub final_amount: f64,
    pub total_return: f64,
    pub cagr_pct: Option<f64>,
    /// Sampling of `points`
    pub granularity: Granularity,
    /// One point per month or per day from `0` up to the horizon
    pub points: Vec<ProjectionPoint>,
}

impl CompoundProjection {
    #[must_use]
    pub fn series(&self) -> &[ProjectionPoint] {
        &self.points
    }
}

/// Asset value on both tracks at a year offset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalYear {
    pub year: u32,
    /// Growing at the required return; `None` when that rate is undefined
    pub required_rate_value: Option<f64>,
    /// Growing at the dividend rate
    pub target_rate_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalResult {
    /// Portfolio whose payout covers the future income; `None` for a zero dividend rate
    pub target_asset_value: Option<f64>,
    pub required_annual_return_pct: Option<f64>,
    pub yearly: Vec<GoalYear>,
    pub annual_income: f64,
    pub future_annual_income: f64,
    pub inflation_adjusted: bool,
}

/// A value at a whole-year offset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearValue {
    pub year: u32,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BacktestYear {
    pub year: i16,
    /// Portfolio value at the end of the year
    pub value: f64,
    pub return_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BacktestResult {
    pub yearly: Vec<BacktestYear>,
    pub total_invested: f64,
    pub total_return_pct: Option<f64>,
    pub cagr_pct: Option<f64>,
    /// Largest peak-to-trough decline in percent, never negative
    pub max_drawdown_pct: f64,
    pub end_value: f64,
    /// First year of the range that has return data
    pub first_data_year: Option<i16>,
}

/// Cumulative return after a number of trades in the repeating win/loss pattern
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PatternPoint {
    pub trades: u32,
    pub cumulative_return_pct: f64,
}

/// Remaining balance after an unbroken losing streak
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RuinPoint {
    pub losses: u32,
    pub balance_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpectancyResult {
    /// Per-trade risk after clamping, as a fraction
    pub risk_fraction: f64,
    pub expected_wins: f64,
    pub expected_losses: f64,
    /// Average result per trade in risk units
    pub avg_return_per_trade: f64,
    pub expectancy_pct: f64,
    pub total_return_pct: f64,
    pub ruin_trade_count: u32,
    pub pattern: Vec<PatternPoint>,
    pub ruin_curve: Vec<RuinPoint>,
}

/// Drawdown and the gain needed to undo it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecoveryRow {
    pub mdd_pct: f64,
    pub balance_pct: f64,
    pub recovery_pct: f64,
    /// Recovery gain per point of drawdown
    pub ratio: f64,
}

/// One non-zero category of a budget group
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryShare {
    pub key: &'static str,
    pub label: &'static str,
    pub value: f64,
    pub share_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpendingStatus {
    Healthy,
    Warning,
}

/// Annual spending against what assets and income can support
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sustainability {
    /// Safe-withdrawal share of total assets, per year
    pub asset_allowance: f64,
    pub annual_income: f64,
    pub annual_expenses: f64,
    pub allowed_annual_expenses: f64,
    pub ratio_pct: f64,
    pub status: SpendingStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewResult {
    pub total_assets: f64,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub assets: Vec<CategoryShare>,
    pub income: Vec<CategoryShare>,
    pub expenses: Vec<CategoryShare>,
    /// Only present when there are both assets and expenses
    pub sustainability: Option<Sustainability>,
}
