//! Calculator inputs
//!
//! Each calculator takes one plain input struct. `Default` values are the
//! starting parameters a user sees before editing anything.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::history;

/// Compounding basis of a quoted rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateBasis {
    #[default]
    Annual,
    Monthly,
    Daily,
}

impl RateBasis {
    /// Compounding periods in one year
    #[must_use]
    pub fn periods_per_year(self) -> i32 {
        match self {
            RateBasis::Annual => 1,
            RateBasis::Monthly => 12,
            RateBasis::Daily => 365,
        }
    }
}

impl FromStr for RateBasis {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "annual" | "yearly" | "year" => Ok(RateBasis::Annual),
            "monthly" | "month" => Ok(RateBasis::Monthly),
            "daily" | "day" => Ok(RateBasis::Daily),
            _ => Err(ParseError::UnknownRateBasis(s.to_string())),
        }
    }
}

/// Step size of a projected value series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    #[default]
    Monthly,
    Daily,
}

impl FromStr for Granularity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" | "month" => Ok(Granularity::Monthly),
            "daily" | "day" => Ok(Granularity::Daily),
            _ => Err(ParseError::UnknownGranularity(s.to_string())),
        }
    }
}

/// How money enters a backtest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionPolicy {
    /// Invest the initial amount once, at the start of the first year
    #[default]
    LumpSum,
    /// Initial amount in the first year, then a fixed amount at the start of each later year
    Periodic,
}

impl FromStr for ContributionPolicy {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "lump-sum" | "lump" | "lumpsum" => Ok(ContributionPolicy::LumpSum),
            "periodic" | "dca" => Ok(ContributionPolicy::Periodic),
            _ => Err(ParseError::UnknownContributionPolicy(s.to_string())),
        }
    }
}

/// Investment horizon split the way it is entered: years + months + days.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Horizon {
    pub years: f64,
    pub months: f64,
    pub days: f64,
}

impl Horizon {
    #[must_use]
    pub fn years(years: f64) -> Self {
        Self {
            years,
            ..Self::default()
        }
    }

    /// Fractional length in years
    #[must_use]
    pub fn in_years(&self) -> f64 {
        self.years + self.months / 12.0 + self.days / 365.0
    }

    /// Whole days covered, rounding partial days to the nearest day
    #[must_use]
    pub fn total_days(&self) -> u32 {
        let days = (self.years * 365.0 + self.months * (365.0 / 12.0) + self.days).round();
        if days.is_finite() && days > 0.0 {
            days as u32
        } else {
            0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompoundInput {
    /// Rate in percent, quoted on `basis`
    pub rate_pct: f64,
    pub basis: RateBasis,
    pub horizon: Horizon,
    pub principal: f64,
    pub granularity: Granularity,
}

impl Default for CompoundInput {
    fn default() -> Self {
        Self {
            rate_pct: 20.0,
            basis: RateBasis::Annual,
            horizon: Horizon::years(10.0),
            principal: 1000.0,
            granularity: Granularity::Monthly,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalInput {
    pub target_years: f64,
    /// Monthly cash flow wanted, in today's money
    pub monthly_income: f64,
    /// Yield the final portfolio pays out, in percent
    pub dividend_rate_pct: f64,
    pub current_assets: f64,
    pub inflation_pct: f64,
}

impl Default for GoalInput {
    fn default() -> Self {
        Self {
            target_years: 10.0,
            monthly_income: 300.0,
            dividend_rate_pct: 4.0,
            current_assets: 10_000.0,
            inflation_pct: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BacktestInput {
    pub asset_id: String,
    pub start_year: i16,
    pub end_year: i16,
    pub policy: ContributionPolicy,
    pub initial_amount: f64,
    /// Added at the start of every year after the first under `Periodic`
    pub periodic_amount: f64,
}

impl Default for BacktestInput {
    fn default() -> Self {
        let end_year = history::max_year();
        Self {
            asset_id: "sp500".to_string(),
            start_year: end_year - 10,
            end_year,
            policy: ContributionPolicy::LumpSum,
            initial_amount: 1000.0,
            periodic_amount: 120.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpectancyInput {
    pub win_rate_pct: f64,
    /// Average win divided by average loss
    pub payoff_ratio: f64,
    pub trade_count: u32,
    /// Share of the balance put at risk per trade, in percent
    pub risk_per_trade_pct: f64,
}

impl Default for ExpectancyInput {
    fn default() -> Self {
        Self {
            win_rate_pct: 50.0,
            payoff_ratio: 2.0,
            trade_count: 20,
            risk_per_trade_pct: 1.0,
        }
    }
}

/// Holdings by category
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetHoldings {
    pub cash: f64,
    pub stocks: f64,
    pub real_estate: f64,
    pub bonds: f64,
    pub other: f64,
}

/// Monthly income by category
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlyIncome {
    pub salary: f64,
    pub asset_income: f64,
    pub other: f64,
}

/// Monthly spending by category
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlyExpenses {
    pub housing: f64,
    pub food: f64,
    pub transport: f64,
    pub communication: f64,
    pub insurance: f64,
    pub other: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetInput {
    pub assets: AssetHoldings,
    pub income: MonthlyIncome,
    pub expenses: MonthlyExpenses,
}
