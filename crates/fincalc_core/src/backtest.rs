//! Historical backtest over the static return table
//!
//! One forward pass over the inclusive year range. Each year first receives its
//! contribution, then grows by that year's recorded return. Years without data
//! still receive contributions but carry their value forward unchanged.

use crate::history;
use crate::metrics::{self, DrawdownTracker};
use crate::model::{BacktestInput, BacktestResult, BacktestYear, ContributionPolicy};

/// Replay `input.asset_id` over `start_year..=end_year`.
///
/// An inverted range produces an empty series and no ratios.
#[must_use]
pub fn simulate(input: &BacktestInput) -> BacktestResult {
    let range = history::range_of(&input.asset_id, input.start_year, input.end_year);

    let mut yearly = Vec::with_capacity(range.len());
    let mut value = 0.0;
    let mut drawdown = DrawdownTracker::new();

    for (i, entry) in range.iter().enumerate() {
        match input.policy {
            ContributionPolicy::LumpSum => {
                if i == 0 {
                    value = input.initial_amount;
                }
            }
            ContributionPolicy::Periodic => {
                value += if i == 0 {
                    input.initial_amount
                } else {
                    input.periodic_amount
                };
            }
        }

        if let Some(pct) = entry.return_pct {
            value *= 1.0 + pct / 100.0;
        }

        drawdown.observe(value);
        yearly.push(BacktestYear {
            year: entry.year,
            value,
            return_pct: entry.return_pct,
        });
    }

    let years_count = range.len();
    let total_invested = total_invested(
        input.policy,
        input.initial_amount,
        input.periodic_amount,
        years_count,
    );

    let total_return_pct = (total_invested > 0.0 && years_count > 0)
        .then(|| (value - total_invested) / total_invested * 100.0);
    let cagr_pct = metrics::cagr_pct(total_invested, value, years_count as f64);

    BacktestResult {
        first_data_year: range.iter().find(|r| r.return_pct.is_some()).map(|r| r.year),
        yearly,
        total_invested,
        total_return_pct,
        cagr_pct,
        max_drawdown_pct: drawdown.max_drawdown_pct(),
        end_value: value,
    }
}

/// Money put in over `years_count` years under `policy`.
#[must_use]
pub fn total_invested(
    policy: ContributionPolicy,
    initial_amount: f64,
    periodic_amount: f64,
    years_count: usize,
) -> f64 {
    match policy {
        ContributionPolicy::LumpSum => initial_amount,
        ContributionPolicy::Periodic => {
            initial_amount + periodic_amount * years_count.saturating_sub(1) as f64
        }
    }
}

/// Clamp both ends into the table's year bounds and put them in order.
#[must_use]
pub fn normalize_range(start_year: i16, end_year: i16) -> (i16, i16) {
    let (min, max) = (history::min_year(), history::max_year());
    let start = start_year.clamp(min, max);
    let end = end_year.clamp(min, max);
    (start.min(end), start.max(end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lump(asset: &str, start: i16, end: i16, amount: f64) -> BacktestInput {
        BacktestInput {
            asset_id: asset.to_string(),
            start_year: start,
            end_year: end,
            policy: ContributionPolicy::LumpSum,
            initial_amount: amount,
            periodic_amount: 0.0,
        }
    }

    #[test]
    fn test_sp500_2019_2020_lump_sum() {
        let result = simulate(&lump("sp500", 2019, 2020, 1000.0));
        let expected = 1000.0 * 1.3121 * 1.1802;
        assert!((result.end_value - expected).abs() < 1e-9);
        assert!((result.end_value - 1548.9).abs() < 0.1);
        assert!((result.total_return_pct.unwrap() - 54.89).abs() < 0.01);
        assert_eq!(result.max_drawdown_pct, 0.0);
        assert_eq!(result.yearly.len(), 2);
        assert_eq!(result.yearly[0].return_pct, Some(31.21));

        let cagr = result.cagr_pct.unwrap();
        assert!(((expected / 1000.0).sqrt() - 1.0 - cagr / 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_year_lump_sum() {
        let result = simulate(&lump("sp500", 2008, 2008, 500.0));
        assert!((result.end_value - 500.0 * (1.0 - 0.3655)).abs() < 1e-9);
        // peak is the end-of-year value, so a single year has no drawdown
        assert_eq!(result.max_drawdown_pct, 0.0);
    }

    #[test]
    fn test_drawdown_measured_from_peak() {
        // 2007: +5.48, 2008: -36.55
        let result = simulate(&lump("sp500", 2007, 2008, 1000.0));
        assert!((result.max_drawdown_pct - 36.55).abs() < 1e-9);
        assert!(result.max_drawdown_pct >= 0.0);
    }

    #[test]
    fn test_periodic_contributions() {
        let input = BacktestInput {
            asset_id: "sp500".to_string(),
            start_year: 2019,
            end_year: 2021,
            policy: ContributionPolicy::Periodic,
            initial_amount: 1000.0,
            periodic_amount: 100.0,
        };
        let result = simulate(&input);
        let y1 = 1000.0 * 1.3121;
        let y2 = (y1 + 100.0) * 1.1802;
        let y3 = (y2 + 100.0) * 1.2847;
        assert!((result.end_value - y3).abs() < 1e-9);
        assert_eq!(result.total_invested, 1200.0);
        let expected_return = (y3 - 1200.0) / 1200.0 * 100.0;
        assert!((result.total_return_pct.unwrap() - expected_return).abs() < 1e-9);
    }

    #[test]
    fn test_missing_years_carry_value_and_still_contribute() {
        // SCHD data starts in 2012
        let input = BacktestInput {
            asset_id: "schd".to_string(),
            start_year: 2010,
            end_year: 2012,
            policy: ContributionPolicy::Periodic,
            initial_amount: 1000.0,
            periodic_amount: 100.0,
        };
        let result = simulate(&input);
        assert_eq!(result.yearly[0].value, 1000.0);
        assert_eq!(result.yearly[0].return_pct, None);
        assert_eq!(result.yearly[1].value, 1100.0);
        assert!((result.yearly[2].value - 1200.0 * 1.142).abs() < 1e-9);
        assert_eq!(result.first_data_year, Some(2012));
    }

    #[test]
    fn test_unknown_asset_carries_principal() {
        let result = simulate(&lump("unknown", 2000, 2004, 1000.0));
        assert_eq!(result.yearly.len(), 5);
        assert!(result.yearly.iter().all(|y| y.value == 1000.0));
        assert_eq!(result.total_return_pct, Some(0.0));
        assert_eq!(result.first_data_year, None);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let result = simulate(&lump("sp500", 2020, 2019, 1000.0));
        assert!(result.yearly.is_empty());
        assert_eq!(result.end_value, 0.0);
        assert!(result.total_return_pct.is_none());
        assert!(result.cagr_pct.is_none());
    }

    #[test]
    fn test_zero_investment_has_no_ratios() {
        let result = simulate(&lump("sp500", 2019, 2020, 0.0));
        assert!(result.total_return_pct.is_none());
        assert!(result.cagr_pct.is_none());
        assert_eq!(result.max_drawdown_pct, 0.0);
    }

    #[test]
    fn test_total_invested() {
        assert_eq!(total_invested(ContributionPolicy::LumpSum, 1000.0, 120.0, 10), 1000.0);
        assert_eq!(total_invested(ContributionPolicy::Periodic, 1000.0, 120.0, 10), 2080.0);
        assert_eq!(total_invested(ContributionPolicy::Periodic, 1000.0, 120.0, 0), 1000.0);
    }

    #[test]
    fn test_normalize_range() {
        assert_eq!(normalize_range(2020, 2010), (2010, 2020));
        assert_eq!(normalize_range(1800, 3000), (1900, history::max_year()));
    }
}
