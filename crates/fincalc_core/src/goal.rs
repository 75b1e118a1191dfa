//! Investment goal planning
//!
//! Works backwards from a wanted monthly cash flow: the portfolio that pays it
//! at a given dividend yield, and the annual return needed to grow today's
//! assets into that portfolio.

use crate::model::{GoalInput, GoalResult, GoalYear, YearValue};

/// Solve for the target portfolio and the required annual return.
///
/// The required-rate and dividend-rate tracks are both projected from today's
/// assets even when the required return is unrealistic; the gap between them
/// is the point of the comparison.
#[must_use]
pub fn solve(input: &GoalInput) -> GoalResult {
    let GoalInput {
        target_years,
        monthly_income,
        dividend_rate_pct,
        current_assets,
        inflation_pct,
    } = *input;

    let future_monthly_income = monthly_income * (1.0 + inflation_pct / 100.0).powf(target_years);

    let target_asset_value = Some(future_monthly_income * 12.0 / (dividend_rate_pct / 100.0))
        .filter(|v| v.is_finite());

    // (target / current)^(1/years) - 1; undefined for an empty base or zero horizon
    let required_annual_return_pct = target_asset_value
        .filter(|_| current_assets > 0.0 && target_years > 0.0)
        .map(|target| ((target / current_assets).powf(1.0 / target_years) - 1.0) * 100.0)
        .filter(|pct| pct.is_finite());

    let whole_years = whole_years(target_years);

    let mut required_track = required_annual_return_pct.map(|_| current_assets);
    let mut target_track = current_assets;
    let mut yearly = Vec::with_capacity(whole_years as usize + 1);
    yearly.push(GoalYear {
        year: 0,
        required_rate_value: required_track,
        target_rate_value: target_track,
    });
    for year in 1..=whole_years {
        required_track = required_track
            .zip(required_annual_return_pct)
            .map(|(value, rate)| value * (1.0 + rate / 100.0));
        target_track *= 1.0 + dividend_rate_pct / 100.0;
        yearly.push(GoalYear {
            year,
            required_rate_value: required_track,
            target_rate_value: target_track,
        });
    }

    GoalResult {
        target_asset_value,
        required_annual_return_pct,
        yearly,
        annual_income: monthly_income * 12.0,
        future_annual_income: future_monthly_income * 12.0,
        inflation_adjusted: inflation_pct > 0.0,
    }
}

/// Completed years in a goal horizon; the yearly tracks stop here.
#[must_use]
pub fn whole_years(target_years: f64) -> u32 {
    if target_years.is_finite() && target_years > 0.0 {
        target_years.floor() as u32
    } else {
        0
    }
}

/// Grow `start_amount` at a fixed `rate_pct` for each whole year up to `years`.
///
/// A zero horizon is treated as one year so there is always something to plot.
#[must_use]
pub fn what_if(start_amount: f64, rate_pct: f64, years: u32) -> Vec<YearValue> {
    let years = years.max(1);
    let growth = 1.0 + rate_pct / 100.0;
    (0..=years)
        .map(|year| YearValue {
            year,
            value: start_amount * growth.powi(year as i32),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> GoalInput {
        GoalInput {
            target_years: 10.0,
            monthly_income: 300.0,
            dividend_rate_pct: 4.0,
            current_assets: 10_000.0,
            inflation_pct: 0.0,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let result = solve(&base());
        let target = result.target_asset_value.unwrap();
        assert!((target - 90_000.0).abs() < 1e-6);

        let required = result.required_annual_return_pct.unwrap();
        let expected = (9.0f64.powf(0.1) - 1.0) * 100.0;
        assert!((required - expected).abs() < 1e-9);
        assert!((required - 24.57).abs() < 0.01);

        assert_eq!(result.annual_income, 3600.0);
        assert_eq!(result.future_annual_income, 3600.0);
        assert!(!result.inflation_adjusted);
    }

    #[test]
    fn test_required_track_reaches_target() {
        let result = solve(&base());
        assert_eq!(result.yearly.len(), 11);
        assert_eq!(result.yearly[0].required_rate_value, Some(10_000.0));
        assert_eq!(result.yearly[0].target_rate_value, 10_000.0);

        let last = result.yearly.last().unwrap();
        let reached = last.required_rate_value.unwrap();
        assert!((reached - 90_000.0).abs() / 90_000.0 < 1e-9);
        let dividend_track = 10_000.0 * 1.04f64.powi(10);
        assert!((last.target_rate_value - dividend_track).abs() < 1e-6);
    }

    #[test]
    fn test_inflation_raises_target() {
        let mut input = base();
        input.inflation_pct = 3.0;
        let result = solve(&input);
        let factor = 1.03f64.powf(10.0);
        assert!((result.future_annual_income - 3600.0 * factor).abs() < 1e-6);
        assert!((result.target_asset_value.unwrap() - 90_000.0 * factor).abs() < 1e-6);
        assert!(result.inflation_adjusted);
    }

    #[test]
    fn test_zero_dividend_rate_has_no_target() {
        let mut input = base();
        input.dividend_rate_pct = 0.0;
        let result = solve(&input);
        assert!(result.target_asset_value.is_none());
        assert!(result.required_annual_return_pct.is_none());
        assert!(result.yearly.iter().all(|y| y.required_rate_value.is_none()));
        assert!(result.yearly.iter().all(|y| y.target_rate_value == 10_000.0));
    }

    #[test]
    fn test_no_current_assets_has_no_required_return() {
        let mut input = base();
        input.current_assets = 0.0;
        let result = solve(&input);
        assert!(result.target_asset_value.is_some());
        assert!(result.required_annual_return_pct.is_none());

        input.current_assets = -100.0;
        assert!(solve(&input).required_annual_return_pct.is_none());
    }

    #[test]
    fn test_zero_horizon_has_no_required_return() {
        let mut input = base();
        input.target_years = 0.0;
        let result = solve(&input);
        assert!(result.required_annual_return_pct.is_none());
        assert_eq!(result.yearly.len(), 1);
    }

    #[test]
    fn test_what_if_projection() {
        let rows = what_if(1000.0, 10.0, 3);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].value, 1000.0);
        assert!((rows[3].value - 1331.0).abs() < 1e-9);

        assert_eq!(what_if(500.0, 5.0, 0).len(), 2);
    }

    #[test]
    fn test_fractional_horizon_tracks_whole_years() {
        let mut input = base();
        input.target_years = 10.5;
        let result = solve(&input);
        assert_eq!(whole_years(10.5), 10);
        assert_eq!(result.yearly.last().map(|y| y.year), Some(10));
        assert_eq!(whole_years(f64::NAN), 0);
        assert_eq!(whole_years(-2.0), 0);
    }
}
