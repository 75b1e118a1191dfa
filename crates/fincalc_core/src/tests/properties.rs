//! Invariants checked across every asset in the return table

use crate::model::{
    BacktestInput, CompoundInput, ContributionPolicy, ExpectancyInput, Granularity, Horizon,
    RateBasis,
};
use crate::{backtest, compound, expectancy, history, metrics};

fn full_history(asset_id: &str, policy: ContributionPolicy) -> BacktestInput {
    BacktestInput {
        asset_id: asset_id.to_string(),
        start_year: history::min_year(),
        end_year: history::max_year(),
        policy,
        initial_amount: 1000.0,
        periodic_amount: 120.0,
    }
}

#[test]
fn test_backtest_one_row_per_year() {
    for asset in history::ASSETS {
        let input = full_history(asset.id, ContributionPolicy::Periodic);
        let result = backtest::simulate(&input);
        let expected = (input.end_year - input.start_year + 1) as usize;
        assert_eq!(result.yearly.len(), expected, "{}", asset.id);
        assert!(result.yearly.windows(2).all(|w| w[1].year == w[0].year + 1));
        assert_eq!(result.first_data_year, asset.first_year());
    }
}

#[test]
fn test_backtest_drawdown_bounded() {
    for asset in history::ASSETS {
        for policy in [ContributionPolicy::LumpSum, ContributionPolicy::Periodic] {
            let result = backtest::simulate(&full_history(asset.id, policy));
            assert!(
                (0.0..=100.0).contains(&result.max_drawdown_pct),
                "{} drawdown {}",
                asset.id,
                result.max_drawdown_pct
            );
            let values = result.yearly.iter().map(|y| y.value);
            assert!((metrics::max_drawdown_pct(values) - result.max_drawdown_pct).abs() < 1e-9);
        }
    }
}

#[test]
fn test_lump_sum_end_value_is_product_of_returns() {
    for asset in history::ASSETS {
        let input = full_history(asset.id, ContributionPolicy::LumpSum);
        let result = backtest::simulate(&input);
        let growth: f64 = asset.returns.iter().map(|(_, r)| 1.0 + r / 100.0).product();
        let expected = input.initial_amount * growth;
        assert!(
            (result.end_value - expected).abs() / expected < 1e-9,
            "{}: {} vs {}",
            asset.id,
            result.end_value,
            expected
        );
    }
}

#[test]
fn test_periodic_total_invested() {
    let input = full_history("gold", ContributionPolicy::Periodic);
    let result = backtest::simulate(&input);
    let years = result.yearly.len() as f64;
    assert_eq!(result.total_invested, 1000.0 + 120.0 * (years - 1.0));
}

#[test]
fn test_compound_series_monotone_for_positive_rates() {
    for basis in [RateBasis::Annual, RateBasis::Monthly, RateBasis::Daily] {
        for granularity in [Granularity::Monthly, Granularity::Daily] {
            let projection = compound::project(&CompoundInput {
                rate_pct: 0.5,
                basis,
                horizon: Horizon {
                    years: 2.0,
                    months: 3.0,
                    days: 10.0,
                },
                principal: 250.0,
                granularity,
            })
            .unwrap();
            let series = projection.series();
            assert_eq!(series[0].value, 250.0);
            assert!(series.windows(2).all(|w| w[1].value > w[0].value));
        }
    }
}

#[test]
fn test_compound_chart_bounded() {
    for years in [1.0, 5.0, 8.3, 30.0, 50.0] {
        for granularity in [Granularity::Monthly, Granularity::Daily] {
            let projection = compound::project(&CompoundInput {
                horizon: Horizon::years(years),
                granularity,
                ..CompoundInput::default()
            })
            .unwrap();
            let chart = compound::chart_points(&projection);
            let full = projection.series();
            assert!(chart.len() <= compound::CHART_MAX_POINTS + 1);
            assert_eq!(chart.first(), full.first());
            assert_eq!(chart.last(), full.last());
        }
    }
}

#[test]
fn test_expectancy_ruin_curve_reaches_threshold() {
    for risk in [0.5, 1.0, 3.0, 10.0, 40.0] {
        let result = expectancy::evaluate(&ExpectancyInput {
            risk_per_trade_pct: risk,
            ..ExpectancyInput::default()
        });
        let curve = &result.ruin_curve;
        assert_eq!(curve[0].balance_pct, 100.0);
        assert!(curve.windows(2).all(|w| w[1].balance_pct < w[0].balance_pct));
        let last = curve.last().unwrap();
        assert_eq!(last.losses, result.ruin_trade_count);
        assert!(last.balance_pct <= expectancy::RUIN_BALANCE_THRESHOLD * 100.0 + 1e-9);
    }
}

#[test]
fn test_expectancy_break_even() {
    // 1:1 payoff at 50% neither gains nor loses
    let result = expectancy::evaluate(&ExpectancyInput {
        win_rate_pct: 50.0,
        payoff_ratio: 1.0,
        trade_count: 100,
        risk_per_trade_pct: 2.0,
    });
    assert!(result.expectancy_pct.abs() < 1e-12);
    assert!(result.pattern.last().unwrap().cumulative_return_pct.abs() < 1e-9);
}
