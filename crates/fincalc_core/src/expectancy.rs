//! Win rate / payoff ratio expectancy and risk of ruin
//!
//! Results are in "risk units": a loss costs one unit (the risked fraction of
//! the balance) and a win pays `payoff_ratio` units.

use crate::metrics;
use crate::model::{ExpectancyInput, ExpectancyResult, PatternPoint, RecoveryRow, RuinPoint};

/// Smallest per-trade risk fraction used in the ruin formula.
pub const MIN_RISK_FRACTION: f64 = 0.001;
/// Largest per-trade risk fraction used in the ruin formula.
pub const MAX_RISK_FRACTION: f64 = 0.99;
/// Remaining balance, as a fraction of the starting balance, regarded as ruin.
pub const RUIN_BALANCE_THRESHOLD: f64 = 0.01;
/// Trades per block of the illustrative win/loss pattern.
pub const PATTERN_BLOCK: u32 = 10;
/// Upper bound on sampled points of the ruin curve.
pub const RUIN_CURVE_MAX_POINTS: u32 = 80;
/// Drawdowns listed in the recovery reference table, in percent.
pub const RECOVERY_TABLE_DRAWDOWNS: [f64; 13] = [
    5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0,
];

/// Clamp a per-trade risk in percent into a fraction the ruin formula accepts.
#[must_use]
pub fn risk_fraction(risk_per_trade_pct: f64) -> f64 {
    let fraction = risk_per_trade_pct / 100.0;
    if fraction.is_nan() {
        return MIN_RISK_FRACTION;
    }
    fraction.clamp(MIN_RISK_FRACTION, MAX_RISK_FRACTION)
}

/// Number of consecutive losses that shrink the balance to
/// [`RUIN_BALANCE_THRESHOLD`] or below.
#[must_use]
pub fn ruin_trade_count(risk_fraction: f64) -> u32 {
    if risk_fraction >= 1.0 {
        return 1;
    }
    (RUIN_BALANCE_THRESHOLD.ln() / (1.0 - risk_fraction).ln()).ceil() as u32
}

#[must_use]
pub fn evaluate(input: &ExpectancyInput) -> ExpectancyResult {
    let win_rate = input.win_rate_pct / 100.0;
    let payoff = input.payoff_ratio;
    let trades = input.trade_count.max(1);
    let n = f64::from(trades);
    let risk = risk_fraction(input.risk_per_trade_pct);

    let expected_wins = win_rate * n;
    let avg_return_per_trade = win_rate * payoff - (1.0 - win_rate);
    let ruin = ruin_trade_count(risk);

    ExpectancyResult {
        risk_fraction: risk,
        expected_wins,
        expected_losses: n - expected_wins,
        avg_return_per_trade,
        expectancy_pct: avg_return_per_trade * risk * 100.0,
        total_return_pct: avg_return_per_trade * n * risk * 100.0,
        ruin_trade_count: ruin,
        pattern: pattern_path(win_rate, payoff, risk, trades),
        ruin_curve: ruin_curve(risk, ruin),
    }
}

/// Cumulative return over a fixed repeating pattern: in every block of
/// [`PATTERN_BLOCK`] trades the first `round(10 * win_rate)` win, the rest lose.
///
/// The path is fully determined by its inputs.
#[must_use]
pub fn pattern_path(win_rate: f64, payoff: f64, risk: f64, trades: u32) -> Vec<PatternPoint> {
    let wins_in_block = (f64::from(PATTERN_BLOCK) * win_rate).round().clamp(0.0, 10.0) as u32;
    let win_step = payoff * risk * 100.0;
    let loss_step = risk * 100.0;

    let mut points = Vec::with_capacity(trades as usize + 1);
    points.push(PatternPoint {
        trades: 0,
        cumulative_return_pct: 0.0,
    });
    let mut cumulative = 0.0;
    for i in 0..trades {
        if i % PATTERN_BLOCK < wins_in_block {
            cumulative += win_step;
        } else {
            cumulative -= loss_step;
        }
        points.push(PatternPoint {
            trades: i + 1,
            cumulative_return_pct: cumulative,
        });
    }
    points
}

/// Balance left after `n` straight losses, sampled up to `ruin_count`.
#[must_use]
pub fn ruin_curve(risk: f64, ruin_count: u32) -> Vec<RuinPoint> {
    metrics::strided_range(ruin_count, RUIN_CURVE_MAX_POINTS)
        .into_iter()
        .map(|losses| RuinPoint {
            losses,
            balance_pct: ((1.0 - risk).powi(losses as i32) * 100.0).max(0.0),
        })
        .collect()
}

/// Gain required to recover from each drawdown in [`RECOVERY_TABLE_DRAWDOWNS`].
#[must_use]
pub fn mdd_recovery_table() -> Vec<RecoveryRow> {
    RECOVERY_TABLE_DRAWDOWNS
        .iter()
        .map(|&mdd_pct| {
            let recovery_pct = (1.0 / (1.0 - mdd_pct / 100.0) - 1.0) * 100.0;
            RecoveryRow {
                mdd_pct,
                balance_pct: 100.0 - mdd_pct,
                recovery_pct,
                ratio: recovery_pct / mdd_pct,
            }
        })
        .collect()
}
