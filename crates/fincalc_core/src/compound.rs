//! Compound growth projection
//!
//! A rate quoted per year, month or day is converted to an effective annual
//! rate, then a principal is grown continuously in time:
//! `value(t) = principal * (1 + annual_rate)^t` with `t` in years.

use crate::metrics;
use crate::model::{CompoundInput, CompoundProjection, Granularity, ProjectionPoint, RateBasis};

/// Upper bound on points handed to a chart.
pub const CHART_MAX_POINTS: usize = 100;

const MONTHS_PER_YEAR: f64 = 12.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// Effective annual rate (as a fraction) for a percentage quoted on `basis`.
#[must_use]
#[inline]
pub fn annualized_rate(rate_pct: f64, basis: RateBasis) -> f64 {
    let r = rate_pct / 100.0;
    match basis {
        RateBasis::Annual => r,
        RateBasis::Monthly | RateBasis::Daily => (1.0 + r).powi(basis.periods_per_year()) - 1.0,
    }
}

/// Project `input.principal` forward over the horizon, sampled at
/// `input.granularity`.
///
/// Returns `None` until the input is computable: the rate must be a positive
/// number and the horizon longer than zero.
#[must_use]
pub fn project(input: &CompoundInput) -> Option<CompoundProjection> {
    let horizon_years = input.horizon.in_years();
    if !input.rate_pct.is_finite() || input.rate_pct <= 0.0 || !(horizon_years > 0.0) {
        return None;
    }

    let principal = input.principal;
    let annual_rate = annualized_rate(input.rate_pct, input.basis);
    let growth = 1.0 + annual_rate;
    let value_at = |t: f64| principal * growth.powf(t);

    let final_amount = value_at(horizon_years);

    let points = match input.granularity {
        Granularity::Monthly => {
            let month_count = (horizon_years * MONTHS_PER_YEAR).ceil() as u32;
            (0..=month_count)
                .map(|m| ProjectionPoint {
                    index: m,
                    label: month_label(m),
                    value: value_at(f64::from(m) / MONTHS_PER_YEAR),
                })
                .collect()
        }
        Granularity::Daily => (0..=input.horizon.total_days())
            .map(|d| ProjectionPoint {
                index: d,
                label: format!("D{d}"),
                value: value_at(f64::from(d) / DAYS_PER_YEAR),
            })
            .collect(),
    };

    Some(CompoundProjection {
        annual_rate,
        horizon_years,
        principal,
        final_amount,
        total_return: final_amount - principal,
        cagr_pct: metrics::cagr_pct(principal, final_amount, horizon_years),
        granularity: input.granularity,
        points,
    })
}

/// The projected series thinned to at most [`CHART_MAX_POINTS`] (+ last point).
#[must_use]
pub fn chart_points(projection: &CompoundProjection) -> Vec<ProjectionPoint> {
    metrics::downsample(projection.series(), CHART_MAX_POINTS)
}

/// `Y3` on year boundaries, `Y3-M5` in between.
fn month_label(month_index: u32) -> String {
    let year = month_index / 12;
    let month = month_index % 12;
    if month == 0 {
        format!("Y{year}")
    } else {
        format!("Y{year}-M{month}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Horizon;

    fn input(rate_pct: f64, basis: RateBasis, years: f64) -> CompoundInput {
        CompoundInput {
            rate_pct,
            basis,
            horizon: Horizon::years(years),
            principal: 1000.0,
            granularity: Granularity::Monthly,
        }
    }

    fn daily(mut params: CompoundInput) -> CompoundInput {
        params.granularity = Granularity::Daily;
        params
    }

    #[test]
    fn test_annualized_rate() {
        assert!((annualized_rate(20.0, RateBasis::Annual) - 0.2).abs() < 1e-15);
        let monthly = annualized_rate(1.0, RateBasis::Monthly);
        assert!((monthly - (1.01f64.powi(12) - 1.0)).abs() < 1e-15);
        let daily = annualized_rate(0.1, RateBasis::Daily);
        assert!((daily - (1.001f64.powi(365) - 1.0)).abs() < 1e-15);
    }

    #[test]
    fn test_invalid_inputs_have_no_result() {
        assert!(project(&input(0.0, RateBasis::Annual, 10.0)).is_none());
        assert!(project(&input(-5.0, RateBasis::Annual, 10.0)).is_none());
        assert!(project(&input(f64::NAN, RateBasis::Annual, 10.0)).is_none());
        assert!(project(&input(5.0, RateBasis::Annual, 0.0)).is_none());
    }

    #[test]
    fn test_first_point_is_principal() {
        let monthly = project(&input(20.0, RateBasis::Annual, 10.0)).unwrap();
        let daily = project(&daily(input(20.0, RateBasis::Annual, 10.0))).unwrap();
        assert_eq!(monthly.points[0].value, 1000.0);
        assert_eq!(daily.points[0].value, 1000.0);
        assert_eq!(monthly.points[0].label, "Y0");
        assert_eq!(daily.points[0].label, "D0");
    }

    #[test]
    fn test_series_lengths_and_labels() {
        let monthly = project(&input(20.0, RateBasis::Annual, 10.0)).unwrap();
        assert_eq!(monthly.series().len(), 121);
        assert_eq!(monthly.points[12].label, "Y1");
        assert_eq!(monthly.points[17].label, "Y1-M5");

        let daily = project(&daily(input(20.0, RateBasis::Annual, 10.0))).unwrap();
        assert_eq!(daily.series().len(), 3651);
        assert_eq!(daily.points[3650].label, "D3650");
    }

    #[test]
    fn test_only_requested_granularity_is_built() {
        let monthly = project(&input(5.0, RateBasis::Annual, 200.0)).unwrap();
        assert_eq!(monthly.granularity, Granularity::Monthly);
        assert_eq!(monthly.points.len(), 2401);
        assert!(monthly.points.iter().all(|p| p.label.starts_with('Y')));

        let daily = project(&daily(input(5.0, RateBasis::Annual, 2.0))).unwrap();
        assert_eq!(daily.granularity, Granularity::Daily);
        assert_eq!(daily.points.len(), 731);
        assert!(daily.points.iter().all(|p| p.label.starts_with('D')));
        assert!((monthly.final_amount - 1000.0 * 1.05f64.powi(200)).abs() / monthly.final_amount < 1e-12);
    }

    #[test]
    fn test_final_amount_and_cagr() {
        let projection = project(&input(20.0, RateBasis::Annual, 10.0)).unwrap();
        let expected = 1000.0 * 1.2f64.powi(10);
        assert!((projection.final_amount - expected).abs() < 1e-6);
        assert!((projection.total_return - (expected - 1000.0)).abs() < 1e-6);
        assert!((projection.cagr_pct.unwrap() - 20.0).abs() < 1e-9);
        assert!((projection.points[120].value - expected).abs() < 1e-6);
    }

    #[test]
    fn test_cagr_recovers_converted_rate() {
        let projection = project(&input(2.0, RateBasis::Monthly, 3.5)).unwrap();
        let expected = (1.02f64.powi(12) - 1.0) * 100.0;
        assert!((projection.cagr_pct.unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_fractional_horizon() {
        let mut params = input(10.0, RateBasis::Annual, 1.0);
        params.horizon.months = 1.5;
        let projection = project(&params).unwrap();
        // 1 year + 1.5 months rounds up to 14 whole months
        assert_eq!(projection.points.len(), 15);
        let expected = 1000.0 * 1.1f64.powf(1.125);
        assert!((projection.final_amount - expected).abs() < 1e-9);
    }

    #[test]
    fn test_chart_points_thinned() {
        let projection = project(&input(20.0, RateBasis::Annual, 10.0)).unwrap();
        let monthly = chart_points(&projection);
        assert_eq!(monthly.len(), 61);
        assert_eq!(monthly.last().map(|p| p.index), Some(120));

        let projection = project(&daily(input(20.0, RateBasis::Annual, 10.0))).unwrap();
        let daily = chart_points(&projection);
        assert_eq!(daily[1].index, 37);
        assert_eq!(daily.last().map(|p| p.index), Some(3650));
    }
}
