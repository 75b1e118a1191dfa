//! Return and risk measures shared by the calculators, plus the sampling rules
//! used to thin long series for charts.

/// Compound annual growth rate in percent.
///
/// `None` when either endpoint is not positive, the period is not positive, or
/// the result is not finite.
#[must_use]
pub fn cagr_pct(start_value: f64, end_value: f64, years: f64) -> Option<f64> {
    if !(start_value > 0.0 && end_value > 0.0 && years > 0.0) {
        return None;
    }
    let cagr = ((end_value / start_value).powf(1.0 / years) - 1.0) * 100.0;
    cagr.is_finite().then_some(cagr)
}

/// Tracks the running peak and the deepest decline from it.
///
/// The peak starts at zero, so the first positive value becomes the first peak.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawdownTracker {
    peak: f64,
    max_drawdown_pct: f64,
}

impl DrawdownTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the next value and return its drawdown in percent.
    pub fn observe(&mut self, value: f64) -> f64 {
        if value > self.peak {
            self.peak = value;
        }
        let drawdown = if self.peak > 0.0 {
            (self.peak - value) / self.peak * 100.0
        } else {
            0.0
        };
        if drawdown > self.max_drawdown_pct {
            self.max_drawdown_pct = drawdown;
        }
        drawdown
    }

    #[must_use]
    pub fn peak(&self) -> f64 {
        self.peak
    }

    #[must_use]
    pub fn max_drawdown_pct(&self) -> f64 {
        self.max_drawdown_pct
    }
}

/// Maximum drawdown of a value series in percent.
#[must_use]
pub fn max_drawdown_pct(values: impl IntoIterator<Item = f64>) -> f64 {
    let mut tracker = DrawdownTracker::new();
    for value in values {
        tracker.observe(value);
    }
    tracker.max_drawdown_pct()
}

/// Keep every `ceil(len / max_points)`-th element plus the last one.
///
/// Series of `max_points` or fewer are returned unchanged. The same length
/// always selects the same indices.
#[must_use]
pub fn downsample<T: Clone>(points: &[T], max_points: usize) -> Vec<T> {
    if points.len() <= max_points || max_points == 0 {
        return points.to_vec();
    }
    let step = points.len().div_ceil(max_points);
    let last = points.len() - 1;
    points
        .iter()
        .enumerate()
        .filter(|(i, _)| i % step == 0 || *i == last)
        .map(|(_, p)| p.clone())
        .collect()
}

/// `0..=max` sampled with stride `max(1, max / max_points)`, always ending at `max`.
#[must_use]
pub fn strided_range(max: u32, max_points: u32) -> Vec<u32> {
    let step = (max / max_points.max(1)).max(1);
    let mut points: Vec<u32> = (0..=max).step_by(step as usize).collect();
    if points.last().is_some_and(|&last| last < max) {
        points.push(max);
    }
    points
}
