//! Axis scales: linear on the mention rate, base-10 logarithmic on the count.

use super::memo::{MEMO_CAPACITY, MemoCache};
use super::points::ChartPoint;
use serde::Serialize;
use std::sync::LazyLock;

/// Lowest X bound after padding.
const X_FLOOR: f64 = -1.0;
/// Highest X bound after padding.
const X_CEILING: f64 = 100.0;
/// Fraction of the X range added on each side.
const X_PADDING_RATIO: f64 = 0.05;
/// Minimum X padding, in percentage points.
const X_MIN_PADDING: f64 = 1.0;
/// Span used when the padded X range collapses.
const DEFAULT_X_SPAN: f64 = 1.0;
/// Span (in decades) used when the log range collapses.
const DEFAULT_Y_LOG_SPAN: f64 = 1.0;
/// Head room below the smallest and above the largest count.
const Y_LOW_HEADROOM: f64 = 0.9;
const Y_HIGH_HEADROOM: f64 = 1.1;

/// Data bounds used when there are no points.
const EMPTY_BOUNDS: Bounds = Bounds {
    x_min: 0.0,
    x_max: 100.0,
    y_min: 1.0,
    y_max: 10.0,
};

/// Plot area size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotSize {
    pub width: f64,
    pub height: f64,
}

/// Observed data extremes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// Extremes of a point set, or the default bounds when it is empty.
    pub fn of(points: &[ChartPoint]) -> Self {
        if points.is_empty() {
            return EMPTY_BOUNDS;
        }
        points.iter().fold(
            Self {
                x_min: f64::INFINITY,
                x_max: f64::NEG_INFINITY,
                y_min: f64::INFINITY,
                y_max: f64::NEG_INFINITY,
            },
            |acc, p| Self {
                x_min: acc.x_min.min(p.x),
                x_max: acc.x_max.max(p.x),
                y_min: acc.y_min.min(p.y),
                y_max: acc.y_max.max(p.y),
            },
        )
    }
}

/// Mapping from data space to plot pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartScales {
    /// Observed extremes before padding
    pub bounds: Bounds,
    /// Padded X domain
    pub x_domain_min: f64,
    pub x_domain_max: f64,
    /// Log10 Y domain
    pub y_min_log: f64,
    pub y_max_log: f64,
    pub plot: PlotSize,
}

/// Memo key: point count, extremes and plot size, compared bit for bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ScaleKey {
    len: usize,
    bits: [u64; 6],
}

static SCALES_MEMO: LazyLock<MemoCache<ScaleKey, ChartScales>> =
    LazyLock::new(|| MemoCache::new(MEMO_CAPACITY));

impl ChartScales {
    /// Scales for a point set, memoized on its count, extremes and plot size.
    pub fn compute(points: &[ChartPoint], plot: PlotSize) -> Self {
        let bounds = Bounds::of(points);
        let key = ScaleKey {
            len: points.len(),
            bits: [
                bounds.x_min.to_bits(),
                bounds.x_max.to_bits(),
                bounds.y_min.to_bits(),
                bounds.y_max.to_bits(),
                plot.width.to_bits(),
                plot.height.to_bits(),
            ],
        };
        SCALES_MEMO.get_or_insert_with(key, || Self::from_bounds(bounds, plot))
    }

    /// Scales for known extremes.
    pub fn from_bounds(bounds: Bounds, plot: PlotSize) -> Self {
        let range = bounds.x_max - bounds.x_min;
        let padding = (range * X_PADDING_RATIO).max(X_MIN_PADDING);
        let x_domain_min = (bounds.x_min - padding).max(X_FLOOR);
        let mut x_domain_max = (bounds.x_max + padding).min(X_CEILING);
        if is_collapsed(x_domain_max - x_domain_min) {
            x_domain_max = x_domain_min + DEFAULT_X_SPAN;
        }

        let y_min_log = (bounds.y_min * Y_LOW_HEADROOM).max(1.0).log10();
        let mut y_max_log = (bounds.y_max * Y_HIGH_HEADROOM).log10();
        // An all-zero count set gives log10(0) = -inf
        if is_collapsed(y_max_log - y_min_log) || !y_max_log.is_finite() {
            y_max_log = y_min_log + DEFAULT_Y_LOG_SPAN;
        }

        Self {
            bounds,
            x_domain_min,
            x_domain_max,
            y_min_log,
            y_max_log,
            plot,
        }
    }

    /// Pixel X for a rate in percent.
    pub fn x_to_px(&self, value: f64) -> f64 {
        (value - self.x_domain_min) / (self.x_domain_max - self.x_domain_min) * self.plot.width
    }

    /// Pixel Y for a count. Higher counts map closer to the top.
    pub fn y_to_px(&self, value: f64) -> f64 {
        let log_value = value.max(1.0).log10();
        self.plot.height
            * (1.0 - (log_value - self.y_min_log) / (self.y_max_log - self.y_min_log))
    }

    /// Pixel position of a point.
    pub fn position(&self, point: &ChartPoint) -> (f64, f64) {
        (self.x_to_px(point.x), self.y_to_px(point.y))
    }
}

fn is_collapsed(span: f64) -> bool {
    span.is_nan() || span <= 0.0
}
