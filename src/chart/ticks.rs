//! Axis tick generation.

use super::memo::{MEMO_CAPACITY, MemoCache};
use super::scale::Bounds;
use serde::Serialize;
use std::sync::LazyLock;

/// Spacing between X ticks, in percentage points.
const X_STEP: f64 = 5.0;
/// How far outside the data an X tick may sit.
const X_MARGIN: f64 = 2.0;
/// Maximum number of Y ticks.
const MAX_Y_TICKS: usize = 8;
/// Below this value Y ticks double; from it on they grow by 2.5.
const Y_FAST_GROWTH_FROM: f64 = 1000.0;

/// Tick values in data space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ticks {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct TickKey([u64; 4]);

static TICKS_MEMO: LazyLock<MemoCache<TickKey, Ticks>> =
    LazyLock::new(|| MemoCache::new(MEMO_CAPACITY));

impl Ticks {
    /// Ticks for the observed data extremes, memoized on those extremes.
    pub fn compute(bounds: &Bounds) -> Self {
        let key = TickKey([
            bounds.x_min.to_bits(),
            bounds.x_max.to_bits(),
            bounds.y_min.to_bits(),
            bounds.y_max.to_bits(),
        ]);
        TICKS_MEMO.get_or_insert_with(key, || Self {
            x: x_ticks(bounds.x_min, bounds.x_max),
            y: y_ticks(bounds.y_min, bounds.y_max),
        })
    }
}

/// Multiples of 5 within `[x_min - 2, x_max + 2]`.
pub fn x_ticks(x_min: f64, x_max: f64) -> Vec<f64> {
    if !x_min.is_finite() || !x_max.is_finite() {
        return vec![];
    }
    let first = (x_min / X_STEP).floor() as i64;
    let last = ((x_max + X_MARGIN) / X_STEP).floor() as i64;

    (first..=last)
        .map(|step| step as f64 * X_STEP)
        .filter(|&tick| tick >= x_min - X_MARGIN && tick <= x_max + X_MARGIN)
        .collect()
}

/// Roughly log-spaced ticks from the power of ten at or below `y_min`.
///
/// Values double below 1000 and grow by 2.5 from there. Values under
/// `0.8 * y_min` are skipped; generation stops past `1.5 * y_max` or once
/// 8 ticks are collected.
pub fn y_ticks(y_min: f64, y_max: f64) -> Vec<f64> {
    if !y_min.is_finite() || !y_max.is_finite() {
        return vec![];
    }
    let lowest = y_min * 0.8;
    let highest = y_max * 1.5;

    let mut ticks = Vec::with_capacity(MAX_Y_TICKS);
    let mut value = 10f64.powf(y_min.max(1.0).log10().floor());
    while value <= highest {
        if value >= lowest {
            ticks.push(value);
            if ticks.len() >= MAX_Y_TICKS {
                break;
            }
        }
        value *= if value < Y_FAST_GROWTH_FROM { 2.0 } else { 2.5 };
    }
    ticks
}
