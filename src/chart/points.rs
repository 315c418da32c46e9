//! Chart points: one per name, X = mention rate in percent, Y = count.

use crate::record::{Mention, NameRecord};
use serde::Serialize;

/// Factor applied to the smallest count in view to place an out-of-view selection.
const SELECTED_FLOOR_FACTOR: f64 = 0.9;

/// A point in data space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub firstname: String,
    /// Mention rate, in percent
    pub x: f64,
    /// Plotted count; differs from `count` only for adjusted points
    pub y: f64,
    /// True number of candidates
    pub count: u64,
    /// Whether this point is the selected name, appended because the view lacked it
    pub appended: bool,
    /// Whether `y` was moved away from the true count to keep the point on the chart
    pub adjusted: bool,
}

impl ChartPoint {
    pub fn from_record(record: &NameRecord, mention: Mention) -> Self {
        Self {
            firstname: record.firstname.clone(),
            x: record.rate(mention) * 100.0,
            y: record.count as f64,
            count: record.count,
            appended: false,
            adjusted: false,
        }
    }
}

/// A chart point with its pixel position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedPoint {
    #[serde(flatten)]
    pub point: ChartPoint,
    /// Pixel position computed from the scales
    pub initial_x: f64,
    pub initial_y: f64,
    /// Pixel position after label de-collision
    pub display_x: f64,
    pub display_y: f64,
}

/// Build the chart points for a view, appending the selected name if the view lacks it.
///
/// An appended selection whose count is below every count in view is drawn at
/// `0.9 x` the smallest count and flagged as adjusted.
pub fn chart_points(
    view: &[NameRecord],
    mention: Mention,
    selected: Option<&NameRecord>,
) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = view
        .iter()
        .map(|record| ChartPoint::from_record(record, mention))
        .collect();

    let Some(selected) = selected else {
        return points;
    };
    if view.iter().any(|record| record.firstname == selected.firstname) {
        return points;
    }

    let mut point = ChartPoint::from_record(selected, mention);
    point.appended = true;
    if let Some(min_count) = view.iter().map(|record| record.count).min()
        && selected.count < min_count
    {
        point.y = min_count as f64 * SELECTED_FLOOR_FACTOR;
        point.adjusted = true;
    }

    tracing::debug!(
        "Appended selected name {} to chart (adjusted: {})",
        point.firstname,
        point.adjusted
    );
    points.push(point);
    points
}
