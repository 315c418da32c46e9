//! One-call chart layout: points, scales, ticks and de-collided positions.

use super::collision::{CollisionConfig, Position, resolve_collisions};
use super::points::{PositionedPoint, chart_points};
use super::scale::{ChartScales, PlotSize};
use super::ticks::Ticks;
use crate::record::{Mention, NameRecord};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Above this many points, name labels are hidden.
pub const SHOW_LABELS_THRESHOLD: usize = 50;

/// Chart geometry settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Plot area, without axis margins
    pub plot_width: f64,
    pub plot_height: f64,
    pub min_distance: f64,
    pub max_iterations: usize,
    pub repulsion_force: f64,
    /// Mention plotted on the X axis when none is requested
    pub mention: Mention,
}

impl Default for ChartConfig {
    fn default() -> Self {
        // 1400x1200 canvas minus margins (top 60, right 60, bottom 90, left 120)
        Self {
            plot_width: 1220.0,
            plot_height: 1050.0,
            min_distance: 32.0,
            max_iterations: 150,
            repulsion_force: 0.8,
            mention: Mention::Fel,
        }
    }
}

impl ChartConfig {
    pub const fn plot(&self) -> PlotSize {
        PlotSize {
            width: self.plot_width,
            height: self.plot_height,
        }
    }

    pub const fn collision(&self) -> CollisionConfig {
        CollisionConfig {
            min_distance: self.min_distance,
            max_iterations: self.max_iterations,
            repulsion_force: self.repulsion_force,
        }
    }
}

/// Everything a renderer needs to draw the scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub mention: Mention,
    pub scales: ChartScales,
    pub ticks: Ticks,
    pub points: Vec<PositionedPoint>,
    pub show_labels: bool,
    /// De-collision rounds used; 0 when skipped
    pub iterations: usize,
    pub converged: bool,
}

impl ChartLayout {
    /// Lay out a chart view, appending `selected` if the view lacks it.
    pub fn compute(
        view: &[NameRecord],
        mention: Mention,
        selected: Option<&NameRecord>,
        config: &ChartConfig,
    ) -> Self {
        let start = Instant::now();
        let points = chart_points(view, mention, selected);
        let scales = ChartScales::compute(&points, config.plot());
        let ticks = Ticks::compute(&scales.bounds);

        let initial: Vec<Position> = points
            .iter()
            .map(|point| {
                let (x, y) = scales.position(point);
                Position::new(x, y)
            })
            .collect();
        let outcome = resolve_collisions(&initial, config.plot(), &config.collision());

        let show_labels = points.len() <= SHOW_LABELS_THRESHOLD;
        let points: Vec<PositionedPoint> = points
            .into_iter()
            .zip(initial.iter().zip(&outcome.positions))
            .map(|(point, (from, display))| PositionedPoint {
                point,
                initial_x: from.x,
                initial_y: from.y,
                display_x: display.x,
                display_y: display.y,
            })
            .collect();

        tracing::debug!(
            "Laid out {} chart points for {} in {:?}",
            points.len(),
            mention,
            start.elapsed()
        );

        Self {
            mention,
            scales,
            ticks,
            points,
            show_labels,
            iterations: outcome.iterations,
            converged: outcome.converged,
        }
    }

    /// The point drawn for a name, if any.
    pub fn point(&self, firstname: &str) -> Option<&PositionedPoint> {
        self.points.iter().find(|p| p.point.firstname == firstname)
    }
}
