//! Anti-collision label placement.
//!
//! Points closer than `min_distance` push each other apart, like charged
//! particles, until the layout settles or the iteration budget runs out.
//! Each round is O(n²); the charts hold at most a few hundred names.

use super::scale::PlotSize;
use serde::{Deserialize, Serialize};

/// Point sets smaller than this are left untouched.
pub const MIN_POINTS_FOR_COLLISION: usize = 10;

/// Horizontal margin kept free on each side of the plot.
const MARGIN_X: f64 = 20.0;
/// Vertical margin kept free above and below the plot.
const MARGIN_Y: f64 = 10.0;
/// A point moves in a round only if its summed force exceeds this, in pixels.
const MOVE_EPSILON: f64 = 0.05;
/// A round moving points less than this in total ends the simulation.
const SETTLED_MOVEMENT: f64 = 1.0;

/// Repulsion parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionConfig {
    /// Distance under which two points repel, in pixels
    pub min_distance: f64,
    pub max_iterations: usize,
    /// Fraction of the overlap converted into displacement each round
    pub repulsion_force: f64,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            min_distance: 18.0,
            max_iterations: 100,
            repulsion_force: 0.6,
        }
    }
}

/// A pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Result of a de-collision run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollisionOutcome {
    /// Final positions, in input order
    pub positions: Vec<Position>,
    /// Rounds simulated
    pub iterations: usize,
    /// False when the iteration budget ran out before the layout settled
    pub converged: bool,
}

/// Spread out points that sit too close to each other.
///
/// Points are updated in place within a round, so later points already see
/// the moves of earlier ones. Moved points are kept within
/// `[20, width - 20] x [10, height - 10]`. Coincident points exert no force
/// on each other.
pub fn resolve_collisions(
    initial: &[Position],
    plot: PlotSize,
    config: &CollisionConfig,
) -> CollisionOutcome {
    if initial.len() < MIN_POINTS_FOR_COLLISION {
        return CollisionOutcome {
            positions: initial.to_vec(),
            iterations: 0,
            converged: true,
        };
    }

    let clamp = |p: Position| Position {
        x: p.x.clamp(MARGIN_X, (plot.width - MARGIN_X).max(MARGIN_X)),
        y: p.y.clamp(MARGIN_Y, (plot.height - MARGIN_Y).max(MARGIN_Y)),
    };
    let mut positions: Vec<Position> = initial.iter().copied().map(clamp).collect();

    let mut iterations = 0;
    let mut converged = false;
    while iterations < config.max_iterations {
        iterations += 1;
        let mut moved = false;
        let mut total_movement = 0.0;

        for i in 0..positions.len() {
            let current = positions[i];
            let (force_x, force_y) = positions
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold((0.0, 0.0), |(fx, fy), (_, &other)| {
                    let distance = current.distance(other);
                    if distance <= 0.0 || distance >= config.min_distance {
                        return (fx, fy);
                    }
                    let force = (config.min_distance - distance) * config.repulsion_force;
                    (
                        fx + (current.x - other.x) / distance * force,
                        fy + (current.y - other.y) / distance * force,
                    )
                });

            let movement = force_x.hypot(force_y);
            if movement > MOVE_EPSILON {
                positions[i] = clamp(Position::new(current.x + force_x, current.y + force_y));
                moved = true;
                total_movement += movement;
            }
        }

        if !moved || total_movement < SETTLED_MOVEMENT {
            converged = true;
            break;
        }
    }

    tracing::debug!(
        "Anti-collision on {} points: {} iterations (converged: {})",
        positions.len(),
        iterations,
        converged
    );

    CollisionOutcome {
        positions,
        iterations,
        converged,
    }
}
