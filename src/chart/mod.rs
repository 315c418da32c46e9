//! Scatter chart geometry.
//!
//! Points are names, X is a mention rate (percent, linear) and Y is the
//! number of candidates (log10). The engine is a pure function of the view
//! and the chart settings; [`Viewport`] applies zoom and pan on top of it.

// Module declarations
pub mod collision;
pub mod layout;
pub mod memo;
pub mod points;
pub mod scale;
pub mod ticks;
pub mod viewport;

// Public re-exports
pub use collision::{CollisionConfig, CollisionOutcome, Position, resolve_collisions};
pub use layout::{ChartConfig, ChartLayout, SHOW_LABELS_THRESHOLD};
pub use points::{ChartPoint, PositionedPoint, chart_points};
pub use scale::{Bounds, ChartScales, PlotSize};
pub use ticks::{Ticks, x_ticks, y_ticks};
pub use viewport::Viewport;
