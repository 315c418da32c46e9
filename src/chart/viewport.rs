//! Zoom and pan transform applied on top of a computed layout.
//!
//! The viewport never feeds back into the layout: a renderer draws the layout
//! under `translate(tx, ty) scale(s)`.

use serde::Serialize;

pub const MIN_SCALE: f64 = 0.5;
pub const MAX_SCALE: f64 = 5.0;
/// Scale factor for one zoom button press.
const BUTTON_ZOOM: f64 = 1.2;
const WHEEL_ZOOM_IN: f64 = 1.1;
const WHEEL_ZOOM_OUT: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    /// Wheel zoom is ignored until the chart has been activated
    pub active: bool,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            active: false,
        }
    }
}

impl Viewport {
    pub const fn activate(&mut self) {
        self.active = true;
    }

    pub const fn deactivate(&mut self) {
        self.active = false;
    }

    /// Zoom by one wheel notch around the cursor, in plot coordinates.
    ///
    /// A negative `delta_y` (wheel up) zooms in. Does nothing while inactive.
    pub fn wheel(&mut self, delta_y: f64, cursor_x: f64, cursor_y: f64) {
        if !self.active {
            return;
        }
        let factor = if delta_y < 0.0 {
            WHEEL_ZOOM_IN
        } else {
            WHEEL_ZOOM_OUT
        };
        let new_scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        let ratio = new_scale / self.scale;
        self.scale = new_scale;
        self.translate_x -= cursor_x * (ratio - 1.0);
        self.translate_y -= cursor_y * (ratio - 1.0);
    }

    pub fn zoom_in(&mut self) {
        self.scale = (self.scale * BUTTON_ZOOM).min(MAX_SCALE);
    }

    pub fn zoom_out(&mut self) {
        self.scale = (self.scale / BUTTON_ZOOM).max(MIN_SCALE);
    }

    /// Drag the view by a pointer delta.
    pub fn pan(&mut self, delta_x: f64, delta_y: f64) {
        self.translate_x += delta_x;
        self.translate_y += delta_y;
    }

    /// Back to identity, keeping the activation state.
    pub fn reset(&mut self) {
        *self = Self {
            active: self.active,
            ..Self::default()
        };
    }

    /// Screen position of a layout position.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.scale.mul_add(x, self.translate_x),
            self.scale.mul_add(y, self.translate_y),
        )
    }

    /// Zoom level as a rounded percentage, e.g. 120.
    pub fn zoom_percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }
}
