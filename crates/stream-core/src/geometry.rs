// File: crates/stream-core/src/geometry.rs
// Summary: Plot-area rectangle and data-to-pixel mapping.

use crate::axis::Axis;
use crate::types::Insets;

/// Pixel rectangle of the plotting area inside the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotArea {
    /// Surface minus insets; collapses to a 1px area rather than inverting.
    pub fn from_insets(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as f32;
        let top = insets.top as f32;
        let right = (width as f32 - insets.right as f32).max(left + 1.0);
        let bottom = (height as f32 - insets.bottom as f32).max(top + 1.0);
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> f32 { self.right - self.left }

    pub fn height(&self) -> f32 { self.bottom - self.top }

    #[inline]
    pub fn x_px(&self, axis: &Axis, x: f64) -> f32 {
        self.left + ((x - axis.min) / axis.span()) as f32 * self.width()
    }

    #[inline]
    pub fn y_px(&self, axis: &Axis, y: f64) -> f32 {
        self.bottom - ((y - axis.min) / axis.span()) as f32 * self.height()
    }
}
