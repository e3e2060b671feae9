//! The drawing capability every backend implements.
//!
//! Rectangles handed to a surface are always normalized.

use sketch_core::{Bounds, Color};

/// A 2D drawing target: a browser canvas context, a Vello scene, or a
/// recorder in tests.
pub trait Surface {
    /// Erase `rect` back to transparent.
    fn clear_rect(&mut self, rect: Bounds);

    fn fill_rect(&mut self, rect: Bounds, color: Color);

    fn stroke_rect(&mut self, rect: Bounds, color: Color, line_width: f32);

    /// Drop any accumulated transform (scale, translation).
    fn reset_transform(&mut self);
}

/// Size of the visible drawing area, in backing-store pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(0.0, 0.0, self.width, self.height)
    }
}
