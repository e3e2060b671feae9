//! A surface that records draw calls instead of rasterizing them.
//!
//! Lets the renderer and the editor be exercised without a GPU or browser.

use crate::surface::Surface;
use sketch_core::{Bounds, Color};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Bounds),
    Fill(Bounds, Color),
    Stroke(Bounds, Color, f32),
    ResetTransform,
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything recorded so far.
    pub fn take(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Ops recorded since the last `Clear`, i.e. the most recent frame.
    pub fn last_frame(&self) -> &[DrawOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, DrawOp::Clear(_)))
            .unwrap_or(0);
        &self.ops[start..]
    }

    pub fn clear_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Clear(_)))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear_rect(&mut self, rect: Bounds) {
        self.ops.push(DrawOp::Clear(rect));
    }

    fn fill_rect(&mut self, rect: Bounds, color: Color) {
        self.ops.push(DrawOp::Fill(rect, color));
    }

    fn stroke_rect(&mut self, rect: Bounds, color: Color, line_width: f32) {
        self.ops.push(DrawOp::Stroke(rect, color, line_width));
    }

    fn reset_transform(&mut self) {
        self.ops.push(DrawOp::ResetTransform);
    }
}
