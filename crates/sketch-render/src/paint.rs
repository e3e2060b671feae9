//! Node painting.

use crate::surface::Surface;
use crate::theme::RenderTheme;
use sketch_core::Node;

/// Anything that can paint itself onto a [`Surface`].
pub trait Drawable {
    fn draw(&mut self, surface: &mut dyn Surface, theme: &RenderTheme);
}

impl Drawable for Node {
    /// Fill, outline, then the selection highlight on top. Drawing refreshes
    /// the cached hit region.
    fn draw(&mut self, surface: &mut dyn Surface, theme: &RenderTheme) {
        let rect = self.refresh_region();
        log::trace!(
            "PAINT {} {} at ({}, {}) {}x{}",
            self.kind().as_str(),
            self.id(),
            rect.x,
            rect.y,
            rect.width,
            rect.height
        );

        if !self.fill().is_transparent() {
            surface.fill_rect(rect, self.fill());
        }
        surface.stroke_rect(rect, theme.outline, theme.outline_width);

        if self.is_selected() {
            surface.stroke_rect(rect, theme.highlight, theme.highlight_width);
        }
    }
}
