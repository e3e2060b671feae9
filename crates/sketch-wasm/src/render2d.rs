//! Canvas2D drawing surface.
//!
//! Forwards the renderer's primitive calls to an HTML `<canvas>` through
//! `CanvasRenderingContext2d`.

use sketch_core::{Bounds, Color};
use sketch_render::Surface;
use web_sys::CanvasRenderingContext2d;

pub struct Canvas2dSurface {
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for Canvas2dSurface {
    fn clear_rect(&mut self, rect: Bounds) {
        let (x, y, w, h) = rect_f64(rect);
        self.ctx.clear_rect(x, y, w, h);
    }

    fn fill_rect(&mut self, rect: Bounds, color: Color) {
        let (x, y, w, h) = rect_f64(rect);
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.fill_rect(x, y, w, h);
    }

    fn stroke_rect(&mut self, rect: Bounds, color: Color, line_width: f32) {
        let (x, y, w, h) = rect_f64(rect);
        self.ctx.set_stroke_style_str(&css_color(color));
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke_rect(x, y, w, h);
    }

    fn reset_transform(&mut self) {
        let _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    }
}

fn rect_f64(rect: Bounds) -> (f64, f64, f64, f64) {
    (
        rect.x as f64,
        rect.y as f64,
        rect.width as f64,
        rect.height as f64,
    )
}

/// CSS color string: hex when opaque, `rgba()` otherwise.
fn css_color(color: Color) -> String {
    if color.a >= 1.0 {
        return color.to_hex();
    }
    let [r, g, b, _] = color.to_rgba8();
    format!("rgba({r}, {g}, {b}, {})", color.a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn opaque_colors_use_hex() {
        assert_eq!(css_color(Color::BLACK), "#000000");
        assert_eq!(css_color(Color::RED), "#FF0000");
    }

    #[test]
    fn translucent_colors_use_rgba() {
        assert_eq!(
            css_color(Color::from_rgba8(100, 150, 255, 0.5)),
            "rgba(100, 150, 255, 0.5)"
        );
    }
}
