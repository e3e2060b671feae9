//! Vello backend: records draw calls into a `vello::Scene`.
//!
//! The caller owns the wgpu device and presents the scene; this type only
//! builds it. Coordinates arrive in backing-store pixels. A clear resets the scene, since every frame is a full redraw.

use crate::surface::Surface;
use kurbo::{Affine, Rect, Stroke};
use peniko::Fill;
use sketch_core::{Bounds, Color};
use vello::Scene;

pub struct VelloSurface {
    scene: Scene,
}

impl Default for VelloSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloSurface {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}

impl Surface for VelloSurface {
    fn clear_rect(&mut self, _rect: Bounds) {
        self.scene.reset();
    }

    fn fill_rect(&mut self, rect: Bounds, color: Color) {
        self.scene
            .fill(Fill::NonZero, Affine::IDENTITY, to_peniko(color), None, &to_kurbo(rect));
    }

    fn stroke_rect(&mut self, rect: Bounds, color: Color, line_width: f32) {
        let stroke = Stroke::new(line_width as f64);
        self.scene
            .stroke(&stroke, Affine::IDENTITY, to_peniko(color), None, &to_kurbo(rect));
    }

    /// Geometry is already in backing-store pixels, so the scene is always
    /// drawn untransformed.
    fn reset_transform(&mut self) {}
}

fn to_kurbo(b: Bounds) -> Rect {
    Rect::new(
        b.x as f64,
        b.y as f64,
        (b.x + b.width) as f64,
        (b.y + b.height) as f64,
    )
}

fn to_peniko(c: Color) -> peniko::Color {
    let [r, g, b, a] = c.to_rgba8();
    peniko::Color::from_rgba8(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::render_scene;
    use crate::surface::Viewport;
    use crate::theme::RenderTheme;
    use sketch_core::{Node, NodeCollection, NodeKind, Point};

    #[test]
    fn full_redraw_resets_scene() {
        let mut nodes = NodeCollection::new();
        nodes.add(Node::default_sized(NodeKind::Rectangle, Point::ZERO, Color::BLACK));
        let mut surface = VelloSurface::new();
        let viewport = Viewport::new(200.0, 200.0);

        render_scene(&mut surface, &mut nodes, None, viewport, &RenderTheme::light());
        assert!(!surface.scene().encoding().is_empty());

        nodes.remove(nodes.all()[0].id());
        render_scene(&mut surface, &mut nodes, None, viewport, &RenderTheme::light());
        assert!(surface.scene().encoding().is_empty());
    }

    #[test]
    fn rect_conversion_spans_corners() {
        let r = to_kurbo(Bounds::new(10.0, 20.0, 30.0, 40.0));
        assert_eq!((r.x0, r.y0, r.x1, r.y1), (10.0, 20.0, 40.0, 60.0));
    }
}
