//! Full-scene rendering.
//!
//! Every frame is a complete redraw: clear the visible area, paint nodes in
//! collection order, then the rubber-band rectangle on top.

use crate::paint::Drawable;
use crate::surface::{Surface, Viewport};
use crate::theme::RenderTheme;
use sketch_core::{NodeCollection, SelectionRect};

/// Render nodes and the optional selection rectangle to `surface`.
pub fn render_scene(
    surface: &mut dyn Surface,
    nodes: &mut NodeCollection,
    selection: Option<&SelectionRect>,
    viewport: Viewport,
    theme: &RenderTheme,
) {
    let area = viewport.bounds();
    surface.clear_rect(area);
    if let Some(bg) = theme.background {
        surface.fill_rect(area, bg);
    }

    for node in nodes.iter_mut() {
        node.draw(surface, theme);
    }

    if let Some(rect) = selection {
        draw_selection_rect(surface, rect, theme);
    }
}

fn draw_selection_rect(surface: &mut dyn Surface, rect: &SelectionRect, theme: &RenderTheme) {
    let bounds = rect.bounds();
    surface.fill_rect(bounds, theme.selection_fill);
    surface.stroke_rect(bounds, theme.selection_border, theme.selection_border_width);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{DrawOp, RecordingSurface};
    use pretty_assertions::assert_eq;
    use sketch_core::{Bounds, Color, Node, NodeKind, Point};

    const VIEWPORT: Viewport = Viewport::new(800.0, 600.0);

    #[test]
    fn clears_then_paints_in_order() {
        let mut nodes = NodeCollection::new();
        nodes.add(Node::default_sized(NodeKind::Rectangle, Point::ZERO, Color::BLACK));
        nodes.add(Node::default_sized(NodeKind::Rectangle, Point::new(50.0, 50.0), Color::RED));
        let mut surface = RecordingSurface::new();

        render_scene(&mut surface, &mut nodes, None, VIEWPORT, &RenderTheme::light());

        let theme = RenderTheme::light();
        assert_eq!(
            surface.ops,
            vec![
                DrawOp::Clear(Bounds::new(0.0, 0.0, 800.0, 600.0)),
                DrawOp::Fill(Bounds::new(0.0, 0.0, 100.0, 100.0), Color::BLACK),
                DrawOp::Stroke(Bounds::new(0.0, 0.0, 100.0, 100.0), theme.outline, 1.0),
                DrawOp::Fill(Bounds::new(50.0, 50.0, 100.0, 100.0), Color::RED),
                DrawOp::Stroke(Bounds::new(50.0, 50.0, 100.0, 100.0), theme.outline, 1.0),
            ]
        );
    }

    #[test]
    fn selected_node_gets_highlight() {
        let mut nodes = NodeCollection::new();
        let mut node = Node::default_sized(NodeKind::Rectangle, Point::ZERO, Color::BLACK);
        node.set_selected(true);
        nodes.add(node);
        let mut surface = RecordingSurface::new();
        let theme = RenderTheme::light();

        render_scene(&mut surface, &mut nodes, None, VIEWPORT, &theme);

        assert_eq!(
            surface.ops.last(),
            Some(&DrawOp::Stroke(
                Bounds::new(0.0, 0.0, 100.0, 100.0),
                theme.highlight,
                theme.highlight_width
            ))
        );
    }

    #[test]
    fn selection_rect_is_normalized_either_direction() {
        let theme = RenderTheme::light();
        let draw = |from: Point, to: Point| {
            let mut rect = SelectionRect::anchored(from);
            rect.set_end(to);
            let mut surface = RecordingSurface::new();
            render_scene(&mut surface, &mut NodeCollection::new(), Some(&rect), VIEWPORT, &theme);
            surface.take()
        };

        let forward = draw(Point::new(10.0, 10.0), Point::new(50.0, 50.0));
        let backward = draw(Point::new(50.0, 50.0), Point::new(10.0, 10.0));
        assert_eq!(forward, backward);
        assert_eq!(
            forward[1],
            DrawOp::Fill(Bounds::new(10.0, 10.0, 40.0, 40.0), theme.selection_fill)
        );
    }

    #[test]
    fn transparent_fill_skips_fill_call() {
        let mut nodes = NodeCollection::new();
        nodes.add(Node::default_sized(NodeKind::Rectangle, Point::ZERO, Color::TRANSPARENT));
        let mut surface = RecordingSurface::new();

        render_scene(&mut surface, &mut nodes, None, VIEWPORT, &RenderTheme::light());

        assert!(!surface.ops.iter().any(|op| matches!(op, DrawOp::Fill(..))));
    }

    #[test]
    fn dark_theme_paints_background() {
        let mut surface = RecordingSurface::new();
        let theme = RenderTheme::dark();
        render_scene(&mut surface, &mut NodeCollection::new(), None, VIEWPORT, &theme);
        assert_eq!(
            surface.ops[1],
            DrawOp::Fill(VIEWPORT.bounds(), theme.background.unwrap())
        );
    }
}
