//! Pointer interaction state machine.
//!
//! Translates pointer events (already in surface coordinates) into selection,
//! drag-move, and rubber-band selection.
//!
//! | State       | pointer-down        | pointer-move        | pointer-up            |
//! |-------------|---------------------|---------------------|-----------------------|
//! | `Idle`      | hit → `Dragging`, miss → `Selecting` | no-op | release capture     |
//! | `Selecting` | restart             | extend rectangle    | finalize, → `Idle`    |
//! | `Dragging`  | restart             | move node           | deselect, → `Idle`    |
//!
//! A cancelled pointer (`pointer_cancel`) ends the gesture like pointer-up,
//! except that a rubber band keeps its last tracked end.
//!
//! At most one node is selected at a time: every pointer-down deselects all
//! nodes before selecting the hit one.

use serde::Serialize;
use sketch_core::{NodeCollection, NodeId, Point, SelectionRect};
use sketch_render::hit_test;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionState {
    Idle,
    /// Rubber-band selection in progress.
    Selecting,
    /// A node is being moved. `offset` is pointer-down position minus the
    /// node's origin, fixed for the whole drag.
    Dragging { node: NodeId, offset: Point },
}

impl InteractionState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Selecting => "selecting",
            Self::Dragging { .. } => "dragging",
        }
    }
}

/// Externally visible drag state. `node: None` means rubber-band mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DragState {
    pub node: Option<NodeId>,
    pub offset: Point,
}

/// What the host should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    Keep,
    Acquire,
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    pub redraw: bool,
    pub capture: Capture,
}

impl Response {
    const NONE: Response = Response {
        redraw: false,
        capture: Capture::Keep,
    };
}

#[derive(Debug, Clone)]
pub struct Interaction {
    state: InteractionState,
    selection: Option<SelectionRect>,
    deselect_after_drag: bool,
}

impl Default for Interaction {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Interaction {
    pub fn new(deselect_after_drag: bool) -> Self {
        Self {
            state: InteractionState::Idle,
            selection: None,
            deselect_after_drag,
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// The rubber-band rectangle. Kept after pointer-up until the next
    /// pointer-down.
    pub fn selection_rect(&self) -> Option<&SelectionRect> {
        self.selection.as_ref()
    }

    pub fn drag_state(&self) -> Option<DragState> {
        match self.state {
            InteractionState::Idle => None,
            InteractionState::Selecting => Some(DragState {
                node: None,
                offset: Point::ZERO,
            }),
            InteractionState::Dragging { node, offset } => Some(DragState {
                node: Some(node),
                offset,
            }),
        }
    }

    pub fn pointer_down(&mut self, nodes: &mut NodeCollection, p: Point) -> Response {
        nodes.deselect_all();

        let hit = hit_test(nodes, p).and_then(|id| nodes.find_mut(id));
        match hit {
            Some(node) => {
                node.set_selected(true);
                let offset = p - node.origin();
                log::debug!("drag start {} offset ({}, {})", node.id(), offset.x, offset.y);
                self.state = InteractionState::Dragging {
                    node: node.id(),
                    offset,
                };
                self.selection = None;
            }
            None => {
                log::debug!("rubber band start at ({}, {})", p.x, p.y);
                self.state = InteractionState::Selecting;
                self.selection = Some(SelectionRect::anchored(p));
            }
        }

        Response {
            redraw: true,
            capture: Capture::Acquire,
        }
    }

    pub fn pointer_move(&mut self, nodes: &mut NodeCollection, p: Point) -> Response {
        match self.state {
            InteractionState::Dragging { node, offset } => {
                let Some(node) = nodes.find_mut(node) else {
                    return Response::NONE;
                };
                node.set_origin(p - offset);
                Response {
                    redraw: true,
                    capture: Capture::Keep,
                }
            }
            InteractionState::Selecting => {
                if let Some(rect) = self.selection.as_mut() {
                    rect.set_end(p);
                }
                Response {
                    redraw: true,
                    capture: Capture::Keep,
                }
            }
            InteractionState::Idle => Response::NONE,
        }
    }

    pub fn pointer_up(&mut self, nodes: &mut NodeCollection, p: Point) -> Response {
        let redraw = match self.state {
            InteractionState::Dragging { node, .. } => {
                if self.deselect_after_drag
                    && let Some(node) = nodes.find_mut(node)
                {
                    node.set_selected(false);
                }
                log::debug!("drag end {node}");
                true
            }
            InteractionState::Selecting => {
                if let Some(rect) = self.selection.as_mut() {
                    rect.set_end(p);
                }
                log::debug!("rubber band end at ({}, {})", p.x, p.y);
                true
            }
            InteractionState::Idle => false,
        };
        self.state = InteractionState::Idle;

        Response {
            redraw,
            capture: Capture::Release,
        }
    }

    /// The platform abandoned the gesture (touch cancel, lost capture).
    /// Ends any drag or rubber band where it stands and releases capture.
    pub fn pointer_cancel(&mut self, nodes: &mut NodeCollection) -> Response {
        let redraw = match self.state {
            InteractionState::Dragging { node, .. } => {
                if self.deselect_after_drag
                    && let Some(node) = nodes.find_mut(node)
                {
                    node.set_selected(false);
                }
                log::debug!("drag cancelled {node}");
                true
            }
            InteractionState::Selecting => {
                log::debug!("rubber band cancelled");
                true
            }
            InteractionState::Idle => false,
        };
        self.state = InteractionState::Idle;

        Response {
            redraw,
            capture: Capture::Release,
        }
    }

    /// Drop any reference to a node that left the collection.
    pub fn forget(&mut self, id: NodeId) {
        if let InteractionState::Dragging { node, .. } = self.state
            && node == id
        {
            self.state = InteractionState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sketch_core::{Bounds, Color, Node, NodeKind};

    fn scene() -> (NodeCollection, NodeId) {
        let mut nodes = NodeCollection::new();
        let node = Node::default_sized(NodeKind::Rectangle, Point::ZERO, Color::BLACK);
        let id = node.id();
        nodes.add(node);
        (nodes, id)
    }

    #[test]
    fn press_on_node_starts_drag() {
        let (mut nodes, id) = scene();
        let mut it = Interaction::default();

        let resp = it.pointer_down(&mut nodes, Point::new(20.0, 20.0));

        assert_eq!(resp.capture, Capture::Acquire);
        assert_eq!(
            it.state(),
            InteractionState::Dragging {
                node: id,
                offset: Point::new(20.0, 20.0)
            }
        );
        assert!(nodes.find(id).unwrap().is_selected());
        assert!(it.selection_rect().is_none());
    }

    #[test]
    fn drag_moves_by_fixed_offset() {
        let (mut nodes, id) = scene();
        let mut it = Interaction::default();
        it.pointer_down(&mut nodes, Point::new(20.0, 20.0));

        it.pointer_move(&mut nodes, Point::new(40.0, 45.0));
        assert_eq!(nodes.find(id).unwrap().origin(), Point::new(20.0, 25.0));

        let resp = it.pointer_up(&mut nodes, Point::new(40.0, 45.0));
        assert_eq!(resp.capture, Capture::Release);
        assert_eq!(it.state(), InteractionState::Idle);
        let node = nodes.find(id).unwrap();
        assert!(!node.is_selected());
        assert_eq!(node.origin(), Point::new(20.0, 25.0));
    }

    #[test]
    fn drag_origin_independent_of_move_order() {
        let moves = [
            Point::new(90.0, 10.0),
            Point::new(-30.0, 400.0),
            Point::new(55.5, 55.5),
        ];
        let start = Point::new(30.0, 70.0);
        for perm in [[0, 1, 2], [2, 0, 1], [1, 2, 0]] {
            let (mut nodes, id) = scene();
            let origin = nodes.find(id).unwrap().origin();
            let mut it = Interaction::default();
            it.pointer_down(&mut nodes, start);
            for i in perm {
                it.pointer_move(&mut nodes, moves[i]);
                let expected = moves[i] - (start - origin);
                assert_eq!(nodes.find(id).unwrap().origin(), expected);
            }
        }
    }

    #[test]
    fn press_on_empty_space_starts_rubber_band() {
        let (mut nodes, _) = scene();
        let mut it = Interaction::default();

        it.pointer_down(&mut nodes, Point::new(150.0, 150.0));
        assert_eq!(it.state(), InteractionState::Selecting);
        assert_eq!(
            it.drag_state(),
            Some(DragState {
                node: None,
                offset: Point::ZERO
            })
        );

        it.pointer_move(&mut nodes, Point::new(200.0, 180.0));
        assert_eq!(
            it.selection_rect().map(SelectionRect::bounds),
            Some(Bounds::new(150.0, 150.0, 50.0, 30.0))
        );

        it.pointer_up(&mut nodes, Point::new(200.0, 180.0));
        assert_eq!(it.state(), InteractionState::Idle);
        assert_eq!(
            it.selection_rect().map(SelectionRect::bounds),
            Some(Bounds::new(150.0, 150.0, 50.0, 30.0))
        );
    }

    #[test]
    fn press_on_empty_space_deselects() {
        let (mut nodes, id) = scene();
        let mut it = Interaction::new(false);
        it.pointer_down(&mut nodes, Point::new(10.0, 10.0));
        it.pointer_up(&mut nodes, Point::new(10.0, 10.0));
        assert!(nodes.find(id).unwrap().is_selected());

        it.pointer_down(&mut nodes, Point::new(500.0, 500.0));
        assert!(!nodes.find(id).unwrap().is_selected());
    }

    #[test]
    fn pressing_a_node_clears_old_rubber_band() {
        let (mut nodes, _) = scene();
        let mut it = Interaction::default();
        it.pointer_down(&mut nodes, Point::new(300.0, 300.0));
        it.pointer_up(&mut nodes, Point::new(350.0, 350.0));
        assert!(it.selection_rect().is_some());

        it.pointer_down(&mut nodes, Point::new(50.0, 50.0));
        assert!(it.selection_rect().is_none());
    }

    #[test]
    fn idle_move_is_noop() {
        let (mut nodes, id) = scene();
        let mut it = Interaction::default();
        let resp = it.pointer_move(&mut nodes, Point::new(20.0, 20.0));
        assert_eq!(resp, Response::NONE);
        assert_eq!(nodes.find(id).unwrap().origin(), Point::ZERO);
    }

    #[test]
    fn idle_up_only_releases() {
        let (mut nodes, _) = scene();
        let mut it = Interaction::default();
        let resp = it.pointer_up(&mut nodes, Point::ZERO);
        assert!(!resp.redraw);
        assert_eq!(resp.capture, Capture::Release);
    }

    #[test]
    fn overlapping_press_picks_topmost() {
        let (mut nodes, bottom) = scene();
        let top = Node::default_sized(NodeKind::Rectangle, Point::new(50.0, 50.0), Color::RED);
        let top_id = top.id();
        nodes.add(top);
        let mut it = Interaction::default();

        it.pointer_down(&mut nodes, Point::new(75.0, 75.0));

        assert!(nodes.find(top_id).unwrap().is_selected());
        assert!(!nodes.find(bottom).unwrap().is_selected());
    }

    #[test]
    fn cancel_ends_drag_in_place() {
        let (mut nodes, id) = scene();
        let mut it = Interaction::default();
        it.pointer_down(&mut nodes, Point::new(20.0, 20.0));
        it.pointer_move(&mut nodes, Point::new(30.0, 30.0));

        let resp = it.pointer_cancel(&mut nodes);

        assert_eq!(
            resp,
            Response {
                redraw: true,
                capture: Capture::Release
            }
        );
        assert_eq!(it.state(), InteractionState::Idle);
        let node = nodes.find(id).unwrap();
        assert_eq!(node.origin(), Point::new(10.0, 10.0));
        assert!(!node.is_selected());
    }

    #[test]
    fn cancel_keeps_rubber_band_at_last_end() {
        let (mut nodes, _) = scene();
        let mut it = Interaction::default();
        it.pointer_down(&mut nodes, Point::new(150.0, 150.0));
        it.pointer_move(&mut nodes, Point::new(200.0, 180.0));

        it.pointer_cancel(&mut nodes);

        assert_eq!(it.state(), InteractionState::Idle);
        assert_eq!(
            it.selection_rect().map(SelectionRect::bounds),
            Some(Bounds::new(150.0, 150.0, 50.0, 30.0))
        );
    }

    #[test]
    fn forget_stops_drag_of_removed_node() {
        let (mut nodes, id) = scene();
        let mut it = Interaction::default();
        it.pointer_down(&mut nodes, Point::new(5.0, 5.0));
        nodes.remove(id);
        it.forget(id);
        assert_eq!(it.state(), InteractionState::Idle);
        assert_eq!(it.pointer_move(&mut nodes, Point::new(9.0, 9.0)), Response::NONE);
    }
}
