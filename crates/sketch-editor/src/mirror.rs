//! One-way projection of editor state for external consumers.
//!
//! The editor pushes a [`SceneSnapshot`] to every registered listener after
//! each mutation. Listeners never hold references into the editor.

use crate::interaction::{DragState, Interaction};
use serde::Serialize;
use sketch_core::{Node, NodeCollection, NodeId, NodeKind, SelectionRect};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSnapshot {
    pub id: NodeId,
    pub kind: NodeKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Hex fill color.
    pub fill: String,
    pub index: usize,
    pub selected: bool,
}

impl From<&Node> for NodeSnapshot {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id(),
            kind: node.kind().clone(),
            x: node.x(),
            y: node.y(),
            width: node.width(),
            height: node.height(),
            fill: node.fill().to_hex(),
            index: node.index(),
            selected: node.is_selected(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSnapshot {
    pub nodes: Vec<NodeSnapshot>,
    pub selected: Option<NodeId>,
    pub mode: &'static str,
    pub drag: Option<DragState>,
    pub selection_rect: Option<SelectionRect>,
}

impl SceneSnapshot {
    pub fn capture(nodes: &NodeCollection, interaction: &Interaction) -> Self {
        Self {
            nodes: nodes.iter().map(NodeSnapshot::from).collect(),
            selected: nodes.selected().map(Node::id),
            mode: interaction.state().name(),
            drag: interaction.drag_state(),
            selection_rect: interaction.selection_rect().copied(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Receives a snapshot after every editor mutation.
pub trait SceneListener {
    fn scene_changed(&mut self, snapshot: &SceneSnapshot);
}

impl<L: SceneListener> SceneListener for Rc<RefCell<L>> {
    fn scene_changed(&mut self, snapshot: &SceneSnapshot) {
        self.borrow_mut().scene_changed(snapshot);
    }
}

/// Read-only node list kept in step with the editor.
#[derive(Debug, Default)]
pub struct NodeMirror {
    nodes: Vec<NodeSnapshot>,
    notifications: usize,
}

impl NodeMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle: register a clone with the editor, read through the other.
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeSnapshot> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn get_many(&self, ids: &[NodeId]) -> Vec<&NodeSnapshot> {
        self.nodes.iter().filter(|n| ids.contains(&n.id)).collect()
    }

    pub fn all(&self) -> &[NodeSnapshot] {
        &self.nodes
    }

    pub fn count(&self) -> usize {
        self.nodes.len()
    }

    /// How many snapshots have been received.
    pub fn notifications(&self) -> usize {
        self.notifications
    }
}

impl SceneListener for NodeMirror {
    fn scene_changed(&mut self, snapshot: &SceneSnapshot) {
        self.nodes.clone_from(&snapshot.nodes);
        self.notifications += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sketch_core::{Color, Point};

    #[test]
    fn snapshot_serializes_camel_case() {
        let mut nodes = NodeCollection::new();
        let node = Node::with_id(
            NodeId::intern("seed"),
            NodeKind::Rectangle,
            sketch_core::Bounds::new(0.0, 0.0, 100.0, 100.0),
            Color::BLACK,
        );
        nodes.add(node);
        let mut interaction = Interaction::default();
        interaction.pointer_down(&mut nodes, Point::new(500.0, 500.0));

        let json = SceneSnapshot::capture(&nodes, &interaction).to_json();
        assert_eq!(
            json,
            concat!(
                r##"{"nodes":[{"id":"seed","kind":"rectangle","x":0.0,"y":0.0,"width":100.0,"height":100.0,"##,
                r##""fill":"#000000","index":0,"selected":false}],"selected":null,"mode":"selecting","##,
                r##""drag":{"node":null,"offset":{"x":0.0,"y":0.0}},"##,
                r##""selectionRect":{"startX":500.0,"startY":500.0,"endX":500.0,"endY":500.0}}"##
            )
        );
    }

    #[test]
    fn mirror_tracks_snapshots() {
        let mut nodes = NodeCollection::new();
        let a = Node::default_sized(NodeKind::Rectangle, Point::ZERO, Color::BLACK);
        let b = Node::default_sized(NodeKind::Rectangle, Point::new(9.0, 9.0), Color::RED);
        let (a_id, b_id) = (a.id(), b.id());
        nodes.add(a);
        nodes.add(b);

        let mirror = NodeMirror::shared();
        let mut listener = mirror.clone();
        listener.scene_changed(&SceneSnapshot::capture(&nodes, &Interaction::default()));

        let mirror = mirror.borrow();
        assert_eq!(mirror.count(), 2);
        assert_eq!(mirror.notifications(), 1);
        assert_eq!(mirror.get(b_id).map(|n| n.fill.as_str()), Some("#FF0000"));
        assert_eq!(mirror.get_many(&[b_id, a_id]).len(), 2);
        assert!(mirror.get(NodeId::intern("nope")).is_none());
    }
}
