//! Ordered node collection.
//!
//! Insertion order is paint order: the last node is drawn on top and wins
//! hit tests. Ids are unique; `add` refuses a duplicate id.

use crate::id::NodeId;
use crate::node::Node;
use smallvec::SmallVec;

#[derive(Debug, Clone, Default)]
pub struct NodeCollection {
    nodes: Vec<Node>,
}

impl NodeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node, assigning its index to the current length.
    /// Returns `false` (and leaves the collection untouched) if the id is taken.
    pub fn add(&mut self, mut node: Node) -> bool {
        if self.contains(node.id()) {
            log::debug!("add: {} already present, ignored", node.id());
            return false;
        }
        node.set_index(self.nodes.len());
        self.nodes.push(node);
        true
    }

    /// Remove the node with this id. Returns the removed node, if any.
    pub fn remove(&mut self, id: NodeId) -> Option<Node> {
        let pos = self.position(id)?;
        Some(self.nodes.remove(pos))
    }

    /// Replace the node with the same id in place, keeping its index.
    /// Returns `false` if absent.
    pub fn update(&mut self, mut node: Node) -> bool {
        match self.position(node.id()) {
            Some(pos) => {
                node.set_index(self.nodes[pos].index());
                self.nodes[pos] = node;
                true
            }
            None => false,
        }
    }

    pub fn find(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    pub fn find_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id() == id)
    }

    /// Nodes whose id is listed, in collection order.
    pub fn find_many(&self, ids: &[NodeId]) -> SmallVec<[&Node; 4]> {
        self.nodes.iter().filter(|n| ids.contains(&n.id())).collect()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.position(id).is_some()
    }

    pub fn all(&self) -> &[Node] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Node> {
        self.nodes.iter_mut()
    }

    pub fn count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node with its selection flag set.
    pub fn selected(&self) -> Option<&Node> {
        self.nodes.iter().find(|n| n.is_selected())
    }

    pub fn deselect_all(&mut self) {
        for node in &mut self.nodes {
            node.set_selected(false);
        }
    }

    fn position(&self, id: NodeId) -> Option<usize> {
        self.nodes.iter().position(|n| n.id() == id)
    }
}

impl<'a> IntoIterator for &'a NodeCollection {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
