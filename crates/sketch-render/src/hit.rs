//! Hit testing: point → node lookup.
//!
//! Walks the collection back to front (last painted = topmost), refreshing
//! each node's region from its current geometry before testing it.

use sketch_core::{Bounds, NodeCollection, NodeId, Point};
use smallvec::SmallVec;

/// Find the topmost node at `p`. Returns `None` on empty canvas.
pub fn hit_test(nodes: &mut NodeCollection, p: Point) -> Option<NodeId> {
    nodes
        .iter_mut()
        .rev()
        .find_map(|node| node.hit(p).then(|| node.id()))
}

/// All nodes whose region intersects `rect`, in paint order.
/// `rect` may have negative size; it is normalized first.
pub fn hit_test_rect(nodes: &mut NodeCollection, rect: Bounds) -> SmallVec<[NodeId; 8]> {
    let rect = rect.normalized();
    nodes
        .iter_mut()
        .filter_map(|node| node.refresh_region().intersects(&rect).then(|| node.id()))
        .collect()
}
