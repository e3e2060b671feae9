pub mod collection;
pub mod color;
pub mod geometry;
pub mod id;
pub mod node;

pub use collection::NodeCollection;
pub use color::Color;
pub use geometry::{Bounds, Point, SelectionRect};
pub use id::NodeId;
pub use node::{DEFAULT_NODE_SIZE, Node, NodeKind};
