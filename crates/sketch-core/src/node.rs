//! Canvas nodes: positioned, sized, selectable primitives.
//!
//! A node owns its geometry and a cached hit region. The region is the
//! normalized rectangle of the current geometry, so a node with negative
//! width or height hit-tests (and draws) as the mirrored rectangle.

use crate::color::Color;
use crate::geometry::{Bounds, Point};
use crate::id::NodeId;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Side length of nodes created without an explicit size.
pub const DEFAULT_NODE_SIZE: f32 = 100.0;

/// The shape type a node was created as. Every kind is drawn as a rectangle;
/// palette types without a dedicated variant keep their token in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Rectangle,
    Other(String),
}

impl NodeKind {
    /// Palette token → kind. Blank tokens yield `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            "" => None,
            "rectangle" | "rect" => Some(NodeKind::Rectangle),
            other => Some(NodeKind::Other(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Rectangle => "rectangle",
            NodeKind::Other(token) => token,
        }
    }
}

impl Serialize for NodeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NodeKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        NodeKind::from_token(&token).ok_or_else(|| de::Error::custom("empty shape type"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    kind: NodeKind,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    fill: Color,
    index: usize,
    selected: bool,
    region: Bounds,
}

impl Node {
    /// Create a node with a fresh id. The index is assigned when the node is
    /// added to a collection.
    pub fn new(kind: NodeKind, bounds: Bounds, fill: Color) -> Self {
        Self::with_id(NodeId::with_prefix(kind.as_str()), kind, bounds, fill)
    }

    pub fn with_id(id: NodeId, kind: NodeKind, bounds: Bounds, fill: Color) -> Self {
        let mut node = Self {
            id,
            kind,
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            fill,
            index: 0,
            selected: false,
            region: Bounds::default(),
        };
        node.refresh_region();
        node
    }

    /// A default-sized node with its top-left corner at `origin`.
    pub fn default_sized(kind: NodeKind, origin: Point, fill: Color) -> Self {
        Self::new(
            kind,
            Bounds::new(origin.x, origin.y, DEFAULT_NODE_SIZE, DEFAULT_NODE_SIZE),
            fill,
        )
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Raw geometry, possibly with negative size.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }

    pub fn set_x(&mut self, x: f32) {
        self.x = x;
        self.refresh_region();
    }

    pub fn set_y(&mut self, y: f32) {
        self.y = y;
        self.refresh_region();
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
        self.refresh_region();
    }

    pub fn set_height(&mut self, height: f32) {
        self.height = height;
        self.refresh_region();
    }

    pub fn set_origin(&mut self, p: Point) {
        self.x = p.x;
        self.y = p.y;
        self.refresh_region();
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn set_fill(&mut self, fill: Color) {
        self.fill = fill;
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Draw/hit-test rank. Higher is on top.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Recompute the cached hit region from the current geometry.
    pub fn refresh_region(&mut self) -> Bounds {
        self.region = self.bounds().normalized();
        self.region
    }

    /// The cached hit region as of the last refresh.
    pub fn region(&self) -> Bounds {
        self.region
    }

    /// Refresh the region, then test whether it contains `p`.
    pub fn hit(&mut self, p: Point) -> bool {
        self.refresh_region().contains(p)
    }
}
