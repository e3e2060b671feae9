//! Input abstraction layer.
//!
//! Normalizes the host's pointer, drop, and resize notifications into a
//! single `InputEvent` enum consumed by the editor. Positions are client
//! (CSS pixel) coordinates; the editor maps them onto the drawing surface.

/// Platform pointer id (mouse, pen, or a single touch contact).
pub type PointerId = i32;

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start, pen contact).
    PointerDown { x: f32, y: f32, pointer_id: PointerId },

    /// Pointer moved.
    PointerMove { x: f32, y: f32, pointer_id: PointerId },

    /// Pointer released.
    PointerUp { x: f32, y: f32, pointer_id: PointerId },

    /// The platform cancelled the pointer or took its capture away
    /// (`pointercancel`, `lostpointercapture`). No pointer-up will follow.
    PointerCancel { pointer_id: PointerId },

    /// A palette item was dropped. `payload` is the raw drag data, if any.
    Drop {
        x: f32,
        y: f32,
        payload: Option<String>,
    },

    /// The surface's displayed size (or device scale) changed.
    Resize,
}

impl InputEvent {
    pub fn pointer_down(x: f32, y: f32, pointer_id: PointerId) -> Self {
        Self::PointerDown { x, y, pointer_id }
    }

    pub fn pointer_move(x: f32, y: f32, pointer_id: PointerId) -> Self {
        Self::PointerMove { x, y, pointer_id }
    }

    pub fn pointer_up(x: f32, y: f32, pointer_id: PointerId) -> Self {
        Self::PointerUp { x, y, pointer_id }
    }
}
