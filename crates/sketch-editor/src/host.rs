//! Mount contract between the editor and whatever displays the canvas.

use crate::input::PointerId;
use sketch_core::Bounds;
use sketch_render::{Surface, Viewport};

/// The drawing-surface handle supplied once at editor construction.
pub trait CanvasHost {
    /// Displayed size in client (CSS) pixels.
    fn client_size(&self) -> Viewport;

    /// On-screen rectangle of the surface, in client pixels.
    fn bounding_rect(&self) -> Bounds;

    /// Device pixels per client pixel.
    fn device_scale(&self) -> f32;

    /// Current backing-store resolution.
    fn backing_size(&self) -> (u32, u32);

    fn set_backing_size(&mut self, width: u32, height: u32);

    /// The 2D drawing context. `None` turns every draw into a no-op.
    fn surface(&mut self) -> Option<&mut dyn Surface>;

    /// Route all further events of `pointer` to this surface.
    fn set_pointer_capture(&mut self, pointer: PointerId);

    fn release_pointer_capture(&mut self, pointer: PointerId);
}
