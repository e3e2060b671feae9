//! Client → drawing-surface coordinate mapping.
//!
//! The backing store is `client size × device scale`, so pointer positions
//! are scaled the same way to line up with node geometry and hit testing.

use sketch_core::{Bounds, Point};
use sketch_render::Viewport;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordMapper {
    scale: f32,
}

impl Default for CoordMapper {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl CoordMapper {
    /// Non-positive or non-finite scales fall back to 1.
    pub fn new(scale: f32) -> Self {
        let mut mapper = Self::default();
        mapper.set_scale(scale);
        mapper
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
    }

    /// Map a client position to surface coordinates, given the surface's
    /// on-screen rectangle.
    pub fn to_surface_point(&self, client: Point, surface_rect: Bounds) -> Point {
        Point::new(
            (client.x - surface_rect.x) * self.scale,
            (client.y - surface_rect.y) * self.scale,
        )
    }

    /// Backing-store resolution for a displayed size.
    pub fn backing_size(&self, client: Viewport) -> (u32, u32) {
        let scaled = |v: f32| (v.max(0.0) * self.scale).round() as u32;
        (scaled(client.width), scaled(client.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn subtracts_offset_then_scales() {
        let mapper = CoordMapper::new(2.0);
        let rect = Bounds::new(100.0, 50.0, 400.0, 300.0);
        assert_eq!(
            mapper.to_surface_point(Point::new(110.0, 60.0), rect),
            Point::new(20.0, 20.0)
        );
    }

    #[test]
    fn unit_scale_is_plain_offset() {
        let mapper = CoordMapper::default();
        let rect = Bounds::new(8.0, 8.0, 0.0, 0.0);
        assert_eq!(
            mapper.to_surface_point(Point::new(158.0, 158.0), rect),
            Point::new(150.0, 150.0)
        );
    }

    #[test]
    fn invalid_scale_falls_back_to_one() {
        assert_eq!(CoordMapper::new(0.0).scale(), 1.0);
        assert_eq!(CoordMapper::new(f32::NAN).scale(), 1.0);
        assert_eq!(CoordMapper::new(-3.0).scale(), 1.0);
    }

    #[test]
    fn backing_size_scales_client_size() {
        let mapper = CoordMapper::new(1.5);
        assert_eq!(mapper.backing_size(Viewport::new(800.0, 601.0)), (1200, 902));
    }
}
