pub mod gpu;
pub mod hit;
pub mod paint;
pub mod record;
pub mod scene;
pub mod surface;
pub mod theme;

pub use gpu::VelloSurface;
pub use hit::{hit_test, hit_test_rect};
pub use paint::Drawable;
pub use scene::render_scene;
pub use surface::{Surface, Viewport};
pub use theme::RenderTheme;
