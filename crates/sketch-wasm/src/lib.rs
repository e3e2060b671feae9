//! WASM bridge: mounts the editor on an HTML `<canvas>`.
//!
//! Built with `wasm-pack build --target web`. The page forwards its pointer
//! (including cancel), drop, and resize events to [`SketchCanvas`]; the palette uses
//! [`drag_start_payload`] to fill the drag data.

mod render2d;

use render2d::Canvas2dSurface;
use sketch_core::{Bounds, NodeKind, Point};
use sketch_editor::{CanvasHost, DropPayload, Editor, EditorConfig, PointerId};
use sketch_render::{RenderTheme, Surface, Viewport};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Browser-side host: the canvas element plus its 2D context.
struct WebHost {
    canvas: HtmlCanvasElement,
    surface: Option<Canvas2dSurface>,
}

impl WebHost {
    fn new(canvas: HtmlCanvasElement) -> Self {
        let surface = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .map(Canvas2dSurface::new);
        if surface.is_none() {
            log::warn!("canvas has no 2d context, drawing disabled");
        }
        Self { canvas, surface }
    }
}

impl CanvasHost for WebHost {
    fn client_size(&self) -> Viewport {
        Viewport::new(
            self.canvas.client_width() as f32,
            self.canvas.client_height() as f32,
        )
    }

    fn bounding_rect(&self) -> Bounds {
        let rect = self.canvas.get_bounding_client_rect();
        Bounds::new(
            rect.x() as f32,
            rect.y() as f32,
            rect.width() as f32,
            rect.height() as f32,
        )
    }

    fn device_scale(&self) -> f32 {
        web_sys::window().map_or(1.0, |w| w.device_pixel_ratio() as f32)
    }

    fn backing_size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn surface(&mut self) -> Option<&mut dyn Surface> {
        self.surface.as_mut().map(|s| s as &mut dyn Surface)
    }

    fn set_pointer_capture(&mut self, pointer: PointerId) {
        if let Err(e) = self.canvas.set_pointer_capture(pointer) {
            log::debug!("set_pointer_capture({pointer}) failed: {e:?}");
        }
    }

    fn release_pointer_capture(&mut self, pointer: PointerId) {
        let _ = self.canvas.release_pointer_capture(pointer);
    }
}

/// The canvas editor as seen from JavaScript.
#[wasm_bindgen]
pub struct SketchCanvas {
    editor: Editor<WebHost>,
}

#[wasm_bindgen]
impl SketchCanvas {
    /// Mount on `canvas`. `config_json` is an optional partial
    /// `EditorConfig` object; invalid JSON is reported as an error.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        config_json: Option<String>,
    ) -> Result<SketchCanvas, JsValue> {
        console_error_panic_hook_setup();

        let config = match config_json.as_deref() {
            Some(json) => {
                EditorConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?
            }
            None => EditorConfig::default(),
        };
        Ok(Self {
            editor: Editor::with_config(WebHost::new(canvas), config),
        })
    }

    /// Pointer pressed. Coordinates are `clientX`/`clientY`.
    /// Returns `true` if the scene changed.
    pub fn handle_pointer_down(&mut self, client_x: f64, client_y: f64, pointer_id: i32) -> bool {
        self.editor
            .pointer_down(client_point(client_x, client_y), pointer_id)
    }

    pub fn handle_pointer_move(&mut self, client_x: f64, client_y: f64, pointer_id: i32) -> bool {
        self.editor
            .pointer_move(client_point(client_x, client_y), pointer_id)
    }

    pub fn handle_pointer_up(&mut self, client_x: f64, client_y: f64, pointer_id: i32) -> bool {
        self.editor
            .pointer_up(client_point(client_x, client_y), pointer_id)
    }

    /// Forward `pointercancel` and `lostpointercapture` here.
    pub fn handle_pointer_cancel(&mut self, pointer_id: i32) -> bool {
        self.editor.pointer_cancel(pointer_id)
    }

    /// A palette item dropped on the canvas. `payload` is the drag data
    /// read under `drop_data_format()`. Returns the new node's id.
    pub fn handle_drop(
        &mut self,
        client_x: f64,
        client_y: f64,
        payload: Option<String>,
    ) -> Option<String> {
        self.editor
            .handle_drop(client_point(client_x, client_y), payload.as_deref())
            .map(|id| id.as_str().to_string())
    }

    /// Call when the canvas's displayed size or the device pixel ratio changes.
    pub fn resize(&mut self) {
        self.editor.resize();
    }

    pub fn render(&mut self) {
        self.editor.render();
    }

    pub fn set_theme(&mut self, is_dark: bool) {
        let theme = if is_dark {
            RenderTheme::dark()
        } else {
            RenderTheme::light()
        };
        self.editor.set_theme(theme);
    }

    pub fn node_count(&self) -> usize {
        self.editor.nodes().count()
    }

    pub fn selected_id(&self) -> Option<String> {
        self.editor.selected().map(|n| n.id().as_str().to_string())
    }

    /// Interaction mode: `"idle"`, `"selecting"`, or `"dragging"`.
    pub fn mode(&self) -> String {
        self.editor.interaction_state().name().to_string()
    }

    /// Full editor state as JSON, for UI layers that mirror the node list.
    pub fn snapshot_json(&self) -> String {
        self.editor.snapshot().to_json()
    }
}

fn client_point(x: f64, y: f64) -> Point {
    Point::new(x as f32, y as f32)
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("sketch panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

// ─── Palette helpers (no canvas needed) ──────────────────────────────────

/// Drag data for a palette item of the given shape type, or `None` if the
/// type is blank.
#[wasm_bindgen]
pub fn drag_start_payload(shape_type: &str) -> Option<String> {
    NodeKind::from_token(shape_type).map(|kind| DropPayload::new(&kind).encode())
}

/// Format key to store [`drag_start_payload`] under in `DataTransfer`.
#[wasm_bindgen]
pub fn drop_data_format() -> String {
    sketch_editor::DROP_DATA_FORMAT.to_string()
}
