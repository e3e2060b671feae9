//! The editor: owns the node collection and drives interaction and rendering.
//!
//! Every handler mutates state synchronously, then redraws the full scene and
//! notifies listeners. There is no deferred or batched redraw.

use crate::config::EditorConfig;
use crate::coords::CoordMapper;
use crate::host::CanvasHost;
use crate::input::{InputEvent, PointerId};
use crate::interaction::{Capture, DragState, Interaction, InteractionState, Response};
use crate::mirror::{SceneListener, SceneSnapshot};
use crate::payload::DropPayload;
use sketch_core::{Bounds, Node, NodeCollection, NodeId, NodeKind, Point, SelectionRect};
use sketch_render::{RenderTheme, Viewport, hit_test_rect, render_scene};

pub struct Editor<H: CanvasHost> {
    host: H,
    nodes: NodeCollection,
    interaction: Interaction,
    mapper: CoordMapper,
    config: EditorConfig,
    theme: RenderTheme,
    /// Pointer currently holding exclusive capture.
    captured: Option<PointerId>,
    listeners: Vec<Box<dyn SceneListener>>,
}

impl<H: CanvasHost> Editor<H> {
    /// Mount on `host` with the default configuration.
    pub fn new(host: H) -> Self {
        Self::with_config(host, EditorConfig::default())
    }

    pub fn with_config(host: H, config: EditorConfig) -> Self {
        let mapper = CoordMapper::new(host.device_scale());
        let theme = config.theme();
        let mut editor = Self {
            host,
            nodes: NodeCollection::new(),
            interaction: Interaction::new(config.deselect_after_drag),
            mapper,
            config,
            theme,
            captured: None,
            listeners: Vec::new(),
        };

        if editor.config.seed_default_node {
            let size = editor.config.node_size;
            let seed = Node::new(
                NodeKind::Rectangle,
                Bounds::new(0.0, 0.0, size, size),
                editor.config.seed_color(),
            );
            editor.nodes.add(seed);
        }
        editor.resize();
        editor
    }

    pub fn set_theme(&mut self, theme: RenderTheme) {
        self.theme = theme;
        self.render();
    }

    // ─── Event dispatch ──────────────────────────────────────────────────

    /// Route a normalized input event. Returns `true` if the scene changed.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerDown { x, y, pointer_id } => {
                self.pointer_down(Point::new(x, y), pointer_id)
            }
            InputEvent::PointerMove { x, y, pointer_id } => {
                self.pointer_move(Point::new(x, y), pointer_id)
            }
            InputEvent::PointerUp { x, y, pointer_id } => {
                self.pointer_up(Point::new(x, y), pointer_id)
            }
            InputEvent::PointerCancel { pointer_id } => self.pointer_cancel(pointer_id),
            InputEvent::Drop { x, y, payload } => {
                self.handle_drop(Point::new(x, y), payload.as_deref()).is_some()
            }
            InputEvent::Resize => {
                self.resize();
                true
            }
        }
    }

    /// Pointer pressed at a client position. A press from a new pointer
    /// while another holds capture means the old gesture was lost without
    /// an up or cancel; that gesture is cancelled and the new one proceeds.
    pub fn pointer_down(&mut self, client: Point, pointer: PointerId) -> bool {
        if let Some(stale) = self.captured
            && stale != pointer
        {
            log::debug!("pointer {pointer} takes over stale capture from {stale}");
            self.pointer_cancel(stale);
        }
        let p = self.to_surface_point(client);
        let resp = self.interaction.pointer_down(&mut self.nodes, p);
        self.finish(resp, pointer)
    }

    pub fn pointer_move(&mut self, client: Point, pointer: PointerId) -> bool {
        if self.captured_by_other(pointer) {
            return false;
        }
        let p = self.to_surface_point(client);
        let resp = self.interaction.pointer_move(&mut self.nodes, p);
        self.finish(resp, pointer)
    }

    pub fn pointer_up(&mut self, client: Point, pointer: PointerId) -> bool {
        if self.captured_by_other(pointer) {
            return false;
        }
        let p = self.to_surface_point(client);
        let resp = self.interaction.pointer_up(&mut self.nodes, p);
        self.finish(resp, pointer)
    }

    /// The platform cancelled `pointer` or revoked its capture. Ends the
    /// gesture in place and releases capture.
    pub fn pointer_cancel(&mut self, pointer: PointerId) -> bool {
        if self.captured_by_other(pointer) {
            return false;
        }
        let resp = self.interaction.pointer_cancel(&mut self.nodes);
        self.finish(resp, pointer)
    }

    /// A palette item dropped at a client position. Creates a default-sized
    /// node of the carried type; malformed or absent payloads are ignored.
    pub fn handle_drop(&mut self, client: Point, payload: Option<&str>) -> Option<NodeId> {
        let kind = match DropPayload::decode(payload) {
            Ok((_, kind)) => kind,
            Err(e) => {
                log::debug!("drop ignored: {e}");
                return None;
            }
        };

        let p = self.to_surface_point(client);
        let size = self.config.node_size;
        log::debug!("drop {} at ({}, {})", kind.as_str(), p.x, p.y);
        let node = Node::new(
            kind,
            Bounds::new(p.x, p.y, size, size),
            self.config.drop_color(),
        );
        let id = node.id();
        self.nodes.add(node);
        self.render();
        self.notify();
        Some(id)
    }

    /// Recompute the backing resolution from the displayed size, reset the
    /// drawing transform, and redraw. Interaction state is untouched.
    pub fn resize(&mut self) {
        self.mapper.set_scale(self.host.device_scale());
        let (width, height) = self.mapper.backing_size(self.host.client_size());
        self.host.set_backing_size(width, height);
        if let Some(surface) = self.host.surface() {
            surface.reset_transform();
        }
        log::debug!("resize backing store to {width}x{height} (scale {})", self.mapper.scale());
        self.render();
    }

    /// Redraw the whole scene. No-op without a drawing surface.
    pub fn render(&mut self) {
        let viewport = self.viewport();
        let Some(surface) = self.host.surface() else {
            log::trace!("render skipped: no drawing surface");
            return;
        };
        render_scene(
            surface,
            &mut self.nodes,
            self.interaction.selection_rect(),
            viewport,
            &self.theme,
        );
    }

    pub fn to_surface_point(&self, client: Point) -> Point {
        self.mapper.to_surface_point(client, self.host.bounding_rect())
    }

    // ─── Collection edits ────────────────────────────────────────────────

    /// Append a node. Returns `false` if its id is already present.
    pub fn add_node(&mut self, node: Node) -> bool {
        let added = self.nodes.add(node);
        if added {
            self.notify();
        }
        added
    }

    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        let removed = self.nodes.remove(id)?;
        self.interaction.forget(id);
        self.notify();
        Some(removed)
    }

    pub fn update_node(&mut self, node: Node) -> bool {
        let updated = self.nodes.update(node);
        if updated {
            self.notify();
        }
        updated
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    pub fn nodes(&self) -> &NodeCollection {
        &self.nodes
    }

    pub fn selected(&self) -> Option<&Node> {
        self.nodes.selected()
    }

    pub fn interaction_state(&self) -> InteractionState {
        self.interaction.state()
    }

    pub fn drag_state(&self) -> Option<DragState> {
        self.interaction.drag_state()
    }

    pub fn selection_rect(&self) -> Option<&SelectionRect> {
        self.interaction.selection_rect()
    }

    /// Ids of nodes touched by the current rubber-band rectangle.
    /// Does not change selection.
    pub fn nodes_in_selection(&mut self) -> Vec<NodeId> {
        match self.interaction.selection_rect() {
            Some(rect) => hit_test_rect(&mut self.nodes, rect.bounds()).into_vec(),
            None => Vec::new(),
        }
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot::capture(&self.nodes, &self.interaction)
    }

    pub fn captured_pointer(&self) -> Option<PointerId> {
        self.captured
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn scale(&self) -> f32 {
        self.mapper.scale()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Register a listener; it immediately receives the current snapshot.
    pub fn subscribe(&mut self, mut listener: Box<dyn SceneListener>) {
        listener.scene_changed(&self.snapshot());
        self.listeners.push(listener);
    }

    // ─── Private helpers ─────────────────────────────────────────────────

    fn captured_by_other(&self, pointer: PointerId) -> bool {
        match self.captured {
            Some(owner) if owner != pointer => {
                log::trace!("pointer {pointer} ignored, captured by {owner}");
                true
            }
            _ => false,
        }
    }

    fn finish(&mut self, resp: Response, pointer: PointerId) -> bool {
        match resp.capture {
            Capture::Acquire => {
                self.host.set_pointer_capture(pointer);
                self.captured = Some(pointer);
            }
            Capture::Release => {
                if let Some(owner) = self.captured.take() {
                    self.host.release_pointer_capture(owner);
                }
            }
            Capture::Keep => {}
        }
        if resp.redraw {
            self.render();
            self.notify();
        }
        resp.redraw
    }

    fn viewport(&self) -> Viewport {
        let (w, h) = self.host.backing_size();
        let client = self.host.client_size();
        Viewport::new(
            if w > 0 { w as f32 } else { client.width },
            if h > 0 { h as f32 } else { client.height },
        )
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for listener in &mut self.listeners {
            listener.scene_changed(&snapshot);
        }
    }
}
