//! Interactive editing on top of `sketch-core` and `sketch-render`.

pub mod config;
pub mod coords;
pub mod editor;
pub mod host;
pub mod input;
pub mod interaction;
pub mod mirror;
pub mod payload;

pub use config::{ConfigError, EditorConfig};
pub use coords::CoordMapper;
pub use editor::Editor;
pub use host::CanvasHost;
pub use input::{InputEvent, PointerId};
pub use interaction::{Capture, DragState, Interaction, InteractionState, Response};
pub use mirror::{NodeMirror, NodeSnapshot, SceneListener, SceneSnapshot};
pub use payload::{DROP_DATA_FORMAT, DropPayload, PayloadError};
