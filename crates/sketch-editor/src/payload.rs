//! Palette drag payload.
//!
//! The palette writes `{"type":"<shape>"}` under [`DROP_DATA_FORMAT`] when a
//! drag starts; the editor decodes it when the drag is dropped on the canvas.

use serde::{Deserialize, Serialize};
use sketch_core::NodeKind;
use thiserror::Error;

/// Drag-data format key the payload travels under.
pub const DROP_DATA_FORMAT: &str = "application/json";

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("drop payload is empty")]
    Empty,
    #[error("drop payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("drop payload has a blank shape type")]
    BlankShape,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropPayload {
    #[serde(rename = "type")]
    pub shape_type: String,
}

impl DropPayload {
    pub fn new(kind: &NodeKind) -> Self {
        Self {
            shape_type: kind.as_str().to_string(),
        }
    }

    pub fn encode(&self) -> String {
        serde_json::json!({ "type": self.shape_type }).to_string()
    }

    /// Decode raw drag data and resolve the shape kind it names. Any
    /// non-blank type is accepted; unrecognised ones become `NodeKind::Other`.
    pub fn decode(raw: Option<&str>) -> Result<(Self, NodeKind), PayloadError> {
        let raw = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or(PayloadError::Empty)?;
        let payload: DropPayload = serde_json::from_str(raw)?;
        let kind = NodeKind::from_token(&payload.shape_type)
            .ok_or(PayloadError::BlankShape)?;
        Ok((payload, kind))
    }
}
