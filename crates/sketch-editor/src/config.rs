//! Editor configuration.
//!
//! Every field has a default, so hosts may pass a partial JSON object.

use serde::{Deserialize, Serialize};
use sketch_core::{Color, DEFAULT_NODE_SIZE};
use sketch_render::RenderTheme;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid editor config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Width and height of seeded and dropped nodes.
    pub node_size: f32,
    /// Seed one node at the origin so the canvas is not empty on mount.
    pub seed_default_node: bool,
    pub seed_fill: String,
    /// Fill that marks a node as freshly dropped from the palette.
    pub drop_fill: String,
    /// Clear the dragged node's selection flag on pointer-up.
    pub deselect_after_drag: bool,
    pub dark_theme: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            node_size: DEFAULT_NODE_SIZE,
            seed_default_node: true,
            seed_fill: "black".to_string(),
            drop_fill: "red".to_string(),
            deselect_after_drag: true,
            dark_theme: false,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn seed_color(&self) -> Color {
        parse_fill(&self.seed_fill, Color::BLACK)
    }

    pub fn drop_color(&self) -> Color {
        parse_fill(&self.drop_fill, Color::RED)
    }

    pub fn theme(&self) -> RenderTheme {
        if self.dark_theme {
            RenderTheme::dark()
        } else {
            RenderTheme::light()
        }
    }
}

fn parse_fill(token: &str, fallback: Color) -> Color {
    Color::parse(token).unwrap_or_else(|| {
        log::warn!("unrecognized fill {token:?}, using {}", fallback.to_hex());
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = EditorConfig::from_json(r##"{"dropFill":"#00FF00","deselectAfterDrag":false}"##)
            .unwrap();
        assert_eq!(config.node_size, 100.0);
        assert!(config.seed_default_node);
        assert!(!config.deselect_after_drag);
        assert_eq!(config.drop_color(), Color::from_rgba8(0, 255, 0, 1.0));
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(EditorConfig::from_json("{node_size: 3").is_err());
    }

    #[test]
    fn unknown_fill_falls_back() {
        let config = EditorConfig {
            seed_fill: "not-a-color".into(),
            ..EditorConfig::default()
        };
        assert_eq!(config.seed_color(), Color::BLACK);
    }
}
