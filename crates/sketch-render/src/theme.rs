use sketch_core::Color;

/// Colors and line widths used by the scene renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderTheme {
    /// Painted over the cleared area before nodes; `None` leaves it transparent.
    pub background: Option<Color>,
    pub outline: Color,
    pub outline_width: f32,
    pub highlight: Color,
    pub highlight_width: f32,
    pub selection_fill: Color,
    pub selection_border: Color,
    pub selection_border_width: f32,
}

impl RenderTheme {
    /// Light theme: black outlines and a purple selection highlight.
    pub fn light() -> Self {
        Self {
            background: None,
            outline: Color::BLACK,
            outline_width: 1.0,
            highlight: Color::PURPLE,
            highlight_width: 2.0,
            selection_fill: Color::from_rgba8(100, 150, 255, 0.3),
            selection_border: Color::from_rgba8(100, 150, 255, 0.8),
            selection_border_width: 1.0,
        }
    }

    /// Dark theme: same accents on a dark backdrop.
    pub fn dark() -> Self {
        Self {
            background: Some(Color::from_rgba8(0x1C, 0x1C, 0x1E, 1.0)),
            outline: Color::from_rgba8(0xE5, 0xE5, 0xEA, 1.0),
            highlight: Color::from_rgba8(0xBF, 0x5A, 0xF2, 1.0),
            ..Self::light()
        }
    }
}

impl Default for RenderTheme {
    fn default() -> Self {
        Self::light()
    }
}
