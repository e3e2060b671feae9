//! Fill colors and the style tokens that produce them.

use serde::{Deserialize, Serialize};

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Helper to parse a single hex digit.
fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgba(1.0, 0.0, 0.0, 1.0);
    pub const PURPLE: Color = Color::rgba(128.0 / 255.0, 0.0, 128.0 / 255.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a.clamp(0.0, 1.0),
        )
    }

    /// Parse a fill token: hex (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`),
    /// `rgb(r, g, b)`, `rgba(r, g, b, a)`, or a basic CSS keyword.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.starts_with('#') {
            return Self::from_hex(token);
        }
        if let Some(args) = token
            .strip_prefix("rgba(")
            .or_else(|| token.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::from_function_args(args);
        }
        Self::from_keyword(token)
    }

    /// Parse a hex color string. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();
        let short = |i: usize| hex_val(bytes[i]).map(|v| v * 17);
        let long = |i: usize| Some(hex_val(bytes[i])? << 4 | hex_val(bytes[i + 1])?);

        let (r, g, b, a) = match bytes.len() {
            3 => (short(0)?, short(1)?, short(2)?, 255),
            4 => (short(0)?, short(1)?, short(2)?, short(3)?),
            6 => (long(0)?, long(2)?, long(4)?, 255),
            8 => (long(0)?, long(2)?, long(4)?, long(6)?),
            _ => return None,
        };
        Some(Self::from_rgba8(r, g, b, a as f32 / 255.0))
    }

    fn from_function_args(args: &str) -> Option<Self> {
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        let channel = |s: &str| s.parse::<f32>().ok().map(|v| v.clamp(0.0, 255.0) as u8);
        match parts.as_slice() {
            [r, g, b] => Some(Self::from_rgba8(channel(*r)?, channel(*g)?, channel(*b)?, 1.0)),
            [r, g, b, a] => Some(Self::from_rgba8(
                channel(*r)?,
                channel(*g)?,
                channel(*b)?,
                a.parse().ok()?,
            )),
            _ => None,
        }
    }

    fn from_keyword(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::RED,
            "purple" => Self::PURPLE,
            "transparent" => Self::TRANSPARENT,
            "green" => Self::from_rgba8(0, 128, 0, 1.0),
            "blue" => Self::from_rgba8(0, 0, 255, 1.0),
            "gray" | "grey" => Self::from_rgba8(128, 128, 128, 1.0),
            "yellow" => Self::from_rgba8(255, 255, 0, 1.0),
            "orange" => Self::from_rgba8(255, 165, 0, 1.0),
            _ => return None,
        };
        Some(color)
    }

    /// 8-bit channels, alpha included.
    pub fn to_rgba8(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    /// `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}
