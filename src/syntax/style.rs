//! Style types for highlighted output
//!
//! A `Style` describes how a token type should look; the theme turns it
//! into concrete markup (rich-text tags or ANSI escapes).

use crate::error::{ConsoleError, Result};

/// Foreground colors: the ANSI 16-color palette plus 24-bit RGB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse `#rrggbb` (leading `#` optional) or one of the palette names
    pub fn from_hex(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Some(named) = Self::from_name(trimmed) {
            return Ok(named);
        }

        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConsoleError::InvalidColor(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ConsoleError::InvalidColor(s.to_string()))
        };
        Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    fn from_name(name: &str) -> Option<Self> {
        let color = match name.to_lowercase().as_str() {
            "default" => Color::Default,
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "bright-black" | "grey" | "gray" => Color::BrightBlack,
            "bright-red" => Color::BrightRed,
            "bright-green" => Color::BrightGreen,
            "bright-yellow" => Color::BrightYellow,
            "bright-blue" => Color::BrightBlue,
            "bright-magenta" => Color::BrightMagenta,
            "bright-cyan" => Color::BrightCyan,
            "bright-white" => Color::BrightWhite,
            _ => return None,
        };
        Some(color)
    }

    /// RGB triple for this color; `None` for the terminal default
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let rgb = match *self {
            Color::Default => return None,
            Color::Black => (0x00, 0x00, 0x00),
            Color::Red => (0xcd, 0x31, 0x31),
            Color::Green => (0x0d, 0xbc, 0x79),
            Color::Yellow => (0xe5, 0xe5, 0x10),
            Color::Blue => (0x24, 0x72, 0xc8),
            Color::Magenta => (0xbc, 0x3f, 0xbc),
            Color::Cyan => (0x11, 0xa8, 0xcd),
            Color::White => (0xe5, 0xe5, 0xe5),
            Color::BrightBlack => (0x66, 0x66, 0x66),
            Color::BrightRed => (0xf1, 0x4c, 0x4c),
            Color::BrightGreen => (0x23, 0xd1, 0x8b),
            Color::BrightYellow => (0xf5, 0xf5, 0x43),
            Color::BrightBlue => (0x3b, 0x8e, 0xea),
            Color::BrightMagenta => (0xd6, 0x70, 0xd6),
            Color::BrightCyan => (0x29, 0xb8, 0xdb),
            Color::BrightWhite => (0xff, 0xff, 0xff),
            Color::Rgb(r, g, b) => (r, g, b),
        };
        Some(rgb)
    }

    /// `#rrggbb` form, as used by rich-text color tags
    pub fn to_hex(&self) -> Option<String> {
        self.rgb().map(|(r, g, b)| format!("#{:02x}{:02x}{:02x}", r, g, b))
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: set foreground color
    pub fn with_fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
