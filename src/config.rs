//! Configuration file support
//!
//! Loads settings from ~/.console-lexer.toml (or %USERPROFILE%\.console-lexer.toml on Windows)
//!
//! Example:
//! ```text
//! # console-lexer configuration
//! markup = "ansi"
//! indent = 4
//!
//! [styles]
//! number = "#b5cea8"
//!
//! [styles.keyword]
//! color = "#569cd6"
//! bold = true
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use toml::{Table, Value};
use tracing::warn;

use crate::error::{ConsoleError, Result};
use crate::syntax::{Color, HighlightEngine, Markup, Style, Theme, TokenType};

const KNOWN_KEYS: [&str; 3] = ["markup", "indent", "styles"];

/// Configuration settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Markup flavor for rendered output
    pub markup: Markup,
    /// One level of indentation, inserted on Enter
    pub indent: String,
    /// Style overrides per token type
    pub styles: HashMap<TokenType, Style>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            markup: Markup::RichText,
            indent: "    ".to_string(),
            styles: HashMap::new(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".console-lexer.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".console-lexer.toml"))
        }
    }

    /// Load the user's configuration, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), "ignoring config file: {}", e);
                Config::default()
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let table: Table = contents.parse()?;
        let mut config = Config::default();
        config.apply(&table)?;
        Ok(config)
    }

    /// Apply settings from a parsed table
    fn apply(&mut self, table: &Table) -> Result<()> {
        for key in table.keys() {
            if !KNOWN_KEYS.contains(&key.as_str()) {
                warn!(key = %key, "unknown config key");
            }
        }

        if let Some(value) = table.get("markup") {
            let name = value
                .as_str()
                .ok_or_else(|| ConsoleError::Message("markup must be a string".to_string()))?;
            self.markup = Markup::from_name(name)?;
        }

        if let Some(value) = table.get("indent") {
            self.indent = match value {
                Value::String(unit) => unit.clone(),
                Value::Integer(width) => " ".repeat((*width).clamp(1, 16) as usize),
                _ => {
                    return Err(ConsoleError::Message(
                        "indent must be a string or a number of spaces".to_string(),
                    ))
                }
            };
        }

        if let Some(value) = table.get("styles") {
            let styles = value
                .as_table()
                .ok_or_else(|| ConsoleError::Message("styles must be a table".to_string()))?;
            for (name, value) in styles {
                let token_type = TokenType::from_name(name)
                    .ok_or_else(|| ConsoleError::UnknownTokenType(name.clone()))?;
                let style = parse_style(name, value, token_type.default_style())?;
                self.styles.insert(token_type, style);
            }
        }

        Ok(())
    }

    /// Build the theme described by this configuration
    pub fn theme(&self) -> Result<Theme> {
        Theme::with_styles(self.markup, &self.styles)
    }

    /// Build an engine with this configuration's theme
    pub fn engine(&self) -> Result<HighlightEngine> {
        Ok(HighlightEngine::new(self.theme()?))
    }
}

/// A style is either a bare color or a table of `color`, `bold`, `italic`
fn parse_style(name: &str, value: &Value, base: Style) -> Result<Style> {
    match value {
        Value::String(color) => Ok(base.with_fg(Color::from_hex(color)?)),
        Value::Table(fields) => {
            let mut style = base;
            if let Some(color) = fields.get("color") {
                let color = color.as_str().ok_or_else(|| {
                    ConsoleError::Message(format!("styles.{}.color must be a string", name))
                })?;
                style.fg = Color::from_hex(color)?;
            }
            if let Some(bold) = fields.get("bold") {
                style.bold = parse_flag(name, "bold", bold)?;
            }
            if let Some(italic) = fields.get("italic") {
                style.italic = parse_flag(name, "italic", italic)?;
            }
            Ok(style)
        }
        _ => Err(ConsoleError::Message(format!(
            "styles.{} must be a color string or a table",
            name
        ))),
    }
}

fn parse_flag(name: &str, field: &str, value: &Value) -> Result<bool> {
    value.as_bool().ok_or_else(|| {
        ConsoleError::Message(format!("styles.{}.{} must be true or false", name, field))
    })
}
