//! Token types and spans
//!
//! This module defines the semantic token types the console lexer
//! recognizes, their default visual styles, and the span records the
//! engine hands to collaborators.

use super::matchers::Matcher;
use super::style::{Color, Style};

/// Semantic token types for syntax highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Line and block comments
    Comment,
    /// Quoted and verbatim string literals
    String,
    /// Character literals
    Char,
    /// Numeric literals (any run of digits and dots)
    Number,
    /// Reserved words
    Keyword,
    /// Operators and punctuation
    Operator,
    /// Default/plain text (no special highlighting)
    Default,
}

impl TokenType {
    /// Every token type that carries a style, in config order
    pub const STYLED: [TokenType; 6] = [
        TokenType::Comment,
        TokenType::String,
        TokenType::Char,
        TokenType::Number,
        TokenType::Keyword,
        TokenType::Operator,
    ];

    /// Get the default style for this token type
    pub fn default_style(&self) -> Style {
        match self {
            TokenType::Comment => Style::fg(Color::Rgb(0x57, 0xa6, 0x4a)).with_italic(),
            TokenType::String => Style::fg(Color::Rgb(0xd6, 0x9d, 0x85)),
            TokenType::Char => Style::fg(Color::Rgb(0xd6, 0x9d, 0x85)),
            TokenType::Number => Style::fg(Color::Rgb(0xb5, 0xce, 0xa8)),
            TokenType::Keyword => Style::fg(Color::Rgb(0x56, 0x9c, 0xd6)).with_bold(),
            TokenType::Operator => Style::fg(Color::Rgb(0xa5, 0xa5, 0xa5)),
            TokenType::Default => Style::default(),
        }
    }

    /// Get a human-readable name for this token type
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Comment => "comment",
            TokenType::String => "string",
            TokenType::Char => "char",
            TokenType::Number => "number",
            TokenType::Keyword => "keyword",
            TokenType::Operator => "operator",
            TokenType::Default => "default",
        }
    }

    /// Parse a token type from its name (case-insensitive, for TOML loading)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "comment" => Some(TokenType::Comment),
            "string" => Some(TokenType::String),
            "char" => Some(TokenType::Char),
            "number" => Some(TokenType::Number),
            "keyword" => Some(TokenType::Keyword),
            "operator" => Some(TokenType::Operator),
            "default" => Some(TokenType::Default),
            _ => None,
        }
    }
}

/// A matched run of source text
///
/// Offsets are character indices into the scanned text, half-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Character offset where this span starts (inclusive)
    pub start: usize,
    /// Character offset where this span ends (exclusive)
    pub end: usize,
    /// Matcher that claimed the span
    pub matcher: Matcher,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize, matcher: Matcher) -> Self {
        Self { start, end, matcher }
    }

    /// Token type (and therefore color) of this span
    pub fn token_type(&self) -> TokenType {
        self.matcher.token_type()
    }
}

/// Answer to a token-boundary query
///
/// `matcher` is `None` for a run of identifier characters that no matcher
/// claimed (a plain name being typed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenBounds {
    pub start: usize,
    pub end: usize,
    pub matcher: Option<Matcher>,
}

impl TokenBounds {
    /// The token's text, sliced from the source it was computed on
    pub fn text(&self, source: &str) -> String {
        source.chars().skip(self.start).take(self.end.saturating_sub(self.start)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles_not_empty() {
        for token_type in TokenType::STYLED {
            assert!(!token_type.default_style().is_default(), "{:?}", token_type);
        }
        assert!(TokenType::Default.default_style().is_default());
    }

    #[test]
    fn test_from_name_roundtrip() {
        for token_type in TokenType::STYLED {
            assert_eq!(TokenType::from_name(token_type.name()), Some(token_type));
        }
        assert_eq!(TokenType::from_name("Keyword"), Some(TokenType::Keyword));
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(TokenType::from_name("InvalidType"), None);
        assert_eq!(TokenType::from_name(""), None);
    }

    #[test]
    fn test_span_token_type() {
        let span = Span::new(5, 10, Matcher::Number);
        assert_eq!(span.token_type(), TokenType::Number);
        let span = Span::new(0, 2, Matcher::BlockComment);
        assert_eq!(span.token_type(), TokenType::Comment);
    }

    #[test]
    fn test_token_bounds_text() {
        let bounds = TokenBounds { start: 2, end: 5, matcher: None };
        assert_eq!(bounds.text("a élan"), "éla");
    }
}
