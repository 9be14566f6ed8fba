//! Syntax highlighting for the scripting console
//!
//! This module provides the lexer behind the console's live editor:
//! - A transactional cursor and shared boundary rules
//! - Stateless matchers for comments, strings, keywords, numbers, operators
//! - The engine that renders colorized text and answers token queries

mod boundary;
mod cursor;
mod engine;
mod markup;
mod matchers;
mod shortlist;
mod style;
mod tokens;

pub use boundary::{is_delimiter, KEYWORDS, OPERATORS};
pub use cursor::Cursor;
pub use engine::HighlightEngine;
pub use markup::{ColorTag, Markup, Theme};
pub use matchers::Matcher;
pub use style::{Color, Style};
pub use tokens::{Span, TokenBounds, TokenType};
