//! console-lexer - live syntax highlighting for the inspector's C# console
//!
//! The console editor hands the whole buffer to [`HighlightEngine::render`]
//! on every keystroke and displays the colorized result. Completion asks
//! [`HighlightEngine::token_at`] for the word under the caret.

pub mod config;
pub mod error;
pub mod syntax;

pub use config::Config;
pub use error::{ConsoleError, Result};
pub use syntax::{HighlightEngine, Markup, Matcher, Span, Theme, TokenBounds, TokenType};
