//! Token matchers
//!
//! Each matcher probes the cursor at the current committed position and
//! answers whether a token of its kind starts there. Matchers are stateless;
//! the engine tries them in a fixed priority order and the first one that
//! answers `true` claims the span.

mod comment;
mod keyword;
mod number;
mod strings;
mod symbol;

use super::cursor::Cursor;
use super::tokens::TokenType;

/// The closed set of token matchers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Matcher {
    Number,
    QuotedString,
    VerbatimString,
    CharLiteral,
    Symbol,
    Keyword,
    LineComment,
    BlockComment,
}

impl Matcher {
    /// Priority order used by the engine.
    ///
    /// Comments and strings come first so `//` or `if` inside them is never
    /// claimed by a later matcher.
    pub const PRIORITY: [Matcher; 8] = [
        Matcher::LineComment,
        Matcher::BlockComment,
        Matcher::VerbatimString,
        Matcher::QuotedString,
        Matcher::CharLiteral,
        Matcher::Keyword,
        Matcher::Number,
        Matcher::Symbol,
    ];

    /// Token type, which selects the highlight color
    pub fn token_type(&self) -> TokenType {
        match self {
            Matcher::Number => TokenType::Number,
            Matcher::QuotedString | Matcher::VerbatimString => TokenType::String,
            Matcher::CharLiteral => TokenType::Char,
            Matcher::Symbol => TokenType::Operator,
            Matcher::Keyword => TokenType::Keyword,
            Matcher::LineComment | Matcher::BlockComment => TokenType::Comment,
        }
    }

    /// Characters a match of this kind can start with, for a quick pre-filter
    pub fn could_start_with(&self, ch: char) -> bool {
        match self {
            Matcher::Number => ch.is_ascii_digit() || ch == '.',
            Matcher::QuotedString | Matcher::VerbatimString => ch == '"',
            Matcher::CharLiteral => ch == '\'',
            Matcher::Symbol => super::boundary::is_symbol_char(ch),
            Matcher::Keyword => ch.is_ascii_lowercase(),
            Matcher::LineComment | Matcher::BlockComment => ch == '/',
        }
    }

    /// Probe without committing.
    ///
    /// On `true` the cursor's speculative index is exactly the end of the
    /// match. On `false` the caller must roll back.
    pub fn is_implicit_match(&self, cursor: &mut Cursor) -> bool {
        match self {
            Matcher::Number => number::is_match(cursor),
            Matcher::QuotedString => strings::is_quoted_match(cursor),
            Matcher::VerbatimString => strings::is_verbatim_match(cursor),
            Matcher::CharLiteral => strings::is_char_match(cursor),
            Matcher::Symbol => symbol::is_match(cursor),
            Matcher::Keyword => keyword::is_match(cursor),
            Matcher::LineComment => comment::is_line_match(cursor),
            Matcher::BlockComment => comment::is_block_match(cursor),
        }
    }

    /// Probe and settle the cursor: commit on success, full rollback otherwise
    pub fn is_match(&self, cursor: &mut Cursor) -> bool {
        let matched = cursor.peek().is_some_and(|ch| self.could_start_with(ch))
            && self.is_implicit_match(cursor)
            && cursor.speculative_index() > cursor.committed_index();
        if matched {
            cursor.commit();
        } else {
            cursor.rollback();
        }
        matched
    }
}


#[cfg(test)]
mod tests {
    use super::test_util::claim;
    use super::*;

    #[test]
    fn test_failed_match_rolls_back() {
        let mut cursor = Cursor::new("ifx");
        assert!(!Matcher::Keyword.is_match(&mut cursor));
        assert_eq!(cursor.speculative_index(), 0);
        assert_eq!(cursor.committed_index(), 0);
    }

    #[test]
    fn test_successful_match_commits() {
        let mut cursor = Cursor::new("== x");
        assert!(Matcher::Symbol.is_match(&mut cursor));
        assert_eq!(cursor.committed_index(), 2);
        assert_eq!(cursor.speculative_index(), 2);
    }

    #[test]
    fn test_prefilter_rejects_foreign_start() {
        assert_eq!(claim(Matcher::QuotedString, "x\"a\""), None);
        assert_eq!(claim(Matcher::LineComment, "x//"), None);
        assert_eq!(claim(Matcher::Keyword, "If"), None);
    }

    #[test]
    fn test_token_types() {
        assert_eq!(Matcher::VerbatimString.token_type(), TokenType::String);
        assert_eq!(Matcher::BlockComment.token_type(), TokenType::Comment);
        assert_eq!(Matcher::Symbol.token_type(), TokenType::Operator);
    }

    #[test]
    fn test_priority_covers_every_matcher() {
        for matcher in [
            Matcher::Number,
            Matcher::QuotedString,
            Matcher::VerbatimString,
            Matcher::CharLiteral,
            Matcher::Symbol,
            Matcher::Keyword,
            Matcher::LineComment,
            Matcher::BlockComment,
        ] {
            assert!(Matcher::PRIORITY.contains(&matcher));
        }
    }
}
