//! String and character literals
//!
//! Unterminated literals run to end of input: the user is usually still
//! typing the closing quote.

use crate::syntax::cursor::Cursor;

const ESCAPE: char = '\\';
const VERBATIM_PREFIX: char = '@';

/// `"..."` with backslash escapes
pub(super) fn is_quoted_match(cursor: &mut Cursor) -> bool {
    if cursor.previous() == Some(VERBATIM_PREFIX) {
        return false;
    }
    read_escaped(cursor, '"')
}

/// `'...'` with backslash escapes
pub(super) fn is_char_match(cursor: &mut Cursor) -> bool {
    read_escaped(cursor, '\'')
}

/// `@"..."`, where `""` stands for one quote.
///
/// The `@` itself stays outside the span; it has already passed through
/// when the opening quote is probed.
pub(super) fn is_verbatim_match(cursor: &mut Cursor) -> bool {
    if cursor.previous() != Some(VERBATIM_PREFIX) || cursor.read_next() != Some('"') {
        return false;
    }

    // Flips on every quote: an odd run closes the string, an even run is
    // a sequence of escaped quotes.
    let mut closed = false;
    while let Some(ch) = cursor.read_next() {
        if ch == '"' {
            closed = !closed;
        } else if closed {
            cursor.rollback_by(1);
            return true;
        }
    }
    true
}

/// Read from an opening `quote` to the first `quote` not preceded by `\`.
///
/// Only the single preceding character is checked, so `\\"` does not close.
fn read_escaped(cursor: &mut Cursor, quote: char) -> bool {
    if cursor.read_next() != Some(quote) {
        return false;
    }

    let mut last = quote;
    while let Some(ch) = cursor.read_next() {
        if ch == quote && last != ESCAPE {
            return true;
        }
        last = ch;
    }
    true
}

#[cfg(test)]
mod tests {
    use crate::syntax::matchers::test_util::{claim, claim_after};
    use crate::syntax::matchers::Matcher;

    #[test]
    fn test_simple_string() {
        assert_eq!(claim(Matcher::QuotedString, r#""abc" + x"#).as_deref(), Some(r#""abc""#));
        assert_eq!(claim(Matcher::QuotedString, r#""""#).as_deref(), Some(r#""""#));
    }

    #[test]
    fn test_escaped_quotes() {
        let source = r#""a\"b\"c";"#;
        assert_eq!(claim(Matcher::QuotedString, source).as_deref(), Some(r#""a\"b\"c""#));
    }

    #[test]
    fn test_double_backslash_does_not_close() {
        let source = r#""a\\" b"#;
        assert_eq!(claim(Matcher::QuotedString, source).as_deref(), Some(source));
    }

    #[test]
    fn test_unterminated_string_runs_to_end() {
        assert_eq!(claim(Matcher::QuotedString, "\"abc").as_deref(), Some("\"abc"));
        assert_eq!(claim(Matcher::QuotedString, "\"").as_deref(), Some("\""));
    }

    #[test]
    fn test_quoted_defers_to_verbatim() {
        assert_eq!(claim_after(Matcher::QuotedString, "@\"a\"", 1), None);
    }

    #[test]
    fn test_verbatim_doubled_quotes() {
        let source = r#"@"a""b";"#;
        assert_eq!(claim_after(Matcher::VerbatimString, source, 1).as_deref(), Some(r#""a""b""#));
    }

    #[test]
    fn test_verbatim_ignores_backslash() {
        let source = r#"@"C:\dir\" + x"#;
        assert_eq!(
            claim_after(Matcher::VerbatimString, source, 1).as_deref(),
            Some(r#""C:\dir\""#)
        );
    }

    #[test]
    fn test_verbatim_edge_runs() {
        assert_eq!(claim_after(Matcher::VerbatimString, r#"@"""#, 1).as_deref(), Some(r#""""#));
        // an opener followed by one escaped quote is still open
        assert_eq!(
            claim_after(Matcher::VerbatimString, r#"@""" x"#, 1).as_deref(),
            Some(r#"""" x"#)
        );
        assert_eq!(claim_after(Matcher::VerbatimString, r#"@"abc"#, 1).as_deref(), Some(r#""abc"#));
    }

    #[test]
    fn test_verbatim_requires_prefix() {
        assert_eq!(claim(Matcher::VerbatimString, r#""a""#), None);
        assert_eq!(claim_after(Matcher::VerbatimString, r#"x"a""#, 1), None);
    }

    #[test]
    fn test_char_literal() {
        assert_eq!(claim(Matcher::CharLiteral, "'a';").as_deref(), Some("'a'"));
        assert_eq!(claim(Matcher::CharLiteral, r"'\'' x").as_deref(), Some(r"'\''"));
        assert_eq!(claim(Matcher::CharLiteral, "'ab").as_deref(), Some("'ab"));
    }
}
