//! Reserved words
//!
//! A keyword must start on a token boundary and must be followed by one:
//! `if(` matches, `ifx` and `xif` do not.

use crate::syntax::boundary::{is_boundary_before, is_delimiter, is_identifier_char, KEYWORDS};
use crate::syntax::cursor::Cursor;
use crate::syntax::shortlist::narrow;

pub(super) fn is_match(cursor: &mut Cursor) -> bool {
    if !is_boundary_before(cursor.previous()) {
        return false;
    }
    if narrow(cursor, KEYWORDS, is_identifier_char).is_none() {
        return false;
    }
    cursor.peek().map_or(true, |next| is_delimiter(next, true, false))
}

#[cfg(test)]
mod tests {
    use crate::syntax::matchers::test_util::{claim, claim_after};
    use crate::syntax::matchers::Matcher;

    #[test]
    fn test_keyword_followed_by_delimiter() {
        assert_eq!(claim(Matcher::Keyword, "if(x)").as_deref(), Some("if"));
        assert_eq!(claim(Matcher::Keyword, "return;").as_deref(), Some("return"));
        assert_eq!(claim(Matcher::Keyword, "var x").as_deref(), Some("var"));
        assert_eq!(claim(Matcher::Keyword, "null").as_deref(), Some("null"));
    }

    #[test]
    fn test_trailing_identifier_char_rejects() {
        assert_eq!(claim(Matcher::Keyword, "ifx(x)"), None);
        assert_eq!(claim(Matcher::Keyword, "int2"), None);
        assert_eq!(claim(Matcher::Keyword, "in_"), None);
    }

    #[test]
    fn test_longest_keyword_wins() {
        assert_eq!(claim(Matcher::Keyword, "interface I").as_deref(), Some("interface"));
        assert_eq!(claim(Matcher::Keyword, "int x").as_deref(), Some("int"));
        assert_eq!(claim(Matcher::Keyword, "in x").as_deref(), Some("in"));
        assert_eq!(claim(Matcher::Keyword, "inte x"), None);
    }

    #[test]
    fn test_requires_boundary_before() {
        assert_eq!(claim_after(Matcher::Keyword, "xif ", 1), None);
        assert_eq!(claim_after(Matcher::Keyword, "@if ", 1), None);
        assert_eq!(claim_after(Matcher::Keyword, "(if ", 1).as_deref(), Some("if"));
        assert_eq!(claim_after(Matcher::Keyword, "\nif", 1).as_deref(), Some("if"));
    }

    #[test]
    fn test_keyword_followed_by_quote_is_rejected() {
        assert_eq!(claim(Matcher::Keyword, "string\"a\""), None);
    }
}
