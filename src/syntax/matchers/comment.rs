//! Line and block comments

use crate::syntax::boundary::is_newline;
use crate::syntax::cursor::Cursor;

/// `// ...` up to, not including, the line break
pub(super) fn is_line_match(cursor: &mut Cursor) -> bool {
    if cursor.read_next() != Some('/') || cursor.read_next() != Some('/') {
        return false;
    }

    while cursor.peek().is_some_and(|ch| !is_newline(ch)) {
        cursor.read_next();
    }
    true
}

/// `/* ... */`, not nested; unterminated runs to end of input
pub(super) fn is_block_match(cursor: &mut Cursor) -> bool {
    if cursor.read_next() != Some('/') || cursor.read_next() != Some('*') {
        return false;
    }

    // The opening `*` must not pair with a following `/`.
    let mut last = None;
    while let Some(ch) = cursor.read_next() {
        if last == Some('*') && ch == '/' {
            return true;
        }
        last = Some(ch);
    }
    true
}
