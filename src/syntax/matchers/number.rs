//! Numeric literals
//!
//! Any run of digits and dots that starts on a token boundary. No grammar
//! checks: `1.2.3` and a lone `.` both match.

use crate::syntax::boundary::is_boundary_before;
use crate::syntax::cursor::Cursor;

pub(super) fn is_match(cursor: &mut Cursor) -> bool {
    if !is_boundary_before(cursor.previous()) {
        return false;
    }

    let mut read = 0;
    while let Some(ch) = cursor.peek() {
        if !(ch.is_ascii_digit() || ch == '.') {
            break;
        }
        cursor.read_next();
        read += 1;
    }
    read > 0
}
