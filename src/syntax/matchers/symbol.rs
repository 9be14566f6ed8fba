//! Operators and punctuation
//!
//! Any context may precede an operator. The run is narrowed against the
//! operator table so compound operators (`<<=`, `??`, `=>`) come out as one
//! token, and it never extends over identifier characters or whitespace.

use crate::syntax::boundary::{is_delimiter, is_symbol_char, OPERATORS};
use crate::syntax::cursor::Cursor;
use crate::syntax::shortlist::narrow;

pub(super) fn is_match(cursor: &mut Cursor) -> bool {
    narrow(cursor, OPERATORS, extends_run).is_some()
}

/// Whitespace and identifier characters end the run outright. Anything else
/// outside the operator alphabet ends it once the shortlist empties.
fn extends_run(ch: char) -> bool {
    is_symbol_char(ch) || !is_delimiter(ch, true, true)
}
