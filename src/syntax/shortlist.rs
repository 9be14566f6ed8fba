//! Shortlist narrowing over a fixed word table
//!
//! Seed the shortlist with every entry whose first character was just read,
//! then keep reading while at least one entry can be extended by the next
//! character. The longest entry that was complete at some step wins, and
//! anything read past it is given back to the cursor.

use super::cursor::Cursor;

/// Run the narrowing from the cursor's current speculative position.
///
/// `continues` decides which characters may extend a run at all; the run
/// stops before the first character it rejects. On `Some(len)` the cursor is
/// left exactly `len` characters past where it started. On `None` the cursor
/// position is unspecified and the caller must roll back.
///
/// The shortlist is never materialized: the characters read so far are the
/// prefix every surviving entry shares, so each step re-tests the static
/// table against that prefix.
pub fn narrow(cursor: &mut Cursor, table: &[&str], continues: fn(char) -> bool) -> Option<usize> {
    let start = cursor.speculative_index();
    cursor.read_next()?;

    let mut read = 1;
    let mut best = None;
    loop {
        let prefix = cursor.slice(start, start + read);
        let mut alive = false;
        for word in table {
            match compare(word, prefix) {
                Prefix::Complete => {
                    alive = true;
                    best = Some(read);
                }
                Prefix::Partial => alive = true,
                Prefix::Diverged => {}
            }
        }
        if !alive {
            break;
        }

        match cursor.peek() {
            Some(next) if continues(next) => {
                cursor.read_next();
                read += 1;
            }
            _ => break,
        }
    }

    let len = best?;
    cursor.rollback_by(read - len);
    Some(len)
}

enum Prefix {
    /// The word is exactly the characters read
    Complete,
    /// The word is longer and starts with the characters read
    Partial,
    Diverged,
}

fn compare(word: &str, prefix: &[char]) -> Prefix {
    let mut chars = word.chars();
    for ch in prefix {
        if chars.next() != Some(*ch) {
            return Prefix::Diverged;
        }
    }
    if chars.next().is_some() {
        Prefix::Partial
    } else {
        Prefix::Complete
    }
}
