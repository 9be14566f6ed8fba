//! Transactional cursor over a source buffer
//!
//! The cursor keeps two positions into an immutable character buffer:
//!
//! - `committed`: characters already claimed by a matcher (or passed through)
//! - `speculative`: characters read so far by the matcher currently probing
//!
//! `0 <= committed <= speculative <= len` always holds. A matcher reads ahead
//! with [`Cursor::read_next`], gives back over-read characters with
//! [`Cursor::rollback_by`], and the engine either commits or fully rolls back
//! once the matcher answers.

/// Cursor over one highlight pass
#[derive(Debug, Clone)]
pub struct Cursor {
    chars: Vec<char>,
    committed: usize,
    speculative: usize,
}

impl Cursor {
    /// Create a cursor at the start of `source`
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            committed: 0,
            speculative: 0,
        }
    }

    /// Read one character past the speculative position.
    ///
    /// Returns `None` at end of input; further reads stay at the end.
    pub fn read_next(&mut self) -> Option<char> {
        let ch = self.chars.get(self.speculative).copied()?;
        self.speculative += 1;
        Some(ch)
    }

    /// Look at the next unread character without reading it
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.speculative).copied()
    }

    /// Claim everything read so far
    pub fn commit(&mut self) {
        self.committed = self.speculative;
    }

    /// Give back everything read since the last commit
    pub fn rollback(&mut self) {
        self.speculative = self.committed;
    }

    /// Give back the last `n` characters read, never crossing the committed position
    pub fn rollback_by(&mut self, n: usize) {
        self.speculative = self.speculative.saturating_sub(n).max(self.committed);
    }

    /// Last character read (at `speculative - 1`)
    pub fn current(&self) -> Option<char> {
        self.speculative.checked_sub(1).and_then(|i| self.chars.get(i).copied())
    }

    /// Character just before the committed position; `None` at start of input
    pub fn previous(&self) -> Option<char> {
        self.committed.checked_sub(1).and_then(|i| self.chars.get(i).copied())
    }

    pub fn end_of_input(&self) -> bool {
        self.speculative == self.chars.len()
    }

    pub fn committed_index(&self) -> usize {
        self.committed
    }

    pub fn speculative_index(&self) -> usize {
        self.speculative
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Characters in `start..end`, clamped to the buffer
    pub fn slice(&self, start: usize, end: usize) -> &[char] {
        let end = end.min(self.chars.len());
        let start = start.min(end);
        &self.chars[start..end]
    }
}
