//! Highlight engine
//!
//! Drives one cursor over the whole buffer. At every committed position the
//! matchers are tried in priority order; the first to accept claims its span,
//! otherwise one character passes through untouched. The buffer is re-scanned
//! from the start on every call.

use tracing::{debug, trace};

use super::boundary::is_identifier_char;
use super::cursor::Cursor;
use super::markup::{self, Theme};
use super::matchers::Matcher;
use super::tokens::{Span, TokenBounds, TokenType};

/// One step of a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// A matcher claimed this span
    Matched(Span),
    /// No matcher accepted; this character was committed as plain text
    Passthrough(usize, char),
}

/// Scan state: `Scanning` until the cursor reaches end of input, then `Done`
struct Scan<'e> {
    matchers: &'e [Matcher],
    cursor: Cursor,
}

impl<'e> Scan<'e> {
    fn new(matchers: &'e [Matcher], text: &str) -> Self {
        Self {
            matchers,
            cursor: Cursor::new(text),
        }
    }

    fn cursor(&self) -> &Cursor {
        &self.cursor
    }
}

impl Iterator for Scan<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.cursor.end_of_input() {
            return None;
        }

        let start = self.cursor.committed_index();
        let cursor = &mut self.cursor;
        if let Some(matcher) = self.matchers.iter().find(|matcher| matcher.is_match(cursor)) {
            let span = Span::new(start, self.cursor.committed_index(), *matcher);
            trace!(start = span.start, end = span.end, matcher = ?span.matcher, "span");
            return Some(Step::Matched(span));
        }

        let ch = self.cursor.read_next()?;
        self.cursor.commit();
        Some(Step::Passthrough(start, ch))
    }
}

/// The highlighter consumed by the console editor
#[derive(Debug, Clone)]
pub struct HighlightEngine {
    matchers: Vec<Matcher>,
    theme: Theme,
}

impl HighlightEngine {
    /// Engine with the standard matcher priority
    pub fn new(theme: Theme) -> Self {
        Self::with_matchers(Matcher::PRIORITY.to_vec(), theme)
    }

    /// Engine with a custom matcher order (earlier entries win)
    pub fn with_matchers(matchers: Vec<Matcher>, theme: Theme) -> Self {
        Self { matchers, theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Colorize `text`.
    ///
    /// The output is `text` with color tags inserted around matched spans;
    /// stripping the tags gives back `text` exactly.
    pub fn render(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() * 2);
        let mut scan = Scan::new(&self.matchers, text);
        let mut spans = 0usize;

        while let Some(step) = scan.next() {
            match step {
                Step::Matched(span) => {
                    let body: String = scan.cursor().slice(span.start, span.end).iter().collect();
                    markup::wrap(&self.theme, span.token_type(), &body, &mut out);
                    spans += 1;
                }
                Step::Passthrough(_, ch) => self.theme.escape(ch, &mut out),
            }
        }

        debug!(chars = scan.cursor().len(), spans, "rendered buffer");
        out
    }

    /// Matched spans of `text`, in order; unmatched gaps are plain text
    pub fn tokenize(&self, text: &str) -> Vec<Span> {
        Scan::new(&self.matchers, text)
            .filter_map(|step| match step {
                Step::Matched(span) => Some(span),
                Step::Passthrough(..) => None,
            })
            .collect()
    }

    /// Bounds of the token containing or immediately preceding `caret`.
    ///
    /// Runs of identifier characters that no matcher claimed count as
    /// tokens with no matcher. When the caret sits between two tokens the
    /// one before it wins, which is what completion wants.
    pub fn token_at(&self, text: &str, caret: usize) -> Option<TokenBounds> {
        let tokens = self.token_bounds(text);
        tokens
            .iter()
            .find(|token| token.start < caret && caret <= token.end)
            .or_else(|| tokens.iter().find(|token| token.start == caret))
            .copied()
    }

    fn token_bounds(&self, text: &str) -> Vec<TokenBounds> {
        let mut tokens: Vec<TokenBounds> = Vec::new();
        // end of the identifier run currently being extended, if any
        let mut open_word: Option<usize> = None;

        for step in Scan::new(&self.matchers, text) {
            match step {
                Step::Matched(span) => {
                    open_word = None;
                    tokens.push(TokenBounds {
                        start: span.start,
                        end: span.end,
                        matcher: Some(span.matcher),
                    });
                }
                Step::Passthrough(pos, ch) if is_identifier_char(ch) => {
                    if open_word == Some(pos) {
                        if let Some(word) = tokens.last_mut() {
                            word.end = pos + 1;
                        }
                    } else {
                        tokens.push(TokenBounds {
                            start: pos,
                            end: pos + 1,
                            matcher: None,
                        });
                    }
                    open_word = Some(pos + 1);
                }
                Step::Passthrough(..) => open_word = None,
            }
        }
        tokens
    }

    /// Brace depth at `caret`, counting only operator `{` and `}`.
    ///
    /// Braces inside strings, char literals and comments do not count, and
    /// a stray `}` never takes the depth below zero.
    pub fn indent_level_at(&self, text: &str, caret: usize) -> usize {
        let mut scan = Scan::new(&self.matchers, text);
        let mut depth = 0usize;

        while let Some(step) = scan.next() {
            let Step::Matched(span) = step else {
                continue;
            };
            if span.start >= caret {
                break;
            }
            if span.token_type() != TokenType::Operator {
                continue;
            }
            match scan.cursor().slice(span.start, span.end) {
                ['{'] => depth += 1,
                ['}'] => depth = depth.saturating_sub(1),
                _ => {}
            }
        }
        depth
    }

    /// Text to insert when the user presses Enter at `caret`.
    ///
    /// A line break followed by `unit` once per open brace, one level less
    /// when the rest of the line starts with a closing brace.
    pub fn newline_indent(&self, text: &str, caret: usize, unit: &str) -> String {
        let mut level = self.indent_level_at(text, caret);
        let closes_next = text
            .chars()
            .skip(caret)
            .find(|ch| *ch != ' ' && *ch != '\t')
            .is_some_and(|ch| ch == '}');
        if closes_next {
            level = level.saturating_sub(1);
        }
        format!("\n{}", unit.repeat(level))
    }
}

impl Default for HighlightEngine {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
