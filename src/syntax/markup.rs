//! Color markup for highlighted output
//!
//! The engine treats a color tag as an opaque pair of strings wrapped around
//! a span. This module builds those pairs from styles, either as Unity-style
//! rich text (`<color=#rrggbb>...</color>`) or as ANSI escape sequences for a
//! terminal, and can strip them again.
//!
//! Source text may itself contain tag syntax (`"<color=red>"` in a string
//! literal, a stray ESC). Every character that could start a tag is written
//! through an escape, so stripping is exact: rich text wraps a literal `<` in
//! `<noparse>`, and ANSI output shows a literal ESC as the `␛` control picture
//! followed by `[`, doubling any `␛` already in the source.

use std::collections::HashMap;

use crossterm::style::{Attribute, Color as TermColor, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::Command;
use regex::{Captures, Regex};

use super::style::Style;
use super::tokens::TokenType;
use crate::error::{ConsoleError, Result};

/// Output markup flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Markup {
    /// `<color=#rrggbb>`, `<b>`, `<i>` tags understood by the console's text widget
    #[default]
    RichText,
    /// ANSI escape sequences for terminals
    Ansi,
}

/// A literal `<` from the source, kept out of the rich-text parser
const NOPARSE_LT: &str = "<noparse><</noparse>";
/// A literal ESC from the source, shown as its control picture
const PICTURE_ESC: &str = "\u{241b}[";
/// A literal `␛` from the source
const PICTURE_PICTURE: &str = "\u{241b}\u{241b}";

const RICH_TEXT_ESCAPES: &[(char, &str)] = &[('<', NOPARSE_LT)];
const ANSI_ESCAPES: &[(char, &str)] = &[('\x1b', PICTURE_ESC), ('\u{241b}', PICTURE_PICTURE)];

impl Markup {
    pub fn name(&self) -> &'static str {
        match self {
            Markup::RichText => "rich-text",
            Markup::Ansi => "ansi",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "rich-text" | "richtext" | "rich" => Ok(Markup::RichText),
            "ansi" | "terminal" => Ok(Markup::Ansi),
            _ => Err(ConsoleError::UnknownMarkup(name.to_string())),
        }
    }

    /// Source characters that must not reach the output as themselves, and
    /// what is written instead
    fn escapes(&self) -> &'static [(char, &'static str)] {
        match self {
            Markup::RichText => RICH_TEXT_ESCAPES,
            Markup::Ansi => ANSI_ESCAPES,
        }
    }
}

/// Opening and closing markup wrapped around one span
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorTag {
    pub open: String,
    pub close: String,
}

impl ColorTag {
    /// Build the tag pair for `style` in the given markup
    pub fn for_style(style: &Style, markup: Markup) -> Result<Self> {
        if style.is_default() {
            return Ok(Self::default());
        }
        match markup {
            Markup::RichText => Ok(Self::rich_text(style)),
            Markup::Ansi => Self::ansi(style),
        }
    }

    fn rich_text(style: &Style) -> Self {
        let mut tag = Self::default();
        if let Some(hex) = style.fg.to_hex() {
            tag.open.push_str(&format!("<color={}>", hex));
            tag.close.insert_str(0, "</color>");
        }
        if style.bold {
            tag.open.push_str("<b>");
            tag.close.insert_str(0, "</b>");
        }
        if style.italic {
            tag.open.push_str("<i>");
            tag.close.insert_str(0, "</i>");
        }
        tag
    }

    fn ansi(style: &Style) -> Result<Self> {
        let mut tag = Self::default();
        if let Some((r, g, b)) = style.fg.rgb() {
            SetForegroundColor(TermColor::Rgb { r, g, b }).write_ansi(&mut tag.open)?;
        }
        if style.bold {
            SetAttribute(Attribute::Bold).write_ansi(&mut tag.open)?;
        }
        if style.italic {
            SetAttribute(Attribute::Italic).write_ansi(&mut tag.open)?;
        }
        if style.bold || style.italic {
            SetAttribute(Attribute::Reset).write_ansi(&mut tag.close)?;
        } else {
            ResetColor.write_ansi(&mut tag.close)?;
        }
        Ok(tag)
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty() && self.close.is_empty()
    }
}

/// Color tags for every token type, built once per configuration
#[derive(Debug, Clone)]
pub struct Theme {
    markup: Markup,
    tags: HashMap<TokenType, ColorTag>,
    strip_pattern: Regex,
}

impl Theme {
    /// Theme with each token type's default style
    pub fn new(markup: Markup) -> Result<Self> {
        let styles: HashMap<TokenType, Style> = TokenType::STYLED
            .iter()
            .map(|token_type| (*token_type, token_type.default_style()))
            .collect();
        Self::with_styles(markup, &styles)
    }

    /// Theme from explicit styles; token types without an entry use their default
    pub fn with_styles(markup: Markup, styles: &HashMap<TokenType, Style>) -> Result<Self> {
        let mut tags = HashMap::new();
        for token_type in TokenType::STYLED {
            let style = styles
                .get(&token_type)
                .copied()
                .unwrap_or_else(|| token_type.default_style());
            tags.insert(token_type, ColorTag::for_style(&style, markup)?);
        }

        let strip_pattern = Self::build_strip_pattern(markup, &tags)
            .map_err(|e| ConsoleError::Message(format!("cannot build strip pattern: {}", e)))?;

        Ok(Self {
            markup,
            tags,
            strip_pattern,
        })
    }

    /// Every tag and escape this theme writes, longest first so a tag never
    /// matches as a prefix of another
    fn build_strip_pattern(
        markup: Markup,
        tags: &HashMap<TokenType, ColorTag>,
    ) -> std::result::Result<Regex, regex::Error> {
        let mut pieces: Vec<&str> = tags
            .values()
            .flat_map(|tag| [tag.open.as_str(), tag.close.as_str()])
            .chain(markup.escapes().iter().map(|(_, escaped)| *escaped))
            .filter(|s| !s.is_empty())
            .collect();
        pieces.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        pieces.dedup();

        let alternation = pieces
            .iter()
            .map(|piece| regex::escape(piece))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&alternation)
    }

    pub fn markup(&self) -> Markup {
        self.markup
    }

    /// Tag for a token type; plain text gets an empty tag
    pub fn tag(&self, token_type: TokenType) -> Option<&ColorTag> {
        self.tags.get(&token_type).filter(|tag| !tag.is_empty())
    }

    /// Write one source character, escaped if it could start a tag
    pub fn escape(&self, ch: char, out: &mut String) {
        match self.markup.escapes().iter().find(|(raw, _)| *raw == ch) {
            Some((_, escaped)) => out.push_str(escaped),
            None => out.push(ch),
        }
    }

    /// Remove every tag this theme emits and undo its escapes
    pub fn strip(&self, rendered: &str) -> String {
        let escapes = self.markup.escapes();
        self.strip_pattern
            .replace_all(rendered, |caps: &Captures| {
                let piece = &caps[0];
                escapes
                    .iter()
                    .find(|(_, escaped)| *escaped == piece)
                    .map(|(raw, _)| raw.to_string())
                    .unwrap_or_default()
            })
            .into_owned()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(Markup::RichText).expect("rich-text tags are plain strings and always build")
    }
}

/// Wrap `text` in the tag for `token_type`, escaping it for the theme's markup
pub fn wrap(theme: &Theme, token_type: TokenType, text: &str, out: &mut String) {
    let tag = theme.tag(token_type);
    if let Some(tag) = tag {
        out.push_str(&tag.open);
    }
    for ch in text.chars() {
        theme.escape(ch, out);
    }
    if let Some(tag) = tag {
        out.push_str(&tag.close);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::style::Color;

    #[test]
    fn test_rich_text_tag_nesting() {
        let style = Style::fg(Color::Rgb(0x56, 0x9c, 0xd6)).with_bold();
        let tag = ColorTag::for_style(&style, Markup::RichText).unwrap();
        assert_eq!(tag.open, "<color=#569cd6><b>");
        assert_eq!(tag.close, "</b></color>");
    }

    #[test]
    fn test_default_style_has_no_tag() {
        let tag = ColorTag::for_style(&Style::default(), Markup::Ansi).unwrap();
        assert!(tag.is_empty());
    }

    #[test]
    fn test_ansi_tag_is_escape_sequence() {
        let style = Style::fg(Color::Rgb(1, 2, 3));
        let tag = ColorTag::for_style(&style, Markup::Ansi).unwrap();
        assert!(tag.open.starts_with("\x1b["));
        assert!(tag.open.contains("38;2;1;2;3"));
        assert!(tag.close.starts_with("\x1b["));
    }

    #[test]
    fn test_markup_from_name() {
        assert_eq!(Markup::from_name("ANSI").unwrap(), Markup::Ansi);
        assert_eq!(Markup::from_name("rich-text").unwrap(), Markup::RichText);
        assert_eq!(Markup::from_name(Markup::Ansi.name()).unwrap(), Markup::Ansi);
        assert!(matches!(
            Markup::from_name("html"),
            Err(ConsoleError::UnknownMarkup(_))
        ));
    }

    #[test]
    fn test_strip_removes_only_theme_tags() {
        let theme = Theme::new(Markup::RichText).unwrap();
        let mut out = String::new();
        wrap(&theme, TokenType::Keyword, "if", &mut out);
        out.push_str(" <b>x</b>");
        // a bare <b> is not one of the keyword tag strings
        assert_eq!(theme.strip(&out), "if <b>x</b>");
    }

    #[test]
    fn test_source_tags_survive_strip() {
        let theme = Theme::new(Markup::RichText).unwrap();
        let mut out = String::new();
        wrap(&theme, TokenType::String, "\"</color><b>\"", &mut out);
        assert!(out.contains("<noparse><</noparse>/color>"));
        assert_eq!(theme.strip(&out), "\"</color><b>\"");

        let mut out = String::new();
        wrap(&theme, TokenType::Comment, "// <noparse><</noparse>", &mut out);
        assert_eq!(theme.strip(&out), "// <noparse><</noparse>");
    }

    #[test]
    fn test_source_escapes_survive_ansi_strip() {
        let theme = Theme::new(Markup::Ansi).unwrap();
        let sources = [
            "\"\x1b[0m\"",
            "\u{241b}\x1b",
            "\x1b\u{241b}",
            "\u{241b}[",
            "\u{241b}\u{241b}[",
        ];
        for source in sources {
            let mut out = String::new();
            wrap(&theme, TokenType::String, source, &mut out);
            assert_eq!(out.matches('\x1b').count(), 2, "{:?}", out);
            assert_eq!(theme.strip(&out), source);
        }
    }

    #[test]
    fn test_escape_plain_text() {
        let theme = Theme::new(Markup::Ansi).unwrap();
        let mut out = String::new();
        theme.escape('<', &mut out);
        theme.escape('\x1b', &mut out);
        assert_eq!(out, "<\u{241b}[");
    }

    #[test]
    fn test_wrap_default_is_passthrough() {
        let theme = Theme::default();
        let mut out = String::new();
        wrap(&theme, TokenType::Default, "abc", &mut out);
        assert_eq!(out, "abc");
    }

    #[test]
    fn test_default_theme_matches_new() {
        let built = Theme::new(Markup::RichText).unwrap();
        let default = Theme::default();
        for token_type in TokenType::STYLED {
            assert_eq!(built.tag(token_type), default.tag(token_type));
        }
    }
}
