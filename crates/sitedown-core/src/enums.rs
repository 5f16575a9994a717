//! Core enums for block and span classification.
//!
//! [`BlockKind`] is the structural role of a blank-line separated block,
//! [`SpanKind`] the formatting of a run of inline text.

use crate::error::SitedownError;
use std::str::FromStr;

/// Structural type of a Markdown block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Plain paragraph (the fallback)
    Paragraph,
    /// ATX heading with its level (1..=6)
    Heading(u8),
    /// Fenced code block (```)
    Code,
    /// Block quote (> prefix on every line)
    Quote,
    /// Unordered list (- or * items)
    UnorderedList,
    /// Ordered list (1. style items)
    OrderedList,
}

impl BlockKind {
    /// HTML tag of the container this block is rendered into.
    pub fn tag(&self) -> &'static str {
        match self {
            BlockKind::Paragraph => "p",
            BlockKind::Heading(1) => "h1",
            BlockKind::Heading(2) => "h2",
            BlockKind::Heading(3) => "h3",
            BlockKind::Heading(4) => "h4",
            BlockKind::Heading(5) => "h5",
            BlockKind::Heading(_) => "h6",
            BlockKind::Code => "pre",
            BlockKind::Quote => "blockquote",
            BlockKind::UnorderedList => "ul",
            BlockKind::OrderedList => "ol",
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockKind::Paragraph => write!(f, "paragraph"),
            BlockKind::Heading(level) => write!(f, "heading-{}", level),
            BlockKind::Code => write!(f, "code"),
            BlockKind::Quote => write!(f, "quote"),
            BlockKind::UnorderedList => write!(f, "unordered-list"),
            BlockKind::OrderedList => write!(f, "ordered-list"),
        }
    }
}

/// Formatting of an inline text span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Unstyled text
    Plain,
    /// Bold text (**)
    Bold,
    /// Italic text (_)
    Italic,
    /// Inline code (`)
    Code,
    /// A link: [text](url)
    Link,
    /// An image: ![alt](url)
    Image,
}

impl SpanKind {
    /// All known span kinds.
    pub const ALL: [SpanKind; 6] = [
        SpanKind::Plain,
        SpanKind::Bold,
        SpanKind::Italic,
        SpanKind::Code,
        SpanKind::Link,
        SpanKind::Image,
    ];

    /// HTML tag of the leaf this span converts to, `None` for plain text.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            SpanKind::Plain => None,
            SpanKind::Bold => Some("b"),
            SpanKind::Italic => Some("i"),
            SpanKind::Code => Some("code"),
            SpanKind::Link => Some("a"),
            SpanKind::Image => Some("img"),
        }
    }

    /// Whether spans of this kind carry a url.
    pub fn has_url(&self) -> bool {
        matches!(self, SpanKind::Link | SpanKind::Image)
    }
}

impl std::fmt::Display for SpanKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpanKind::Plain => write!(f, "plain"),
            SpanKind::Bold => write!(f, "bold"),
            SpanKind::Italic => write!(f, "italic"),
            SpanKind::Code => write!(f, "code"),
            SpanKind::Link => write!(f, "link"),
            SpanKind::Image => write!(f, "image"),
        }
    }
}

impl FromStr for SpanKind {
    type Err = SitedownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpanKind::ALL
            .into_iter()
            .find(|kind| kind.to_string() == s)
            .ok_or_else(|| SitedownError::InvalidSpanKind(s.to_string()))
    }
}
