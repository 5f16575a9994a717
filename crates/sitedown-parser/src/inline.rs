//! Inline markdown parser.
//!
//! Turns the text of a block into a flat sequence of [`TextSpan`]s. The
//! pipeline runs in a fixed order: bold (`**`), italic (`_`), code (`` ` ``),
//! images, then links. Each stage only looks at spans that are still plain,
//! so formatting never nests.

use log::trace;
use regex::Regex;
use sitedown_core::{Attributes, Node, Result, SitedownError, SpanKind};
use std::sync::LazyLock;

/// Regex for images: ![alt](url)
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// Regex for links: [text](url). Callers reject matches preceded by `!`.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// A run of inline text with a single formatting kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub kind: SpanKind,
    /// Target of a link or source of an image
    pub url: Option<String>,
}

impl TextSpan {
    /// Create a span without a url.
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    /// Create an unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Plain)
    }

    /// Create a span that carries a url.
    pub fn with_url(text: impl Into<String>, kind: SpanKind, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            url: Some(url.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}

/// Parse inline markdown into spans.
///
/// Fails with [`SitedownError::MalformedInlineMarkup`] when a delimiter is
/// left unterminated.
pub fn parse_inline(text: &str) -> Result<Vec<TextSpan>> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_delimiter(spans, "**", SpanKind::Bold)?;
    let spans = split_delimiter(spans, "_", SpanKind::Italic)?;
    let spans = split_delimiter(spans, "`", SpanKind::Code)?;
    let spans = split_images(spans);
    let spans = split_links(spans);
    trace!("parsed {} inline spans", spans.len());
    Ok(spans)
}

/// Split plain spans on `delimiter`, tagging every other part as `kind`.
///
/// Parts alternate plain/styled starting with plain. Empty parts are
/// dropped. An odd number of delimiters means one was never closed.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let parts: Vec<&str> = span.text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(SitedownError::MalformedInlineMarkup {
                delimiter: delimiter.to_string(),
                text: span.text.clone(),
            });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            let part_kind = if i % 2 == 0 { span.kind } else { kind };
            result.push(TextSpan::new(part, part_kind));
        }
    }

    Ok(result)
}

/// Extract `![alt](url)` markers from plain spans.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_markers(spans, &IMAGE_RE, SpanKind::Image)
}

/// Extract `[text](url)` markers from plain spans.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_markers(spans, &LINK_RE, SpanKind::Link)
}

/// All `(alt, url)` pairs of images in `text`.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    find_markers(text, &IMAGE_RE, SpanKind::Image)
        .map(|(_, label, url)| (label.to_string(), url.to_string()))
        .collect()
}

/// All `(text, url)` pairs of links in `text`, excluding images.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    find_markers(text, &LINK_RE, SpanKind::Link)
        .map(|(_, label, url)| (label.to_string(), url.to_string()))
        .collect()
}

/// Matches of `re` as `(byte range, label, url)`.
fn find_markers<'t>(
    text: &'t str,
    re: &'static Regex,
    kind: SpanKind,
) -> impl Iterator<Item = (std::ops::Range<usize>, &'t str, &'t str)> {
    re.captures_iter(text).filter_map(move |caps| {
        let whole = caps.get(0)?;
        // `[` directly after `!` belongs to an image
        if kind == SpanKind::Link && text[..whole.start()].ends_with('!') {
            return None;
        }
        let label = caps.get(1)?.as_str();
        let url = caps.get(2)?.as_str();
        Some((whole.range(), label, url))
    })
}

fn split_markers(spans: Vec<TextSpan>, re: &'static Regex, kind: SpanKind) -> Vec<TextSpan> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let text = span.text.as_str();
        let mut cursor = 0;
        for (range, label, url) in find_markers(text, re, kind) {
            if range.start > cursor {
                result.push(TextSpan::plain(&text[cursor..range.start]));
            }
            result.push(TextSpan::with_url(label, kind, url));
            cursor = range.end;
        }
        if cursor < text.len() {
            result.push(TextSpan::plain(&text[cursor..]));
        }
    }

    result
}

/// Convert a span into a leaf node.
///
/// Link and image spans fail with [`SitedownError::MissingRequiredField`]
/// when they carry no url.
pub fn span_to_node(span: &TextSpan) -> Result<Node> {
    let Some(tag) = span.kind.tag() else {
        return Ok(Node::text(&span.text));
    };
    let Some(url) = span_url(span)? else {
        return Ok(Node::leaf(tag, &span.text));
    };

    let node = if span.kind == SpanKind::Image {
        let attributes: Attributes = [("src", url), ("alt", span.text.as_str())]
            .into_iter()
            .collect();
        Node::leaf_with_attributes(tag, "", attributes)
    } else {
        let attributes: Attributes = [("href", url)].into_iter().collect();
        Node::leaf_with_attributes(tag, &span.text, attributes)
    };
    Ok(node)
}

/// The url of a link or image span, `None` for kinds without one.
fn span_url(span: &TextSpan) -> Result<Option<&str>> {
    if !span.kind.has_url() {
        return Ok(None);
    }
    span.url
        .as_deref()
        .map(Some)
        .ok_or(SitedownError::MissingRequiredField("url"))
}

/// Parse inline markdown and convert every span to a leaf node.
pub fn text_to_nodes(text: &str) -> Result<Vec<Node>> {
    parse_inline(text)?.iter().map(span_to_node).collect()
}
