//! Sitedown Parser
//!
//! Converts a Markdown document into a [`Node`] tree in two stages:
//! block segmentation and classification, then inline parsing of each
//! block's text.
//!
//! # Overview
//!
//! - [`segment`] splits a document into blocks, keeping fenced code whole
//! - [`classify`] assigns each block a [`BlockKind`]
//! - [`parse_inline`] splits block text into [`TextSpan`]s
//! - [`assemble`] builds the final tree under a `div` root
//!
//! # Example
//!
//! ```
//! use sitedown_parser::markdown_to_html;
//!
//! let html = markdown_to_html("# Title\n\nSome **bold** text").unwrap();
//! assert_eq!(html, "<div><h1>Title</h1><p>Some <b>bold</b> text</p></div>");
//! ```

pub mod assemble;
pub mod block;
pub mod inline;

pub use assemble::{assemble, block_to_node, ROOT_TAG};
pub use block::{classify, segment};
pub use inline::{
    extract_images, extract_links, parse_inline, span_to_node, text_to_nodes, TextSpan,
};

use log::trace;
use sitedown_core::{BlockKind, Node, Result};

/// Segment and classify a document.
pub fn classify_blocks(document: &str) -> Result<Vec<(String, BlockKind)>> {
    let blocks = segment(document)?
        .into_iter()
        .map(|block| {
            let kind = classify(&block);
            trace!("block classified as {}", kind);
            (block, kind)
        })
        .collect();
    Ok(blocks)
}

/// Convert a Markdown document into its node tree.
pub fn markdown_to_node(document: &str) -> Result<Node> {
    assemble(&classify_blocks(document)?)
}

/// Convert a Markdown document straight to an HTML string.
pub fn markdown_to_html(document: &str) -> Result<String> {
    markdown_to_node(document)?.serialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_blocks() {
        let blocks = classify_blocks("# Title\n\nSome **bold** text").unwrap();
        assert_eq!(
            blocks,
            vec![
                ("# Title".to_string(), BlockKind::Heading(1)),
                ("Some **bold** text".to_string(), BlockKind::Paragraph),
            ]
        );
    }

    #[test]
    fn test_markdown_to_html_list() {
        assert_eq!(
            markdown_to_html("- a\n- b").unwrap(),
            "<div><ul><li>a</li><li>b</li></ul></div>"
        );
    }

    #[test]
    fn test_markdown_to_html_code() {
        assert_eq!(
            markdown_to_html("```\nx = 1\n```").unwrap(),
            "<div><pre><code>x = 1</code></pre></div>"
        );
    }

    #[test]
    fn test_malformed_aborts_document() {
        assert!(markdown_to_node("# ok\n\nbroken **bold").is_err());
    }
}
