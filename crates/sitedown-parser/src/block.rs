//! Block segmentation and classification.
//!
//! A document is split on blank lines into blocks. Fenced code regions are
//! kept together even when they contain blank lines. Each block is then
//! classified into a [`BlockKind`].

use log::trace;
use sitedown_core::{BlockKind, Result, SitedownError};

/// Separator between blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Code fence marker.
pub const FENCE: &str = "```";

/// Split a document into trimmed block strings.
///
/// Fenced code blocks are emitted as one block even when they span blank
/// lines. An opened fence that is never closed fails with
/// [`SitedownError::UnterminatedCodeFence`].
pub fn segment(document: &str) -> Result<Vec<String>> {
    let document = document.replace("\r\n", "\n");
    let mut blocks = Vec::new();
    let mut fenced: Vec<&str> = Vec::new();

    for piece in document.split(BLOCK_SEPARATOR) {
        let opening = fenced.is_empty();
        if opening && !is_fence_line(piece.trim_start()) {
            let block = piece.trim();
            if !block.is_empty() {
                blocks.push(block.to_string());
            }
            continue;
        }

        fenced.push(piece);
        if closes_fence(piece, opening) {
            let code = fenced.join(BLOCK_SEPARATOR);
            trace!("fenced block spans {} pieces", fenced.len());
            blocks.push(code.trim().to_string());
            fenced.clear();
        }
    }

    if let Some(first) = fenced.first() {
        let snippet = first.trim_start().lines().next().unwrap_or_default();
        return Err(SitedownError::UnterminatedCodeFence {
            snippet: snippet.to_string(),
        });
    }

    trace!("segmented document into {} blocks", blocks.len());
    Ok(blocks)
}

/// Whether `piece` ends the currently open fence.
///
/// The closing fence must start its line, the same rule [`classify`]
/// applies to the last line of a code block. The opening piece only closes
/// its own fence when a second fence line follows the one that opened it.
fn closes_fence(piece: &str, opening: bool) -> bool {
    let piece = if opening {
        match piece.trim().split_once('\n') {
            Some((_, rest)) => rest,
            None => return false,
        }
    } else {
        piece.trim_end()
    };
    piece.lines().last().is_some_and(is_fence_line)
}

/// A line opening or closing a fence.
pub fn is_fence_line(line: &str) -> bool {
    line.starts_with(FENCE)
}

/// Classify a block by its structural type.
///
/// Rules are checked in order: heading, code, quote, unordered list,
/// ordered list. Anything else is a paragraph.
pub fn classify(block: &str) -> BlockKind {
    if let Some(level) = heading_level(block) {
        return BlockKind::Heading(level);
    }

    let lines: Vec<&str> = block.lines().collect();

    if is_code(&lines) {
        return BlockKind::Code;
    }
    if is_quote(&lines) {
        return BlockKind::Quote;
    }
    if !lines.is_empty() && lines.iter().all(|line| unordered_item(line).is_some()) {
        return BlockKind::UnorderedList;
    }
    if !lines.is_empty() && lines.iter().all(|line| ordered_item(line).is_some()) {
        return BlockKind::OrderedList;
    }
    BlockKind::Paragraph
}

/// Level of a heading block: 1-6 `#` followed by a space.
pub fn heading_level(block: &str) -> Option<u8> {
    let count = block.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&count) && block[count..].starts_with(' ') {
        Some(count as u8)
    } else {
        None
    }
}

fn is_code(lines: &[&str]) -> bool {
    match (lines.first(), lines.last()) {
        (Some(first), Some(last)) if lines.len() > 1 => {
            is_fence_line(first) && is_fence_line(last)
        }
        _ => false,
    }
}

fn is_quote(lines: &[&str]) -> bool {
    match lines.split_first() {
        Some((first, rest)) => {
            first.starts_with("> ") && rest.iter().all(|line| quote_line(line).is_some())
        }
        None => false,
    }
}

/// Content of a quoted line: `> text`, or empty for a bare `>`.
pub fn quote_line(line: &str) -> Option<&str> {
    if line == ">" {
        Some("")
    } else {
        line.strip_prefix("> ")
    }
}

/// Item text of an unordered list line (`- ` or `* `).
pub fn unordered_item(line: &str) -> Option<&str> {
    line.strip_prefix("- ").or_else(|| line.strip_prefix("* "))
}

/// Item text of an ordered list line (a digit 1-9 followed by `. `).
pub fn ordered_item(line: &str) -> Option<&str> {
    let mut chars = line.chars();
    match chars.next() {
        Some('1'..='9') => chars.as_str().strip_prefix(". "),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_basic() {
        let doc = "# This is a heading\n\n\
                   This is a paragraph of text. It has some **bold** and _italic_ words inside of it.\n\n\
                   - This is the first list item in a list block\n- This is a list item\n- This is another list item";
        assert_eq!(
            segment(doc).unwrap(),
            vec![
                "# This is a heading",
                "This is a paragraph of text. It has some **bold** and _italic_ words inside of it.",
                "- This is the first list item in a list block\n- This is a list item\n- This is another list item",
            ]
        );
    }

    #[test]
    fn test_segment_skips_extra_blank_lines() {
        let doc = "\nThis is **bolded** paragraph\n\n\n\n\
                   This is another paragraph with _italic_ text and `code` here\n\
                   This is the same paragraph on a new line\n\n- This is a list\n- with items\n";
        assert_eq!(
            segment(doc).unwrap(),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn test_segment_code_with_blank_lines() {
        let code = "```python\nfrom typing import List\n\ndef main():\n    print(\"hi\")\n\n\nmain()\n```";
        let doc = format!("Intro\n\n{}\n\nOutro", code);
        assert_eq!(segment(&doc).unwrap(), vec!["Intro", code, "Outro"]);
    }

    #[test]
    fn test_segment_single_piece_code() {
        assert_eq!(
            segment("```\nx = 1\n```").unwrap(),
            vec!["```\nx = 1\n```"]
        );
    }

    #[test]
    fn test_segment_code_closing_fence_alone() {
        let doc = "```\nx = 1\n\n```\n\nafter";
        assert_eq!(segment(doc).unwrap(), vec!["```\nx = 1\n\n```", "after"]);
    }

    #[test]
    fn test_segment_consecutive_code_blocks() {
        let doc = "```\na\n```\n\n```rust\n\nb\n```";
        assert_eq!(
            segment(doc).unwrap(),
            vec!["```\na\n```", "```rust\n\nb\n```"]
        );
    }

    #[test]
    fn test_segment_unterminated_fence() {
        let err = segment("text\n\n```rust\nfn main() {}\n\nmore").unwrap_err();
        assert!(matches!(
            err,
            SitedownError::UnterminatedCodeFence { ref snippet } if snippet == "```rust"
        ));
    }

    #[test]
    fn test_segment_lone_fence_is_unterminated() {
        assert!(segment("```").is_err());
    }

    #[test]
    fn test_segment_indented_closing_fence_does_not_close() {
        let err = segment("```\nmy_var = 1\n\nnext\n  ```").unwrap_err();
        assert!(matches!(err, SitedownError::UnterminatedCodeFence { .. }));
    }

    #[test]
    fn test_segment_fenced_blocks_classify_as_code() {
        let doc = "```\nmy_var = 1\n\n  ```\nnext\n```\n\nafter";
        let blocks = segment(doc).unwrap();
        assert_eq!(blocks, vec!["```\nmy_var = 1\n\n  ```\nnext\n```", "after"]);
        assert_eq!(classify(&blocks[0]), BlockKind::Code);
    }

    #[test]
    fn test_segment_crlf() {
        assert_eq!(segment("a\r\n\r\nb").unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_segment_empty() {
        assert!(segment("").unwrap().is_empty());
        assert!(segment("\n\n\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_classify_headings() {
        for level in 1..=6u8 {
            let block = format!("{} Heading {}", "#".repeat(level as usize), level);
            assert_eq!(classify(&block), BlockKind::Heading(level));
        }
    }

    #[test]
    fn test_classify_not_headings() {
        assert_eq!(classify("####### Seven"), BlockKind::Paragraph);
        assert_eq!(classify("#NoSpace"), BlockKind::Paragraph);
        assert_eq!(classify("#"), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_paragraph() {
        let block = "This a paragraph. This is a test text.\nThat spans multiple Lines.\nyes yes yes yes.";
        assert_eq!(classify(block), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_code() {
        let block = "```python\nimport json\n\ndef main():\n\tprint(\"Hello World\")\n```";
        assert_eq!(classify(block), BlockKind::Code);
        assert_eq!(classify("```"), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_quote() {
        assert_eq!(classify("> This is a Quote\n> and more quote"), BlockKind::Quote);
        assert_eq!(classify("> first\n>\n> third"), BlockKind::Quote);
        assert_eq!(classify(">Not a quote"), BlockKind::Paragraph);
        assert_eq!(classify(">\n> bare first line"), BlockKind::Paragraph);
        assert_eq!(classify("> quote\nnot quote"), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_unordered_list() {
        assert_eq!(classify("- Item 1\n- Item 2\n- Item 3"), BlockKind::UnorderedList);
        assert_eq!(classify("* Item 1\n* Item 2"), BlockKind::UnorderedList);
        assert_eq!(classify("- Item 1\n* Item 2"), BlockKind::UnorderedList);
        assert_eq!(classify("- Item 1\nItem 2"), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_ordered_list() {
        assert_eq!(
            classify("1. O Item 1\n2. O Item 2\n3. O Item 3"),
            BlockKind::OrderedList
        );
        assert_eq!(classify("3. any\n1. digit"), BlockKind::OrderedList);
        assert_eq!(classify("0. zero"), BlockKind::Paragraph);
        assert_eq!(classify("10. ten"), BlockKind::Paragraph);
        assert_eq!(classify("1. one\n- two"), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_is_stable() {
        for block in ["# h", "> q", "- a", "1. a", "```\nx\n```", "plain"] {
            assert_eq!(classify(block), classify(block));
        }
    }

    #[test]
    fn test_item_helpers() {
        assert_eq!(unordered_item("- a"), Some("a"));
        assert_eq!(unordered_item("* b"), Some("b"));
        assert_eq!(unordered_item("-c"), None);
        assert_eq!(ordered_item("9. nine"), Some("nine"));
        assert_eq!(ordered_item("9.nine"), None);
        assert_eq!(quote_line("> x"), Some("x"));
        assert_eq!(quote_line(">"), Some(""));
        assert_eq!(quote_line(">x"), None);
    }
}
