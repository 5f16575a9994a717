//! Block-to-tree assembly.
//!
//! Each classified block is turned into a container subtree: block markup
//! is stripped and the remaining text is run through the inline parser.
//! Code blocks are taken verbatim.

use crate::block::{self, is_fence_line};
use crate::inline::text_to_nodes;
use log::trace;
use sitedown_core::{BlockKind, Node, Result};

/// Tag of the root container.
pub const ROOT_TAG: &str = "div";

/// Assemble classified blocks into a root container.
pub fn assemble<S: AsRef<str>>(blocks: &[(S, BlockKind)]) -> Result<Node> {
    let children = blocks
        .iter()
        .map(|(text, kind)| block_to_node(text.as_ref(), *kind))
        .collect::<Result<Vec<_>>>()?;
    Ok(Node::container(ROOT_TAG, children))
}

/// Transform a single block into its subtree.
pub fn block_to_node(block: &str, kind: BlockKind) -> Result<Node> {
    trace!("assembling {} block", kind);
    let children = match kind {
        BlockKind::Heading(level) => {
            let text = block
                .get(level as usize..)
                .and_then(|rest| rest.strip_prefix(' '))
                .unwrap_or(block);
            text_to_nodes(text)?
        }
        BlockKind::Code => vec![Node::leaf("code", code_body(block))],
        BlockKind::Quote => {
            let text = block
                .lines()
                .map(|line| block::quote_line(line).unwrap_or(line))
                .collect::<Vec<_>>()
                .join("\n");
            text_to_nodes(&text)?
        }
        BlockKind::UnorderedList => list_items(block, block::unordered_item)?,
        BlockKind::OrderedList => list_items(block, block::ordered_item)?,
        BlockKind::Paragraph => text_to_nodes(block.trim())?,
    };
    Ok(Node::container(kind.tag(), children))
}

/// Interior of a fenced block, without the fence lines.
fn code_body(block: &str) -> &str {
    let body = match block.split_once('\n') {
        Some((_, rest)) => rest,
        None => return "",
    };
    match body.rfind('\n') {
        Some(end) if is_fence_line(&body[end + 1..]) => &body[..end],
        _ if is_fence_line(body) => "",
        _ => body,
    }
}

fn list_items(block: &str, item: fn(&str) -> Option<&str>) -> Result<Vec<Node>> {
    block
        .lines()
        .map(|line| {
            let text = item(line).unwrap_or(line);
            Ok(Node::container("li", text_to_nodes(text)?))
        })
        .collect()
}
