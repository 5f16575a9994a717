//! Render-agnostic document tree.
//!
//! A [`Node`] is either a leaf (optional tag, text value, attributes) or a
//! container (tag, ordered children, attributes). Trees are built bottom-up
//! by the parser and serialized to HTML with [`Node::serialize`].

use crate::error::{Result, SitedownError};

/// Ordered attribute map.
///
/// Attributes keep insertion order so serialization is deterministic.
/// Inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an attribute.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Look up an attribute value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as ` key="value"` pairs, each prefixed by a single space.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.iter() {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Terminal text. A leaf without a tag renders as its bare value.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attributes: Attributes,
    },
    /// An ordered group of child nodes.
    Container {
        tag: String,
        children: Vec<Node>,
        attributes: Attributes,
    },
}

impl Node {
    /// Untagged text leaf.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Leaf {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Tagged leaf without attributes.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::leaf_with_attributes(tag, value, Attributes::new())
    }

    /// Tagged leaf with attributes.
    pub fn leaf_with_attributes(
        tag: impl Into<String>,
        value: impl Into<String>,
        attributes: Attributes,
    ) -> Self {
        Node::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes,
        }
    }

    /// Container without attributes.
    pub fn container(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self::container_with_attributes(tag, children, Attributes::new())
    }

    /// Container with attributes.
    pub fn container_with_attributes(
        tag: impl Into<String>,
        children: Vec<Node>,
        attributes: Attributes,
    ) -> Self {
        Node::Container {
            tag: tag.into(),
            children,
            attributes,
        }
    }

    /// Tag of this node, `None` for plain text leaves.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf { tag, .. } => tag.as_deref(),
            Node::Container { tag, .. } => Some(tag),
        }
    }

    /// Children of a container; leaves have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf { .. } => &[],
            Node::Container { children, .. } => children,
        }
    }

    /// Leaf value, `None` for containers.
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Leaf { value, .. } => value.as_deref(),
            Node::Container { .. } => None,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Node::Leaf { attributes, .. } | Node::Container { attributes, .. } => attributes,
        }
    }

    /// Serialize the tree to an HTML string.
    ///
    /// Fails with [`SitedownError::MissingRequiredField`] when a leaf has no
    /// value or a tag is empty.
    pub fn serialize(&self) -> Result<String> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    /// Append the HTML for this node to `out`.
    pub fn write_html(&self, out: &mut String) -> Result<()> {
        match self {
            Node::Leaf {
                tag,
                value,
                attributes,
            } => {
                let value = value
                    .as_deref()
                    .ok_or(SitedownError::MissingRequiredField("value"))?;
                match tag.as_deref() {
                    None => out.push_str(value),
                    Some("") => return Err(SitedownError::MissingRequiredField("tag")),
                    Some(tag) => {
                        open_tag(out, tag, attributes);
                        out.push_str(value);
                        close_tag(out, tag);
                    }
                }
            }
            Node::Container {
                tag,
                children,
                attributes,
            } => {
                if tag.is_empty() {
                    return Err(SitedownError::MissingRequiredField("tag"));
                }
                open_tag(out, tag, attributes);
                for child in children {
                    child.write_html(out)?;
                }
                close_tag(out, tag);
            }
        }
        Ok(())
    }
}

fn open_tag(out: &mut String, tag: &str, attributes: &Attributes) {
    out.push('<');
    out.push_str(tag);
    out.push_str(&attributes.to_html());
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
