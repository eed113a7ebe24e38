//! Generic syntax tree
//!
//!     This is the publishing-target independent side of the compiler: the tree an external
//!     markdown parser hands us and the tree an external markdown printer consumes.
//!
//!     The serde form follows mdast conventions so the output of common markdown parsers can be
//!     read as-is: a camelCase `type` tag, `children` arrays, `value` on leaves, `depth` for the
//!     heading level and `lang` for the code language. Fields we do not model (`position`,
//!     `spread`, `start`, ...) are ignored when reading.
//!
//!     Only a handful of kinds carry meaning for the schemas. The inline containers (emphasis,
//!     links, ...) exist so their text can be flattened, the rest exist so they can be recognized
//!     and dropped. Anything else lands in [`Node::Unsupported`].

use serde::{Deserialize, Serialize};

/// A node of the generic syntax tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Heading {
        #[serde(rename = "depth")]
        level: u8,
        #[serde(default)]
        children: Vec<Node>,
    },
    Paragraph {
        #[serde(default)]
        children: Vec<Node>,
    },
    /// `ordered` belongs to the whole list, never to individual items.
    List {
        #[serde(default)]
        ordered: bool,
        #[serde(rename = "children", default)]
        items: Vec<Node>,
    },
    ListItem {
        #[serde(default)]
        children: Vec<Node>,
    },
    Code {
        #[serde(rename = "value", default)]
        text: String,
        #[serde(rename = "lang", default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
    ThematicBreak,
    Blockquote {
        #[serde(default)]
        children: Vec<Node>,
    },
    Text {
        #[serde(default)]
        value: String,
    },
    InlineCode {
        #[serde(default)]
        value: String,
    },
    Emphasis {
        #[serde(default)]
        children: Vec<Node>,
    },
    Strong {
        #[serde(default)]
        children: Vec<Node>,
    },
    Delete {
        #[serde(default)]
        children: Vec<Node>,
    },
    Link {
        #[serde(default)]
        url: String,
        #[serde(default)]
        children: Vec<Node>,
    },
    Image {
        #[serde(default)]
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
    },
    Break,
    Html {
        #[serde(default)]
        value: String,
    },
    Table {
        #[serde(default)]
        children: Vec<Node>,
    },
    TableRow {
        #[serde(default)]
        children: Vec<Node>,
    },
    TableCell {
        #[serde(default)]
        children: Vec<Node>,
    },
    /// Any node kind this tree does not model.
    #[serde(other)]
    Unsupported,
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    pub fn inline_code(value: impl Into<String>) -> Self {
        Node::InlineCode {
            value: value.into(),
        }
    }

    /// A heading holding a single text leaf.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Node::Heading {
            level,
            children: vec![Node::text(text)],
        }
    }

    /// A paragraph holding a single text leaf.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Node::Paragraph {
            children: vec![Node::text(text)],
        }
    }

    /// A list whose items each hold one single-text paragraph.
    pub fn list<I, S>(ordered: bool, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Node::List {
            ordered,
            items: items
                .into_iter()
                .map(|item| Node::ListItem {
                    children: vec![Node::paragraph(item)],
                })
                .collect(),
        }
    }

    pub fn code(text: impl Into<String>, language: Option<&str>) -> Self {
        Node::Code {
            text: text.into(),
            language: language.map(str::to_string),
        }
    }

    /// A blockquote with one single-text paragraph per entry.
    pub fn blockquote<I, S>(paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Node::Blockquote {
            children: paragraphs.into_iter().map(Node::paragraph).collect(),
        }
    }

    /// The direct text carried by a leaf, if this node is one.
    pub fn leaf_value(&self) -> Option<&str> {
        match self {
            Node::Text { value } | Node::InlineCode { value } => Some(value),
            _ => None,
        }
    }

    /// Child nodes; empty for leaves and childless kinds.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Heading { children, .. }
            | Node::Paragraph { children }
            | Node::ListItem { children }
            | Node::Blockquote { children }
            | Node::Emphasis { children }
            | Node::Strong { children }
            | Node::Delete { children }
            | Node::Link { children, .. }
            | Node::Table { children }
            | Node::TableRow { children }
            | Node::TableCell { children } => children,
            Node::List { items, .. } => items,
            Node::Code { .. }
            | Node::ThematicBreak
            | Node::Text { .. }
            | Node::InlineCode { .. }
            | Node::Image { .. }
            | Node::Break
            | Node::Html { .. }
            | Node::Unsupported => &[],
        }
    }

    /// The mdast tag of this node, used when reporting dropped nodes.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Heading { .. } => "heading",
            Node::Paragraph { .. } => "paragraph",
            Node::List { .. } => "list",
            Node::ListItem { .. } => "listItem",
            Node::Code { .. } => "code",
            Node::ThematicBreak => "thematicBreak",
            Node::Blockquote { .. } => "blockquote",
            Node::Text { .. } => "text",
            Node::InlineCode { .. } => "inlineCode",
            Node::Emphasis { .. } => "emphasis",
            Node::Strong { .. } => "strong",
            Node::Delete { .. } => "delete",
            Node::Link { .. } => "link",
            Node::Image { .. } => "image",
            Node::Break => "break",
            Node::Html { .. } => "html",
            Node::Table { .. } => "table",
            Node::TableRow { .. } => "tableRow",
            Node::TableCell { .. } => "tableCell",
            Node::Unsupported => "unsupported",
        }
    }
}

/// The document root: `{"type": "root", "children": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "root")]
pub struct Root {
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Root {
    pub fn new(children: Vec<Node>) -> Self {
        Root { children }
    }
}

impl From<Vec<Node>> for Root {
    fn from(children: Vec<Node>) -> Self {
        Root { children }
    }
}
