//! Schema-neutral block vocabulary
//!
//!     Every schema speaks a dialect of the same handful of block kinds. The encoder lowers
//!     generic nodes into [`Block`] and each schema maps that onto its wire blocks; the decoder
//!     runs the same path backwards. Keeping the vocabulary here means a schema only states how
//!     it spells each kind, while the descriptor table states what it can express.

use std::fmt;

pub const MIN_HEADING_LEVEL: u8 = 1;
pub const MAX_HEADING_LEVEL: u8 = 6;

/// A block carrying plain text only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, plaintext: String },
    Text { plaintext: String },
    List { ordered: bool, items: Vec<String> },
    Code { plaintext: String, language: Option<String> },
    HorizontalRule,
    Blockquote { paragraphs: Vec<String> },
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Heading { .. } => BlockKind::Heading,
            Block::Text { .. } => BlockKind::Text,
            Block::List { ordered: false, .. } => BlockKind::UnorderedList,
            Block::List { ordered: true, .. } => BlockKind::OrderedList,
            Block::Code { .. } => BlockKind::Code,
            Block::HorizontalRule => BlockKind::HorizontalRule,
            Block::Blockquote { .. } => BlockKind::Blockquote,
        }
    }
}

/// Names each block kind, for counting and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Heading,
    Text,
    UnorderedList,
    OrderedList,
    Code,
    HorizontalRule,
    Blockquote,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockKind::Heading => "heading",
            BlockKind::Text => "text",
            BlockKind::UnorderedList => "unordered-list",
            BlockKind::OrderedList => "ordered-list",
            BlockKind::Code => "code",
            BlockKind::HorizontalRule => "horizontal-rule",
            BlockKind::Blockquote => "blockquote",
        };
        f.write_str(name)
    }
}

/// How many paragraphs a schema's quote block can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockquoteArity {
    /// One flattened string; non-empty paragraphs joined with a space.
    Single,
    /// One text entry per quoted child.
    Many,
}

/// What a schema can express. One row per schema drives the shared encoder and decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    /// Whether ordered lists survive; otherwise they degenerate to unordered ones.
    pub ordered_lists: bool,
    pub blockquote: BlockquoteArity,
}

/// Clamp a heading level into `1..=6`.
pub fn clamp_level(level: u8) -> u8 {
    level.clamp(MIN_HEADING_LEVEL, MAX_HEADING_LEVEL)
}

/// Language tags pass through only when present and non-empty.
pub fn normalize_language(language: Option<&str>) -> Option<String> {
    language
        .filter(|language| !language.is_empty())
        .map(str::to_string)
}
