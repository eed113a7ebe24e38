//! Flat schema
//!
//! Wire shape:
//!
//! ```text
//! { "items": [ <block> ] }
//! ```
//!
//! Blocks are tagged by `$type` over `heading | text | bulletList | orderedList | codeBlock |
//! horizontalRule | blockquote`. No pages, no alignment. Lists keep their ordering and quotes
//! hold one text entry per paragraph.

use super::{Document, Schema};
use crate::block::{clamp_level, normalize_language, Block, BlockquoteArity, SchemaDescriptor};
use crate::options::CompileOptions;
use serde::{Deserialize, Serialize};

pub struct FlatSchema;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlatDocument {
    pub items: Vec<FlatBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$type", rename_all = "camelCase")]
pub enum FlatBlock {
    Heading {
        level: u8,
        plaintext: String,
    },
    Text(TextItem),
    BulletList {
        items: Vec<ListItem>,
    },
    OrderedList {
        items: Vec<ListItem>,
    },
    CodeBlock {
        plaintext: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
    HorizontalRule,
    Blockquote {
        items: Vec<TextItem>,
    },
    /// A block kind this schema version does not know.
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextItem {
    pub plaintext: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub content: TextItem,
}

fn list_items(items: Vec<String>) -> Vec<ListItem> {
    items
        .into_iter()
        .map(|plaintext| ListItem {
            content: TextItem { plaintext },
        })
        .collect()
}

fn item_texts(items: &[ListItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.content.plaintext.clone())
        .collect()
}

impl Schema for FlatSchema {
    type Block = FlatBlock;
    type Document = FlatDocument;

    const DESCRIPTOR: SchemaDescriptor = SchemaDescriptor {
        name: "flat",
        description: "Flat list of blocks; ordered and bullet lists, multi-paragraph quotes",
        ordered_lists: true,
        blockquote: BlockquoteArity::Many,
    };

    fn lower(block: Block, _options: &CompileOptions) -> FlatBlock {
        match block {
            Block::Heading { level, plaintext } => FlatBlock::Heading {
                level: clamp_level(level),
                plaintext,
            },
            Block::Text { plaintext } => FlatBlock::Text(TextItem { plaintext }),
            Block::List {
                ordered: true,
                items,
            } => FlatBlock::OrderedList {
                items: list_items(items),
            },
            Block::List {
                ordered: false,
                items,
            } => FlatBlock::BulletList {
                items: list_items(items),
            },
            Block::Code {
                plaintext,
                language,
            } => FlatBlock::CodeBlock {
                plaintext,
                language: normalize_language(language.as_deref()),
            },
            Block::HorizontalRule => FlatBlock::HorizontalRule,
            Block::Blockquote { paragraphs } => FlatBlock::Blockquote {
                items: paragraphs
                    .into_iter()
                    .map(|plaintext| TextItem { plaintext })
                    .collect(),
            },
        }
    }

    fn lift(block: &FlatBlock) -> Option<Block> {
        let lifted = match block {
            FlatBlock::Heading { level, plaintext } => Block::Heading {
                level: clamp_level(*level),
                plaintext: plaintext.clone(),
            },
            FlatBlock::Text(text) => Block::Text {
                plaintext: text.plaintext.clone(),
            },
            FlatBlock::BulletList { items } => Block::List {
                ordered: false,
                items: item_texts(items),
            },
            FlatBlock::OrderedList { items } => Block::List {
                ordered: true,
                items: item_texts(items),
            },
            FlatBlock::CodeBlock {
                plaintext,
                language,
            } => Block::Code {
                plaintext: plaintext.clone(),
                language: normalize_language(language.as_deref()),
            },
            FlatBlock::HorizontalRule => Block::HorizontalRule,
            FlatBlock::Blockquote { items } => Block::Blockquote {
                paragraphs: items.iter().map(|item| item.plaintext.clone()).collect(),
            },
            FlatBlock::Unsupported => return None,
        };
        Some(lifted)
    }

    fn assemble(blocks: Vec<FlatBlock>, _options: &CompileOptions) -> FlatDocument {
        FlatDocument { items: blocks }
    }

    fn blocks(document: &FlatDocument) -> Vec<&FlatBlock> {
        document.items.iter().collect()
    }

    fn wrap(document: FlatDocument) -> Document {
        Document::Flat(document)
    }

    fn unwrap(document: &Document) -> Option<&FlatDocument> {
        match document {
            Document::Flat(document) => Some(document),
            _ => None,
        }
    }
}
