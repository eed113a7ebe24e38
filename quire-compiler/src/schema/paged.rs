//! Paged schema
//!
//! Wire shape:
//!
//! ```text
//! { "pages": [ { "blocks": [ { "block": <payload>, "alignment": "left" } ] } ] }
//! ```
//!
//! Payloads are tagged by `$type` over `header | text | unorderedList | code | horizontalRule |
//! blockquote`. There is no ordered list, list items hold a single text payload, and a quote is
//! one flattened string. The encoder always emits exactly one page; the decoder reads every page
//! in order.

use super::{Document, Schema};
use crate::block::{clamp_level, normalize_language, Block, BlockquoteArity, SchemaDescriptor};
use crate::options::CompileOptions;
use serde::{Deserialize, Serialize};

pub struct PagedSchema;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PagedDocument {
    pub pages: Vec<Page>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub blocks: Vec<AlignedBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedBlock {
    pub block: PagedBlock,
    #[serde(default)]
    pub alignment: Alignment,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    #[default]
    Default,
    Small,
    Large,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$type", rename_all = "camelCase")]
pub enum PagedBlock {
    Header {
        level: u8,
        plaintext: String,
    },
    Text(TextPayload),
    UnorderedList {
        items: Vec<ListItem>,
    },
    Code {
        plaintext: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
    HorizontalRule,
    Blockquote {
        plaintext: String,
    },
    /// A payload kind this schema version does not know.
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPayload {
    pub plaintext: String,
    #[serde(rename = "textSize", default)]
    pub text_size: TextSize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub content: TextPayload,
}

impl Schema for PagedSchema {
    type Block = AlignedBlock;
    type Document = PagedDocument;

    const DESCRIPTOR: SchemaDescriptor = SchemaDescriptor {
        name: "paged",
        description: "Pages of aligned blocks; unordered lists only, single-string quotes",
        ordered_lists: false,
        blockquote: BlockquoteArity::Single,
    };

    fn lower(block: Block, options: &CompileOptions) -> AlignedBlock {
        let text_size = options.paged.text_size;
        let payload = match block {
            Block::Heading { level, plaintext } => PagedBlock::Header {
                level: clamp_level(level),
                plaintext,
            },
            Block::Text { plaintext } => PagedBlock::Text(TextPayload {
                plaintext,
                text_size,
            }),
            // No ordered variant: `ordered` has nowhere to go.
            Block::List { items, .. } => PagedBlock::UnorderedList {
                items: items
                    .into_iter()
                    .map(|plaintext| ListItem {
                        content: TextPayload {
                            plaintext,
                            text_size,
                        },
                    })
                    .collect(),
            },
            Block::Code {
                plaintext,
                language,
            } => PagedBlock::Code {
                plaintext,
                language: normalize_language(language.as_deref()),
            },
            Block::HorizontalRule => PagedBlock::HorizontalRule,
            Block::Blockquote { paragraphs } => PagedBlock::Blockquote {
                plaintext: paragraphs.join(" "),
            },
        };
        AlignedBlock {
            block: payload,
            alignment: options.paged.alignment,
        }
    }

    fn lift(block: &AlignedBlock) -> Option<Block> {
        let lifted = match &block.block {
            PagedBlock::Header { level, plaintext } => Block::Heading {
                level: clamp_level(*level),
                plaintext: plaintext.clone(),
            },
            PagedBlock::Text(text) => Block::Text {
                plaintext: text.plaintext.clone(),
            },
            PagedBlock::UnorderedList { items } => Block::List {
                ordered: false,
                items: items
                    .iter()
                    .map(|item| item.content.plaintext.clone())
                    .collect(),
            },
            PagedBlock::Code {
                plaintext,
                language,
            } => Block::Code {
                plaintext: plaintext.clone(),
                language: normalize_language(language.as_deref()),
            },
            PagedBlock::HorizontalRule => Block::HorizontalRule,
            PagedBlock::Blockquote { plaintext } => Block::Blockquote {
                paragraphs: vec![plaintext.clone()],
            },
            PagedBlock::Unsupported => return None,
        };
        Some(lifted)
    }

    fn assemble(blocks: Vec<AlignedBlock>, _options: &CompileOptions) -> PagedDocument {
        PagedDocument {
            pages: vec![Page { blocks }],
        }
    }

    fn blocks(document: &PagedDocument) -> Vec<&AlignedBlock> {
        document
            .pages
            .iter()
            .flat_map(|page| page.blocks.iter())
            .collect()
    }

    fn wrap(document: PagedDocument) -> Document {
        Document::Paged(document)
    }

    fn unwrap(document: &Document) -> Option<&PagedDocument> {
        match document {
            Document::Paged(document) => Some(document),
            _ => None,
        }
    }
}
