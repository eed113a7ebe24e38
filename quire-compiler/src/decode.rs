//! Schema blocks → generic tree
//!
//!     The inverse pass. Each wire block is read back into a neutral [`Block`] by its schema
//!     and raised into exactly one generic node. Wire kinds the schema does not know are
//!     skipped, so decoding is total over anything that deserialized.
//!
//!     Raised nodes are always in their simplest form: one text leaf per heading or paragraph,
//!     one single-paragraph item per list entry, one paragraph per quoted string.

use crate::ast::Node;
use crate::block::Block;
use crate::schema::Schema;
use tracing::debug;

/// Decode wire blocks of `S` into generic nodes.
pub fn decode<'a, S, I>(blocks: I) -> Vec<Node>
where
    S: Schema,
    S::Block: 'a,
    I: IntoIterator<Item = &'a S::Block>,
{
    let mut nodes = Vec::new();
    for block in blocks {
        match S::lift(block) {
            Some(lifted) => nodes.push(raise_block(lifted)),
            None => debug!(
                schema = S::DESCRIPTOR.name,
                "skipping block kind unknown to the schema"
            ),
        }
    }
    nodes
}

/// Decode a complete record of `S`.
pub fn decode_document<S: Schema>(document: &S::Document) -> Vec<Node> {
    decode::<S, _>(S::blocks(document))
}

/// Raise one neutral block into its generic node.
pub fn raise_block(block: Block) -> Node {
    match block {
        Block::Heading { level, plaintext } => Node::heading(level, plaintext),
        Block::Text { plaintext } => Node::paragraph(plaintext),
        Block::List { ordered, items } => Node::list(ordered, items),
        Block::Code {
            plaintext,
            language,
        } => Node::Code {
            text: plaintext,
            language,
        },
        Block::HorizontalRule => Node::ThematicBreak,
        Block::Blockquote { paragraphs } => Node::blockquote(paragraphs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::flat::{FlatBlock, FlatDocument, FlatSchema, ListItem, TextItem};
    use crate::schema::paged::{PagedDocument, PagedSchema};
    use serde_json::json;

    #[test]
    fn flat_blocks_raise_in_order() {
        let document = FlatDocument {
            items: vec![
                FlatBlock::Heading {
                    level: 2,
                    plaintext: "Title".to_string(),
                },
                FlatBlock::OrderedList {
                    items: vec![ListItem {
                        content: TextItem {
                            plaintext: "first".to_string(),
                        },
                    }],
                },
                FlatBlock::HorizontalRule,
                FlatBlock::CodeBlock {
                    plaintext: "x = 1".to_string(),
                    language: Some("python".to_string()),
                },
            ],
        };
        assert_eq!(
            decode_document::<FlatSchema>(&document),
            vec![
                Node::heading(2, "Title"),
                Node::list(true, ["first"]),
                Node::ThematicBreak,
                Node::code("x = 1", Some("python")),
            ]
        );
    }

    #[test]
    fn flat_quote_keeps_every_paragraph() {
        let blocks = [FlatBlock::Blockquote {
            items: vec![
                TextItem {
                    plaintext: "x".to_string(),
                },
                TextItem {
                    plaintext: "y".to_string(),
                },
            ],
        }];
        assert_eq!(
            decode::<FlatSchema, _>(&blocks),
            vec![Node::blockquote(["x", "y"])]
        );
    }

    #[test]
    fn paged_list_never_comes_back_ordered() {
        let document: PagedDocument = serde_json::from_value(json!({
            "pages": [{"blocks": [{
                "block": {"$type": "unorderedList", "items": [
                    {"content": {"plaintext": "a"}},
                    {"content": {"plaintext": "b", "textSize": "small"}}
                ]},
                "alignment": "left"
            }]}]
        }))
        .unwrap();
        assert_eq!(
            decode_document::<PagedSchema>(&document),
            vec![Node::list(false, ["a", "b"])]
        );
    }

    #[test]
    fn paged_pages_decode_in_order_and_skip_unknown() {
        let document: PagedDocument = serde_json::from_value(json!({
            "pages": [
                {"blocks": [
                    {"block": {"$type": "text", "plaintext": "one"}, "alignment": "left"},
                    {"block": {"$type": "image", "src": "a.png"}, "alignment": "center"}
                ]},
                {"blocks": [
                    {"block": {"$type": "blockquote", "plaintext": "two"}, "alignment": "left"}
                ]}
            ]
        }))
        .unwrap();
        assert_eq!(
            decode_document::<PagedSchema>(&document),
            vec![Node::paragraph("one"), Node::blockquote(["two"])]
        );
    }

    #[test]
    fn empty_input_decodes_to_nothing() {
        let none: [FlatBlock; 0] = [];
        assert!(decode::<FlatSchema, _>(&none).is_empty());
        assert!(decode_document::<PagedSchema>(&PagedDocument::default()).is_empty());
    }
}
