//! Generic tree → schema blocks
//!
//!     One pass over the top-level nodes. Each node is lowered to at most one neutral
//!     [`Block`], shaped by the schema's descriptor, then spelled in the schema's wire form.
//!
//!     | Node            | Block                                              |
//!     |-----------------|----------------------------------------------------|
//!     | `heading`       | heading, tight text of the children                |
//!     | `paragraph`     | text, tight text of the children                   |
//!     | `list`          | list, one tight string per item; ordering kept only if the schema can |
//!     | `code`          | code, verbatim, language only when non-empty       |
//!     | `thematicBreak` | horizontal rule                                    |
//!     | `blockquote`    | one tight string per child; single arity joins them with a space |
//!     | anything else   | dropped                                            |
//!
//!     Dropping is silent by contract. The only trace is a `debug` event per dropped node.

use crate::ast::Node;
use crate::block::{clamp_level, normalize_language, Block, BlockquoteArity, SchemaDescriptor};
use crate::extract::{extract_inline, extract_inline_all};
use crate::options::CompileOptions;
use crate::schema::Schema;
use tracing::debug;

/// Encode top-level nodes into the wire blocks of `S`.
pub fn encode<S: Schema>(nodes: &[Node], options: &CompileOptions) -> Vec<S::Block> {
    let blocks: Vec<S::Block> = lower_nodes(nodes, &S::DESCRIPTOR)
        .into_iter()
        .map(|block| S::lower(block, options))
        .collect();
    debug!(
        schema = S::DESCRIPTOR.name,
        nodes = nodes.len(),
        blocks = blocks.len(),
        "encoded nodes"
    );
    blocks
}

/// Encode top-level nodes into a complete record of `S`.
pub fn encode_document<S: Schema>(nodes: &[Node], options: &CompileOptions) -> S::Document {
    S::assemble(encode::<S>(nodes, options), options)
}

/// Lower a node sequence to neutral blocks, dropping what the descriptor cannot hold.
pub fn lower_nodes(nodes: &[Node], descriptor: &SchemaDescriptor) -> Vec<Block> {
    nodes
        .iter()
        .filter_map(|node| lower_node(node, descriptor))
        .collect()
}

/// Lower one top-level node. `None` means the node has no block form.
pub fn lower_node(node: &Node, descriptor: &SchemaDescriptor) -> Option<Block> {
    let block = match node {
        Node::Heading { level, children } => Block::Heading {
            level: clamp_level(*level),
            plaintext: extract_inline_all(children),
        },
        Node::Paragraph { children } => Block::Text {
            plaintext: extract_inline_all(children),
        },
        Node::List { ordered, items } => Block::List {
            ordered: *ordered && descriptor.ordered_lists,
            items: items.iter().map(extract_inline).collect(),
        },
        Node::Code { text, language } => Block::Code {
            plaintext: text.clone(),
            language: normalize_language(language.as_deref()),
        },
        Node::ThematicBreak => Block::HorizontalRule,
        Node::Blockquote { children } => Block::Blockquote {
            paragraphs: quote_paragraphs(children, descriptor.blockquote),
        },
        other => {
            debug!(
                schema = descriptor.name,
                kind = other.kind_name(),
                "dropping node without a block form"
            );
            return None;
        }
    };
    Some(block)
}

fn quote_paragraphs(children: &[Node], arity: BlockquoteArity) -> Vec<String> {
    match arity {
        BlockquoteArity::Single => {
            let paragraphs: Vec<String> = children
                .iter()
                .map(extract_inline)
                .filter(|paragraph| !paragraph.is_empty())
                .collect();
            vec![paragraphs.join(" ")]
        }
        BlockquoteArity::Many if children.is_empty() => vec![String::new()],
        BlockquoteArity::Many => children.iter().map(extract_inline).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::flat::{FlatBlock, FlatSchema, TextItem};
    use crate::schema::paged::{PagedBlock, PagedSchema};

    fn flat(nodes: &[Node]) -> Vec<FlatBlock> {
        encode::<FlatSchema>(nodes, &CompileOptions::default())
    }

    fn paged(nodes: &[Node]) -> Vec<PagedBlock> {
        encode::<PagedSchema>(nodes, &CompileOptions::default())
            .into_iter()
            .map(|aligned| aligned.block)
            .collect()
    }

    #[test]
    fn unsupported_nodes_are_dropped_in_place() {
        let nodes = vec![
            Node::heading(1, "A"),
            Node::Table {
                children: vec![Node::TableRow {
                    children: vec![Node::TableCell {
                        children: vec![Node::text("cell")],
                    }],
                }],
            },
            Node::paragraph("B"),
        ];
        assert_eq!(
            flat(&nodes),
            vec![
                FlatBlock::Heading {
                    level: 1,
                    plaintext: "A".to_string()
                },
                FlatBlock::Text(TextItem {
                    plaintext: "B".to_string()
                }),
            ]
        );
        assert_eq!(paged(&nodes).len(), 2);
    }

    #[test]
    fn inline_formatting_flattens_to_plain_text() {
        let nodes = vec![Node::Paragraph {
            children: vec![
                Node::text("see "),
                Node::Link {
                    url: "https://example.com".to_string(),
                    children: vec![Node::Emphasis {
                        children: vec![Node::text("here")],
                    }],
                },
                Node::Image {
                    url: "a.png".to_string(),
                    alt: None,
                },
            ],
        }];
        assert_eq!(
            flat(&nodes),
            vec![FlatBlock::Text(TextItem {
                plaintext: "see here".to_string()
            })]
        );
    }

    #[test]
    fn nested_list_items_flatten() {
        let nodes = vec![Node::List {
            ordered: false,
            items: vec![Node::ListItem {
                children: vec![Node::paragraph("parent"), Node::list(true, ["child"])],
            }],
        }];
        let descriptor = FlatSchema::DESCRIPTOR;
        assert_eq!(
            lower_nodes(&nodes, &descriptor),
            vec![Block::List {
                ordered: false,
                items: vec!["parentchild".to_string()]
            }]
        );
    }

    #[test]
    fn ordered_lists_degenerate_only_where_unsupported() {
        let nodes = vec![Node::list(true, ["a", "b"])];
        assert!(matches!(
            lower_node(&nodes[0], &PagedSchema::DESCRIPTOR),
            Some(Block::List { ordered: false, .. })
        ));
        assert!(matches!(
            lower_node(&nodes[0], &FlatSchema::DESCRIPTOR),
            Some(Block::List { ordered: true, .. })
        ));
    }

    #[test]
    fn quote_arity_follows_descriptor() {
        let quote = Node::blockquote(["x", "y"]);
        assert_eq!(
            lower_node(&quote, &PagedSchema::DESCRIPTOR),
            Some(Block::Blockquote {
                paragraphs: vec!["x y".to_string()]
            })
        );
        assert_eq!(
            lower_node(&quote, &FlatSchema::DESCRIPTOR),
            Some(Block::Blockquote {
                paragraphs: vec!["x".to_string(), "y".to_string()]
            })
        );
    }

    #[test]
    fn single_arity_quote_keeps_formatted_words_whole() {
        let quote = Node::Blockquote {
            children: vec![
                Node::Paragraph {
                    children: vec![
                        Node::text("Hel"),
                        Node::Strong {
                            children: vec![Node::text("lo")],
                        },
                        Node::text(" world"),
                    ],
                },
                Node::Paragraph { children: vec![] },
                Node::Paragraph {
                    children: vec![Node::Emphasis {
                        children: vec![Node::text("again")],
                    }],
                },
            ],
        };
        assert_eq!(
            paged(std::slice::from_ref(&quote)),
            vec![PagedBlock::Blockquote {
                plaintext: "Hello world again".to_string()
            }]
        );
        assert_eq!(
            lower_node(&quote, &FlatSchema::DESCRIPTOR),
            Some(Block::Blockquote {
                paragraphs: vec![
                    "Hello world".to_string(),
                    String::new(),
                    "again".to_string()
                ]
            })
        );
    }

    #[test]
    fn empty_quote_keeps_one_empty_paragraph() {
        let quote = Node::Blockquote { children: vec![] };
        for descriptor in [PagedSchema::DESCRIPTOR, FlatSchema::DESCRIPTOR] {
            assert_eq!(
                lower_node(&quote, &descriptor),
                Some(Block::Blockquote {
                    paragraphs: vec![String::new()]
                })
            );
        }
    }

    #[test]
    fn code_language_empty_is_omitted() {
        let nodes = vec![Node::code("  indented\n\ttabs", Some(""))];
        assert_eq!(
            paged(&nodes),
            vec![PagedBlock::Code {
                plaintext: "  indented\n\ttabs".to_string(),
                language: None
            }]
        );
    }

    #[test]
    fn heading_levels_are_clamped() {
        let nodes = vec![Node::heading(0, "low"), Node::heading(7, "high")];
        let levels: Vec<u8> = flat(&nodes)
            .into_iter()
            .filter_map(|block| match block {
                FlatBlock::Heading { level, .. } => Some(level),
                _ => None,
            })
            .collect();
        assert_eq!(levels, vec![1, 6]);
    }

    #[test]
    fn empty_input_encodes_to_nothing() {
        assert!(flat(&[]).is_empty());
        assert!(paged(&[]).is_empty());
    }
}
