//! Plain-text extraction
//!
//!     Flattens a node and its descendants into a string by collecting every `text` and
//!     `inlineCode` leaf, depth-first, in document order. Formatting containers contribute only
//!     their children's text; kinds without children or a direct value contribute nothing.
//!
//!     Two join policies exist and callers must pick one:
//!
//!     - [`extract_inline`]: tight, leaves are concatenated as-is. Use for the inline content of
//!       a single block (a heading title, a paragraph, a list item).
//!     - [`extract_document`]: loose, a single space between leaves. Use when a whole region
//!       spanning several blocks collapses into one field, such as the document-level text
//!       summary. Empty leaves are skipped so separators never double. Leaves inside one word
//!       (`Hel**lo**`) get split too, so never use it on inline content.

use crate::ast::Node;

/// Tight extraction of a single node.
pub fn extract_inline(node: &Node) -> String {
    let mut out = String::new();
    visit_leaves(node, &mut |leaf| out.push_str(leaf));
    out
}

/// Tight extraction of a node sequence, as if the nodes were siblings under one parent.
pub fn extract_inline_all(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        visit_leaves(node, &mut |leaf| out.push_str(leaf));
    }
    out
}

/// Loose extraction of a single node.
pub fn extract_document(node: &Node) -> String {
    extract_document_all(std::slice::from_ref(node))
}

/// Loose extraction of a node sequence.
pub fn extract_document_all(nodes: &[Node]) -> String {
    let mut leaves: Vec<&str> = Vec::new();
    for node in nodes {
        collect_leaves(node, &mut leaves);
    }
    leaves.join(" ")
}

fn visit_leaves<'a>(node: &'a Node, visit: &mut impl FnMut(&'a str)) {
    if let Some(value) = node.leaf_value() {
        visit(value);
        return;
    }
    for child in node.children() {
        visit_leaves(child, visit);
    }
}

fn collect_leaves<'a>(node: &'a Node, leaves: &mut Vec<&'a str>) {
    visit_leaves(node, &mut |leaf| {
        if !leaf.is_empty() {
            leaves.push(leaf);
        }
    });
}
