//! Document content compiler
//!
//!     This crate converts a generic rich-text syntax tree into block-based publishing schemas,
//!     and back. The schemas are record formats defined by someone else and must be matched
//!     exactly; the tree is whatever an external markdown parser produced.
//!
//!     This is a pure lib: no network, no shell, no environment. Parsing text into a tree and
//!     printing a tree back to text are collaborators (see [`publish`]); storing records is the
//!     caller's business.
//!
//! Architecture
//!
//!     - Extractor: flattens inline content to plain text, tight or loose ([`extract`])
//!     - Block vocabulary: schema-neutral blocks and the descriptor table ([`block`])
//!     - Schemas: wire types plus the mapping from/to the vocabulary ([`schema`])
//!     - Encoder / Decoder: written once, parameterized by schema ([`encode`], [`decode`])
//!     - Compiler: registry of schemas, the `to_schema` / `from_schema` facade ([`compiler`])
//!
//!     The file structure :
//!     .
//!     ├── ast.rs                  # Generic syntax tree (mdast-shaped serde)
//!     ├── extract.rs              # Plain-text extraction
//!     ├── block.rs                # Neutral blocks, descriptors
//!     ├── encode.rs               # Nodes → blocks
//!     ├── decode.rs               # Blocks → nodes
//!     ├── schema
//!     │   ├── paged.rs            # Pages of aligned blocks
//!     │   ├── flat.rs             # Flat block list
//!     │   └── mod.rs              # Schema trait, Document, SchemaId
//!     ├── compiler.rs             # Registry and facade
//!     ├── options.rs
//!     ├── publish.rs              # Publish / import workflows
//!     ├── error.rs
//!     ├── lib.rs
//!
//! Information Loss
//!
//!     Compiling is lossy and never reports it:
//!     - inline formatting (emphasis, links, code spans, images) becomes plain text
//!     - node kinds without a block form (tables, html, ...) are dropped
//!     - nested content inside list items is flattened into the item's text
//!     - ordered lists become unordered in schemas that cannot express them
//!     - multi-paragraph quotes collapse to one string in single-arity schemas
//!
//!     Callers that need to detect loss compare block kind counts themselves.
//!
//! Concurrency
//!
//!     Everything here is a pure function of its input. A [`Compiler`] is immutable once built
//!     and can be shared freely between threads.

pub mod ast;
pub mod block;
pub mod compiler;
pub mod decode;
pub mod encode;
pub mod error;
pub mod extract;
pub mod options;
pub mod publish;
pub mod schema;

pub use ast::{Node, Root};
pub use block::{Block, BlockKind, SchemaDescriptor};
pub use compiler::{Compiler, DocumentCodec};
pub use error::{CompileError, PublishError};
pub use extract::{extract_document, extract_document_all, extract_inline, extract_inline_all};
pub use options::CompileOptions;
pub use schema::{Document, FlatDocument, PagedDocument, Schema, SchemaId};

use once_cell::sync::Lazy;

static DEFAULT_COMPILER: Lazy<Compiler> = Lazy::new(Compiler::with_defaults);

/// Compile nodes into a record of the named schema, using the built-in schemas and default
/// options.
pub fn to_schema(schema: &str, nodes: &[Node]) -> Result<Document, CompileError> {
    DEFAULT_COMPILER.to_schema(schema, nodes)
}

/// Compile a record of the named schema back into nodes, using the built-in schemas.
pub fn from_schema(schema: &str, document: &Document) -> Result<Vec<Node>, CompileError> {
    DEFAULT_COMPILER.from_schema(schema, document)
}
