//! Target schemas
//!
//!     A schema is an externally published record format we have to match byte for byte. Each
//!     one lives in its own module and provides three things:
//!
//!     - its wire types (serde, discriminated by `$type`)
//!     - its [`SchemaDescriptor`] row, which states what it can express
//!     - the mapping between the neutral [`Block`] vocabulary and its wire blocks
//!
//!     The encoder and decoder are written once against the [`Schema`] trait. Adding a schema
//!     means adding a module and a [`Document`] variant, never touching the traversal code.
//!
//!     | Schema  | Ordered lists | Quote arity | Container            |
//!     |---------|---------------|-------------|----------------------|
//!     | `paged` | degenerate    | single      | pages of aligned blocks |
//!     | `flat`  | kept          | many        | one item list        |

pub mod flat;
pub mod paged;

use crate::block::{Block, SchemaDescriptor};
use crate::error::CompileError;
use crate::options::CompileOptions;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use flat::{FlatDocument, FlatSchema};
pub use paged::{PagedDocument, PagedSchema};

/// A wire schema the shared encoder and decoder can target.
pub trait Schema: Send + Sync + 'static {
    /// One wire block, including any per-block wrapper the schema uses.
    type Block: fmt::Debug;
    /// The top-level record content.
    type Document: Serialize + DeserializeOwned;

    const DESCRIPTOR: SchemaDescriptor;

    /// Spell a neutral block in this schema.
    fn lower(block: Block, options: &CompileOptions) -> Self::Block;

    /// Read a wire block back. `None` for kinds this schema does not know.
    fn lift(block: &Self::Block) -> Option<Block>;

    /// Wrap encoded blocks into the record container.
    fn assemble(blocks: Vec<Self::Block>, options: &CompileOptions) -> Self::Document;

    /// All blocks of a record, in reading order.
    fn blocks(document: &Self::Document) -> Vec<&Self::Block>;

    fn wrap(document: Self::Document) -> Document;

    fn unwrap(document: &Document) -> Option<&Self::Document>;
}

/// The closed set of built-in schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaId {
    Paged,
    Flat,
}

impl SchemaId {
    pub const ALL: [SchemaId; 2] = [SchemaId::Paged, SchemaId::Flat];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaId::Paged => PagedSchema::DESCRIPTOR.name,
            SchemaId::Flat => FlatSchema::DESCRIPTOR.name,
        }
    }

    pub fn descriptor(&self) -> SchemaDescriptor {
        match self {
            SchemaId::Paged => PagedSchema::DESCRIPTOR,
            SchemaId::Flat => FlatSchema::DESCRIPTOR,
        }
    }
}

impl fmt::Display for SchemaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaId {
    type Err = CompileError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        SchemaId::ALL
            .into_iter()
            .find(|id| id.as_str() == name)
            .ok_or_else(|| CompileError::UnsupportedSchema(name.to_string()))
    }
}

/// A compiled record, in the wire shape of the schema that produced it.
///
/// Serialized untagged: the JSON is exactly the schema's own record content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Document {
    Paged(PagedDocument),
    Flat(FlatDocument),
}

impl Document {
    pub fn schema(&self) -> SchemaId {
        match self {
            Document::Paged(_) => SchemaId::Paged,
            Document::Flat(_) => SchemaId::Flat,
        }
    }

    /// Number of wire blocks across the whole record.
    pub fn block_count(&self) -> usize {
        match self {
            Document::Paged(doc) => PagedSchema::blocks(doc).len(),
            Document::Flat(doc) => FlatSchema::blocks(doc).len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.block_count() == 0
    }
}

impl From<PagedDocument> for Document {
    fn from(document: PagedDocument) -> Self {
        Document::Paged(document)
    }
}

impl From<FlatDocument> for Document {
    fn from(document: FlatDocument) -> Self {
        Document::Flat(document)
    }
}
