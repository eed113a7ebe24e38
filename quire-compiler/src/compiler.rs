//! Compiler facade and schema registry
//!
//! The [`Compiler`] maps schema names to [`DocumentCodec`]s and exposes the two public
//! operations, [`Compiler::to_schema`] and [`Compiler::from_schema`]. Selecting a schema that
//! was never registered is the one way compiling can fail.

use crate::ast::Node;
use crate::block::SchemaDescriptor;
use crate::decode::decode_document;
use crate::encode::encode_document;
use crate::error::CompileError;
use crate::options::CompileOptions;
use crate::schema::{Document, FlatSchema, PagedSchema, Schema};
use std::collections::HashMap;

/// An encoder/decoder pair for one schema, object safe so it can live in the registry.
///
/// Every [`Schema`] is a codec; implement this directly only for schemas that do not go
/// through the shared block vocabulary.
pub trait DocumentCodec: Send + Sync {
    fn descriptor(&self) -> SchemaDescriptor;

    /// The name the schema is selected by (e.g., "paged", "flat")
    fn name(&self) -> &str {
        self.descriptor().name
    }

    fn description(&self) -> &str {
        self.descriptor().description
    }

    /// Encode top-level nodes into a record. Never fails; unsupported nodes are dropped.
    fn encode(&self, nodes: &[Node], options: &CompileOptions) -> Document;

    /// Decode a record back into nodes. Fails only if the record belongs to another schema.
    fn decode(&self, document: &Document) -> Result<Vec<Node>, CompileError>;

    /// Read a record from its wire JSON.
    fn parse_document(&self, json: &str) -> Result<Document, CompileError>;
}

impl<S: Schema> DocumentCodec for S {
    fn descriptor(&self) -> SchemaDescriptor {
        S::DESCRIPTOR
    }

    fn encode(&self, nodes: &[Node], options: &CompileOptions) -> Document {
        S::wrap(encode_document::<S>(nodes, options))
    }

    fn decode(&self, document: &Document) -> Result<Vec<Node>, CompileError> {
        let typed = S::unwrap(document).ok_or_else(|| CompileError::SchemaMismatch {
            expected: S::DESCRIPTOR.name.to_string(),
            found: document.schema().to_string(),
        })?;
        Ok(decode_document::<S>(typed))
    }

    fn parse_document(&self, json: &str) -> Result<Document, CompileError> {
        let typed: S::Document =
            serde_json::from_str(json).map_err(|source| CompileError::InvalidDocument {
                schema: S::DESCRIPTOR.name.to_string(),
                source,
            })?;
        Ok(S::wrap(typed))
    }
}

/// Registry of schema codecs plus the options every compile runs with.
///
/// Holds no mutable state once built, so one compiler can serve any number of threads.
///
/// # Examples
///
/// ```ignore
/// let compiler = Compiler::with_defaults();
/// let record = compiler.to_schema("flat", &root.children)?;
/// let nodes = compiler.from_schema("flat", &record)?;
/// ```
pub struct Compiler {
    codecs: HashMap<String, Box<dyn DocumentCodec>>,
    options: CompileOptions,
}

impl Compiler {
    /// Create a compiler with no schemas registered
    pub fn new() -> Self {
        Compiler {
            codecs: HashMap::new(),
            options: CompileOptions::default(),
        }
    }

    /// Create a compiler with the built-in `paged` and `flat` schemas
    pub fn with_defaults() -> Self {
        let mut compiler = Self::new();
        compiler.register(PagedSchema);
        compiler.register(FlatSchema);
        compiler
    }

    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Register a codec
    ///
    /// If a codec with the same name already exists, it will be replaced.
    pub fn register<C: DocumentCodec + 'static>(&mut self, codec: C) {
        self.codecs.insert(codec.name().to_string(), Box::new(codec));
    }

    /// Get a codec by schema name
    pub fn get(&self, schema: &str) -> Result<&dyn DocumentCodec, CompileError> {
        self.codecs
            .get(schema)
            .map(|codec| codec.as_ref())
            .ok_or_else(|| CompileError::UnsupportedSchema(schema.to_string()))
    }

    pub fn has(&self, schema: &str) -> bool {
        self.codecs.contains_key(schema)
    }

    /// List all registered schema names (sorted)
    pub fn list_schemas(&self) -> Vec<String> {
        let mut names: Vec<_> = self.codecs.keys().cloned().collect();
        names.sort();
        names
    }

    /// Compile generic nodes into a record of the named schema.
    pub fn to_schema(&self, schema: &str, nodes: &[Node]) -> Result<Document, CompileError> {
        let codec = self.get(schema)?;
        Ok(codec.encode(nodes, &self.options))
    }

    /// Compile a record of the named schema back into generic nodes.
    pub fn from_schema(&self, schema: &str, document: &Document) -> Result<Vec<Node>, CompileError> {
        self.get(schema)?.decode(document)
    }

    /// Read a record of the named schema from its wire JSON.
    pub fn parse_document(&self, schema: &str, json: &str) -> Result<Document, CompileError> {
        self.get(schema)?.parse_document(json)
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::with_defaults()
    }
}
