//! Publish and import workflows
//!
//!     The compiler sits between two capabilities it does not own: a parser that turns authored
//!     text into a generic tree, and a printer that turns a generic tree back into text. These
//!     are [`TreeParser`] and [`TreePrinter`]. The workflows here thread them through a
//!     [`Compiler`]:
//!
//!     - publish: text → parser → nodes → record, plus the loose-joined text summary
//!     - import:  record → nodes → printer → text
//!
//!     Storing a record remotely is the caller's business. The record of a publication can
//!     optionally be written to disk as JSON.

use crate::ast::Node;
use crate::compiler::Compiler;
use crate::error::PublishError;
use crate::extract::extract_document_all;
use crate::schema::Document;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Turns authored text into top-level generic nodes.
pub trait TreeParser {
    fn parse(&self, text: &str) -> Result<Vec<Node>, PublishError>;
}

/// Turns generic nodes back into authored text.
pub trait TreePrinter {
    fn print(&self, nodes: &[Node]) -> Result<String, PublishError>;
}

#[derive(Debug)]
pub struct PublishSpec<'a> {
    pub source: &'a str,
    pub schema: &'a str,
    pub output: Option<PathBuf>,
}

impl<'a> PublishSpec<'a> {
    pub fn new(source: &'a str, schema: &'a str) -> Self {
        Self {
            source,
            schema,
            output: None,
        }
    }

    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }
}

/// A compiled record ready to hand to a publishing collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Publication {
    pub schema: String,
    pub content: Document,
    /// Loose-joined plain text of the whole document.
    #[serde(rename = "textContent")]
    pub text_content: String,
}

impl Publication {
    /// Compile nodes into a publication without going through a parser.
    pub fn compile(compiler: &Compiler, schema: &str, nodes: &[Node]) -> Result<Self, PublishError> {
        let content = compiler.to_schema(schema, nodes)?;
        Ok(Publication {
            schema: schema.to_string(),
            content,
            text_content: extract_document_all(nodes),
        })
    }

    /// Write the record content as pretty JSON, returning the written path.
    ///
    /// Only the schema's wire record is written; `schema` and `textContent` stay with the
    /// caller.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<PathBuf, PublishError> {
        let path = path.as_ref().to_path_buf();
        let json = serde_json::to_string_pretty(&self.content)?;
        fs::write(&path, json)?;
        Ok(path)
    }
}

pub fn publish(
    compiler: &Compiler,
    parser: &dyn TreeParser,
    spec: PublishSpec<'_>,
) -> Result<Publication, PublishError> {
    let nodes = parser.parse(spec.source)?;
    let publication = Publication::compile(compiler, spec.schema, &nodes)?;
    info!(
        schema = spec.schema,
        blocks = publication.content.block_count(),
        "compiled publication"
    );
    if let Some(path) = spec.output {
        let path = publication.write_to(path)?;
        info!(path = %path.display(), "wrote publication");
    }
    Ok(publication)
}

pub fn import(
    compiler: &Compiler,
    printer: &dyn TreePrinter,
    schema: &str,
    document: &Document,
) -> Result<String, PublishError> {
    let nodes = compiler.from_schema(schema, document)?;
    info!(schema = schema, nodes = nodes.len(), "decoded record");
    printer.print(&nodes)
}
