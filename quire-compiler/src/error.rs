//! Error types
//!
//! The compiler proper can only fail on caller mistakes: naming a schema nobody registered,
//! handing a record to the wrong schema, or feeding malformed wire JSON. Everything lossy about
//! compiling itself is silent.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Unsupported schema '{0}'")]
    UnsupportedSchema(String),

    #[error("Document is a '{found}' record, expected '{expected}'")]
    SchemaMismatch { expected: String, found: String },

    #[error("Invalid '{schema}' document: {source}")]
    InvalidDocument {
        schema: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors from the publish and import workflows.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Print error: {0}")]
    Print(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
