//! CLI commands
//!
//! Each command reads its input file, runs the compiler and renders the result in the selected
//! output encoding. Errors are flattened to strings for `main` to report.

use quire_compiler::{Compiler, Node, Root};
use quire_config::OutputFormat;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// How results are rendered.
#[derive(Debug, Clone, Copy)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub pretty: bool,
}

/// Compile a tree file into a record of `schema`.
pub fn compile(
    compiler: &Compiler,
    settings: &OutputSettings,
    path: &Path,
    schema: &str,
) -> Result<String, String> {
    let source = read_input(path)?;
    let nodes = read_tree(&source)?;
    debug!(path = %path.display(), nodes = nodes.len(), schema = schema, "read tree");
    let document = compiler
        .to_schema(schema, &nodes)
        .map_err(|e| format!("Compile failed: {}", e))?;
    render(&document, settings)
}

/// Decompile a record file of `schema` into a root tree.
pub fn decompile(
    compiler: &Compiler,
    settings: &OutputSettings,
    path: &Path,
    schema: &str,
) -> Result<String, String> {
    let source = read_input(path)?;
    let document = compiler
        .parse_document(schema, &source)
        .map_err(|e| format!("Decompile failed: {}", e))?;
    let nodes = compiler
        .from_schema(schema, &document)
        .map_err(|e| format!("Decompile failed: {}", e))?;
    render(&Root::new(nodes), settings)
}

pub fn list_schemas(compiler: &Compiler) -> String {
    let mut out = String::from("Available schemas:\n\n");
    for name in compiler.list_schemas() {
        if let Ok(codec) = compiler.get(&name) {
            out.push_str(&format!("  {}\n    {}\n\n", name, codec.description()));
        }
    }
    out
}

pub fn write_output(path: &Path, content: &str) -> Result<String, String> {
    fs::write(path, content)
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
    Ok(String::new())
}

fn read_input(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))
}

/// Accepts a `root` object, an array of nodes, or a single node.
fn read_tree(source: &str) -> Result<Vec<Node>, String> {
    let value: Value =
        serde_json::from_str(source).map_err(|e| format!("Invalid tree JSON: {}", e))?;
    let is_root = value.get("type").and_then(Value::as_str) == Some("root");
    let nodes = match value {
        Value::Array(_) => serde_json::from_value::<Vec<Node>>(value),
        _ if is_root => serde_json::from_value::<Root>(value).map(|root| root.children),
        _ => serde_json::from_value::<Node>(value).map(|node| vec![node]),
    };
    nodes.map_err(|e| format!("Invalid tree JSON: {}", e))
}

fn render<T: serde::Serialize>(value: &T, settings: &OutputSettings) -> Result<String, String> {
    let mut out = match (settings.format, settings.pretty) {
        (OutputFormat::Yaml, _) => serde_yaml::to_string(value).map_err(|e| e.to_string())?,
        (OutputFormat::Json, true) => {
            serde_json::to_string_pretty(value).map_err(|e| e.to_string())?
        }
        (OutputFormat::Json, false) => serde_json::to_string(value).map_err(|e| e.to_string())?,
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}
