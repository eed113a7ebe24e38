//! Command-line interface for quire
//! This binary compiles generic syntax trees (mdast JSON) into publishing schema records, and back.
//!
//! Usage:
//!   quire compile `<tree.json>` [--to `<schema>`] [--output `<path>`]     - Tree → record
//!   quire decompile `<record.json>` [--from `<schema>`]                 - Record → tree
//!   quire schemas                                                     - List available schemas
//!
//! Global options: --config `<file>` layers a TOML file over the defaults, --format json|yaml.
//! Set QUIRE_LOG (e.g. `QUIRE_LOG=debug`) to see what the compiler dropped.

mod commands;

use clap::{Arg, Command};
use commands::OutputSettings;
use quire_compiler::Compiler;
use quire_config::{Loader, OutputFormat, QuireConfig};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn build_cli() -> Command {
    Command::new("quire")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile markdown syntax trees to and from block-based publishing schemas")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .global(true)
                .value_parser(["json", "yaml"])
                .help("Output encoding (default: from configuration)"),
        )
        .subcommand(
            Command::new("compile")
                .about("Compile a generic tree into a schema record")
                .arg(
                    Arg::new("path")
                        .help("Path to the tree JSON (a root, a node, or an array of nodes)")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .short('t')
                        .help("Target schema (default: from configuration)"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write the record to this path instead of stdout"),
                ),
        )
        .subcommand(
            Command::new("decompile")
                .about("Decompile a schema record back into a generic tree")
                .arg(
                    Arg::new("path")
                        .help("Path to the record JSON")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .short('s')
                        .help("Schema of the record (default: from configuration)"),
                ),
        )
        .subcommand(Command::new("schemas").about("List available schemas"))
}

fn main() {
    init_tracing();

    let matches = build_cli().get_matches();

    let schema_arg = match matches.subcommand() {
        Some(("compile", sub)) => sub.get_one::<String>("to"),
        Some(("decompile", sub)) => sub.get_one::<String>("from"),
        _ => None,
    };
    let config = load_config(matches.get_one::<String>("config"), schema_arg).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let settings = OutputSettings {
        format: match matches.get_one::<String>("format").map(String::as_str) {
            Some("yaml") => OutputFormat::Yaml,
            Some(_) => OutputFormat::Json,
            None => config.output.format,
        },
        pretty: config.output.pretty,
    };
    let compiler = Compiler::with_defaults().with_options(config.compile_options());
    let schema = config.compile.default_schema.as_str();

    let result = match matches.subcommand() {
        Some(("compile", sub)) => {
            let path = sub
                .get_one::<String>("path")
                .expect("path is a required argument");
            commands::compile(&compiler, &settings, Path::new(path), schema).and_then(|out| {
                match sub.get_one::<String>("output") {
                    Some(output) => commands::write_output(Path::new(output), &out),
                    None => Ok(out),
                }
            })
        }
        Some(("decompile", sub)) => {
            let path = sub
                .get_one::<String>("path")
                .expect("path is a required argument");
            commands::decompile(&compiler, &settings, Path::new(path), schema)
        }
        Some(("schemas", _)) => Ok(commands::list_schemas(&compiler)),
        _ => Err("Unknown command".to_string()),
    };

    match result {
        Ok(out) => print!("{}", out),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("QUIRE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(
    path: Option<&String>,
    schema: Option<&String>,
) -> Result<QuireConfig, quire_config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    if let Some(schema) = schema {
        loader = loader.with_schema_override(schema)?;
    }
    loader.build()
}
