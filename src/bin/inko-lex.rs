//! Command-line interface for the Inko lexer
//! Scans an Inko source file and prints its tokens in one of the registered formats.
//!
//! Usage:
//!   inko-lex `<path>` [--format `<format>`] [--config `<file>`]  - Highlight a file (`-` reads stdin)
//!   inko-lex --list-formats                                   - List the available output formats
//!   inko-lex --info                                           - Print the lexer's registration metadata
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=inko_lexer=debug`) to see scan diagnostics on stderr.

use clap::{Arg, ArgAction, Command};
use inko_lexer::inko::config::{HighlightConfig, Loader};
use inko_lexer::inko::formats::FormatRegistry;
use inko_lexer::{tokenize, INKO};
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

fn main() {
    init_tracing();

    let matches = Command::new("inko-lex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Syntax-highlight Inko source code")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the Inko file, or - for stdin")
                .required_unless_present_any(["list-formats", "info"])
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default from configuration: tokens)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("info")
                .long("info")
                .help("Print lexer name, aliases and filename patterns")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = load_config(matches.get_one::<String>("config"));
    let registry = FormatRegistry::from_config(&config);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }
    if matches.get_flag("info") {
        handle_info_command();
        return;
    }

    let Some(path) = matches.get_one::<String>("path") else {
        fail("a path is required");
    };
    let format = matches
        .get_one::<String>("format")
        .cloned()
        .unwrap_or_else(|| config.output.format.clone());
    handle_highlight_command(&registry, path, &format);
}

/// Install a stderr subscriber when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn load_config(path: Option<&String>) -> HighlightConfig {
    let mut loader = Loader::new();
    if let Some(path) = path {
        debug!(path = path.as_str(), "layering configuration file");
        loader = loader.with_file(path);
    }
    loader
        .build()
        .unwrap_or_else(|e| fail(&format!("cannot load configuration: {}", e)))
}

/// Handle the highlight command
fn handle_highlight_command(registry: &FormatRegistry, path: &str, format: &str) {
    let source =
        read_source(path).unwrap_or_else(|e| fail(&format!("cannot read {}: {}", path, e)));

    if path != "-" && !INKO.matches_filename(Path::new(path)) {
        warn!(path, patterns = ?INKO.filenames, "file name does not look like Inko source");
    }

    let tokens = tokenize(&source);
    let output = registry.format(&tokens, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("\nAvailable formats:");
        for name in registry.list_formats() {
            eprintln!("  {}", name);
        }
        std::process::exit(1);
    });

    print!("{}", output);
}

fn read_source(path: &str) -> inko_lexer::Result<String> {
    let mut source = String::new();
    if path == "-" {
        std::io::stdin().read_to_string(&mut source)?;
    } else {
        source = std::fs::read_to_string(path)?;
    }
    Ok(source)
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available output formats:\n");
    for name in registry.list_formats() {
        let description = registry.get(&name).map_or("", |f| f.description());
        println!("  {}", name);
        println!("    {}", description);
    }
}

/// Handle the info command
fn handle_info_command() {
    println!("name: {}", INKO.name);
    println!("aliases: {}", INKO.aliases.join(", "));
    println!("filenames: {}", INKO.filenames.join(", "));
    println!("version: {}", INKO.version);
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}
