//! sigextract: turn demangled signature exports into TSV rows or a C++ lookup header.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `sigextract < Names.txt` prints the rendered output
//! - **file mode**: `sigextract -f header dumps/g2a.txt` writes `dumps/g2a_signatures.hpp`

use anyhow::{bail, Context, Result};
use clap::Parser;
use sigextract::model::Document;
use sigextract::render::{self, header};
use sigextract::Verbatim;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "sigextract",
    about = "Extract function metadata from demangled C++ signature exports"
)]
struct Cli {
    /// Export file with `<hex-address> <signature>` lines. If omitted, reads from stdin.
    input: Option<PathBuf>,

    /// Output path (defaults to the input path with the format's extension)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: tsv (default) or header
    #[arg(short = 'f', long, default_value = "tsv")]
    format: String,

    /// C++ namespace for the header format. Derived from the input name
    /// (g1, g1a, g2, g2a) when omitted.
    #[arg(short = 'n', long)]
    namespace: Option<String>,

    /// Print lines that could not be parsed
    #[arg(long)]
    warnings: bool,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.input.as_deref() {
        Some(path) => file_mode(&cli, path),
        None => stdin_mode(&cli),
    }
}

fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_env("SIGEXTRACT_LOG")
        .init();
}

/// stdin mode: read the export from stdin, write the rendered output to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let mut input = Vec::new();
    io::stdin()
        .read_to_end(&mut input)
        .context("failed to read stdin")?;

    let renderer = render::create_renderer(&cli.format, cli.namespace.clone())?;
    let doc = sigextract::extract(&String::from_utf8_lossy(&input), &Verbatim);
    print!("{}", renderer.render(&doc));

    report_skipped(cli, &doc);
    Ok(())
}

/// file mode: read one export file and write the rendered output next to it.
fn file_mode(cli: &Cli, input_path: &Path) -> Result<()> {
    if !input_path.is_file() {
        bail!("input file not found: {}", input_path.display());
    }

    let namespace = resolve_namespace(cli.namespace.as_deref(), input_path);
    let renderer = render::create_renderer(&cli.format, namespace)?;

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| renderer.default_output(input_path));
    if output_path == input_path {
        bail!(
            "refusing to overwrite input file {}; pass --output",
            input_path.display()
        );
    }

    let bytes = fs::read(input_path)
        .with_context(|| format!("failed to read {}", input_path.display()))?;
    let doc = sigextract::extract(&String::from_utf8_lossy(&bytes), &Verbatim);

    fs::write(&output_path, renderer.render(&doc))
        .with_context(|| format!("failed to write {}", output_path.display()))?;
    println!(
        "Wrote {} entries to {}",
        renderer.entry_count(&doc),
        output_path.display()
    );

    report_skipped(cli, &doc);
    Ok(())
}

/// Explicit --namespace, else the namespace registered for the input's stem.
fn resolve_namespace(explicit: Option<&str>, input_path: &Path) -> Option<String> {
    if let Some(namespace) = explicit {
        return Some(namespace.to_string());
    }
    let stem = input_path.file_stem()?.to_str()?;
    header::known_namespace(stem).map(str::to_string)
}

fn report_skipped(cli: &Cli, doc: &Document) {
    if !cli.warnings || doc.skipped.is_empty() {
        return;
    }
    eprintln!(
        "Skipped {} line(s) that could not be parsed:",
        doc.skipped.len()
    );
    for skipped in &doc.skipped {
        eprintln!("  {}", skipped.line);
    }
}
