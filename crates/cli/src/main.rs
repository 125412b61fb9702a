//! strata - batch outline extraction driver.
//!
//! Scans a directory for extracted-character dumps (one JSON file per
//! document, produced by the extraction collaborator), infers each
//! document's title and heading outline, and writes one outline JSON per
//! input. A document that fails to read, parse, or write is logged and
//! skipped; the rest of the batch proceeds.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use strata_core::extract_from_json;

/// Infer document outlines from extracted character dumps.
#[derive(Parser, Debug)]
#[command(name = "strata")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory scanned (non-recursively) for *.json character dumps
    #[arg(short, long, default_value = "input")]
    input: PathBuf,

    /// Directory receiving one <name>.outline.json per processed dump
    #[arg(short, long, default_value = "output")]
    output: PathBuf,

    /// Use debug logging level
    #[arg(short, long, action = ArgAction::SetTrue)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Output path for a dump: `<output_dir>/<stem>.outline.json`.
fn output_path(output_dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    output_dir.join(format!("{stem}.outline.json"))
}

/// Collects the dump files of the input directory in name order.
fn dump_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(input_dir)
        .with_context(|| format!("reading input directory {}", input_dir.display()))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    Ok(files)
}

/// Processes a single document end to end.
fn process_document(input: &Path, output: &Path) -> Result<()> {
    let data = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let outline =
        extract_from_json(&data).with_context(|| format!("extracting {}", input.display()))?;
    debug!(
        headings = outline.outline.len(),
        title = %outline.title,
        "extracted outline"
    );

    let json = serde_json::to_string_pretty(&outline).context("serializing outline")?;
    fs::write(output, json).with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    fs::create_dir_all(&args.output)
        .with_context(|| format!("creating output directory {}", args.output.display()))?;

    let files = dump_files(&args.input)?;
    if files.is_empty() {
        info!("no dump files in {}", args.input.display());
        return Ok(());
    }

    let mut failures = 0usize;
    for path in &files {
        let out = output_path(&args.output, path);
        info!("processing {}", path.display());
        match process_document(path, &out) {
            Ok(()) => info!("wrote {}", out.display()),
            Err(err) => {
                failures += 1;
                error!("{err:#}");
            }
        }
    }

    if failures == files.len() {
        bail!("all {failures} documents failed");
    }
    Ok(())
}
