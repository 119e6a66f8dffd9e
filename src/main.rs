//! birdtype — add explicit return types to BIRD config functions.
//!
//! BIRD 2.17+ warns about filter functions without a declared return
//! type. This tool scans config files, infers each untyped function's
//! return type from its `return` statements, and rewrites the header
//! with a `-> <type>` annotation:
//!
//! 1. **Scan** — partition the document into function blocks by brace depth
//! 2. **Extract** — collect every `return <expr>;` in a block
//! 3. **Infer** — classify the expressions against the declared types
//! 4. **Rewrite** — splice the annotation before the opening brace
//!
//! Void and already-typed functions are left untouched, so re-running
//! the tool on its own output is a no-op.

mod classify;
mod discover;
mod extract;
mod infer;
mod lang;
mod process;
mod rewrite;
mod scan;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "birdtype",
    about = "Add explicit return types to BIRD config functions"
)]
struct Cli {
    /// BIRD config file or directory
    path: PathBuf,

    /// Modify files in place instead of printing to stdout
    #[arg(short = 'i', long = "in-place")]
    in_place: bool,
}

fn main() {
    let cli = Cli::parse();
    let messages = lang::detect();

    if !cli.path.exists() {
        let path = cli.path.display().to_string();
        eprintln!("{}", lang::fill(messages.error_path_not_exists, &path).red());
        std::process::exit(1);
    }

    if let Err(e) = run(&cli, messages) {
        eprintln!("{}", lang::fill(messages.error_processing, &format!("{e:#}")).red());
        std::process::exit(1);
    }
}

fn run(cli: &Cli, messages: &lang::Messages) -> Result<()> {
    if !cli.path.is_dir() {
        return process_file(&cli.path, cli.in_place, messages);
    }

    let files = discover::conf_files(&cli.path)?;
    if files.is_empty() {
        let dir = cli.path.display().to_string();
        println!("{}", lang::fill(messages.no_conf_files, &dir));
        return Ok(());
    }

    for file in &files {
        if !cli.in_place {
            println!("# === File: {} ===", file.display());
        }
        process_file(file, cli.in_place, messages)?;
    }
    Ok(())
}

fn process_file(path: &Path, in_place: bool, messages: &lang::Messages) -> Result<()> {
    let content = read_config(path)?;
    let processed = process::process_content(&content);

    if in_place {
        fs::write(path, &processed)
            .with_context(|| format!("failed to write {}", path.display()))?;
        let name = path.display().to_string();
        eprintln!("{}", lang::fill(messages.success_processed, &name).green());
    } else {
        println!("{processed}");
    }
    Ok(())
}

/// Read a config file as text, falling back to a latin-1 decode when
/// the content is not valid UTF-8.
fn read_config(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => Ok(err.into_bytes().iter().map(|&b| b as char).collect()),
    }
}
