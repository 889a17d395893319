//! Reading transcripts in and writing cleaned text out.

use anyhow::{anyhow, Context, Result};
use arboard::Clipboard;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Read the whole input from `path`, or from stdin when no path (or `-`) is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            if !path.exists() {
                return Err(anyhow!("File not found: {}", path.display()));
            }
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            debug!("Read {} chars from {}", text.len(), path.display());
            Ok(text)
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            debug!("Read {} chars from stdin", text.len());
            Ok(text)
        }
    }
}

/// Write `text` to `path`, or print it to stdout.
pub fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, text).context("Failed to write output file")?;
            eprintln!("Output saved to: {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", text).context("Failed to write to stdout")?;
        }
    }
    Ok(())
}

pub fn copy_to_clipboard(text: &str) -> Result<()> {
    if text.is_empty() {
        return Ok(());
    }

    let mut clipboard =
        Clipboard::new().map_err(|e| anyhow!("Failed to initialize clipboard: {}", e))?;
    clipboard
        .set_text(text)
        .map_err(|e| anyhow!("Failed to copy to clipboard: {}", e))?;

    info!("Copied {} chars to clipboard", text.len());
    Ok(())
}
