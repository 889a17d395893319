//! CLI handlers for cleaning plain transcripts and the quick check.

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::normalizer::{
    needs_normalization, normalize_transcript, NormalizationOptions, NormalizationResult,
};
use crate::text_io::{copy_to_clipboard, read_input, write_output};

use super::args::{CheckCliArgs, CleanCliArgs};

pub fn handle_clean_command(args: CleanCliArgs, config: &Config) -> Result<()> {
    let raw = read_input(args.file.as_deref())?;

    let mut options = config.normalizer.merged(&args.normalize.overrides());
    let skip_allowed = args.skip_clean || config.output.skip_clean_input;
    if skip_allowed && !needs_normalization(raw.as_str()) {
        info!("Quick check found nothing to clean; passing input through");
        options = passthrough_options();
    }

    let result = normalize_transcript(raw.as_str(), &options);
    log_summary(&result);

    let output_text = if args.json || config.output.json {
        serde_json::to_string_pretty(&result).context("Failed to serialize result")?
    } else {
        result.cleaned.clone()
    };

    write_output(args.output.as_deref(), &output_text)?;

    if args.copy {
        copy_to_clipboard(&result.cleaned)?;
        eprintln!("Copied to clipboard");
    }

    Ok(())
}

/// Returns `true` when the input looks like it needs cleaning.
pub fn handle_check_command(args: CheckCliArgs) -> Result<bool> {
    let raw = read_input(args.file.as_deref())?;
    let needed = needs_normalization(raw.as_str());

    if needed {
        println!("Transcript needs normalization ({} chars)", raw.chars().count());
    } else {
        println!("Transcript looks clean");
    }

    Ok(needed)
}

/// Every stage off: the result mirrors the input with zero counts.
fn passthrough_options() -> NormalizationOptions {
    NormalizationOptions {
        remove_fillers: false,
        fix_repetitions: false,
        normalize_spacing: false,
        capitalize_sentences: false,
        ..Default::default()
    }
}

pub(crate) fn log_summary(result: &NormalizationResult) {
    info!(
        "Removed {} filler(s) and {} repetition(s); {} -> {} chars ({}% shorter) in {}ms",
        result.filler_count,
        result.repetition_count,
        result.metadata.original_length,
        result.metadata.cleaned_length,
        result.cleanup_percentage,
        result.metadata.processing_time_ms
    );
}
