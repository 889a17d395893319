//! CLI handler for timed segment input.

use anyhow::{Context, Result};

use crate::config::Config;
use crate::segments::{
    self, combine_and_normalize_segments, normalize_segments, whisper_cpp, TimedSegment,
};
use crate::text_io::{read_input, write_output};

use super::args::{SegmentFormat, SegmentsCliArgs};
use super::clean::log_summary;

pub fn handle_segments_command(args: SegmentsCliArgs, config: &Config) -> Result<()> {
    let raw = read_input(args.file.as_deref())?;
    let segments = parse_segments(&raw, args.format)?;
    let options = config.normalizer.merged(&args.normalize.overrides());

    let output_text = if args.combine {
        let result = combine_and_normalize_segments(&segments, &options);
        log_summary(&result);
        serde_json::to_string_pretty(&result).context("Failed to serialize result")?
    } else {
        let cleaned = normalize_segments(&segments, &options);
        segments::to_json(&cleaned).context("Failed to serialize segments")?
    };

    write_output(args.output.as_deref(), &output_text)
}

fn parse_segments(raw: &str, format: SegmentFormat) -> Result<Vec<TimedSegment>> {
    match format {
        SegmentFormat::Json => segments::from_json(raw).context("Failed to parse segments"),
        SegmentFormat::WhisperCpp => Ok(whisper_cpp::parse(raw)),
    }
}
