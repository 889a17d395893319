use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::normalizer::fillers::FillerSet;
use crate::normalizer::punctuation::{capitalize_sentences, normalize_spacing};
use crate::normalizer::repetition::collapse_repetitions;
use crate::normalizer::{NormalizationOptions, TranscriptionNormalizer};

/// Output of one normalization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizationResult {
    pub cleaned: String,
    pub raw: String,
    pub filler_count: usize,
    pub repetition_count: usize,
    /// Share of the raw text removed, in percent, one decimal place.
    pub cleanup_percentage: f64,
    pub metadata: NormalizationMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizationMetadata {
    /// Length in chars.
    pub original_length: usize,
    /// Length in chars.
    pub cleaned_length: usize,
    pub processing_time_ms: u64,
}

impl NormalizationResult {
    fn empty(raw: &str, elapsed: Duration) -> Self {
        Self {
            cleaned: String::new(),
            raw: raw.to_string(),
            filler_count: 0,
            repetition_count: 0,
            cleanup_percentage: 0.0,
            metadata: NormalizationMetadata {
                original_length: 0,
                cleaned_length: 0,
                processing_time_ms: elapsed.as_millis() as u64,
            },
        }
    }
}

/// Full cleanup pipeline for one option set.
///
/// Custom filler and preserve patterns are compiled once in [`TranscriptNormalizer::new`],
/// so holding on to a normalizer is cheaper than calling [`normalize_transcript`] in a loop.
#[derive(Debug, Clone)]
pub struct TranscriptNormalizer {
    options: NormalizationOptions,
    fillers: Option<FillerSet>,
}

impl Default for TranscriptNormalizer {
    fn default() -> Self {
        Self::new(NormalizationOptions::default())
    }
}

impl TranscriptNormalizer {
    pub fn new(options: NormalizationOptions) -> Self {
        let fillers = options
            .remove_fillers
            .then(|| FillerSet::from_options(&options));
        Self { options, fillers }
    }

    pub fn options(&self) -> &NormalizationOptions {
        &self.options
    }

    /// Run every enabled stage over `text`.
    ///
    /// `None` and `""` produce an all-zero result instead of an error.
    pub fn run<'a>(&self, text: impl Into<Option<&'a str>>) -> NormalizationResult {
        let started = Instant::now();

        let raw = match text.into() {
            Some(raw) if !raw.is_empty() => raw,
            other => {
                return NormalizationResult::empty(other.unwrap_or_default(), started.elapsed())
            }
        };

        let mut cleaned = raw.to_string();
        let mut filler_count = 0;
        let mut repetition_count = 0;

        if let Some(fillers) = &self.fillers {
            let (text, count) = fillers.remove(&cleaned);
            debug!("Removed {} filler(s)", count);
            cleaned = text;
            filler_count += count;
        }

        if self.options.fix_repetitions {
            let (text, count) = collapse_repetitions(&cleaned);
            debug!("Collapsed {} repetition(s)", count);
            cleaned = text;
            repetition_count += count;
        }

        if self.options.normalize_spacing {
            cleaned = normalize_spacing(&cleaned);
        }

        if self.options.capitalize_sentences {
            cleaned = capitalize_sentences(&cleaned);
        }

        let original_length = raw.chars().count();
        let cleaned_length = cleaned.chars().count();
        let elapsed = started.elapsed();

        debug!(
            "Normalized {} chars to {} chars in {:?}",
            original_length, cleaned_length, elapsed
        );

        NormalizationResult {
            cleaned,
            raw: raw.to_string(),
            filler_count,
            repetition_count,
            cleanup_percentage: cleanup_percentage(original_length, cleaned_length),
            metadata: NormalizationMetadata {
                original_length,
                cleaned_length,
                processing_time_ms: elapsed.as_millis() as u64,
            },
        }
    }
}

impl TranscriptionNormalizer for TranscriptNormalizer {
    fn normalize(&self, raw_output: &str) -> String {
        self.run(raw_output).cleaned
    }

    fn name(&self) -> &'static str {
        "TranscriptNormalizer"
    }
}

/// Clean `text` with `options`. One-shot form of [`TranscriptNormalizer::run`].
pub fn normalize_transcript<'a>(
    text: impl Into<Option<&'a str>>,
    options: &NormalizationOptions,
) -> NormalizationResult {
    TranscriptNormalizer::new(options.clone()).run(text)
}

fn cleanup_percentage(original: usize, cleaned: usize) -> f64 {
    if original == 0 {
        return 0.0;
    }
    let removed = (original as f64 - cleaned as f64) / original as f64 * 100.0;
    (removed * 10.0).round() / 10.0
}
