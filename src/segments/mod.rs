//! Timed transcript segments and the adapters that run the normalizer over them.

pub mod whisper_cpp;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::normalizer::{
    normalize_transcript, NormalizationOptions, NormalizationResult, TranscriptNormalizer,
};

#[derive(Debug, Error)]
pub enum SegmentError {
    #[error("invalid segment JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A chunk of transcript text with optional timing.
///
/// `extra` carries every other field the producer attached (speaker, confidence, ids...).
/// With the default `Map` it round-trips unknown JSON keys untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedSegment<E = Map<String, Value>> {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
    #[serde(flatten)]
    pub extra: E,
}

impl TimedSegment {
    pub fn new(text: impl Into<String>, start: Option<f64>, end: Option<f64>) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            extra: Map::new(),
        }
    }
}

impl<E: Clone> TimedSegment<E> {
    /// Copy of this segment with only `text` swapped out.
    pub fn with_text(&self, text: String) -> Self {
        Self {
            text,
            start: self.start,
            end: self.end,
            extra: self.extra.clone(),
        }
    }
}

/// Clean every segment on its own. Count, order, timing and extra fields are kept.
pub fn normalize_segments<E: Clone>(
    segments: &[TimedSegment<E>],
    options: &NormalizationOptions,
) -> Vec<TimedSegment<E>> {
    normalize_segments_with(&TranscriptNormalizer::new(options.clone()), segments)
}

/// [`normalize_segments`] with an already built normalizer.
pub fn normalize_segments_with<E: Clone>(
    normalizer: &TranscriptNormalizer,
    segments: &[TimedSegment<E>],
) -> Vec<TimedSegment<E>> {
    debug!("Normalizing {} segment(s)", segments.len());
    segments
        .iter()
        .map(|segment| segment.with_text(normalizer.run(segment.text.as_str()).cleaned))
        .collect()
}

/// Join all segment text with single spaces, then clean it as one transcript.
///
/// Timing is ignored; repeats and fillers spanning segment borders are caught.
pub fn combine_and_normalize_segments<E>(
    segments: &[TimedSegment<E>],
    options: &NormalizationOptions,
) -> NormalizationResult {
    let combined = segments
        .iter()
        .map(|segment| segment.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    normalize_transcript(combined.as_str(), options)
}

/// Parse a JSON array of segment objects.
pub fn from_json<E: DeserializeOwned>(json: &str) -> Result<Vec<TimedSegment<E>>, SegmentError> {
    Ok(serde_json::from_str(json)?)
}

pub fn to_json<E: Serialize>(segments: &[TimedSegment<E>]) -> Result<String, SegmentError> {
    Ok(serde_json::to_string_pretty(segments)?)
}
