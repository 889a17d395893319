//! Transcript cleanup: filler removal, stutter collapsing, spacing and capitalization.

mod fillers;
#[allow(clippy::module_inception)]
mod normalizer;
mod options;
pub mod patterns;
mod punctuation;
pub mod quick_check;
pub mod repetition;
mod transcription_normalizer;

pub use normalizer::{
    normalize_transcript, NormalizationMetadata, NormalizationResult, TranscriptNormalizer,
};
pub use options::{NormalizationOptions, OptionOverrides, PreserveMode};
pub use patterns::{PatternError, DEFAULT_FILLERS};
pub use quick_check::needs_normalization;
pub use transcription_normalizer::TranscriptionNormalizer;
