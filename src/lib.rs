//! Post-processing for speech-to-text transcripts.
//!
//! The [`normalizer`] strips fillers, collapses stutters, tidies spacing and
//! capitalizes sentences; [`segments`] applies it to timed transcript segments.

pub mod cli;
pub mod config;
pub mod global;
pub mod normalizer;
pub mod segments;
pub mod text_io;

pub use normalizer::{
    needs_normalization, normalize_transcript, NormalizationOptions, NormalizationResult,
    TranscriptNormalizer,
};
pub use segments::{combine_and_normalize_segments, normalize_segments, TimedSegment};
