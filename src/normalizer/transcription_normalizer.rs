/// Anything that turns raw transcript text into cleaned text.
///
/// [`TranscriptNormalizer`](super::TranscriptNormalizer) is the full pipeline; callers
/// that only need the cleaned string can hold a `Box<dyn TranscriptionNormalizer>`.
pub trait TranscriptionNormalizer: Send + Sync {
    fn normalize(&self, raw_output: &str) -> String;

    /// Short name for log lines.
    fn name(&self) -> &'static str;
}
