use tracing::debug;

use crate::normalizer::patterns::{DEFAULT_FILLER_PATTERNS, MULTI_WHITESPACE, QUICK_CHECK_FILLERS};
use crate::normalizer::repetition::has_repeated_word;

/// Texts shorter than this (in chars) are never worth normalizing.
pub const MIN_QUICK_CHECK_LENGTH: usize = 50;

/// Cheap guess at whether [`normalize_transcript`](super::normalize_transcript) would
/// change anything.
///
/// Only the first few built-in fillers are tried and punctuation is ignored, so a
/// `false` here does not prove the text is clean.
pub fn needs_normalization<'a>(text: impl Into<Option<&'a str>>) -> bool {
    let Some(text) = text.into() else {
        return false;
    };
    if text.chars().count() < MIN_QUICK_CHECK_LENGTH {
        return false;
    }

    if let Some(pattern) = DEFAULT_FILLER_PATTERNS
        .iter()
        .take(QUICK_CHECK_FILLERS)
        .find(|p| p.is_match(text))
    {
        debug!("Quick check: filler {:?} present", pattern.phrase());
        return true;
    }

    if has_repeated_word(text) {
        debug!("Quick check: repeated word present");
        return true;
    }

    if MULTI_WHITESPACE.is_match(text) {
        debug!("Quick check: whitespace run present");
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAN: &str = "This sentence is already clean and has nothing to fix at all.";

    #[test]
    fn test_short_text_never_needs_it() {
        assert!(!needs_normalization("um um  uh"));
        assert!(!needs_normalization(""));
        assert!(!needs_normalization(None));
    }

    #[test]
    fn test_clean_text() {
        assert!(CLEAN.len() >= MIN_QUICK_CHECK_LENGTH);
        assert!(!needs_normalization(CLEAN));
    }

    #[test]
    fn test_filler_triggers() {
        let text = format!("{} um", CLEAN);
        assert!(needs_normalization(text.as_str()));
    }

    #[test]
    fn test_repeat_triggers() {
        let text = format!("{} It it works.", CLEAN);
        assert!(needs_normalization(text.as_str()));
    }

    #[test]
    fn test_whitespace_run_triggers() {
        let text = format!("{}  Next.", CLEAN);
        assert!(needs_normalization(text.as_str()));
    }

    #[test]
    fn test_later_fillers_are_not_checked() {
        // "basically" is a filler, but outside the quick-check prefix.
        let text = format!("{} It basically works.", CLEAN);
        assert!(!needs_normalization(text.as_str()));
    }
}
