use std::ops::Range;
use tracing::{debug, warn};

use crate::normalizer::options::{NormalizationOptions, PreserveMode};
use crate::normalizer::patterns::{PhrasePattern, DEFAULT_FILLER_PATTERNS};

/// Upper bound on removal passes. Each pass only continues if it replaced something.
const MAX_FILLER_PASSES: usize = 8;

/// Filler patterns plus preserve-word exemptions for one option set.
#[derive(Debug, Clone)]
pub struct FillerSet {
    patterns: Vec<PhrasePattern>,
    preserve: Vec<PhrasePattern>,
    mode: PreserveMode,
}

impl FillerSet {
    pub fn from_options(options: &NormalizationOptions) -> Self {
        let mut patterns: Vec<PhrasePattern> = DEFAULT_FILLER_PATTERNS.clone();
        patterns.extend(compile_all(&options.custom_fillers, "custom filler"));
        // Longest phrases first so "and um" is taken before "um".
        patterns.sort_by(|a, b| b.word_count().cmp(&a.word_count()));

        Self {
            patterns,
            preserve: compile_all(&options.preserve_words, "preserve word"),
            mode: options.preserve_mode,
        }
    }

    /// Replace every filler match with a single space.
    ///
    /// Returns the new text and the number of counted removals. Matches that overlap a
    /// preserve phrase in the text are never counted; whether they are removed depends
    /// on the mode.
    pub fn remove(&self, text: &str) -> (String, usize) {
        self.remove_capped(text, MAX_FILLER_PASSES)
    }

    fn remove_capped(&self, text: &str, max_passes: usize) -> (String, usize) {
        let mut current = text.to_string();
        let mut counted = 0;

        for pass in 0..max_passes {
            let mut replaced = 0;

            for pattern in &self.patterns {
                // Spans shift after every replacement, so find them against this exact text.
                let preserved = self.preserved_spans(&current);
                let next = pattern.regex().replace_all(&current, |caps: &regex::Captures| {
                    let matched = &caps[0];
                    let exempt = caps
                        .get(0)
                        .is_some_and(|m| overlaps(&preserved, m.range()));
                    if exempt {
                        match self.mode {
                            PreserveMode::Keep => return matched.to_string(),
                            PreserveMode::CountOnly => {}
                        }
                    } else {
                        counted += 1;
                    }
                    replaced += 1;
                    " ".to_string()
                });
                current = next.into_owned();
            }

            if replaced == 0 {
                debug!("Filler removal settled after {} pass(es)", pass + 1);
                return (current, counted);
            }
        }

        warn!(
            "Filler removal hit the {} pass cap; returning partial result",
            max_passes
        );
        (current, counted)
    }

    fn preserved_spans(&self, text: &str) -> Vec<Range<usize>> {
        self.preserve
            .iter()
            .flat_map(|p| p.regex().find_iter(text).map(|m| m.range()))
            .collect()
    }
}

fn overlaps(spans: &[Range<usize>], range: Range<usize>) -> bool {
    spans
        .iter()
        .any(|span| span.start < range.end && range.start < span.end)
}

fn compile_all(phrases: &[String], kind: &str) -> Vec<PhrasePattern> {
    phrases
        .iter()
        .filter_map(|phrase| match PhrasePattern::new(phrase) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                warn!("Skipping {} {:?}: {}", kind, phrase, err);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(options: NormalizationOptions) -> FillerSet {
        FillerSet::from_options(&options)
    }

    #[test]
    fn test_removes_and_counts_defaults() {
        let (text, count) = set(NormalizationOptions::default()).remove("well um I uh think");
        assert_eq!(text.split_whitespace().collect::<Vec<_>>(), ["well", "I", "think"]);
        assert_eq!(count, 2);
    }

    #[test]
    fn test_replaces_with_space_not_nothing() {
        let (text, _) = set(NormalizationOptions::default()).remove("a um b");
        assert!(!text.contains("ab"));
    }

    #[test]
    fn test_compound_beats_parts() {
        let (text, count) = set(NormalizationOptions::default()).remove("apples and um pears");
        assert_eq!(text.split_whitespace().collect::<Vec<_>>(), ["apples", "pears"]);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_custom_fillers_appended() {
        let options = NormalizationOptions {
            custom_fillers: vec!["right?".to_string(), "like".to_string()],
            ..Default::default()
        };
        let (text, count) = set(options).remove("it was like fine, right? um");
        assert_eq!(text.split_whitespace().collect::<Vec<_>>(), ["it", "was", "fine,"]);
        assert_eq!(count, 3);
    }

    #[test]
    fn test_preserve_keep_leaves_text() {
        let options = NormalizationOptions {
            preserve_words: vec!["know".to_string()],
            ..Default::default()
        };
        let (text, count) = set(options).remove("you know what um");
        assert!(text.contains("you know what"));
        assert_eq!(count, 1);
    }

    #[test]
    fn test_preserve_count_only_still_removes() {
        let options = NormalizationOptions {
            preserve_words: vec!["know".to_string()],
            preserve_mode: PreserveMode::CountOnly,
            ..Default::default()
        };
        let (text, count) = set(options).remove("you know what um");
        assert_eq!(text.split_whitespace().collect::<Vec<_>>(), ["what"]);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_removal_exposing_new_phrase_is_handled() {
        // "kind um of" only becomes "kind of" after "um" goes.
        let (text, count) = set(NormalizationOptions::default()).remove("a kind um of thing");
        assert_eq!(text.split_whitespace().collect::<Vec<_>>(), ["a", "thing"]);
        assert_eq!(count, 2);
    }

    #[test]
    fn test_preserved_compound_survives_shorter_filler() {
        let options = NormalizationOptions {
            preserve_words: vec!["uh huh".to_string()],
            ..Default::default()
        };
        let (text, count) = set(options).remove("she said uh huh to that");
        assert!(text.contains("uh huh"));
        assert_eq!(count, 0);
    }

    #[test]
    fn test_longer_preserve_phrase_protects_filler() {
        let options = NormalizationOptions {
            preserve_words: vec!["kind of person".to_string()],
            ..Default::default()
        };
        let (text, count) = set(options).remove("the kind of person who um helps");
        assert!(text.contains("kind of person"));
        assert_eq!(count, 1);
    }

    #[test]
    fn test_count_only_removes_inside_longer_preserve_phrase() {
        let options = NormalizationOptions {
            preserve_words: vec!["kind of person".to_string()],
            preserve_mode: PreserveMode::CountOnly,
            ..Default::default()
        };
        let (text, count) = set(options).remove("the kind of person who um helps");
        assert_eq!(
            text.split_whitespace().collect::<Vec<_>>(),
            ["the", "person", "who", "helps"]
        );
        assert_eq!(count, 1);
    }

    #[test]
    fn test_pass_cap_returns_partial_result() {
        // "kind of" only appears once "um" is gone, which takes a second pass.
        let fillers = set(NormalizationOptions::default());
        let (text, count) = fillers.remove_capped("a kind um of thing", 1);
        assert_eq!(
            text.split_whitespace().collect::<Vec<_>>(),
            ["a", "kind", "of", "thing"]
        );
        assert_eq!(count, 1);
    }
}
