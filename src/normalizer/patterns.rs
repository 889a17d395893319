use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Built-in filler words and phrases, in declaration order.
///
/// The quick check only looks at the first [`QUICK_CHECK_FILLERS`] entries, so the
/// cheapest and most common interjections go first.
pub const DEFAULT_FILLERS: &[&str] = &[
    // Interjections
    "um", "uh", "umm", "uhh", "er", "erm", "ah", "hmm", "hm", "mhm",
    "uh huh", "mm",
    // Hedges
    "sort of", "kind of",
    // Discourse markers
    "basically", "honestly", "literally", "you know", "i mean", "you see",
    // Conjunction + filler
    "and um", "and uh", "but um", "but uh", "so um", "so uh",
];

/// Number of leading [`DEFAULT_FILLERS`] the quick check tests.
pub const QUICK_CHECK_FILLERS: usize = 10;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("phrase is empty")]
    Empty,
    #[error("failed to compile pattern for {phrase:?}: {source}")]
    Compile {
        phrase: String,
        #[source]
        source: regex::Error,
    },
}

/// A compiled whole-word, case-insensitive phrase matcher.
#[derive(Debug, Clone)]
pub struct PhrasePattern {
    phrase: String,
    word_count: usize,
    regex: Regex,
}

impl PhrasePattern {
    pub fn new(phrase: &str) -> Result<Self, PatternError> {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        if words.is_empty() {
            return Err(PatternError::Empty);
        }

        let body = words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join(r"\s+");

        // \b only makes sense next to a word character; "..." or "-" style custom
        // phrases would never match otherwise.
        let starts_word = words[0].chars().next().is_some_and(is_word_char);
        let ends_word = words[words.len() - 1]
            .chars()
            .last()
            .is_some_and(is_word_char);

        let pattern = format!(
            "(?i){}{}{}",
            if starts_word { r"\b" } else { "" },
            body,
            if ends_word { r"\b" } else { "" }
        );

        let regex = Regex::new(&pattern).map_err(|source| PatternError::Compile {
            phrase: phrase.to_string(),
            source,
        })?;

        Ok(Self {
            phrase: words.join(" "),
            word_count: words.len(),
            regex,
        })
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Compiled [`DEFAULT_FILLERS`], same order.
pub static DEFAULT_FILLER_PATTERNS: Lazy<Vec<PhrasePattern>> = Lazy::new(|| {
    DEFAULT_FILLERS
        .iter()
        .filter_map(|phrase| PhrasePattern::new(phrase).ok())
        .collect()
});

pub static MULTI_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

pub static SPACE_BEFORE_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+([.,!?;:])").unwrap());

// No backreferences in `regex`, so one alternative per mark.
pub static REPEATED_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.{2,}|,{2,}|!{2,}|\?{2,}|;{2,}|:{2,}").unwrap());

pub static SENTENCE_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([.!?]\s+)(\p{Ll})").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_default_fillers_compile() {
        assert_eq!(DEFAULT_FILLER_PATTERNS.len(), DEFAULT_FILLERS.len());
    }

    #[test]
    fn test_phrase_matches_whole_words_only() {
        let pattern = PhrasePattern::new("um").unwrap();
        assert!(pattern.is_match("so um yes"));
        assert!(pattern.is_match("Um, yes"));
        assert!(!pattern.is_match("an umbrella"));
        assert!(!pattern.is_match("human"));
    }

    #[test]
    fn test_phrase_tolerates_internal_whitespace() {
        let pattern = PhrasePattern::new("you know").unwrap();
        assert!(pattern.is_match("and you \t know it"));
        assert!(pattern.is_match("YOU\nKNOW"));
        assert_eq!(pattern.word_count(), 2);
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let pattern = PhrasePattern::new("a.b").unwrap();
        assert!(pattern.is_match("say a.b now"));
        assert!(!pattern.is_match("say axb now"));

        let pattern = PhrasePattern::new("(like)").unwrap();
        assert!(pattern.is_match("it was (like) fine"));
    }

    #[test]
    fn test_empty_phrase_rejected() {
        assert!(matches!(PhrasePattern::new("   "), Err(PatternError::Empty)));
    }
}
