//! Stutter collapsing: "I I think" -> "I think", "you know you know" -> "you know".
//!
//! `regex` has no backreferences, so text is split into alternating gaps and words
//! and compared token by token. Two words only count as a repeat when the gap
//! between them is pure whitespace, so "no, no" survives.

use tracing::{debug, warn};

use crate::normalizer::patterns::is_word_char;

/// Longest phrase (in words) considered for collapsing.
pub const MAX_PHRASE_WORDS: usize = 3;

/// Safety cap on word+phrase rounds. Every productive round shrinks the text, so this
/// only trips on pathological input.
pub const MAX_REPETITION_PASSES: usize = 64;

/// `gaps[i]` precedes `words[i]`; the final gap trails the last word.
struct Tokens<'a> {
    gaps: Vec<&'a str>,
    words: Vec<&'a str>,
}

impl<'a> Tokens<'a> {
    fn split(text: &'a str) -> Self {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut gaps = Vec::new();
        let mut words = Vec::new();
        let mut gap_start = 0;
        let mut word_start: Option<usize> = None;

        for (idx, &(pos, c)) in chars.iter().enumerate() {
            // Apostrophes inside a word ("don't") belong to it.
            let in_word = is_word_char(c)
                || (is_apostrophe(c)
                    && word_start.is_some()
                    && chars.get(idx + 1).is_some_and(|&(_, next)| is_word_char(next)));

            match (in_word, word_start) {
                (true, None) => {
                    gaps.push(&text[gap_start..pos]);
                    word_start = Some(pos);
                }
                (false, Some(start)) => {
                    words.push(&text[start..pos]);
                    word_start = None;
                    gap_start = pos;
                }
                _ => {}
            }
        }

        match word_start {
            Some(start) => {
                words.push(&text[start..]);
                gaps.push("");
            }
            None => gaps.push(&text[gap_start..]),
        }

        Self { gaps, words }
    }

    /// Does the `n`-word phrase at `i` repeat immediately, separated only by whitespace?
    fn repeats_at(&self, i: usize, n: usize) -> bool {
        if i + 2 * n > self.words.len() {
            return false;
        }
        let same_words = (0..n).all(|k| same_word(self.words[i + k], self.words[i + n + k]));
        let spaced = (i + 1..i + 2 * n).all(|g| is_whitespace_gap(self.gaps[g]));
        same_words && spaced
    }

    /// Drop every immediate repeat of `n`-word phrases, keeping the first occurrence.
    fn collapse(&mut self, n: usize) -> usize {
        let mut collapsed = 0;
        let mut i = 0;
        while i + 2 * n <= self.words.len() {
            if self.repeats_at(i, n) {
                self.words.drain(i + n..i + 2 * n);
                self.gaps.drain(i + n..i + 2 * n);
                collapsed += 1;
            } else {
                i += 1;
            }
        }
        collapsed
    }

    fn join(&self) -> String {
        let mut out = String::new();
        for (gap, word) in self.gaps.iter().zip(&self.words) {
            out.push_str(gap);
            out.push_str(word);
        }
        if let Some(last) = self.gaps.last() {
            out.push_str(last);
        }
        out
    }
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

fn is_whitespace_gap(gap: &str) -> bool {
    !gap.is_empty() && gap.chars().all(char::is_whitespace)
}

fn same_word(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Collapse repeated words, then repeated 2-3 word phrases, until nothing changes.
///
/// Returns the collapsed text and the number of repeats removed.
pub fn collapse_repetitions(text: &str) -> (String, usize) {
    collapse_repetitions_capped(text, MAX_REPETITION_PASSES)
}

fn collapse_repetitions_capped(text: &str, max_rounds: usize) -> (String, usize) {
    let mut current = text.to_string();
    let mut total = 0;

    for round in 0..max_rounds {
        let mut tokens = Tokens::split(&current);

        let mut changed = tokens.collapse(1);
        for n in (2..=MAX_PHRASE_WORDS).rev() {
            changed += tokens.collapse(n);
        }

        if changed == 0 {
            debug!("Repetition collapsing settled after {} round(s)", round + 1);
            return (current, total);
        }

        total += changed;
        current = tokens.join();
    }

    warn!(
        "Repetition collapsing hit the {} round cap; returning partial result",
        max_rounds
    );
    (current, total)
}

/// True if any word is immediately followed by itself.
pub fn has_repeated_word(text: &str) -> bool {
    let tokens = Tokens::split(text);
    (0..tokens.words.len()).any(|i| tokens.repeats_at(i, 1))
}
