use crate::normalizer::patterns::{
    MULTI_WHITESPACE, REPEATED_PUNCTUATION, SENTENCE_START, SPACE_BEFORE_PUNCTUATION,
};

/// Single-space the text, pull punctuation onto the preceding word, and collapse
/// runs of the same punctuation mark ("!!!" -> "!").
pub fn normalize_spacing(text: &str) -> String {
    let spaced = MULTI_WHITESPACE.replace_all(text, " ");
    let attached = SPACE_BEFORE_PUNCTUATION.replace_all(&spaced, "$1");
    let collapsed = REPEATED_PUNCTUATION.replace_all(&attached, |caps: &regex::Captures| {
        caps[0].chars().next().map(String::from).unwrap_or_default()
    });
    collapsed.trim().to_string()
}

/// Uppercase the first character and the first lowercase letter of every sentence.
pub fn capitalize_sentences(text: &str) -> String {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut headed = String::with_capacity(text.len());
    headed.push(upper(first));
    headed.push_str(chars.as_str());

    SENTENCE_START
        .replace_all(&headed, |caps: &regex::Captures| {
            let letter = caps[2].chars().next().map(upper).unwrap_or_default();
            format!("{}{}", &caps[1], letter)
        })
        .into_owned()
}

/// Single-char uppercase mapping. Letters that expand ("ß" -> "SS") stay as they are,
/// so capitalization never changes the length of the text.
fn upper(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}
