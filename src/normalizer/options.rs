use serde::{Deserialize, Serialize};

/// How `preserve_words` interacts with filler removal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreserveMode {
    /// Filler matches containing a preserve phrase stay in the text and are not counted.
    #[default]
    Keep,
    /// Filler matches containing a preserve phrase are removed but not counted.
    CountOnly,
}

/// Toggles and word lists for [`normalize_transcript`](super::normalize_transcript).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationOptions {
    pub remove_fillers: bool,
    pub fix_repetitions: bool,
    pub normalize_spacing: bool,
    pub capitalize_sentences: bool,
    /// Extra filler phrases, appended to the built-in list.
    pub custom_fillers: Vec<String>,
    pub preserve_words: Vec<String>,
    pub preserve_mode: PreserveMode,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            remove_fillers: true,
            fix_repetitions: true,
            normalize_spacing: true,
            capitalize_sentences: true,
            custom_fillers: Vec::new(),
            preserve_words: Vec::new(),
            preserve_mode: PreserveMode::default(),
        }
    }
}

/// Partial options. `None` means "keep whatever the base has".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionOverrides {
    pub remove_fillers: Option<bool>,
    pub fix_repetitions: Option<bool>,
    pub normalize_spacing: Option<bool>,
    pub capitalize_sentences: Option<bool>,
    /// Appended to the base list rather than replacing it.
    pub custom_fillers: Vec<String>,
    /// Appended to the base list rather than replacing it.
    pub preserve_words: Vec<String>,
    pub preserve_mode: Option<PreserveMode>,
}

impl NormalizationOptions {
    /// Build a new option set from `self` with `overrides` applied on top.
    pub fn merged(&self, overrides: &OptionOverrides) -> Self {
        let mut custom_fillers = self.custom_fillers.clone();
        custom_fillers.extend(overrides.custom_fillers.iter().cloned());

        let mut preserve_words = self.preserve_words.clone();
        preserve_words.extend(overrides.preserve_words.iter().cloned());

        Self {
            remove_fillers: overrides.remove_fillers.unwrap_or(self.remove_fillers),
            fix_repetitions: overrides.fix_repetitions.unwrap_or(self.fix_repetitions),
            normalize_spacing: overrides
                .normalize_spacing
                .unwrap_or(self.normalize_spacing),
            capitalize_sentences: overrides
                .capitalize_sentences
                .unwrap_or(self.capitalize_sentences),
            custom_fillers,
            preserve_words,
            preserve_mode: overrides.preserve_mode.unwrap_or(self.preserve_mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_every_stage() {
        let options = NormalizationOptions::default();
        assert!(options.remove_fillers);
        assert!(options.fix_repetitions);
        assert!(options.normalize_spacing);
        assert!(options.capitalize_sentences);
        assert!(options.custom_fillers.is_empty());
        assert!(options.preserve_words.is_empty());
        assert_eq!(options.preserve_mode, PreserveMode::Keep);
    }

    #[test]
    fn test_merge_does_not_touch_base() {
        let base = NormalizationOptions {
            custom_fillers: vec!["like".to_string()],
            ..Default::default()
        };
        let overrides = OptionOverrides {
            remove_fillers: Some(false),
            custom_fillers: vec!["right".to_string()],
            ..Default::default()
        };

        let merged = base.merged(&overrides);

        assert!(!merged.remove_fillers);
        assert!(merged.fix_repetitions);
        assert_eq!(merged.custom_fillers, vec!["like", "right"]);
        assert!(base.remove_fillers);
        assert_eq!(base.custom_fillers, vec!["like"]);
        assert_eq!(
            NormalizationOptions::default().merged(&OptionOverrides::default()),
            NormalizationOptions::default()
        );
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let json = r#"{"capitalize_sentences": false, "preserve_mode": "count-only"}"#;
        let options: NormalizationOptions = serde_json::from_str(json).unwrap();
        assert!(!options.capitalize_sentences);
        assert!(options.remove_fillers);
        assert_eq!(options.preserve_mode, PreserveMode::CountOnly);
    }
}
