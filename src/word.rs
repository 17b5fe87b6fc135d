use serde::Serialize;

use crate::script::Language;
use crate::segmenter::{segment, UnitSequence};

/// A word the player has to find, together with its grid units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetWord {
    /// The word as supplied by the caller (already normalized).
    pub text: String,
    pub units: UnitSequence,
}

impl TargetWord {
    #[must_use]
    pub fn new(text: &str, language: &Language) -> Self {
        TargetWord {
            text: text.to_string(),
            units: segment(text, language),
        }
    }

    /// Normalize raw word-list entries for `language` and segment them.
    ///
    /// Entries that normalize to nothing are dropped.
    pub fn from_raw<'a>(raw: impl IntoIterator<Item = &'a str>, language: &Language) -> Vec<TargetWord> {
        raw.into_iter()
            .map(|w| language.normalize_word(w))
            .filter(|w| !w.is_empty())
            .map(|w| TargetWord::new(&w, language))
            .collect()
    }

    /// Number of grid cells the word occupies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
