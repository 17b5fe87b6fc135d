//! Codepoint classification and language metadata.
//!
//! Devanagari needs syllable-aware handling, right-to-left scripts need mirrored placement,
//! and a few languages need their own uppercasing rules. Everything script-specific that the
//! segmenter, generator and fill pools consult lives here.

use std::fmt;
use std::ops::RangeInclusive;

pub(crate) const LATIN_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub(crate) const HALANT: char = '\u{094D}';
pub(crate) const NUKTA: char = '\u{093C}';

const INDEPENDENT_VOWELS: [RangeInclusive<char>; 3] = [
    '\u{0904}'..='\u{0914}',
    '\u{0960}'..='\u{0961}',
    '\u{0972}'..='\u{0977}',
];
const CONSONANTS: [RangeInclusive<char>; 3] = [
    '\u{0915}'..='\u{0939}',
    '\u{0958}'..='\u{095F}',
    '\u{0978}'..='\u{097F}',
];
const VOWEL_SIGNS: [RangeInclusive<char>; 5] = [
    '\u{093A}'..='\u{093B}',
    '\u{093E}'..='\u{094C}',
    '\u{094E}'..='\u{094F}',
    '\u{0955}'..='\u{0957}',
    '\u{0962}'..='\u{0963}',
];
// inaudible candrabindu, candrabindu, anusvara, visarga
const MODIFIERS: RangeInclusive<char> = '\u{0900}'..='\u{0903}';
const DEVANAGARI_DIGITS: RangeInclusive<char> = '\u{0966}'..='\u{096F}';

const RTL_LANGUAGES: [&str; 6] = ["ar", "he", "fa", "ur", "yi", "ps"];
const DEVANAGARI_LANGUAGES: [&str; 3] = ["hi", "mr", "ne"];

pub(crate) trait DevanagariChar {
    fn is_independent_vowel(&self) -> bool;
    fn is_consonant(&self) -> bool;
    fn is_vowel_sign(&self) -> bool;
    fn is_halant(&self) -> bool;
    fn is_nukta(&self) -> bool;
    fn is_modifier(&self) -> bool;
    fn is_any_digit(&self) -> bool;

    /// Marks that can never stand at the start of a well-formed akshara.
    fn is_combining_mark(&self) -> bool {
        self.is_vowel_sign() || self.is_halant() || self.is_nukta() || self.is_modifier()
    }
}

impl DevanagariChar for char {
    fn is_independent_vowel(&self) -> bool {
        INDEPENDENT_VOWELS.iter().any(|r| r.contains(self))
    }
    fn is_consonant(&self) -> bool {
        CONSONANTS.iter().any(|r| r.contains(self))
    }
    fn is_vowel_sign(&self) -> bool {
        VOWEL_SIGNS.iter().any(|r| r.contains(self))
    }
    fn is_halant(&self) -> bool {
        *self == HALANT
    }
    fn is_nukta(&self) -> bool {
        *self == NUKTA
    }
    fn is_modifier(&self) -> bool {
        MODIFIERS.contains(self)
    }
    fn is_any_digit(&self) -> bool {
        self.is_ascii_digit() || DEVANAGARI_DIGITS.contains(self)
    }
}

/// A language identifier as supplied by the caller, reduced to its primary subtag.
///
/// `"he-IL"`, `"HE"` and `"he"` all denote the same language.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language {
    code: String,
}

impl Language {
    pub fn new(code: &str) -> Self {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Language { code: primary }
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Whether the script is read right-to-left.
    #[must_use]
    pub fn is_rtl(&self) -> bool {
        RTL_LANGUAGES.contains(&self.code.as_str())
    }

    /// Whether words must be segmented into aksharas rather than codepoints.
    #[must_use]
    pub fn is_devanagari(&self) -> bool {
        DEVANAGARI_LANGUAGES.contains(&self.code.as_str())
    }

    /// Uppercase `text` following the language's casing rules.
    ///
    /// Turkish and Azerbaijani distinguish dotted and dotless i; everything else uses the
    /// default Unicode mapping. Uncased scripts pass through unchanged.
    #[must_use]
    pub fn uppercase(&self, text: &str) -> String {
        match self.code.as_str() {
            "tr" | "az" => text
                .chars()
                .flat_map(|c| match c {
                    'i' => vec!['\u{0130}'],
                    'ı' => vec!['I'],
                    other => other.to_uppercase().collect(),
                })
                .collect(),
            _ => text.to_uppercase(),
        }
    }

    /// Normalize raw word-list text into a target word: trims, drops inner whitespace and
    /// hyphens, and uppercases.
    #[must_use]
    pub fn normalize_word(&self, raw: &str) -> String {
        let compact: String = raw
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();
        self.uppercase(&compact)
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::new("en")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl From<&str> for Language {
    fn from(code: &str) -> Self {
        Language::new(code)
    }
}
