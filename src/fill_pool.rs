//! Glyph pools used to fill the grid cells no word occupies.
//!
//! Each language maps to a [`FillPoolProvider`]. Alphabetic scripts get a fixed alphabet;
//! Devanagari draws from the aksharas of the words in play so filler looks like real
//! syllables. Callers can register their own providers or override the built-in ones.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use crate::script::{DevanagariChar, Language, LATIN_ALPHABET};
use crate::word::TargetWord;

/// Consonants and independent vowels that are always well-formed on their own.
pub const SAFE_DEVANAGARI: &str = "कखगघचछजझटठडढणतथदधनपफबभमयरलवशषसहअआइईउऊएऐओऔ";

const BUILTIN_ALPHABETS: [(&str, &str); 12] = [
    ("en", LATIN_ALPHABET),
    ("es", "ABCDEFGHIJKLMNÑOPQRSTUVWXYZ"),
    ("fr", LATIN_ALPHABET),
    ("de", "ABCDEFGHIJKLMNOPQRSTUVWXYZÄÖÜ"),
    ("it", LATIN_ALPHABET),
    ("pt", "ABCDEFGHIJKLMNOPQRSTUVWXYZÇ"),
    ("tr", "ABCÇDEFGĞHIİJKLMNOÖPRSŞTUÜVYZ"),
    ("ru", "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ"),
    ("el", "ΑΒΓΔΕΖΗΘΙΚΛΜΝΞΟΠΡΣΤΥΦΧΨΩ"),
    ("ar", "ابتثجحخدذرزسشصضطظعغفقكلمنهوي"),
    ("he", "אבגדהוזחטיכלמנסעפצקרשת"),
    ("fa", "ابپتثجچحخدذرزژسشصضطظعغفقکگلمنوهی"),
];

/// Supplies the fill units for one language.
pub trait FillPoolProvider {
    /// Units to fill empty cells with, given the words of the current level.
    fn pool(&self, words: &[TargetWord]) -> Vec<String>;
}

/// A fixed set of single-codepoint glyphs.
#[derive(Debug, Clone)]
pub struct AlphabetPool {
    glyphs: Vec<String>,
}

impl AlphabetPool {
    #[must_use]
    pub fn new(alphabet: &str) -> Self {
        AlphabetPool {
            glyphs: alphabet.chars().map(String::from).collect(),
        }
    }

    /// A pool of caller-supplied units, which may span several codepoints each.
    #[must_use]
    pub fn from_units(units: Vec<String>) -> Self {
        AlphabetPool {
            glyphs: units.into_iter().filter(|u| !u.is_empty()).collect(),
        }
    }
}

impl FillPoolProvider for AlphabetPool {
    fn pool(&self, _words: &[TargetWord]) -> Vec<String> {
        self.glyphs.clone()
    }
}

/// Fill glyphs supplied by a caller: a string of single glyphs, or a list of units that may
/// span several codepoints each.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FillGlyphs {
    Alphabet(String),
    Units(Vec<String>),
}

impl FillGlyphs {
    /// The override pool, or `None` when there is nothing to fill with.
    #[must_use]
    pub fn into_pool(self) -> Option<AlphabetPool> {
        let pool = match self {
            FillGlyphs::Alphabet(alphabet) => AlphabetPool::new(&alphabet),
            FillGlyphs::Units(units) => AlphabetPool::from_units(units),
        };
        (!pool.glyphs.is_empty()).then_some(pool)
    }
}

/// The distinct units of the words in play, or a baseline alphabet when there are none.
#[derive(Debug, Clone)]
pub struct WordUnitPool {
    baseline: &'static str,
}

impl WordUnitPool {
    #[must_use]
    pub fn new(baseline: &'static str) -> Self {
        WordUnitPool { baseline }
    }
}

impl FillPoolProvider for WordUnitPool {
    fn pool(&self, words: &[TargetWord]) -> Vec<String> {
        let units = distinct_units(words);
        if units.is_empty() {
            self.baseline.chars().map(String::from).collect()
        } else {
            units
        }
    }
}

/// Devanagari aksharas collected from the words in play.
///
/// Malformed units (digits, orphan marks) are left out of the pool; if nothing usable is
/// left, the pool is [`SAFE_DEVANAGARI`].
#[derive(Debug, Clone, Default)]
pub struct AksharaPool;

impl FillPoolProvider for AksharaPool {
    fn pool(&self, words: &[TargetWord]) -> Vec<String> {
        let units: Vec<String> = distinct_units(words)
            .into_iter()
            .filter(|u| !is_malformed_akshara(u))
            .collect();
        if units.is_empty() {
            SAFE_DEVANAGARI.chars().map(String::from).collect()
        } else {
            units
        }
    }
}

/// Language code → fill pool provider.
pub struct FillPools {
    providers: HashMap<String, Box<dyn FillPoolProvider>>,
    fallback: Box<dyn FillPoolProvider>,
}

impl FillPools {
    /// An empty registry; every language uses the units of its words (A–Z when there are none).
    #[must_use]
    pub fn empty() -> Self {
        FillPools {
            providers: HashMap::new(),
            fallback: Box::new(WordUnitPool::new(LATIN_ALPHABET)),
        }
    }

    /// Registry pre-populated with the built-in alphabets and the Devanagari akshara pool.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut pools = FillPools::empty();
        for (code, alphabet) in BUILTIN_ALPHABETS {
            pools.register(code, AlphabetPool::new(alphabet));
        }
        for code in ["hi", "mr", "ne"] {
            pools.register(code, AksharaPool);
        }
        pools
    }

    /// Register (or replace) the provider for `code`.
    pub fn register(&mut self, code: &str, provider: impl FillPoolProvider + 'static) {
        self.providers
            .insert(Language::new(code).code().to_string(), Box::new(provider));
    }

    #[must_use]
    pub fn contains(&self, language: &Language) -> bool {
        self.providers.contains_key(language.code())
    }

    /// Fill units for `language` given the level's words.
    #[must_use]
    pub fn pool_for(&self, language: &Language, words: &[TargetWord]) -> Vec<String> {
        let provider = self
            .providers
            .get(language.code())
            .unwrap_or(&self.fallback);
        provider.pool(words)
    }
}

impl Default for FillPools {
    fn default() -> Self {
        FillPools::with_defaults()
    }
}

/// A fill unit that must not appear in a Devanagari grid: it contains a digit or starts
/// with a mark that has no base to attach to.
#[must_use]
pub fn is_malformed_akshara(unit: &str) -> bool {
    match unit.chars().next() {
        None => true,
        Some(first) => first.is_combining_mark() || unit.chars().any(|c| c.is_any_digit()),
    }
}

/// Distinct units across `words`, in first-seen order.
pub(crate) fn distinct_units(words: &[TargetWord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut units = Vec::new();
    for unit in words.iter().flat_map(|w| &w.units) {
        if !unit.is_empty() && seen.insert(unit.as_str()) {
            units.push(unit.clone());
        }
    }
    units
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str], code: &str) -> Vec<TargetWord> {
        let language = Language::new(code);
        texts.iter().map(|t| TargetWord::new(t, &language)).collect()
    }

    #[test]
    fn test_alphabet_pool_ignores_words() {
        let pool = AlphabetPool::new("AB").pool(&words(&["XYZ"], "en"));
        assert_eq!(pool, vec!["A", "B"]);
    }

    #[test]
    fn test_from_units_keeps_clusters() {
        let pool = AlphabetPool::from_units(vec!["क्ष".to_string(), String::new(), "त्र".to_string()]);
        assert_eq!(pool.pool(&[]), vec!["क्ष", "त्र"]);
    }

    #[test]
    fn test_fill_glyphs_string_and_list() {
        let alphabet = FillGlyphs::Alphabet("XYZ".to_string()).into_pool().unwrap();
        assert_eq!(alphabet.pool(&[]), vec!["X", "Y", "Z"]);

        let units = FillGlyphs::Units(vec!["क्ष".to_string(), "त्र".to_string()]).into_pool().unwrap();
        assert_eq!(units.pool(&[]), vec!["क्ष", "त्र"]);
    }

    #[test]
    fn test_empty_fill_glyphs_are_no_override() {
        assert!(FillGlyphs::Alphabet(String::new()).into_pool().is_none());
        assert!(FillGlyphs::Units(vec![String::new()]).into_pool().is_none());
    }

    #[test]
    fn test_defaults_cover_builtin_languages() {
        let pools = FillPools::with_defaults();
        let en = pools.pool_for(&Language::new("en"), &[]);
        assert_eq!(en.len(), 26);
        assert_eq!(en.concat(), LATIN_ALPHABET);
        assert!(pools.pool_for(&Language::new("es"), &[]).contains(&"Ñ".to_string()));
        assert!(pools.contains(&Language::new("he-IL")));
        assert!(pools.contains(&Language::new("hi")));
    }

    #[test]
    fn test_unknown_language_uses_word_units() {
        let pools = FillPools::with_defaults();
        let pool = pools.pool_for(&Language::new("sw"), &words(&["JAMBO", "JIKO"], "sw"));
        assert_eq!(pool, vec!["J", "A", "M", "B", "O", "I", "K"]);
    }

    #[test]
    fn test_unknown_language_without_words_uses_latin() {
        let pools = FillPools::empty();
        assert_eq!(pools.pool_for(&Language::new("xx"), &[]).len(), 26);
    }

    #[test]
    fn test_register_overrides() {
        let mut pools = FillPools::with_defaults();
        pools.register("EN", AlphabetPool::new("Q"));
        assert_eq!(pools.pool_for(&Language::new("en"), &[]), vec!["Q"]);
    }

    #[test]
    fn test_akshara_pool_dedups_word_units() {
        let pool = AksharaPool.pool(&words(&["नमस्ते", "नमक"], "hi"));
        assert_eq!(pool, vec!["न", "म", "स्ते", "क"]);
    }

    #[test]
    fn test_akshara_pool_baseline_when_empty() {
        let pool = AksharaPool.pool(&[]);
        assert_eq!(pool.concat(), SAFE_DEVANAGARI);
    }

    #[test]
    fn test_akshara_pool_drops_malformed_units() {
        let pool = AksharaPool.pool(&words(&["क\u{094D}७"], "hi"));
        assert_eq!(pool, vec!["क"]);
    }

    #[test]
    fn test_is_malformed_akshara() {
        assert!(is_malformed_akshara(""));
        assert!(is_malformed_akshara("\u{093E}"));
        assert!(is_malformed_akshara("\u{094D}"));
        assert!(is_malformed_akshara("ं"));
        assert!(is_malformed_akshara("३"));
        assert!(is_malformed_akshara("5"));
        assert!(!is_malformed_akshara("क"));
        assert!(!is_malformed_akshara("स्ते"));
        assert!(!is_malformed_akshara("अ"));
    }

    #[test]
    fn test_safe_set_is_well_formed() {
        for c in SAFE_DEVANAGARI.chars() {
            assert!(!is_malformed_akshara(&c.to_string()));
            assert!(c.is_consonant() || c.is_independent_vowel());
        }
    }
}
