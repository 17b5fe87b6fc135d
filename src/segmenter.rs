//! Splitting words into the units that occupy one grid cell each.
//!
//! Most scripts get one unit per codepoint. Devanagari words are grouped into aksharas:
//! a consonant swallows any conjunct (halant + consonant) that follows it, at most one
//! dependent vowel sign, nukta marks, and a trailing anusvara / visarga / chandrabindu.
//!
//! Segmentation never fails. Marks with nothing to attach to become units of their own,
//! and concatenating the units always gives back the input exactly.

use crate::script::{DevanagariChar, Language};

/// Ordered display units of a single word.
pub type UnitSequence = Vec<String>;

/// Segment `word` into grid units according to `language`.
///
/// ```
/// use wordsearch::script::Language;
/// use wordsearch::segmenter::segment;
///
/// assert_eq!(segment("CAT", &Language::new("en")), vec!["C", "A", "T"]);
/// assert_eq!(segment("नमस्ते", &Language::new("hi")), vec!["न", "म", "स्ते"]);
/// ```
#[must_use]
pub fn segment(word: &str, language: &Language) -> UnitSequence {
    if language.is_devanagari() {
        segment_aksharas(word)
    } else {
        word.chars().map(String::from).collect()
    }
}

fn segment_aksharas(word: &str) -> UnitSequence {
    let chars: Vec<char> = word.chars().collect();
    let mut units = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let end = match chars[i] {
            c if c.is_consonant() => akshara_end(&chars, i),
            // a vowel letter is a whole syllable; marks after it are not absorbed
            c if c.is_independent_vowel() => i + 1,
            // orphan marks, digits and other scripts
            _ => i + 1,
        };
        units.push(chars[i..end].iter().collect());
        i = end;
    }

    units
}

/// Index one past the last char of the akshara whose base consonant is at `start`.
fn akshara_end(chars: &[char], start: usize) -> usize {
    let mut j = start + 1;
    let mut has_vowel_sign = false;

    while j < chars.len() {
        let c = chars[j];
        if c.is_nukta() {
            j += 1;
        } else if c.is_halant()
            && !has_vowel_sign
            && chars.get(j + 1).is_some_and(DevanagariChar::is_consonant)
        {
            j += 2;
        } else if c.is_vowel_sign() && !has_vowel_sign {
            has_vowel_sign = true;
            j += 1;
        } else if c.is_modifier() {
            // a modifier closes the syllable
            return j + 1;
        } else {
            break;
        }
    }

    j
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hi() -> Language {
        Language::new("hi")
    }

    #[test]
    fn test_default_splits_codepoints() {
        let units = segment("ÉTÉ", &Language::new("fr"));
        assert_eq!(units, vec!["É", "T", "É"]);
    }

    #[test]
    fn test_rtl_script_splits_codepoints() {
        let units = segment("שלום", &Language::new("he"));
        assert_eq!(units, vec!["ש", "ל", "ו", "ם"]);
    }

    #[test]
    fn test_combining_marks_stay_separate_outside_devanagari() {
        // decomposed E + acute accent
        let units = segment("E\u{0301}", &Language::new("fr"));
        assert_eq!(units.len(), 2);
    }

    #[test]
    fn test_empty_word() {
        assert!(segment("", &hi()).is_empty());
        assert!(segment("", &Language::new("en")).is_empty());
    }

    #[test]
    fn test_namaste() {
        let word = "नमस्ते";
        let units = segment(word, &hi());
        assert_eq!(units, vec!["न", "म", "स्ते"]);
        assert_eq!(units.concat(), word);
        assert!(units.len() < word.chars().count());
    }

    #[test]
    fn test_vowel_sign_joins_consonant() {
        assert_eq!(segment("किताब", &hi()), vec!["कि", "ता", "ब"]);
    }

    #[test]
    fn test_independent_vowel_stands_alone() {
        assert_eq!(segment("आम", &hi()), vec!["आ", "म"]);
    }

    #[test]
    fn test_independent_vowel_does_not_absorb_marks() {
        // अंडा: the anusvara after a vowel letter has no consonant to join
        assert_eq!(segment("अंडा", &hi()), vec!["अ", "ं", "डा"]);
        assert_eq!(segment("ईख", &hi()), vec!["ई", "ख"]);
    }

    #[test]
    fn test_modifier_terminates_unit() {
        // हिंदी: हि + ं closes the first syllable
        assert_eq!(segment("हिंदी", &hi()), vec!["हिं", "दी"]);
    }

    #[test]
    fn test_only_one_vowel_sign_absorbed() {
        let units = segment("काा", &hi());
        assert_eq!(units, vec!["का", "ा"]);
    }

    #[test]
    fn test_multi_consonant_conjunct() {
        // स्त्री: स + ् + त + ् + र + ी
        let units = segment("स्त्री", &hi());
        assert_eq!(units, vec!["स्त्री"]);
    }

    #[test]
    fn test_nukta_absorbed() {
        let word = "ज़रा";
        assert_eq!(segment(word, &hi()), vec!["ज़", "रा"]);
    }

    #[test]
    fn test_orphan_marks_become_own_units() {
        let units = segment("\u{093E}क\u{094D}", &hi());
        assert_eq!(units, vec!["\u{093E}", "क", "\u{094D}"]);
    }

    #[test]
    fn test_lossless_for_mixed_input() {
        let inputs = ["नमस्ते", "क्षत्रिय", "अंडा", "A1क्", "ॐ", "प्रेम"];
        for word in inputs {
            assert_eq!(segment(word, &hi()).concat(), word, "lossless for {word}");
            assert_eq!(segment(word, &Language::new("en")).concat(), word);
        }
    }

    #[test]
    fn test_no_empty_units() {
        for word in ["नमस्ते", "क्षत्रिय", "ABC"] {
            assert!(segment(word, &hi()).iter().all(|u| !u.is_empty()));
        }
    }
}
