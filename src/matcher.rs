//! Matching a dragged selection of cells against the words still to be found.
//!
//! The selection is joined in drag order and compared with each remaining word. If no word
//! matches, the selection is joined back to front and compared again, so a word dragged
//! from its last cell to its first still counts. Reversal works on whole cell units, which
//! keeps multi-codepoint clusters (Devanagari aksharas) intact; for single-codepoint
//! scripts it is the same as reversing the characters.

use crate::grid::Cell;
use crate::word::TargetWord;

/// A selection's text read in both directions, uppercased for comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionText {
    pub forward: String,
    pub backward: String,
}

impl SelectionText {
    pub fn from_cells<'c>(cells: impl IntoIterator<Item = &'c Cell>) -> Self {
        let units: Vec<&str> = cells.into_iter().map(|c| c.unit.as_str()).collect();
        let forward = units.concat().to_uppercase();
        let backward = units.iter().rev().copied().collect::<String>().to_uppercase();
        SelectionText { forward, backward }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

/// The first remaining word spelled by `selection`, checking the drag direction first and
/// the reverse direction second. Returns `None` for an empty selection.
///
/// Callers pass only the words not yet found; a found word must never match twice.
pub fn match_selection<'w, I>(selection: &[&Cell], remaining: I) -> Option<&'w TargetWord>
where
    I: IntoIterator<Item = &'w TargetWord>,
    I::IntoIter: Clone,
{
    let text = SelectionText::from_cells(selection.iter().copied());
    match_text(&text, remaining)
}

/// Like [`match_selection`], for a selection that has already been joined.
pub fn match_text<'w, I>(text: &SelectionText, remaining: I) -> Option<&'w TargetWord>
where
    I: IntoIterator<Item = &'w TargetWord>,
    I::IntoIter: Clone,
{
    if text.is_empty() {
        return None;
    }
    let words = remaining.into_iter();
    words
        .clone()
        .find(|w| w.text.to_uppercase() == text.forward)
        .or_else(|| words.into_iter().find(|w| w.text.to_uppercase() == text.backward))
}
