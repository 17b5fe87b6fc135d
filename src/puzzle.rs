//! A level in play: the target words, their generated grid, and which words are found.
//!
//! A `Puzzle` is built once per level (or language switch) and never regenerated in place;
//! starting a new level means building a new `Puzzle`.

use std::collections::BTreeSet;

use log::{debug, info};
use rand::Rng;

use crate::direction::Difficulty;
use crate::errors::{validate_grid_size, PuzzleError};
use crate::fill_pool::FillPools;
use crate::generator::{generate, GeneratedGrid, GeneratorConfig};
use crate::grid::{Coord, Grid, Placement};
use crate::matcher::match_selection;
use crate::path::{path_direction, selection_path};
use crate::script::Language;
use crate::word::TargetWord;

#[derive(Debug, Clone)]
pub struct Puzzle {
    language: Language,
    difficulty: Difficulty,
    words: Vec<TargetWord>,
    generated: GeneratedGrid,
    found: BTreeSet<usize>,
}

impl Puzzle {
    /// Generate a level for already-normalized `words`.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidGridSize`] if the configured grid size is unusable.
    pub fn new<R: Rng + ?Sized>(
        words: Vec<TargetWord>,
        language: Language,
        difficulty: Difficulty,
        pools: &FillPools,
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> Result<Self, PuzzleError> {
        validate_grid_size(config.grid_size)?;
        let pool = pools.pool_for(&language, &words);
        let generated = generate(&words, &language, difficulty, &pool, config, rng);
        info!(
            "New {difficulty} puzzle ({language}): {} words, {} placed",
            words.len(),
            generated.placements.len()
        );
        Ok(Puzzle {
            language,
            difficulty,
            words,
            generated,
            found: BTreeSet::new(),
        })
    }

    /// Normalize and segment raw word-list entries, then generate a level.
    ///
    /// # Errors
    ///
    /// See [`Puzzle::new`].
    pub fn from_raw_words<'a, R: Rng + ?Sized>(
        raw: impl IntoIterator<Item = &'a str>,
        language: Language,
        difficulty: Difficulty,
        pools: &FillPools,
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> Result<Self, PuzzleError> {
        let words = TargetWord::from_raw(raw, &language);
        Puzzle::new(words, language, difficulty, pools, config, rng)
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.generated.grid
    }

    #[must_use]
    pub fn words(&self) -> &[TargetWord] {
        &self.words
    }

    #[must_use]
    pub fn language(&self) -> &Language {
        &self.language
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.generated.placements
    }

    /// Words that could not be placed and so can never be found.
    pub fn unplaced(&self) -> impl Iterator<Item = &TargetWord> {
        self.generated.unplaced.iter().map(|&i| &self.words[i])
    }

    #[must_use]
    pub fn is_found(&self, word_index: usize) -> bool {
        self.found.contains(&word_index)
    }

    /// Indices of found words, ascending.
    pub fn found(&self) -> impl Iterator<Item = usize> + '_ {
        self.found.iter().copied()
    }

    /// Words not yet found, including unplaced ones.
    pub fn remaining(&self) -> impl Iterator<Item = &TargetWord> + Clone {
        self.words
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.found.contains(i))
            .map(|(_, w)| w)
    }

    /// All placed words have been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.generated
            .placements
            .iter()
            .all(|p| self.found.contains(&p.word_index))
    }

    /// Check a selection path and mark the word it spells as found.
    ///
    /// Returns the index of the newly found word, or `None` if the selection spells no
    /// remaining word.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::CellOutOfBounds`] if a coordinate is outside the grid, or
    /// [`PuzzleError::NotStraightLine`] if the path is not a contiguous compass line.
    pub fn check_selection(&mut self, path: &[Coord]) -> Result<Option<usize>, PuzzleError> {
        path_direction(path)?;
        let cells = self.generated.grid.cells_at(path)?;
        let Some(word) = match_selection(&cells, self.remaining()) else {
            debug!("Selection of {} cells matched nothing", path.len());
            return Ok(None);
        };
        let Some(index) = self.words.iter().position(|w| std::ptr::eq(w, word)) else {
            return Ok(None);
        };
        self.found.insert(index);
        info!(
            "Found \"{}\" ({}/{})",
            self.words[index].text,
            self.found.len(),
            self.words.len()
        );
        Ok(Some(index))
    }

    /// Check the straight drag from `start` toward `pointer` (see [`selection_path`]).
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::CellOutOfBounds`] if `start` is outside the grid.
    pub fn check_drag(&mut self, start: Coord, pointer: Coord) -> Result<Option<usize>, PuzzleError> {
        let path = selection_path(start, pointer, self.grid().size())?;
        self.check_selection(&path)
    }

    /// Cell holding the first unit of the first placed word not yet found.
    ///
    /// Easy right-to-left levels store units back to front, so there the first unit sits at
    /// the end of the placement rather than its start.
    #[must_use]
    pub fn hint(&self) -> Option<Coord> {
        let reversed = self.difficulty.reverses_units(self.language.is_rtl());
        self.generated
            .placements
            .iter()
            .find(|p| !self.found.contains(&p.word_index))
            .map(|p| match p.cells.last() {
                Some(&last) if reversed => last,
                _ => p.start,
            })
    }
}
