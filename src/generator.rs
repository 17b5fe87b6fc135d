//! Grid generation: laying target words into an N×N grid and filling the rest.
//!
//! Words are placed one at a time in the caller's order. Each word first gets a bounded
//! number of random attempts (direction and start cell drawn from the difficulty's
//! permitted set); a cell may be shared with an earlier word only when both need the same
//! unit there. When every attempt fails, a deterministic fallback scans rows top to bottom
//! for a horizontal run of empty cells. A word that fits nowhere is left out and reported
//! in [`GeneratedGrid::unplaced`]; generation itself never fails.
//!
//! Once all words are down, empty cells are filled from the fill pool. Devanagari grids get
//! a final pass that swaps malformed filler (digits, orphan marks) for safe single letters.
//!
//! # Examples
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use wordsearch::direction::Difficulty;
//! use wordsearch::generator::{generate, GeneratorConfig};
//! use wordsearch::script::Language;
//! use wordsearch::word::TargetWord;
//!
//! let en = Language::new("en");
//! let words = vec![TargetWord::new("CAT", &en), TargetWord::new("DOG", &en)];
//! let pool: Vec<String> = "ABCDEFGHIJKLMNOPQRSTUVWXYZ".chars().map(String::from).collect();
//! let mut rng = ChaCha20Rng::seed_from_u64(7);
//!
//! let generated = generate(&words, &en, Difficulty::Easy, &pool, &GeneratorConfig::default(), &mut rng);
//! assert_eq!(generated.placements.len(), 2);
//! assert!(generated.unplaced.is_empty());
//! ```

use std::ops::RangeInclusive;

use log::{debug, warn};
use rand::Rng;

use crate::direction::{Difficulty, Direction};
use crate::fill_pool::{distinct_units, is_malformed_akshara, SAFE_DEVANAGARI};
use crate::grid::{Cell, Coord, Grid, Placement};
use crate::script::{Language, LATIN_ALPHABET};
use crate::word::TargetWord;

/// Default grid dimension.
pub const DEFAULT_GRID_SIZE: usize = 12;
const SHORT_WORD_ATTEMPTS: usize = 100;
const LONG_WORD_ATTEMPTS: usize = 150;
const LONG_WORD_THRESHOLD: usize = 8;

/// Tunables for a generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub grid_size: usize,
    /// Random attempts for words of up to `long_word_threshold` units.
    pub short_word_attempts: usize,
    /// Random attempts for longer words.
    pub long_word_attempts: usize,
    pub long_word_threshold: usize,
    /// Overrides both attempt counts when set. `Some(0)` sends every word straight to the
    /// fallback.
    pub max_attempts: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            grid_size: DEFAULT_GRID_SIZE,
            short_word_attempts: SHORT_WORD_ATTEMPTS,
            long_word_attempts: LONG_WORD_ATTEMPTS,
            long_word_threshold: LONG_WORD_THRESHOLD,
            max_attempts: None,
        }
    }
}

impl GeneratorConfig {
    #[must_use]
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Random attempts allowed for a word of `unit_count` units.
    #[must_use]
    pub fn attempts_for(&self, unit_count: usize) -> usize {
        match self.max_attempts {
            Some(n) => n,
            None if unit_count <= self.long_word_threshold => self.short_word_attempts,
            None => self.long_word_attempts,
        }
    }
}

/// Output of one generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedGrid {
    pub grid: Grid,
    /// One record per placed word, in input order.
    pub placements: Vec<Placement>,
    /// Indices of words that could not be placed anywhere.
    pub unplaced: Vec<usize>,
}

impl GeneratedGrid {
    /// Placement of the word at `word_index`, if it was placed.
    #[must_use]
    pub fn placement_of(&self, word_index: usize) -> Option<&Placement> {
        self.placements.iter().find(|p| p.word_index == word_index)
    }
}

/// Grid under construction: `None` marks a cell no word has claimed yet.
struct Board {
    size: usize,
    slots: Vec<Option<String>>,
}

impl Board {
    fn new(size: usize) -> Self {
        Board {
            size,
            slots: vec![None; size * size],
        }
    }

    fn slot(&self, at: Coord) -> Option<&str> {
        self.slots[at.row * self.size + at.col].as_deref()
    }

    /// Cells `units` would occupy from `start` along `direction`, if every one is either
    /// empty or already holds the same unit.
    fn fit(&self, units: &[String], start: Coord, direction: Direction) -> Option<Vec<Coord>> {
        units
            .iter()
            .enumerate()
            .map(|(i, unit)| {
                let at = start.offset(direction, i, self.size)?;
                match self.slot(at) {
                    Some(existing) if existing != unit.as_str() => None,
                    _ => Some(at),
                }
            })
            .collect()
    }

    fn write(&mut self, units: &[String], cells: &[Coord]) {
        for (unit, at) in units.iter().zip(cells) {
            self.slots[at.row * self.size + at.col] = Some(unit.clone());
        }
    }

    /// Columns in `row` where a run of `len` empty cells begins.
    fn empty_run_starts(&self, row: usize, len: usize) -> Vec<usize> {
        if len == 0 || len > self.size {
            return Vec::new();
        }
        (0..=self.size - len)
            .filter(|&col| (col..col + len).all(|c| self.slot(Coord::new(row, c)).is_none()))
            .collect()
    }
}

/// Place `words` into a fresh grid and fill the remaining cells from `fill_pool`.
///
/// An empty `fill_pool` falls back to the distinct units of `words`, then to A–Z.
pub fn generate<R: Rng + ?Sized>(
    words: &[TargetWord],
    language: &Language,
    difficulty: Difficulty,
    fill_pool: &[String],
    config: &GeneratorConfig,
    rng: &mut R,
) -> GeneratedGrid {
    let size = config.grid_size;
    let rtl = language.is_rtl();
    let reverse = difficulty.reverses_units(rtl);
    let directions = difficulty.permitted_directions();
    let mut board = Board::new(size);
    let mut placements = Vec::with_capacity(words.len());
    let mut unplaced = Vec::new();

    for (word_index, word) in words.iter().enumerate() {
        if word.is_empty() {
            warn!("Skipping empty word at index {word_index}");
            unplaced.push(word_index);
            continue;
        }

        let mut units = word.units.clone();
        if reverse {
            units.reverse();
        }

        let attempts = config.attempts_for(units.len());
        let placed = place_randomly(&board, &units, directions, attempts, rng)
            .map(|(start, direction, cells)| (start, direction, cells, false))
            .or_else(|| {
                debug!("\"{}\": {attempts} random attempts failed, scanning rows", word.text);
                place_in_first_free_row(&board, &units, rng)
                    .map(|(start, cells)| (start, Direction::Right, cells, true))
            });

        match placed {
            Some((start, direction, cells, fallback)) => {
                debug!("\"{}\" placed at {start} going {direction:?}", word.text);
                board.write(&units, &cells);
                placements.push(Placement {
                    word_index,
                    start,
                    direction,
                    cells,
                    fallback,
                });
            }
            None => {
                warn!(
                    "\"{}\" ({} units) does not fit in the {size}x{size} grid; it will not be findable",
                    word.text,
                    units.len()
                );
                unplaced.push(word_index);
            }
        }
    }

    let grid = fill(board, words, language, fill_pool, rng);
    debug!(
        "Generated {size}x{size} grid: {} placed, {} unplaced",
        placements.len(),
        unplaced.len()
    );

    GeneratedGrid {
        grid,
        placements,
        unplaced,
    }
}

/// Start values along one axis that keep `len` units in bounds when stepping by `step`.
fn start_range(step: isize, len: usize, size: usize) -> Option<RangeInclusive<usize>> {
    if len == 0 || len > size {
        return None;
    }
    Some(match step {
        1 => 0..=size - len,
        -1 => len - 1..=size - 1,
        _ => 0..=size - 1,
    })
}

fn place_randomly<R: Rng + ?Sized>(
    board: &Board,
    units: &[String],
    directions: &[Direction],
    attempts: usize,
    rng: &mut R,
) -> Option<(Coord, Direction, Vec<Coord>)> {
    if directions.is_empty() {
        return None;
    }
    for _ in 0..attempts {
        let direction = directions[rng.random_range(0..directions.len())];
        let (dx, dy) = direction.step();
        let (Some(cols), Some(rows)) = (
            start_range(dx, units.len(), board.size),
            start_range(dy, units.len(), board.size),
        ) else {
            continue;
        };
        let start = Coord::new(rng.random_range(rows), rng.random_range(cols));
        if let Some(cells) = board.fit(units, start, direction) {
            return Some((start, direction, cells));
        }
    }
    None
}

/// Horizontal placement in the first row with a long enough run of empty cells.
fn place_in_first_free_row<R: Rng + ?Sized>(
    board: &Board,
    units: &[String],
    rng: &mut R,
) -> Option<(Coord, Vec<Coord>)> {
    (0..board.size).find_map(|row| {
        let starts = board.empty_run_starts(row, units.len());
        if starts.is_empty() {
            return None;
        }
        let start = Coord::new(row, starts[rng.random_range(0..starts.len())]);
        let cells = (0..units.len())
            .map(|i| Coord::new(row, start.col + i))
            .collect();
        Some((start, cells))
    })
}

fn fill<R: Rng + ?Sized>(
    board: Board,
    words: &[TargetWord],
    language: &Language,
    fill_pool: &[String],
    rng: &mut R,
) -> Grid {
    let mut pool: Vec<String> = fill_pool.iter().filter(|u| !u.is_empty()).cloned().collect();
    if pool.is_empty() {
        pool = distinct_units(words);
    }
    if pool.is_empty() {
        pool = LATIN_ALPHABET.chars().map(String::from).collect();
    }
    let safe: Vec<char> = SAFE_DEVANAGARI.chars().collect();
    let sanitize = language.is_devanagari();
    let rtl = language.is_rtl();
    let mut replaced = 0usize;

    let cells = board
        .slots
        .into_iter()
        .map(|slot| {
            let unit = match slot {
                Some(unit) => unit,
                None => {
                    let filler = pool[rng.random_range(0..pool.len())].clone();
                    if sanitize && is_malformed_akshara(&filler) {
                        replaced += 1;
                        safe[rng.random_range(0..safe.len())].to_string()
                    } else {
                        filler
                    }
                }
            };
            Cell { unit, rtl }
        })
        .collect();

    if replaced > 0 {
        debug!("Replaced {replaced} malformed Devanagari fill cells");
    }
    Grid::from_cells(board.size, cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn latin_pool() -> Vec<String> {
        LATIN_ALPHABET.chars().map(String::from).collect()
    }

    fn targets(texts: &[&str], language: &Language) -> Vec<TargetWord> {
        texts.iter().map(|t| TargetWord::new(t, language)).collect()
    }

    fn run_units(generated: &GeneratedGrid, placement: &Placement) -> Vec<String> {
        placement
            .cells
            .iter()
            .map(|&at| generated.grid.get(at).map(|c| c.unit.clone()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_attempts_for() {
        let config = GeneratorConfig::default();
        assert_eq!(config.attempts_for(3), 100);
        assert_eq!(config.attempts_for(8), 100);
        assert_eq!(config.attempts_for(9), 150);
        assert_eq!(config.with_max_attempts(0).attempts_for(9), 0);
    }

    #[test]
    fn test_start_range() {
        assert_eq!(start_range(1, 3, 12), Some(0..=9));
        assert_eq!(start_range(-1, 3, 12), Some(2..=11));
        assert_eq!(start_range(0, 3, 12), Some(0..=11));
        assert_eq!(start_range(1, 13, 12), None);
        assert_eq!(start_range(1, 12, 12), Some(0..=0));
    }

    #[test]
    fn test_cat_dog_easy() {
        let en = Language::new("en");
        let words = targets(&["CAT", "DOG"], &en);
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let generated = generate(&words, &en, Difficulty::Easy, &latin_pool(), &GeneratorConfig::default(), &mut rng);

        assert_eq!(generated.grid.size(), 12);
        assert_eq!(generated.grid.cells().len(), 144);
        assert_eq!(generated.placements.len(), 2);
        for placement in &generated.placements {
            let word = &words[placement.word_index];
            assert_eq!(run_units(&generated, placement), word.units);
            assert!(Direction::FORWARD.contains(&placement.direction));
        }
        assert!(generated.grid.cells().iter().all(|c| c.unit.chars().count() == 1 && !c.rtl));
    }

    #[test]
    fn test_crossings_never_corrupt_earlier_words() {
        let en = Language::new("en");
        let words = targets(&["ALPHA", "BRAVO", "CHARLIE", "DELTA", "ECHO", "FOXTROT", "GOLF"], &en);
        for seed in 0..20 {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let config = GeneratorConfig::default().with_grid_size(8);
            let generated = generate(&words, &en, Difficulty::Hard, &latin_pool(), &config, &mut rng);
            for placement in &generated.placements {
                assert_eq!(run_units(&generated, placement), words[placement.word_index].units, "seed {seed}");
            }
        }
    }

    #[test]
    fn test_zero_attempts_uses_row_fallback() {
        let en = Language::new("en");
        let words = targets(&["CAT", "DOG", "BIRD"], &en);
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let config = GeneratorConfig::default().with_max_attempts(0);
        let generated = generate(&words, &en, Difficulty::Hard, &latin_pool(), &config, &mut rng);

        assert_eq!(generated.placements.len(), 3);
        for placement in &generated.placements {
            assert!(placement.fallback);
            assert_eq!(placement.direction, Direction::Right);
            assert!(placement.start.row <= 1, "three short words fit in the first two rows");
            assert_eq!(run_units(&generated, placement), words[placement.word_index].units);
        }
    }

    #[test]
    fn test_fallback_moves_to_next_row_when_full() {
        let en = Language::new("en");
        let words = targets(&["ABCD", "EFGH"], &en);
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let config = GeneratorConfig::default().with_grid_size(4).with_max_attempts(0);
        let generated = generate(&words, &en, Difficulty::Easy, &latin_pool(), &config, &mut rng);

        let rows: Vec<usize> = generated.placements.iter().map(|p| p.start.row).collect();
        assert_eq!(rows, vec![0, 1]);
        assert_eq!(generated.grid.to_string().lines().next(), Some("A B C D"));
    }

    #[test]
    fn test_word_longer_than_grid_is_unplaced() {
        let en = Language::new("en");
        let words = targets(&["CAT", "ENCYCLOPEDIA"], &en);
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let config = GeneratorConfig::default().with_grid_size(5);
        let generated = generate(&words, &en, Difficulty::Hard, &latin_pool(), &config, &mut rng);

        assert_eq!(generated.unplaced, vec![1]);
        assert_eq!(generated.placements.len(), 1);
        assert!(generated.placement_of(0).is_some());
        assert!(generated.placement_of(1).is_none());
        assert!(generated.grid.cells().iter().all(|c| !c.unit.is_empty()));
    }

    #[test]
    fn test_empty_word_is_unplaced() {
        let en = Language::new("en");
        let words = vec![TargetWord::new("", &en), TargetWord::new("OK", &en)];
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let generated = generate(&words, &en, Difficulty::Easy, &latin_pool(), &GeneratorConfig::default(), &mut rng);
        assert_eq!(generated.unplaced, vec![0]);
    }

    #[test]
    fn test_rtl_easy_reverses_units() {
        let he = Language::new("he");
        let words = targets(&["שלום"], &he);
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let generated = generate(&words, &he, Difficulty::Easy, &[], &GeneratorConfig::default(), &mut rng);

        let placement = &generated.placements[0];
        let mut units = run_units(&generated, placement);
        units.reverse();
        assert_eq!(units, words[0].units);
        assert!(generated.grid.cells().iter().all(|c| c.rtl));
    }

    #[test]
    fn test_rtl_hard_keeps_unit_order() {
        let he = Language::new("he");
        let words = targets(&["שלום"], &he);
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let generated = generate(&words, &he, Difficulty::Hard, &[], &GeneratorConfig::default(), &mut rng);
        assert_eq!(run_units(&generated, &generated.placements[0]), words[0].units);
    }

    #[test]
    fn test_empty_pool_uses_word_units() {
        let en = Language::new("en");
        let words = targets(&["AB"], &en);
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let generated = generate(&words, &en, Difficulty::Easy, &[], &GeneratorConfig::default(), &mut rng);
        assert!(generated.grid.cells().iter().all(|c| c.unit == "A" || c.unit == "B"));
    }

    #[test]
    fn test_devanagari_fill_is_sanitized() {
        let hi = Language::new("hi");
        let words = targets(&["नमस्ते"], &hi);
        let pool = vec!["\u{094D}".to_string(), "५".to_string()];
        let mut rng = ChaCha20Rng::seed_from_u64(4);
        let generated = generate(&words, &hi, Difficulty::Easy, &pool, &GeneratorConfig::default(), &mut rng);

        assert!(generated.grid.cells().iter().all(|c| !is_malformed_akshara(&c.unit)));
        assert_eq!(run_units(&generated, &generated.placements[0]), words[0].units);
    }

    #[test]
    fn test_same_seed_same_grid() {
        let en = Language::new("en");
        let words = targets(&["CAT", "DOG"], &en);
        let config = GeneratorConfig::default();
        let a = generate(&words, &en, Difficulty::Hard, &latin_pool(), &config, &mut ChaCha20Rng::seed_from_u64(9));
        let b = generate(&words, &en, Difficulty::Hard, &latin_pool(), &config, &mut ChaCha20Rng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
