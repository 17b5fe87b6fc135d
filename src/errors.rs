//! Error types for the boundary layer (parsing caller input, validating drag coordinates).
//!
//! The generation and matching core never fails: an unplaceable word is reported as data
//! on the generated grid, and a selection that matches nothing is simply `None`. Errors only
//! arise when turning untrusted caller input (difficulty strings, grid sizes, pointer
//! coordinates) into core values.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (P001-P004) for documentation lookup:
//!
//! - P001: `UnknownDifficulty` (Difficulty string not recognized)
//! - P002: `InvalidGridSize` (Grid dimension out of range)
//! - P003: `CellOutOfBounds` (Selected cell lies outside the grid)
//! - P004: `NotStraightLine` (Selection cells do not form a straight contiguous line)
//!
//! # Examples
//!
//! ```
//! use wordsearch::direction::Difficulty;
//! use wordsearch::errors::PuzzleError;
//!
//! match "medium".parse::<Difficulty>() {
//!     Err(e) => {
//!         assert_eq!(e.code(), "P001");
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(d) => println!("parsed {d}"),
//! }
//! ```

use crate::grid::Coord;

/// Largest grid dimension accepted from callers.
pub const MAX_GRID_SIZE: usize = 64;

/// Custom error type for puzzle input validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    #[error("Unknown difficulty: \"{input}\"")]
    UnknownDifficulty { input: String },

    #[error("Invalid grid size: {size} (must be 1-{max})", max = MAX_GRID_SIZE)]
    InvalidGridSize { size: usize },

    #[error("Cell ({row}, {col}) is outside the {size}x{size} grid")]
    CellOutOfBounds { row: usize, col: usize, size: usize },

    #[error("Selection from {from} to {to} is not a straight line")]
    NotStraightLine { from: Coord, to: Coord },
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::UnknownDifficulty { .. } => "P001",
            PuzzleError::InvalidGridSize { .. } => "P002",
            PuzzleError::CellOutOfBounds { .. } => "P003",
            PuzzleError::NotStraightLine { .. } => "P004",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            PuzzleError::UnknownDifficulty { .. } => "Difficulty string not recognized",
            PuzzleError::InvalidGridSize { .. } => "Grid dimension out of range",
            PuzzleError::CellOutOfBounds { .. } => "Selected cell lies outside the grid",
            PuzzleError::NotStraightLine { .. } => "Selection is not a straight contiguous line",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            PuzzleError::UnknownDifficulty { .. } => "The difficulty identifier supplied by the caller is not one of the known modes. Difficulty controls which placement directions the generator may use.",
            PuzzleError::InvalidGridSize { .. } => "Grids are square; the dimension must be at least 1 and no larger than the supported maximum.",
            PuzzleError::CellOutOfBounds { .. } => "A drag coordinate was reported outside the generated grid. This usually means the UI layer and the puzzle disagree on the grid size.",
            PuzzleError::NotStraightLine { .. } => "Consecutive selected cells must be neighbours along one of the 8 compass directions, all in the same direction.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::UnknownDifficulty { .. } => Some("Use one of: easy, hard, loose, babel"),
            PuzzleError::InvalidGridSize { .. } => Some("Typical grids are 10-15 cells wide (e.g., 12)"),
            PuzzleError::CellOutOfBounds { .. } => None,
            PuzzleError::NotStraightLine { .. } => Some("Build selections with `selection_path`, which always yields a straight line"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

/// Validates a caller-supplied grid dimension.
///
/// # Errors
///
/// Returns [`PuzzleError::InvalidGridSize`] if `size` is 0 or above [`MAX_GRID_SIZE`].
pub fn validate_grid_size(size: usize) -> Result<usize, PuzzleError> {
    if (1..=MAX_GRID_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(PuzzleError::InvalidGridSize { size })
    }
}
