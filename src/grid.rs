//! Grid value objects: coordinates, cells, the finished grid and placement records.

use std::fmt;

use serde::Serialize;

use crate::direction::Direction;
use crate::errors::PuzzleError;

/// A grid position. `row` grows downward, `col` grows rightward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// The coordinate `n` steps away along `direction`, if it stays inside a `size` grid.
    #[must_use]
    pub fn offset(self, direction: Direction, n: usize, size: usize) -> Option<Coord> {
        let (dx, dy) = direction.step();
        let n = isize::try_from(n).ok()?;
        let row = self.row.checked_add_signed(dy * n)?;
        let col = self.col.checked_add_signed(dx * n)?;
        (row < size && col < size).then_some(Coord { row, col })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One grid position's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    /// One glyph or one multi-codepoint cluster. Never empty.
    pub unit: String,
    /// Rendering hint: the cell belongs to a right-to-left script.
    pub rtl: bool,
}

/// Where one target word ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// Index of the word in the caller's list.
    pub word_index: usize,
    pub start: Coord,
    pub direction: Direction,
    /// Occupied cells in placement order.
    pub cells: Vec<Coord>,
    /// Placed by the row-scan fallback rather than a random attempt.
    pub fallback: bool,
}

/// A completed N×N grid. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from row-major cells. `cells.len()` must be `size * size`.
    pub(crate) fn from_cells(size: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Grid { size, cells }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn get(&self, at: Coord) -> Option<&Cell> {
        if at.row < self.size && at.col < self.size {
            self.cells.get(at.row * self.size + at.col)
        } else {
            None
        }
    }

    /// Like [`Grid::get`], but reports out-of-range coordinates as an error.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::CellOutOfBounds`] if `at` lies outside the grid.
    pub fn cell(&self, at: Coord) -> Result<&Cell, PuzzleError> {
        self.get(at).ok_or(PuzzleError::CellOutOfBounds {
            row: at.row,
            col: at.col,
            size: self.size,
        })
    }

    /// Cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Resolve a path of coordinates into cells.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::CellOutOfBounds`] for the first coordinate outside the grid.
    pub fn cells_at(&self, path: &[Coord]) -> Result<Vec<&Cell>, PuzzleError> {
        path.iter().map(|&at| self.cell(at)).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<&str> = row.iter().map(|c| c.unit.as_str()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
