//! Placement directions and the difficulty modes that select among them.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::PuzzleError;

/// One of the 8 compass step vectors a word can be laid along.
///
/// `dx` steps columns (positive = right), `dy` steps rows (positive = down).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
    DownRight,
    DownLeft,
    UpRight,
    UpLeft,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::UpRight,
        Direction::UpLeft,
    ];

    /// Forward-biased subset used by easy mode.
    pub const FORWARD: [Direction; 3] = [Direction::Right, Direction::Down, Direction::DownRight];

    /// `(dx, dy)` step for this direction.
    #[must_use]
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
            Direction::Up => (0, -1),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (-1, 1),
            Direction::UpRight => (1, -1),
            Direction::UpLeft => (-1, -1),
        }
    }

    /// Inverse of [`Direction::step`]. `(0, 0)` and non-unit steps have no direction.
    #[must_use]
    pub fn from_step(dx: isize, dy: isize) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.step() == (dx, dy))
    }

    #[must_use]
    pub fn reversed(self) -> Direction {
        let (dx, dy) = self.step();
        match Direction::from_step(-dx, -dy) {
            Some(d) => d,
            None => unreachable!("every compass direction has an opposite"),
        }
    }
}

/// Difficulty modes a level can be played in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
    Loose,
    /// Switches language every level; generation is identical to [`Difficulty::Hard`].
    Babel,
}

impl Difficulty {
    /// Directions the generator may pick from.
    ///
    /// Easy mode uses the forward-biased set in every script; right-to-left languages read
    /// it mirrored because their unit sequences are reversed before placement (see
    /// [`Difficulty::reverses_units`]).
    #[must_use]
    pub fn permitted_directions(self) -> &'static [Direction] {
        match self {
            Difficulty::Easy => &Direction::FORWARD,
            Difficulty::Hard | Difficulty::Loose | Difficulty::Babel => &Direction::ALL,
        }
    }

    /// Whether units are laid down back to front so the word reads right-to-left.
    #[must_use]
    pub fn reverses_units(self, rtl: bool) -> bool {
        rtl && self == Difficulty::Easy
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
            Difficulty::Loose => "loose",
            Difficulty::Babel => "babel",
        }
    }
}

impl FromStr for Difficulty {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            "loose" => Ok(Difficulty::Loose),
            "babel" => Ok(Difficulty::Babel),
            _ => Err(PuzzleError::UnknownDifficulty { input: s.to_string() }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
