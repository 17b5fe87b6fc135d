//! Turning a drag gesture into an ordered, straight run of cells.

use crate::direction::Direction;
use crate::errors::PuzzleError;
use crate::grid::Coord;

/// Cells on the rasterized line from `start` to `end`, both ends included (Bresenham).
///
/// For endpoints that lie on one of the 8 compass lines the result is exactly that run.
/// The result holds one coordinate per step of the longer axis; clamp far endpoints first
/// (as [`selection_path`] does) when they come from untrusted input.
#[must_use]
pub fn trace_line(start: Coord, end: Coord) -> Vec<Coord> {
    let (mut x, mut y) = (to_signed(start.col), to_signed(start.row));
    let (x1, y1) = (to_signed(end.col), to_signed(end.row));
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut path = Vec::with_capacity(dx.max(-dy).unsigned_abs() + 1);
    loop {
        path.push(Coord::new(y.unsigned_abs(), x.unsigned_abs()));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    path
}

/// The straight selection a player makes by dragging from `start` toward `pointer`.
///
/// The pointer is snapped to the nearest of the 8 directions and the run is cut short at the
/// grid edge, so the result is always a contiguous compass line inside the grid.
///
/// # Errors
///
/// Returns [`PuzzleError::CellOutOfBounds`] if `start` is outside a `size` grid.
pub fn selection_path(start: Coord, pointer: Coord, size: usize) -> Result<Vec<Coord>, PuzzleError> {
    if start.row >= size || start.col >= size {
        return Err(PuzzleError::CellOutOfBounds {
            row: start.row,
            col: start.col,
            size,
        });
    }

    let Some((direction, len)) = snap(start, pointer) else {
        return Ok(vec![start]);
    };
    // no run inside the grid is longer than size - 1 steps
    let reach = (0..=len.min(size - 1))
        .rev()
        .find(|&n| start.offset(direction, n, size).is_some())
        .unwrap_or(0);
    let end = start.offset(direction, reach, size).unwrap_or(start);
    Ok(trace_line(start, end))
}

/// Direction of a validated selection path, `None` for a single cell.
///
/// # Errors
///
/// Returns [`PuzzleError::NotStraightLine`] unless every step between consecutive cells is
/// the same compass step.
pub fn path_direction(path: &[Coord]) -> Result<Option<Direction>, PuzzleError> {
    let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
        return Ok(None);
    };
    let mut direction = None;
    for pair in path.windows(2) {
        let dx = to_signed(pair[1].col) - to_signed(pair[0].col);
        let dy = to_signed(pair[1].row) - to_signed(pair[0].row);
        let step = Direction::from_step(dx, dy);
        if step.is_none() || (direction.is_some() && direction != step) {
            return Err(PuzzleError::NotStraightLine { from: first, to: last });
        }
        direction = step;
    }
    Ok(direction)
}

/// Nearest compass direction from `start` toward `pointer` and the number of steps to take.
fn snap(start: Coord, pointer: Coord) -> Option<(Direction, usize)> {
    let dx = to_signed(pointer.col) - to_signed(start.col);
    let dy = to_signed(pointer.row) - to_signed(start.row);
    let (ax, ay) = (dx.abs(), dy.abs());
    if ax == 0 && ay == 0 {
        return None;
    }
    let (step, len) = if near_axis(ax, ay) {
        ((dx.signum(), 0), ax)
    } else if near_axis(ay, ax) {
        ((0, dy.signum()), ay)
    } else {
        ((dx.signum(), dy.signum()), ax.max(ay))
    };
    Direction::from_step(step.0, step.1).map(|d| (d, len.unsigned_abs()))
}

/// Within ~22° of the `major` axis: `5 * minor <= 2 * major`, widened so far pointers
/// cannot overflow.
fn near_axis(major: isize, minor: isize) -> bool {
    let wide = |v: isize| i128::try_from(v).unwrap_or(i128::MAX);
    5 * wide(minor) <= 2 * wide(major)
}

fn to_signed(v: usize) -> isize {
    isize::try_from(v).unwrap_or(isize::MAX)
}
