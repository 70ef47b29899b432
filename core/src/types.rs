use serde::{Deserialize, Serialize};

use crate::Walls;

/// Single coordinate axis used for grid side length, rows and columns.
pub type Coord = u8;

/// Count type used for total-cell and open-edge counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Cardinal direction on the grid, rows grow towards `South`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Canonical neighbor order.
    pub const ALL: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];

    pub const fn delta(self) -> (i8, i8) {
        use Direction::*;
        match self {
            North => (-1, 0),
            East => (0, 1),
            South => (1, 0),
            West => (0, -1),
        }
    }

    pub const fn opposite(self) -> Self {
        use Direction::*;
        match self {
            North => South,
            East => West,
            South => North,
            West => East,
        }
    }

    /// The wall of a cell that faces this direction.
    pub const fn wall(self) -> Walls {
        use Direction::*;
        match self {
            North => Walls::TOP,
            East => Walls::RIGHT,
            South => Walls::BOTTOM,
            West => Walls::LEFT,
        }
    }

    /// Direction of `to` as seen from `from`, only for cardinal neighbors.
    pub fn between(from: Coord2, to: Coord2) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|&dir| apply_delta(from, dir.delta(), (Coord::MAX, Coord::MAX)) == Some(to))
    }
}

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
pub(crate) fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (drow, dcol) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(drow)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(dcol)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates the in-bounds cardinal neighbors of a cell in `Direction::ALL` order.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = (Direction, Coord2);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let dir = *Direction::ALL.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, dir.delta(), self.bounds) {
                return Some((dir, next_item));
            }
        }
    }
}
