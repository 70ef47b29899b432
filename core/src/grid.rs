use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::types::apply_delta;
use crate::*;

/// Square array of cells, indexed by `(row, col)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Creates a grid with every wall closed and no cell visited.
    ///
    /// # Panics
    ///
    /// When `size` is zero.
    pub fn new(size: Coord) -> Self {
        assert!(size > 0, "grid size must be positive");
        Self {
            cells: Array2::from_elem((size, size).to_nd_index(), Cell::closed()),
        }
    }

    /// Side length `N`.
    pub fn size(&self) -> Coord {
        self.cells
            .dim()
            .0
            .try_into()
            .expect("grid side fits in a coordinate")
    }

    pub fn total_cells(&self) -> CellCount {
        let size = self.size();
        mult(size, size)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    pub fn get(&self, coords: Coord2) -> Result<Cell> {
        self.validate_coords(coords).map(|coords| self.cell_at(coords))
    }

    pub fn neighbors_of(&self, coords: Coord2) -> NeighborIter {
        let size = self.size();
        NeighborIter::new(coords, (size, size))
    }

    pub fn unvisited_neighbors_of(&self, coords: Coord2) -> SmallVec<[Coord2; 4]> {
        self.neighbors_of(coords)
            .map(|(_, pos)| pos)
            .filter(|&pos| !self.cell_at(pos).is_visited())
            .collect()
    }

    pub fn mark_visited(&mut self, coords: Coord2) {
        self.cells[coords.to_nd_index()].visit();
    }

    /// Clears the shared wall on both cells.
    ///
    /// # Panics
    ///
    /// When `b` is not a cardinal neighbor of `a`.
    pub fn open_wall_between(&mut self, a: Coord2, b: Coord2) {
        let dir = Direction::between(a, b)
            .unwrap_or_else(|| panic!("cells {a:?} and {b:?} are not adjacent"));
        self.cells[a.to_nd_index()].open(dir);
        self.cells[b.to_nd_index()].open(dir.opposite());
    }

    pub fn is_open(&self, coords: Coord2, dir: Direction) -> bool {
        !self.cell_at(coords).has_wall(dir)
    }

    /// Neighbor reached by walking `dir`, only when the grid edge or a wall doesn't block it.
    pub fn step(&self, coords: Coord2, dir: Direction) -> Option<Coord2> {
        let size = self.size();
        let next = apply_delta(coords, dir.delta(), (size, size))?;
        self.is_open(coords, dir).then_some(next)
    }

    /// Number of carved passages, each counted once.
    pub fn open_edge_count(&self) -> CellCount {
        self.iter_coords()
            .map(|pos| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(|&dir| self.step(pos, dir).is_some())
                    .count() as CellCount
            })
            .sum()
    }

    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let size = self.size();
        (0..size).flat_map(move |row| (0..size).map(move |col| (row, col)))
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
