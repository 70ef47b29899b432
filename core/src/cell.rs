use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::Direction;

bitflags! {
    /// Set of closed walls around a cell.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Walls: u8 {
        const TOP    = 1;
        const RIGHT  = 1 << 1;
        const BOTTOM = 1 << 2;
        const LEFT   = 1 << 3;
    }
}

/// One grid unit: the walls still standing around it and whether the carve reached it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    walls: Walls,
    visited: bool,
}

impl Cell {
    pub const fn closed() -> Self {
        Self {
            walls: Walls::all(),
            visited: false,
        }
    }

    pub const fn walls(self) -> Walls {
        self.walls
    }

    pub const fn is_visited(self) -> bool {
        self.visited
    }

    pub const fn has_wall(self, dir: Direction) -> bool {
        self.walls.contains(dir.wall())
    }

    pub const fn top(self) -> bool {
        self.walls.contains(Walls::TOP)
    }

    pub const fn right(self) -> bool {
        self.walls.contains(Walls::RIGHT)
    }

    pub const fn bottom(self) -> bool {
        self.walls.contains(Walls::BOTTOM)
    }

    pub const fn left(self) -> bool {
        self.walls.contains(Walls::LEFT)
    }

    pub(crate) fn open(&mut self, dir: Direction) {
        self.walls.remove(dir.wall());
    }

    pub(crate) fn visit(&mut self) {
        self.visited = true;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::closed()
    }
}
