use alloc::vec::Vec;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Carves a perfect maze with a randomized depth-first search.
///
/// The walk starts at `(0, 0)`, always steps to a uniformly chosen unvisited neighbor and backtracks through an
/// explicit stack when stuck, so the open walls end up forming a spanning tree over the whole grid.
pub fn generate(size: Coord, source: &mut impl RandomSource) -> Grid {
    let mut grid = Grid::new(size);
    let mut stack: Vec<Coord2> = Vec::with_capacity(grid.total_cells().into());
    let mut current = (0, 0);
    let mut max_depth = 0;
    grid.mark_visited(current);

    loop {
        let candidates = grid.unvisited_neighbors_of(current);
        if !candidates.is_empty() {
            let next = candidates[source.pick(candidates.len())];
            stack.push(current);
            max_depth = max_depth.max(stack.len());
            grid.open_wall_between(current, next);
            grid.mark_visited(next);
            current = next;
        } else if let Some(prev) = stack.pop() {
            current = prev;
        } else {
            break;
        }
    }

    log::debug!(
        "carved {}x{} maze, {} passages, max depth {}",
        size,
        size,
        grid.open_edge_count(),
        max_depth
    );
    grid
}

/// Depth-first carve driven by a seeded `SmallRng`, or by any other source.
#[derive(Clone, Debug, PartialEq)]
pub struct DfsMazeGenerator<R = SmallRng> {
    source: R,
}

impl DfsMazeGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            source: SmallRng::seed_from_u64(seed),
        }
    }
}

impl<R: RandomSource> DfsMazeGenerator<R> {
    pub fn with_source(source: R) -> Self {
        Self { source }
    }
}

impl<R: RandomSource> MazeGenerator for DfsMazeGenerator<R> {
    fn generate(mut self, config: &GameConfig) -> Grid {
        generate(config.size, &mut self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cell_terminates_without_carving() {
        let mut source = ScriptedSource::default();
        let grid = generate(1, &mut source);

        assert!(grid[(0, 0)].is_visited());
        assert_eq!(grid[(0, 0)].walls(), Walls::all());
        assert_eq!(grid.open_edge_count(), 0);
        assert_eq!(source.consumed(), 0);
    }

    #[test]
    fn two_by_two_opens_three_walls() {
        // (0,0) -> East (0,1) -> South (1,1) -> West (1,0)
        let grid = generate(2, &mut ScriptedSource::new([0, 0, 0]));

        assert_eq!(grid.open_edge_count(), 3);
        assert!(grid.iter_coords().all(|pos| grid[pos].is_visited()));
        assert_eq!(grid.step((0, 0), Direction::East), Some((0, 1)));
        assert_eq!(grid.step((0, 1), Direction::South), Some((1, 1)));
        assert_eq!(grid.step((1, 1), Direction::West), Some((1, 0)));
        assert_eq!(grid.step((0, 0), Direction::South), None);
    }

    #[test]
    fn scripted_choice_picks_from_canonical_order() {
        // (0,0) -> South (1,0) -> East (1,1) -> North (0,1)
        let grid = generate(2, &mut ScriptedSource::new([1, 0, 0]));

        assert_eq!(grid.step((0, 0), Direction::South), Some((1, 0)));
        assert_eq!(grid.step((1, 0), Direction::East), Some((1, 1)));
        assert_eq!(grid.step((1, 1), Direction::North), Some((0, 1)));
        assert_eq!(grid.step((0, 0), Direction::East), None);
    }

    #[test]
    fn same_seed_same_maze() {
        let config = GameConfig::default();
        let a = DfsMazeGenerator::new(42).generate(&config);
        let b = DfsMazeGenerator::new(42).generate(&config);
        assert_eq!(a, b);
    }

    #[test]
    fn larger_grid_is_a_spanning_tree() {
        let grid = DfsMazeGenerator::new(3).generate(&GameConfig::new(30, 60, 10));
        assert!(grid.iter_coords().all(|pos| grid[pos].is_visited()));
        assert_eq!(grid.open_edge_count(), grid.total_cells() - 1);
    }
}
