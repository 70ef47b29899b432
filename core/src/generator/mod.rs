use crate::*;
pub use dfs::*;
pub use source::*;

mod dfs;
mod source;

pub trait MazeGenerator {
    fn generate(self, config: &GameConfig) -> Grid;
}
