#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod grid;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub duration_secs: u32,
    pub score_increment: u32,
}

impl GameConfig {
    pub const DEFAULT_SIZE: Coord = 15;
    pub const DEFAULT_DURATION_SECS: u32 = 180;
    pub const DEFAULT_SCORE_INCREMENT: u32 = 10;

    pub const fn new_unchecked(size: Coord, duration_secs: u32, score_increment: u32) -> Self {
        Self {
            size,
            duration_secs,
            score_increment,
        }
    }

    pub fn new(size: Coord, duration_secs: u32, score_increment: u32) -> Self {
        if size == 0 || duration_secs == 0 {
            log::warn!(
                "Clamping game config, requested size {} and duration {}s",
                size,
                duration_secs
            );
        }
        Self::new_unchecked(size.max(1), duration_secs.max(1), score_increment)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    /// Bottom-right corner, the target the player walks to.
    pub const fn exit(&self) -> Coord2 {
        (self.size - 1, self.size - 1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(
            Self::DEFAULT_SIZE,
            Self::DEFAULT_DURATION_SECS,
            Self::DEFAULT_SCORE_INCREMENT,
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Blocked,
    Moved,
    Won,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Blocked => false,
            Self::Moved | Self::Won => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Ticked,
    Expired,
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_clamps_degenerate_values() {
        let config = GameConfig::new(0, 0, 5);
        assert_eq!(config, GameConfig::new_unchecked(1, 1, 5));
        assert_eq!(config.exit(), (0, 0));
    }

    #[test]
    fn default_config_matches_classic_board() {
        let config = GameConfig::default();
        assert_eq!(config.size, 15);
        assert_eq!(config.total_cells(), 225);
        assert_eq!(config.exit(), (14, 14));
        assert_eq!(config.duration_secs, 180);
        assert_eq!(config.score_increment, 10);
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = GameConfig::new(21, 90, 5);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<GameConfig>(&json).unwrap(), config);
    }
}
