use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Ready,
    Active,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Ready
    }
}

/// One play-through of a generated maze: the player token, the countdown and the score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    maze: Grid,
    player: Coord2,
    exit: Coord2,
    state: EngineState,
    time_left: u32,
    score: u32,
    score_increment: u32,
    move_count: u32,
}

impl PlayEngine {
    pub fn new(maze: Grid, config: &GameConfig) -> Self {
        let size = maze.size();
        let exit = (size - 1, size - 1);
        let player = (0, 0);
        let state = if player == exit {
            EngineState::Won
        } else {
            EngineState::Ready
        };

        Self {
            maze,
            player,
            exit,
            state,
            time_left: config.duration_secs,
            score: 0,
            score_increment: config.score_increment,
            move_count: 0,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn maze(&self) -> &Grid {
        &self.maze
    }

    pub fn size(&self) -> Coord {
        self.maze.size()
    }

    pub fn player(&self) -> Coord2 {
        self.player
    }

    pub fn exit(&self) -> Coord2 {
        self.exit
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Walks the player one cell, unless a wall or the grid edge is in the way.
    pub fn move_player(&mut self, dir: Direction) -> Result<MoveOutcome> {
        self.check_not_finished()?;

        let Some(next) = self.maze.step(self.player, dir) else {
            log::trace!("move {:?} from {:?} blocked", dir, self.player);
            return Ok(MoveOutcome::Blocked);
        };

        self.player = next;
        self.move_count = self.move_count.saturating_add(1);
        self.score = self.score.saturating_add(self.score_increment);

        if next == self.exit {
            log::debug!("exit reached after {} moves", self.move_count);
            self.end_game(true);
            Ok(MoveOutcome::Won)
        } else {
            self.mark_started();
            Ok(MoveOutcome::Moved)
        }
    }

    /// Advances the countdown by one second.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        self.check_not_finished()?;

        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            log::debug!("time expired at {:?}", self.player);
            self.end_game(false);
            Ok(TickOutcome::Expired)
        } else {
            Ok(TickOutcome::Ticked)
        }
    }

    fn mark_started(&mut self) {
        if matches!(self.state, EngineState::Ready) {
            self.state = EngineState::Active;
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won {
            EngineState::Won
        } else {
            EngineState::Lost
        };
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
