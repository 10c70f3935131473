use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Observed state of the game at the current move. Always derived from the
/// current snapshot, so jumping back before a win makes the game playable again.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Playing,
    Won(Mark),
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won(_))
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Playing
    }
}

/// Status line shown above the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Winner(Mark),
    NextPlayer(Mark),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner(mark) => write!(f, "Winner: {mark}"),
            Self::NextPlayer(mark) => write!(f, "Next player: {mark}"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    NoChange,
    Placed(Mark),
    Won(Mark),
}

impl PlayOutcome {
    pub const fn has_update(self) -> bool {
        use PlayOutcome::*;
        match self {
            NoChange => false,
            Placed(_) => true,
            Won(_) => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JumpOutcome {
    NoChange,
    Moved,
}

impl JumpOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Moved => true,
        }
    }
}

/// Raw serialized form, only turned into a [`GameEngine`] after validation.
#[derive(Deserialize)]
struct EngineRecord {
    history: Vec<Board>,
    current_move: MoveIndex,
}

impl TryFrom<EngineRecord> for GameEngine {
    type Error = GameError;

    fn try_from(record: EngineRecord) -> Result<Self> {
        Self::from_history(record.history, record.current_move)
    }
}

/// Owner of the move history and the current move pointer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EngineRecord")]
pub struct GameEngine {
    history: Vec<Board>,
    current_move: MoveIndex,
}

impl GameEngine {
    pub fn new() -> Self {
        Self {
            history: vec![Board::EMPTY],
            current_move: 0,
        }
    }

    /// Rebuilds an engine from raw parts, checking that `history` starts from the
    /// empty board and that every snapshot is one legal move after the previous one.
    pub fn from_history(history: Vec<Board>, current_move: MoveIndex) -> Result<Self> {
        let first = history.first().ok_or(GameError::EmptyHistory)?;
        if !first.is_empty() {
            return Err(GameError::NotEmptyStart);
        }

        let moves = history.iter().zip(history.iter().skip(1));
        for (move_index, (before, after)) in moves.enumerate() {
            let legal = compute_winner(before).is_none()
                && before
                    .single_move_to(after)
                    .is_some_and(|(_, mark)| mark == Mark::for_move(move_index));
            if !legal {
                return Err(GameError::InvalidSnapshot(move_index + 1));
            }
        }

        if current_move >= history.len() {
            return Err(GameError::InvalidMove(current_move));
        }

        Ok(Self {
            history,
            current_move,
        })
    }

    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn current_move(&self) -> MoveIndex {
        self.current_move
    }

    /// Number of moves recorded, including any beyond the current pointer.
    pub fn move_count(&self) -> usize {
        self.history.len() - 1
    }

    pub fn next_mark(&self) -> Mark {
        Mark::for_move(self.current_move)
    }

    pub fn winner(&self) -> Option<Mark> {
        compute_winner(self.current_board())
    }

    pub fn winning_line(&self) -> Option<[CellIndex; 3]> {
        winning_line(self.current_board())
    }

    pub fn state(&self) -> EngineState {
        self.winner().map_or(EngineState::Playing, EngineState::Won)
    }

    pub fn is_finished(&self) -> bool {
        self.state().is_finished()
    }

    pub fn status(&self) -> Status {
        match self.winner() {
            Some(mark) => Status::Winner(mark),
            None => Status::NextPlayer(self.next_mark()),
        }
    }

    /// Places the next mark at `cell`, discarding any history after the current move.
    ///
    /// An occupied cell is a no-op; a rejected play never changes the engine.
    pub fn play(&mut self, cell: CellIndex) -> Result<PlayOutcome> {
        if !Board::is_valid_index(cell) {
            log::debug!("play rejected: cell {} out of range", cell);
            return Err(GameError::InvalidCell(cell));
        }
        self.check_playing()?;

        let board = *self.current_board();
        if !board[cell].is_empty() {
            log::debug!("play ignored: cell {} already occupied", cell);
            return Ok(PlayOutcome::NoChange);
        }

        let mark = self.next_mark();
        let next = board.with_mark(cell, mark);

        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;
        log::trace!("move #{}: {} at {}", self.current_move, mark, cell);

        Ok(match compute_winner(&next) {
            Some(winner) => PlayOutcome::Won(winner),
            None => PlayOutcome::Placed(mark),
        })
    }

    /// Moves the pointer to `move_index` without touching the history.
    pub fn jump_to(&mut self, move_index: MoveIndex) -> Result<JumpOutcome> {
        if move_index >= self.history.len() {
            log::debug!(
                "jump rejected: move {} beyond history of {}",
                move_index,
                self.history.len()
            );
            return Err(GameError::InvalidMove(move_index));
        }

        if move_index == self.current_move {
            return Ok(JumpOutcome::NoChange);
        }

        self.current_move = move_index;
        log::trace!("jumped to move #{}", move_index);
        Ok(JumpOutcome::Moved)
    }

    /// Discards the whole history and starts over from the empty board.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn check_playing(&self) -> Result<()> {
        match self.state() {
            EngineState::Playing => Ok(()),
            EngineState::Won(mark) => {
                log::debug!("play rejected: {} already won", mark);
                Err(GameError::AlreadyWon)
            }
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
