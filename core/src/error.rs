use thiserror::Error;

use crate::{CellIndex, MoveIndex};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid cell index {0}")]
    InvalidCell(CellIndex),
    #[error("Invalid move index {0}")]
    InvalidMove(MoveIndex),
    #[error("Game already won, no new moves are accepted")]
    AlreadyWon,
    #[error("History must contain at least one snapshot")]
    EmptyHistory,
    #[error("History must start from the empty board")]
    NotEmptyStart,
    #[error("Snapshot {0} is not a single legal move after the previous one")]
    InvalidSnapshot(MoveIndex),
}

pub type Result<T> = core::result::Result<T, GameError>;
