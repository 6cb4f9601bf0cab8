use thiserror::Error;

use crate::TileValue;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Tile index is outside the board")]
    InvalidTileIndex,
    #[error("Pair count must be between 1 and the largest tile value")]
    InvalidPairCount,
    #[error("Tile value {0} does not appear exactly twice")]
    UnpairedValue(TileValue),
    #[error("Selection does not match the face-up tiles of the board")]
    InvalidRoundState,
}

pub type Result<T> = core::result::Result<T, GameError>;
