use thiserror::Error;

use crate::{CellCount, Color, Coord, LevelId};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Invalid color {0}, not in the palette")]
    InvalidColor(Color),
    #[error("Invalid board size {0}")]
    InvalidBoardSize(Coord),
    #[error("Malformed level data: expected {expected} colors, got {actual}")]
    MalformedLevelData { expected: CellCount, actual: usize },
    #[error("Malformed level data: color {color} at index {index} is outside the palette")]
    ColorOutOfPalette { index: usize, color: Color },
    #[error("Step budget must allow at least one move")]
    InvalidStepBudget,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Level has no step budget")]
    NoStepBudget,
    #[error("Snapshot counters do not match its grid")]
    InconsistentSnapshot,
}

pub type Result<T> = core::result::Result<T, GameError>;

#[derive(Error, Debug)]
pub enum LevelPackError {
    #[error("Could not parse level pack: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Level {id} is invalid: {source}")]
    InvalidLevel { id: LevelId, source: GameError },
    #[error("Level {0} appears more than once")]
    DuplicateLevel(LevelId),
    #[error("Level pack entry {0} has no id")]
    MissingId(usize),
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum LevelIdError {
    #[error("Level id is too short")]
    TooShort,
    #[error("Invalid level number")]
    InvalidNumber,
    #[error("Unknown size class {0:?}")]
    UnknownSizeClass(char),
    #[error("Unknown adjacency mode {0:?}")]
    UnknownMode(char),
}

#[derive(Error, Debug)]
pub enum RecordsError {
    #[error("Could not parse records: {0}")]
    Json(#[from] serde_json::Error),
}
