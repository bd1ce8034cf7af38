use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates outside the board")]
    OutOfBounds,
    #[error("Cell is already revealed")]
    AlreadyRevealed,
    #[error("Too many mines for the board size")]
    TooManyMines,
    #[error("Snapshot grids do not match the declared board size")]
    SnapshotShape,
    #[error("Unsupported snapshot format version")]
    UnsupportedVersion,
}

pub type Result<T> = core::result::Result<T, GameError>;
