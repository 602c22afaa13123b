use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("coordinates are out of bounds")]
    OutOfBounds,
    #[error("cell is already revealed")]
    AlreadyRevealed,
    #[error("cannot flag a revealed cell")]
    InvalidFlagTarget,
    #[error("cell is flagged, unflag it before revealing")]
    RevealFlagged,
    #[error("game already ended, no new moves are accepted")]
    MoveAfterGameOver,
}

pub type Result<T> = core::result::Result<T, GameError>;
