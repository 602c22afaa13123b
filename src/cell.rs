use serde::{Deserialize, Serialize};

/// Player-visible state of a single board position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    Flagged,
    Revealed(u8),
    /// A mine shown after the game has ended. Never produced during play.
    Mine,
}

impl CellState {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_) | Self::Mine)
    }

    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// One board position. Coordinates are carried by the cell's index in the
/// grid's 2D array, not stored here.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) is_mine: bool,
    pub(crate) state: CellState,
}

impl Cell {
    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn state(&self) -> CellState {
        self.state
    }
}
