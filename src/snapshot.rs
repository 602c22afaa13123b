//! Persistence boundary: a game is captured as an explicit snapshot value
//! and handed to the caller; there is no process-wide save path. Restoring
//! validates the snapshot before resuming and refuses anything malformed or
//! internally inconsistent.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::{CellState, Game};

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("inconsistent snapshot: {0}")]
    Inconsistent(&'static str),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Serializes the full game (mine layout, per-cell display state, outcome
/// flag) so that a later [`from_json`] resumes it identically.
pub fn to_json(game: &Game) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(game)?)
}

/// Decodes and validates a snapshot. Fails closed: a snapshot that decodes
/// but describes a state the engine could never have produced is rejected.
pub fn from_json(data: &str) -> Result<Game, SnapshotError> {
    let game: Game = serde_json::from_str(data)?;
    validate(&game)?;
    Ok(game)
}

pub fn save_to_path(game: &Game, path: &Path) -> Result<(), SnapshotError> {
    fs::write(path, to_json(game)?)?;
    log::debug!("game saved to {}", path.display());
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Game, SnapshotError> {
    let data = fs::read_to_string(path)?;
    let game = from_json(&data)?;
    log::debug!("game loaded from {}", path.display());
    Ok(game)
}

fn validate(game: &Game) -> Result<(), SnapshotError> {
    use SnapshotError::Inconsistent;

    let grid = game.grid();
    let size = usize::from(grid.size());
    if grid.shape() != (size, size) || size == 0 {
        return Err(Inconsistent("board shape does not match declared size"));
    }

    let counted = grid.iter_cells().filter(|(_, cell)| cell.is_mine()).count();
    if counted != grid.total_mines() as usize {
        return Err(Inconsistent("mine count does not match the board"));
    }

    let finished = game.status().is_finished();
    for (coords, cell) in grid.iter_cells() {
        match cell.state() {
            CellState::Revealed(_) if cell.is_mine() => {
                return Err(Inconsistent("a mine cell carries a safe-cell count"));
            }
            CellState::Revealed(count) if count != grid.mine_count(coords) => {
                return Err(Inconsistent("a revealed count disagrees with the adjacency"));
            }
            CellState::Mine if !cell.is_mine() || !finished => {
                return Err(Inconsistent("a cell shows a revealed mine in a live game"));
            }
            CellState::Hidden | CellState::Flagged if finished => {
                return Err(Inconsistent("a finished game still has unrevealed cells"));
            }
            _ => {}
        }
    }

    if !finished && game.is_won() {
        return Err(Inconsistent("an in-progress game already satisfies the win rule"));
    }

    Ok(())
}
