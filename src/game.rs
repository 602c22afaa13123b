use serde::{Deserialize, Serialize};

use crate::{CellState, Coord, Coord2, GameError, Grid, Result, flood_reveal};

/// Outcome flag of a game session. `Won` and `Lost` are terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// What the player asked to do with a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayerAction {
    Reveal,
    Flag,
}

/// What an accepted move did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Flagged,
    Unflagged,
    Revealed,
    Won,
    Lost,
}

/// A game session: one grid plus the outcome flag, driven by player moves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    grid: Grid,
    status: GameStatus,
}

impl Game {
    /// Starts a fresh session on a randomly seeded `size × size` board.
    pub fn new(size: Coord) -> Self {
        Self::from_grid(Grid::new(size))
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            status: GameStatus::default(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Applies one player move. Rejected moves leave the grid untouched.
    pub fn apply_move(&mut self, coords: Coord2, action: PlayerAction) -> Result<MoveOutcome> {
        if self.status.is_finished() {
            return Err(GameError::MoveAfterGameOver);
        }

        let coords = self.grid.validate_coords(coords)?;

        match action {
            PlayerAction::Flag => self.toggle_flag(coords),
            PlayerAction::Reveal => self.reveal(coords),
        }
    }

    fn toggle_flag(&mut self, coords: Coord2) -> Result<MoveOutcome> {
        match self.grid.state_at(coords) {
            CellState::Hidden => {
                self.grid.set_state(coords, CellState::Flagged);
                Ok(MoveOutcome::Flagged)
            }
            CellState::Flagged => {
                self.grid.set_state(coords, CellState::Hidden);
                Ok(MoveOutcome::Unflagged)
            }
            CellState::Revealed(_) | CellState::Mine => Err(GameError::InvalidFlagTarget),
        }
    }

    fn reveal(&mut self, coords: Coord2) -> Result<MoveOutcome> {
        match self.grid.state_at(coords) {
            CellState::Revealed(_) | CellState::Mine => return Err(GameError::AlreadyRevealed),
            CellState::Flagged => return Err(GameError::RevealFlagged),
            CellState::Hidden => {}
        }

        if self.grid.has_mine_at(coords) {
            log::debug!("mine hit at {:?}, game lost", coords);
            self.status = GameStatus::Lost;
            self.grid.force_reveal_all();
            return Ok(MoveOutcome::Lost);
        }

        flood_reveal(&mut self.grid, coords);

        if self.is_won() {
            log::debug!("last safe cell revealed, game won");
            self.status = GameStatus::Won;
            self.grid.force_reveal_all();
            Ok(MoveOutcome::Won)
        } else {
            Ok(MoveOutcome::Revealed)
        }
    }

    /// The game is won once every safe cell is revealed: a safe cell left
    /// hidden or sitting under a flag blocks the win. Flags on mines are
    /// irrelevant, and a revealed mine has already ended the game as a loss.
    pub(crate) fn is_won(&self) -> bool {
        self.grid.iter_cells().all(|(_, cell)| {
            cell.is_mine() || matches!(cell.state(), CellState::Revealed(_))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn game(size: Coord, mines: &[Coord2]) -> Game {
        Game::from_grid(Grid::from_mine_coords(size, mines).unwrap())
    }

    #[test]
    fn revealing_a_mine_loses_and_force_reveals_the_board() {
        let mut game = game(3, &[(0, 0)]);

        let outcome = game.apply_move((0, 0), PlayerAction::Reveal).unwrap();

        assert_eq!(outcome, MoveOutcome::Lost);
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.grid().state_at((0, 0)), CellState::Mine);
        assert!(game.grid().iter_cells().all(|(_, cell)| cell.state().is_revealed()));
    }

    #[test]
    fn no_moves_are_accepted_after_the_game_ends() {
        let mut game = game(3, &[(0, 0)]);
        game.apply_move((0, 0), PlayerAction::Reveal).unwrap();

        let before = game.clone();
        assert_eq!(
            game.apply_move((1, 1), PlayerAction::Reveal).unwrap_err(),
            GameError::MoveAfterGameOver
        );
        assert_eq!(
            game.apply_move((1, 1), PlayerAction::Flag).unwrap_err(),
            GameError::MoveAfterGameOver
        );
        assert_eq!(game, before);
    }

    #[test]
    fn out_of_bounds_and_revealed_targets_are_rejected_without_mutation() {
        let mut game = game(3, &[(0, 0)]);
        // a counted cell, so the reveal does not flood into a win
        game.apply_move((1, 1), PlayerAction::Reveal).unwrap();

        let before = game.clone();
        assert_eq!(
            game.apply_move((3, 0), PlayerAction::Reveal).unwrap_err(),
            GameError::OutOfBounds
        );
        assert_eq!(
            game.apply_move((1, 1), PlayerAction::Reveal).unwrap_err(),
            GameError::AlreadyRevealed
        );
        assert_eq!(game, before);
    }

    #[test]
    fn flag_toggles_and_is_rejected_on_revealed_cells() {
        let mut game = game(3, &[(0, 0)]);

        assert_eq!(game.apply_move((0, 0), PlayerAction::Flag).unwrap(), MoveOutcome::Flagged);
        assert_eq!(game.grid().state_at((0, 0)), CellState::Flagged);
        assert_eq!(game.apply_move((0, 0), PlayerAction::Flag).unwrap(), MoveOutcome::Unflagged);
        assert_eq!(game.grid().state_at((0, 0)), CellState::Hidden);

        game.apply_move((1, 1), PlayerAction::Reveal).unwrap();
        assert_eq!(
            game.apply_move((1, 1), PlayerAction::Flag).unwrap_err(),
            GameError::InvalidFlagTarget
        );
    }

    #[test]
    fn revealing_a_flagged_cell_requires_unflagging_first() {
        let mut game = game(3, &[(0, 0)]);
        game.apply_move((2, 2), PlayerAction::Flag).unwrap();

        assert_eq!(
            game.apply_move((2, 2), PlayerAction::Reveal).unwrap_err(),
            GameError::RevealFlagged
        );
        assert_eq!(game.grid().state_at((2, 2)), CellState::Flagged);
    }

    #[test]
    fn mine_free_board_wins_on_the_first_reveal() {
        let mut game = game(3, &[]);

        let outcome = game.apply_move((1, 1), PlayerAction::Reveal).unwrap();

        assert_eq!(outcome, MoveOutcome::Won);
        assert_eq!(game.status(), GameStatus::Won);
        assert!(
            game.grid()
                .iter_cells()
                .all(|(_, cell)| cell.state() == CellState::Revealed(0))
        );
    }

    #[test]
    fn win_lands_exactly_on_the_last_safe_reveal() {
        // 9x9 with the quota of 8 mines packed into one row so most of the
        // board stays connected
        let mines: Vec<Coord2> = (0..8).map(|col| (4, col)).collect();
        let mut game = game(9, &mines);

        let safe: Vec<Coord2> = game
            .grid()
            .iter_cells()
            .filter(|(_, cell)| !cell.is_mine())
            .map(|(coords, _)| coords)
            .collect();

        for &coords in &safe {
            if game.grid().state_at(coords) != CellState::Hidden {
                continue;
            }
            assert_eq!(game.status(), GameStatus::InProgress);
            game.apply_move(coords, PlayerAction::Reveal).unwrap();
        }

        assert_eq!(game.status(), GameStatus::Won);
        // mines were never revealed during play; the win pass displays them
        assert_eq!(game.grid().state_at((4, 0)), CellState::Mine);
    }

    #[test]
    fn a_flag_on_a_safe_cell_blocks_the_win_until_removed() {
        let mut game = game(2, &[]);
        game.apply_move((0, 0), PlayerAction::Flag).unwrap();

        // reveals flood around the flag but cannot finish the game
        game.apply_move((1, 1), PlayerAction::Reveal).unwrap();
        assert_eq!(game.status(), GameStatus::InProgress);

        game.apply_move((0, 0), PlayerAction::Flag).unwrap();
        let outcome = game.apply_move((0, 0), PlayerAction::Reveal).unwrap();

        assert_eq!(outcome, MoveOutcome::Won);
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn flags_on_mines_do_not_block_the_win() {
        let mut game = game(2, &[(0, 0)]);
        game.apply_move((0, 0), PlayerAction::Flag).unwrap();

        game.apply_move((0, 1), PlayerAction::Reveal).unwrap();
        game.apply_move((1, 0), PlayerAction::Reveal).unwrap();
        let outcome = game.apply_move((1, 1), PlayerAction::Reveal).unwrap();

        assert_eq!(outcome, MoveOutcome::Won);
    }
}
