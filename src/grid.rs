use ndarray::Array2;
use rand::{Rng, RngExt};
use serde::{Deserialize, Serialize};

use crate::{Cell, CellCount, CellState, Coord, Coord2, GameError, NeighborIter, Result, ToNdIndex, mult};

/// Mine quota for a square board: one mine per ten cells, rounded down.
pub const fn mine_quota(size: Coord) -> CellCount {
    mult(size, size) / 10
}

/// Square board of cells. Owns all cell state and the mine bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
    size: Coord,
    mines: CellCount,
}

impl Grid {
    /// Allocates a `size × size` board and seeds `mine_quota(size)` mines.
    pub fn new(size: Coord) -> Self {
        Self::with_rng(size, &mut rand::rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(size: Coord, rng: &mut R) -> Self {
        let size = size.max(1);
        let mut grid = Self {
            cells: Array2::default((size.into(), size.into())),
            size,
            mines: 0,
        };
        grid.seed(rng);
        grid
    }

    /// Builds a board with mines at exactly the given coordinates.
    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let size = size.max(1);
        let mut cells: Array2<Cell> = Array2::default((size.into(), size.into()));

        for &coords in mine_coords {
            if coords.0 >= size || coords.1 >= size {
                return Err(GameError::OutOfBounds);
            }
            cells[coords.to_nd_index()].is_mine = true;
        }

        let mines = cells.iter().filter(|cell| cell.is_mine).count() as CellCount;
        Ok(Self { cells, size, mines })
    }

    /// Repeatedly draws uniform coordinates until the quota of distinct mined
    /// cells is reached. A draw that lands on an already-mined cell is wasted
    /// and does not count toward the quota.
    fn seed<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let quota = mine_quota(self.size);
        let mut placed: CellCount = 0;

        while placed < quota {
            let coords = (
                rng.random_range(0..self.size),
                rng.random_range(0..self.size),
            );
            let cell = &mut self.cells[coords.to_nd_index()];
            if !cell.is_mine {
                cell.is_mine = true;
                placed += 1;
            }
        }

        self.mines = placed;
        log::debug!("seeded {} mines on a {}x{} board", placed, self.size, self.size);
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn total_mines(&self) -> CellCount {
        self.mines
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mines
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.size && coords.1 < self.size {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn cell(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    pub fn has_mine_at(&self, coords: Coord2) -> bool {
        self.cells[coords.to_nd_index()].is_mine
    }

    pub fn state_at(&self, coords: Coord2) -> CellState {
        self.cells[coords.to_nd_index()].state
    }

    pub(crate) fn set_state(&mut self, coords: Coord2, state: CellState) {
        self.cells[coords.to_nd_index()].state = state;
    }

    /// The ≤4 orthogonally adjacent in-bounds coordinates. Only the reveal
    /// chain expands through these.
    pub fn near_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::orthogonal(coords, (self.size, self.size))
    }

    /// The ≤8 adjacent in-bounds coordinates, diagonals included.
    pub fn all_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::all(coords, (self.size, self.size))
    }

    /// Number of mines in the cell's 8-neighborhood.
    pub fn mine_count(&self, coords: Coord2) -> u8 {
        self.all_neighbors(coords)
            .filter(|&pos| self.has_mine_at(pos))
            .count() as u8
    }

    /// Marks a single safe cell revealed with its adjacent-mine count.
    /// Mine cells never go through this path; losing is a distinct
    /// transition owned by the game.
    pub(crate) fn reveal_one(&mut self, coords: Coord2) {
        debug_assert!(!self.has_mine_at(coords));
        let count = self.mine_count(coords);
        self.cells[coords.to_nd_index()].state = CellState::Revealed(count);
    }

    /// Terminal display pass after a win or a loss: every mine is shown as
    /// such, every safe cell shows its count.
    pub(crate) fn force_reveal_all(&mut self) {
        for row in 0..self.size {
            for col in 0..self.size {
                let coords = (row, col);
                let state = if self.has_mine_at(coords) {
                    CellState::Mine
                } else {
                    CellState::Revealed(self.mine_count(coords))
                };
                self.set_state(coords, state);
            }
        }
    }

    /// Raw dimensions of the backing array, for cross-checking snapshots
    /// against the declared size.
    pub(crate) fn shape(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// All cells with their coordinates, row-major.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn seeding_places_exactly_the_quota_of_distinct_mines() {
        for (size, expected) in [(1, 0), (3, 0), (4, 1), (9, 8), (13, 16)] {
            let grid = Grid::with_rng(size, &mut SmallRng::seed_from_u64(42));
            let actual = grid.iter_cells().filter(|(_, cell)| cell.is_mine()).count();

            assert_eq!(actual as CellCount, expected);
            assert_eq!(grid.total_mines(), expected);
            assert_eq!(mine_quota(size), expected);
        }
    }

    #[test]
    fn mine_count_handles_corners_edges_and_center() {
        // mines in the top-left corner region of a 4x4 board
        let grid = Grid::from_mine_coords(4, &[(0, 0), (0, 1), (1, 0)]).unwrap();

        assert_eq!(grid.mine_count((1, 1)), 3);
        assert_eq!(grid.mine_count((0, 0)), 2);
        assert_eq!(grid.mine_count((2, 0)), 1);
        assert_eq!(grid.mine_count((0, 2)), 1);
        assert_eq!(grid.mine_count((2, 2)), 0);
        assert_eq!(grid.mine_count((3, 3)), 0);
    }

    #[test]
    fn from_mine_coords_rejects_out_of_bounds_and_dedupes() {
        assert_eq!(
            Grid::from_mine_coords(3, &[(3, 0)]).unwrap_err(),
            GameError::OutOfBounds
        );

        let grid = Grid::from_mine_coords(3, &[(1, 1), (1, 1)]).unwrap();
        assert_eq!(grid.total_mines(), 1);
    }

    #[test]
    fn reveal_one_records_the_adjacent_count() {
        let mut grid = Grid::from_mine_coords(3, &[(0, 0)]).unwrap();

        grid.reveal_one((1, 1));
        grid.reveal_one((2, 2));

        assert_eq!(grid.state_at((1, 1)), CellState::Revealed(1));
        assert_eq!(grid.state_at((2, 2)), CellState::Revealed(0));
    }

    #[test]
    fn force_reveal_all_leaves_no_hidden_or_flagged_cells() {
        let mut grid = Grid::from_mine_coords(3, &[(0, 0)]).unwrap();
        grid.set_state((2, 2), CellState::Flagged);

        grid.force_reveal_all();

        assert_eq!(grid.state_at((0, 0)), CellState::Mine);
        assert_eq!(grid.state_at((1, 1)), CellState::Revealed(1));
        assert!(grid.iter_cells().all(|(_, cell)| cell.state().is_revealed()));
    }
}
