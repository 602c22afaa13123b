use std::collections::VecDeque;

use crate::{CellState, Coord2, Grid};

/// Expands a reveal from a safe seed cell across its connected zero-count
/// region.
///
/// Walks an explicit worklist instead of recursing; the grid's own revealed
/// state doubles as the visited set, so re-enqueued coordinates are no-ops.
/// Expansion is 4-connected only, which means boundary cells with a non-zero
/// count are revealed but never expanded, flagged cells are skipped
/// entirely, and mines are unreachable (a zero-count cell has no mine in its
/// whole 8-neighborhood).
///
/// The seed must not be a mine; hitting a mine is the game's loss
/// transition, not a reveal. A seed that is already revealed is a no-op.
pub fn flood_reveal(grid: &mut Grid, seed: Coord2) {
    debug_assert!(!grid.has_mine_at(seed));

    if grid.state_at(seed) != CellState::Hidden {
        return;
    }

    grid.reveal_one(seed);
    log::debug!("revealed seed {:?}, mine count: {}", seed, grid.mine_count(seed));

    if grid.mine_count(seed) > 0 {
        return;
    }

    let mut to_visit: VecDeque<Coord2> = grid.near_neighbors(seed).collect();

    while let Some(coords) = to_visit.pop_front() {
        if grid.state_at(coords) != CellState::Hidden {
            continue;
        }

        grid.reveal_one(coords);
        log::trace!("flood revealed {:?}, mine count: {}", coords, grid.mine_count(coords));

        if grid.mine_count(coords) == 0 {
            to_visit.extend(
                grid.near_neighbors(coords)
                    .filter(|&pos| grid.state_at(pos) == CellState::Hidden),
            );
        }
    }
}
