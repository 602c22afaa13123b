/// Single coordinate axis used for board size and positions.
pub type Coord = u16;

/// Count type used for mine quotas and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Up/down/left/right, the only directions a reveal chain expands through.
const ORTHOGONAL_DISPLACEMENTS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// The full 8-neighborhood, used for adjacent-mine counting.
const ALL_DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    table: &'static [(isize, isize)],
    index: usize,
}

impl NeighborIter {
    /// The ≤4 orthogonally adjacent in-bounds coordinates.
    pub(crate) fn orthogonal(center: Coord2, bounds: Coord2) -> Self {
        Self::new(center, bounds, &ORTHOGONAL_DISPLACEMENTS)
    }

    /// The ≤8 orthogonally and diagonally adjacent in-bounds coordinates.
    pub(crate) fn all(center: Coord2, bounds: Coord2) -> Self {
        Self::new(center, bounds, &ALL_DISPLACEMENTS)
    }

    fn new(center: Coord2, bounds: Coord2, table: &'static [(isize, isize)]) -> Self {
        Self {
            center,
            bounds,
            table,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.index >= self.table.len() {
                return None;
            }

            let next_item = apply_delta(self.center, self.table[self.index], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_cell_has_two_orthogonal_and_three_total_neighbors() {
        let orthogonal: Vec<_> = NeighborIter::orthogonal((0, 0), (3, 3)).collect();
        let all: Vec<_> = NeighborIter::all((0, 0), (3, 3)).collect();

        assert_eq!(orthogonal, vec![(1, 0), (0, 1)]);
        assert_eq!(all.len(), 3);
        assert!(all.contains(&(1, 1)));
    }

    #[test]
    fn center_cell_has_four_orthogonal_and_eight_total_neighbors() {
        assert_eq!(NeighborIter::orthogonal((1, 1), (3, 3)).count(), 4);
        assert_eq!(NeighborIter::all((1, 1), (3, 3)).count(), 8);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(NeighborIter::all((0, 0), (1, 1)).count(), 0);
    }
}
