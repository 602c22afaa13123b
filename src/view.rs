use std::fmt::Write;

use crate::{CellState, Coord, Game};

/// Read-only per-cell view handed to renderers. Coordinates are 0-indexed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellView {
    pub row: Coord,
    pub col: Coord,
    pub symbol: char,
}

/// Display symbol for a cell state. The engine itself never touches these;
/// characters exist only at the rendering boundary.
pub const fn symbol(state: CellState) -> char {
    match state {
        CellState::Hidden => '*',
        CellState::Flagged => 'F',
        CellState::Revealed(0) => '_',
        CellState::Revealed(count) => (b'0' + count) as char,
        CellState::Mine => 'B',
    }
}

/// All cells in row-major order with their display symbols.
pub fn cell_views(game: &Game) -> impl Iterator<Item = CellView> + '_ {
    game.grid().iter_cells().map(|((row, col), cell)| CellView {
        row,
        col,
        symbol: symbol(cell.state()),
    })
}

/// Renders the board as text: a 1-based column header, a blank line, then
/// one labelled line per row.
pub fn render(game: &Game) -> String {
    let size = game.grid().size();
    let mut output = String::new();

    output.push_str("    ");
    for col in 1..=size {
        if col > 1 {
            output.push(' ');
        }
        let _ = write!(output, "{}", col);
    }
    output.push_str("\n\n");

    for row in 0..size {
        let _ = write!(output, "{}   ", row + 1);
        for col in 0..size {
            output.push(symbol(game.grid().state_at((row, col))));
            output.push(' ');
        }
        output.push('\n');
    }

    output
}
