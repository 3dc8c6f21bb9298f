use connect::{window, Board, Cell, Direction, Player};
use rand::seq::SliceRandom;
use rand::Rng;

/// Why a column was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Blocks a line the opponent would complete with their next piece.
    Defense,
    /// Completes a line of our own.
    Offense,
    /// Nothing urgent on the board, any legal column will do.
    Random,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub column: usize,
    pub strategy: Strategy,
}

/// The directions in which a line is followed from one of its pieces.
///
/// Straight down is missing since a cell below a piece is never empty.
const SEARCH_DIRECTIONS: [Direction; 7] = [
    Direction::Right,
    Direction::Left,
    Direction::Up,
    Direction::UpRight,
    Direction::UpLeft,
    Direction::DownRight,
    Direction::DownLeft,
];

/// Picks the column to play for `me`: block the opponent if they are about
/// to win, otherwise win if possible, otherwise a random legal column.
///
/// Returns `None` only if the board is full.
pub fn select_move<R: Rng + ?Sized>(board: &Board, me: Player, rng: &mut R) -> Option<Selection> {
    if let Some(column) = completing_column(board, me.opponent()) {
        return Some(Selection {
            column,
            strategy: Strategy::Defense,
        });
    }
    if let Some(column) = completing_column(board, me) {
        return Some(Selection {
            column,
            strategy: Strategy::Offense,
        });
    }
    board
        .legal_columns()
        .choose(rng)
        .map(|&column| Selection {
            column,
            strategy: Strategy::Random,
        })
}

/// A column where dropping a piece of `player` completes four in a row.
///
/// Rows are scanned from the top down and columns from left to right,
/// and the first line found wins. A line counts only if its empty cell is
/// the one a piece dropped into that column would land on.
pub fn completing_column(board: &Board, player: Player) -> Option<usize> {
    for row in (0..board.size()).rev() {
        for column in 0..board.size() {
            if board.cell_at(row, column) != player.cell() {
                continue;
            }
            for direction in SEARCH_DIRECTIONS {
                if let Some(target) = completing_cell(board, row, column, player, direction) {
                    return Some(target);
                }
            }
        }
    }
    None
}

// The window of four starting at (row, column) must hold three pieces of
// `player` and one empty cell that is reachable right now.
fn completing_cell(
    board: &Board,
    row: usize,
    column: usize,
    player: Player,
    direction: Direction,
) -> Option<usize> {
    let mut gap = None;
    for (r, c) in window(board, row, column, direction)? {
        match board.cell_at(r, c) {
            Cell::Empty if gap.is_none() => gap = Some((r, c)),
            cell if cell == player.cell() => {}
            _ => return None,
        }
    }
    let (gap_row, gap_column) = gap?;
    (board.landing_row(gap_column) == Some(gap_row)).then_some(gap_column)
}
