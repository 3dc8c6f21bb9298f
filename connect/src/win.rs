use crate::{Board, Player};

/// How many pieces in a row win the game.
pub const WIN_LENGTH: usize = 4;

/// A direction on the board, as seen from the player: up is away from the floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
    Up,
    UpRight,
    UpLeft,
    DownRight,
    DownLeft,
}

impl Direction {
    /// Every run of four can be found by starting at its lowest (for rows,
    /// leftmost) cell and walking in one of these directions.
    pub const WIN_AXES: [Direction; 4] = [
        Direction::Right,
        Direction::Up,
        Direction::UpRight,
        Direction::UpLeft,
    ];

    /// `(row, column)` step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Up => (1, 0),
            Direction::UpRight => (1, 1),
            Direction::UpLeft => (1, -1),
            Direction::DownRight => (-1, 1),
            Direction::DownLeft => (-1, -1),
        }
    }
}

/// The final result of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Neither wins"),
        }
    }
}

/// The [`WIN_LENGTH`] coordinates starting at `(row, column)` and walking in
/// `direction`, or `None` if they don't all fit on the board.
pub fn window(
    board: &Board,
    row: usize,
    column: usize,
    direction: Direction,
) -> Option<[(usize, usize); WIN_LENGTH]> {
    let (d_row, d_column) = direction.delta();
    let mut cells = [(0, 0); WIN_LENGTH];
    for (step, cell) in cells.iter_mut().enumerate() {
        let r = row as isize + d_row * step as isize;
        let c = column as isize + d_column * step as isize;
        board.checked_cell(r, c)?;
        *cell = (r as usize, c as usize);
    }
    Some(cells)
}

/// Is there a run of four pieces of `player` starting at `(row, column)`?
pub fn is_run_from(
    board: &Board,
    row: usize,
    column: usize,
    player: Player,
    direction: Direction,
) -> bool {
    window(board, row, column, direction).map_or(false, |cells| {
        cells
            .iter()
            .all(|&(r, c)| board.cell_at(r, c) == player.cell())
    })
}

/// The first run of four pieces of `player` found on the board.
pub fn winning_run(board: &Board, player: Player) -> Option<[(usize, usize); WIN_LENGTH]> {
    for row in 0..board.size() {
        for column in 0..board.size() {
            if board.cell_at(row, column) != player.cell() {
                continue;
            }
            for direction in Direction::WIN_AXES {
                if is_run_from(board, row, column, player, direction) {
                    return window(board, row, column, direction);
                }
            }
        }
    }
    None
}

pub fn has_four_in_a_row(board: &Board, player: Player) -> bool {
    winning_run(board, player).is_some()
}

/// Decides whether the game is over after `mover` made the `moves_played`-th move.
///
/// A win takes precedence over a full board.
pub fn evaluate_move(board: &Board, mover: Player, moves_played: usize) -> Option<Outcome> {
    if has_four_in_a_row(board, mover) {
        Some(Outcome::Winner(mover))
    } else if moves_played == board.size() * board.size() {
        Some(Outcome::Draw)
    } else {
        None
    }
}
