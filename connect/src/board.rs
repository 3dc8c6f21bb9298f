use crate::IllegalMove;

/// The smallest board a session is played on.
pub const MIN_BOARD_SIZE: usize = 6;
/// The largest board a session is played on.
pub const MAX_BOARD_SIZE: usize = 12;

/// One of the two sides of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// The cell state of a piece dropped by this player.
    pub fn cell(self) -> Cell {
        match self {
            Player::Human => Cell::Human,
            Player::Computer => Cell::Computer,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Human => write!(f, "Human"),
            Player::Computer => write!(f, "AI"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Human,
    Computer,
}

impl Cell {
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Human => Some(Player::Human),
            Cell::Computer => Some(Player::Computer),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A square grid of cells, indexed by `(row, column)`.
///
/// Row 0 is the floor: pieces dropped into a column land on the lowest
/// empty row. Since [`Self::drop_piece()`] is the only way to place a piece,
/// a cell above an empty cell is always empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major, starting with the bottom row.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty `size` x `size` board.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "a board needs at least one column");
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Panics if the coordinate is outside of the board.
    pub fn cell_at(&self, row: usize, column: usize) -> Cell {
        self.cells[self.index(row, column)]
    }

    /// Like [`Self::cell_at()`], but returns `None` for coordinates outside of the board.
    pub fn checked_cell(&self, row: isize, column: isize) -> Option<Cell> {
        let row = usize::try_from(row).ok().filter(|&r| r < self.size)?;
        let column = usize::try_from(column).ok().filter(|&c| c < self.size)?;
        Some(self.cell_at(row, column))
    }

    /// The row a piece dropped into `column` would land on, or `None` if the
    /// column is full.
    ///
    /// Panics if the column is outside of the board.
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        (0..self.size).find(|&row| self.cell_at(row, column).is_empty())
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        self.landing_row(column).is_none()
    }

    /// The columns that can still take a piece, in ascending order.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.size)
            .filter(|&column| !self.is_column_full(column))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        // The top row fills last.
        (0..self.size).all(|column| !self.cell_at(self.size - 1, column).is_empty())
    }

    /// Drops a piece of `player` into `column` and returns the row it landed on.
    ///
    /// The board is left untouched if the move is illegal.
    pub fn drop_piece(&mut self, column: usize, player: Player) -> Result<usize, IllegalMove> {
        if column >= self.size {
            return Err(IllegalMove::ColumnOutOfRange {
                column,
                size: self.size,
            });
        }
        let row = self
            .landing_row(column)
            .ok_or(IllegalMove::ColumnFull { column })?;
        let idx = self.index(row, column);
        self.cells[idx] = player.cell();
        Ok(row)
    }

    /// Iterates over the rows, starting with the bottom row.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Cell]> + ExactSizeIterator {
        self.cells.chunks(self.size)
    }

    fn index(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.size && column < self.size,
            "cell ({}, {}) is outside of the {}x{} board",
            row,
            column,
            self.size,
            self.size
        );
        row * self.size + column
    }
}
