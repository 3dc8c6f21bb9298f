/// The error type for dropping a piece, both on a bare [`Board`](crate::Board)
/// and through a [`Session`](crate::Session).
///
/// An illegal move never changes the board, so the caller can simply ask for
/// another column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    ColumnOutOfRange { column: usize, size: usize },
    ColumnFull { column: usize },
    GameOver,
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::ColumnOutOfRange { column, size } => write!(
                f,
                "Column {} does not exist, the board only has columns 0 to {}",
                column,
                size - 1
            ),
            IllegalMove::ColumnFull { column } => write!(f, "Column {} is already full", column),
            IllegalMove::GameOver => write!(f, "The game is already over"),
        }
    }
}
