use crate::{Board, Player, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Boards reached by alternating legal drops, possibly past the end of the game.
impl quickcheck::Arbitrary for Board {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let size = MIN_BOARD_SIZE + usize::arbitrary(g) % (MAX_BOARD_SIZE - MIN_BOARD_SIZE + 1);
        let mut board = Board::new(size);
        let num_moves = usize::arbitrary(g) % (size * size + 1);
        let mut player = Player::arbitrary(g);
        for _ in 0..num_moves {
            let legal_columns = board.legal_columns();
            let column = *g.choose(&legal_columns).unwrap();
            board.drop_piece(column, player).unwrap();
            player = player.opponent();
        }
        board
    }
}

impl quickcheck::Arbitrary for Player {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[Player::Human, Player::Computer]).unwrap()
    }
}

/// Builds a board from a picture, top row first: `X` is the human, `O` the
/// computer and `.` an empty cell.
pub fn board_from_rows(rows: &[&str]) -> Board {
    let mut board = Board::new(rows.len());
    for row in rows.iter().rev() {
        for (column, symbol) in row.chars().enumerate() {
            let player = match symbol {
                'X' => Player::Human,
                'O' => Player::Computer,
                _ => continue,
            };
            board.drop_piece(column, player).unwrap();
        }
    }
    board
}

/// The board reflected left to right.
pub fn mirrored(board: &Board) -> Board {
    let size = board.size();
    let mut mirror = Board::new(size);
    for (row, cells) in board.rows().enumerate() {
        for (column, cell) in cells.iter().enumerate() {
            if let Some(player) = cell.owner() {
                assert_eq!(mirror.drop_piece(size - 1 - column, player), Ok(row));
            }
        }
    }
    mirror
}
