use anyhow::{bail, Context};
use connect::{Board, Player};

/// A bot's private copy of the board.
///
/// It is only ever updated from move notifications, so it knows exactly what
/// the bot has been told and nothing more. Notifications have to arrive in
/// play order: two moves in a row by the same player, or a move that is
/// illegal on this copy, mean the bot has lost track of the game.
#[derive(Clone, Debug)]
pub struct ShadowBoard {
    board: Board,
    last_move: Option<(usize, Player)>,
    moves_seen: usize,
}

impl ShadowBoard {
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            last_move: None,
            moves_seen: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The most recent move, as `(column, player)`.
    pub fn last_move(&self) -> Option<(usize, Player)> {
        self.last_move
    }

    pub fn moves_seen(&self) -> usize {
        self.moves_seen
    }

    /// Applies a notified move and returns the row the piece landed on.
    pub fn record(&mut self, column: usize, player: Player) -> anyhow::Result<usize> {
        if let Some((_, previous)) = self.last_move {
            if previous == player {
                bail!(
                    "Received two moves in a row by {} (move {})",
                    player,
                    self.moves_seen + 1
                );
            }
        }
        let row = self
            .board
            .drop_piece(column, player)
            .with_context(|| format!("Shadow board out of sync at move {}", self.moves_seen + 1))?;
        self.last_move = Some((column, player));
        self.moves_seen += 1;
        Ok(row)
    }
}
