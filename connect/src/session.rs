use rand::Rng;

use crate::{evaluate_move, Board, IllegalMove, Outcome, Player, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Where a session stands between two moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnState {
    AwaitingFirstMove { mover: Player },
    AwaitingMove { mover: Player, opponent_last_move: usize },
    GameOver(Outcome),
}

/// A move accepted by a [`Session`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub player: Player,
    pub column: usize,
    /// The row the piece landed on.
    pub row: usize,
}

/// Summarizes the outcome of playing a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayedMove {
    pub played: Move,
    /// `Some` if this move ended the game.
    pub outcome: Option<Outcome>,
}

/// One game on the authoritative board.
///
/// The session only checks the rules; asking the players for their moves is
/// up to the caller, who feeds the chosen columns into [`Self::submit_move()`].
#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    state: TurnState,
    history: Vec<Move>,
}

impl Session {
    /// Panics if `size` is not between [`MIN_BOARD_SIZE`] and [`MAX_BOARD_SIZE`].
    pub fn new(size: usize, first_mover: Player) -> Self {
        assert!(
            (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size),
            "board size {} is not between {} and {}",
            size,
            MIN_BOARD_SIZE,
            MAX_BOARD_SIZE
        );
        Self {
            board: Board::new(size),
            state: TurnState::AwaitingFirstMove { mover: first_mover },
            history: Vec::new(),
        }
    }

    /// A session with a random board size and a random first mover.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let size = rng.gen_range(MIN_BOARD_SIZE..=MAX_BOARD_SIZE);
        let first_mover = if rng.gen::<bool>() {
            Player::Computer
        } else {
            Player::Human
        };
        Self::new(size, first_mover)
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// The accepted moves, in the order they were played.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn moves_played(&self) -> usize {
        self.history.len()
    }

    /// The player whose move is expected, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        match self.state {
            TurnState::AwaitingFirstMove { mover } | TurnState::AwaitingMove { mover, .. } => {
                Some(mover)
            }
            TurnState::GameOver(_) => None,
        }
    }

    /// The column the opponent of the player on turn has just played.
    pub fn opponent_last_move(&self) -> Option<usize> {
        match self.state {
            TurnState::AwaitingMove {
                opponent_last_move, ..
            } => Some(opponent_last_move),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            TurnState::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Plays `column` for the player on turn.
    ///
    /// Illegal moves are rejected before the board is touched, and the same
    /// player stays on turn.
    pub fn submit_move(&mut self, column: usize) -> Result<PlayedMove, IllegalMove> {
        let player = self.to_move().ok_or(IllegalMove::GameOver)?;
        let row = self.board.drop_piece(column, player)?;
        let played = Move {
            player,
            column,
            row,
        };
        self.history.push(played);

        let outcome = evaluate_move(&self.board, player, self.moves_played());
        self.state = match outcome {
            Some(outcome) => TurnState::GameOver(outcome),
            None => TurnState::AwaitingMove {
                mover: player.opponent(),
                opponent_last_move: column,
            },
        };
        Ok(PlayedMove { played, outcome })
    }
}
