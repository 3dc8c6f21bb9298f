mod shadow_board;
pub use shadow_board::*;

use connect::{Outcome, Player};

/// A player taking part in a game run by the judge.
///
/// The judge calls these methods strictly in turn: [`Self::new_game()`] once,
/// then [`Self::play_turn()`] whenever it is this player's move,
/// [`Self::move_played()`] after every accepted move of either side, and
/// finally [`Self::game_over()`] exactly once.
pub trait Bot {
    fn name(&self) -> &str;

    /// `me` is the side this bot plays on a `size` x `size` board.
    fn new_game(&mut self, size: usize, me: Player);

    /// Asks for the column to drop the next piece into.
    ///
    /// `opponent_last_move` is `None` when this bot opens the game. If the
    /// column turns out to be illegal, this is called again for the same turn.
    fn play_turn(&mut self, opponent_last_move: Option<usize>) -> anyhow::Result<usize>;

    /// Informs the bot about an accepted move, including its own.
    fn move_played(&mut self, _column: usize, _player: Player) -> anyhow::Result<()> {
        Ok(())
    }

    fn game_over(&mut self, _outcome: Outcome) {}
}
