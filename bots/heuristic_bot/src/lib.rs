mod selector;
pub use selector::*;

use anyhow::{bail, Context};
use connect::{Outcome, Player};
use connect_bot_utils::{Bot, ShadowBoard};
use rand::rngs::StdRng;
use tracing::{debug, trace};

/// The computer opponent.
///
/// It decides on its own [`ShadowBoard`], which only learns about moves
/// through [`Bot::move_played()`].
pub struct HeuristicBot {
    rng: StdRng,
    me: Player,
    shadow: Option<ShadowBoard>,
}

impl HeuristicBot {
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng,
            me: Player::Computer,
            shadow: None,
        }
    }

    /// `None` until the first game starts.
    pub fn shadow_board(&self) -> Option<&ShadowBoard> {
        self.shadow.as_ref()
    }
}

impl Bot for HeuristicBot {
    fn name(&self) -> &str {
        "Heuristic AI"
    }

    fn new_game(&mut self, size: usize, me: Player) {
        self.me = me;
        self.shadow = Some(ShadowBoard::new(size));
    }

    fn play_turn(&mut self, opponent_last_move: Option<usize>) -> anyhow::Result<usize> {
        let shadow = self
            .shadow
            .as_ref()
            .context("Asked for a move before the game started")?;

        let seen = shadow
            .last_move()
            .filter(|&(_, player)| player != self.me)
            .map(|(column, _)| column);
        if seen != opponent_last_move {
            bail!(
                "Told that the opponent last played {:?}, but the shadow board has {:?}",
                opponent_last_move,
                seen
            );
        }

        let selection =
            select_move(shadow.board(), self.me, &mut self.rng).context("No legal column left")?;
        debug!(column = selection.column, strategy = ?selection.strategy, "Selected move");
        Ok(selection.column)
    }

    fn move_played(&mut self, column: usize, player: Player) -> anyhow::Result<()> {
        let shadow = self
            .shadow
            .as_mut()
            .context("Told about a move before the game started")?;
        let row = shadow.record(column, player)?;
        trace!(column, row, %player, "Updated shadow board");
        Ok(())
    }

    fn game_over(&mut self, outcome: Outcome) {
        debug!(%outcome, "Game over");
    }
}

#[cfg(test)]
mod tests {
    use connect::{Board, Cell};
    use rand::SeedableRng;

    use super::*;

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

    fn bot() -> HeuristicBot {
        HeuristicBot::new(StdRng::seed_from_u64(42))
    }

    #[test]
    fn needs_a_game_to_play() {
        let mut bot = bot();
        assert!(bot.play_turn(None).is_err());
        assert!(bot.move_played(0, Player::Human).is_err());
    }

    #[test]
    fn opening_move_is_legal() {
        let mut bot = bot();
        bot.new_game(9, Player::Computer);
        let column = bot.play_turn(None).unwrap();
        assert!(column < 9);
    }

    #[test]
    fn blocks_after_being_told_the_moves() {
        let mut bot = bot();
        bot.new_game(6, Player::Computer);
        for (column, player) in [
            (0, Player::Human),
            (5, Player::Computer),
            (1, Player::Human),
            (5, Player::Computer),
            (2, Player::Human),
        ] {
            bot.move_played(column, player).unwrap();
        }
        assert_eq!(bot.play_turn(Some(2)).unwrap(), 3);
    }

    #[test]
    fn own_choice_is_not_recorded_until_notified() {
        let mut bot = bot();
        bot.new_game(7, Player::Computer);
        bot.move_played(3, Player::Human).unwrap();
        let column = bot.play_turn(Some(3)).unwrap();
        assert_eq!(bot.shadow_board().unwrap().moves_seen(), 1);

        bot.move_played(column, Player::Computer).unwrap();
        let shadow = bot.shadow_board().unwrap();
        assert_eq!(shadow.moves_seen(), 2);
        let row = if column == 3 { 1 } else { 0 };
        assert_eq!(shadow.board().cell_at(row, column), Cell::Computer);
    }

    #[test]
    fn detects_a_missed_notification() {
        let mut bot = bot();
        bot.new_game(6, Player::Computer);
        bot.move_played(1, Player::Human).unwrap();
        assert!(bot.play_turn(Some(4)).is_err());
        assert!(bot.play_turn(None).is_err());
        assert!(bot.play_turn(Some(1)).is_ok());
    }

    #[test]
    fn plays_either_side() {
        let mut bot = bot();
        bot.new_game(6, Player::Human);
        for (column, player) in [
            (0, Player::Computer),
            (4, Player::Human),
            (0, Player::Computer),
            (4, Player::Human),
            (0, Player::Computer),
        ] {
            bot.move_played(column, player).unwrap();
        }
        assert_eq!(bot.play_turn(Some(0)).unwrap(), 0);
    }
}
