use std::io::Write;

use connect::{visualize_board, winning_run, Board, IllegalMove, Move, Outcome, Player};

/// Shows the game as it goes.
pub trait Spectator {
    fn game_started(&mut self, board: &Board, first_mover: Player) -> anyhow::Result<()>;

    /// `board` already contains the move.
    fn move_played(&mut self, board: &Board, played: Move) -> anyhow::Result<()>;

    fn illegal_move(&mut self, player: Player, err: &IllegalMove) -> anyhow::Result<()>;

    fn game_over(&mut self, board: &Board, outcome: Outcome) -> anyhow::Result<()>;
}

/// Prints the board after every move.
pub struct ConsoleSpectator<W> {
    out: W,
}

impl<W: Write> ConsoleSpectator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Spectator for ConsoleSpectator<W> {
    fn game_started(&mut self, board: &Board, first_mover: Player) -> anyhow::Result<()> {
        writeln!(
            self.out,
            "Playing on a {}x{} board. The first player is: {}",
            board.size(),
            board.size(),
            first_mover
        )?;
        writeln!(self.out, "{}", visualize_board(board, &[]))?;
        Ok(())
    }

    fn move_played(&mut self, board: &Board, played: Move) -> anyhow::Result<()> {
        writeln!(self.out, "{} played column {}", played.player, played.column)?;
        writeln!(self.out, "{}", visualize_board(board, &[]))?;
        Ok(())
    }

    fn illegal_move(&mut self, player: Player, err: &IllegalMove) -> anyhow::Result<()> {
        writeln!(self.out, "Illegal move by {}: {}", player, err)?;
        Ok(())
    }

    fn game_over(&mut self, board: &Board, outcome: Outcome) -> anyhow::Result<()> {
        if let Outcome::Winner(player) = outcome {
            if let Some(run) = winning_run(board, player) {
                writeln!(self.out, "{}", visualize_board(board, &run))?;
            }
        }
        writeln!(self.out, "{}.", outcome)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announces_the_winner_and_marks_the_line() {
        let mut board = Board::new(6);
        for column in 0..4 {
            board.drop_piece(column, Player::Computer).unwrap();
        }
        let mut spectator = ConsoleSpectator::new(Vec::new());
        spectator
            .game_over(&board, Outcome::Winner(Player::Computer))
            .unwrap();
        let text = String::from_utf8(spectator.into_inner()).unwrap();
        assert!(text.contains("  0 │  #  #  #  #  ·  · │"));
        assert!(text.ends_with("AI wins.\n"));
    }

    #[test]
    fn announces_a_draw() {
        let mut spectator = ConsoleSpectator::new(Vec::new());
        spectator.game_over(&Board::new(6), Outcome::Draw).unwrap();
        let text = String::from_utf8(spectator.into_inner()).unwrap();
        assert_eq!(text, "Neither wins.\n");
    }

    #[test]
    fn reports_moves() {
        let mut board = Board::new(7);
        let row = board.drop_piece(5, Player::Human).unwrap();
        let mut spectator = ConsoleSpectator::new(Vec::new());
        spectator.game_started(&Board::new(7), Player::Human).unwrap();
        spectator
            .move_played(
                &board,
                Move {
                    player: Player::Human,
                    column: 5,
                    row,
                },
            )
            .unwrap();
        spectator
            .illegal_move(Player::Computer, &IllegalMove::ColumnFull { column: 5 })
            .unwrap();
        let text = String::from_utf8(spectator.into_inner()).unwrap();
        assert!(text.starts_with("Playing on a 7x7 board. The first player is: Human\n"));
        assert!(text.contains("Human played column 5\n"));
        assert!(text.contains("  0 │  ·  ·  ·  ·  ·  X  · │"));
        assert!(text.ends_with("Illegal move by AI: Column 5 is already full\n"));
    }
}
