use std::io::{BufRead, Write};

use anyhow::bail;
use connect::{Outcome, Player};
use connect_bot_utils::Bot;

/// A human typing column numbers on the console.
///
/// The board itself is shown by the [`Spectator`](crate::Spectator), this
/// only asks for the next column.
pub struct ConsoleHuman<R, W> {
    input: R,
    output: W,
    size: usize,
    me: Player,
    // A re-usable buffer for reading lines.
    buf: String,
}

impl<R: BufRead, W: Write> ConsoleHuman<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            size: 0,
            me: Player::Human,
            buf: String::new(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Bot for ConsoleHuman<R, W> {
    fn name(&self) -> &str {
        "Human"
    }

    fn new_game(&mut self, size: usize, me: Player) {
        self.size = size;
        self.me = me;
    }

    fn play_turn(&mut self, opponent_last_move: Option<usize>) -> anyhow::Result<usize> {
        if let Some(column) = opponent_last_move {
            writeln!(
                self.output,
                "{} played column {}.",
                self.me.opponent(),
                column
            )?;
        }
        loop {
            write!(
                self.output,
                "Your move, pick a column from 0 to {}: ",
                self.size.saturating_sub(1)
            )?;
            self.output.flush()?;

            self.buf.clear();
            if self.input.read_line(&mut self.buf)? == 0 {
                // 0 bytes read means EOF
                bail!("Input closed before a column was chosen");
            }
            match self.buf.trim().parse::<usize>() {
                Ok(column) => return Ok(column),
                Err(_) => writeln!(
                    self.output,
                    "'{}' is not a column number.",
                    self.buf.trim()
                )?,
            }
        }
    }

    fn game_over(&mut self, outcome: Outcome) {
        let message = match outcome {
            Outcome::Winner(player) if player == self.me => "You won!",
            Outcome::Winner(_) => "You lost.",
            Outcome::Draw => "It's a draw.",
        };
        // The spectator has already announced the result, this is best effort.
        let _ = writeln!(self.output, "{}", message);
    }
}
