use connect::{IllegalMove, Outcome, PlayedMove, Player, Session};
use connect_bot_utils::Bot;
use tracing::{debug, info, warn};

use crate::{Config, Spectator};

pub enum GameResult {
    Finished(Outcome),
    /// The player kept submitting illegal moves and forfeited the game.
    IllegalMoveByPlayer { player: Player, err: IllegalMove },
}

/// Plays one game with a random board size and first mover.
///
/// Returns an error only when a player or the spectator fails, not when an
/// illegal move is played.
pub fn play_game(
    config: &mut Config,
    human: &mut dyn Bot,
    computer: &mut dyn Bot,
    spectator: &mut dyn Spectator,
) -> anyhow::Result<GameResult> {
    let mut session = Session::random(&mut config.rng);
    play_session(config, &mut session, human, computer, spectator)
}

/// Plays `session` to the end.
pub fn play_session(
    config: &Config,
    session: &mut Session,
    human: &mut dyn Bot,
    computer: &mut dyn Bot,
    spectator: &mut dyn Spectator,
) -> anyhow::Result<GameResult> {
    let mut players: [&mut dyn Bot; 2] = [human, computer];

    // Inform the players about the new game, so that they can reset their state
    let size = session.size();
    players[idx(Player::Human)].new_game(size, Player::Human);
    players[idx(Player::Computer)].new_game(size, Player::Computer);

    if let Some(first_mover) = session.to_move() {
        info!(size, %first_mover, "New game");
        spectator.game_started(session.board(), first_mover)?;
    }

    while let Some(mover) = session.to_move() {
        let bot = &mut *players[idx(mover)];
        let played = match request_legal_move(config, session, bot, spectator)? {
            Ok(played) => played,
            Err(err) => {
                warn!(player = %mover, %err, "Too many illegal moves, forfeiting");
                let outcome = Outcome::Winner(mover.opponent());
                announce_game_over(&mut players, spectator, session, outcome)?;
                return Ok(GameResult::IllegalMoveByPlayer { player: mover, err });
            }
        };

        let PlayedMove { played, outcome } = played;
        debug!(
            player = %played.player,
            column = played.column,
            row = played.row,
            "Move accepted"
        );
        // Every player sees every move, in the order it was played
        for player in players.iter_mut() {
            player.move_played(played.column, played.player)?;
        }
        spectator.move_played(session.board(), played)?;

        if let Some(outcome) = outcome {
            info!(%outcome, moves = session.moves_played(), "Game over");
            announce_game_over(&mut players, spectator, session, outcome)?;
            return Ok(GameResult::Finished(outcome));
        }
    }

    // Only reachable if the session was already over before it was handed to us
    let outcome = session
        .outcome()
        .ok_or_else(|| anyhow::anyhow!("Session has neither a player to move nor an outcome"))?;
    announce_game_over(&mut players, spectator, session, outcome)?;
    Ok(GameResult::Finished(outcome))
}

/// Asks `bot` for columns until the session accepts one.
///
/// The inner error is the last illegal move once the player ran out of attempts.
fn request_legal_move(
    config: &Config,
    session: &mut Session,
    bot: &mut dyn Bot,
    spectator: &mut dyn Spectator,
) -> anyhow::Result<Result<PlayedMove, IllegalMove>> {
    let mut attempts = 0;
    loop {
        let column = bot.play_turn(session.opponent_last_move())?;
        match session.submit_move(column) {
            Ok(played) => return Ok(Ok(played)),
            Err(err) => {
                attempts += 1;
                let player = session
                    .to_move()
                    .ok_or_else(|| anyhow::anyhow!("Move requested after the game ended"))?;
                warn!(player = %player, name = bot.name(), column, %err, attempts, "Illegal move");
                spectator.illegal_move(player, &err)?;
                if attempts >= config.max_illegal_attempts {
                    return Ok(Err(err));
                }
            }
        }
    }
}

fn announce_game_over(
    players: &mut [&mut dyn Bot; 2],
    spectator: &mut dyn Spectator,
    session: &Session,
    outcome: Outcome,
) -> anyhow::Result<()> {
    for player in players.iter_mut() {
        player.game_over(outcome);
    }
    spectator.game_over(session.board(), outcome)
}

fn idx(player: Player) -> usize {
    match player {
        Player::Human => 0,
        Player::Computer => 1,
    }
}
