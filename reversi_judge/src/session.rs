use std::io::{BufRead, Write};

use reversi::{
    visualize_board, Game, GameState, Outcome, ParsePositionError, Phase, Player, Position,
    Score, HUMAN_PLAYER, OPPONENT_PLAYER,
};
use tracing::{debug, info};

use crate::{error_chain, Config};

/// One line of input from the human.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Play(Position),
    Quit,
}

impl std::str::FromStr for Command {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "q" | "quit" => Ok(Command::Quit),
            other => other.parse().map(Command::Play),
        }
    }
}

/// Plays games against the scripted opponent until the human declines a rematch,
/// quits, or the input ends.
pub fn play_interactive<R: BufRead, W: Write>(
    config: &Config,
    mut input: R,
    mut output: W,
) -> anyhow::Result<()> {
    let mut game = Game::new();
    loop {
        match play_one_game(config, &mut game, &mut input, &mut output)? {
            Some(state) => {
                if config.json {
                    writeln!(output, "{}", serde_json::to_string_pretty(&state)?)?;
                }
            }
            None => break,
        }
        write!(output, "Play again? [y/N] ")?;
        output.flush()?;
        match read_line(&mut input)? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {
                game.start_game();
            }
            _ => break,
        }
    }
    writeln!(output, "Bye!")?;
    Ok(())
}

/// Returns the final state, or `None` if the human quit.
fn play_one_game<R: BufRead, W: Write>(
    config: &Config,
    game: &mut Game,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<Option<GameState>> {
    loop {
        render(game.state(), output)?;
        match game.phase() {
            Phase::GameOver => {
                let state = game.state();
                info!(outcome = %state.outcome, "Game finished");
                writeln!(output, "{}", final_message(state.outcome))?;
                return Ok(Some(state.clone()));
            }
            Phase::AwaitingOpponentMove => {
                writeln!(output, "{} is thinking...", OPPONENT_PLAYER)?;
                output.flush()?;
                if !config.think_delay.is_zero() {
                    std::thread::sleep(config.think_delay);
                }
                if let Some(report) = game.play_opponent_move()? {
                    writeln!(
                        output,
                        "{} plays {} and flips {}.",
                        OPPONENT_PLAYER,
                        report.placed,
                        report.captures.len()
                    )?;
                }
            }
            Phase::AwaitingHumanMove => {
                write!(
                    output,
                    "{}'s turn. Your move (e.g. d3, q to quit): ",
                    HUMAN_PLAYER
                )?;
                output.flush()?;
                let Some(line) = read_line(input)? else {
                    return Ok(None);
                };
                let position = match line.parse::<Command>() {
                    Ok(Command::Play(position)) => position,
                    Ok(Command::Quit) => return Ok(None),
                    Err(err) => {
                        writeln!(output, "{}", err)?;
                        continue;
                    }
                };
                if let Err(err) = game.submit_human_move(position.row(), position.col()) {
                    let chain = error_chain(&err);
                    for message in &chain {
                        debug!("{}", message);
                    }
                    writeln!(output, "Rejected: {}", chain.join(": "))?;
                }
            }
        }
    }
}

fn render<W: Write>(state: &GameState, output: &mut W) -> std::io::Result<()> {
    let hints = (state.phase() == Phase::AwaitingHumanMove).then_some(HUMAN_PLAYER);
    writeln!(output)?;
    writeln!(output, "{}", visualize_board(&state.board, hints))?;
    let Score { light, dark } = state.score();
    writeln!(
        output,
        "{} {}: {}   {} {}: {}",
        Player::Light.symbol(),
        Player::Light,
        light,
        Player::Dark.symbol(),
        Player::Dark,
        dark
    )?;
    if let Some(passer) = state.last_pass {
        writeln!(output, "{} passes!", passer)?;
    }
    Ok(())
}

fn final_message(outcome: Outcome) -> &'static str {
    match outcome.winner() {
        Some(player) if player == HUMAN_PLAYER => "You win!",
        Some(_) => "The opponent wins.",
        None => "It's a draw!",
    }
}

/// `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut buf = String::new();
    let num_bytes_read = input.read_line(&mut buf)?;
    if num_bytes_read == 0 {
        Ok(None)
    } else {
        Ok(Some(buf))
    }
}
