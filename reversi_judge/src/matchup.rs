use reversi::{Game, GameState, Outcome, Phase, Score, Strategy, HUMAN_PLAYER};
use serde::Serialize;
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MatchScore {
    pub light_wins: usize,
    pub dark_wins: usize,
    pub draws: usize,
}

impl MatchScore {
    pub fn num_games(&self) -> usize {
        self.light_wins + self.dark_wins + self.draws
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::LightWins => self.light_wins += 1,
            Outcome::DarkWins => self.dark_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Undetermined => {}
        }
    }

    /// A short human-readable summary, e.g. for the end of a run.
    pub fn summary(&self, stand_in_name: &str) -> String {
        let percentage = |n: usize| n as f32 / self.num_games().max(1) as f32 * 100.0;
        format!(
            "End result after {} games:\n- {} wins by {} (Light) ({:.1}%)\n- {} wins by greedy (Dark) ({:.1}%)\n- {} draws ({:.1}%)",
            self.num_games(),
            self.light_wins,
            stand_in_name,
            percentage(self.light_wins),
            self.dark_wins,
            percentage(self.dark_wins),
            self.draws,
            percentage(self.draws),
        )
    }
}

/// Plays one game with `stand_in` making the human's moves.
pub fn play_game(stand_in: &mut dyn Strategy) -> anyhow::Result<GameState> {
    let mut game = Game::new();
    loop {
        match game.phase() {
            Phase::GameOver => return Ok(game.state().clone()),
            Phase::AwaitingOpponentMove => {
                game.play_opponent_move()?;
            }
            Phase::AwaitingHumanMove => {
                let Some(mv) = stand_in.choose_move(&game.state().board, HUMAN_PLAYER) else {
                    anyhow::bail!("{} found no move although one exists", stand_in.name());
                };
                game.apply_move(mv.position.row(), mv.position.col(), HUMAN_PLAYER)?;
            }
        }
    }
}

/// Plays `num_games` games of `stand_in` against the scripted opponent.
pub fn play_matchup(stand_in: &mut dyn Strategy, num_games: usize) -> anyhow::Result<MatchScore> {
    let mut match_score = MatchScore::default();
    for game_idx in 0..num_games {
        let state = play_game(stand_in)?;
        let Score { light, dark } = state.score();
        debug!(game_idx, outcome = %state.outcome, light, dark);
        match_score.record(state.outcome);
    }
    Ok(match_score)
}
