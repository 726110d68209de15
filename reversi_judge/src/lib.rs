mod matchup;
mod session;
pub use matchup::*;
pub use session::*;

use std::time::Duration;

pub struct Config {
    /// How long the scripted opponent "thinks" before its move is shown.
    pub think_delay: Duration,
    /// Print the final state of each game as JSON.
    pub json: bool,
}

/// The messages of an error and all of its sources, outermost first.
pub fn error_chain(err: &dyn std::error::Error) -> Vec<String> {
    let mut messages = vec![err.to_string()];
    let mut err_dyn = err;
    while let Some(src_err) = err_dyn.source() {
        messages.push(src_err.to_string());
        err_dyn = src_err;
    }
    messages
}

#[cfg(test)]
mod tests {
    use reversi::Game;

    use super::*;

    #[test]
    fn chain_includes_sources() {
        let err = Game::new().submit_human_move(0, 0).unwrap_err();
        assert_eq!(
            error_chain(&err),
            vec![
                String::from("a1 is not a legal move"),
                String::from("Placing a piece there would not capture anything"),
            ]
        );
    }
}
