//! The turn engine: the only owner and writer of the board during a game.

use std::cmp::Ordering;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::{
    advance_turn, choose_move, Board, IllegalPlacement, Move, MoveRejected, Player, Position,
    Score, TurnOutcome, HUMAN_PLAYER, OPPONENT_PLAYER,
};

/// The result of a game, or [`Outcome::Undetermined`] while it is still running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Undetermined,
    LightWins,
    DarkWins,
    Draw,
}

impl Outcome {
    /// The final result by piece count: the side with more pieces wins.
    pub fn from_board(board: &Board) -> Self {
        let Score { light, dark } = board.score();
        match light.cmp(&dark) {
            Ordering::Less => Outcome::DarkWins,
            Ordering::Equal => Outcome::Draw,
            Ordering::Greater => Outcome::LightWins,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::LightWins => Some(Player::Light),
            Outcome::DarkWins => Some(Player::Dark),
            Outcome::Undetermined | Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Undetermined => write!(f, "Undetermined"),
            Outcome::LightWins => write!(f, "Light wins"),
            Outcome::DarkWins => write!(f, "Dark wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Where the game currently stands, from the point of view of a front-end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingHumanMove,
    AwaitingOpponentMove,
    GameOver,
}

/// A snapshot of a game, suitable for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    /// Meaningless once the game is over.
    pub to_move: Player,
    pub outcome: Outcome,
    /// The side whose turn was skipped after the most recent move, if any.
    pub last_pass: Option<Player>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The starting position, with the human to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: HUMAN_PLAYER,
            outcome: Outcome::Undetermined,
            last_pass: None,
        }
    }

    /// A game resumed from an arbitrary position.
    ///
    /// If `to_move` has no legal move, the turn is resolved the same way as
    /// after a move: the other side moves instead, or the game is over.
    pub fn from_position(board: Board, to_move: Player) -> Self {
        let mut state = Self {
            board,
            to_move,
            outcome: Outcome::Undetermined,
            last_pass: None,
        };
        state.record_turn(advance_turn(&board, to_move.opponent()));
        state
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome != Outcome::Undetermined
    }

    pub fn score(&self) -> Score {
        self.board.score()
    }

    pub fn phase(&self) -> Phase {
        if self.is_terminal() {
            Phase::GameOver
        } else if self.to_move == HUMAN_PLAYER {
            Phase::AwaitingHumanMove
        } else {
            Phase::AwaitingOpponentMove
        }
    }

    fn record_turn(&mut self, turn: TurnOutcome) {
        match turn {
            TurnOutcome::Normal { to_move } => {
                self.to_move = to_move;
                self.last_pass = None;
            }
            TurnOutcome::Passed { passer, to_move } => {
                self.to_move = to_move;
                self.last_pass = Some(passer);
            }
            TurnOutcome::GameEnded { outcome } => {
                self.outcome = outcome;
                self.last_pass = None;
            }
        }
    }
}

/// Serialized with the piece counts next to the board, so a front-end does
/// not have to count them itself.
impl Serialize for GameState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("GameState", 5)?;
        state.serialize_field("board", &self.board)?;
        state.serialize_field("to_move", &self.to_move)?;
        state.serialize_field("outcome", &self.outcome)?;
        state.serialize_field("last_pass", &self.last_pass)?;
        state.serialize_field("score", &self.score())?;
        state.end()
    }
}

/// Everything that happened as a result of one accepted move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub player: Player,
    pub placed: Position,
    /// In the order in which they should be flipped.
    pub captures: Vec<Position>,
    pub turn: TurnOutcome,
}

/// A game between the human (Light) and the greedy scripted opponent (Dark).
///
/// All mutation goes through [`Game::apply_move()`]. A rejected move leaves
/// the state untouched, and once the game is over every move is rejected.
#[derive(Clone, Debug, Default)]
pub struct Game {
    state: GameState,
}

impl Game {
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    pub fn from_position(board: Board, to_move: Player) -> Self {
        Self {
            state: GameState::from_position(board, to_move),
        }
    }

    /// Resets to the starting position.
    pub fn start_game(&mut self) -> &GameState {
        self.state = GameState::new();
        debug!("New game");
        &self.state
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Whether `player` could place a piece at this cell, ignoring whose turn it is.
    pub fn is_cell_playable(&self, row: usize, col: usize, player: Player) -> bool {
        Position::new(row, col).is_some_and(|pos| self.state.board.is_legal(pos, player))
    }

    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        self.state.board.legal_moves(player)
    }

    /// Places a piece for `player`, flips the captured pieces and hands over the turn.
    pub fn apply_move(
        &mut self,
        row: usize,
        col: usize,
        player: Player,
    ) -> Result<TurnReport, MoveRejected> {
        let position =
            Position::new(row, col).ok_or(MoveRejected::InvalidCoordinate { row, col })?;
        if self.state.is_terminal() {
            return Err(MoveRejected::GameOver);
        }
        if player != self.state.to_move {
            return Err(MoveRejected::OutOfTurn {
                player,
                to_move: self.state.to_move,
            });
        }

        let calculation = self
            .state
            .board
            .calculate(position, player)
            .map_err(|err: IllegalPlacement| MoveRejected::IllegalMove { position, err })?;
        let captures = calculation.captures.clone();
        let board = calculation.execute();
        debug!(%player, %position, captured = captures.len(), "Move applied");

        let turn = advance_turn(&board, player);
        self.state.board = board;
        self.state.record_turn(turn);
        match turn {
            TurnOutcome::Normal { .. } => {}
            TurnOutcome::Passed { passer, .. } => debug!(%passer, "No legal move, turn skipped"),
            TurnOutcome::GameEnded { outcome } => {
                let Score { light, dark } = self.state.score();
                debug!(%outcome, light, dark, "Game over");
            }
        }

        Ok(TurnReport {
            player,
            placed: position,
            captures,
            turn,
        })
    }

    /// Plays a move for the human and returns the new state.
    pub fn submit_human_move(&mut self, row: usize, col: usize) -> Result<GameState, MoveRejected> {
        self.apply_move(row, col, HUMAN_PLAYER)?;
        Ok(self.state.clone())
    }

    /// The move the scripted opponent would play now, without playing it.
    ///
    /// `None` if it is not the opponent's turn or the game is over.
    pub fn request_opponent_move(&self) -> Option<Move> {
        if self.phase() != Phase::AwaitingOpponentMove {
            return None;
        }
        choose_move(&self.state.board, OPPONENT_PLAYER)
    }

    /// Asks the scripted opponent for its move and plays it.
    ///
    /// Returns `Ok(None)` if it is not the opponent's turn.
    pub fn play_opponent_move(&mut self) -> Result<Option<TurnReport>, MoveRejected> {
        match self.request_opponent_move() {
            Some(mv) => {
                let Move { position, .. } = mv;
                self.apply_move(position.row(), position.col(), OPPONENT_PLAYER)
                    .map(Some)
            }
            None => Ok(None),
        }
    }
}
