use crate::{Player, Position};

/// The error type for [`Board::calculate()`](crate::Board::calculate), i.e. for placing a single piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalPlacement {
    CellOccupied,
    NoCaptures,
}

impl std::error::Error for IllegalPlacement {}

impl std::fmt::Display for IllegalPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPlacement::CellOccupied => write!(f, "The cell is already occupied"),
            IllegalPlacement::NoCaptures => {
                write!(f, "Placing a piece there would not capture anything")
            }
        }
    }
}

/// Why the turn engine refused a move. The game state is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveRejected {
    InvalidCoordinate {
        row: usize,
        col: usize,
    },
    OutOfTurn {
        player: Player,
        to_move: Player,
    },
    IllegalMove {
        position: Position,
        err: IllegalPlacement,
    },
    GameOver,
}

impl std::error::Error for MoveRejected {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveRejected::IllegalMove { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for MoveRejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveRejected::InvalidCoordinate { row, col } => {
                write!(f, "({}, {}) is not on the board", row, col)
            }
            MoveRejected::OutOfTurn { player, to_move } => {
                write!(f, "{} tried to move, but it is {}'s turn", player, to_move)
            }
            MoveRejected::IllegalMove { position, .. } => {
                write!(f, "{} is not a legal move", position)
            }
            MoveRejected::GameOver => write!(f, "The game is already over"),
        }
    }
}
