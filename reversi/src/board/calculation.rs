use super::{Board, Cell, Direction, Position};
use crate::{IllegalPlacement, Player};

/// A legal placement together with the opponent pieces it captures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub position: Position,
    /// In direction-scan order, and outward from `position` within each line.
    pub captures: Vec<Position>,
}

impl Move {
    pub fn capture_count(&self) -> usize {
        self.captures.len()
    }
}

/// The checked result of placing a piece, not yet applied.
#[derive(Debug)]
pub struct MoveCalculation<'a> {
    /// Only ever applied to the board it was computed on
    board: &'a Board,
    player: Player,
    pub position: Position,
    pub captures: Vec<Position>,
}

impl Board {
    /// The opponent pieces that would be flipped if `player` placed a piece at `position`.
    ///
    /// This is the core function of this type. The result is empty if the cell
    /// is occupied or no line is enclosed; otherwise the placement is legal.
    pub fn captures(&self, position: Position, player: Player) -> Vec<Position> {
        if !self.get(position).is_empty() {
            return Vec::new();
        }
        Direction::ALL
            .iter()
            .filter_map(|&direction| self.capture_line(position, direction, player))
            .flatten()
            .collect()
    }

    /// Like [`Self::captures()`], but explains why the placement is illegal.
    pub fn calculate(
        &self,
        position: Position,
        player: Player,
    ) -> Result<MoveCalculation<'_>, IllegalPlacement> {
        if !self.get(position).is_empty() {
            return Err(IllegalPlacement::CellOccupied);
        }
        let captures = self.captures(position, player);
        if captures.is_empty() {
            return Err(IllegalPlacement::NoCaptures);
        }
        Ok(MoveCalculation {
            board: self,
            player,
            position,
            captures,
        })
    }

    pub fn is_legal(&self, position: Position, player: Player) -> bool {
        !self.captures(position, player).is_empty()
    }

    /// Is there any cell where `player` may place a piece?
    ///
    /// This is a bit more efficient than checking [`Self::legal_moves()`].
    pub fn has_any_legal_move(&self, player: Player) -> bool {
        Position::all().any(|pos| self.is_legal(pos, player))
    }

    /// All legal moves for `player`, in row-major order.
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        Position::all()
            .filter_map(|position| {
                let captures = self.captures(position, player);
                (!captures.is_empty()).then_some(Move { position, captures })
            })
            .collect()
    }

    // Walks away from `start` over opponent pieces. Returns the run only if it
    // is non-empty and closed off by one of the mover's own pieces.
    fn capture_line(
        &self,
        start: Position,
        direction: Direction,
        player: Player,
    ) -> Option<Vec<Position>> {
        let mut run = Vec::new();
        let mut cursor = start.step(direction)?;
        loop {
            match self.get(cursor) {
                Cell::Occupied(owner) if owner == player => {
                    return (!run.is_empty()).then_some(run);
                }
                Cell::Occupied(_) => {
                    run.push(cursor);
                    cursor = cursor.step(direction)?;
                }
                Cell::Empty => return None,
            }
        }
    }
}

impl<'a> MoveCalculation<'a> {
    /// Apply the placement and the flips, and get the new board.
    pub fn execute(self) -> Board {
        let mut board = *self.board;
        board.place(self.position, self.player);
        for &captured in &self.captures {
            board.place(captured, self.player);
        }
        board
    }
}
