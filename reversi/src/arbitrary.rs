use quickcheck::{Arbitrary, Gen};

use crate::{Board, Player, Position, HUMAN_PLAYER};

/// A board reached by playing random legal moves from the starting position,
/// together with the side whose turn it is.
#[derive(Clone, Debug)]
pub struct ReachablePosition {
    pub board: Board,
    pub to_move: Player,
}

impl Arbitrary for ReachablePosition {
    fn arbitrary(g: &mut Gen) -> Self {
        // At most 60 pieces can be placed, plus a few passes
        let num_plies = usize::arbitrary(g) % 64;
        let mut board = Board::new();
        let mut to_move = HUMAN_PLAYER;

        for _ in 0..num_plies {
            let moves = board.legal_moves(to_move);
            match g.choose(&moves) {
                Some(mv) => {
                    board = board.calculate(mv.position, to_move).unwrap().execute();
                    to_move = !to_move;
                }
                None if board.has_any_legal_move(!to_move) => {
                    to_move = !to_move;
                }
                None => break,
            }
        }

        Self { board, to_move }
    }
}

impl Arbitrary for Position {
    fn arbitrary(g: &mut Gen) -> Self {
        let row = usize::arbitrary(g) % 8;
        let col = usize::arbitrary(g) % 8;
        Position::new(row, col).unwrap()
    }
}
