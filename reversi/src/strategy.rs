use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::trace;

use crate::{Board, Move, Player};

/// Something that picks a move for one side.
pub trait Strategy {
    fn name(&self) -> &str;

    /// Returns `None` only if `player` has no legal move.
    fn choose_move(&mut self, board: &Board, player: Player) -> Option<Move>;
}

/// The scripted opponent's heuristic: take the move that flips the most pieces.
///
/// Only looks one move ahead and ignores corners and edges entirely, so it is
/// easy to beat. Ties go to the first move in row-major order.
pub fn choose_move(board: &Board, player: Player) -> Option<Move> {
    let mut best: Option<Move> = None;
    for mv in board.legal_moves(player) {
        let improves = best
            .as_ref()
            .map_or(true, |top| mv.capture_count() > top.capture_count());
        if improves {
            best = Some(mv);
        }
    }
    if let Some(mv) = &best {
        trace!(%player, position = %mv.position, captures = mv.capture_count(), "Greedy choice");
    }
    best
}

/// [`choose_move()`] as a [`Strategy`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Greedy;

impl Strategy for Greedy {
    fn name(&self) -> &str {
        "greedy"
    }

    fn choose_move(&mut self, board: &Board, player: Player) -> Option<Move> {
        choose_move(board, player)
    }
}

/// Picks uniformly among the legal moves.
pub struct RandomMover {
    rng: StdRng,
}

impl RandomMover {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Strategy for RandomMover {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, board: &Board, player: Player) -> Option<Move> {
        let moves = board.legal_moves(player);
        let mv = moves.choose(&mut self.rng).cloned();
        if let Some(mv) = &mv {
            trace!(%player, position = %mv.position, "Random choice");
        }
        mv
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::ReachablePosition;
    use crate::Position;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    quickcheck! {
        fn greedy_is_deterministic_and_maximal(input: ReachablePosition) -> bool {
            let ReachablePosition { board, to_move } = input;
            let first = choose_move(&board, to_move);
            let second = Greedy.choose_move(&board, to_move);
            let max = board.legal_moves(to_move).iter().map(Move::capture_count).max();
            first == second && first.as_ref().map(Move::capture_count) == max
        }

        fn random_mover_only_plays_legal_moves(input: ReachablePosition, seed: u64) -> bool {
            let ReachablePosition { board, to_move } = input;
            match RandomMover::from_seed(seed).choose_move(&board, to_move) {
                Some(mv) => board.legal_moves(to_move).contains(&mv),
                None => !board.has_any_legal_move(to_move),
            }
        }
    }

    #[test]
    fn ties_go_to_the_first_move() {
        let board = Board::new();
        assert_eq!(choose_move(&board, Player::Dark).unwrap().position, pos(2, 3));
        assert_eq!(choose_move(&board, Player::Light).unwrap().position, pos(2, 4));
    }

    #[test]
    fn prefers_more_captures() {
        let board: Board = "
            XO......
            ........
            ........
            ........
            ........
            ........
            ........
            XOO....."
            .parse()
            .unwrap();
        let mv = choose_move(&board, Player::Dark).unwrap();
        assert_eq!(mv.position, pos(7, 3));
        assert_eq!(mv.captures, vec![pos(7, 2), pos(7, 1)]);
    }

    #[test]
    fn no_move_available() {
        let mut text = String::from("O");
        text.push_str(&".".repeat(63));
        let board: Board = text.parse().unwrap();
        assert_eq!(choose_move(&board, Player::Dark), None);
        assert_eq!(RandomMover::from_seed(7).choose_move(&board, Player::Dark), None);
    }

    #[test]
    fn random_mover_is_reproducible() {
        let board = Board::new();
        let a = RandomMover::from_seed(42).choose_move(&board, Player::Light);
        let b = RandomMover::from_seed(42).choose_move(&board, Player::Light);
        assert_eq!(a, b);
    }
}
