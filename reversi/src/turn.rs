use crate::{Board, Outcome, Player};

/// Summarizes who moves next after a piece has been placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The turn passes to the other side as usual.
    Normal { to_move: Player },
    /// `passer` has no legal move, so `to_move` (the side that just moved) goes again.
    Passed { passer: Player, to_move: Player },
    GameEnded { outcome: Outcome },
}

/// Decides whose turn it is after `mover` has placed a piece on `board`.
///
/// The game ends when the board is full, or when neither side can move.
pub fn advance_turn(board: &Board, mover: Player) -> TurnOutcome {
    let next = mover.opponent();
    if board.is_full() {
        return TurnOutcome::GameEnded {
            outcome: Outcome::from_board(board),
        };
    }
    if board.has_any_legal_move(next) {
        TurnOutcome::Normal { to_move: next }
    } else if board.has_any_legal_move(mover) {
        TurnOutcome::Passed {
            passer: next,
            to_move: mover,
        }
    } else {
        TurnOutcome::GameEnded {
            outcome: Outcome::from_board(board),
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::ReachablePosition;

    quickcheck! {
        fn game_ends_iff_nobody_can_move_or_board_full(input: ReachablePosition) -> bool {
            let ReachablePosition { board, to_move } = input;
            let stuck = !board.has_any_legal_move(Player::Light)
                && !board.has_any_legal_move(Player::Dark);
            let ended = matches!(advance_turn(&board, !to_move), TurnOutcome::GameEnded { .. });
            ended == (stuck || board.is_full())
        }
    }

    #[test]
    fn normal_turn_change() {
        assert_eq!(
            advance_turn(&Board::new(), Player::Light),
            TurnOutcome::Normal {
                to_move: Player::Dark
            }
        );
    }

    #[test]
    fn pass_returns_to_mover() {
        // Dark's only piece is out of reach, but Light can still capture it.
        let board: Board = "
            OOOO....
            ........
            ........
            ........
            ........
            ........
            ........
            OOOOOX.."
            .parse()
            .unwrap();
        assert_eq!(
            advance_turn(&board, Player::Light),
            TurnOutcome::Passed {
                passer: Player::Dark,
                to_move: Player::Light
            }
        );
    }

    #[test]
    fn full_board_always_ends() {
        let board: Board = "OX".repeat(32).parse().unwrap();
        for mover in [Player::Light, Player::Dark] {
            assert_eq!(
                advance_turn(&board, mover),
                TurnOutcome::GameEnded {
                    outcome: Outcome::Draw
                }
            );
        }
    }

    #[test]
    fn double_pass_ends() {
        let mut text = String::from("X");
        text.push_str(&".".repeat(63));
        let board: Board = text.parse().unwrap();
        assert_eq!(
            advance_turn(&board, Player::Dark),
            TurnOutcome::GameEnded {
                outcome: Outcome::DarkWins
            }
        );
    }
}
