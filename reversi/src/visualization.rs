use crate::{Board, Player, BOARD_SIZE};

/// Draws the board as text, with column letters on top and row numbers on the left.
///
/// If `playable_for` is given, the empty cells where that side may move are
/// marked with `*`.
pub fn visualize_board(board: &Board, playable_for: Option<Player>) -> String {
    let mut result = String::from("   a b c d e f g h");
    for (pos, cell) in board.iter() {
        if pos.col() == 0 {
            result += &format!("\n {} ", pos.row() + 1);
        }
        let symbol = match playable_for {
            Some(player) if board.is_legal(pos, player) => '*',
            _ => cell.symbol(),
        };
        result.push(symbol);
        if pos.col() + 1 < BOARD_SIZE {
            result.push(' ');
        }
    }
    result
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&visualize_board(self, None))
    }
}
