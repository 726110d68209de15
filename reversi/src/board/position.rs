use std::fmt;

use super::{Direction, BOARD_SIZE};

const COLUMN_NAMES: &str = "abcdefgh";

/// A cell coordinate that is guaranteed to lie on the board.
///
/// Rows and columns are zero-based, with `(0, 0)` in the upper-left corner.
/// In algebraic notation the column is a letter and the row a one-based
/// digit, so `(0, 0)` is `a1` and `(7, 7)` is `h8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Returns `None` if the coordinates are off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn row(self) -> usize {
        usize::from(self.row)
    }

    pub fn col(self) -> usize {
        usize::from(self.col)
    }

    /// The adjacent cell in the given direction, if it is still on the board.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Self::new(usize::from(row), usize::from(col))
    }

    /// All positions in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..BOARD_SIZE).flat_map(|row| {
            (0..BOARD_SIZE).map(move |col| Self {
                row: row as u8,
                col: col as u8,
            })
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = COLUMN_NAMES.chars().nth(self.col()).ok_or(fmt::Error)?;
        write!(f, "{}{}", col, self.row + 1)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParsePositionError;

impl std::error::Error for ParsePositionError {}

impl fmt::Display for ParsePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid position, expected a column a-h followed by a row 1-8")
    }
}

/// Parses algebraic notation such as `"d3"` (case-insensitive).
impl std::str::FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_char = chars.next().ok_or(ParsePositionError)?.to_ascii_lowercase();
        let col = COLUMN_NAMES.find(col_char).ok_or(ParsePositionError)?;
        let row = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .ok_or(ParsePositionError)? as usize;
        if chars.next().is_some() || row == 0 {
            return Err(ParsePositionError);
        }
        Self::new(row - 1, col).ok_or(ParsePositionError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_off_board() {
        assert!(Position::new(0, 0).is_some());
        assert!(Position::new(7, 7).is_some());
        assert_eq!(Position::new(8, 0), None);
        assert_eq!(Position::new(0, 8), None);
    }

    #[test]
    fn step_stays_on_board() {
        let corner = Position::new(0, 0).unwrap();
        assert_eq!(corner.step(Direction::North), None);
        assert_eq!(corner.step(Direction::West), None);
        assert_eq!(corner.step(Direction::SouthEast), Position::new(1, 1));
        let far = Position::new(7, 7).unwrap();
        assert_eq!(far.step(Direction::South), None);
        assert_eq!(far.step(Direction::NorthWest), Position::new(6, 6));
    }

    #[test]
    fn all_is_row_major() {
        let all: Vec<Position> = Position::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], Position::new(0, 0).unwrap());
        assert_eq!(all[1], Position::new(0, 1).unwrap());
        assert_eq!(all[8], Position::new(1, 0).unwrap());
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn notation() {
        assert_eq!("a1".parse(), Ok(Position::new(0, 0).unwrap()));
        assert_eq!("H8".parse(), Ok(Position::new(7, 7).unwrap()));
        assert_eq!("d3".parse(), Ok(Position::new(2, 3).unwrap()));
        assert_eq!(Position::new(2, 3).unwrap().to_string(), "d3");
        assert_eq!(Position::new(7, 0).unwrap().to_string(), "a8");
    }

    #[test]
    fn notation_errors() {
        for s in ["", "a", "a0", "a9", "i1", "aa", "a12", "3d"] {
            assert_eq!(s.parse::<Position>(), Err(ParsePositionError), "{s}");
        }
    }
}
