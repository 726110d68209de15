mod calculation;
mod direction;
mod position;

pub use calculation::*;
pub use direction::*;
pub use position::*;

use serde::{Serialize, Serializer};

use crate::Player;

/// The number of cells along one edge of the board.
pub const BOARD_SIZE: usize = 8;

/// The number of cells on the board.
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// The state of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The character used for this cell in text boards.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(player) => player.symbol(),
        }
    }
}

/// The 8x8 grid.
///
/// Outside of this crate a board can only be read. New pieces are added by
/// [`MoveCalculation::execute()`], and an occupied cell never becomes empty
/// again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

/// Piece counts for both sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub light: usize,
    pub dark: usize,
}

impl Score {
    pub fn of(self, player: Player) -> usize {
        match player {
            Player::Light => self.light,
            Player::Dark => self.dark,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The starting position: two pieces per side on the central diagonals.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.cells[3][3] = Cell::Occupied(Player::Light);
        board.cells[3][4] = Cell::Occupied(Player::Dark);
        board.cells[4][3] = Cell::Occupied(Player::Dark);
        board.cells[4][4] = Cell::Occupied(Player::Light);
        board
    }

    fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn get(&self, position: Position) -> Cell {
        self.cells[position.row()][position.col()]
    }

    pub fn owner(&self, position: Position) -> Option<Player> {
        self.get(position).owner()
    }

    /// All cells with their positions, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::all().map(move |pos| (pos, self.get(pos)))
    }

    /// The number of pieces `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.iter()
            .filter(|&(_, cell)| cell == Cell::Occupied(player))
            .count()
    }

    pub fn score(&self) -> Score {
        Score {
            light: self.count(Player::Light),
            dark: self.count(Player::Dark),
        }
    }

    pub fn empty_count(&self) -> usize {
        self.iter().filter(|&(_, cell)| cell.is_empty()).count()
    }

    pub fn occupied_count(&self) -> usize {
        NUM_CELLS - self.empty_count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// One string per row, using the characters of [`Cell::symbol()`].
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    pub(crate) fn place(&mut self, position: Position, player: Player) {
        self.cells[position.row()][position.col()] = Cell::Occupied(player);
    }
}

/// Serialized as eight row strings, e.g. `"...OX..."`.
impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ParseBoardError {
    InvalidCharacter(char),
    WrongNumberOfCells(usize),
}

impl std::error::Error for ParseBoardError {}

impl std::fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseBoardError::InvalidCharacter(c) => {
                write!(f, "Unexpected character '{}' in board", c)
            }
            ParseBoardError::WrongNumberOfCells(n) => {
                write!(f, "Expected {} cells, found {}", NUM_CELLS, n)
            }
        }
    }
}

/// Parses a board from 64 cell characters in row-major order.
///
/// `.` is an empty cell, `O` a Light piece and `X` a Dark piece.
/// Whitespace is ignored, so the rows can be laid out on separate lines.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '.' => Ok(Cell::Empty),
                'O' => Ok(Cell::Occupied(Player::Light)),
                'X' => Ok(Cell::Occupied(Player::Dark)),
                other => Err(ParseBoardError::InvalidCharacter(other)),
            })
            .collect::<Result<Vec<Cell>, ParseBoardError>>()?;
        if cells.len() != NUM_CELLS {
            return Err(ParseBoardError::WrongNumberOfCells(cells.len()));
        }

        let mut board = Self::empty();
        for (pos, cell) in Position::all().zip(cells) {
            board.cells[pos.row()][pos.col()] = cell;
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn initial_board() {
        let board = Board::new();
        assert_eq!(board.occupied_count(), 4);
        assert_eq!(board.empty_count(), 60);
        assert_eq!(board.score(), Score { light: 2, dark: 2 });
        assert_eq!(board.owner(pos(3, 3)), Some(Player::Light));
        assert_eq!(board.owner(pos(4, 4)), Some(Player::Light));
        assert_eq!(board.owner(pos(3, 4)), Some(Player::Dark));
        assert_eq!(board.owner(pos(4, 3)), Some(Player::Dark));
    }

    #[test]
    fn parse_matches_initial_board() {
        let board: Board = "
            ........
            ........
            ........
            ...OX...
            ...XO...
            ........
            ........
            ........"
            .parse()
            .unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(board.rows()[3], "...OX...");
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "........".parse::<Board>(),
            Err(ParseBoardError::WrongNumberOfCells(8))
        );
        let mut text = ".".repeat(63);
        text.push('?');
        assert_eq!(
            text.parse::<Board>(),
            Err(ParseBoardError::InvalidCharacter('?'))
        );
    }

    #[test]
    fn full_board() {
        let board: Board = "OX".repeat(32).parse().unwrap();
        assert!(board.is_full());
        assert_eq!(board.score(), Score { light: 32, dark: 32 });
    }
}
