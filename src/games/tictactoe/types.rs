//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    X,
    /// Player O (goes second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// A move: zero-based row and column of the square to mark.
///
/// Both coordinates are always in `0..3`; out-of-range moves cannot be
/// constructed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// Creates a move, or `None` if either coordinate is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self { row, col })
    }

    /// Creates a move from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < 9).then(|| Self {
            row: index / 3,
            col: index % 3,
        })
    }

    /// Row of the move (0-2).
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column of the move (0-2).
    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major index of the move (0-8).
    pub fn index(&self) -> usize {
        self.row * 3 + self.col
    }

    /// All nine squares, row-major.
    pub fn all() -> impl Iterator<Item = Move> {
        (0..9).filter_map(Move::from_index)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every move produces a new board and the old
/// one is left untouched, so sibling branches of a search never observe
/// each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    rows: [[Square; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            rows: [[Square::Empty; 3]; 3],
        }
    }

    /// Builds a board from explicit rows.
    ///
    /// No reachability check is made; see
    /// [`check_board`](crate::check_board).
    pub fn from_rows(rows: [[Square; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Gets the square addressed by a move.
    pub fn get(&self, mv: Move) -> Square {
        self.rows[mv.row][mv.col]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        self.get(mv) == Square::Empty
    }

    /// Returns all squares as rows.
    pub fn rows(&self) -> &[[Square; 3]; 3] {
        &self.rows
    }

    /// Iterates over every square, row-major.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// Number of squares holding the player's mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares()
            .filter(|&square| square == Square::Occupied(player))
            .count()
    }

    /// Returns a copy of this board with one square replaced.
    pub(super) fn with(&self, mv: Move, square: Square) -> Self {
        let mut next = *self;
        next.rows[mv.row][mv.col] = square;
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for square in row {
                write!(f, "{}", square.symbol())?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// A character that is neither a mark nor an empty cell.
    #[display("Unexpected character {:?} in board", ch)]
    InvalidCell {
        /// The offending character.
        ch: char,
    },
    /// The text did not describe exactly nine cells.
    #[display("Board must have 9 cells, found {}", count)]
    WrongCellCount {
        /// Number of cells found.
        count: usize,
    },
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`O` (any case) are marks, `.`, `_` and `-` are empty. Whitespace,
    /// `|` and `/` are ignored, so `"XO./.X./..O"` and the output of
    /// `Display` both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|ch| !ch.is_whitespace() && *ch != '|' && *ch != '/')
            .map(|ch| match ch {
                'X' | 'x' => Ok(Square::Occupied(Player::X)),
                'O' | 'o' => Ok(Square::Occupied(Player::O)),
                '.' | '_' | '-' => Ok(Square::Empty),
                _ => Err(BoardParseError::InvalidCell { ch }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if cells.len() != 9 {
            return Err(BoardParseError::WrongCellCount { count: cells.len() });
        }

        let mut board = Board::new();
        for (mv, square) in Move::all().zip(cells) {
            board.rows[mv.row][mv.col] = square;
        }
        Ok(board)
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
