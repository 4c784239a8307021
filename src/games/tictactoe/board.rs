//! The 3×3 board and line-based win detection.
//!
//! Squares are numbered 1 through 9, top left to bottom right:
//!
//! ```text
//!  1 | 2 | 3
//! ---+---+---
//!  4 | 5 | 6
//! ---+---+---
//!  7 | 8 | 9
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// A board square, 1 through 9.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square(u8);

impl Square {
    /// The center square.
    pub const CENTER: Square = Square(5);

    /// Create a square.
    ///
    /// Panics unless `index` is in `1..=9`.
    #[must_use]
    pub fn new(index: u8) -> Self {
        assert!((1..=9).contains(&index), "Square must be 1-9, got {index}");
        Self(index)
    }

    /// Square from its number, or `None` outside `1..=9`.
    #[must_use]
    pub fn checked(index: u8) -> Option<Self> {
        (1..=9).contains(&index).then_some(Self(index))
    }

    /// The square's number (1-based).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Iterate over all nine squares in order.
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=9).map(Square)
    }

    const fn slot(self) -> usize {
        self.0 as usize - 1
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contents of a square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Player,
    Computer,
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Player => Cell::Player,
            Side::Computer => Cell::Computer,
        }
    }
}

/// Three squares that win when one side holds all of them.
pub type Line = [Square; 3];

/// The eight winning lines in scan order: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    [Square(1), Square(2), Square(3)],
    [Square(4), Square(5), Square(6)],
    [Square(7), Square(8), Square(9)],
    [Square(1), Square(4), Square(7)],
    [Square(2), Square(5), Square(8)],
    [Square(3), Square(6), Square(9)],
    [Square(1), Square(5), Square(9)],
    [Square(3), Square(5), Square(7)],
];

/// Nine squares, each filled at most once.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of a square.
    #[must_use]
    pub fn cell(&self, square: Square) -> Cell {
        self.cells[square.slot()]
    }

    /// Whether a square is still open.
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.cell(square) == Cell::Empty
    }

    /// Mark a square for `side`.
    ///
    /// Panics if the square is already taken.
    pub fn place(&mut self, square: Square, side: Side) {
        assert!(self.is_empty(square), "Square {square} is already taken");
        self.cells[square.slot()] = side.into();
    }

    /// Open squares in ascending order.
    #[must_use]
    pub fn empty_squares(&self) -> Vec<Square> {
        Square::all().filter(|&sq| self.is_empty(sq)).collect()
    }

    /// Whether every square is taken.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// The side holding a complete line, if any.
    ///
    /// Lines are scanned in `LINES` order and the first complete one wins.
    ///
    /// ```
    /// use parlor::core::Side;
    /// use parlor::games::tictactoe::{Board, Square};
    ///
    /// let mut board = Board::new();
    /// for n in [3, 5, 7] {
    ///     board.place(Square::new(n), Side::Computer);
    /// }
    /// assert_eq!(board.detect_winner(), Some(Side::Computer));
    /// ```
    #[must_use]
    pub fn detect_winner(&self) -> Option<Side> {
        LINES.iter().find_map(|line| {
            Side::ALL
                .into_iter()
                .find(|&side| self.count_in(line, Cell::from(side)) == 3)
        })
    }

    /// Whether either side has completed a line.
    #[must_use]
    pub fn someone_won(&self) -> bool {
        self.detect_winner().is_some()
    }

    /// Number of squares in `line` holding `cell`.
    #[must_use]
    pub fn count_in(&self, line: &Line, cell: Cell) -> usize {
        line.iter().filter(|&&sq| self.cell(sq) == cell).count()
    }
}
