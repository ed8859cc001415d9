use anyhow::{anyhow, Result};
use thiserror::Error;

use std::fmt;

use crate::{HEIGHT, WIDTH, WIN_LENGTH};

/// A player's piece colour
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Piece {
    Yellow,
    Red,
}

impl Piece {
    /// Returns the other colour
    pub fn opponent(self) -> Self {
        match self {
            Piece::Yellow => Piece::Red,
            Piece::Red => Piece::Yellow,
        }
    }

    /// The cell state of a cell holding this piece
    pub fn to_cell(self) -> Cell {
        match self {
            Piece::Yellow => Cell::Yellow,
            Piece::Red => Cell::Red,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Piece::Yellow => "Yellow",
            Piece::Red => "Red",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Yellow,
    Red,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    /// The piece occupying this cell, if any
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Yellow => Some(Piece::Yellow),
            Cell::Red => Some(Piece::Red),
            Cell::Empty => None,
        }
    }
}

/// A rejected column drop
#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
pub enum MoveError {
    #[error("column {0} is out of range, valid columns are 0 to {max}", max = WIDTH - 1)]
    ColumnOutOfRange(usize),
    #[error("column {0} has no empty cell")]
    ColumnFull(usize),
}

/// Rule for enumerating the successors of a position
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Expansion {
    /// One successor per empty cell, with the piece placed in that exact
    /// cell; placements may float above a column's lowest empty row.
    /// Confirmed moves still resolve to a gravity drop in the chosen
    /// column.
    AnyEmptyCell,
    /// One successor per non-full column, with the piece dropped to the
    /// lowest empty row, columns ascending.
    ColumnDrop,
}

impl Default for Expansion {
    fn default() -> Self {
        Expansion::AnyEmptyCell
    }
}

/// A 6x7 Connect 4 position
///
/// Row 0 is the top of the board, row 5 the bottom. `Board` is a plain
/// value: search code copies it freely and never holds a shared mutable
/// reference.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Replays a string of 1-based column digits, alternating colours
    /// starting with `first`
    ///
    /// Digits match the column labels printed under the board: `"44"`
    /// drops `first` in the fourth column, then the other colour on top
    /// of it. Positions that already contain a line of four are accepted.
    pub fn from_drops<S: AsRef<str>>(drops: S, first: Piece) -> Result<Self> {
        let mut board = Self::new();
        let mut piece = first;

        for column_char in drops.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    board.apply(column - 1, piece)?;
                    piece = piece.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// The cell at `row`, `col`, with row 0 the top row
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Whether `column` still has an empty cell
    pub fn playable(&self, column: usize) -> bool {
        column < WIDTH && self.cells[0][column].is_empty()
    }

    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|column| !self.playable(column))
    }

    /// Drops `piece` into the lowest empty cell of `column`, returning
    /// the row it landed in
    pub fn apply(&mut self, column: usize, piece: Piece) -> Result<usize, MoveError> {
        if column >= WIDTH {
            return Err(MoveError::ColumnOutOfRange(column));
        }
        for row in (0..HEIGHT).rev() {
            if self.cells[row][column].is_empty() {
                self.cells[row][column] = piece.to_cell();
                return Ok(row);
            }
        }
        Err(MoveError::ColumnFull(column))
    }

    /// All positions reachable by giving `piece` one more cell, under the
    /// given expansion rule
    pub fn successors(&self, piece: Piece, expansion: Expansion) -> Vec<Board> {
        let mut successors = Vec::new();
        match expansion {
            Expansion::AnyEmptyCell => {
                for row in 0..HEIGHT {
                    for col in 0..WIDTH {
                        if self.cells[row][col].is_empty() {
                            let mut next = *self;
                            next.cells[row][col] = piece.to_cell();
                            successors.push(next);
                        }
                    }
                }
            }
            Expansion::ColumnDrop => {
                for column in 0..WIDTH {
                    let mut next = *self;
                    if next.apply(column, piece).is_ok() {
                        successors.push(next);
                    }
                }
            }
        }
        successors
    }

    /// The first cell that is empty here but occupied in `successor`,
    /// scanning rows top to bottom
    pub fn diff(&self, successor: &Board) -> Option<(usize, usize)> {
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                if self.cells[row][col].is_empty() && !successor.cells[row][col].is_empty() {
                    return Some((row, col));
                }
            }
        }
        None
    }

    /// The piece holding the first line of four, if any
    ///
    /// Orientations are scanned in a fixed order: horizontal rows top to
    /// bottom, verticals left to right, then down-right and down-left
    /// diagonals. The first line found decides even if several exist.
    pub fn winner(&self) -> Option<Piece> {
        for row in 0..HEIGHT {
            for col in 0..=WIDTH - WIN_LENGTH {
                if let Some(piece) = self.line_at(row, col, 0, 1) {
                    return Some(piece);
                }
            }
        }
        for col in 0..WIDTH {
            for row in 0..=HEIGHT - WIN_LENGTH {
                if let Some(piece) = self.line_at(row, col, 1, 0) {
                    return Some(piece);
                }
            }
        }
        for row in 0..=HEIGHT - WIN_LENGTH {
            for col in 0..=WIDTH - WIN_LENGTH {
                if let Some(piece) = self.line_at(row, col, 1, 1) {
                    return Some(piece);
                }
            }
        }
        for row in 0..=HEIGHT - WIN_LENGTH {
            for col in WIN_LENGTH - 1..WIDTH {
                if let Some(piece) = self.line_at(row, col, 1, -1) {
                    return Some(piece);
                }
            }
        }
        None
    }

    /// +1 if `perspective` holds the first line of four, -1 if the other
    /// colour does, 0 if no line of four exists anywhere
    pub fn terminal_value(&self, perspective: Piece) -> i32 {
        match self.winner() {
            Some(winner) if winner == perspective => 1,
            Some(_) => -1,
            None => 0,
        }
    }

    // checks the run of four starting at (row, col) and stepping by
    // (dr, dc); all call sites keep the run inside the board
    fn line_at(&self, row: usize, col: usize, dr: usize, dc: isize) -> Option<Piece> {
        let first = self.cells[row][col];
        let piece = first.piece()?;
        for k in 1..WIN_LENGTH {
            let r = row + k * dr;
            let c = (col as isize + k as isize * dc) as usize;
            if self.cells[r][c] != first {
                return None;
            }
        }
        Some(piece)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                if col > 0 {
                    write!(f, " ")?;
                }
                let glyph = match self.cells[row][col] {
                    Cell::Yellow => 'Y',
                    Cell::Red => 'R',
                    Cell::Empty => '.',
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        for column in 1..=WIDTH {
            if column > 1 {
                write!(f, " ")?;
            }
            write!(f, "{}", column)?;
        }
        writeln!(f)
    }
}
