use rand::Rng;
use thiserror::Error;

use crate::board::{Board, Expansion, MoveError, Piece};
use crate::heuristic::Evaluator;
use crate::minimax::Minimax;

/// A rejected drop from the opposing side
///
/// The session board is untouched when this is returned; the caller is
/// expected to prompt for another column.
#[derive(Debug, Error)]
#[error("illegal move: {source}")]
pub struct InvalidMove {
    #[from]
    pub source: MoveError,
}

/// A Connect 4 player backed by the minimax search
///
/// The agent owns the session board. Only [`apply_move`] and
/// [`apply_opponent_move`] mutate it; [`select_move`] searches over
/// copies and leaves it untouched, so a selection can be discarded or
/// re-run freely.
///
/// [`apply_move`]: Agent::apply_move
/// [`apply_opponent_move`]: Agent::apply_opponent_move
/// [`select_move`]: Agent::select_move
#[derive(Clone, Debug)]
pub struct Agent {
    piece: Piece,
    board: Board,
    search: Minimax,
}

impl Agent {
    /// Creates an agent that draws its colour uniformly at random, fixed
    /// for the agent's lifetime; the opponent plays the other colour
    pub fn new() -> Self {
        let piece = if rand::rng().random_bool(0.5) {
            Piece::Yellow
        } else {
            Piece::Red
        };
        Self::with_piece(piece)
    }

    /// Creates an agent playing a fixed colour
    pub fn with_piece(piece: Piece) -> Self {
        Self {
            piece,
            board: Board::new(),
            search: Minimax::new(piece),
        }
    }

    /// Starts the session from `board` instead of an empty one
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Sets the search depth in plies
    pub fn with_depth(mut self, max_depth: usize) -> Self {
        self.search = self.search.with_depth(max_depth);
        self
    }

    /// Sets the successor enumeration rule used by the search
    pub fn with_expansion(mut self, expansion: Expansion) -> Self {
        self.search = self.search.with_expansion(expansion);
        self
    }

    /// Replaces the search's position evaluator
    pub fn with_evaluator(mut self, evaluator: Evaluator) -> Self {
        self.search = self.search.with_evaluator(evaluator);
        self
    }

    /// The agent's colour
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// The opposing colour
    pub fn opponent_piece(&self) -> Piece {
        self.piece.opponent()
    }

    /// The session board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Searches for the agent's next move and returns the chosen 0-based
    /// column
    ///
    /// The session board is not changed; the move takes effect once the
    /// caller confirms it with [`Agent::apply_move`]. Any randomness in
    /// the choice comes from the evaluator's jitter alone.
    ///
    /// # Panics
    /// Panics if the board is already full.
    pub fn select_move(&mut self) -> usize {
        let (_row, column) = self.search.select(&self.board);
        column
    }

    /// Drops the agent's own piece in `column`
    pub fn apply_move(&mut self, column: usize) -> Result<(), MoveError> {
        self.board.apply(column, self.piece)?;
        Ok(())
    }

    /// Validates and drops the opponent's piece in `column`
    pub fn apply_opponent_move(&mut self, column: usize) -> Result<(), InvalidMove> {
        self.board.apply(column, self.piece.opponent())?;
        Ok(())
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::new()
    }
}
