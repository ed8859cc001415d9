//! An agent for playing the board game 'Connect 4'
//!
//! This agent uses a depth-limited game tree search with alpha-beta
//! pruning, scoring cut-off positions with a line-window heuristic. It
//! plays a decent but beatable game rather than a solved one.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_agent::{Agent, Board, Piece};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // three yellow pieces stacked in column 4, three red in column 1
//! let board = Board::from_drops("414141", Piece::Yellow)?;
//! let mut agent = Agent::with_piece(Piece::Yellow).with_board(board);
//!
//! // completing the column wins on the spot
//! assert_eq!(agent.select_move(), 3);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod heuristic;

pub mod minimax;

pub mod agent;


pub use crate::agent::{Agent, InvalidMove};
pub use crate::board::{Board, Cell, Expansion, MoveError, Piece};
pub use crate::heuristic::{Evaluator, JITTER_BAND};
pub use crate::minimax::{Minimax, DEFAULT_DEPTH};

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles that wins the game
pub const WIN_LENGTH: usize = 4;

// ensure that a winning line fits the board in every orientation
const_assert!(WIN_LENGTH <= WIDTH);
const_assert!(WIN_LENGTH <= HEIGHT);
