//! Game model and computer opponent for the board game 'Connect 4'
//!
//! The board model is side-effect free apart from [`Board::drop`], so the
//! fixed-depth minimax search can explore thousands of hypothetical positions
//! on cheap copies of the caller's board.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::Board, search::best_move, GameOutcome};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // player one has three in a row along the bottom
//! let board = Board::from_moves("112233")?;
//! let player = board.side_to_move();
//!
//! let column = best_move(&board, player, 5)?;
//! assert_eq!(column, 3);
//!
//! let mut board = board;
//! let (row, outcome) = board.drop(column, player)?;
//! assert_eq!((row, outcome), (0, GameOutcome::Won(player)));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;

pub mod board;

pub mod movegen;

pub mod evaluator;

pub mod search;

pub mod game;

pub mod config;

pub mod error;


pub use board::{Axis, Board, Cell, GameOutcome, Player};
pub use error::{ConfigError, GameError};
pub use evaluator::{Evaluator, RunLengthEvaluator};
pub use game::Game;
pub use search::{PendingMove, SearchConfig, Searcher};

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles needed to win
pub const CONNECT: usize = 4;

// a line of CONNECT tiles must fit both across and up the board
const_assert!(CONNECT <= WIDTH && CONNECT <= HEIGHT);
// columns are written as single digits by `Board::from_moves`
const_assert!(WIDTH <= 9);
