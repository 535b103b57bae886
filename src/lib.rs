//! A game engine and AI for 'Connect 4' played on a 4x4x4 lattice
//!
//! Pieces drop down each (x, y) column under gravity and the first player to
//! line up four pieces along any of the 13 straight directions wins. The AI
//! picks its moves with a depth-limited minimax search with alpha-beta pruning.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_3d::{board::{Board, Player, Position}, solver::Solver};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // both players have three pieces stacked in a column, Player One to move
//! let board = Board::from_moves("111211121112")?;
//! let mut solver = Solver::new();
//! let (score, best_move) = solver.best_move(&board, Player::One);
//!
//! assert_eq!(score, connect4_3d::solver::WIN_SCORE);
//! assert_eq!(best_move, Some(Position::new(3, 0, 0)));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod win;

pub mod moves;

pub mod solver;

pub mod game;


/// The length of each side of the board in cells
pub const SIZE: usize = 4;

/// The number of cells in one horizontal layer
pub const LAYER: usize = SIZE * SIZE;

/// The total number of cells on the board
pub const CELLS: usize = LAYER * SIZE;

/// The search depth used for the AI's moves
pub const AI_DEPTH: u32 = 4;

// ensure that every cell has its own bit in a u64 for the bitboard representation
const_assert!(CELLS <= 64);
// the line table assumes a line spans the whole board
const_assert!(SIZE == 4);
