//! Tic-Tac-Toe against a heuristic computer opponent.
//!
//! - `Board`: nine squares and win detection over the eight `LINES`
//! - `choose_computer_move`: block, then center, then random
//! - `Round` / `Match`: best-of-N play with alternating openers

mod board;
mod opponent;
mod round;

pub use board::{Board, Cell, Line, Square, LINES};
pub use opponent::{choose_computer_move, choose_with_reason, find_block, MoveReason};
pub use round::{Match, Round, RoundScore, RoundStatus};
