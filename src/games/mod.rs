//! Game rule engines.
//!
//! Each game is independent of the other. Both are pure: callers supply
//! moves, cards and a [`Picker`](crate::core::Picker), and read results back.

pub mod tictactoe;
pub mod twenty_one;
