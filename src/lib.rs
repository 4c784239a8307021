//! # parlor
//!
//! Rule engines for two turn-based console games, Tic-Tac-Toe and
//! Twenty-One, plus the terminal front ends that drive them.
//!
//! ## Design Principles
//!
//! 1. **Pure Engines**: Rule code takes values and returns values. No I/O,
//!    no global state. Callers validate input before calling in.
//!
//! 2. **Injected Randomness**: Every random choice goes through a
//!    [`Picker`], so tests can replay fixed sequences.
//!
//! 3. **Thin Shell**: Rendering, prompts and pacing live behind the `cli`
//!    feature and never decide a rule.
//!
//! ## Modules
//!
//! - `core`: Sides, RNG and pickers, configuration
//! - `cards`: Ranks, suits, cards, the 52-card deck
//! - `games`: `tictactoe` board engine and `twenty_one` hand engine
//! - `shell`: Console rendering, prompts and interactive loops (feature `cli`)

pub mod cards;
pub mod core;
pub mod games;
#[cfg(feature = "cli")]
pub mod shell;

// Re-export commonly used types
pub use crate::core::{
    FirstPlayer, GameRng, GameRngState, MatchConfig, Picker, ScriptedPicker, Side, SideMap,
    TableConfig,
};

pub use crate::cards::{Card, Deck, Rank, Suit};

pub use crate::games::tictactoe::{
    choose_computer_move, Board, Cell, Match, Round, RoundScore, RoundStatus, Square, LINES,
};

pub use crate::games::twenty_one::{
    dealer_should_hit, hand_total, resolve_hand, Hand, HandOutcome, Table, DEALER_MIN, MAX_VALUE,
};
