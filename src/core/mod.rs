//! Core engine types: sides, randomness, configuration.
//!
//! Shared by both games. Nothing here performs I/O.

pub mod config;
pub mod rng;
pub mod side;

pub use config::{FirstPlayer, MatchConfig, TableConfig};
pub use rng::{GameRng, GameRngState, Picker, ScriptedPicker};
pub use side::{Side, SideMap};
