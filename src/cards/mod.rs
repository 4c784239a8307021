//! Card system: ranks, suits, cards and the deck.
//!
//! ## Key Types
//!
//! - `Rank`: Ace through King, with its Twenty-One value
//! - `Suit`: Cosmetic, never affects value
//! - `Card`: A (rank, suit) pair
//! - `Deck`: The 52 unique cards, dealt from the top

pub mod card;
pub mod deck;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
