//! Twenty-One ("21") against a fixed-policy dealer.
//!
//! - `hand_total`: card values with soft-Ace reduction, once per Ace
//! - `dealer_should_hit`: draw while under 17
//! - `resolve_hand`: player bust, dealer bust, then higher total
//! - `Table`: a single game from deal to outcome

mod dealer;
mod hand;
mod table;

pub use dealer::{dealer_should_hit, resolve_hand, HandOutcome, DEALER_MIN};
pub use hand::{hand_total, is_bust, Hand, MAX_VALUE};
pub use table::Table;
