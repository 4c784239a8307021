//! The 52-card deck.
//!
//! Cards are dealt from the top, which is the end of the sequence.
//! A deck only ever shrinks. Games build a fresh one per hand.

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::rng::Picker;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Ordered sequence of cards, dealt from the top.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A full, unshuffled deck in rank-major order.
    ///
    /// ```
    /// use parlor::cards::{Deck, DECK_SIZE};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let cards = Rank::ALL
            .into_iter()
            .flat_map(|rank| Suit::ALL.into_iter().map(move |suit| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    /// A full deck shuffled with Fisher-Yates driven by `picker`.
    pub fn shuffled(picker: &mut impl Picker) -> Self {
        let mut deck = Self::new();
        for i in (1..deck.cards.len()).rev() {
            let j = picker.pick(i + 1);
            deck.cards.swap(i, j);
        }
        deck
    }

    /// A stacked deck. The last card is dealt first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Deal the top card, or `None` if the deck is exhausted.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{GameRng, ScriptedPicker};
    use std::collections::HashSet;

    #[test]
    fn test_new_deck_has_52_unique_cards() {
        let deck = Deck::new();
        let unique: HashSet<_> = deck.cards().iter().copied().collect();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn test_each_rank_appears_four_times() {
        let deck = Deck::new();
        for rank in Rank::ALL {
            let count = deck.cards().iter().filter(|c| c.rank == rank).count();
            assert_eq!(count, 4, "{rank}");
        }
    }

    #[test]
    fn test_deal_from_top_and_shrink() {
        let mut deck = Deck::new();
        let top = *deck.cards().last().unwrap();

        assert_eq!(deck.deal(), Some(top));
        assert_eq!(deck.len(), DECK_SIZE - 1);
    }

    #[test]
    fn test_deal_until_empty() {
        let mut deck = Deck::from_cards(vec![
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Three, Suit::Clubs),
        ]);

        assert_eq!(deck.deal(), Some(Card::new(Rank::Three, Suit::Clubs)));
        assert_eq!(deck.deal(), Some(Card::new(Rank::Two, Suit::Clubs)));
        assert!(deck.is_empty());
        assert_eq!(deck.deal(), None);
    }

    #[test]
    fn test_shuffle_keeps_every_card() {
        let mut rng = GameRng::new(42);
        let deck = Deck::shuffled(&mut rng);

        assert_ne!(deck, Deck::new());

        let shuffled: HashSet<_> = deck.cards().iter().copied().collect();
        let fresh: HashSet<_> = Deck::new().cards().iter().copied().collect();
        assert_eq!(shuffled, fresh);
    }

    #[test]
    fn test_shuffle_is_deterministic_per_seed() {
        let a = Deck::shuffled(&mut GameRng::new(7));
        let b = Deck::shuffled(&mut GameRng::new(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_identity_script_leaves_order() {
        // pick(i + 1) == i swaps every card with itself
        let script: Vec<usize> = (1..DECK_SIZE).rev().collect();
        let mut picker = ScriptedPicker::new(script);
        assert_eq!(Deck::shuffled(&mut picker), Deck::new());
    }
}
