//! Hands and their totals.
//!
//! Aces start at 11. Each Ace in the hand then offers one chance to drop
//! the total by 10 while it is over [`MAX_VALUE`].

use log::trace;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// Highest total that does not bust.
pub const MAX_VALUE: u32 = 21;

/// Total of `cards` with soft Aces reduced as needed.
///
/// ```
/// use parlor::cards::{Card, Rank, Suit};
/// use parlor::games::twenty_one::hand_total;
///
/// let ace = Card::new(Rank::Ace, Suit::Spades);
/// let nine = Card::new(Rank::Nine, Suit::Clubs);
/// assert_eq!(hand_total(&[ace, ace, nine]), 21);
/// ```
#[must_use]
pub fn hand_total(cards: &[Card]) -> u32 {
    let mut total: u32 = cards.iter().map(|card| card.value()).sum();
    for _ace in cards.iter().filter(|card| card.rank.is_ace()) {
        if total > MAX_VALUE {
            total -= 10;
        }
    }
    total
}

/// Whether `cards` total more than [`MAX_VALUE`].
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    hand_total(cards) > MAX_VALUE
}

/// Cards dealt to one side, in deal order. Only ever grows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 8]>,
}

impl Hand {
    /// An empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a dealt card.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
        trace!("{} -> total {}", card, self.total());
    }

    /// Cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The first card dealt, shown face up for the dealer.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether no card has been dealt yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Current total. See [`hand_total`].
    #[must_use]
    pub fn total(&self) -> u32 {
        hand_total(&self.cards)
    }

    /// Whether the total is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
