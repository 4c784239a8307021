//! One hand of Twenty-One from deal to outcome.

use log::debug;

use super::dealer::{dealer_should_hit, resolve_hand, HandOutcome};
use super::hand::Hand;
use crate::cards::{Card, Deck};

/// Deck plus the player's and dealer's hands for a single game.
#[derive(Clone, Debug)]
pub struct Table {
    deck: Deck,
    player: Hand,
    dealer: Hand,
}

impl Table {
    /// Deal two cards to the player, then two to the dealer.
    ///
    /// Stops early if the deck runs out.
    #[must_use]
    pub fn deal(deck: Deck) -> Self {
        let mut table = Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
        };
        for _ in 0..2 {
            table.hit_player();
        }
        for _ in 0..2 {
            table.hit_dealer();
        }
        table
    }

    /// The player's hand.
    #[must_use]
    pub fn player(&self) -> &Hand {
        &self.player
    }

    /// The dealer's hand.
    #[must_use]
    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn cards_left(&self) -> usize {
        self.deck.len()
    }

    /// Deal one card to the player.
    ///
    /// The caller must not hit a busted hand.
    pub fn hit_player(&mut self) -> Option<Card> {
        let card = self.deck.deal()?;
        self.player.push(card);
        Some(card)
    }

    fn hit_dealer(&mut self) -> Option<Card> {
        let card = self.deck.deal()?;
        self.dealer.push(card);
        Some(card)
    }

    /// Run the dealer's turn and return the cards drawn.
    ///
    /// The dealer draws nothing once the player has busted.
    pub fn play_dealer(&mut self) -> Vec<Card> {
        let mut drawn = Vec::new();
        if self.player.is_bust() {
            return drawn;
        }

        while dealer_should_hit(&self.dealer) {
            match self.hit_dealer() {
                Some(card) => {
                    debug!("dealer hits: {} (total {})", card, self.dealer.total());
                    drawn.push(card);
                }
                None => break,
            }
        }
        debug!("dealer stands on {}", self.dealer.total());
        drawn
    }

    /// Outcome of the hand as it stands.
    #[must_use]
    pub fn outcome(&self) -> HandOutcome {
        resolve_hand(&self.player, &self.dealer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    /// Stacked deck where `top` is dealt first.
    fn stacked(top: &[Rank]) -> Deck {
        Deck::from_cards(
            top.iter()
                .rev()
                .map(|&rank| Card::new(rank, Suit::Diamonds))
                .collect(),
        )
    }

    #[test]
    fn test_initial_deal_order() {
        let table = Table::deal(stacked(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five]));
        let ranks = |h: &Hand| h.cards().iter().map(|c| c.rank).collect::<Vec<_>>();
        assert_eq!(ranks(table.player()), vec![Rank::Two, Rank::Three]);
        assert_eq!(ranks(table.dealer()), vec![Rank::Four, Rank::Five]);
        assert_eq!(table.cards_left(), 0);
    }

    #[test]
    fn test_dealer_hits_to_seventeen() {
        // Player 10+8, dealer 2+3 then 4, 5, 6 -> 20
        let mut table = Table::deal(stacked(&[
            Rank::Ten,
            Rank::Eight,
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::King,
        ]));
        let drawn = table.play_dealer();
        assert_eq!(drawn.len(), 3);
        assert_eq!(table.dealer().total(), 20);
        assert_eq!(table.cards_left(), 1);
        assert_eq!(table.outcome(), HandOutcome::DealerWin);
    }

    #[test]
    fn test_dealer_stands_on_seventeen() {
        let mut table = Table::deal(stacked(&[
            Rank::Ten,
            Rank::Nine,
            Rank::Ten,
            Rank::Seven,
            Rank::Five,
        ]));
        assert!(table.play_dealer().is_empty());
        assert_eq!(table.outcome(), HandOutcome::PlayerWin);
    }

    #[test]
    fn test_dealer_skips_turn_after_player_bust() {
        let mut table = Table::deal(stacked(&[
            Rank::Ten,
            Rank::Nine,
            Rank::Two,
            Rank::Three,
            Rank::King,
            Rank::Five,
        ]));
        assert_eq!(table.hit_player(), Some(Card::new(Rank::King, Suit::Diamonds)));
        assert!(table.player().is_bust());

        assert!(table.play_dealer().is_empty());
        assert_eq!(table.dealer().total(), 5);
        assert_eq!(table.outcome(), HandOutcome::DealerWin);
    }

    #[test]
    fn test_dealer_stops_when_deck_runs_out() {
        let mut table = Table::deal(stacked(&[Rank::Ten, Rank::Nine, Rank::Two, Rank::Three]));
        assert!(table.play_dealer().is_empty());
        assert_eq!(table.dealer().total(), 5);
        assert_eq!(table.hit_player(), None);
    }
}
