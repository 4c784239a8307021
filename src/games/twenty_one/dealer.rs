//! Dealer policy and hand resolution.

use serde::{Deserialize, Serialize};

use super::hand::Hand;

/// The dealer draws while below this total.
pub const DEALER_MIN: u32 = 17;

/// Whether the dealer takes another card.
///
/// Depends only on the dealer's own total.
#[must_use]
pub fn dealer_should_hit(dealer: &Hand) -> bool {
    dealer.total() < DEALER_MIN
}

/// Result of a finished hand, from the player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandOutcome {
    PlayerWin,
    DealerWin,
    Tie,
}

/// Decide a finished hand.
///
/// A player bust loses outright, even if the dealer also busted. Otherwise a
/// dealer bust wins for the player, then the higher total wins, and equal
/// totals tie.
#[must_use]
pub fn resolve_hand(player: &Hand, dealer: &Hand) -> HandOutcome {
    if player.is_bust() {
        return HandOutcome::DealerWin;
    }
    if dealer.is_bust() {
        return HandOutcome::PlayerWin;
    }

    match player.total().cmp(&dealer.total()) {
        std::cmp::Ordering::Greater => HandOutcome::PlayerWin,
        std::cmp::Ordering::Equal => HandOutcome::Tie,
        std::cmp::Ordering::Less => HandOutcome::DealerWin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};

    fn hand(ranks: &[Rank]) -> Hand {
        ranks.iter().map(|&rank| Card::new(rank, Suit::Spades)).collect()
    }

    #[test]
    fn test_dealer_threshold() {
        assert!(dealer_should_hit(&hand(&[Rank::Ten, Rank::Six])));
        assert!(!dealer_should_hit(&hand(&[Rank::Ten, Rank::Seven])));
        // Soft 17 stands
        assert!(!dealer_should_hit(&hand(&[Rank::Ace, Rank::Six])));
    }

    #[test]
    fn test_player_beats_busted_dealer() {
        let player = hand(&[Rank::King, Rank::King]);
        let dealer = hand(&[Rank::King, Rank::Queen, Rank::Five]);
        assert_eq!(resolve_hand(&player, &dealer), HandOutcome::PlayerWin);
    }

    #[test]
    fn test_equal_totals_tie() {
        let player = hand(&[Rank::Nine, Rank::Nine]);
        let dealer = hand(&[Rank::King, Rank::Eight]);
        assert_eq!(resolve_hand(&player, &dealer), HandOutcome::Tie);
    }

    #[test]
    fn test_higher_dealer_wins() {
        let player = hand(&[Rank::Two, Rank::Three]);
        let dealer = hand(&[Rank::King, Rank::King]);
        assert_eq!(resolve_hand(&player, &dealer), HandOutcome::DealerWin);
    }

    #[test]
    fn test_player_bust_loses_even_if_dealer_busts() {
        let player = hand(&[Rank::King, Rank::Queen, Rank::Two]);
        let dealer = hand(&[Rank::King, Rank::Queen, Rank::Three]);
        assert_eq!(resolve_hand(&player, &dealer), HandOutcome::DealerWin);
    }

    #[test]
    fn test_higher_player_wins() {
        let player = hand(&[Rank::Ace, Rank::King]);
        let dealer = hand(&[Rank::King, Rank::Nine]);
        assert_eq!(resolve_hand(&player, &dealer), HandOutcome::PlayerWin);
    }
}
