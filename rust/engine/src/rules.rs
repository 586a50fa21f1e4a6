use serde::{Deserialize, Serialize};

use crate::hand::Hand;

/// Bonus multiplier paid on a winning natural.
pub const NATURAL_PAYOUT: f64 = 1.5;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Tie,
    Win,
    Loss,
}

/// Settled result of one leaf hand.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandOutcome {
    pub result: Outcome,
    /// Signed change to the player's bankroll
    pub earnings: f64,
}

/// Amount a settled hand moves, before sign.
///
/// A win on a natural pays the 3:2 bonus unless the dealer busted; every
/// other win or loss moves exactly the wager.
pub fn earnings(hand: &Hand, result: Outcome, dealer_bust: bool) -> f64 {
    if result == Outcome::Win && hand.is_natural() && !dealer_bust {
        hand.wager() * NATURAL_PAYOUT
    } else {
        hand.wager()
    }
}

/// Settles `hand` with the given result.
///
/// # Examples
///
/// ```
/// use bjsim_engine::cards::{Card, Rank, Suit};
/// use bjsim_engine::hand::Hand;
/// use bjsim_engine::rules::{settle, Outcome};
///
/// let natural = Hand::with_cards(
///     &[Card::new(Suit::Spades, Rank::King), Card::new(Suit::Hearts, Rank::Ace)],
///     10.0,
/// );
/// assert_eq!(settle(&natural, Outcome::Win, false).earnings, 15.0);
/// assert_eq!(settle(&natural, Outcome::Loss, false).earnings, -10.0);
/// assert_eq!(settle(&natural, Outcome::Tie, false).earnings, 0.0);
/// ```
pub fn settle(hand: &Hand, result: Outcome, dealer_bust: bool) -> HandOutcome {
    let earnings = match result {
        Outcome::Tie => 0.0,
        Outcome::Win => earnings(hand, result, dealer_bust),
        Outcome::Loss => -earnings(hand, result, dealer_bust),
    };
    HandOutcome { result, earnings }
}

/// Compares a standing, non-busted player hand against the final dealer hand.
pub fn compare(player: &Hand, dealer: &Hand) -> Outcome {
    if dealer.is_bust() {
        return Outcome::Win;
    }
    match player.score().cmp(&dealer.score()) {
        std::cmp::Ordering::Equal => Outcome::Tie,
        std::cmp::Ordering::Greater => Outcome::Win,
        std::cmp::Ordering::Less => Outcome::Loss,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank as R, Suit as S};

    fn hand(ranks: &[R], wager: f64) -> Hand {
        let cards: Vec<Card> = ranks.iter().map(|&r| Card::new(S::Diamonds, r)).collect();
        Hand::with_cards(&cards, wager)
    }

    #[test]
    fn test_natural_win_pays_bonus() {
        let h = hand(&[R::Ace, R::Jack], 4.0);
        assert_eq!(earnings(&h, Outcome::Win, false), 6.0);
    }

    #[test]
    fn test_natural_win_on_dealer_bust_pays_even() {
        let h = hand(&[R::Ace, R::Jack], 4.0);
        assert_eq!(earnings(&h, Outcome::Win, true), 4.0);
    }

    #[test]
    fn test_face_card_non_natural_pays_even() {
        let h = hand(&[R::King, R::Nine], 4.0);
        assert_eq!(settle(&h, Outcome::Win, false).earnings, 4.0);
        assert_eq!(settle(&h, Outcome::Loss, false).earnings, -4.0);
    }

    #[test]
    fn test_compare_scores() {
        let p = hand(&[R::Ten, R::Nine], 1.0);
        assert_eq!(compare(&p, &hand(&[R::Ten, R::Eight], 0.0)), Outcome::Win);
        assert_eq!(compare(&p, &hand(&[R::Ten, R::Nine], 0.0)), Outcome::Tie);
        assert_eq!(compare(&p, &hand(&[R::Ten, R::Ten], 0.0)), Outcome::Loss);
        assert_eq!(
            compare(&p, &hand(&[R::Ten, R::Six, R::Nine], 0.0)),
            Outcome::Win
        );
    }
}
