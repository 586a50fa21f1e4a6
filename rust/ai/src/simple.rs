//! Naive baseline policy for comparison against table-driven play.

use bjsim_engine::cards::Card;
use bjsim_engine::errors::EngineError;
use bjsim_engine::hand::Hand;
use bjsim_engine::policy::{Action, Policy, Turn};

/// Score at which the baseline stops hitting.
pub const DEFAULT_STAND_ON: u8 = 12;

/// Hits until the hand reaches a fixed score, ignoring the dealer's card.
/// With the default it hits 2 through 11 and stands on 12 or more.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdPolicy {
    stand_on: u8,
}

impl ThresholdPolicy {
    pub fn new(stand_on: u8) -> Self {
        Self { stand_on }
    }

    pub fn stand_on(&self) -> u8 {
        self.stand_on
    }
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_STAND_ON)
    }
}

impl Policy for ThresholdPolicy {
    fn decide(&self, hand: &Hand, _dealer_up: Card, _turn: Turn) -> Result<Action, EngineError> {
        if hand.score() < self.stand_on {
            Ok(Action::Hit)
        } else {
            Ok(Action::Stand)
        }
    }

    fn name(&self) -> &str {
        "simple"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bjsim_engine::cards::{Rank as R, Suit as S};

    fn decide(ranks: &[R], up: R) -> Action {
        let cards: Vec<Card> = ranks.iter().map(|&r| Card::new(S::Spades, r)).collect();
        ThresholdPolicy::default()
            .decide(&Hand::with_cards(&cards, 1.0), Card::new(S::Clubs, up), Turn::opening())
            .unwrap()
    }

    #[test]
    fn test_hits_below_twelve() {
        assert_eq!(decide(&[R::Two, R::Three], R::Ten), Action::Hit);
        assert_eq!(decide(&[R::Five, R::Six], R::Ten), Action::Hit);
    }

    #[test]
    fn test_stands_on_twelve_and_up() {
        assert_eq!(decide(&[R::Ten, R::Two], R::Ten), Action::Stand);
        assert_eq!(decide(&[R::Ten, R::Three], R::Two), Action::Stand);
        assert_eq!(decide(&[R::Ace, R::Two], R::Two), Action::Stand);
    }

    #[test]
    fn test_ignores_dealer_card() {
        for up in [R::Two, R::Six, R::Ten, R::Ace] {
            assert_eq!(decide(&[R::Four, R::Four], up), Action::Hit);
            assert_eq!(decide(&[R::Nine, R::Four], up), Action::Stand);
        }
    }
}
