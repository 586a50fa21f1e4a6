//! Decision seam between the round driver and the policies that play hands.
//!
//! A [`Policy`] only chooses an [`Action`]; the round deals the cards,
//! adjusts wagers and spawns split hands. The house rule for the dealer
//! lives here as [`DealerPolicy`]; player policies are provided by the
//! `bjsim-ai` crate.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::EngineError;
use crate::hand::Hand;

/// Dealer stands on this score or above.
pub const DEALER_STAND: u8 = 17;

/// A decision taken for a hand at one decision point.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Take no more cards
    Stand,
    /// Take one card and decide again
    Hit,
    /// Divide a two-card pair into two hands
    Split,
    /// Double the wager for exactly one more card
    Double,
}

/// What the round currently permits for the hand being decided.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Turn {
    /// A split is still available for this hand's ancestry
    pub can_split: bool,
}

impl Turn {
    pub fn opening() -> Self {
        Self { can_split: true }
    }

    pub fn after_split() -> Self {
        Self { can_split: false }
    }
}

/// Trait implemented by every participant's decision policy.
///
/// Implementations are shared read-only across simulation workers, so they
/// must be `Send + Sync` and hold no per-round state.
pub trait Policy: Send + Sync {
    /// Choose the next action for `hand` given the dealer's visible card.
    fn decide(&self, hand: &Hand, dealer_up: Card, turn: Turn) -> Result<Action, EngineError>;

    /// Return the name/identifier of this policy.
    fn name(&self) -> &str;
}

/// Fixed house rule: hit below 17, stand on 17 or more.
#[derive(Debug, Clone, Copy, Default)]
pub struct DealerPolicy;

impl DealerPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl Policy for DealerPolicy {
    fn decide(&self, hand: &Hand, _dealer_up: Card, _turn: Turn) -> Result<Action, EngineError> {
        if hand.score() < DEALER_STAND {
            Ok(Action::Hit)
        } else {
            Ok(Action::Stand)
        }
    }

    fn name(&self) -> &str {
        "dealer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank as R, Suit as S};

    fn c(r: R) -> Card {
        Card::new(S::Clubs, r)
    }

    #[test]
    fn test_dealer_hits_below_17() {
        let hand = Hand::with_cards(&[c(R::Two), c(R::Ace)], 0.0);
        let action = DealerPolicy.decide(&hand, c(R::Ace), Turn::opening());
        assert_eq!(action, Ok(Action::Hit));
    }

    #[test]
    fn test_dealer_stands_on_17_and_above() {
        for ranks in [[R::Ten, R::Seven], [R::Eight, R::Ace], [R::King, R::Ace]] {
            let hand = Hand::with_cards(&[c(ranks[0]), c(ranks[1])], 0.0);
            assert_eq!(
                DealerPolicy.decide(&hand, c(ranks[1]), Turn::opening()),
                Ok(Action::Stand)
            );
        }
    }

    #[test]
    fn test_action_serializes_lowercase() {
        let s = serde_json::to_string(&Action::Double).unwrap();
        assert_eq!(s, "\"double\"");
    }
}
