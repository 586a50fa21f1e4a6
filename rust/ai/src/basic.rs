//! Table-driven player policy.
//!
//! Each decision classifies the hand into one of three buckets, in priority
//! order, and consults the matching category of a [`StrategyTable`] against
//! the dealer's visible card:
//!
//! 1. a two-card pair while a split is still available → `pairs`, keyed by
//!    the paired card's score
//! 2. two cards with an ace → `ace`, keyed by the other card's score
//! 3. anything else → `other`, keyed by the hand total

use std::sync::Arc;

use bjsim_engine::cards::Card;
use bjsim_engine::errors::EngineError;
use bjsim_engine::hand::Hand;
use bjsim_engine::policy::{Action, Policy, Turn};

use crate::table::{Category, StrategyTable};

/// Player policy looking every decision up in a shared strategy table.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use bjsim_ai::basic::TablePolicy;
/// use bjsim_ai::table::StrategyTable;
/// use bjsim_engine::cards::{Card, Rank, Suit};
/// use bjsim_engine::hand::Hand;
/// use bjsim_engine::policy::{Action, Policy, Turn};
///
/// let policy = TablePolicy::new(Arc::new(StrategyTable::builtin("basic").unwrap()));
/// let eights = Hand::with_cards(
///     &[Card::new(Suit::Clubs, Rank::Eight), Card::new(Suit::Hearts, Rank::Eight)],
///     5.0,
/// );
/// let up = Card::new(Suit::Spades, Rank::Ten);
/// assert_eq!(policy.decide(&eights, up, Turn::opening()), Ok(Action::Split));
/// ```
#[derive(Debug, Clone)]
pub struct TablePolicy {
    table: Arc<StrategyTable>,
    name: String,
}

impl TablePolicy {
    pub fn new(table: Arc<StrategyTable>) -> Self {
        Self::named(table, "basic")
    }

    pub fn named(table: Arc<StrategyTable>, name: &str) -> Self {
        Self {
            table,
            name: name.to_string(),
        }
    }

    pub fn table(&self) -> &StrategyTable {
        &self.table
    }

    /// Table category and key for `hand` at this decision point.
    pub fn classify(hand: &Hand, turn: Turn) -> (Category, u8) {
        if turn.can_split && hand.is_pair() {
            (Category::Pairs, hand.cards()[0].score())
        } else if let Some(other) = hand.ace_partner_score() {
            (Category::Ace, other)
        } else {
            (Category::Other, hand.score())
        }
    }
}

impl Policy for TablePolicy {
    fn decide(&self, hand: &Hand, dealer_up: Card, turn: Turn) -> Result<Action, EngineError> {
        let (category, key) = Self::classify(hand, turn);
        self.table.lookup(category, key, dealer_up.score())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
