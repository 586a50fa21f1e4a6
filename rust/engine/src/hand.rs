use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Highest non-busting score.
pub const BLACKJACK: u8 = 21;

/// Cards held by one participant plus the wager riding on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
    wager: f64,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(4),
            wager: 0.0,
        }
    }

    pub fn with_cards(cards: &[Card], wager: f64) -> Self {
        Self {
            cards: cards.to_vec(),
            wager,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn wager(&self) -> f64 {
        self.wager
    }

    pub fn set_wager(&mut self, wager: f64) {
        self.wager = wager;
    }

    pub fn double_wager(&mut self) {
        self.wager *= 2.0;
    }

    /// Sum of card scores; a single ace counts as 1 instead of 11 when the
    /// naive sum exceeds 21.
    pub fn score(&self) -> u8 {
        let mut total: u8 = 0;
        let mut has_ace = false;
        for c in &self.cards {
            total = total.saturating_add(c.score());
            has_ace |= c.is_ace();
        }
        if has_ace && total > BLACKJACK {
            total -= 10;
        }
        total
    }

    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// Two-card 21.
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.score() == BLACKJACK
    }

    /// Exactly two cards of equal rank.
    pub fn is_pair(&self) -> bool {
        matches!(self.cards.as_slice(), [a, b] if a.rank == b.rank)
    }

    /// For a two-card hand holding an ace, the score of the other card.
    pub fn ace_partner_score(&self) -> Option<u8> {
        match self.cards.as_slice() {
            [a, b] if a.is_ace() => Some(b.score()),
            [a, b] if b.is_ace() => Some(a.score()),
            _ => None,
        }
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}
