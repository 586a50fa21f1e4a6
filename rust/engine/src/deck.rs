use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_shoe, Card};

/// A shoe of one or more standard decks dealt from the front.
///
/// A fresh deck keeps the deterministic build order until [`Deck::shuffle`]
/// is called explicitly.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    num_decks: u8,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(num_decks: u8, seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_shoe(num_decks),
            position: 0,
            num_decks,
            rng,
        }
    }

    /// Seeds the deck from OS entropy.
    pub fn new(num_decks: u8) -> Self {
        Self::new_with_seed(num_decks, rand::random())
    }

    /// Stacked deck dealing `cards` in the given order. `num_decks` only
    /// affects [`Deck::total`] and [`Deck::refill`].
    pub fn from_cards(cards: Vec<Card>, num_decks: u8, seed: u64) -> Self {
        Self {
            cards,
            position: 0,
            num_decks,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Uniformly permutes the undealt cards. No-op with fewer than two.
    pub fn shuffle(&mut self) {
        let rest = &mut self.cards[self.position..];
        if rest.len() > 1 {
            rest.shuffle(&mut self.rng);
        }
    }

    /// Discards a random prefix of `1..=max(1, len/4)` cards.
    pub fn cut(&mut self) {
        let len = self.remaining();
        if len < 2 {
            return;
        }
        let max = (len / 4).max(1);
        let n = self.rng.random_range(1..=max);
        self.position += n;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    /// Replaces the contents with a freshly shuffled and cut shoe of the
    /// same deck count, continuing this deck's RNG stream.
    pub fn refill(&mut self) {
        self.cards = full_shoe(self.num_decks);
        self.position = 0;
        self.shuffle();
        self.cut();
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// Card count of a full shoe with this deck count.
    pub fn total(&self) -> usize {
        52 * self.num_decks as usize
    }

    pub fn remaining_fraction(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        self.remaining() as f64 / self.total() as f64
    }

    pub fn num_decks(&self) -> u8 {
        self.num_decks
    }

    /// Undealt cards, top first.
    pub fn cards(&self) -> &[Card] {
        &self.cards[self.position..]
    }
}
