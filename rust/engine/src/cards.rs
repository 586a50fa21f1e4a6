use serde::{Deserialize, Serialize};

/// Represents one of the four suits in a standard 52-card deck.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit (♠)
    Spades,
    /// Clubs suit (♣)
    Clubs,
    /// Hearts suit (♥)
    Hearts,
    /// Diamonds suit (♦)
    Diamonds,
}

/// Represents the rank (face value) of a playing card from Ace through King.
/// Blackjack scoring is provided by [`Rank::score`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (scores 11, demoted to 1 by hand scoring when needed)
    Ace = 1,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (scores 10)
    Jack,
    /// Queen (scores 10)
    Queen,
    /// King (scores 10)
    King,
}

impl Rank {
    /// Blackjack value of the rank: ace 11, face cards 10, otherwise the pip value.
    pub fn score(self) -> u8 {
        match self {
            Rank::Ace => 11,
            Rank::Jack | Rank::Queen | Rank::King => 10,
            pip => pip as u8,
        }
    }

    pub fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }
}

/// Represents a single playing card with a suit and rank.
/// Cards are immutable values; hands and decks hold them by copy.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card
    pub suit: Suit,
    /// The rank of the card (Ace through King)
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub fn score(&self) -> u8 {
        self.rank.score()
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spades, Suit::Clubs, Suit::Hearts, Suit::Diamonds]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

/// Builds `num_decks` standard decks in suit-major, rank-minor order.
pub fn full_shoe(num_decks: u8) -> Vec<Card> {
    let mut v = Vec::with_capacity(52 * num_decks as usize);
    for _ in 0..num_decks {
        for &s in &all_suits() {
            for &r in &all_ranks() {
                v.push(Card { suit: s, rank: r });
            }
        }
    }
    v
}
