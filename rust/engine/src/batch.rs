use tracing::debug;

use crate::deck::Deck;
use crate::errors::EngineError;
use crate::policy::Policy;
use crate::round::{Round, RoundReport};
use crate::stats::BatchStats;

/// Plays a run of independent rounds from one deck, replacing the deck
/// whenever it falls below the shuffle threshold.
pub struct BatchRunner<'a> {
    deck: Deck,
    player: &'a dyn Policy,
    dealer: &'a dyn Policy,
    shuffle_threshold: f64,
    wager: f64,
}

impl<'a> BatchRunner<'a> {
    /// `deck` is used as given; callers normally pass a shuffled and cut one.
    pub fn new(
        deck: Deck,
        player: &'a dyn Policy,
        dealer: &'a dyn Policy,
        shuffle_threshold: f64,
        wager: f64,
    ) -> Self {
        Self {
            deck,
            player,
            dealer,
            shuffle_threshold,
            wager,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Plays a single round, replacing the deck first if it runs low.
    pub fn play_round(&mut self) -> Result<RoundReport, EngineError> {
        if self.deck.remaining_fraction() < self.shuffle_threshold {
            debug!(
                remaining = self.deck.remaining(),
                total = self.deck.total(),
                "replacing deck"
            );
            self.deck.refill();
        }
        Round::new(&mut self.deck, self.player, self.dealer, self.wager).play()
    }

    /// Plays `rounds` rounds and sums their outcomes.
    pub fn run(&mut self, rounds: u64) -> Result<BatchStats, EngineError> {
        let mut stats = BatchStats::new();
        for _ in 0..rounds {
            let report = self.play_round()?;
            stats += report.stats();
        }
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::DealerPolicy;

    #[test]
    fn test_every_round_settles_at_least_one_hand() {
        let mut deck = Deck::new_with_seed(2, 99);
        deck.shuffle();
        let mut runner = BatchRunner::new(deck, &DealerPolicy, &DealerPolicy, 0.5, 5.0);
        let stats = runner.run(500).unwrap();
        // The dealer policy never splits, so one hand per round.
        assert_eq!(stats.hands_played, 500);
        assert_eq!(stats.wins + stats.ties + stats.losses, 500);
    }

    #[test]
    fn test_deck_is_replaced_below_threshold() {
        let mut deck = Deck::new_with_seed(1, 3);
        deck.shuffle();
        let mut runner = BatchRunner::new(deck, &DealerPolicy, &DealerPolicy, 0.75, 5.0);
        for _ in 0..200 {
            runner.play_round().unwrap();
            assert!(runner.deck().remaining() > 0);
        }
    }

    #[test]
    fn test_same_seed_same_stats() {
        let run = |seed| {
            let mut deck = Deck::new_with_seed(1, seed);
            deck.shuffle();
            deck.cut();
            BatchRunner::new(deck, &DealerPolicy, &DealerPolicy, 0.5, 5.0)
                .run(300)
                .unwrap()
        };
        assert_eq!(run(11), run(11));
    }
}
