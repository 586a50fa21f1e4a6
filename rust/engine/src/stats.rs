use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::rules::{HandOutcome, Outcome};

/// Per-worker accumulator of settled hands.
///
/// Merging is a field-wise sum, so partial stats from any partitioning of
/// the work fold into the same totals regardless of order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchStats {
    pub ties: u64,
    pub wins: u64,
    pub losses: u64,
    pub hands_played: u64,
    pub earnings: f64,
}

impl BatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &HandOutcome) {
        match outcome.result {
            Outcome::Tie => self.ties += 1,
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
        }
        self.hands_played += 1;
        self.earnings += outcome.earnings;
    }

    pub fn merge(&mut self, other: &BatchStats) {
        self.ties += other.ties;
        self.wins += other.wins;
        self.losses += other.losses;
        self.hands_played += other.hands_played;
        self.earnings += other.earnings;
    }

    fn pct(&self, count: u64) -> f64 {
        if self.hands_played == 0 {
            0.0
        } else {
            (count as f64 / self.hands_played as f64) * 100.0
        }
    }

    pub fn win_pct(&self) -> f64 {
        self.pct(self.wins)
    }

    pub fn tie_pct(&self) -> f64 {
        self.pct(self.ties)
    }

    pub fn loss_pct(&self) -> f64 {
        self.pct(self.losses)
    }

    pub fn earnings_per_hand(&self) -> f64 {
        if self.hands_played == 0 {
            0.0
        } else {
            self.earnings / self.hands_played as f64
        }
    }
}

impl<'a> FromIterator<&'a HandOutcome> for BatchStats {
    fn from_iter<I: IntoIterator<Item = &'a HandOutcome>>(iter: I) -> Self {
        let mut stats = BatchStats::new();
        for o in iter {
            stats.record(o);
        }
        stats
    }
}

impl AddAssign for BatchStats {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}

impl Add for BatchStats {
    type Output = BatchStats;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.merge(&rhs);
        self
    }
}

impl std::iter::Sum for BatchStats {
    fn sum<I: Iterator<Item = BatchStats>>(iter: I) -> Self {
        iter.fold(BatchStats::new(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(ties: u64, wins: u64, losses: u64, earnings: f64) -> BatchStats {
        BatchStats {
            ties,
            wins,
            losses,
            hands_played: ties + wins + losses,
            earnings,
        }
    }

    #[test]
    fn test_merge_is_order_independent() {
        let a = stats(1, 4, 2, 12.5);
        let b = stats(0, 3, 7, -20.0);
        let c = stats(5, 1, 1, 7.5);

        let abc = (a + b) + c;
        let cba = c + (b + a);
        let bac: BatchStats = [b, a, c].into_iter().sum();
        assert_eq!(abc, cba);
        assert_eq!(abc, bac);
        assert_eq!(abc.hands_played, 24);
        assert_eq!(abc.earnings, 0.0);
    }

    #[test]
    fn test_record_counts_every_outcome() {
        let outcomes = [
            HandOutcome { result: Outcome::Win, earnings: 7.5 },
            HandOutcome { result: Outcome::Loss, earnings: -5.0 },
            HandOutcome { result: Outcome::Tie, earnings: 0.0 },
        ];
        let s: BatchStats = outcomes.iter().collect();
        assert_eq!(s, stats(1, 1, 1, 2.5));
    }

    #[test]
    fn test_percentages_with_no_hands() {
        let s = BatchStats::new();
        assert_eq!(s.win_pct(), 0.0);
        assert_eq!(s.earnings_per_hand(), 0.0);
    }

    #[test]
    fn test_percentages() {
        let s = stats(1, 2, 1, 0.0);
        assert_eq!(s.win_pct(), 50.0);
        assert_eq!(s.tie_pct(), 25.0);
        assert_eq!(s.loss_pct(), 25.0);
    }
}
