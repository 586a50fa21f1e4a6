use serde::Serialize;
use tracing::debug;

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::EngineError;
use crate::hand::Hand;
use crate::policy::{Action, Policy, Turn};
use crate::rules::{compare, settle, HandOutcome, Outcome};
use crate::stats::BatchStats;

/// Wager placed on every opening hand unless configured otherwise.
pub const DEFAULT_WAGER: f64 = 5.0;

/// Where a policy left a hand once it stopped deciding.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayResult {
    /// The hand stood, doubled, or busted
    Done(Hand),
    /// The hand was split into two new hands, each already holding two cards
    Split {
        hands: [Hand; 2],
        /// Split aces take no further cards
        aces: bool,
    },
}

/// Settled round: final hands and one outcome per leaf hand, in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundReport {
    pub player_hands: Vec<Hand>,
    pub dealer_hand: Hand,
    pub outcomes: Vec<HandOutcome>,
    /// The round settled on the opening deal without any play
    pub initial_blackjack: bool,
}

impl RoundReport {
    pub fn stats(&self) -> BatchStats {
        self.outcomes.iter().collect()
    }

    pub fn hands_played(&self) -> usize {
        self.outcomes.len()
    }

    pub fn earnings(&self) -> f64 {
        self.outcomes.iter().map(|o| o.earnings).sum()
    }
}

pub fn deal(deck: &mut Deck) -> Result<Card, EngineError> {
    deck.deal_card().ok_or(EngineError::EmptyDeck)
}

/// Runs `policy` on `hand` until it stands, doubles, busts or splits.
///
/// A double on more than two cards is played as a hit. A split is only
/// honoured for a two-card pair while `turn.can_split` holds; asking for one
/// otherwise is reported as [`EngineError::IllegalAction`].
pub fn play_hand(
    policy: &dyn Policy,
    mut hand: Hand,
    dealer_up: Card,
    deck: &mut Deck,
    turn: Turn,
) -> Result<PlayResult, EngineError> {
    loop {
        if hand.is_bust() {
            return Ok(PlayResult::Done(hand));
        }
        match policy.decide(&hand, dealer_up, turn)? {
            Action::Stand => return Ok(PlayResult::Done(hand)),
            Action::Hit => hand.add_card(deal(deck)?),
            Action::Double if hand.len() == 2 => {
                hand.double_wager();
                hand.add_card(deal(deck)?);
                return Ok(PlayResult::Done(hand));
            }
            Action::Double => hand.add_card(deal(deck)?),
            Action::Split if turn.can_split && hand.is_pair() => {
                let (first, second) = (hand.cards()[0], hand.cards()[1]);
                let left = Hand::with_cards(&[first, deal(deck)?], hand.wager());
                let right = Hand::with_cards(&[second, deal(deck)?], hand.wager());
                return Ok(PlayResult::Split {
                    hands: [left, right],
                    aces: first.is_ace(),
                });
            }
            action @ Action::Split => {
                return Err(EngineError::IllegalAction {
                    policy: policy.name().to_string(),
                    action,
                });
            }
        }
    }
}

/// One hand of play against the dealer.
///
/// The round borrows the shared deck and both policies for its duration and
/// owns every hand it creates.
pub struct Round<'a> {
    deck: &'a mut Deck,
    player: &'a dyn Policy,
    dealer: &'a dyn Policy,
    wager: f64,
}

impl<'a> Round<'a> {
    pub fn new(
        deck: &'a mut Deck,
        player: &'a dyn Policy,
        dealer: &'a dyn Policy,
        wager: f64,
    ) -> Self {
        Self {
            deck,
            player,
            dealer,
            wager,
        }
    }

    /// Deals two cards each, alternating player and dealer, then resolves.
    pub fn play(self) -> Result<RoundReport, EngineError> {
        let mut player_hand = Hand::new();
        let mut dealer_hand = Hand::new();
        for _ in 0..2 {
            player_hand.add_card(deal(self.deck)?);
            dealer_hand.add_card(deal(self.deck)?);
        }
        player_hand.set_wager(self.wager);
        self.resolve(player_hand, dealer_hand)
    }

    /// Plays out already dealt hands. The dealer's second card is the one
    /// visible to the player.
    pub fn resolve(mut self, player_hand: Hand, dealer_hand: Hand) -> Result<RoundReport, EngineError> {
        let dealer_up = match dealer_hand.cards() {
            [_, up, ..] => *up,
            _ => {
                return Err(EngineError::InvalidConfiguration(
                    "dealer hand needs two cards before play".into(),
                ))
            }
        };
        debug!(player = ?player_hand.cards(), dealer = ?dealer_hand.cards(), "initial hands");

        let player_bj = player_hand.is_natural();
        let dealer_bj = dealer_hand.is_natural();
        if player_bj || dealer_bj {
            let result = match (player_bj, dealer_bj) {
                (true, true) => Outcome::Tie,
                (true, false) => Outcome::Win,
                _ => Outcome::Loss,
            };
            let outcome = settle(&player_hand, result, false);
            debug!(?result, "initial blackjack");
            return Ok(RoundReport {
                player_hands: vec![player_hand],
                dealer_hand,
                outcomes: vec![outcome],
                initial_blackjack: true,
            });
        }

        let leaves = self.play_player(player_hand, dealer_up)?;
        let split = leaves.len() > 1;
        debug!(hands = ?leaves.iter().map(Hand::cards).collect::<Vec<_>>(), "player hands after policy");

        // Split naturals and busted hands settle without the dealer.
        let needs_dealer = leaves
            .iter()
            .any(|h| !h.is_bust() && !(split && h.is_natural()));
        let dealer_hand = if needs_dealer {
            self.play_dealer(dealer_hand, dealer_up)?
        } else {
            dealer_hand
        };
        debug!(dealer = ?dealer_hand.cards(), score = dealer_hand.score(), "dealer final hand");
        let dealer_bust = dealer_hand.is_bust();

        let outcomes = leaves
            .iter()
            .map(|hand| {
                if hand.is_bust() {
                    settle(hand, Outcome::Loss, false)
                } else if split && hand.is_natural() {
                    settle(hand, Outcome::Win, false)
                } else {
                    settle(hand, compare(hand, &dealer_hand), dealer_bust)
                }
            })
            .collect();

        Ok(RoundReport {
            player_hands: leaves,
            dealer_hand,
            outcomes,
            initial_blackjack: false,
        })
    }

    fn play_player(&mut self, hand: Hand, dealer_up: Card) -> Result<Vec<Hand>, EngineError> {
        match play_hand(self.player, hand, dealer_up, self.deck, Turn::opening())? {
            PlayResult::Done(hand) => Ok(vec![hand]),
            PlayResult::Split { hands, aces: true } => Ok(hands.into()),
            PlayResult::Split { hands, aces: false } => {
                let mut leaves = Vec::with_capacity(2);
                for sibling in hands {
                    if sibling.is_natural() {
                        leaves.push(sibling);
                        continue;
                    }
                    match play_hand(self.player, sibling, dealer_up, self.deck, Turn::after_split())? {
                        PlayResult::Done(hand) => leaves.push(hand),
                        PlayResult::Split { .. } => {
                            return Err(EngineError::IllegalAction {
                                policy: self.player.name().to_string(),
                                action: Action::Split,
                            });
                        }
                    }
                }
                Ok(leaves)
            }
        }
    }

    fn play_dealer(&mut self, hand: Hand, dealer_up: Card) -> Result<Hand, EngineError> {
        match play_hand(self.dealer, hand, dealer_up, self.deck, Turn::after_split())? {
            PlayResult::Done(hand) => Ok(hand),
            PlayResult::Split { .. } => Err(EngineError::IllegalAction {
                policy: self.dealer.name().to_string(),
                action: Action::Split,
            }),
        }
    }
}
