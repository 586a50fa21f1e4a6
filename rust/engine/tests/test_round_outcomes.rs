use bjsim_engine::cards::{Card, Rank as R, Suit as S};
use bjsim_engine::deck::Deck;
use bjsim_engine::errors::EngineError;
use bjsim_engine::hand::Hand;
use bjsim_engine::policy::{Action, DealerPolicy, Policy, Turn};
use bjsim_engine::round::{Round, RoundReport};
use bjsim_engine::rules::{HandOutcome, Outcome};

fn c(r: R) -> Card {
    Card::new(S::Hearts, r)
}

fn hand(ranks: &[R], wager: f64) -> Hand {
    let cards: Vec<Card> = ranks.iter().map(|&r| c(r)).collect();
    Hand::with_cards(&cards, wager)
}

fn stacked(ranks: &[R]) -> Deck {
    Deck::from_cards(ranks.iter().map(|&r| c(r)).collect(), 1, 0)
}

/// Splits any pair it may split, otherwise stands.
struct SplitThenStand;

impl Policy for SplitThenStand {
    fn decide(&self, hand: &Hand, _up: Card, turn: Turn) -> Result<Action, EngineError> {
        if turn.can_split && hand.is_pair() {
            Ok(Action::Split)
        } else {
            Ok(Action::Stand)
        }
    }

    fn name(&self) -> &str {
        "split-then-stand"
    }
}

fn resolve(deck: &mut Deck, player: &[R], dealer: &[R]) -> RoundReport {
    Round::new(deck, &SplitThenStand, &DealerPolicy, 5.0)
        .resolve(hand(player, 5.0), hand(dealer, 0.0))
        .expect("round should settle")
}

#[test]
fn player_natural_wins_with_bonus_and_no_play() {
    let mut deck = stacked(&[R::Two, R::Three]);
    let report = resolve(&mut deck, &[R::Ten, R::Ace], &[R::Ten, R::Eight]);
    assert!(report.initial_blackjack);
    assert_eq!(
        report.outcomes,
        vec![HandOutcome { result: Outcome::Win, earnings: 7.5 }]
    );
    assert_eq!(deck.remaining(), 2, "no cards dealt after a natural");
}

#[test]
fn both_naturals_tie() {
    let mut deck = stacked(&[R::Two]);
    let report = resolve(&mut deck, &[R::Ten, R::Ace], &[R::Ten, R::Ace]);
    assert_eq!(
        report.outcomes,
        vec![HandOutcome { result: Outcome::Tie, earnings: 0.0 }]
    );
}

#[test]
fn dealer_natural_loses_the_wager() {
    let mut deck = stacked(&[R::Two]);
    let report = resolve(&mut deck, &[R::Ten, R::Eight], &[R::King, R::Ace]);
    assert_eq!(
        report.outcomes,
        vec![HandOutcome { result: Outcome::Loss, earnings: -5.0 }]
    );
}

#[test]
fn dealer_bust_pays_even_money() {
    let mut deck = stacked(&[R::King]);
    let report = resolve(&mut deck, &[R::Ten, R::Eight], &[R::Ten, R::Six]);
    assert!(report.dealer_hand.is_bust());
    assert_eq!(
        report.outcomes,
        vec![HandOutcome { result: Outcome::Win, earnings: 5.0 }]
    );
}

#[test]
fn split_produces_one_outcome_per_hand() {
    // split cards: 3 to the first eight, ten to the second
    let mut deck = stacked(&[R::Three, R::Ten]);
    let report = resolve(&mut deck, &[R::Eight, R::Eight], &[R::Ten, R::Seven]);
    assert_eq!(report.player_hands.len(), 2);
    assert_eq!(report.player_hands[0].score(), 11);
    assert_eq!(report.player_hands[1].score(), 18);
    assert_eq!(
        report.outcomes,
        vec![
            HandOutcome { result: Outcome::Loss, earnings: -5.0 },
            HandOutcome { result: Outcome::Win, earnings: 5.0 },
        ]
    );
    let stats = report.stats();
    assert_eq!(stats.hands_played, 2);
    assert_eq!(stats.earnings, 0.0);
}

#[test]
fn dealer_plays_once_for_all_split_hands() {
    let mut deck = stacked(&[R::Three, R::Ten, R::Five, R::Nine]);
    let report = resolve(&mut deck, &[R::Eight, R::Eight], &[R::Ten, R::Six]);
    // dealer 16 draws the five and stands on 21; the nine is never dealt
    assert_eq!(report.dealer_hand.len(), 3);
    assert_eq!(report.dealer_hand.score(), 21);
    assert_eq!(deck.remaining(), 1);
    assert!(report.outcomes.iter().all(|o| o.result == Outcome::Loss));
}

#[test]
fn split_aces_take_one_card_each_and_natural_pays_bonus() {
    let mut deck = stacked(&[R::King, R::Five, R::Two]);
    let report = resolve(&mut deck, &[R::Ace, R::Ace], &[R::Ten, R::Seven]);
    assert_eq!(report.player_hands.len(), 2);
    assert!(report.player_hands.iter().all(|h| h.len() == 2));
    assert_eq!(
        report.outcomes,
        vec![
            HandOutcome { result: Outcome::Win, earnings: 7.5 },
            HandOutcome { result: Outcome::Loss, earnings: -5.0 },
        ]
    );
    assert_eq!(report.earnings(), 2.5);
}

#[test]
fn dealer_needs_two_cards() {
    let mut deck = stacked(&[R::Two]);
    let err = Round::new(&mut deck, &SplitThenStand, &DealerPolicy, 5.0)
        .resolve(hand(&[R::Ten, R::Two], 5.0), hand(&[R::Ten], 0.0))
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidConfiguration(_)));
}
