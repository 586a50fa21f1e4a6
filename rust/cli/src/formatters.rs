//! Card, hand, and report formatters for terminal display.
//!
//! Pure functions turning engine values into text. Cards use Unicode suit
//! symbols with an ASCII fallback for terminals that cannot render them.
//!
//! - **Unicode mode**: Uses ♥ ♦ ♣ ♠ symbols
//! - **ASCII mode**: Uses h d c s letters
//!
//! ## Example
//!
//! ```rust
//! use bjsim_engine::cards::{Card, Rank, Suit};
//! use bjsim_cli::formatters::{format_card, format_cards};
//!
//! let ace_spades = Card::new(Suit::Spades, Rank::Ace);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_cards(&[ace_spades]).starts_with("[A"));
//! ```

use std::io::Write;

use bjsim_engine::cards::{Card, Rank, Suit};
use bjsim_engine::hand::Hand;
use bjsim_engine::round::RoundReport;
use bjsim_engine::rules::Outcome;
use bjsim_engine::sim::SimReport;

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM), or VS Code (VSCODE_INJECTION). On Unix-like systems,
/// assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> &'static str {
    match (supports_unicode(), suit) {
        (true, Suit::Hearts) => "♥",
        (true, Suit::Diamonds) => "♦",
        (true, Suit::Clubs) => "♣",
        (true, Suit::Spades) => "♠",
        (false, Suit::Hearts) => "h",
        (false, Suit::Diamonds) => "d",
        (false, Suit::Clubs) => "c",
        (false, Suit::Spades) => "s",
    }
}

/// Format a Rank as a single character (A, 2-9, T, J, Q, K).
pub fn format_rank(rank: &Rank) -> &'static str {
    match rank {
        Rank::Ace => "A",
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Format cards in bracket notation, e.g. "[A♠ K♥]", or "[]" if empty.
pub fn format_cards(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// Cards followed by the score, e.g. "[A♠ K♥] (21)".
pub fn format_hand(hand: &Hand) -> String {
    format!("{} ({})", format_cards(hand.cards()), hand.score())
}

pub fn format_outcome(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "win",
        Outcome::Tie => "tie",
        Outcome::Loss => "loss",
    }
}

/// Signed money amount with two decimals, e.g. "+7.50" or "-5.00".
pub fn format_money(amount: f64) -> String {
    format!("{:+.2}", amount)
}

/// Writes the detail of a single round: every final hand and its settlement.
pub fn write_round_detail(out: &mut dyn Write, report: &RoundReport) -> std::io::Result<()> {
    if report.initial_blackjack {
        writeln!(out, "Blackjack on the deal")?;
    }
    for (i, (hand, outcome)) in report
        .player_hands
        .iter()
        .zip(&report.outcomes)
        .enumerate()
    {
        writeln!(
            out,
            "Player hand {}: {} wager {:.2} -> {} {}",
            i + 1,
            format_hand(hand),
            hand.wager(),
            format_outcome(outcome.result),
            format_money(outcome.earnings)
        )?;
    }
    writeln!(out, "Dealer hand: {}", format_hand(&report.dealer_hand))?;
    writeln!(out, "Earnings: {}", format_money(report.earnings()))?;
    Ok(())
}

/// Writes the aggregate report of a parallel run.
pub fn write_sim_report(out: &mut dyn Write, report: &SimReport) -> std::io::Result<()> {
    let stats = &report.stats;
    writeln!(out, "Simulations: {}", report.simulations)?;
    writeln!(out, "Workers: {}", report.workers)?;
    writeln!(out, "Simulations/sec: {:.0}", report.simulations_per_sec())?;
    writeln!(
        out,
        "Execution time: {:.3}s",
        report.elapsed.as_secs_f64()
    )?;
    writeln!(out, "Hands played: {}", stats.hands_played)?;
    writeln!(out, "Win: {:.2}%", stats.win_pct())?;
    writeln!(out, "Draw: {:.2}%", stats.tie_pct())?;
    writeln!(out, "Lose: {:.2}%", stats.loss_pct())?;
    writeln!(out, "Total earnings: {}", format_money(stats.earnings))?;
    writeln!(
        out,
        "Expected earnings per simulation: {:+.4}",
        report.earnings_per_simulation()
    )?;
    writeln!(
        out,
        "Expected earnings per hand: {:+.4}",
        report.earnings_per_hand()
    )?;
    Ok(())
}
