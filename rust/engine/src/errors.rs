use thiserror::Error;

use crate::policy::Action;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("Deck is empty")]
    EmptyDeck,
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("No {category} table entry for key {key} against dealer {dealer}")]
    MissingTableEntry {
        category: &'static str,
        key: u8,
        dealer: u8,
    },
    #[error("Policy {policy} chose {action:?} which is not allowed here")]
    IllegalAction { policy: String, action: Action },
    #[error("Simulation worker failed: {0}")]
    WorkerFailed(String),
}
