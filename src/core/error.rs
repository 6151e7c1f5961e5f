//! Error types.
//!
//! Every recoverable failure in the engine is a `GameError`. Failing calls
//! leave hands, credibility and phase state exactly as they were.
//!
//! Broken invariants (reassigning a lawyer's side, changing a card's owner,
//! delivering input to a phase after its cleanup) are programmer errors and
//! panic instead.

use thiserror::Error;

use crate::battle::BattleState;
use crate::cards::CardId;
use crate::phase::PhaseKind;

/// Recoverable engine error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("{0} is not in the hand")]
    CardNotFound(CardId),

    #[error("index {index} out of bounds for hand of {len}")]
    Bounds { index: usize, len: usize },

    #[error("{0} is not registered")]
    UnknownCard(CardId),

    #[error("battle is not accepting plays ({0:?})")]
    NotAccepting(BattleState),

    #[error("hand is full ({limit} cards)")]
    HandFull { limit: usize },

    #[error("{0} was not offered")]
    NotOffered(CardId),

    #[error("{0} is already in the hand")]
    AlreadyInHand(CardId),

    #[error("{phase:?} phase does not handle {input}")]
    UnsupportedInput { phase: PhaseKind, input: &'static str },
}

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
