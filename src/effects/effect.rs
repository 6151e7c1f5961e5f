//! Effect definitions.
//!
//! Every card's behavior is one `Effect` value. The set of effects is closed:
//! adding a new kind means adding a variant here and an arm in the resolver,
//! and the compiler points at every match that needs updating.

use serde::{Deserialize, Serialize};

/// What a card does when played.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Change a lawyer's credibility by `value`.
    /// `on_self` targets the card's owner, otherwise the other side.
    ModifyCredibility { value: i64, on_self: bool },

    /// Execute multiple effects in sequence.
    Batch(Vec<Effect>),

    /// Nothing happens.
    #[default]
    NoOp,
}

impl Effect {
    /// Change credibility of the owner (`on_self`) or of the other side.
    #[must_use]
    pub fn modify_credibility(value: i64, on_self: bool) -> Self {
        Self::ModifyCredibility { value, on_self }
    }

    /// Create a batch of effects.
    #[must_use]
    pub fn batch(effects: impl IntoIterator<Item = Effect>) -> Self {
        Self::Batch(effects.into_iter().collect())
    }

    /// Human-readable rules text.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Effect::ModifyCredibility { value, on_self } => {
                let who = if *on_self { "You" } else { "Opponent" };
                let verb = match (*on_self, *value >= 0) {
                    (true, true) => "gain",
                    (true, false) => "lose",
                    (false, true) => "gains",
                    (false, false) => "loses",
                };
                format!("{} {} {} credibility", who, verb, value.unsigned_abs())
            }
            Effect::Batch(effects) if effects.is_empty() => Effect::NoOp.describe(),
            Effect::Batch(effects) => effects
                .iter()
                .map(Effect::describe)
                .collect::<Vec<_>>()
                .join(", then "),
            Effect::NoOp => "No description available".to_string(),
        }
    }
}
