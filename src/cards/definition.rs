//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: its name,
//! its cost and the effect it has when played. Which lawyer holds a copy
//! and whether that copy has been played is tracked by `CardInstance`.

use serde::{Deserialize, Serialize};

use crate::effects::Effect;

/// Unique identifier for a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use legal_brawl::cards::{CardDefinition, CardId};
/// use legal_brawl::effects::Effect;
///
/// let objection = CardDefinition::new(CardId::new(1), "Objection!", 2)
///     .with_effect(Effect::modify_credibility(-3, false));
///
/// assert_eq!(objection.cost, 2);
/// assert_eq!(objection.description(), "Opponent loses 3 credibility");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Printed cost. Informational only; no rule spends it.
    #[serde(default)]
    pub cost: i64,

    /// What happens when the card is played.
    #[serde(default)]
    pub effect: Effect,

    /// Flavor/rules text override. Falls back to the effect's own text.
    #[serde(default)]
    pub text: Option<String>,
}

impl CardDefinition {
    /// Create a card with no effect.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, cost: i64) -> Self {
        Self {
            id,
            name: name.into(),
            cost,
            effect: Effect::NoOp,
            text: None,
        }
    }

    /// Set the effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = effect;
        self
    }

    /// Set the rules text (builder pattern).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Rules text shown to the player.
    #[must_use]
    pub fn description(&self) -> String {
        match &self.text {
            Some(text) => text.clone(),
            None => self.effect.describe(),
        }
    }
}
