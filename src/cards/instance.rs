//! Card instances - runtime card state.
//!
//! A `CardInstance` is one copy of a card in a hand. It starts unowned,
//! is assigned to a side when a lawyer takes it into hand, and is marked
//! played once its effect has resolved.
//!
//! Ownership is write-once: assigning a different owner to an owned card
//! panics. Re-assigning the same owner is accepted.

use serde::{Deserialize, Serialize};

use super::definition::CardId;
use crate::core::Side;

/// A card in a hand.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Reference to the card definition.
    pub card_id: CardId,

    owner: Option<Side>,

    played: bool,
}

impl CardInstance {
    /// Create an unowned, unplayed card.
    #[must_use]
    pub fn new(card_id: CardId) -> Self {
        Self {
            card_id,
            owner: None,
            played: false,
        }
    }

    /// Create a card already owned by `side`.
    #[must_use]
    pub fn owned(card_id: CardId, side: Side) -> Self {
        let mut card = Self::new(card_id);
        card.assign_owner(side);
        card
    }

    #[must_use]
    pub fn owner(&self) -> Option<Side> {
        self.owner
    }

    #[must_use]
    pub fn is_played(&self) -> bool {
        self.played
    }

    /// Assign the card to a side.
    ///
    /// Panics if the card already belongs to the other side.
    pub fn assign_owner(&mut self, side: Side) {
        if let Some(current) = self.owner {
            assert_eq!(
                current, side,
                "{} already belongs to {}",
                self.card_id, current
            );
        }
        self.owner = Some(side);
    }

    /// Mark the card as played.
    ///
    /// Panics if it was played before; a played card never returns to a hand.
    pub fn mark_played(&mut self) {
        assert!(!self.played, "{} was already played", self.card_id);
        self.played = true;
    }
}
