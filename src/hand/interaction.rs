//! Drag-and-hover reordering.
//!
//! At most one card is held (being dragged) and at most one is hovered.
//! When a held card passes over a different card, the two trade places,
//! unless either of them is still animating. The presentation reports
//! animations through `begin_motion` / `end_motion`.
//!
//! After a swap the displaced card is flagged as moving: it has to glide
//! to its new slot before it can be swapped again.

use smallvec::SmallVec;
use tracing::debug;

use super::Hand;
use crate::cards::CardId;
use crate::core::{GameError, Result};

/// Held/hovered/moving state for one hand.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HandInteraction {
    held: Option<CardId>,
    hovered: Option<CardId>,
    moving: SmallVec<[CardId; 4]>,
}

impl HandInteraction {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn held(&self) -> Option<CardId> {
        self.held
    }

    #[must_use]
    pub fn hovered(&self) -> Option<CardId> {
        self.hovered
    }

    /// Is a card being dragged? Widens the layout while true.
    #[must_use]
    pub fn is_holding(&self) -> bool {
        self.held.is_some()
    }

    #[must_use]
    pub fn is_moving(&self, card_id: CardId) -> bool {
        self.moving.contains(&card_id)
    }

    /// Start or stop dragging. The card must be in `hand`.
    pub fn set_held(&mut self, hand: &Hand, card_id: Option<CardId>) -> Result<()> {
        Self::check_in_hand(hand, card_id)?;
        self.held = card_id;
        Ok(())
    }

    /// Set or clear the card under the pointer. The card must be in `hand`.
    pub fn set_hovered(&mut self, hand: &Hand, card_id: Option<CardId>) -> Result<()> {
        Self::check_in_hand(hand, card_id)?;
        self.hovered = card_id;
        Ok(())
    }

    /// A card in `hand` started animating.
    pub fn begin_motion(&mut self, hand: &Hand, card_id: CardId) -> Result<()> {
        Self::check_in_hand(hand, Some(card_id))?;
        self.mark_moving(card_id);
        Ok(())
    }

    /// A card finished animating.
    pub fn end_motion(&mut self, card_id: CardId) {
        self.moving.retain(|id| *id != card_id);
    }

    /// Swap the held card into the hovered card's slot if allowed.
    ///
    /// Returns true when the hand order changed. Never changes the hand's
    /// length or the set of cards in it.
    pub fn apply_reorder(&mut self, hand: &mut Hand) -> bool {
        let (Some(held), Some(hovered)) = (self.held, self.hovered) else {
            return false;
        };
        if held == hovered || self.is_moving(held) || self.is_moving(hovered) {
            return false;
        }
        let (Some(from), Some(to)) = (hand.position(held), hand.position(hovered)) else {
            return false;
        };
        if hand.swap(from, to).is_err() {
            return false;
        }
        debug!(%held, %hovered, from, to, "swapped held card into hovered slot");
        self.mark_moving(hovered);
        true
    }

    /// Drop every reference to a card that left the hand.
    pub fn forget(&mut self, card_id: CardId) {
        if self.held == Some(card_id) {
            self.held = None;
        }
        if self.hovered == Some(card_id) {
            self.hovered = None;
        }
        self.end_motion(card_id);
    }

    fn mark_moving(&mut self, card_id: CardId) {
        if !self.is_moving(card_id) {
            self.moving.push(card_id);
        }
    }

    fn check_in_hand(hand: &Hand, card_id: Option<CardId>) -> Result<()> {
        match card_id {
            Some(id) if !hand.contains(id) => Err(GameError::CardNotFound(id)),
            _ => Ok(()),
        }
    }
}
