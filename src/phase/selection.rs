//! Selection phase: assemble a hand from an offer.
//!
//! The phase deals a fixed number of distinct cards from the registry. The
//! player adds offered cards to their hand one at a time (up to the hand
//! size), can drop the last one, and can drag cards into a new order. The
//! order matters: the battle plays cards front to back.

use std::rc::Rc;

use tracing::{debug, warn};

use super::{InputEvent, Phase, PhaseKind, PhasePayload};
use crate::cards::{CardId, CardInstance, CardRegistry};
use crate::core::{GameError, GameRng, Result, SelectionConfig};
use crate::hand::{calculate_card_positions, CardPosition, Hand, HandInteraction, LayoutConfig, Vec2};

/// Hand assembly.
#[derive(Debug)]
pub struct SelectionPhase {
    registry: Rc<CardRegistry>,
    offered: Vec<CardId>,
    hand: Hand,
    interaction: HandInteraction,
    hand_size: usize,
    cleaned_up: bool,
}

impl SelectionPhase {
    /// Deal an offer using `config.seed`.
    pub fn new(registry: Rc<CardRegistry>, config: &SelectionConfig) -> Self {
        Self::with_rng(registry, config, &mut GameRng::new(config.seed))
    }

    /// Deal an offer with a caller-provided RNG.
    pub fn with_rng(registry: Rc<CardRegistry>, config: &SelectionConfig, rng: &mut GameRng) -> Self {
        let offered = rng.deal(registry.ids(), config.offer_count);
        debug!(offered = offered.len(), seed = rng.seed(), "selection dealt");
        Self {
            registry,
            offered,
            hand: Hand::new(),
            interaction: HandInteraction::new(),
            hand_size: config.hand_size,
            cleaned_up: false,
        }
    }

    /// Cards the player may pick from.
    #[must_use]
    pub fn offered(&self) -> &[CardId] {
        &self.offered
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[must_use]
    pub fn interaction(&self) -> &HandInteraction {
        &self.interaction
    }

    /// Printed cost of the assembled hand.
    #[must_use]
    pub fn total_cost(&self) -> i64 {
        self.hand.total_cost(&self.registry)
    }

    /// Add an offered card to the end of the hand.
    pub fn add_card(&mut self, card_id: CardId) -> Result<()> {
        self.assert_live();
        if !self.offered.contains(&card_id) {
            warn!(%card_id, "card not offered");
            return Err(GameError::NotOffered(card_id));
        }
        if self.hand.contains(card_id) {
            return Err(GameError::AlreadyInHand(card_id));
        }
        if self.hand.len() >= self.hand_size {
            return Err(GameError::HandFull { limit: self.hand_size });
        }
        self.hand.add(CardInstance::new(card_id));
        Ok(())
    }

    /// Drop the last card of the hand.
    pub fn remove_last_card(&mut self) -> Result<CardId> {
        self.assert_live();
        let card = self.hand.remove_last()?;
        self.interaction.forget(card.card_id);
        Ok(card.card_id)
    }

    pub fn set_held(&mut self, card_id: Option<CardId>) -> Result<()> {
        self.assert_live();
        self.interaction.set_held(&self.hand, card_id)?;
        self.interaction.apply_reorder(&mut self.hand);
        Ok(())
    }

    pub fn set_hovered(&mut self, card_id: Option<CardId>) -> Result<()> {
        self.assert_live();
        self.interaction.set_hovered(&self.hand, card_id)?;
        self.interaction.apply_reorder(&mut self.hand);
        Ok(())
    }

    pub fn set_moving(&mut self, card_id: CardId, moving: bool) -> Result<()> {
        self.assert_live();
        if moving {
            self.interaction.begin_motion(&self.hand, card_id)?;
        } else {
            self.interaction.end_motion(card_id);
            self.interaction.apply_reorder(&mut self.hand);
        }
        Ok(())
    }

    /// Fan positions for the hand being assembled.
    #[must_use]
    pub fn layout(&self, config: &LayoutConfig, anchor: Vec2) -> Vec<CardPosition> {
        calculate_card_positions(self.hand.len(), config, anchor, self.interaction.is_holding())
    }

    fn assert_live(&self) {
        assert!(!self.cleaned_up, "selection received input after cleanup");
    }
}

impl Phase for SelectionPhase {
    fn kind(&self) -> PhaseKind {
        PhaseKind::Selection
    }

    fn handle(&mut self, input: InputEvent) -> Result<()> {
        self.assert_live();
        match input {
            InputEvent::AddCard(card_id) => self.add_card(card_id),
            InputEvent::RemoveLastCard => self.remove_last_card().map(|_| ()),
            InputEvent::SetHeld(card_id) => self.set_held(card_id),
            InputEvent::SetHovered(card_id) => self.set_hovered(card_id),
            InputEvent::MotionStarted(card_id) => self.set_moving(card_id, true),
            InputEvent::MotionFinished(card_id) => self.set_moving(card_id, false),
            InputEvent::PlayCard(_) | InputEvent::Advance => Err(GameError::UnsupportedInput {
                phase: PhaseKind::Selection,
                input: input.name(),
            }),
        }
    }

    /// The assembled hand, in the order the battle will play it.
    fn export(&self) -> Option<PhasePayload> {
        Some(PhasePayload::new(self.hand.ids()))
    }

    fn cleanup(&mut self) {
        self.assert_live();
        self.cleaned_up = true;
    }

    fn is_cleaned_up(&self) -> bool {
        self.cleaned_up
    }
}
