//! Phases of play and the controller that switches between them.
//!
//! Exactly one phase is active at a time: `Selection` (assemble a hand) or
//! `Battle` (play it out). Input from the presentation layer is routed to
//! the active phase as `InputEvent`s. Switching phases cleans up the
//! departing phase before the next one exists, and hands over whatever the
//! departing phase exported as a `PhasePayload`.

mod controller;
mod selection;

pub use controller::{ActivePhase, PhaseController};
pub use selection::SelectionPhase;

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::Result;

/// Which phase is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseKind {
    Selection,
    Battle,
}

/// State handed from a departing phase to the next one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhasePayload {
    /// The hand the player assembled.
    pub player_hand: Vec<CardId>,

    /// A hand for the opponent. `None` deals the fallback hand.
    pub opponent_hand: Option<Vec<CardId>>,
}

impl PhasePayload {
    #[must_use]
    pub fn new(player_hand: Vec<CardId>) -> Self {
        Self {
            player_hand,
            opponent_hand: None,
        }
    }

    /// Face a specific opponent hand, played front to back.
    #[must_use]
    pub fn against(mut self, opponent_hand: Vec<CardId>) -> Self {
        self.opponent_hand = Some(opponent_hand);
        self
    }
}

/// A discrete input from the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Add an offered card to the hand being assembled.
    AddCard(CardId),
    /// Drop the last card of the hand being assembled.
    RemoveLastCard,
    /// Start (`Some`) or stop (`None`) dragging a card.
    SetHeld(Option<CardId>),
    /// Pointer entered (`Some`) or left (`None`) a card.
    SetHovered(Option<CardId>),
    /// A card began animating toward its slot.
    MotionStarted(CardId),
    /// A card reached its slot.
    MotionFinished(CardId),
    /// The player plays a card.
    PlayCard(CardId),
    /// Continue the battle: next card, then winner, then finish.
    Advance,
}

impl InputEvent {
    /// Variant name, for error reporting.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            InputEvent::AddCard(_) => "AddCard",
            InputEvent::RemoveLastCard => "RemoveLastCard",
            InputEvent::SetHeld(_) => "SetHeld",
            InputEvent::SetHovered(_) => "SetHovered",
            InputEvent::MotionStarted(_) => "MotionStarted",
            InputEvent::MotionFinished(_) => "MotionFinished",
            InputEvent::PlayCard(_) => "PlayCard",
            InputEvent::Advance => "Advance",
        }
    }
}

/// A mode of play.
///
/// ## Contract
///
/// - `export` is a pure read of what the next phase inherits
/// - `cleanup` runs exactly once, right before the phase is discarded
/// - `handle` after `cleanup` panics
pub trait Phase {
    fn kind(&self) -> PhaseKind;

    /// React to one input. Errors leave the phase unchanged.
    fn handle(&mut self, input: InputEvent) -> Result<()>;

    /// State the next phase inherits, if any.
    fn export(&self) -> Option<PhasePayload>;

    /// Release the phase. No input is accepted afterwards.
    fn cleanup(&mut self);

    fn is_cleaned_up(&self) -> bool;
}
