//! Battle orchestration.
//!
//! A battle pits two lawyers against each other. Cards are played one at a
//! time, either explicitly (`play_card`) or by stepping through the hands in
//! order (`next_card`, alternating sides starting with the Player). The first
//! hand to run out ends play:
//!
//! ```text
//! Active --play--> Active ... --hand empty--> LastCardReached
//!        --declare_winner--> Concluded --finish--> Finished
//! ```
//!
//! Every credibility write goes through one path that also raises the
//! matching notification.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::events::{BattleResult, BattleSnapshot, GameEvent, Listeners, SharedListener};
use super::lawyer::Lawyer;
use crate::cards::{CardId, CardRegistry};
use crate::core::{BattleConfig, GameError, Result, Side, SideMap};
use crate::hand::{calculate_card_positions, CardPosition, LayoutConfig, Vec2};
use crate::phase::{InputEvent, Phase, PhaseKind, PhasePayload};

/// Where a battle is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleState {
    /// Cards may be played.
    Active,
    /// A hand ran out; waiting for the winner to be declared.
    LastCardReached,
    /// Winner declared; waiting to finish.
    Concluded,
    /// Terminal.
    Finished,
}

/// A battle between the Player and the Opponent.
#[derive(Debug)]
pub struct Battle {
    registry: Rc<CardRegistry>,
    lawyers: SideMap<Lawyer>,
    /// Cards each side has played, in order.
    played: SideMap<Vec<CardId>>,
    state: BattleState,
    turn: Side,
    result: Option<BattleResult>,
    listeners: Listeners,
    cleaned_up: bool,
}

impl Battle {
    /// Start a battle. An empty hand is replaced by `config.fallback_hand`.
    ///
    /// Fails if any card is unregistered, or if a side still has no cards.
    pub fn new(
        registry: Rc<CardRegistry>,
        config: &BattleConfig,
        hands: SideMap<Vec<CardId>>,
    ) -> Result<Self> {
        let hands = Self::resolve_hands(&registry, config, &hands)?;
        Ok(Self::from_resolved(registry, config.starting_credibility, &hands))
    }

    /// Both sides get the fallback hand.
    pub fn with_fallback(registry: Rc<CardRegistry>, config: &BattleConfig) -> Result<Self> {
        Self::new(registry, config, SideMap::default())
    }

    /// Substitute the fallback for empty hands and check every card exists.
    pub(crate) fn resolve_hands(
        registry: &CardRegistry,
        config: &BattleConfig,
        hands: &SideMap<Vec<CardId>>,
    ) -> Result<SideMap<Vec<CardId>>> {
        let hands = hands.map(|side, hand| {
            if hand.is_empty() {
                debug!(%side, "no hand supplied, using fallback");
                config.fallback_hand.clone()
            } else {
                hand.clone()
            }
        });

        for (_, hand) in hands.iter() {
            if hand.is_empty() {
                return Err(GameError::Bounds { index: 0, len: 0 });
            }
            if let Some(unknown) = hand.iter().find(|id| !registry.contains(**id)) {
                return Err(GameError::UnknownCard(*unknown));
            }
        }
        Ok(hands)
    }

    /// Build from hands already passed through `resolve_hands`.
    pub(crate) fn from_resolved(
        registry: Rc<CardRegistry>,
        starting_credibility: i64,
        hands: &SideMap<Vec<CardId>>,
    ) -> Self {
        let lawyers = SideMap::new(|side| {
            Lawyer::for_side(side, starting_credibility, hands[side].iter().copied())
        });

        Self {
            registry,
            lawyers,
            played: SideMap::default(),
            state: BattleState::Active,
            turn: Side::Player,
            result: None,
            listeners: Listeners::new(),
            cleaned_up: false,
        }
    }

    /// Register a listener for this battle's notifications.
    pub fn subscribe(&mut self, listener: SharedListener) {
        self.listeners.subscribe(listener);
    }

    #[must_use]
    pub fn state(&self) -> BattleState {
        self.state
    }

    /// Side whose card `next_card` plays.
    #[must_use]
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// The declared result, once concluded.
    #[must_use]
    pub fn result(&self) -> Option<BattleResult> {
        self.result
    }

    #[must_use]
    pub fn lawyer(&self, side: Side) -> &Lawyer {
        &self.lawyers[side]
    }

    #[must_use]
    pub fn credibility(&self, side: Side) -> i64 {
        self.lawyers[side].credibility()
    }

    #[must_use]
    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot {
            credibility: self.lawyers.map(|_, l| l.credibility()),
            hand_sizes: self.lawyers.map(|_, l| l.hand().len()),
        }
    }

    /// Play `card_id` from `side`'s hand.
    ///
    /// Emits the card's credibility changes, then `PlayCard`, then `LastCard`
    /// if the hand is now empty. On error the battle is unchanged.
    pub fn play_card(&mut self, card_id: CardId, side: Side) -> Result<()> {
        self.assert_live();
        if self.state != BattleState::Active {
            warn!(%card_id, %side, state = ?self.state, "play rejected");
            return Err(GameError::NotAccepting(self.state));
        }

        let played = self.lawyers[side].play(card_id, &self.registry)?;
        self.played[side].push(card_id);
        debug!(%card_id, %side, changes = played.changes.len(), "card played");

        for change in &played.changes {
            self.apply_credibility(change.source, change.value, change.target);
        }

        self.listeners.emit(&GameEvent::PlayCard {
            card_id,
            side,
            context: self.snapshot(),
        });
        self.turn = side.opponent();

        if self.lawyers[side].hand().is_empty() {
            self.state = BattleState::LastCardReached;
            info!(%side, "hand exhausted");
            self.listeners.emit(&GameEvent::LastCard);
        }
        Ok(())
    }

    /// Apply a credibility delta to `target` on behalf of `source`.
    ///
    /// Returns the (from, to) values. Saturates at the `i64` limits. Only
    /// an Active battle accepts changes.
    pub fn modify_credibility(&mut self, source: Side, value: i64, target: Side) -> Result<(i64, i64)> {
        self.assert_live();
        if self.state != BattleState::Active {
            warn!(%source, %target, state = ?self.state, "credibility change rejected");
            return Err(GameError::NotAccepting(self.state));
        }
        Ok(self.apply_credibility(source, value, target))
    }

    fn apply_credibility(&mut self, source: Side, value: i64, target: Side) -> (i64, i64) {
        let lawyer = &mut self.lawyers[target];
        let from = lawyer.credibility();
        let to = from.saturating_add(value);
        lawyer.set_credibility(to);
        lawyer.update_credibility(from, to);
        debug!(%source, %target, from, to, "credibility changed");

        self.listeners.emit(&GameEvent::CredibilityChange { side: target, from, to });
        (from, to)
    }

    /// Play the front card of the side whose turn it is.
    pub fn next_card(&mut self) -> Result<CardId> {
        self.assert_live();
        if self.state != BattleState::Active {
            return Err(GameError::NotAccepting(self.state));
        }
        let side = self.turn;
        let card_id = self.lawyers[side]
            .hand()
            .first()
            .map(|card| card.card_id)
            .ok_or(GameError::Bounds { index: 0, len: 0 })?;

        self.listeners.emit(&GameEvent::NextCard);
        self.play_card(card_id, side)?;
        Ok(card_id)
    }

    /// Compare credibility and announce the result.
    ///
    /// Strictly higher credibility wins; a tie is a draw.
    pub fn declare_winner(&mut self) -> Result<BattleResult> {
        self.assert_live();
        if self.state != BattleState::LastCardReached {
            return Err(GameError::NotAccepting(self.state));
        }
        let result = BattleResult::from_credibility(&self.lawyers.map(|_, l| l.credibility()));
        self.result = Some(result);
        self.state = BattleState::Concluded;
        info!(%result, "winner declared");

        self.listeners.emit(&GameEvent::DeclareWinner(result));
        Ok(result)
    }

    /// Signal that the battle may be torn down.
    pub fn finish(&mut self) -> Result<()> {
        self.assert_live();
        if self.state != BattleState::Concluded {
            return Err(GameError::NotAccepting(self.state));
        }
        self.state = BattleState::Finished;
        self.listeners.emit(&GameEvent::FinishBattle);
        Ok(())
    }

    /// Take the next step for the current state.
    pub fn advance(&mut self) -> Result<()> {
        match self.state {
            BattleState::Active => self.next_card().map(|_| ()),
            BattleState::LastCardReached => self.declare_winner().map(|_| ()),
            BattleState::Concluded => self.finish(),
            BattleState::Finished => Err(GameError::NotAccepting(self.state)),
        }
    }

    /// Start or stop dragging a card in `side`'s hand.
    pub fn set_held(&mut self, side: Side, card_id: Option<CardId>) -> Result<()> {
        self.assert_live();
        let (hand, interaction) = self.lawyers[side].hand_and_interaction();
        interaction.set_held(hand, card_id)?;
        interaction.apply_reorder(hand);
        Ok(())
    }

    /// Set or clear the hovered card in `side`'s hand.
    pub fn set_hovered(&mut self, side: Side, card_id: Option<CardId>) -> Result<()> {
        self.assert_live();
        let (hand, interaction) = self.lawyers[side].hand_and_interaction();
        interaction.set_hovered(hand, card_id)?;
        interaction.apply_reorder(hand);
        Ok(())
    }

    /// Animation bookkeeping for a card in `side`'s hand.
    pub fn set_moving(&mut self, side: Side, card_id: CardId, moving: bool) -> Result<()> {
        self.assert_live();
        let (hand, interaction) = self.lawyers[side].hand_and_interaction();
        if moving {
            interaction.begin_motion(hand, card_id)?;
        } else {
            interaction.end_motion(card_id);
            interaction.apply_reorder(hand);
        }
        Ok(())
    }

    /// Fan positions for `side`'s current hand.
    #[must_use]
    pub fn layout(&self, side: Side, config: &LayoutConfig, anchor: Vec2) -> Vec<CardPosition> {
        let lawyer = &self.lawyers[side];
        calculate_card_positions(lawyer.hand().len(), config, anchor, lawyer.interaction().is_holding())
    }

    /// `side`'s hand as dealt, in play order: played cards first, then
    /// whatever is left.
    #[must_use]
    pub fn hand_order(&self, side: Side) -> Vec<CardId> {
        let mut cards = self.played[side].clone();
        cards.extend(self.lawyers[side].hand().ids());
        cards
    }

    fn assert_live(&self) {
        assert!(!self.cleaned_up, "battle received input after cleanup");
    }
}

impl Phase for Battle {
    fn kind(&self) -> PhaseKind {
        PhaseKind::Battle
    }

    /// Pointer input acts on the Player's hand; plays are the Player's.
    fn handle(&mut self, input: InputEvent) -> Result<()> {
        self.assert_live();
        match input {
            InputEvent::PlayCard(card_id) => self.play_card(card_id, Side::Player),
            InputEvent::SetHeld(card_id) => self.set_held(Side::Player, card_id),
            InputEvent::SetHovered(card_id) => self.set_hovered(Side::Player, card_id),
            InputEvent::MotionStarted(card_id) => self.set_moving(Side::Player, card_id, true),
            InputEvent::MotionFinished(card_id) => self.set_moving(Side::Player, card_id, false),
            InputEvent::Advance => self.advance(),
            InputEvent::AddCard(_) | InputEvent::RemoveLastCard => Err(GameError::UnsupportedInput {
                phase: PhaseKind::Battle,
                input: input.name(),
            }),
        }
    }

    /// A battle hands nothing on; the next phase starts from its own inputs.
    fn export(&self) -> Option<PhasePayload> {
        None
    }

    fn cleanup(&mut self) {
        self.assert_live();
        self.cleaned_up = true;
        self.listeners = Listeners::new();
    }

    fn is_cleaned_up(&self) -> bool {
        self.cleaned_up
    }
}
