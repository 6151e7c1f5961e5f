//! Outbound notifications.
//!
//! The core never drives the presentation directly. Everything a renderer
//! needs to know arrives as a `GameEvent`, delivered synchronously to every
//! subscribed `GameListener` in the order the underlying state changed.
//! State is always fully updated before its event goes out.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::{Side, SideMap};
use crate::phase::PhaseKind;

/// Outcome of a battle.
///
/// The side with strictly higher credibility wins; equal credibility is a draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleResult {
    Winner(Side),
    Draw,
}

impl BattleResult {
    /// Decide the outcome from final credibility.
    #[must_use]
    pub fn from_credibility(credibility: &SideMap<i64>) -> Self {
        let player = credibility[Side::Player];
        let opponent = credibility[Side::Opponent];
        match player.cmp(&opponent) {
            std::cmp::Ordering::Greater => BattleResult::Winner(Side::Player),
            std::cmp::Ordering::Less => BattleResult::Winner(Side::Opponent),
            std::cmp::Ordering::Equal => BattleResult::Draw,
        }
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self {
            BattleResult::Winner(side) => Some(*side),
            BattleResult::Draw => None,
        }
    }
}

impl std::fmt::Display for BattleResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BattleResult::Winner(side) => write!(f, "{} wins!", side),
            BattleResult::Draw => write!(f, "Draw!"),
        }
    }
}

/// Read-only view of a battle at the moment an event fired.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub credibility: SideMap<i64>,
    pub hand_sizes: SideMap<usize>,
}

/// A notification for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new phase became active.
    PhaseChange(PhaseKind),

    /// A card was played and left its owner's hand.
    PlayCard {
        card_id: CardId,
        side: Side,
        context: BattleSnapshot,
    },

    /// A lawyer's credibility changed.
    CredibilityChange { side: Side, from: i64, to: i64 },

    /// A hand ran out; the battle takes no more plays.
    LastCard,

    /// The winner was decided.
    DeclareWinner(BattleResult),

    /// The next scripted play is about to happen.
    NextCard,

    /// The battle is over and may be torn down.
    FinishBattle,
}

/// Receives notifications.
///
/// Any `FnMut(&GameEvent)` closure is a listener.
pub trait GameListener {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameListener for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// A listener shared between the controller and the phases it builds.
pub type SharedListener = Rc<RefCell<dyn GameListener>>;

/// Ordered set of subscribed listeners.
#[derive(Clone, Default)]
pub struct Listeners {
    listeners: Vec<SharedListener>,
}

impl Listeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: SharedListener) {
        self.listeners.push(listener);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SharedListener> {
        self.listeners.iter()
    }

    /// Deliver `event` to every listener in subscription order.
    pub fn emit(&self, event: &GameEvent) {
        for listener in &self.listeners {
            listener.borrow_mut().on_event(event);
        }
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners").field("count", &self.listeners.len()).finish()
    }
}

/// Listener that records every event it receives.
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use legal_brawl::battle::{EventLog, GameEvent, Listeners};
///
/// let log = Rc::new(RefCell::new(EventLog::new()));
/// let mut listeners = Listeners::new();
/// listeners.subscribe(log.clone());
///
/// listeners.emit(&GameEvent::NextCard);
/// assert_eq!(log.borrow().events(), &[GameEvent::NextCard]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a new log for subscription.
    #[must_use]
    pub fn shared() -> Rc<RefCell<EventLog>> {
        Rc::new(RefCell::new(Self::new()))
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of recorded events matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|e| predicate(e)).count()
    }
}

impl GameListener for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}
