//! Phase controller.
//!
//! Owns the one active phase and performs transitions:
//!
//! 1. Work out the next phase's inputs (explicit payload, else what the
//!    departing phase exports) and validate them. A failure here changes
//!    nothing.
//! 2. Clean up and drop the departing phase.
//! 3. Build and activate the next phase.
//! 4. Emit `PhaseChange` to every listener.

use std::rc::Rc;

use tracing::info;

use super::{InputEvent, Phase, PhaseKind, PhasePayload, SelectionPhase};
use crate::battle::{Battle, GameEvent, Listeners, SharedListener};
use crate::cards::{CardId, CardRegistry};
use crate::core::{ConfigError, GameConfig, GameRng, Result, Side, SideMap};

/// The active phase.
#[derive(Debug)]
pub enum ActivePhase {
    Selection(SelectionPhase),
    Battle(Battle),
}

impl ActivePhase {
    fn as_phase(&self) -> &dyn Phase {
        match self {
            ActivePhase::Selection(selection) => selection,
            ActivePhase::Battle(battle) => battle,
        }
    }

    fn as_phase_mut(&mut self) -> &mut dyn Phase {
        match self {
            ActivePhase::Selection(selection) => selection,
            ActivePhase::Battle(battle) => battle,
        }
    }

    #[must_use]
    pub fn kind(&self) -> PhaseKind {
        match self {
            ActivePhase::Selection(_) => PhaseKind::Selection,
            ActivePhase::Battle(_) => PhaseKind::Battle,
        }
    }
}

/// Validated inputs for the next phase.
enum PhaseSeed {
    Selection,
    Battle(SideMap<Vec<CardId>>),
}

/// Switches between Selection and Battle.
///
/// ## Example
///
/// ```
/// use std::rc::Rc;
/// use legal_brawl::cards::CardRegistry;
/// use legal_brawl::core::GameConfig;
/// use legal_brawl::phase::{PhaseController, PhaseKind};
///
/// let mut game = PhaseController::new(GameConfig::default(), Rc::new(CardRegistry::standard())).unwrap();
/// assert_eq!(game.kind(), PhaseKind::Selection);
///
/// // Skipping selection: both sides get the fallback hand.
/// game.request_transition(PhaseKind::Battle, None).unwrap();
/// assert_eq!(game.battle().unwrap().lawyer(legal_brawl::core::Side::Opponent).hand().len(), 7);
/// ```
#[derive(Debug)]
pub struct PhaseController {
    config: GameConfig,
    registry: Rc<CardRegistry>,
    rng: GameRng,
    listeners: Listeners,
    current: ActivePhase,
}

impl PhaseController {
    /// Start in the Selection phase.
    ///
    /// Fails if the config is invalid or the fallback hand names a card the
    /// registry lacks.
    pub fn new(config: GameConfig, registry: Rc<CardRegistry>) -> Result<Self, ConfigError> {
        config.validate()?;
        if let Some(missing) = config
            .battle
            .fallback_hand
            .iter()
            .find(|id| !registry.contains(**id))
        {
            return Err(ConfigError::Invalid(format!("fallback hand uses unknown {}", missing)));
        }

        let mut rng = GameRng::new(config.selection.seed);
        let selection = SelectionPhase::with_rng(registry.clone(), &config.selection, &mut rng);
        Ok(Self {
            config,
            registry,
            rng,
            listeners: Listeners::new(),
            current: ActivePhase::Selection(selection),
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    #[must_use]
    pub fn kind(&self) -> PhaseKind {
        self.current.kind()
    }

    #[must_use]
    pub fn current(&self) -> &ActivePhase {
        &self.current
    }

    #[must_use]
    pub fn selection(&self) -> Option<&SelectionPhase> {
        match &self.current {
            ActivePhase::Selection(selection) => Some(selection),
            ActivePhase::Battle(_) => None,
        }
    }

    #[must_use]
    pub fn battle(&self) -> Option<&Battle> {
        match &self.current {
            ActivePhase::Battle(battle) => Some(battle),
            ActivePhase::Selection(_) => None,
        }
    }

    pub fn battle_mut(&mut self) -> Option<&mut Battle> {
        match &mut self.current {
            ActivePhase::Battle(battle) => Some(battle),
            ActivePhase::Selection(_) => None,
        }
    }

    /// Subscribe to phase changes and to every battle's notifications,
    /// including the one currently running.
    pub fn subscribe(&mut self, listener: SharedListener) {
        if let ActivePhase::Battle(battle) = &mut self.current {
            battle.subscribe(listener.clone());
        }
        self.listeners.subscribe(listener);
    }

    /// Route an input to the active phase.
    pub fn handle(&mut self, input: InputEvent) -> Result<()> {
        self.current.as_phase_mut().handle(input)
    }

    /// Replace the active phase with a new `target` phase.
    ///
    /// `payload` overrides whatever the departing phase exports. A Battle
    /// side without a hand gets the fallback hand. On error the current
    /// phase stays active and untouched.
    pub fn request_transition(&mut self, target: PhaseKind, payload: Option<PhasePayload>) -> Result<()> {
        let seed = self.prepare(target, payload)?;
        let from = self.current.kind();

        self.current.as_phase_mut().cleanup();
        let next = match seed {
            PhaseSeed::Selection => ActivePhase::Selection(SelectionPhase::with_rng(
                self.registry.clone(),
                &self.config.selection,
                &mut self.rng,
            )),
            PhaseSeed::Battle(hands) => {
                let mut battle = Battle::from_resolved(
                    self.registry.clone(),
                    self.config.battle.starting_credibility,
                    &hands,
                );
                for listener in self.listeners.iter() {
                    battle.subscribe(listener.clone());
                }
                ActivePhase::Battle(battle)
            }
        };
        self.current = next;

        info!(?from, to = ?target, "phase changed");
        self.listeners.emit(&GameEvent::PhaseChange(target));
        Ok(())
    }

    fn prepare(&self, target: PhaseKind, payload: Option<PhasePayload>) -> Result<PhaseSeed> {
        match target {
            PhaseKind::Selection => Ok(PhaseSeed::Selection),
            PhaseKind::Battle => {
                let payload = payload
                    .or_else(|| self.current.as_phase().export())
                    .unwrap_or_default();
                let hands = SideMap::new(|side| match side {
                    Side::Player => payload.player_hand.clone(),
                    Side::Opponent => payload.opponent_hand.clone().unwrap_or_default(),
                });
                let hands = Battle::resolve_hands(&self.registry, &self.config.battle, &hands)?;
                Ok(PhaseSeed::Battle(hands))
            }
        }
    }
}
