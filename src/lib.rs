//! # legal-brawl
//!
//! Gameplay core for a two-lawyer courtroom card battle.
//!
//! The player assembles an ordered hand from an offer, then the hand is
//! played out against an opponent. Each card nudges credibility up or down;
//! when a hand runs out the side with strictly higher credibility wins.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The core never touches a renderer. It
//!    consumes `InputEvent`s and emits `GameEvent`s; card layout is a pure
//!    function a renderer can call every frame.
//!
//! 2. **Two Sides, Typed**: `Side` is a closed enum and per-side data lives
//!    in a `SideMap`, so there is no player index to get wrong.
//!
//! 3. **Data-Driven Cards**: Card definitions (cost, text, effect) are plain
//!    serde data held in a `CardRegistry` loaded once at startup.
//!
//! ## Modules
//!
//! - `core`: Sides, RNG, configuration, errors
//! - `cards`: Card definitions, instances, registry
//! - `effects`: Card effects and their resolution
//! - `hand`: Ordered hands, drag reordering, fan layout
//! - `battle`: Lawyers, the battle state machine, notifications
//! - `phase`: Selection and Battle phases and the controller switching them

pub mod core;
pub mod cards;
pub mod effects;
pub mod hand;
pub mod battle;
pub mod phase;

// Re-export commonly used types
pub use crate::core::{
    BattleConfig, ConfigError, GameConfig, GameError, GameRng, Result, SelectionConfig, Side,
    SideMap,
};

pub use crate::cards::{CardDefinition, CardId, CardInstance, CardRegistry};

pub use crate::effects::{CredibilityChange, Effect, EffectResolver};

pub use crate::hand::{
    calculate_card_positions, CardPosition, Hand, HandInteraction, LayoutConfig, Vec2,
};

pub use crate::battle::{
    Battle, BattleResult, BattleState, EventLog, GameEvent, GameListener, Lawyer, SharedListener,
};

pub use crate::phase::{
    InputEvent, Phase, PhaseController, PhaseKind, PhasePayload, SelectionPhase,
};
