//! The Battle phase: two lawyers, their hands, and the notifications a
//! presentation layer consumes.
//!
//! - `Battle`: State machine for one battle
//! - `Lawyer`: One side's credibility and hand
//! - `GameEvent` / `GameListener`: Outbound notification contract

mod engine;
mod events;
mod lawyer;

pub use engine::{Battle, BattleState};
pub use events::{
    BattleResult, BattleSnapshot, EventLog, GameEvent, GameListener, Listeners, SharedListener,
};
pub use lawyer::{Lawyer, PlayedCard};
