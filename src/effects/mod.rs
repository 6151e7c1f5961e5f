//! Effect system for card abilities.
//!
//! - `Effect`: Closed set of things a card can do
//! - `EffectResolver`: Turns an effect and its owner into credibility changes
//!
//! Resolution is pure. Applying the resulting `CredibilityChange`s is the
//! battle's job, so every score mutation goes through one place.

mod effect;
mod resolver;

pub use effect::Effect;
pub use resolver::{Changes, CredibilityChange, EffectResolver};
