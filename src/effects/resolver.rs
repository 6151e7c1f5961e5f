//! Effect resolution.
//!
//! Resolving an effect turns it into a list of credibility changes, each
//! attributed to exactly one target side. The battle applies them in order
//! and raises a notification for each one. Resolution sees only the effect
//! and its owner, never any other card.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Effect;
use crate::core::Side;

/// A resolved credibility change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredibilityChange {
    /// Side whose card caused the change.
    pub source: Side,
    /// Side whose credibility changes.
    pub target: Side,
    /// Delta to apply.
    pub value: i64,
}

/// Most cards resolve to one or two changes.
pub type Changes = SmallVec<[CredibilityChange; 2]>;

/// Resolves effects for a card owner.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve `effect` played by `owner`.
    #[must_use]
    pub fn resolve(effect: &Effect, owner: Side) -> Changes {
        let mut changes = Changes::new();
        Self::resolve_into(effect, owner, &mut changes);
        changes
    }

    /// Target of a credibility change: the owner, or the other side.
    #[must_use]
    pub const fn resolve_target(owner: Side, on_self: bool) -> Side {
        if on_self {
            owner
        } else {
            owner.opponent()
        }
    }

    fn resolve_into(effect: &Effect, owner: Side, out: &mut Changes) {
        match effect {
            Effect::ModifyCredibility { value, on_self } => out.push(CredibilityChange {
                source: owner,
                target: Self::resolve_target(owner, *on_self),
                value: *value,
            }),
            Effect::Batch(effects) => {
                for sub_effect in effects {
                    Self::resolve_into(sub_effect, owner, out);
                }
            }
            Effect::NoOp => {}
        }
    }
}
