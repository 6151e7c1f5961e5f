//! Game configuration.
//!
//! A session is configured once at startup:
//! - `LayoutConfig`: How the presentation fans a hand of cards
//! - `BattleConfig`: Starting credibility and the fallback hand
//! - `SelectionConfig`: How many cards are offered and kept
//!
//! Every field has a default, so a JSON config only needs the values it
//! overrides.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::CardId;
use crate::hand::LayoutConfig;

/// Battle settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Credibility both lawyers start with.
    pub starting_credibility: i64,

    /// Hand dealt to a side when no hand was supplied for it.
    pub fallback_hand: Vec<CardId>,
}

impl BattleConfig {
    /// The fixed fallback hand: ids 0 through 6.
    #[must_use]
    pub fn default_fallback_hand() -> Vec<CardId> {
        (0..7).map(CardId::new).collect()
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            starting_credibility: 10,
            fallback_hand: Self::default_fallback_hand(),
        }
    }
}

/// Selection phase settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Number of distinct cards offered to pick from.
    pub offer_count: usize,

    /// Maximum number of cards the assembled hand may hold.
    pub hand_size: usize,

    /// Seed for dealing the offer.
    pub seed: u64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            offer_count: 10,
            hand_size: 7,
            seed: 0,
        }
    }
}

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use legal_brawl::core::GameConfig;
///
/// let config = GameConfig::from_json(r#"{ "battle": { "starting_credibility": 5 } }"#).unwrap();
/// assert_eq!(config.battle.starting_credibility, 5);
/// assert_eq!(config.selection.hand_size, 7);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub layout: LayoutConfig,
    pub battle: BattleConfig,
    pub selection: SelectionConfig,
}

impl GameConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let layout = &self.layout;
        let finite = [
            layout.card_width,
            layout.shift_ratio,
            layout.rotation,
            layout.lift_ratio,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(ConfigError::Invalid("layout values must be finite".into()));
        }
        if layout.card_width < 0.0 {
            return Err(ConfigError::Invalid("card_width must not be negative".into()));
        }
        if self.battle.fallback_hand.is_empty() {
            return Err(ConfigError::Invalid("fallback_hand must not be empty".into()));
        }
        if self.selection.hand_size == 0 {
            return Err(ConfigError::Invalid("hand_size must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();

        assert_eq!(config.battle.starting_credibility, 10);
        assert_eq!(
            config.battle.fallback_hand,
            (0..7).map(CardId::new).collect::<Vec<_>>()
        );
        assert_eq!(config.selection.offer_count, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = GameConfig::from_json("{}").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = GameConfig::from_json(
            r#"{ "layout": { "card_width": 80.0 }, "selection": { "seed": 9 } }"#,
        )
        .unwrap();

        assert_eq!(config.layout.card_width, 80.0);
        assert_eq!(config.layout.shift_ratio, LayoutConfig::default().shift_ratio);
        assert_eq!(config.selection.seed, 9);
        assert_eq!(config.selection.hand_size, 7);
    }

    #[test]
    fn test_rejects_empty_fallback() {
        let err = GameConfig::from_json(r#"{ "battle": { "fallback_hand": [] } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_negative_width() {
        let err = GameConfig::from_json(r#"{ "layout": { "card_width": -1.0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = GameConfig::from_json("{ layout").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
