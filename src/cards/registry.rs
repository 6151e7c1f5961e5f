//! Card registry for definition lookup.
//!
//! The `CardRegistry` is loaded once at startup (from JSON or the built-in
//! standard set) and is read-only afterwards. Phases share it behind an `Rc`.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};
use crate::core::ConfigError;
use crate::effects::Effect;

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use legal_brawl::cards::{CardRegistry, CardDefinition, CardId};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::new(CardId::new(1), "Objection!", 2));
///
/// let found = registry.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Objection!");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in card set. Ids 0 through 6 form the fallback hand.
    #[must_use]
    pub fn standard() -> Self {
        let cards = [
            CardDefinition::new(CardId::new(0), "Opening Statement", 1)
                .with_effect(Effect::modify_credibility(2, true)),
            CardDefinition::new(CardId::new(1), "Objection!", 2)
                .with_effect(Effect::modify_credibility(-2, false)),
            CardDefinition::new(CardId::new(2), "Surprise Witness", 3)
                .with_effect(Effect::modify_credibility(3, true)),
            CardDefinition::new(CardId::new(3), "Hearsay", 1)
                .with_effect(Effect::modify_credibility(-1, false)),
            CardDefinition::new(CardId::new(4), "Leading Question", 2).with_effect(Effect::batch([
                Effect::modify_credibility(1, true),
                Effect::modify_credibility(-1, false),
            ])),
            CardDefinition::new(CardId::new(5), "Badger the Witness", 2).with_effect(Effect::batch([
                Effect::modify_credibility(-3, false),
                Effect::modify_credibility(-1, true),
            ])),
            CardDefinition::new(CardId::new(6), "Closing Argument", 4)
                .with_effect(Effect::modify_credibility(4, true)),
            CardDefinition::new(CardId::new(7), "Perjury", 0)
                .with_effect(Effect::modify_credibility(-4, true)),
            CardDefinition::new(CardId::new(8), "Expert Testimony", 3)
                .with_effect(Effect::modify_credibility(2, true)),
            CardDefinition::new(CardId::new(9), "Recess", 0)
                .with_text("Everyone takes a breather."),
        ];

        let mut registry = Self::new();
        for card in cards {
            registry.register(card);
        }
        registry
    }

    /// Load definitions from a JSON array.
    ///
    /// Duplicate ids are rejected rather than panicking, since the input
    /// is external data.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cards: Vec<CardDefinition> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for card in cards {
            if registry.contains(card.id) {
                return Err(ConfigError::Invalid(format!("duplicate {}", card.id)));
            }
            registry.register(card);
        }
        Ok(registry)
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.cards.insert(card.id, card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All registered ids in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        let mut ids: Vec<_> = self.cards.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Iterate over all card definitions (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }
}
