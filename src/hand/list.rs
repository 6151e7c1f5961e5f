//! Ordered hand of cards.
//!
//! A `Hand` keeps cards in the order the player arranged them. Order only
//! changes through `add`, the removals and `swap`; nothing else reorders
//! or resizes it. Backed by `im::Vector`, so handing out a snapshot is an
//! O(1) clone that shares structure and can never alias the original.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardInstance, CardRegistry};
use crate::core::{GameError, Result};

/// Ordered collection of cards.
///
/// When a card id appears more than once, id-based lookups act on the
/// first occurrence.
///
/// ## Example
///
/// ```
/// use legal_brawl::cards::{CardId, CardInstance};
/// use legal_brawl::hand::Hand;
///
/// let mut hand = Hand::new();
/// hand.add(CardInstance::new(CardId::new(3)));
/// hand.add(CardInstance::new(CardId::new(5)));
///
/// assert_eq!(hand.last().unwrap().card_id, CardId::new(5));
/// assert!(hand.remove_last().is_ok());
/// assert_eq!(hand.ids(), vec![CardId::new(3)]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vector<CardInstance>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from cards in order.
    pub fn from_cards(cards: impl IntoIterator<Item = CardInstance>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Append a card at the end of the hand.
    pub fn add(&mut self, card: CardInstance) {
        self.cards.push_back(card);
    }

    /// Remove the last card.
    pub fn remove_last(&mut self) -> Result<CardInstance> {
        self.cards
            .pop_back()
            .ok_or(GameError::Bounds { index: 0, len: 0 })
    }

    /// Card at `index`.
    pub fn get(&self, index: usize) -> Result<&CardInstance> {
        self.cards.get(index).ok_or(GameError::Bounds {
            index,
            len: self.cards.len(),
        })
    }

    #[must_use]
    pub fn first(&self) -> Option<&CardInstance> {
        self.cards.front()
    }

    #[must_use]
    pub fn last(&self) -> Option<&CardInstance> {
        self.cards.last()
    }

    /// Index of the first card with `card_id`.
    #[must_use]
    pub fn position(&self, card_id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.card_id == card_id)
    }

    #[must_use]
    pub fn contains(&self, card_id: CardId) -> bool {
        self.position(card_id).is_some()
    }

    /// Card with `card_id`.
    pub fn find(&self, card_id: CardId) -> Result<&CardInstance> {
        self.cards
            .iter()
            .find(|c| c.card_id == card_id)
            .ok_or(GameError::CardNotFound(card_id))
    }

    /// Remove the first card with `card_id`.
    pub fn remove_card(&mut self, card_id: CardId) -> Result<CardInstance> {
        let index = self.position(card_id).ok_or(GameError::CardNotFound(card_id))?;
        Ok(self.cards.remove(index))
    }

    /// Exchange the cards at two indices.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let len = self.cards.len();
        for index in [a, b] {
            if index >= len {
                return Err(GameError::Bounds { index, len });
            }
        }
        self.cards.swap(a, b);
        Ok(())
    }

    /// Card ids in hand order.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.card_id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.iter()
    }

    /// Independent copy of the current cards.
    #[must_use]
    pub fn snapshot(&self) -> Vector<CardInstance> {
        self.cards.clone()
    }

    /// Sum of printed costs; unregistered cards count as zero.
    #[must_use]
    pub fn total_cost(&self, registry: &CardRegistry) -> i64 {
        self.cards
            .iter()
            .filter_map(|c| registry.get(c.card_id))
            .map(|def| def.cost)
            .sum()
    }
}
