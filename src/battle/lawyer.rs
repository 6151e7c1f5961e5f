//! One side of a battle.
//!
//! A `Lawyer` holds a side's credibility and hand. Its side is bound once,
//! right after construction; binding it again is a programmer error.
//!
//! Credibility is only written by the battle (see `Battle::modify_credibility`);
//! `update_credibility` is the hook that records the change for display.

use im::Vector;

use crate::cards::{CardDefinition, CardId, CardInstance, CardRegistry};
use crate::core::{GameError, Result, Side};
use crate::effects::{Changes, EffectResolver};
use crate::hand::{Hand, HandInteraction};

/// A card that left the hand, with the changes its effect resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayedCard {
    pub card: CardInstance,
    pub changes: Changes,
}

/// A combatant.
#[derive(Clone, Debug)]
pub struct Lawyer {
    side: Option<Side>,
    credibility: i64,
    hand: Hand,
    interaction: HandInteraction,
    last_change: Option<(i64, i64)>,
}

impl Lawyer {
    /// A lawyer not yet bound to a side.
    #[must_use]
    pub fn new(credibility: i64) -> Self {
        Self {
            side: None,
            credibility,
            hand: Hand::new(),
            interaction: HandInteraction::new(),
            last_change: None,
        }
    }

    /// Bind to `side` and take ownership of `cards`, in order.
    pub fn for_side(side: Side, credibility: i64, cards: impl IntoIterator<Item = CardId>) -> Self {
        let mut lawyer = Self::new(credibility);
        lawyer.represents(side);
        for card_id in cards {
            lawyer.take_card(CardInstance::new(card_id));
        }
        lawyer
    }

    /// Bind this lawyer to a side. Panics if already bound.
    pub fn represents(&mut self, side: Side) {
        assert!(
            self.side.is_none(),
            "lawyer already represents {}",
            self.side.map_or_else(String::new, |s| s.to_string())
        );
        self.side = Some(side);
        self.hand = Hand::from_cards(self.hand.iter().cloned().map(|mut card| {
            card.assign_owner(side);
            card
        }));
    }

    /// The bound side. Panics if unbound.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side.expect("lawyer does not represent a side yet")
    }

    #[must_use]
    pub fn credibility(&self) -> i64 {
        self.credibility
    }

    /// Most recent (from, to) credibility change, if any.
    #[must_use]
    pub fn last_change(&self) -> Option<(i64, i64)> {
        self.last_change
    }

    /// Add a card to the end of the hand, assigning it to this side.
    pub fn take_card(&mut self, mut card: CardInstance) {
        if let Some(side) = self.side {
            card.assign_owner(side);
        }
        self.hand.add(card);
    }

    /// Play the card with `card_id`.
    ///
    /// Resolves its effect with this lawyer as owner, marks it played and
    /// removes it from the hand. On error nothing changes.
    pub fn play(&mut self, card_id: CardId, registry: &CardRegistry) -> Result<PlayedCard> {
        let owner = self.side();
        let definition: &CardDefinition = {
            let card = self.hand.find(card_id)?;
            registry
                .get(card.card_id)
                .ok_or(GameError::UnknownCard(card.card_id))?
        };
        let changes = EffectResolver::resolve(&definition.effect, owner);

        let mut card = self.hand.remove_card(card_id)?;
        card.mark_played();
        self.interaction.forget(card_id);

        Ok(PlayedCard { card, changes })
    }

    /// Record a credibility change for display.
    pub fn update_credibility(&mut self, from: i64, to: i64) {
        self.last_change = Some((from, to));
    }

    pub(crate) fn set_credibility(&mut self, value: i64) {
        self.credibility = value;
    }

    /// Copy of the current hand.
    #[must_use]
    pub fn get_hand(&self) -> Vector<CardInstance> {
        self.hand.snapshot()
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[must_use]
    pub fn interaction(&self) -> &HandInteraction {
        &self.interaction
    }

    pub(crate) fn hand_and_interaction(&mut self) -> (&mut Hand, &mut HandInteraction) {
        (&mut self.hand, &mut self.interaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::CredibilityChange;

    fn ids(raw: &[u32]) -> Vec<CardId> {
        raw.iter().copied().map(CardId::new).collect()
    }

    #[test]
    fn test_for_side_assigns_owner() {
        let lawyer = Lawyer::for_side(Side::Opponent, 10, ids(&[0, 1]));

        assert_eq!(lawyer.side(), Side::Opponent);
        assert!(lawyer.hand().iter().all(|c| c.owner() == Some(Side::Opponent)));
    }

    #[test]
    fn test_represents_after_cards() {
        let mut lawyer = Lawyer::new(0);
        lawyer.take_card(CardInstance::new(CardId::new(3)));
        lawyer.represents(Side::Player);

        assert_eq!(lawyer.hand().first().unwrap().owner(), Some(Side::Player));
    }

    #[test]
    #[should_panic(expected = "already represents Player")]
    fn test_represents_twice_panics() {
        let mut lawyer = Lawyer::new(0);
        lawyer.represents(Side::Player);
        lawyer.represents(Side::Opponent);
    }

    #[test]
    fn test_play_resolves_and_removes() {
        let registry = CardRegistry::standard();
        let mut lawyer = Lawyer::for_side(Side::Player, 10, ids(&[0, 1]));

        let played = lawyer.play(CardId::new(1), &registry).unwrap();

        assert!(played.card.is_played());
        assert_eq!(
            played.changes.as_slice(),
            &[CredibilityChange { source: Side::Player, target: Side::Opponent, value: -2 }]
        );
        assert_eq!(lawyer.hand().ids(), ids(&[0]));
        // The lawyer does not apply changes itself.
        assert_eq!(lawyer.credibility(), 10);
    }

    #[test]
    fn test_play_missing_card() {
        let registry = CardRegistry::standard();
        let mut lawyer = Lawyer::for_side(Side::Player, 10, ids(&[0]));

        assert_eq!(
            lawyer.play(CardId::new(5), &registry),
            Err(GameError::CardNotFound(CardId::new(5)))
        );
        assert_eq!(lawyer.hand().len(), 1);
    }

    #[test]
    fn test_play_unregistered_card_leaves_hand() {
        let registry = CardRegistry::standard();
        let mut lawyer = Lawyer::for_side(Side::Player, 10, ids(&[77]));

        assert_eq!(
            lawyer.play(CardId::new(77), &registry),
            Err(GameError::UnknownCard(CardId::new(77)))
        );
        assert_eq!(lawyer.hand().ids(), ids(&[77]));
    }

    #[test]
    fn test_get_hand_is_a_copy() {
        let lawyer = Lawyer::for_side(Side::Player, 10, ids(&[0, 1]));

        let mut copy = lawyer.get_hand();
        copy.pop_back();

        assert_eq!(copy.len(), 1);
        assert_eq!(lawyer.hand().len(), 2);
    }

    #[test]
    fn test_update_credibility_records() {
        let mut lawyer = Lawyer::for_side(Side::Player, 10, ids(&[]));
        assert_eq!(lawyer.last_change(), None);

        lawyer.update_credibility(10, 7);
        assert_eq!(lawyer.last_change(), Some((10, 7)));
    }
}
