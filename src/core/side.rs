//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! A battle always has exactly two sides: the `Player` and the `Opponent`.
//! `Side::opponent` maps each side to the other and is its own inverse.
//!
//! ## SideMap
//!
//! Fixed two-entry storage indexed by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// Both sides, in turn order.
    pub const ALL: [Side; 2] = [Side::Player, Side::Opponent];

    /// The other side.
    ///
    /// ```
    /// use legal_brawl::core::Side;
    ///
    /// assert_eq!(Side::Player.opponent(), Side::Opponent);
    /// assert_eq!(Side::Opponent.opponent().opponent(), Side::Opponent);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Slot index (Player = 0, Opponent = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Opponent => write!(f, "Opponent"),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use legal_brawl::core::{Side, SideMap};
///
/// let mut credibility = SideMap::with_value(10i64);
/// credibility[Side::Opponent] -= 3;
///
/// assert_eq!(credibility[Side::Player], 10);
/// assert_eq!(credibility[Side::Opponent], 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Player), factory(Side::Opponent)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }

    /// Build a new map by transforming each entry.
    pub fn map<U>(&self, mut f: impl FnMut(Side, &T) -> U) -> SideMap<U> {
        SideMap::new(|side| f(side, self.get(side)))
    }
}

impl<T: Default> Default for SideMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for side in Side::ALL {
            assert_ne!(side.opponent(), side);
            assert_eq!(side.opponent().opponent(), side);
        }
    }

    #[test]
    fn test_side_display() {
        assert_eq!(format!("{}", Side::Player), "Player");
        assert_eq!(format!("{}", Side::Opponent), "Opponent");
    }

    #[test]
    fn test_side_map_new() {
        let map = SideMap::new(|side| side.index() * 10);

        assert_eq!(map[Side::Player], 0);
        assert_eq!(map[Side::Opponent], 10);
    }

    #[test]
    fn test_side_map_mutation() {
        let mut map: SideMap<i64> = SideMap::default();

        map[Side::Player] = 4;
        map[Side::Opponent] -= 2;

        assert_eq!(map[Side::Player], 4);
        assert_eq!(map[Side::Opponent], -2);
    }

    #[test]
    fn test_side_map_iter_order() {
        let map = SideMap::new(|side| side);
        let sides: Vec<_> = map.iter().map(|(s, v)| (s, *v)).collect();

        assert_eq!(
            sides,
            vec![(Side::Player, Side::Player), (Side::Opponent, Side::Opponent)]
        );
    }

    #[test]
    fn test_side_map_serialization() {
        let map = SideMap::new(|side| side.index() as i64 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SideMap<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
