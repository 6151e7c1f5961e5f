//! Hand fan layout.
//!
//! Computes where each card of an `N`-card hand sits on screen. Cards are
//! spread horizontally around an anchor, lifted along a parabola that is
//! lowest at the center of the hand, and rotated so the fan is symmetric
//! about zero degrees.
//!
//! The function is pure: same inputs, same bits out. It never looks at
//! the hand itself, only at how many cards it holds.

use serde::{Deserialize, Serialize};

/// A point in presentation space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Placement of one card.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardPosition {
    pub position: Vec2,
    /// Rotation in degrees.
    pub rotation: f32,
}

/// Fan shape parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub card_width: f32,
    /// Horizontal distance between neighbors, as a fraction of card width.
    pub shift_ratio: f32,
    /// Rotation step between neighbors, in degrees.
    pub rotation: f32,
    /// Parabola steepness, as a fraction of card width.
    pub lift_ratio: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            card_width: 120.0,
            shift_ratio: 0.5,
            rotation: 4.0,
            lift_ratio: 0.02,
        }
    }
}

impl LayoutConfig {
    /// Distance between neighboring cards. Doubles while a card is held.
    #[must_use]
    pub fn shift_step(&self, held: bool) -> f32 {
        let step = self.card_width * self.shift_ratio;
        if held {
            step * 2.0
        } else {
            step
        }
    }
}

/// Positions for a hand of `count` cards, left to right.
///
/// ```
/// use legal_brawl::hand::{calculate_card_positions, LayoutConfig, Vec2};
///
/// let config = LayoutConfig { card_width: 100.0, shift_ratio: 0.5, rotation: 10.0, lift_ratio: 0.1 };
/// let fan = calculate_card_positions(3, &config, Vec2::ZERO, false);
///
/// assert_eq!(fan[0].position, Vec2::new(-50.0, 10.0));
/// assert_eq!(fan[1].position, Vec2::new(0.0, 0.0));
/// assert_eq!(fan[2].rotation, -10.0);
/// ```
#[must_use]
pub fn calculate_card_positions(
    count: usize,
    config: &LayoutConfig,
    anchor: Vec2,
    held: bool,
) -> Vec<CardPosition> {
    let shift = config.shift_step(held);
    let lift = config.card_width * config.lift_ratio;
    let span = shift * count as f32 - shift;
    let center = (count as f32 - 1.0) / 2.0;

    (0..count)
        .map(|i| {
            let from_center = i as f32 - center;
            let offset = Vec2::new(shift * i as f32 - span / 2.0, from_center * from_center * lift);
            CardPosition {
                position: anchor + offset,
                rotation: -from_center * config.rotation,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> LayoutConfig {
        LayoutConfig {
            card_width: 100.0,
            shift_ratio: 0.5,
            rotation: 10.0,
            lift_ratio: 0.1,
        }
    }

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "{} != {}", a, b);
    }

    #[test]
    fn test_three_card_fan() {
        let fan = calculate_card_positions(3, &sample_config(), Vec2::ZERO, false);

        let xs: Vec<_> = fan.iter().map(|p| p.position.x).collect();
        let ys: Vec<_> = fan.iter().map(|p| p.position.y).collect();
        let rotations: Vec<_> = fan.iter().map(|p| p.rotation).collect();

        for (actual, expected) in xs.iter().zip([-50.0, 0.0, 50.0]) {
            assert_close(*actual, expected);
        }
        for (actual, expected) in ys.iter().zip([10.0, 0.0, 10.0]) {
            assert_close(*actual, expected);
        }
        for (actual, expected) in rotations.iter().zip([10.0, 0.0, -10.0]) {
            assert_close(*actual, expected);
        }
    }

    #[test]
    fn test_anchor_offsets_every_card() {
        let anchor = Vec2::new(400.0, 300.0);
        let fan = calculate_card_positions(3, &sample_config(), anchor, false);

        assert_close(fan[0].position.x, 350.0);
        assert_close(fan[1].position.y, 300.0);
        assert_close(fan[2].position.y, 310.0);
    }

    #[test]
    fn test_empty_hand() {
        assert!(calculate_card_positions(0, &sample_config(), Vec2::ZERO, true).is_empty());
    }

    #[test]
    fn test_single_card_sits_on_anchor() {
        let anchor = Vec2::new(12.0, -3.0);
        let fan = calculate_card_positions(1, &sample_config(), anchor, false);

        assert_eq!(fan.len(), 1);
        assert_eq!(fan[0].position, anchor);
        assert_eq!(fan[0].rotation, 0.0);
    }

    #[test]
    fn test_held_doubles_spacing() {
        let config = sample_config();
        assert_eq!(config.shift_step(true), 2.0 * config.shift_step(false));

        let fan = calculate_card_positions(3, &config, Vec2::ZERO, true);
        assert_close(fan[0].position.x, -100.0);
        assert_close(fan[2].position.x, 100.0);
        // Lift and rotation ignore the held state.
        assert_close(fan[0].position.y, 10.0);
        assert_close(fan[0].rotation, 10.0);
    }

    #[test]
    fn test_even_count_has_no_center_card() {
        let fan = calculate_card_positions(4, &sample_config(), Vec2::ZERO, false);

        assert_close(fan[1].position.x, -25.0);
        assert_close(fan[2].position.x, 25.0);
        assert_close(fan[1].rotation, 5.0);
        assert_close(fan[2].rotation, -5.0);
        assert_close(fan[1].position.y, 2.5);
    }
}
