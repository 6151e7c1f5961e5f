//! Hands: ordered cards, drag reordering, and on-screen layout.
//!
//! - `Hand`: Ordered collection with add/remove/swap
//! - `HandInteraction`: Held/hovered/moving state and the reorder rule
//! - `calculate_card_positions`: Pure fan layout for presentation

mod interaction;
mod layout;
mod list;

pub use interaction::HandInteraction;
pub use layout::{calculate_card_positions, CardPosition, LayoutConfig, Vec2};
pub use list::Hand;
