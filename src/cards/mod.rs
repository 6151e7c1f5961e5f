//! Card system: definitions, instances, and registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardDefinition`: Static card data (name, cost, effect)
//! - `CardInstance`: A card in a hand (owner, played flag)
//! - `CardRegistry`: Card definition lookup, loaded once at startup

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{CardDefinition, CardId};
pub use instance::CardInstance;
pub use registry::CardRegistry;
