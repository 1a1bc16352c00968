//! Deck system: weighted Category, Modifier and Object pools.
//!
//! ## Key Types
//!
//! - `DeckKind`: which pool a card belongs to
//! - `Decks`: the three pools, entries repeated by weight
//! - `DeckLoader`: reads pools from delimited text

mod decks;
mod loader;

pub use decks::{DeckCount, DeckKind, DeckStats, Decks};
pub use loader::{DeckError, DeckLoader, MAX_COUNT};
