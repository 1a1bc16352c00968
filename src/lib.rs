//! # common-sense
//!
//! Round logic for a two-player party game. A card is drawn as one entry
//! from each of three weighted decks (Category, Modifier, Object), e.g.
//! "Things that are / very / sticky". Each player privately picks values
//! for five attributes (Color, Texture, Taste, Smell, Volume), locks in,
//! and the round is checked: identical selections score as a match.
//!
//! ## Design Principles
//!
//! 1. **One session object**: `RoundController` owns decks, RNG, players
//!    and scores. No globals.
//!
//! 2. **Presentation-agnostic**: the core exposes flags and snapshots
//!    (`RoundView`); hiding locked widgets or colouring agreements is the
//!    front end's business.
//!
//! 3. **Reproducible**: draws come from a seeded `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Player IDs, per-player storage, RNG, configuration
//! - `attributes`: Attribute catalogue and selections
//! - `deck`: Weighted decks and the delimited-text loader
//! - `round`: Round state machine, check outcomes, scoreboard

pub mod attributes;
pub mod core;
pub mod deck;
pub mod round;

// Re-export commonly used types
pub use crate::core::{ConfigError, GameConfig, GameRng, PlayerId, PlayerMap, PLAYER_COUNT};

pub use crate::attributes::{Attribute, AttributeSet, Selection};

pub use crate::deck::{DeckError, DeckKind, DeckLoader, DeckStats, Decks};

pub use crate::round::{
    Agreement, CheckBlocker, CheckOutcome, Draw, HistoryEntry, Phase, PlayerState, PlayerView,
    RoundController, RoundError, RoundView, Scoreboard,
};
