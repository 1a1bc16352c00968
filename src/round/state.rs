//! Round state: the drawn card, player state, and the phase derived from them.

use serde::Serialize;

use crate::attributes::Selection;
use crate::core::GameRng;
use crate::deck::{DeckKind, Decks};

/// Where the round stands.
///
/// ```text
/// AwaitingDraw -> Selecting -> BothLocked -> Checked
///                    ^                          |
///                    +---------- draw ----------+
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    /// No card has been drawn yet.
    AwaitingDraw,
    /// A card is drawn and at least one player is still choosing.
    Selecting,
    /// Every player is locked in; the round can be checked.
    BothLocked,
    /// The current draw has been checked. Draw again to continue.
    Checked,
}

/// One player's state within a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PlayerState {
    pub selection: Selection,
    pub locked: bool,
}

impl PlayerState {
    /// Clear selections and release the lock.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.locked = false;
    }
}

/// A drawn card: one entry from each deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Draw {
    cards: [String; DeckKind::COUNT],
    phrase: String,
}

impl Draw {
    /// Pick one entry from each deck, uniformly and independently.
    ///
    /// Returns `None` if any deck is empty.
    pub fn from_decks(decks: &Decks, rng: &mut GameRng) -> Option<Self> {
        if !decks.is_playable() {
            return None;
        }

        let mut cards: [String; DeckKind::COUNT] = Default::default();
        for kind in DeckKind::ALL {
            cards[kind.index()] = rng.choose(decks.get(kind))?.clone();
        }
        Some(Self::new(cards))
    }

    /// Build a draw from explicit entries, in Category, Modifier, Object order.
    #[must_use]
    pub fn new(cards: [String; DeckKind::COUNT]) -> Self {
        let phrase = cards.join(" ");
        Self { cards, phrase }
    }

    /// The entry drawn from one deck.
    #[must_use]
    pub fn card(&self, kind: DeckKind) -> &str {
        &self.cards[kind.index()]
    }

    /// The display phrase: the three entries joined by a space.
    #[must_use]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }
}

impl std::fmt::Display for Draw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.phrase)
    }
}
