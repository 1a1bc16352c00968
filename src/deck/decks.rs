//! The three weighted draw pools.

use serde::Serialize;
use std::collections::HashSet;
use std::ops::Index;

/// Which pool a card belongs to.
///
/// Declaration order is the order entries appear in a drawn phrase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DeckKind {
    Category,
    Modifier,
    Object,
}

impl DeckKind {
    /// Number of decks.
    pub const COUNT: usize = 3;

    /// All decks in phrase order.
    pub const ALL: [DeckKind; DeckKind::COUNT] =
        [DeckKind::Category, DeckKind::Modifier, DeckKind::Object];

    /// Position of this deck in phrase order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display name, also the substring used to classify source rows.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DeckKind::Category => "Category",
            DeckKind::Modifier => "Modifier",
            DeckKind::Object => "Object",
        }
    }

    /// Classify a deck-name field by substring, testing Category, Modifier
    /// and Object in that order.
    ///
    /// ```
    /// use common_sense::deck::DeckKind;
    ///
    /// assert_eq!(DeckKind::classify("Object Deck"), Some(DeckKind::Object));
    /// assert_eq!(DeckKind::classify("Category/Modifier"), Some(DeckKind::Category));
    /// assert_eq!(DeckKind::classify("object"), None);
    /// ```
    #[must_use]
    pub fn classify(deck_field: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| deck_field.contains(kind.name()))
    }
}

impl std::fmt::Display for DeckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Category, Modifier and Object pools.
///
/// Each entry appears once per unit of its weight, so a uniform pick from
/// a pool is a weighted pick over distinct cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Decks {
    pools: [Vec<String>; DeckKind::COUNT],
    skipped_rows: usize,
    unclassified_rows: usize,
}

impl Decks {
    /// Create three empty decks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build decks from already-expanded entries.
    #[must_use]
    pub fn from_entries<S: Into<String>>(
        category: impl IntoIterator<Item = S>,
        modifier: impl IntoIterator<Item = S>,
        object: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            pools: [
                category.into_iter().map(Into::into).collect(),
                modifier.into_iter().map(Into::into).collect(),
                object.into_iter().map(Into::into).collect(),
            ],
            ..Self::default()
        }
    }

    /// Append `text` to a deck `count` times.
    pub fn push_weighted(&mut self, kind: DeckKind, text: &str, count: usize) {
        let pool = &mut self.pools[kind.index()];
        pool.extend(std::iter::repeat(text).take(count).map(String::from));
    }

    pub(crate) fn note_skipped(&mut self) {
        self.skipped_rows += 1;
    }

    pub(crate) fn note_unclassified(&mut self) {
        self.unclassified_rows += 1;
    }

    /// Entries of one deck, in insertion order.
    #[must_use]
    pub fn get(&self, kind: DeckKind) -> &[String] {
        &self.pools[kind.index()]
    }

    /// Number of entries (counting repeats) in one deck.
    #[must_use]
    pub fn len(&self, kind: DeckKind) -> usize {
        self.get(kind).len()
    }

    /// Whether every deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.iter().all(Vec::is_empty)
    }

    /// Whether a card can be drawn, i.e. no deck is empty.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.pools.iter().all(|pool| !pool.is_empty())
    }

    /// Rows dropped for a missing or unusable field.
    #[must_use]
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Rows dropped because the deck name matched no deck.
    #[must_use]
    pub fn unclassified_rows(&self) -> usize {
        self.unclassified_rows
    }

    /// Summarize the decks.
    #[must_use]
    pub fn stats(&self) -> DeckStats {
        let per_deck = DeckKind::ALL.map(|kind| {
            let pool = self.get(kind);
            let distinct: HashSet<&str> = pool.iter().map(String::as_str).collect();
            DeckCount {
                kind,
                entries: pool.len(),
                distinct: distinct.len(),
            }
        });

        DeckStats {
            decks: per_deck.to_vec(),
            skipped_rows: self.skipped_rows,
            unclassified_rows: self.unclassified_rows,
        }
    }
}

impl Index<DeckKind> for Decks {
    type Output = [String];

    fn index(&self, kind: DeckKind) -> &Self::Output {
        self.get(kind)
    }
}

/// Entry counts for one deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DeckCount {
    pub kind: DeckKind,
    /// Entries including weight repeats.
    pub entries: usize,
    /// Distinct card texts.
    pub distinct: usize,
}

/// Summary of loaded decks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeckStats {
    pub decks: Vec<DeckCount>,
    pub skipped_rows: usize,
    pub unclassified_rows: usize,
}

impl std::fmt::Display for DeckStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for deck in &self.decks {
            writeln!(
                f,
                "{:<9} {:>5} entries ({} distinct)",
                deck.kind.name(),
                deck.entries,
                deck.distinct
            )?;
        }
        write!(
            f,
            "skipped {} incomplete row(s), {} row(s) with no matching deck",
            self.skipped_rows, self.unclassified_rows
        )
    }
}
