//! Check results.

use serde::Serialize;

use crate::attributes::{Attribute, Selection};

/// Message reported when the players agree.
pub const MATCH_MESSAGE: &str = "Now that's some Common Sense!";

/// Message reported when the players disagree.
pub const MISMATCH_MESSAGE: &str = "Uh-oh, that's non-sensical!";

/// Per-attribute comparison, for highlighting only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Agreement {
    /// Every player chose the same, non-empty value.
    Agree,
    /// Values differ, or nobody chose one.
    Disagree,
}

/// Result of checking a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    /// The phrase that was checked.
    pub phrase: String,
    /// Whether the full selection vectors matched.
    pub matched: bool,
    agreement: [Agreement; Attribute::COUNT],
}

impl CheckOutcome {
    /// Compare selections attribute by attribute, in attribute order.
    ///
    /// The round matches when every selection vector is identical and at
    /// least one attribute is set.
    pub fn evaluate<'a>(
        phrase: impl Into<String>,
        selections: impl IntoIterator<Item = &'a Selection>,
    ) -> Self {
        let selections: Vec<&Selection> = selections.into_iter().collect();

        let agreement = Attribute::ALL.map(|attr| {
            let first = selections.first().map_or(0, |s| s.get(attr));
            if first != 0 && selections.iter().all(|s| s.get(attr) == first) {
                Agreement::Agree
            } else {
                Agreement::Disagree
            }
        });

        let matched = match selections.split_first() {
            Some((first, rest)) => !first.is_empty() && rest.iter().all(|s| s == first),
            None => false,
        };

        Self {
            phrase: phrase.into(),
            matched,
            agreement,
        }
    }

    /// Agreement for one attribute.
    #[must_use]
    pub fn agreement(&self, attribute: Attribute) -> Agreement {
        self.agreement[attribute.index()]
    }

    /// Agreement for every attribute, in attribute order.
    #[must_use]
    pub fn agreements(&self) -> &[Agreement; Attribute::COUNT] {
        &self.agreement
    }

    /// The message shown to players.
    #[must_use]
    pub fn message(&self) -> &'static str {
        if self.matched {
            MATCH_MESSAGE
        } else {
            MISMATCH_MESSAGE
        }
    }
}
