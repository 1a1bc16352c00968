//! A player's selection vector.

use serde::Serialize;

use super::set::{Attribute, AttributeSet};

/// One chosen value per attribute, stored as positions into an
/// [`AttributeSet`]. Position 0 is the unset sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Selection {
    choices: [usize; Attribute::COUNT],
}

impl Selection {
    /// A selection with every attribute unset.
    #[must_use]
    pub fn unset() -> Self {
        Self::default()
    }

    /// Position chosen for an attribute.
    #[must_use]
    pub fn get(&self, attribute: Attribute) -> usize {
        self.choices[attribute.index()]
    }

    /// Set the position chosen for an attribute.
    ///
    /// Callers are responsible for `position` being valid in the
    /// attribute set the selection is resolved against.
    pub fn set(&mut self, attribute: Attribute, position: usize) {
        self.choices[attribute.index()] = position;
    }

    /// Whether the attribute has a non-sentinel value.
    #[must_use]
    pub fn is_set(&self, attribute: Attribute) -> bool {
        self.get(attribute) != 0
    }

    /// Whether no attribute has been chosen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.choices.iter().all(|&c| c == 0)
    }

    /// Reset every attribute to the sentinel.
    pub fn clear(&mut self) {
        self.choices = [0; Attribute::COUNT];
    }

    /// Resolve positions to value strings, in attribute order.
    #[must_use]
    pub fn resolve<'a>(&self, set: &'a AttributeSet) -> Vec<&'a str> {
        Attribute::ALL
            .iter()
            .map(|&attr| set.value(attr, self.get(attr)).unwrap_or(AttributeSet::UNSET))
            .collect()
    }
}
