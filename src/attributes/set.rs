//! The attribute catalogue: which descriptive attributes exist, in which
//! order, and which values each one allows.

use serde::Serialize;

use crate::core::ConfigError;

/// A descriptive attribute players select for the drawn phrase.
///
/// Declaration order is the comparison order used when checking a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Attribute {
    Color,
    Texture,
    Taste,
    Smell,
    Volume,
}

impl Attribute {
    /// Number of attributes.
    pub const COUNT: usize = 5;

    /// All attributes in comparison order.
    pub const ALL: [Attribute; Attribute::COUNT] = [
        Attribute::Color,
        Attribute::Texture,
        Attribute::Taste,
        Attribute::Smell,
        Attribute::Volume,
    ];

    /// Position of this attribute in comparison order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Attribute::Color => "Color",
            Attribute::Texture => "Texture",
            Attribute::Taste => "Taste",
            Attribute::Smell => "Smell",
            Attribute::Volume => "Volume",
        }
    }

    /// Look up an attribute by name, ignoring ASCII case.
    ///
    /// ```
    /// use common_sense::attributes::Attribute;
    ///
    /// assert_eq!(Attribute::parse("taste"), Some(Attribute::Taste));
    /// assert_eq!(Attribute::parse("weight"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|attr| attr.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Allowed values for every attribute.
///
/// The first value of each list is the unset sentinel (the empty string).
/// Selections store positions into these lists, so both players must be
/// judged against the same set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AttributeSet {
    values: [Vec<String>; Attribute::COUNT],
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl AttributeSet {
    /// The value used for "nothing selected".
    pub const UNSET: &'static str = "";

    /// The standard attribute values.
    #[must_use]
    pub fn standard() -> Self {
        fn list(values: &[&str]) -> Vec<String> {
            std::iter::once(AttributeSet::UNSET)
                .chain(values.iter().copied())
                .map(String::from)
                .collect()
        }

        Self {
            values: [
                list(&[
                    "Red", "Blue", "Yellow", "Green", "Purple", "Orange", "Black", "White", "Pink",
                    "Brown",
                ]),
                list(&[
                    "Bumpy", "Sharp", "Sticky", "Smooth", "Slippery", "Squishy", "Firm", "Fluffy",
                ]),
                list(&["Bitter", "Sour", "Salty", "Savory", "Sweet", "Spicy"]),
                list(&["Natural", "Neutral", "Pungent", "Chemical"]),
                list(&["Loud", "Quiet"]),
            ],
        }
    }

    /// Replace the allowed values of one attribute.
    ///
    /// The list must start with the unset sentinel; see [`AttributeSet::validate`].
    #[must_use]
    pub fn with_values(mut self, attribute: Attribute, values: Vec<String>) -> Self {
        self.values[attribute.index()] = values;
        self
    }

    /// Allowed values for an attribute, sentinel first.
    #[must_use]
    pub fn values(&self, attribute: Attribute) -> &[String] {
        &self.values[attribute.index()]
    }

    /// Value at `position`, or `None` if out of range.
    #[must_use]
    pub fn value(&self, attribute: Attribute, position: usize) -> Option<&str> {
        self.values(attribute).get(position).map(String::as_str)
    }

    /// Position of `value` in an attribute's list.
    ///
    /// An exact match wins; otherwise the first value equal ignoring ASCII
    /// case is used.
    #[must_use]
    pub fn position(&self, attribute: Attribute, value: &str) -> Option<usize> {
        let values = self.values(attribute);
        values.iter().position(|v| v == value).or_else(|| {
            values
                .iter()
                .position(|v| v.eq_ignore_ascii_case(value))
        })
    }

    /// Check that every list is non-empty, starts with the sentinel, and
    /// holds no duplicate values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for attribute in Attribute::ALL {
            let values = self.values(attribute);
            let invalid = |reason: &str| ConfigError::InvalidAttribute {
                attribute,
                reason: reason.to_string(),
            };

            match values.first() {
                None => return Err(invalid("value list is empty")),
                Some(first) if first != Self::UNSET => {
                    return Err(invalid("first value must be the empty string"))
                }
                Some(_) => {}
            }

            for (i, value) in values.iter().enumerate() {
                if values[..i].contains(value) {
                    return Err(invalid(&format!("duplicate value {value:?}")));
                }
            }
        }
        Ok(())
    }
}
