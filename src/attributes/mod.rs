//! Descriptive attributes and per-player selections.
//!
//! `AttributeSet` is the catalogue both players choose from; `Selection`
//! is one player's answer for the current draw.

mod selection;
mod set;

pub use selection::Selection;
pub use set::{Attribute, AttributeSet};
