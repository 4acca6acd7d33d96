//! Comparison rules.
//!
//! `attribute` holds the static attribute table (what is compared and
//! which value wins); `comparator` runs a whole comparison over it and
//! scores the match.

pub mod attribute;
pub mod comparator;

pub use attribute::{Attribute, AttributeSpec, Rule, ATTRIBUTES};
pub use comparator::{AttributeOutcome, Comparator, Comparison, MatchResult, Side};
