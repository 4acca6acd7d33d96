//! # city-trumps
//!
//! A terminal trump-card game about cities.
//!
//! Cards are cities grouped into states and keyed by a code such as `A01`.
//! Each card carries four base statistics (population, area, GDP and
//! landmarks) and three derived ones (density, GDP per capita and power).
//! Two cards are compared attribute by attribute: the higher value wins
//! every attribute except density, where the lower value wins. The card
//! with more attribute wins takes the match.
//!
//! ## Modules
//!
//! - `core`: card codes, deck configuration, errors, deterministic RNG
//! - `cards`: city statistics, cards, card sources and the card store
//! - `rules`: attribute table and comparator
//! - `terminal`: prompting and text rendering
//! - `game`: session flow and the seeded demo deck
//! - `logging`: tracing subscriber setup for the binary

pub mod core;
pub mod cards;
pub mod rules;
pub mod terminal;
pub mod game;
pub mod logging;

// Re-export commonly used types
pub use crate::core::{CardCode, DeckConfig, DeckRng, Result, TrumpError};

pub use crate::cards::{CardSource, CardStore, CityCard, CityEntry, CityStats};

pub use crate::rules::{
    Attribute, AttributeOutcome, Comparator, Comparison, MatchResult, Rule, Side, ATTRIBUTES,
};

pub use crate::terminal::Prompter;

pub use crate::game::{DeckSource, DemoDeck, Session};
