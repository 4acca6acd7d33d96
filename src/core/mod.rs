//! Core types: card codes, deck configuration, errors, RNG.
//!
//! Everything else in the crate builds on these. None of them know about
//! cities or attributes.

pub mod code;
pub mod config;
pub mod error;
pub mod rng;

pub use code::CardCode;
pub use config::{DeckConfig, DEFAULT_CITIES_PER_GROUP, DEFAULT_GROUPS};
pub use error::{Result, TrumpError};
pub use rng::DeckRng;
