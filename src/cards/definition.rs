//! City cards.
//!
//! A `CityCard` pairs a code and a city name with its statistics. Cards are
//! built once at registration and only handed out by shared reference
//! afterwards, so nothing can change them mid-game.

use serde::{Deserialize, Serialize};

use super::stats::CityStats;
use crate::core::CardCode;

/// One playable card.
///
/// ## Example
///
/// ```
/// use city_trumps::cards::{CityCard, CityStats};
/// use city_trumps::core::CardCode;
///
/// let card = CityCard::new(CardCode::new('A', 1), "Porto Alegre", CityStats::new(1_332_570, 495.39, 76.0, 12));
///
/// assert_eq!(card.code.to_string(), "A01");
/// assert!(card.stats.density() > 2000.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityCard {
    /// Card code, assigned from the deck layout.
    pub code: CardCode,

    /// City name (display only).
    pub name: String,

    pub stats: CityStats,
}

impl CityCard {
    /// Create a new card.
    #[must_use]
    pub fn new(code: CardCode, name: impl Into<String>, stats: CityStats) -> Self {
        Self {
            code,
            name: name.into(),
            stats,
        }
    }

    /// The state letter this card belongs to.
    #[must_use]
    pub fn group(&self) -> char {
        self.code.group()
    }
}

impl std::fmt::Display for CityCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.name)
    }
}
