//! Where card data comes from during registration.
//!
//! The store asks a `CardSource` for one city per code, in deck order.
//! The terminal prompter and the seeded demo deck both implement it.

use super::stats::CityStats;
use crate::core::{CardCode, Result};

/// City data supplied for one code.
#[derive(Clone, Debug, PartialEq)]
pub struct CityEntry {
    pub name: String,
    pub stats: CityStats,
}

impl CityEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, stats: CityStats) -> Self {
        Self {
            name: name.into(),
            stats,
        }
    }
}

/// Supplies city data during registration.
///
/// ## Implementation Notes
///
/// - `city` is called exactly once per code, in registration order
/// - Errors abort registration; there is no partial deck
pub trait CardSource {
    /// Produce the city for `code`.
    fn city(&mut self, code: CardCode) -> Result<CityEntry>;

    /// Called when a new state starts. Default does nothing.
    fn begin_group(&mut self, _group: char) -> Result<()> {
        Ok(())
    }
}

/// Fixed list of entries, handed out in order. Handy in tests.
impl CardSource for std::vec::IntoIter<CityEntry> {
    fn city(&mut self, code: CardCode) -> Result<CityEntry> {
        self.next().ok_or_else(|| crate::core::TrumpError::InputClosed {
            expected: format!("city data for {code}"),
        })
    }
}
