//! Deck configuration.
//!
//! The classic deck has 8 states (`A`..`H`) of 4 cities each, and power
//! takes part in comparisons. `DeckConfig` keeps those as defaults and lets
//! the CLI shrink or grow the deck.

use super::code::CardCode;

/// Default number of states.
pub const DEFAULT_GROUPS: usize = 8;

/// Default number of cities per state.
pub const DEFAULT_CITIES_PER_GROUP: u8 = 4;

/// Deck layout and comparison options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckConfig {
    /// State letters, in registration order.
    pub groups: Vec<char>,

    /// Cities registered per state.
    pub cities_per_group: u8,

    /// Does the aggregate power score count as an attribute?
    pub include_power: bool,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self::with_group_count(DEFAULT_GROUPS)
    }
}

impl DeckConfig {
    /// Create the classic 8 × 4 deck configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration using the first `count` letters of the alphabet.
    pub fn with_group_count(count: usize) -> Self {
        assert!(count > 0, "Must have at least 1 group");
        assert!(count <= 26, "At most 26 groups supported");

        Self {
            groups: ('A'..='Z').take(count).collect(),
            cities_per_group: DEFAULT_CITIES_PER_GROUP,
            include_power: true,
        }
    }

    /// Set the number of cities per state.
    #[must_use]
    pub fn cities_per_group(mut self, count: u8) -> Self {
        assert!(
            (1..=CardCode::MAX_INDEX).contains(&count),
            "Cities per group must be in 1..=99"
        );
        self.cities_per_group = count;
        self
    }

    /// Include or exclude power from comparisons.
    #[must_use]
    pub fn include_power(mut self, include: bool) -> Self {
        self.include_power = include;
        self
    }

    /// Total number of cards in the deck.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.groups.len() * usize::from(self.cities_per_group)
    }

    /// All card codes in registration order (`A01, A02, .., B01, ..`).
    pub fn codes(&self) -> impl Iterator<Item = CardCode> + '_ {
        self.groups.iter().flat_map(move |&group| {
            (1..=self.cities_per_group).map(move |index| CardCode::new(group, index))
        })
    }
}
