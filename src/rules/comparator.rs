//! Card comparison and scoring.
//!
//! `Comparator::compare` walks the attribute table, decides each row with
//! its rule, and tallies wins per side plus ties. The card with strictly
//! more wins takes the match; equal tallies tie.
//!
//! Comparing is pure. Swapping the two cards swaps every winner and both
//! tallies, and leaves the ties untouched.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::attribute::{Attribute, AttributeSpec, ATTRIBUTES};
use crate::cards::CityCard;
use crate::core::{CardCode, DeckConfig};

/// One side of a comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// The opposing side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// Result of a whole match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// Card with strictly more attribute wins.
    Winner(CardCode),
    /// Equal tallies.
    Tie,
}

impl MatchResult {
    /// Check if a card won.
    #[must_use]
    pub fn is_winner(&self, code: CardCode) -> bool {
        matches!(self, MatchResult::Winner(c) if *c == code)
    }
}

/// One compared attribute.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttributeOutcome {
    pub attribute: Attribute,
    pub first: f64,
    pub second: f64,
    /// `None` on a tie.
    pub winner: Option<Side>,
}

impl AttributeOutcome {
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.winner.is_none()
    }
}

/// Full comparison of two cards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub first: CardCode,
    pub second: CardCode,

    /// One entry per attribute, in table order.
    pub outcomes: SmallVec<[AttributeOutcome; 7]>,

    pub first_wins: usize,
    pub second_wins: usize,
    pub ties: usize,
}

impl Comparison {
    /// Code of the card on `side`.
    #[must_use]
    pub const fn code(&self, side: Side) -> CardCode {
        match side {
            Side::First => self.first,
            Side::Second => self.second,
        }
    }

    /// Attribute wins of `side`.
    #[must_use]
    pub const fn wins(&self, side: Side) -> usize {
        match side {
            Side::First => self.first_wins,
            Side::Second => self.second_wins,
        }
    }

    /// Winning code of one attribute, `None` on a tie.
    #[must_use]
    pub fn winner_code(&self, outcome: &AttributeOutcome) -> Option<CardCode> {
        outcome.winner.map(|side| self.code(side))
    }

    /// Number of attributes compared.
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Overall result from the tallies.
    #[must_use]
    pub fn result(&self) -> MatchResult {
        use std::cmp::Ordering;

        match self.first_wins.cmp(&self.second_wins) {
            Ordering::Greater => MatchResult::Winner(self.first),
            Ordering::Less => MatchResult::Winner(self.second),
            Ordering::Equal => MatchResult::Tie,
        }
    }

    /// Outcome for one attribute, if it was compared.
    #[must_use]
    pub fn outcome(&self, attribute: Attribute) -> Option<&AttributeOutcome> {
        self.outcomes.iter().find(|o| o.attribute == attribute)
    }
}

/// Compares two cards over the configured attributes.
///
/// ## Example
///
/// ```
/// use city_trumps::cards::{CityCard, CityStats};
/// use city_trumps::core::CardCode;
/// use city_trumps::rules::{Comparator, MatchResult};
///
/// let big = CityCard::new(CardCode::new('A', 1), "Big", CityStats::new(2000, 100.0, 10.0, 3));
/// let small = CityCard::new(CardCode::new('A', 2), "Small", CityStats::new(1000, 100.0, 1.0, 1));
///
/// let comparison = Comparator::default().compare(&big, &small);
/// assert_eq!(comparison.attribute_count(), 7);
/// assert_eq!(comparison.result(), MatchResult::Winner(big.code));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Comparator {
    include_power: bool,
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Comparator {
    /// Create a comparator, with or without the power attribute.
    #[must_use]
    pub const fn new(include_power: bool) -> Self {
        Self { include_power }
    }

    /// Create a comparator matching a deck configuration.
    #[must_use]
    pub fn from_config(config: &DeckConfig) -> Self {
        Self::new(config.include_power)
    }

    #[must_use]
    pub const fn includes_power(&self) -> bool {
        self.include_power
    }

    /// Attributes this comparator evaluates, in order.
    #[must_use]
    pub fn attributes(&self) -> &'static [AttributeSpec] {
        if self.include_power {
            &ATTRIBUTES
        } else {
            &ATTRIBUTES[..ATTRIBUTES.len() - 1]
        }
    }

    /// Number of attributes compared (7 with power, 6 without).
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.attributes().len()
    }

    /// Compare two cards.
    #[must_use]
    pub fn compare(&self, first: &CityCard, second: &CityCard) -> Comparison {
        let mut comparison = Comparison {
            first: first.code,
            second: second.code,
            outcomes: SmallVec::new(),
            first_wins: 0,
            second_wins: 0,
            ties: 0,
        };

        for spec in self.attributes() {
            let a = (spec.extract)(&first.stats);
            let b = (spec.extract)(&second.stats);
            let winner = spec.rule.winner(a, b);

            match winner {
                Some(Side::First) => comparison.first_wins += 1,
                Some(Side::Second) => comparison.second_wins += 1,
                None => comparison.ties += 1,
            }

            comparison.outcomes.push(AttributeOutcome {
                attribute: spec.attribute,
                first: a,
                second: b,
                winner,
            });
        }

        debug!(
            first = %first.code,
            second = %second.code,
            first_wins = comparison.first_wins,
            second_wins = comparison.second_wins,
            ties = comparison.ties,
            "compared cards"
        );

        comparison
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CityStats;

    fn city(code: &str, population: u64, area: f64, gdp: f64, landmarks: u32) -> CityCard {
        CityCard::new(
            code.parse().unwrap(),
            code,
            CityStats::new(population, area, gdp, landmarks),
        )
    }

    #[test]
    fn test_density_tie() {
        let a = city("A01", 1000, 100.0, 1.0, 1);
        let b = city("B01", 500, 50.0, 1.0, 1);

        let comparison = Comparator::default().compare(&a, &b);
        let density = comparison.outcome(Attribute::Density).unwrap();
        assert!(density.is_tie());
        assert_eq!(density.first, 10.0);
    }

    #[test]
    fn test_higher_population_wins() {
        let a = city("A01", 2000, 100.0, 1.0, 1);
        let b = city("A02", 1000, 100.0, 1.0, 1);

        let comparison = Comparator::default().compare(&a, &b);
        let population = comparison.outcome(Attribute::Population).unwrap();
        assert_eq!(population.winner, Some(Side::First));
        assert_eq!(comparison.winner_code(population), Some(a.code));
    }

    #[test]
    fn test_lower_density_wins() {
        let sparse = city("A01", 1000, 1000.0, 1.0, 1);
        let dense = city("A02", 1000, 10.0, 1.0, 1);

        let comparison = Comparator::default().compare(&sparse, &dense);
        let density = comparison.outcome(Attribute::Density).unwrap();
        assert_eq!(comparison.winner_code(density), Some(sparse.code));
    }

    #[test]
    fn test_tally_and_overall_winner() {
        // Bigger in everything except density
        let a = city("A01", 2000, 100.0, 10.0, 5);
        let b = city("A02", 1000, 90.0, 1.0, 1);

        let comparison = Comparator::default().compare(&a, &b);
        assert_eq!(comparison.first_wins, 6);
        assert_eq!(comparison.second_wins, 1);
        assert_eq!(comparison.ties, 0);
        assert_eq!(comparison.result(), MatchResult::Winner(a.code));
        assert!(comparison.result().is_winner(a.code));
        assert!(!comparison.result().is_winner(b.code));
    }

    #[test]
    fn test_identical_stats_tie_everything() {
        let a = city("A01", 1000, 100.0, 1.0, 1);
        let b = city("A02", 1000, 100.0, 1.0, 1);

        let comparison = Comparator::default().compare(&a, &b);
        assert_eq!(comparison.ties, 7);
        assert_eq!(comparison.result(), MatchResult::Tie);
    }

    #[test]
    fn test_without_power() {
        let a = city("A01", 2000, 100.0, 10.0, 5);
        let b = city("A02", 1000, 90.0, 1.0, 1);

        let comparator = Comparator::new(false);
        let comparison = comparator.compare(&a, &b);

        assert_eq!(comparator.attribute_count(), 6);
        assert_eq!(comparison.attribute_count(), 6);
        assert!(comparison.outcome(Attribute::Power).is_none());
        assert_eq!(comparison.first_wins + comparison.second_wins + comparison.ties, 6);
    }

    #[test]
    fn test_from_config() {
        let config = DeckConfig::default().include_power(false);
        assert!(!Comparator::from_config(&config).includes_power());
        assert!(Comparator::from_config(&DeckConfig::default()).includes_power());
    }

    #[test]
    fn test_side_other() {
        assert_eq!(Side::First.other(), Side::Second);
        assert_eq!(Side::Second.other(), Side::First);
    }

    #[test]
    fn test_comparison_serialization() {
        let a = city("A01", 2000, 100.0, 10.0, 5);
        let b = city("A02", 1000, 90.0, 1.0, 1);
        let comparison = Comparator::default().compare(&a, &b);

        let value = serde_json::to_value(&comparison).unwrap();
        assert_eq!(value["first_wins"], 6);
        assert_eq!(value["outcomes"].as_array().map(Vec::len), Some(7));
        assert_eq!(value["outcomes"][4]["attribute"], "Density");
        assert_eq!(value["outcomes"][4]["winner"], "Second");
    }
}
