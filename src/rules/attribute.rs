//! Comparable attributes and their winning rules.
//!
//! Every attribute reads one number off `CityStats` and says whether the
//! higher or the lower value wins. Density is the only lower-wins
//! attribute. The comparator walks `ATTRIBUTES` in order, so this table
//! also fixes the row order of the comparison table.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::comparator::Side;
use crate::cards::CityStats;

/// Which value wins an attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    HigherWins,
    LowerWins,
}

impl Rule {
    /// Decide the winning side for a pair of values.
    ///
    /// Equal values tie, and so do values that cannot be ordered (NaN).
    #[must_use]
    pub fn winner(self, first: f64, second: f64) -> Option<Side> {
        let ordering = first.partial_cmp(&second)?;
        match (ordering, self) {
            (Ordering::Equal, _) => None,
            (Ordering::Greater, Rule::HigherWins) | (Ordering::Less, Rule::LowerWins) => {
                Some(Side::First)
            }
            (Ordering::Less, Rule::HigherWins) | (Ordering::Greater, Rule::LowerWins) => {
                Some(Side::Second)
            }
        }
    }
}

/// A comparable card attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Population,
    Area,
    Gdp,
    Landmarks,
    Density,
    GdpPerCapita,
    Power,
}

impl Attribute {
    /// Table entry for this attribute. Variants are declared in table order.
    #[must_use]
    pub fn spec(self) -> &'static AttributeSpec {
        &ATTRIBUTES[self as usize]
    }

    #[must_use]
    pub fn rule(self) -> Rule {
        self.spec().rule
    }

    /// Read this attribute off a city.
    #[must_use]
    pub fn value(self, stats: &CityStats) -> f64 {
        (self.spec().extract)(stats)
    }

    /// Row label with unit.
    #[must_use]
    pub fn label(self) -> &'static str {
        self.spec().label
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the attribute table.
#[derive(Clone, Copy, Debug)]
pub struct AttributeSpec {
    pub attribute: Attribute,
    pub label: &'static str,
    pub extract: fn(&CityStats) -> f64,
    pub rule: Rule,
}

/// All attributes in comparison order. Power is last so it can be dropped
/// by taking a prefix.
pub static ATTRIBUTES: [AttributeSpec; 7] = [
    AttributeSpec {
        attribute: Attribute::Population,
        label: "Population (inhabitants)",
        extract: |s: &CityStats| s.population() as f64,
        rule: Rule::HigherWins,
    },
    AttributeSpec {
        attribute: Attribute::Area,
        label: "Area (km2)",
        extract: |s: &CityStats| s.area(),
        rule: Rule::HigherWins,
    },
    AttributeSpec {
        attribute: Attribute::Gdp,
        label: "GDP (billions)",
        extract: |s: &CityStats| s.gdp(),
        rule: Rule::HigherWins,
    },
    AttributeSpec {
        attribute: Attribute::Landmarks,
        label: "Landmarks",
        extract: |s: &CityStats| f64::from(s.landmarks()),
        rule: Rule::HigherWins,
    },
    AttributeSpec {
        attribute: Attribute::Density,
        label: "Density (inh/km2)",
        extract: |s: &CityStats| s.density(),
        rule: Rule::LowerWins,
    },
    AttributeSpec {
        attribute: Attribute::GdpPerCapita,
        label: "GDP per capita",
        extract: |s: &CityStats| s.gdp_per_capita(),
        rule: Rule::HigherWins,
    },
    AttributeSpec {
        attribute: Attribute::Power,
        label: "Power",
        extract: |s: &CityStats| s.power(),
        rule: Rule::HigherWins,
    },
];
