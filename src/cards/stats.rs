//! City statistics and attribute derivation.
//!
//! A city is described by four base fields (population, area, GDP and
//! landmark count). Three more are derived from them:
//!
//! - density = population / area, or 0 when area is not positive
//! - GDP per capita = GDP × 1e9 / population, or 0 when population is 0
//! - power = sum of every numeric field, derived ones included
//!
//! Base fields can only change through setters, and every setter
//! re-derives, so the derived values always match the base ones.

use serde::{Deserialize, Serialize};

/// GDP is entered in billions; per-capita figures are in plain units.
pub const GDP_UNIT: f64 = 1e9;

/// Population per km², or 0 for a non-positive area.
#[must_use]
pub fn population_density(population: u64, area: f64) -> f64 {
    if area > 0.0 {
        population as f64 / area
    } else {
        0.0
    }
}

/// GDP (in billions) per inhabitant, or 0 for an empty city.
#[must_use]
pub fn gdp_per_capita(gdp: f64, population: u64) -> f64 {
    if population > 0 {
        (gdp * GDP_UNIT) / population as f64
    } else {
        0.0
    }
}

/// Base fields as entered during registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseStats {
    pub population: u64,
    /// km².
    pub area: f64,
    /// Billions of currency units.
    pub gdp: f64,
    pub landmarks: u32,
}

impl From<BaseStats> for CityStats {
    fn from(base: BaseStats) -> Self {
        CityStats::new(base.population, base.area, base.gdp, base.landmarks)
    }
}

/// Base and derived statistics of one city.
///
/// Deserializing only reads the base fields and derives the rest.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "BaseStats")]
pub struct CityStats {
    population: u64,
    area: f64,
    gdp: f64,
    landmarks: u32,
    density: f64,
    gdp_per_capita: f64,
    power: f64,
}

impl Default for CityStats {
    fn default() -> Self {
        BaseStats::default().into()
    }
}

impl CityStats {
    /// Create statistics from base fields, deriving the rest.
    #[must_use]
    pub fn new(population: u64, area: f64, gdp: f64, landmarks: u32) -> Self {
        let mut stats = Self {
            population,
            area,
            gdp,
            landmarks,
            density: 0.0,
            gdp_per_capita: 0.0,
            power: 0.0,
        };
        stats.derive();
        stats
    }

    /// Recompute density, per-capita and power from the base fields.
    fn derive(&mut self) {
        self.density = population_density(self.population, self.area);
        self.gdp_per_capita = gdp_per_capita(self.gdp, self.population);
        self.power = self.population as f64
            + self.area
            + self.gdp
            + f64::from(self.landmarks)
            + self.density
            + self.gdp_per_capita;
    }

    pub fn set_population(&mut self, population: u64) {
        self.population = population;
        self.derive();
    }

    pub fn set_area(&mut self, area: f64) {
        self.area = area;
        self.derive();
    }

    pub fn set_gdp(&mut self, gdp: f64) {
        self.gdp = gdp;
        self.derive();
    }

    pub fn set_landmarks(&mut self, landmarks: u32) {
        self.landmarks = landmarks;
        self.derive();
    }

    #[must_use]
    pub const fn population(&self) -> u64 {
        self.population
    }

    #[must_use]
    pub const fn area(&self) -> f64 {
        self.area
    }

    #[must_use]
    pub const fn gdp(&self) -> f64 {
        self.gdp
    }

    #[must_use]
    pub const fn landmarks(&self) -> u32 {
        self.landmarks
    }

    /// Inhabitants per km².
    #[must_use]
    pub const fn density(&self) -> f64 {
        self.density
    }

    #[must_use]
    pub const fn gdp_per_capita(&self) -> f64 {
        self.gdp_per_capita
    }

    /// Sum of all numeric fields.
    #[must_use]
    pub const fn power(&self) -> f64 {
        self.power
    }

    /// The base fields alone.
    #[must_use]
    pub const fn base(&self) -> BaseStats {
        BaseStats {
            population: self.population,
            area: self.area,
            gdp: self.gdp,
            landmarks: self.landmarks,
        }
    }
}
