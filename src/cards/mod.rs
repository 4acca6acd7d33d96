//! Card system: city statistics, cards, sources and the store.
//!
//! ## Key Types
//!
//! - `CityStats`: base fields plus derived density, per-capita and power
//! - `CityCard`: code, name and statistics of one city
//! - `CardSource`: supplies city data during registration
//! - `CardStore`: registered cards with lookup by code

pub mod definition;
pub mod registry;
pub mod source;
pub mod stats;

pub use definition::CityCard;
pub use registry::CardStore;
pub use source::{CardSource, CityEntry};
pub use stats::{gdp_per_capita, population_density, BaseStats, CityStats, GDP_UNIT};
