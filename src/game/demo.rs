//! Seeded demo deck.
//!
//! Fills a deck without typing 32 cities: names come from a shuffled pool,
//! statistics from plausible ranges. The same seed always yields the same
//! deck.

use crate::cards::{CardSource, CityEntry, CityStats};
use crate::core::{CardCode, DeckRng, Result};

const CITY_NAMES: &[&str] = &[
    "Aracaju", "Belem", "Belo Horizonte", "Boa Vista", "Brasilia", "Campinas",
    "Campo Grande", "Cuiaba", "Curitiba", "Florianopolis", "Fortaleza", "Goiania",
    "Joao Pessoa", "Joinville", "Juiz de Fora", "Londrina", "Macapa", "Maceio",
    "Manaus", "Natal", "Niteroi", "Palmas", "Pelotas", "Porto Alegre", "Porto Velho",
    "Recife", "Ribeirao Preto", "Rio Branco", "Rio de Janeiro", "Salvador", "Santos",
    "Sao Luis", "Sao Paulo", "Sorocaba", "Teresina", "Uberlandia", "Vitoria",
];

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `CardSource` producing a reproducible random deck.
#[derive(Clone, Debug)]
pub struct DemoDeck {
    names: Vec<&'static str>,
    next_name: usize,
    stats_rng: DeckRng,
}

impl DemoDeck {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let rng = DeckRng::new(seed);

        let mut names = CITY_NAMES.to_vec();
        rng.for_context("names").shuffle(&mut names);

        Self {
            names,
            next_name: 0,
            stats_rng: rng.for_context("stats"),
        }
    }

    fn take_name(&mut self) -> String {
        let round = self.next_name / self.names.len();
        let name = self.names[self.next_name % self.names.len()];
        self.next_name += 1;

        if round == 0 {
            name.to_string()
        } else {
            format!("{name} {}", round + 1)
        }
    }
}

impl CardSource for DemoDeck {
    fn city(&mut self, _code: CardCode) -> Result<CityEntry> {
        let name = self.take_name();
        let rng = &mut self.stats_rng;

        let population = rng.gen_range_u64(20_000..=12_000_000);
        let area = round2(rng.gen_range_f64(40.0..2_500.0));
        let gdp = round2(rng.gen_range_f64(0.5..900.0));
        let landmarks = rng.gen_range_u64(0..=40) as u32;

        Ok(CityEntry::new(name, CityStats::new(population, area, gdp, landmarks)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardStore;
    use crate::core::DeckConfig;

    #[test]
    fn test_same_seed_same_deck() {
        let config = DeckConfig::default();
        let a = CardStore::from_source(&config, &mut DemoDeck::new(7)).unwrap();
        let b = CardStore::from_source(&config, &mut DemoDeck::new(7)).unwrap();

        let a: Vec<_> = a.iter().cloned().collect();
        let b: Vec<_> = b.iter().cloned().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let config = DeckConfig::default();
        let a = CardStore::from_source(&config, &mut DemoDeck::new(1)).unwrap();
        let b = CardStore::from_source(&config, &mut DemoDeck::new(2)).unwrap();

        let a: Vec<_> = a.iter().map(|c| c.stats.population()).collect();
        let b: Vec<_> = b.iter().map(|c| c.stats.population()).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_stats_in_range() {
        let config = DeckConfig::default();
        let store = CardStore::from_source(&config, &mut DemoDeck::new(42)).unwrap();

        assert_eq!(store.len(), 32);
        for card in store.iter() {
            assert!(card.stats.population() >= 20_000);
            assert!(card.stats.area() >= 40.0);
            assert!(card.stats.landmarks() <= 40);
            assert!(card.stats.density() > 0.0);
        }
    }

    #[test]
    fn test_names_unique_beyond_pool() {
        let config = DeckConfig::with_group_count(26).cities_per_group(2);
        let store = CardStore::from_source(&config, &mut DemoDeck::new(3)).unwrap();

        let mut names: Vec<_> = store.iter().map(|c| c.name.clone()).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
        assert!(store.iter().any(|c| c.name.ends_with(" 2")));
    }
}
