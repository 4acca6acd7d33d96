//! Card store.
//!
//! The `CardStore` holds every registered card in deck order and indexes
//! them by code. It is filled once during registration and only read
//! afterwards; cards are handed out by shared reference.

use im::Vector;
use rustc_hash::FxHashMap;
use tracing::debug;

use super::definition::CityCard;
use super::source::CardSource;
use crate::core::{CardCode, DeckConfig, Result, TrumpError};

/// Registered cards with code lookup.
///
/// Cloning is cheap (persistent vector), so sessions can hand out
/// snapshots freely.
///
/// ## Example
///
/// ```
/// use city_trumps::cards::{CardStore, CityCard, CityStats};
/// use city_trumps::core::CardCode;
///
/// let mut store = CardStore::new();
/// store.register(CityCard::new(CardCode::new('A', 1), "Curitiba", CityStats::new(1_773_718, 434.89, 98.0, 15))).unwrap();
///
/// let found = store.lookup("a01").unwrap();
/// assert_eq!(found.name, "Curitiba");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardStore {
    cards: Vector<CityCard>,
    index: FxHashMap<CardCode, usize>,
}

impl CardStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every card of the deck described by `config`, pulling city
    /// data from `source`.
    pub fn from_source(config: &DeckConfig, source: &mut impl CardSource) -> Result<Self> {
        let mut store = Self::new();
        let mut current_group = None;

        for code in config.codes() {
            if current_group != Some(code.group()) {
                current_group = Some(code.group());
                source.begin_group(code.group())?;
            }

            let entry = source.city(code)?;
            store.register(CityCard::new(code, entry.name, entry.stats))?;
        }

        Ok(store)
    }

    /// Register a card.
    ///
    /// Fails if a card with the same code already exists.
    pub fn register(&mut self, card: CityCard) -> Result<()> {
        if self.index.contains_key(&card.code) {
            return Err(TrumpError::DuplicateCode(card.code));
        }

        debug!(
            code = %card.code,
            name = %card.name,
            density = card.stats.density(),
            per_capita = card.stats.gdp_per_capita(),
            "registered card"
        );

        self.index.insert(card.code, self.cards.len());
        self.cards.push_back(card);
        Ok(())
    }

    /// Get a card by code.
    #[must_use]
    pub fn get(&self, code: CardCode) -> Option<&CityCard> {
        self.index.get(&code).and_then(|&i| self.cards.get(i))
    }

    /// Parse a typed code and find its card.
    pub fn lookup(&self, input: &str) -> Result<&CityCard> {
        let code: CardCode = input.parse()?;
        self.get(code).ok_or(TrumpError::UnknownCode(code))
    }

    /// Resolve the two sides of a comparison.
    ///
    /// Checks the first code, then the second, then that they differ.
    pub fn pick_pair(&self, first: &str, second: &str) -> Result<(&CityCard, &CityCard)> {
        let a = self.lookup(first)?;
        let b = self.lookup(second)?;

        if a.code == b.code {
            return Err(TrumpError::SameCard(a.code));
        }
        Ok((a, b))
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CityCard> {
        self.cards.iter()
    }

    /// Cards of one state, in registration order.
    pub fn in_group(&self, group: char) -> impl Iterator<Item = &CityCard> {
        let group = group.to_ascii_uppercase();
        self.cards.iter().filter(move |c| c.group() == group)
    }

    /// State letters present, in registration order.
    #[must_use]
    pub fn groups(&self) -> Vec<char> {
        let mut groups: Vec<char> = Vec::new();
        for card in &self.cards {
            if groups.last() != Some(&card.group()) {
                groups.push(card.group());
            }
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CityEntry, CityStats};

    fn card(code: &str, name: &str) -> CityCard {
        CityCard::new(code.parse().unwrap(), name, CityStats::new(1000, 10.0, 1.0, 1))
    }

    #[test]
    fn test_register_and_get() {
        let mut store = CardStore::new();
        store.register(card("A01", "Santos")).unwrap();

        let found = store.get(CardCode::new('A', 1));
        assert_eq!(found.map(|c| c.name.as_str()), Some("Santos"));
        assert!(store.get(CardCode::new('A', 2)).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let mut store = CardStore::new();
        store.register(card("A01", "Santos")).unwrap();

        let err = store.register(card("A01", "Campinas")).unwrap_err();
        assert!(matches!(err, TrumpError::DuplicateCode(code) if code == CardCode::new('A', 1)));
        assert_eq!(store.get(CardCode::new('A', 1)).unwrap().name, "Santos");
    }

    #[test]
    fn test_lookup_errors() {
        let mut store = CardStore::new();
        store.register(card("A01", "Santos")).unwrap();

        assert!(matches!(store.lookup("A1"), Err(TrumpError::InvalidCode { .. })));
        assert!(matches!(store.lookup("B01"), Err(TrumpError::UnknownCode(_))));
        assert_eq!(store.lookup(" a01 ").unwrap().name, "Santos");
    }

    #[test]
    fn test_pick_pair() {
        let mut store = CardStore::new();
        store.register(card("A01", "Santos")).unwrap();
        store.register(card("A02", "Campinas")).unwrap();

        let (a, b) = store.pick_pair("A01", "A02").unwrap();
        assert_eq!(a.name, "Santos");
        assert_eq!(b.name, "Campinas");

        assert!(matches!(store.pick_pair("A01", "a01"), Err(TrumpError::SameCard(_))));
        assert!(matches!(store.pick_pair("Z01", "A01"), Err(TrumpError::UnknownCode(c)) if c.group() == 'Z'));
        assert!(matches!(store.pick_pair("A01", "Z09"), Err(TrumpError::UnknownCode(c)) if c.index() == 9));
    }

    #[test]
    fn test_from_source() {
        let config = DeckConfig::with_group_count(2).cities_per_group(2);
        let entries = vec![
            CityEntry::new("a1", CityStats::default()),
            CityEntry::new("a2", CityStats::default()),
            CityEntry::new("b1", CityStats::default()),
            CityEntry::new("b2", CityStats::default()),
        ];

        let store = CardStore::from_source(&config, &mut entries.into_iter()).unwrap();
        assert_eq!(store.len(), 4);
        assert_eq!(store.get(CardCode::new('B', 1)).unwrap().name, "b1");
        assert_eq!(store.groups(), vec!['A', 'B']);

        let group_b: Vec<_> = store.in_group('b').map(|c| c.name.as_str()).collect();
        assert_eq!(group_b, vec!["b1", "b2"]);
    }

    #[test]
    fn test_from_source_runs_dry() {
        let config = DeckConfig::with_group_count(1).cities_per_group(3);
        let entries = vec![CityEntry::new("only", CityStats::default())];

        let err = CardStore::from_source(&config, &mut entries.into_iter()).unwrap_err();
        assert!(matches!(err, TrumpError::InputClosed { .. }));
    }

    #[test]
    fn test_snapshot_clone() {
        let mut store = CardStore::new();
        store.register(card("A01", "Santos")).unwrap();

        let snapshot = store.clone();
        store.register(card("A02", "Campinas")).unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len(), 2);
    }
}
