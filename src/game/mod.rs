//! The playable game: session flow and the demo deck.
//!
//! Flow of a session:
//! - banner, then registration of every card in deck order
//! - the catalog of registered cards, grouped by state
//! - comparisons until the player declines another round

mod demo;
mod session;

pub use demo::DemoDeck;
pub use session::{DeckSource, Session};
