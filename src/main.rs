//! City Trumps
//!
//! Registers a deck of city cards, lists them, then compares pairs of
//! cards chosen by code until the player stops.
//!
//! Usage: city-trumps [--demo [--seed N]] [--groups N] [--cities N] [--no-power] [-v]

use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use city_trumps::core::{DEFAULT_CITIES_PER_GROUP, DEFAULT_GROUPS};
use city_trumps::logging;
use city_trumps::{DeckConfig, DeckSource, DemoDeck, Prompter, Session};

#[derive(Parser, Debug)]
#[command(name = "city-trumps", version, about = "Trump-card game about cities")]
struct Cli {
    /// Fill the deck with generated cities instead of typing them in
    #[arg(long)]
    demo: bool,

    /// Seed for the demo deck
    #[arg(long, default_value_t = 42, requires = "demo")]
    seed: u64,

    /// Number of states, lettered from A
    #[arg(long, default_value_t = DEFAULT_GROUPS as u8, value_parser = clap::value_parser!(u8).range(1..=26))]
    groups: u8,

    /// Cities per state
    #[arg(long, default_value_t = DEFAULT_CITIES_PER_GROUP, value_parser = clap::value_parser!(u8).range(1..=99))]
    cities: u8,

    /// Leave the power score out of comparisons
    #[arg(long)]
    no_power: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn deck_config(&self) -> DeckConfig {
        DeckConfig::with_group_count(usize::from(self.groups))
            .cities_per_group(self.cities)
            .include_power(!self.no_power)
    }

    fn deck_source(&self) -> DeckSource {
        if self.demo {
            DeckSource::Demo(DemoDeck::new(self.seed))
        } else {
            DeckSource::Terminal
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);
    tracing::debug!(?cli, "starting");

    let stdin = io::stdin();
    let prompter = Prompter::new(stdin.lock(), io::stdout());
    let mut session = Session::new(cli.deck_config(), prompter);

    session
        .run(cli.deck_source())
        .context("game session failed")?;

    Ok(())
}
