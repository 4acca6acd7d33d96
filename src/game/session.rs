//! One run of the game.
//!
//! A session goes through three phases: registration (from the terminal
//! or a demo deck), catalog display, and the comparison loop. The loop
//! re-prompts on bad codes and keeps going while the player answers yes.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use super::demo::DemoDeck;
use crate::cards::CardStore;
use crate::core::{DeckConfig, Result, TrumpError};
use crate::rules::Comparator;
use crate::terminal::{render, Prompter};

/// Where registration gets its cities from.
#[derive(Clone, Debug)]
pub enum DeckSource {
    /// Ask the player for every field.
    Terminal,
    /// Generate from a seed.
    Demo(DemoDeck),
}

/// Drives a game over a prompter.
pub struct Session<R, W> {
    config: DeckConfig,
    comparator: Comparator,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: DeckConfig, prompter: Prompter<R, W>) -> Self {
        Self {
            comparator: Comparator::from_config(&config),
            config,
            prompter,
        }
    }

    /// Give back the prompter, e.g. to read what was printed.
    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    /// Run every phase. Returns the number of comparisons played.
    pub fn run(&mut self, source: DeckSource) -> Result<usize> {
        self.prompter.print(&render::banner())?;

        let store = self.register(source)?;
        self.show_catalog(&store)?;
        let played = self.play(&store)?;

        self.prompter.say("Thanks for playing City Trumps!\n")?;
        info!(played, "session finished");
        Ok(played)
    }

    /// Registration phase.
    pub fn register(&mut self, source: DeckSource) -> Result<CardStore> {
        let total = self.config.total_cards();
        info!(total, demo = matches!(source, DeckSource::Demo(_)), "registration started");

        self.prompter.say(&format!(
            "\nThis game registers {} city cards: {} states ({} to {}), {} cities each.\n",
            total,
            self.config.groups.len(),
            self.config.groups.first().copied().unwrap_or('A'),
            self.config.groups.last().copied().unwrap_or('A'),
            self.config.cities_per_group
        ))?;
        self.prompter.print(&render::heading("REGISTRATION"))?;

        match source {
            DeckSource::Terminal => CardStore::from_source(&self.config, &mut self.prompter),
            DeckSource::Demo(mut deck) => {
                self.prompter.say("\nFilling the deck with demo cities...")?;
                CardStore::from_source(&self.config, &mut deck)
            }
        }
    }

    /// Catalog phase.
    pub fn show_catalog(&mut self, store: &CardStore) -> Result<()> {
        self.prompter.print("\n\n")?;
        self.prompter.print(&render::render_catalog(store))
    }

    /// Comparison loop.
    ///
    /// Bad codes and identical picks re-prompt. End of input ends the
    /// loop quietly instead of failing the session.
    pub fn play(&mut self, store: &CardStore) -> Result<usize> {
        self.prompter.print("\n")?;
        self.prompter.print(&render::heading("COMPARISON"))?;
        self.prompter.say("  Code format: one letter + two digits")?;
        self.prompter.say("  Examples: A01, B03, H04\n")?;

        let mut played = 0;
        loop {
            match self.play_round(store) {
                Ok(()) => played += 1,
                Err(err) if err.is_retryable() => {
                    debug!(%err, "rejected comparison");
                    self.prompter.say(&format!("  [!] {err}. Try again.\n"))?;
                    continue;
                }
                Err(TrumpError::InputClosed { .. }) => {
                    info!("input closed during comparison phase");
                    break;
                }
                Err(err) => return Err(err),
            }

            match self.prompter.confirm("\nCompare other cards? (y/n): ") {
                Ok(true) => self.prompter.say("")?,
                Ok(false) | Err(TrumpError::InputClosed { .. }) => break,
                Err(err) => return Err(err),
            }
        }

        self.prompter.say("")?;
        Ok(played)
    }

    fn play_round(&mut self, store: &CardStore) -> Result<()> {
        let first = self
            .prompter
            .ask_line("Enter the first card code : ", "a card code")?;
        let second = self
            .prompter
            .ask_line("Enter the second card code: ", "a card code")?;

        let (a, b) = store.pick_pair(&first, &second)?;
        let comparison = self.comparator.compare(a, b);
        info!(first = %a.code, second = %b.code, result = ?comparison.result(), "comparison played");

        self.prompter
            .print(&render::render_comparison(&comparison, a, b))
    }
}
