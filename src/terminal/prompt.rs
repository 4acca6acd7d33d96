//! Line-based prompting.
//!
//! `Prompter` wraps any `BufRead`/`Write` pair, so the game runs the same
//! against stdin/stdout and against in-memory buffers in tests. It is also
//! the interactive `CardSource`: registration asks for each field in turn.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::debug;

use super::render;
use crate::cards::{CardSource, CityEntry, CityStats};
use crate::core::{CardCode, Result, TrumpError};

/// Prompts on `output` and reads answers from `input`, one line each.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output, e.g. to inspect what a test session printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write text followed by a newline.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Write text as-is (rendered blocks carry their own newlines).
    pub fn print(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Show `prompt` and read one line, without its line ending.
    ///
    /// End of input is an error; `expected` names what was being asked for.
    pub fn ask_line(&mut self, prompt: &str, expected: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(TrumpError::InputClosed {
                expected: expected.to_string(),
            });
        }

        let answer = line.trim_end_matches(['\r', '\n']).to_string();
        debug!(prompt = prompt.trim(), answer = %answer, "read answer");
        Ok(answer)
    }

    /// Ask until a non-blank answer arrives. Returns it trimmed.
    pub fn ask_text(&mut self, prompt: &str, expected: &str) -> Result<String> {
        loop {
            let answer = self.ask_line(prompt, expected)?;
            let answer = answer.trim();
            if !answer.is_empty() {
                return Ok(answer.to_string());
            }
        }
    }

    /// Ask until the answer parses as `T`.
    pub fn ask_number<T: FromStr>(&mut self, prompt: &str, expected: &str) -> Result<T> {
        loop {
            let answer = self.ask_line(prompt, expected)?;
            match answer.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.say(&format!("  [!] Please enter {expected}."))?,
            }
        }
    }

    /// Yes/no question. Anything not starting with `y` or `Y` is a no.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.ask_line(prompt, "a yes/no answer")?;
        Ok(matches!(answer.trim_start().chars().next(), Some('y' | 'Y')))
    }
}

impl<R: BufRead, W: Write> CardSource for Prompter<R, W> {
    fn begin_group(&mut self, group: char) -> Result<()> {
        self.say(&format!("\n*** STATE {group} ***"))
    }

    fn city(&mut self, code: CardCode) -> Result<CityEntry> {
        self.say(&format!(
            "\n>>> Registering card [{code}] - state {}, city {} <<<",
            code.group(),
            code.index()
        ))?;
        self.print(&render::separator())?;

        let name = self.ask_text("City name: ", "a city name")?;
        let population = self.ask_number("Population (inhabitants): ", "a whole number of inhabitants")?;
        let area = self.ask_number("Area (km2): ", "an area in km2")?;
        let gdp = self.ask_number("GDP (billions): ", "a GDP in billions")?;
        let landmarks = self.ask_number("Number of landmarks: ", "a whole number of landmarks")?;

        Ok(CityEntry::new(name, CityStats::new(population, area, gdp, landmarks)))
    }
}
