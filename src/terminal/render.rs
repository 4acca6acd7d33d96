//! Text rendering for cards, the catalog and comparisons.
//!
//! Everything here returns a `String`; the session decides where it goes.

use crate::cards::{CardStore, CityCard};
use crate::rules::{Attribute, Comparison, MatchResult, Rule, Side};

const RULE_WIDTH: usize = 44;

/// Heavy rule line.
#[must_use]
pub fn rule() -> String {
    format!("{}\n", "=".repeat(RULE_WIDTH))
}

/// Light separator line.
#[must_use]
pub fn separator() -> String {
    format!("{}\n", "-".repeat(RULE_WIDTH))
}

/// Title between two heavy rules.
#[must_use]
pub fn heading(title: &str) -> String {
    format!("{}{:^width$}\n{}", rule(), title, rule(), width = RULE_WIDTH)
}

/// Program banner.
#[must_use]
pub fn banner() -> String {
    heading("CITY TRUMPS")
}

/// Attribute value as shown in tables: counts without decimals, the rest
/// with two.
#[must_use]
pub fn format_value(attribute: Attribute, value: f64) -> String {
    match attribute {
        Attribute::Population | Attribute::Landmarks => format!("{value:.0}"),
        _ => format!("{value:.2}"),
    }
}

/// One card as a labelled block.
#[must_use]
pub fn render_card(card: &CityCard) -> String {
    let s = &card.stats;
    let mut out = [
        format!("\n  Card: [{}]", card.code),
        format!("  City           : {}", card.name),
        format!("  Population     : {} inhabitants", s.population()),
        format!("  Area           : {:.2} km2", s.area()),
        format!("  GDP            : {:.2} billion", s.gdp()),
        format!("  Landmarks      : {}", s.landmarks()),
        format!("  Density        : {:.2} inh/km2", s.density()),
        format!("  GDP per capita : {:.2}", s.gdp_per_capita()),
        format!("  Power          : {:.2}", s.power()),
    ]
    .join("\n");
    out.push('\n');
    out
}

/// Every card, grouped by state.
#[must_use]
pub fn render_catalog(store: &CardStore) -> String {
    let mut out = heading("REGISTERED CARDS");

    for group in store.groups() {
        out.push_str(&format!("\n  *** STATE {group} ***\n"));
        out.push_str(&separator());
        for card in store.in_group(group) {
            out.push_str(&render_card(card));
        }
    }

    out.push_str(&format!(
        "\n{}  Registration complete! Total cards: {}\n{}",
        rule(),
        store.len(),
        rule()
    ));
    out
}

/// Attribute table, scoreboard and overall result of a comparison.
#[must_use]
pub fn render_comparison(comparison: &Comparison, first: &CityCard, second: &CityCard) -> String {
    let mut out = String::from("\n");
    out.push_str(&heading(&format!(
        "COMPARISON: [{}] vs [{}]",
        comparison.first, comparison.second
    )));

    for outcome in &comparison.outcomes {
        let winner = comparison
            .winner_code(outcome)
            .map_or_else(|| "TIE".to_string(), |code| code.to_string());
        let marker = match outcome.attribute.rule() {
            Rule::LowerWins => "  (lower wins)",
            Rule::HigherWins => "",
        };

        out.push_str(&format!(
            "  {:<26} [{}] {:<15} | [{}] {:<15} | WINNER: {}{}\n",
            format!("{}:", outcome.attribute.label()),
            comparison.first,
            format_value(outcome.attribute, outcome.first),
            comparison.second,
            format_value(outcome.attribute, outcome.second),
            winner,
            marker
        ));
    }
    out.push_str(&rule());

    out.push_str("\n  FINAL SCORE\n");
    for (side, card) in [(Side::First, first), (Side::Second, second)] {
        out.push_str(&format!(
            "  [{}] {:<20} : {} win(s)\n",
            card.code,
            card.name,
            comparison.wins(side)
        ));
    }
    if comparison.ties > 0 {
        out.push_str(&format!("  {:<26} : {}\n", "Ties", comparison.ties));
    }
    out.push('\n');

    match comparison.result() {
        MatchResult::Winner(code) => {
            let card = if code == first.code { first } else { second };
            out.push_str(&format!(
                "  *** WINNING CARD: [{}] - {}! ***\n",
                card.code, card.name
            ));
        }
        MatchResult::Tie => out.push_str("  *** FINAL RESULT: TIE! ***\n"),
    }
    out.push_str(&rule());
    out
}
