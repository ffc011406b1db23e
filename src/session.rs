// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs::read_to_string;
use std::io::BufRead;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use flashcards_core::config::LayoutConfig;
use flashcards_core::deck::DeckFormat;
use flashcards_core::deck::parse_deck;
use flashcards_core::error::ErrorReport;
use flashcards_core::error::Fallible;
use flashcards_core::render::render;
use flashcards_core::rng::TinyRng;
use flashcards_core::rng::shuffle;
use flashcards_core::types::card::Card;

use crate::terminal::Terminal;

pub struct SessionConfig {
    /// Path to the deck file.
    pub file_name: PathBuf,
    /// Show cards in file order instead of shuffling.
    pub ordered: bool,
    /// Fixed shuffle seed. When absent, the clock is used.
    pub seed: Option<u64>,
    pub layout: LayoutConfig,
}

/// Read the deck at `path` and build one hidden card per record, in file
/// order.
pub fn load(path: &Path, layout: LayoutConfig) -> Fallible<Vec<Card>> {
    let format = DeckFormat::from_path(path);
    log::debug!("Loading {format} deck from {}", path.display());
    let text = read_to_string(path)
        .map_err(|e| ErrorReport::new(format!("failed to read {}: {e}", path.display())))?;
    let cards: Vec<Card> = parse_deck(&text, format)?
        .into_iter()
        .map(|record| Card::from_record(record, layout))
        .collect();
    log::debug!("Loaded {} cards", cards.len());
    Ok(cards)
}

/// Print the card, then flip its visibility.
pub fn draw<R: BufRead, W: Write>(card: &mut Card, terminal: &mut Terminal<R, W>) -> Fallible<()> {
    terminal.write_lines(&render(card))?;
    card.toggle_visibility();
    Ok(())
}

/// Drill every card: shown hidden, then revealed, with an acknowledgment
/// after each.
pub fn run_all<R: BufRead, W: Write>(
    cards: Vec<Card>,
    ordered: bool,
    seed: Option<u64>,
    terminal: &mut Terminal<R, W>,
) -> Fallible<()> {
    let cards = if ordered {
        cards
    } else {
        let seed = seed.unwrap_or_else(TinyRng::clock_seed);
        log::debug!("Shuffling with seed {seed}");
        let mut rng = TinyRng::from_seed(seed);
        shuffle(cards, &mut rng)
    };
    let total = cards.len();
    for (idx, mut card) in cards.into_iter().enumerate() {
        for _ in 0..2 {
            log::debug!("Card {}/{total}: {:?}", idx + 1, card.visibility());
            terminal.clear();
            draw(&mut card, terminal)?;
            terminal.acknowledge()?;
        }
    }
    Ok(())
}

pub fn start_session<R: BufRead, W: Write>(
    config: SessionConfig,
    terminal: &mut Terminal<R, W>,
) -> Fallible<()> {
    let cards = load(&config.file_name, config.layout)?;
    run_all(cards, config.ordered, config.seed, terminal)
}
