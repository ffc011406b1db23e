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

use std::io::stdin;
use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use flashcards_core::config::LayoutConfig;
use flashcards_core::error::Fallible;

use crate::session::SessionConfig;
use crate::session::start_session;
use crate::terminal::Terminal;
use crate::terminal::host_clear_screen;

/// Drill flashcards in the terminal.
#[derive(Parser)]
#[command(name = "flashcards", version, about, long_about = None)]
struct Command {
    /// Path to the deck file. `.toml` and `.json` files are read as such, anything else as YAML.
    file_name: PathBuf,
    /// Show the cards in file order. By default, they are shuffled.
    #[arg(long)]
    ordered: bool,
    /// Width of a card, borders included.
    #[arg(long, default_value_t = LayoutConfig::DEFAULT_MAX_WIDTH)]
    width: usize,
    /// Minimum number of lines in the content block.
    #[arg(long, default_value_t = LayoutConfig::DEFAULT_MIN_CONTENT_HEIGHT)]
    min_height: usize,
    /// Character used to draw the borders.
    #[arg(long, default_value_t = LayoutConfig::DEFAULT_BORDER)]
    border: char,
    /// Seed for the shuffle, to get the same order every time.
    #[arg(long)]
    seed: Option<u64>,
}

impl Command {
    fn into_config(self) -> SessionConfig {
        SessionConfig {
            file_name: self.file_name,
            ordered: self.ordered,
            seed: self.seed,
            layout: LayoutConfig {
                max_width: self.width,
                min_content_height: self.min_height,
                border: self.border,
            },
        }
    }
}

pub fn entrypoint() -> Fallible<()> {
    let config = Command::parse().into_config();
    let mut terminal = Terminal::new(stdin().lock(), stdout().lock(), host_clear_screen());
    start_session(config, &mut terminal)
}
