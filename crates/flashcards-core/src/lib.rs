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

//! flashcards-core: Core library for the flashcards terminal drill.
//!
//! This library has no terminal I/O. It provides:
//! - Word wrapping and bordered centering of lines
//! - The card model and its hidden/revealed state
//! - Rendering a card into fixed-width display lines
//! - Parsing YAML, TOML and JSON deck files

pub mod config;
pub mod deck;
pub mod error;
pub mod layout;
pub mod render;
pub mod rng;
pub mod types;

// Re-exports for convenience
pub use config::LayoutConfig;
pub use deck::{CardRecord, DeckFormat, parse_deck};
pub use error::{ErrorReport, Fallible, fail};
pub use render::render;
pub use types::card::Card;
pub use types::visibility::Visibility;
