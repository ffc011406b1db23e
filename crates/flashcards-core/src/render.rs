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

//! Assembling a card's display lines.
//!
//! A rendered card looks like this (width 30, no keywords):
//!
//! ```text
//! ******************************
//! *                            *
//! *     Capital of France      *
//! *                            *
//! ******************************
//! ******************************
//! *                            *
//! *   Press [Enter] to show    *
//! *          content           *
//! *                            *
//! *                            *
//! *                            *
//! ******************************
//! ```

use crate::layout::border_line;
use crate::layout::frame;
use crate::layout::wrap;
use crate::types::card::Card;
use crate::types::visibility::Visibility;

/// Shown in place of the content while the card is hidden.
pub const PLACEHOLDER: &str = "Press [Enter] to show content";

/// Printed before the first border so the card is separated from whatever
/// precedes it.
pub const LEADING_MARKER: &str = "\n";

/// Frame every line with the card's width and border.
fn framed(card: &Card, lines: Vec<String>) -> Vec<String> {
    let layout = card.layout();
    lines
        .iter()
        .map(|line| frame(line, layout.max_width, layout.border))
        .collect()
}

/// A blank line, the wrapped text, and another blank line, all framed.
fn padded_block(card: &Card, text: &str) -> Vec<String> {
    let mut lines = vec![String::new()];
    lines.extend(wrap(text, card.layout().max_width));
    lines.push(String::new());
    framed(card, lines)
}

pub fn topic_block(card: &Card) -> Vec<String> {
    padded_block(card, card.topic())
}

/// The content block, padded with blank lines to a height that does not
/// depend on the card's visibility.
///
/// The height is the largest of: the configured minimum, the unpadded height
/// of the taller of the two states, and the current unpadded height.
pub fn content_block(card: &Card) -> Vec<String> {
    let width = card.layout().max_width;
    let content = wrap(card.content(), width);
    let placeholder = wrap(PLACEHOLDER, width);
    let shown = match card.visibility() {
        Visibility::Hidden => &placeholder,
        Visibility::Revealed => &content,
    };

    let mut lines = vec![String::new()];
    lines.extend(shown.iter().cloned());
    lines.push(String::new());

    let current_height = lines.len();
    let expected_height = content.len().max(placeholder.len()) + 2;
    let height = card
        .layout()
        .min_content_height
        .max(expected_height)
        .max(current_height);
    lines.resize(height, String::new());

    framed(card, lines)
}

/// `None` when the card has no keywords.
pub fn keywords_block(card: &Card) -> Option<Vec<String>> {
    card.keywords().map(|keywords| padded_block(card, keywords))
}

/// Every line of the card, top to bottom.
pub fn render(card: &Card) -> Vec<String> {
    let layout = card.layout();
    let border = border_line(layout.max_width, layout.border);

    let mut lines = vec![LEADING_MARKER.to_string(), border.clone()];
    lines.extend(topic_block(card));
    lines.push(border.clone());
    lines.push(border.clone());
    lines.extend(content_block(card));
    if let Some(block) = keywords_block(card) {
        lines.push(border.clone());
        lines.push(border.clone());
        lines.extend(block);
    }
    lines.push(border);
    lines
}
