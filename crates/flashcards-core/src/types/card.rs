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

use crate::config::LayoutConfig;
use crate::deck::CardRecord;
use crate::types::visibility::Visibility;

/// A flashcard and its display state.
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    topic: String,
    content: String,
    keywords: Option<String>,
    visibility: Visibility,
    layout: LayoutConfig,
}

impl Card {
    /// Construct a hidden card. Empty keywords are treated as absent.
    pub fn new(
        topic: impl Into<String>,
        content: impl Into<String>,
        keywords: Option<String>,
        layout: LayoutConfig,
    ) -> Self {
        Self {
            topic: topic.into(),
            content: content.into(),
            keywords: keywords.filter(|k| !k.trim().is_empty()),
            visibility: Visibility::Hidden,
            layout,
        }
    }

    pub fn from_record(record: CardRecord, layout: LayoutConfig) -> Self {
        Self::new(record.topic, record.content, record.keywords, layout)
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn keywords(&self) -> Option<&str> {
        self.keywords.as_deref()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Flip between hidden and revealed.
    pub fn toggle_visibility(&mut self) {
        self.visibility = self.visibility.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_is_hidden() {
        let card = Card::new("Q", "A", None, LayoutConfig::default());
        assert_eq!(card.visibility(), Visibility::Hidden);
    }

    #[test]
    fn test_toggle() {
        let mut card = Card::new("Q", "A", None, LayoutConfig::default());
        card.toggle_visibility();
        assert_eq!(card.visibility(), Visibility::Revealed);
        card.toggle_visibility();
        assert_eq!(card.visibility(), Visibility::Hidden);
    }

    #[test]
    fn test_empty_keywords_are_absent() {
        let card = Card::new("Q", "A", Some("  ".to_string()), LayoutConfig::default());
        assert_eq!(card.keywords(), None);
        let card = Card::new("Q", "A", Some("hint".to_string()), LayoutConfig::default());
        assert_eq!(card.keywords(), Some("hint"));
    }

    #[test]
    fn test_from_record() {
        let record = CardRecord {
            topic: "Capital of France".to_string(),
            content: "Paris".to_string(),
            keywords: Some("geography".to_string()),
        };
        let layout = LayoutConfig {
            max_width: 40,
            ..LayoutConfig::default()
        };
        let card = Card::from_record(record, layout);
        assert_eq!(card.topic(), "Capital of France");
        assert_eq!(card.content(), "Paris");
        assert_eq!(card.keywords(), Some("geography"));
        assert_eq!(card.layout().max_width, 40);
    }
}
