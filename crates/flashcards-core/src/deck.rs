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

use std::fmt::Display;
use std::fmt::Formatter;
use std::path::Path;

use serde::Deserialize;

use crate::error::Fallible;

/// One card as written in a deck file.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CardRecord {
    pub topic: String,
    pub content: String,
    #[serde(default)]
    pub keywords: Option<String>,
}

/// TOML has no top-level arrays, so cards live under a `cards` key.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlDeck {
    cards: Vec<CardRecord>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeckFormat {
    Yaml,
    Toml,
    Json,
}

impl DeckFormat {
    /// Pick a format from the file extension. Anything that is not
    /// `.toml` or `.json` is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match ext.as_deref() {
            Some("toml") => DeckFormat::Toml,
            Some("json") => DeckFormat::Json,
            _ => DeckFormat::Yaml,
        }
    }
}

impl Display for DeckFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckFormat::Yaml => write!(f, "yaml"),
            DeckFormat::Toml => write!(f, "toml"),
            DeckFormat::Json => write!(f, "json"),
        }
    }
}

/// Parse the text of a deck file into card records, in file order.
pub fn parse_deck(text: &str, format: DeckFormat) -> Fallible<Vec<CardRecord>> {
    let records = match format {
        DeckFormat::Yaml => serde_yaml::from_str(text)?,
        DeckFormat::Toml => toml::from_str::<TomlDeck>(text)?.cards,
        DeckFormat::Json => serde_json::from_str(text)?,
    };
    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    const YAML_DECK: &str = "\
- topic: Capital of France
  content: Paris
  keywords: geography
- topic: Largest planet
  content: >
    Jupiter, a gas giant
    with a great red spot.
";

    fn record(topic: &str, content: &str, keywords: Option<&str>) -> CardRecord {
        CardRecord {
            topic: topic.to_string(),
            content: content.to_string(),
            keywords: keywords.map(str::to_string),
        }
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(DeckFormat::from_path(&PathBuf::from("a.yaml")), DeckFormat::Yaml);
        assert_eq!(DeckFormat::from_path(&PathBuf::from("a.yml")), DeckFormat::Yaml);
        assert_eq!(DeckFormat::from_path(&PathBuf::from("deck")), DeckFormat::Yaml);
        assert_eq!(DeckFormat::from_path(&PathBuf::from("a.TOML")), DeckFormat::Toml);
        assert_eq!(DeckFormat::from_path(&PathBuf::from("a.json")), DeckFormat::Json);
    }

    #[test]
    fn test_parse_yaml() -> Fallible<()> {
        let records = parse_deck(YAML_DECK, DeckFormat::Yaml)?;
        assert_eq!(
            records,
            vec![
                record("Capital of France", "Paris", Some("geography")),
                record(
                    "Largest planet",
                    "Jupiter, a gas giant with a great red spot.\n",
                    None
                ),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_parse_toml() -> Fallible<()> {
        let text = r#"
[[cards]]
topic = "Capital of France"
content = "Paris"
keywords = "geography"

[[cards]]
topic = "Capital of Italy"
content = "Rome"
"#;
        let records = parse_deck(text, DeckFormat::Toml)?;
        assert_eq!(
            records,
            vec![
                record("Capital of France", "Paris", Some("geography")),
                record("Capital of Italy", "Rome", None),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_parse_json() -> Fallible<()> {
        let text = r#"[{"topic": "Q", "content": "A"}]"#;
        let records = parse_deck(text, DeckFormat::Json)?;
        assert_eq!(records, vec![record("Q", "A", None)]);
        Ok(())
    }

    #[test]
    fn test_missing_required_field() {
        let result = parse_deck("- topic: Q\n", DeckFormat::Yaml);
        let err = result.unwrap_err();
        assert!(err.message().contains("content"), "{err}");
    }

    #[test]
    fn test_unknown_key() {
        let result = parse_deck("- topic: Q\n  content: A\n  hint: H\n", DeckFormat::Yaml);
        let err = result.unwrap_err();
        assert!(err.message().contains("hint"), "{err}");
    }

    #[test]
    fn test_malformed_yaml() {
        let result = parse_deck("- topic: [unclosed\n", DeckFormat::Yaml);
        assert!(result.unwrap_err().message().starts_with("YAML error"));
    }

    #[test]
    fn test_not_a_sequence() {
        let result = parse_deck("topic: Q\ncontent: A\n", DeckFormat::Yaml);
        assert!(result.is_err());
    }
}
