//! Summary card picked up by the CI system after a run

use serde::Serialize;

/// JSON schema the CI system renders the card with
pub const CARD_SCHEMA: &str = "https://drone-plugins.github.io/drone-gh-pages/card.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub schema: String,
    pub data: CardData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardData {
    pub url: String,
    /// Lint summary, empty when linting is disabled
    pub linter: String,
}

impl Card {
    pub fn new(url: impl Into<String>, linter: impl Into<String>) -> Self {
        Self {
            schema: CARD_SCHEMA.to_string(),
            data: CardData {
                url: url.into(),
                linter: linter.into(),
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}
