use serde::{Serialize, Deserialize};
use std::collections::HashMap;

/// A practice question as it appears in the catalog. Immutable once loaded.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub title: String,
    pub link: String,
}

/// Display color used when a persisted level tag no longer maps to a known level.
pub const DEFAULT_LEVEL_COLOR: &str = "#4285F4";

/// The four difficulty tiers. Each selects one question list from the catalog.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Basic,
    Medium,
    Advanced,
    Pro,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Basic, Level::Medium, Level::Advanced, Level::Pro];

    /// The stable tag used in the catalog and in persisted results.
    pub fn key(self) -> &'static str {
        match self {
            Level::Basic => "basic",
            Level::Medium => "medium",
            Level::Advanced => "advanced",
            Level::Pro => "pro",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::Basic => "Basic",
            Level::Medium => "Medium",
            Level::Advanced => "Advanced",
            Level::Pro => "Pro",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Level::Basic => "Fundamentals & Easy Problems",
            Level::Medium => "Intermediate Challenges",
            Level::Advanced => "Complex Problem Solving",
            Level::Pro => "Expert Level Challenges",
        }
    }

    /// Google brand color for the level.
    pub fn color(self) -> &'static str {
        match self {
            Level::Basic => "#34A853",
            Level::Medium => "#FBBC05",
            Level::Advanced => "#4285F4",
            Level::Pro => "#EA4335",
        }
    }

    pub fn from_key(key: &str) -> Option<Level> {
        Level::ALL.into_iter().find(|l| l.key() == key)
    }
}

/// Color lookup for a raw level tag. Unknown tags fall back to the default
/// color rather than failing.
pub fn level_color(key: &str) -> &'static str {
    Level::from_key(key).map(Level::color).unwrap_or(DEFAULT_LEVEL_COLOR)
}

/// One level's entry in the catalog file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct QuestionSet {
    pub questions: Vec<Question>,
}

/// The full question catalog: level tag -> ordered question list.
/// Loaded whole at startup, read-only afterwards.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Catalog(pub HashMap<String, QuestionSet>);

impl Catalog {
    /// Parses the embedded catalog JSON. A malformed catalog degrades to an
    /// empty one and logs, matching the fail-soft policy for stored data.
    pub fn from_json(raw: &str) -> Catalog {
        match serde_json::from_str(raw) {
            Ok(map) => Catalog(map),
            Err(e) => {
                log::error!("Failed to parse question catalog: {e}");
                Catalog::default()
            }
        }
    }

    pub fn questions_for(&self, level: Level) -> &[Question] {
        self.0
            .get(level.key())
            .map(|set| set.questions.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_keys_round_trip() {
        for level in Level::ALL {
            assert_eq!(Level::from_key(level.key()), Some(level));
        }
        assert_eq!(Level::from_key("legendary"), None);
    }

    #[test]
    fn test_unknown_level_color_falls_back() {
        assert_eq!(level_color("basic"), "#34A853");
        assert_eq!(level_color("legendary"), DEFAULT_LEVEL_COLOR);
    }

    #[test]
    fn test_catalog_parse_and_lookup() {
        let catalog = Catalog::from_json(
            r#"{"basic":{"questions":[{"id":"1","title":"Two Sum","link":"https://x/1"}]}}"#,
        );
        let questions = catalog.questions_for(Level::Basic);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id, "1");
        assert!(catalog.questions_for(Level::Pro).is_empty());
    }

    #[test]
    fn test_malformed_catalog_degrades_to_empty() {
        let catalog = Catalog::from_json("not json at all");
        assert!(catalog.0.is_empty());
    }
}
