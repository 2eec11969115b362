//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory while the quiz runs
//! - persisted through the key-value store between the quiz and results views
//! - loaded from the bundled question resource or an admin override

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single quiz question.
///
/// Field names follow the question resource schema: the grouping tag is
/// stored as `type` in JSON. `category` is a free-form tag, not a closed
/// enum, so admin overrides can introduce new categories without a code
/// change (unmapped ones get a generic recommendation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    /// Display labels for the answer choices, e.g. `["Yes", "No"]`.
    pub options: Vec<String>,
    #[serde(rename = "type")]
    pub category: String,
}

/// A career suggestion produced by the recommendation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub reason: String,
}

/// Per-category count of affirmative answers.
///
/// Backed by a `Vec` rather than a `HashMap` so iteration order is the order
/// in which categories were first scored. That order doubles as the tie-break
/// when ranking categories (a stable sort on descending count keeps earlier
/// categories ahead of equal-scored later ones), and it survives a JSON
/// round-trip: the map serializes as an ordinary JSON object and deserializes
/// in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreMap {
    entries: Vec<(String, u32)>,
}

impl ScoreMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `category`, inserting it at the end with
    /// count 1 if it has not been scored yet.
    pub fn bump(&mut self, category: &str) {
        match self.entries.iter_mut().find(|(c, _)| c == category) {
            Some((_, n)) => *n += 1,
            None => self.entries.push((category.to_string(), 1)),
        }
    }

    pub fn get(&self, category: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|&(_, n)| n)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(category, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(c, n)| (c.as_str(), *n))
    }

    /// Categories sorted by descending count; equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<(&str, u32)> {
        let mut ranked: Vec<(&str, u32)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

impl FromIterator<(String, u32)> for ScoreMap {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (category, count) in iter {
            // Last write wins, matching plain map semantics.
            match map.entries.iter_mut().find(|(c, _)| *c == category) {
                Some((_, n)) => *n = count,
                None => map.entries.push((category, count)),
            }
        }
        map
    }
}

impl Serialize for ScoreMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, count) in &self.entries {
            map.serialize_entry(category, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ScoreMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScoreMapVisitor;

        impl<'de> Visitor<'de> for ScoreMapVisitor {
            type Value = ScoreMap;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of category names to counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ScoreMap, A::Error> {
                let mut entries: Vec<(String, u32)> = Vec::new();
                while let Some((category, count)) = access.next_entry::<String, u32>()? {
                    match entries.iter_mut().find(|(c, _)| *c == category) {
                        Some((_, n)) => *n = count,
                        None => entries.push((category, count)),
                    }
                }
                Ok(ScoreMap { entries })
            }
        }

        deserializer.deserialize_map(ScoreMapVisitor)
    }
}

/// Output of one scoring pass: the tally plus how many questions were
/// answered affirmatively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scored {
    pub scores: ScoreMap,
    pub answered: usize,
}
