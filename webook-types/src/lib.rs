//! Shared types for webook
//!
//! This crate provides the small vocabulary used across the webook crates:
//! block and chapter identifiers, the document theme, and the direction of
//! a reorder operation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Generate a fresh opaque identifier.
pub fn fresh_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Block identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A freshly generated, unique block id
    pub fn generate() -> Self {
        Self(fresh_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        BlockId(id.to_string())
    }
}

/// Chapter identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChapterId(pub String);

impl ChapterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(fresh_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChapterId {
    fn from(id: &str) -> Self {
        ChapterId(id.to_string())
    }
}

/// Color scheme of the exported document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Sepia,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Sepia => "sepia",
        }
    }
}

/// Body typeface family of the exported document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Font {
    #[default]
    Default,
    Serif,
    Mono,
}

/// Direction of a single-step reorder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

impl MoveDirection {
    /// Index of the neighbour this move swaps with, if it exists
    pub fn neighbour(&self, index: usize, len: usize) -> Option<usize> {
        match self {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => (index + 1 < len).then_some(index + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ids_are_distinct() {
        let a = BlockId::generate();
        let b = BlockId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 32);
    }

    #[test]
    fn test_neighbour_bounds() {
        assert_eq!(MoveDirection::Up.neighbour(0, 3), None);
        assert_eq!(MoveDirection::Up.neighbour(2, 3), Some(1));
        assert_eq!(MoveDirection::Down.neighbour(2, 3), None);
        assert_eq!(MoveDirection::Down.neighbour(0, 3), Some(1));
    }

    #[test]
    fn test_theme_serde() {
        let theme: Theme = serde_json::from_str("\"sepia\"").unwrap();
        assert_eq!(theme, Theme::Sepia);
        assert_eq!(theme.as_str(), "sepia");
    }
}
