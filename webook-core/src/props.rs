//! Typed views over variant props.
//!
//! Blocks store their props as a JSON object so documents round-trip with the
//! editing surface unchanged. These structs are the typed shapes the registry
//! builds defaults from and the compiler reads through [`Block::props_as`].
//! Every struct is `#[serde(default)]`: a missing key reads as empty rather
//! than failing, which keeps a half-authored widget renderable.
//!
//! [`Block::props_as`]: crate::models::Block::props_as

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Props;

/// Serialize a props struct into the untyped map stored on a block.
pub fn to_props<T: Serialize>(value: &T) -> Props {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::Object(map)) => map,
        _ => Props::new(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
    pub is_correct: bool,
    pub explanation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizFeedback {
    pub correct: String,
    pub incorrect: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizProps {
    pub options: Vec<QuizOption>,
    pub feedback: QuizFeedback,
    pub points: u32,
}

impl QuizProps {
    /// Index of the first option flagged correct
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o.is_correct)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollProps {
    pub options: Vec<String>,
    pub votes: Vec<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    pub done: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecklistProps {
    pub items: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flashcard {
    pub id: String,
    pub front: String,
    pub back: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashcardsProps {
    pub cards: Vec<Flashcard>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortItem {
    pub id: String,
    pub text: String,
    pub order: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortableProps {
    pub items: Vec<SortItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchPair {
    pub id: String,
    pub left: String,
    pub right: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingProps {
    pub pairs: Vec<MatchPair>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableProps {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleProps {
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineEvent {
    pub id: String,
    pub date: String,
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineProps {
    pub events: Vec<TimelineEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Step {
    pub id: String,
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepsProps {
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeytermProps {
    pub definition: String,
}

/// Shared by `callout`, `note` and `highlight_box`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccentProps {
    pub color: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressBarProps {
    pub value: f64,
    pub max: f64,
    pub show_label: bool,
    pub color: String,
}

impl Default for ProgressBarProps {
    fn default() -> Self {
        Self {
            value: 0.0,
            max: 100.0,
            show_label: true,
            color: "blue".to_string(),
        }
    }
}

impl ProgressBarProps {
    /// Whole percentage in [0, 100]; a non-positive max counts as 100
    pub fn percent(&self) -> u32 {
        let max = if self.max > 0.0 { self.max } else { 100.0 };
        let pct = (self.value / max * 100.0).round();
        if pct.is_nan() {
            0
        } else {
            pct.clamp(0.0, 100.0) as u32
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingProps {
    pub max: u32,
    pub value: u32,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Default for RatingProps {
    fn default() -> Self {
        Self {
            max: RatingProps::DEFAULT_STARS,
            value: 0,
            kind: "stars".to_string(),
        }
    }
}

impl RatingProps {
    pub const DEFAULT_STARS: u32 = 5;
    pub const MAX_STARS: u32 = 10;

    /// Stars actually shown: `max: 0` means the default, and more than
    /// [`Self::MAX_STARS`] is capped
    pub fn stars(&self) -> u32 {
        match self.max {
            0 => Self::DEFAULT_STARS,
            n => n.min(Self::MAX_STARS),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CountdownProps {
    pub target_date: String,
    pub label: String,
}

impl CountdownProps {
    /// Parse the target as an instant.
    ///
    /// Accepts RFC 3339, `YYYY-MM-DDTHH:MM[:SS]` (read as UTC) and bare
    /// `YYYY-MM-DD` (midnight UTC).
    pub fn target(&self) -> Option<DateTime<Utc>> {
        let raw = self.target_date.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
                return Some(naive.and_utc());
            }
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub id: String,
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsCardProps {
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonSide {
    pub title: String,
    pub color: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonProps {
    pub left: ComparisonSide,
    pub right: ComparisonSide,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Columns2Props {
    pub col1: String,
    pub col2: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Columns3Props {
    pub col1: String,
    pub col2: String,
    pub col3: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeProps {
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacerProps {
    pub height: u32,
}

impl Default for SpacerProps {
    fn default() -> Self {
        Self { height: 40 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageProps {
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProps {
    pub name: String,
}

/// Sandboxed frame blocks (`interactive_tool`, `mini_app`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameProps {
    pub label: String,
    pub height: u32,
}

impl Default for FrameProps {
    fn default() -> Self {
        Self {
            label: String::new(),
            height: 320,
        }
    }
}
