//! Block schema registry.
//!
//! The closed catalog of block variants. Each variant maps to display
//! metadata for the editing surface and to a default-props factory used when
//! a block is created. Both mappings are exhaustive matches, so adding a
//! variant without a factory or metadata entry does not compile.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::CoreError;
use crate::models::{Block, Props};
use crate::props::*;
use webook_types::{fresh_id, BlockId};

/// Picker group of a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Text,
    Media,
    Layout,
    Interactive,
    Visual,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Text => "text",
            Category::Media => "media",
            Category::Layout => "layout",
            Category::Interactive => "interactive",
            Category::Visual => "visual",
        }
    }
}

/// A registered block variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    H1,
    H2,
    H3,
    Paragraph,
    Quote,
    Callout,
    Note,
    Codeblock,
    Image,
    Video,
    Audio,
    Embed,
    File,
    AudioNarrator,
    Divider,
    Spacer,
    Columns2,
    Columns3,
    Quiz,
    Poll,
    Checklist,
    Flashcards,
    Sortable,
    Matching,
    InteractiveTool,
    MiniApp,
    Table,
    Toggle,
    Timeline,
    Steps,
    Keyterm,
    HighlightBox,
    ProgressBar,
    Rating,
    Countdown,
    StatsCard,
    Comparison,
}

/// Display metadata for one variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantMeta {
    pub icon: &'static str,
    pub label: &'static str,
    pub category: Category,
    pub color: &'static str,
    pub shortcut: Option<&'static str>,
}

/// Registry entry as listed for the editing surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantInfo {
    pub variant: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<&'static str>,
}

impl Variant {
    pub const ALL: [Variant; 37] = [
        Variant::H1,
        Variant::H2,
        Variant::H3,
        Variant::Paragraph,
        Variant::Quote,
        Variant::Callout,
        Variant::Note,
        Variant::Codeblock,
        Variant::Image,
        Variant::Video,
        Variant::Audio,
        Variant::Embed,
        Variant::File,
        Variant::AudioNarrator,
        Variant::Divider,
        Variant::Spacer,
        Variant::Columns2,
        Variant::Columns3,
        Variant::Quiz,
        Variant::Poll,
        Variant::Checklist,
        Variant::Flashcards,
        Variant::Sortable,
        Variant::Matching,
        Variant::InteractiveTool,
        Variant::MiniApp,
        Variant::Table,
        Variant::Toggle,
        Variant::Timeline,
        Variant::Steps,
        Variant::Keyterm,
        Variant::HighlightBox,
        Variant::ProgressBar,
        Variant::Rating,
        Variant::Countdown,
        Variant::StatsCard,
        Variant::Comparison,
    ];

    /// The tag stored in a block's `type` field
    pub fn tag(&self) -> &'static str {
        match self {
            Variant::H1 => "h1",
            Variant::H2 => "h2",
            Variant::H3 => "h3",
            Variant::Paragraph => "paragraph",
            Variant::Quote => "quote",
            Variant::Callout => "callout",
            Variant::Note => "note",
            Variant::Codeblock => "codeblock",
            Variant::Image => "image",
            Variant::Video => "video",
            Variant::Audio => "audio",
            Variant::Embed => "embed",
            Variant::File => "file",
            Variant::AudioNarrator => "audio_narrator",
            Variant::Divider => "divider",
            Variant::Spacer => "spacer",
            Variant::Columns2 => "columns2",
            Variant::Columns3 => "columns3",
            Variant::Quiz => "quiz",
            Variant::Poll => "poll",
            Variant::Checklist => "checklist",
            Variant::Flashcards => "flashcards",
            Variant::Sortable => "sortable",
            Variant::Matching => "matching",
            Variant::InteractiveTool => "interactive_tool",
            Variant::MiniApp => "mini_app",
            Variant::Table => "table",
            Variant::Toggle => "toggle",
            Variant::Timeline => "timeline",
            Variant::Steps => "steps",
            Variant::Keyterm => "keyterm",
            Variant::HighlightBox => "highlight_box",
            Variant::ProgressBar => "progress_bar",
            Variant::Rating => "rating",
            Variant::Countdown => "countdown",
            Variant::StatsCard => "stats_card",
            Variant::Comparison => "comparison",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Variant> {
        Variant::ALL.iter().copied().find(|v| v.tag() == tag)
    }

    pub fn meta(&self) -> VariantMeta {
        use Category::*;
        let (icon, label, category, color, shortcut) = match self {
            Variant::H1 => ("H1", "Heading 1", Text, "#60a5fa", Some("/h1")),
            Variant::H2 => ("H2", "Heading 2", Text, "#818cf8", Some("/h2")),
            Variant::H3 => ("H3", "Heading 3", Text, "#a78bfa", Some("/h3")),
            Variant::Paragraph => ("¶", "Paragraph", Text, "#94a3b8", Some("/p")),
            Variant::Quote => ("\"", "Quote", Text, "#34d399", Some("/q")),
            Variant::Callout => ("💡", "Callout", Text, "#fbbf24", Some("/call")),
            Variant::Note => ("📌", "Note", Text, "#f97316", Some("/note")),
            Variant::Codeblock => ("<>", "Code", Text, "#6ee7b7", Some("/code")),
            Variant::Image => ("🖼", "Image", Media, "#c084fc", Some("/img")),
            Variant::Video => ("▶", "Video", Media, "#f87171", Some("/vid")),
            Variant::Audio => ("🎙", "Audio", Media, "#fb923c", Some("/aud")),
            Variant::Embed => ("🔗", "Embed", Media, "#38bdf8", Some("/emb")),
            Variant::File => ("📎", "File", Media, "#94a3b8", Some("/file")),
            Variant::AudioNarrator => ("🔊", "Narration", Media, "#f97316", Some("/audio")),
            Variant::Divider => ("—", "Divider", Layout, "#4b5563", None),
            Variant::Spacer => ("↕", "Spacer", Layout, "#374151", None),
            Variant::Columns2 => ("⊞", "2 Columns", Layout, "#7c3aed", Some("/col")),
            Variant::Columns3 => ("⊟", "3 Columns", Layout, "#6d28d9", None),
            Variant::Quiz => ("❓", "Quiz", Interactive, "#f59e0b", Some("/quiz")),
            Variant::Poll => ("📊", "Poll", Interactive, "#10b981", Some("/poll")),
            Variant::Checklist => ("✅", "Checklist", Interactive, "#34d399", Some("/check")),
            Variant::Flashcards => ("🃏", "Flashcards", Interactive, "#818cf8", Some("/flash")),
            Variant::Sortable => ("🔀", "Sorting", Interactive, "#f97316", Some("/sort")),
            Variant::Matching => ("🔗", "Matching", Interactive, "#06b6d4", Some("/match")),
            Variant::InteractiveTool => ("⚡", "Interactive tool", Interactive, "#fbbf24", Some("/tool")),
            Variant::MiniApp => ("📱", "Mini app", Interactive, "#a78bfa", Some("/app")),
            Variant::Table => ("⊞", "Table", Visual, "#60a5fa", Some("/table")),
            Variant::Toggle => ("▶", "Toggle", Visual, "#a78bfa", Some("/tog")),
            Variant::Timeline => ("📅", "Timeline", Visual, "#34d399", Some("/time")),
            Variant::Steps => ("1️⃣", "Steps", Visual, "#38bdf8", Some("/steps")),
            Variant::Keyterm => ("🔑", "Key term", Visual, "#fbbf24", Some("/key")),
            Variant::HighlightBox => ("🎨", "Highlight", Visual, "#f472b6", Some("/hl")),
            Variant::ProgressBar => ("📈", "Progress bar", Visual, "#10b981", Some("/prog")),
            Variant::Rating => ("⭐", "Rating", Visual, "#f59e0b", Some("/rate")),
            Variant::Countdown => ("⏱", "Countdown", Visual, "#f43f5e", Some("/count")),
            Variant::StatsCard => ("📊", "Stats card", Visual, "#8b5cf6", Some("/stat")),
            Variant::Comparison => ("⚖", "Comparison", Visual, "#06b6d4", Some("/comp")),
        };
        VariantMeta {
            icon,
            label,
            category,
            color,
            shortcut,
        }
    }

    pub fn category(&self) -> Category {
        self.meta().category
    }

    /// Default content and props for a freshly created block
    pub fn defaults(&self) -> (String, Props) {
        let (content, props) = match self {
            Variant::H1
            | Variant::H2
            | Variant::H3
            | Variant::Paragraph
            | Variant::Quote
            | Variant::Video
            | Variant::Audio
            | Variant::Embed
            | Variant::AudioNarrator
            | Variant::Divider => ("", Props::new()),
            Variant::Callout => (
                "",
                to_props(&AccentProps {
                    icon: "💡".into(),
                    color: "amber".into(),
                }),
            ),
            Variant::Note => (
                "",
                to_props(&AccentProps {
                    icon: "📌".into(),
                    color: "blue".into(),
                }),
            ),
            Variant::Codeblock => (
                "",
                to_props(&CodeProps {
                    language: "javascript".into(),
                }),
            ),
            Variant::Image => ("", to_props(&ImageProps::default())),
            Variant::File => ("", to_props(&FileProps::default())),
            Variant::Spacer => ("", to_props(&SpacerProps::default())),
            Variant::Columns2 => ("", to_props(&Columns2Props::default())),
            Variant::Columns3 => ("", to_props(&Columns3Props::default())),
            Variant::Quiz => (
                "Quiz question?",
                to_props(&QuizProps {
                    options: ["Option A", "Option B", "Option C", "Option D"]
                        .iter()
                        .enumerate()
                        .map(|(i, text)| QuizOption {
                            id: fresh_id(),
                            text: text.to_string(),
                            is_correct: i == 0,
                            explanation: String::new(),
                        })
                        .collect(),
                    feedback: QuizFeedback {
                        correct: "✅ Great job!".into(),
                        incorrect: "❌ Try again.".into(),
                    },
                    points: 1,
                }),
            ),
            Variant::Poll => (
                "Your question?",
                to_props(&PollProps {
                    options: vec!["Option 1".into(), "Option 2".into(), "Option 3".into()],
                    votes: vec![0, 0, 0],
                }),
            ),
            Variant::Checklist => (
                "",
                to_props(&ChecklistProps {
                    items: ["Step 1", "Step 2"]
                        .iter()
                        .map(|text| ChecklistItem {
                            id: fresh_id(),
                            text: text.to_string(),
                            done: false,
                        })
                        .collect(),
                }),
            ),
            Variant::Flashcards => (
                "",
                to_props(&FlashcardsProps {
                    cards: [("Question?", "Answer"), ("Question 2?", "Answer 2")]
                        .iter()
                        .map(|(front, back)| Flashcard {
                            id: fresh_id(),
                            front: front.to_string(),
                            back: back.to_string(),
                        })
                        .collect(),
                }),
            ),
            // Stored out of canonical order so a fresh block is a real exercise.
            Variant::Sortable => (
                "Put the items in the right order:",
                to_props(&SortableProps {
                    items: [("Item 2", 1), ("Item 3", 2), ("Item 1", 0)]
                        .iter()
                        .map(|(text, order)| SortItem {
                            id: fresh_id(),
                            text: text.to_string(),
                            order: *order,
                        })
                        .collect(),
                }),
            ),
            Variant::Matching => (
                "Match the pairs:",
                to_props(&MatchingProps {
                    pairs: [("Term A", "Definition A"), ("Term B", "Definition B")]
                        .iter()
                        .map(|(left, right)| MatchPair {
                            id: fresh_id(),
                            left: left.to_string(),
                            right: right.to_string(),
                        })
                        .collect(),
                }),
            ),
            Variant::InteractiveTool => ("", to_props(&FrameProps::default())),
            Variant::MiniApp => (
                "",
                to_props(&FrameProps {
                    label: "Mini app".into(),
                    height: 480,
                }),
            ),
            Variant::Table => (
                "",
                to_props(&TableProps {
                    headers: vec!["Column 1".into(), "Column 2".into(), "Column 3".into()],
                    rows: vec![vec![String::new(); 3], vec![String::new(); 3]],
                }),
            ),
            Variant::Toggle => (
                "Click to expand...",
                to_props(&ToggleProps {
                    body: "Hidden toggle content.".into(),
                }),
            ),
            Variant::Timeline => (
                "",
                to_props(&TimelineProps {
                    events: [("2024", "Event 1"), ("2025", "Event 2")]
                        .iter()
                        .map(|(date, title)| TimelineEvent {
                            id: fresh_id(),
                            date: date.to_string(),
                            title: title.to_string(),
                            desc: String::new(),
                        })
                        .collect(),
                }),
            ),
            Variant::Steps => (
                "",
                to_props(&StepsProps {
                    steps: [("Step 1", "Step 1 description"), ("Step 2", "Step 2 description")]
                        .iter()
                        .map(|(title, desc)| Step {
                            id: fresh_id(),
                            title: title.to_string(),
                            desc: desc.to_string(),
                        })
                        .collect(),
                }),
            ),
            Variant::Keyterm => (
                "Term",
                to_props(&KeytermProps {
                    definition: "Definition of this term...".into(),
                }),
            ),
            Variant::HighlightBox => (
                "Important information to remember",
                to_props(&AccentProps {
                    color: "blue".into(),
                    icon: "💡".into(),
                }),
            ),
            Variant::ProgressBar => (
                "Course progress",
                to_props(&ProgressBarProps {
                    value: 65.0,
                    ..Default::default()
                }),
            ),
            Variant::Rating => ("Rate this material", to_props(&RatingProps::default())),
            Variant::Countdown => (
                "Time left until the exam",
                to_props(&CountdownProps {
                    target_date: String::new(),
                    label: "days".into(),
                }),
            ),
            Variant::StatsCard => (
                "",
                to_props(&StatsCardProps {
                    stats: [("95%", "Pass rate"), ("2h", "Study time"), ("4.9★", "Rating")]
                        .iter()
                        .map(|(value, label)| Stat {
                            id: fresh_id(),
                            value: value.to_string(),
                            label: label.to_string(),
                        })
                        .collect(),
                }),
            ),
            Variant::Comparison => (
                "",
                to_props(&ComparisonProps {
                    left: ComparisonSide {
                        title: "Option A".into(),
                        color: "blue".into(),
                        items: vec!["Advantage 1".into(), "Advantage 2".into()],
                    },
                    right: ComparisonSide {
                        title: "Option B".into(),
                        color: "orange".into(),
                        items: vec!["Advantage 1".into(), "Advantage 2".into()],
                    },
                }),
            ),
        };
        (content.to_string(), props)
    }

    /// Whether the variant renders author-supplied media that may be absent
    pub fn is_media(&self) -> bool {
        matches!(
            self,
            Variant::Image
                | Variant::Video
                | Variant::Audio
                | Variant::Embed
                | Variant::File
                | Variant::InteractiveTool
                | Variant::MiniApp
        )
    }
}

/// Resolve a variant tag, failing for anything outside the catalog
pub fn lookup(tag: &str) -> Result<Variant, CoreError> {
    Variant::from_tag(tag).ok_or_else(|| CoreError::UnknownVariant(tag.to_string()))
}

/// Create a block of the given variant with its default content and props
pub fn create_default(tag: &str) -> Result<Block, CoreError> {
    let variant = lookup(tag)?;
    let (content, props) = variant.defaults();
    Ok(Block {
        id: BlockId::generate(),
        variant: variant.tag().to_string(),
        content,
        props,
    })
}

/// Registry entries grouped by category, in catalog order
pub fn list_groups() -> BTreeMap<Category, Vec<VariantInfo>> {
    let mut groups: BTreeMap<Category, Vec<VariantInfo>> = BTreeMap::new();
    for variant in Variant::ALL {
        let meta = variant.meta();
        groups.entry(meta.category).or_default().push(VariantInfo {
            variant: variant.tag(),
            label: meta.label,
            icon: meta.icon,
            color: meta.color,
            shortcut: meta.shortcut,
        });
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tags_round_trip() {
        let mut seen = HashSet::new();
        for variant in Variant::ALL {
            assert!(seen.insert(variant.tag()), "duplicate tag {}", variant.tag());
            assert_eq!(Variant::from_tag(variant.tag()), Some(variant));
        }
        assert_eq!(Variant::from_tag("hologram"), None);
    }

    #[test]
    fn test_create_default_unknown_variant() {
        let err = create_default("hologram").unwrap_err();
        assert_eq!(err, CoreError::UnknownVariant("hologram".into()));
    }

    #[test]
    fn test_quiz_defaults_have_one_correct_option() {
        let block = create_default("quiz").unwrap();
        let props: QuizProps = block.props_as().unwrap();
        assert_eq!(props.options.len(), 4);
        assert_eq!(props.options.iter().filter(|o| o.is_correct).count(), 1);
        assert!(!block.content.is_empty());
        assert_eq!(props.points, 1);
    }

    #[test]
    fn test_poll_votes_parallel_to_options() {
        let block = create_default("poll").unwrap();
        let props: PollProps = block.props_as().unwrap();
        assert_eq!(props.options.len(), props.votes.len());
        assert!(props.votes.iter().all(|v| *v == 0));
    }

    #[test]
    fn test_sortable_defaults_are_shuffled() {
        let block = create_default("sortable").unwrap();
        let props: SortableProps = block.props_as().unwrap();
        let orders: Vec<i64> = props.items.iter().map(|i| i.order).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_ne!(orders, sorted);
    }

    #[test]
    fn test_fresh_ids_per_creation() {
        let a = create_default("checklist").unwrap();
        let b = create_default("checklist").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_list_groups_covers_catalog() {
        let groups = list_groups();
        assert_eq!(groups.len(), 5);
        let total: usize = groups.values().map(|v| v.len()).sum();
        assert_eq!(total, Variant::ALL.len());
        let first = groups.keys().next().copied();
        assert_eq!(first, Some(Category::Text));
        assert_eq!(groups[&Category::Text][0].variant, "h1");
    }
}
