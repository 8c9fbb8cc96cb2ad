//! Content model structs for blocks, chapters and documents.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::registry::Variant;
use webook_types::{BlockId, ChapterId, Font, Theme};

/// Variant-specific attributes of a block
pub type Props = serde_json::Map<String, serde_json::Value>;

/// The atomic unit of authored content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,

    /// Variant tag. Kept as text so a document naming an unregistered
    /// variant still loads and can be reported on.
    #[serde(rename = "type", alias = "variant")]
    pub variant: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub props: Props,
}

impl Block {
    /// The registered variant, if the tag names one
    pub fn kind(&self) -> Option<Variant> {
        Variant::from_tag(&self.variant)
    }

    /// Read the props through a typed view.
    pub fn props_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(serde_json::Value::Object(self.props.clone()))
    }

    /// The current props with `patch`'s top-level keys overlaid.
    ///
    /// This is the value to hand to a props replacement when only some
    /// fields changed.
    pub fn merged_props(&self, patch: &Props) -> Props {
        let mut merged = self.props.clone();
        for (key, value) in patch {
            merged.insert(key.clone(), value.clone());
        }
        merged
    }

    /// Deep copy carrying a freshly generated id
    pub fn duplicate(&self) -> Block {
        Block {
            id: BlockId::generate(),
            ..self.clone()
        }
    }
}

/// An ordered sequence of blocks with a title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: ChapterId,

    #[serde(default)]
    pub title: String,

    #[serde(default, alias = "icon")]
    pub emoji: String,

    #[serde(default)]
    pub blocks: Vec<Block>,

    #[serde(default)]
    pub is_locked: bool,
}

impl Chapter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ChapterId::generate(),
            title: title.into(),
            emoji: "📖".to_string(),
            blocks: Vec::new(),
            is_locked: false,
        }
    }

    pub fn position(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| &b.id == id)
    }

    pub fn block(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| &b.id == id)
    }

    /// Plain text of every block, in order (used for narration)
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.content.trim())
            .filter(|c| !c.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn default_accent() -> String {
    String::from("#1E6FDB")
}

fn default_language() -> String {
    String::from("en")
}

/// Document-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub theme: Theme,

    #[serde(default = "default_accent")]
    pub accent_color: String,

    #[serde(default)]
    pub author: String,

    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub cover_emoji: String,

    #[serde(default)]
    pub font: Font,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            theme: Theme::default(),
            accent_color: default_accent(),
            author: String::new(),
            language: default_language(),
            tags: Vec::new(),
            cover_emoji: String::new(),
            font: Font::default(),
        }
    }
}

/// The aggregate root: metadata plus an ordered sequence of chapters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub metadata: Metadata,

    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            metadata: Metadata {
                title: title.into(),
                ..Default::default()
            },
            chapters: Vec::new(),
        }
    }

    /// Every block in document order
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.chapters.iter().flat_map(|c| c.blocks.iter())
    }

    pub fn block_count(&self) -> usize {
        self.chapters.iter().map(|c| c.blocks.len()).sum()
    }

    pub fn chapter(&self, id: &ChapterId) -> Option<&Chapter> {
        self.chapters.iter().find(|c| &c.id == id)
    }

    pub fn chapter_mut(&mut self, id: &ChapterId) -> Option<&mut Chapter> {
        self.chapters.iter_mut().find(|c| &c.id == id)
    }

    pub fn chapter_position(&self, id: &ChapterId) -> Option<usize> {
        self.chapters.iter().position(|c| &c.id == id)
    }

    pub fn find_block(&self, id: &BlockId) -> Option<&Block> {
        self.blocks().find(|b| &b.id == id)
    }

    pub(crate) fn find_block_mut(&mut self, id: &BlockId) -> Option<&mut Block> {
        self.chapters
            .iter_mut()
            .flat_map(|c| c.blocks.iter_mut())
            .find(|b| &b.id == id)
    }
}

/// How serious a diagnostic is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Info,
}

impl DiagnosticSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Warning => "warning",
            DiagnosticSeverity::Info => "info",
        }
    }
}

/// A finding about a document, reported before export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: String,
    pub message: String,
    pub severity: DiagnosticSeverity,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter: Option<ChapterId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<BlockId>,
}
