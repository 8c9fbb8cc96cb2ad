//! Per-variant block templates.
//!
//! [`template_for`] maps every registered [`Variant`] to its template with an
//! exhaustive match, so a variant added to the registry without a template
//! is a build failure rather than a block dropped at export time.

mod interactive;
mod layout;
mod media;
mod text;
mod visual;

use serde::de::DeserializeOwned;
use tracing::warn;
use unicode_segmentation::UnicodeSegmentation;

use crate::escape::Html;
use crate::labels::Labels;
use webook_core::{Block, Variant};
use webook_runtime::{Behavior, ScriptBundle};

/// Everything a template may consult or record while rendering one block
pub struct RenderContext<'a> {
    pub seed: u64,
    pub labels: &'static Labels,
    /// Element id, `b-{chapter}-{block}`
    pub dom_id: String,
    bundle: &'a mut ScriptBundle,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        seed: u64,
        labels: &'static Labels,
        chapter: usize,
        block: usize,
        bundle: &'a mut ScriptBundle,
    ) -> Self {
        Self {
            seed,
            labels,
            dom_id: format!("b-{chapter}-{block}"),
            bundle,
        }
    }

    /// Record that the artifact needs a client-side behavior
    pub fn require(&mut self, behavior: Behavior) {
        self.bundle.require(behavior);
    }
}

/// Rendering capability of one variant
pub trait BlockTemplate: Sync {
    /// Markup of the block inside the exported artifact
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html);

    /// One-line plain-text summary for editing surfaces
    fn render_outline(&self, block: &Block) -> String {
        clip(&block.content)
    }
}

pub fn template_for(variant: Variant) -> &'static dyn BlockTemplate {
    use interactive::*;
    use layout::*;
    use media::*;
    use text::*;
    use visual::*;

    match variant {
        Variant::H1 => &Heading { level: 1 },
        Variant::H2 => &Heading { level: 2 },
        Variant::H3 => &Heading { level: 3 },
        Variant::Paragraph => &Paragraph,
        Variant::Quote => &Quote,
        Variant::Callout => &CALLOUT,
        Variant::Note => &NOTE,
        Variant::Codeblock => &Codeblock,
        Variant::Image => &Image,
        Variant::Video => &Video,
        Variant::Audio => &Audio,
        Variant::Embed => &Embed,
        Variant::File => &File,
        Variant::AudioNarrator => &AudioNarrator,
        Variant::Divider => &Divider,
        Variant::Spacer => &Spacer,
        Variant::Columns2 => &Columns { count: 2 },
        Variant::Columns3 => &Columns { count: 3 },
        Variant::Quiz => &Quiz,
        Variant::Poll => &Poll,
        Variant::Checklist => &Checklist,
        Variant::Flashcards => &Flashcards,
        Variant::Sortable => &Sortable,
        Variant::Matching => &Matching,
        Variant::InteractiveTool => &Frame { variant: "interactive_tool" },
        Variant::MiniApp => &Frame { variant: "mini_app" },
        Variant::Table => &Table,
        Variant::Toggle => &Toggle,
        Variant::Timeline => &Timeline,
        Variant::Steps => &Steps,
        Variant::Keyterm => &Keyterm,
        Variant::HighlightBox => &HIGHLIGHT,
        Variant::ProgressBar => &ProgressBar,
        Variant::Rating => &Rating,
        Variant::Countdown => &Countdown,
        Variant::StatsCard => &StatsCard,
        Variant::Comparison => &Comparison,
    }
}

const OUTLINE_WIDTH: usize = 60;

/// First line of `s`, cut to a fixed number of graphemes
pub(crate) fn clip(s: &str) -> String {
    let line = s.lines().next().unwrap_or("").trim();
    let mut graphemes = line.graphemes(true);
    let head: String = graphemes.by_ref().take(OUTLINE_WIDTH).collect();
    if graphemes.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}

/// Typed props. `compile` rejects unreadable props before rendering, so the
/// empty shape is only reached by templates used directly.
pub(crate) fn read_props<T: DeserializeOwned + Default>(block: &Block) -> T {
    block.props_as().unwrap_or_else(|err| {
        warn!(block = %block.id, variant = %block.variant, "unreadable props, rendering defaults: {err}");
        T::default()
    })
}

/// `<div class="block {class}" id=".." data-block-id=".."`, left open for
/// further attributes
pub(crate) fn open_block(out: &mut Html, ctx: &RenderContext<'_>, block: &Block, class: &'static str) {
    out.raw("<div class=\"block ")
        .raw(class)
        .raw("\"")
        .attr("id", &ctx.dom_id)
        .attr("data-block-id", block.id.as_str());
}

/// Like [`open_block`] with a palette tone class
pub(crate) fn open_toned(
    out: &mut Html,
    ctx: &RenderContext<'_>,
    block: &Block,
    class: &'static str,
    tone: &'static str,
) {
    out.raw("<div class=\"block ")
        .raw(class)
        .raw(" tone-")
        .raw(tone)
        .raw("\"")
        .attr("id", &ctx.dom_id)
        .attr("data-block-id", block.id.as_str());
}

/// Placeholder for a media block without a usable source
pub(crate) fn empty_media(out: &mut Html, ctx: &RenderContext<'_>, block: &Block, variant: &'static str) {
    open_block(out, ctx, block, "b-empty");
    out.raw(" data-variant=\"")
        .raw(variant)
        .raw("\">")
        .text(ctx.labels.empty_media)
        .raw("</div>\n");
}
