//! Document to artifact.
//!
//! [`compile`] is a pure function of the document and the options: no clock,
//! no randomness beyond the seed, no I/O. Every block variant is resolved
//! against the registry, and its props against the variant's typed view,
//! before anything is rendered. An unknown variant or unreadable props fail
//! the whole compilation and no partial artifact exists.

use askama::Template;
use thiserror::Error;
use tracing::{debug, info};

use crate::blocks::{template_for, RenderContext};
use crate::escape::{Html, Markup};
use crate::labels::Labels;
use crate::theme::stylesheet;
use webook_core::schema::check_typed;
use webook_core::{Chapter, CoreError, Document, Variant};
use webook_runtime::{NavState, RuntimeError, ScriptBundle};

/// Knobs that are not part of the document itself
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Seed for poll simulation and deterministic shuffles
    pub seed: u64,
    /// Overrides `metadata.language` for UI labels
    pub language: Option<String>,
    /// Overrides the completion banner text
    pub completion_message: Option<String>,
}

impl From<&webook_core::ExportConfig> for CompileOptions {
    fn from(export: &webook_core::ExportConfig) -> Self {
        Self {
            seed: export.seed,
            language: export.language.clone(),
            completion_message: export.completion_message.clone(),
        }
    }
}

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Unknown block variant `{variant}` (chapter {chapter}, block {block})")]
    UnknownVariant {
        variant: String,
        chapter: usize,
        block: usize,
    },

    #[error("Unreadable props (chapter {chapter}, block {block}): {source}")]
    Props {
        chapter: usize,
        block: usize,
        #[source]
        source: CoreError,
    },

    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

#[derive(Template)]
#[template(path = "artifact.html", escape = "none")]
struct ArtifactTemplate {
    lang: Markup,
    head: Markup,
    style: Markup,
    body: Markup,
    script: Markup,
}

/// Every block's variant, in document order, or the first block that cannot
/// be rendered faithfully
fn resolve(doc: &Document) -> Result<Vec<Vec<Variant>>, CompileError> {
    doc.chapters
        .iter()
        .enumerate()
        .map(|(ci, chapter)| {
            chapter
                .blocks
                .iter()
                .enumerate()
                .map(|(bi, block)| -> Result<Variant, CompileError> {
                    let variant = block.kind().ok_or_else(|| CompileError::UnknownVariant {
                        variant: block.variant.clone(),
                        chapter: ci,
                        block: bi,
                    })?;
                    check_typed(variant, &block.props).map_err(|source| CompileError::Props {
                        chapter: ci,
                        block: bi,
                        source,
                    })?;
                    Ok(variant)
                })
                .collect()
        })
        .collect()
}

fn sidebar(out: &mut Html, doc: &Document, labels: &Labels) {
    let meta = &doc.metadata;
    out.raw("<aside class=\"sidebar\"><div class=\"sidebar-header\">");
    if !meta.cover_emoji.is_empty() {
        out.raw("<div class=\"book-cover\">")
            .text(&meta.cover_emoji)
            .raw("</div>");
    }
    out.raw("<div class=\"book-title\">")
        .text(&meta.title)
        .raw("</div>");
    if !meta.author.trim().is_empty() {
        out.raw("<div class=\"book-author\">")
            .text(labels.by)
            .raw(" ")
            .text(&meta.author)
            .raw("</div>");
    }
    let nav = NavState::new(doc.chapters.len());
    out.raw("<div class=\"progress-wrap\"><div class=\"progress-label\"><span>")
        .text(labels.progress)
        .raw("</span><span id=\"pct\">")
        .value(nav.progress())
        .raw("%</span></div><div class=\"progress-bar\"><div class=\"progress-fill\" id=\"pfill\" style=\"width:")
        .value(nav.progress())
        .raw("%\"></div></div></div></div><nav class=\"toc\">");

    if doc.chapters.is_empty() {
        out.raw("<div class=\"toc-empty\">")
            .text(labels.no_chapters)
            .raw("</div>");
    }
    for (i, chapter) in doc.chapters.iter().enumerate() {
        out.raw(if i == 0 {
            "<button type=\"button\" class=\"toc-item active\""
        } else {
            "<button type=\"button\" class=\"toc-item\""
        })
        .attr_value("data-goto", i)
        .raw("><span class=\"toc-emoji\">")
        .text(&chapter.emoji)
        .raw("</span><span class=\"toc-title\">")
        .text(&chapter.title)
        .raw("</span>");
        if chapter.is_locked {
            out.raw("<span class=\"toc-lock\">🔒</span>");
        }
        out.raw("</button>");
    }
    out.raw("</nav></aside>");
}

fn topbar(out: &mut Html, doc: &Document) {
    let nav = NavState::new(doc.chapters.len());
    let label = doc
        .chapters
        .first()
        .map(|c| c.title.as_str())
        .unwrap_or_default();
    out.raw("<header class=\"topbar\"><span class=\"chapter-label\" id=\"ch-label\">")
        .text(label)
        .raw("</span><span class=\"chapter-num\" id=\"ch-num\">")
        .text(&nav.counter())
        .raw("</span></header>");
}

fn chapter_section(
    out: &mut Html,
    chapter: &Chapter,
    variants: &[Variant],
    index: usize,
    options: &CompileOptions,
    labels: &'static Labels,
    bundle: &mut ScriptBundle,
) {
    debug!(chapter = index, title = %chapter.title, blocks = chapter.blocks.len(), "rendering chapter");
    out.raw("<section class=\"chapter\"")
        .attr("data-title", &chapter.title);
    if index > 0 {
        out.raw(" hidden");
    }
    out.raw("><div class=\"chapter-header\"><span class=\"chapter-emoji\">")
        .text(&chapter.emoji)
        .raw("</span><h1 class=\"chapter-title\">")
        .text(&chapter.title)
        .raw("</h1></div>\n");
    for (bi, (block, variant)) in chapter.blocks.iter().zip(variants).enumerate() {
        let mut ctx = RenderContext::new(options.seed, labels, index, bi, bundle);
        template_for(*variant).render_export(block, &mut ctx, out);
    }
    out.raw("</section>\n");
}

fn nav_bar(out: &mut Html, total: usize, labels: &Labels) {
    let nav = NavState::new(total);
    out.raw("<footer class=\"nav-bar\"><button type=\"button\" class=\"nav-btn\" id=\"btn-prev\" disabled>")
        .text(labels.previous)
        .raw("</button><div class=\"nav-dots\" id=\"nav-dots\">");
    for i in 0..total {
        out.raw(if i == nav.current() {
            "<span class=\"nav-dot active\"></span>"
        } else {
            "<span class=\"nav-dot inactive\"></span>"
        });
    }
    out.raw("</div><button type=\"button\" class=\"nav-btn primary\" id=\"btn-next\"")
        .attr("data-next", labels.next)
        .attr("data-finish", labels.finish);
    if total == 0 {
        out.raw(" disabled");
    }
    out.raw(">")
        .text(if nav.is_last() { labels.finish } else { labels.next })
        .raw("</button></footer>");
}

fn completion_banner(out: &mut Html, message: &str, labels: &Labels) {
    out.raw("<div class=\"complete\" id=\"complete\" role=\"status\" hidden><span>")
        .text(message)
        .raw("</span><button type=\"button\" class=\"nav-btn\" data-dismiss>")
        .text(labels.close)
        .raw("</button></div>");
}

fn head(doc: &Document) -> Markup {
    let mut out = Html::new();
    out.raw("<title>")
        .text(&doc.metadata.title)
        .raw("</title>\n<meta name=\"description\"")
        .attr("content", &doc.metadata.description)
        .raw(">");
    out.finish()
}

/// Compile a document into one self-contained HTML artifact.
pub fn compile(doc: &Document, options: &CompileOptions) -> Result<String, CompileError> {
    let variants = resolve(doc)?;
    let language = options
        .language
        .as_deref()
        .unwrap_or(&doc.metadata.language);
    let labels = Labels::for_language(language);
    let mut bundle = ScriptBundle::new();

    let mut body = Html::new();
    body.raw("<div class=\"app\" data-widget=\"nav\"")
        .attr("data-title", &doc.metadata.title)
        .raw(">");
    sidebar(&mut body, doc, labels);
    body.raw("<main class=\"main\">");
    topbar(&mut body, doc);
    body.raw("<div class=\"content\"><div class=\"content-wrap\">\n");
    for (ci, (chapter, kinds)) in doc.chapters.iter().zip(&variants).enumerate() {
        chapter_section(&mut body, chapter, kinds, ci, options, labels, &mut bundle);
    }
    body.raw("</div></div>");
    nav_bar(&mut body, doc.chapters.len(), labels);
    let message = match &options.completion_message {
        Some(message) => message.clone(),
        None => labels.completion(&doc.metadata.title),
    };
    completion_banner(&mut body, &message, labels);
    body.raw("</main></div>");

    let mut script = Html::new();
    for source in bundle.sources()? {
        script.raw(source).raw("\n");
    }

    let mut lang = Html::new();
    lang.attr("lang", labels.lang);

    let page = ArtifactTemplate {
        lang: lang.finish(),
        head: head(doc),
        style: stylesheet(&doc.metadata),
        body: body.finish(),
        script: script.finish(),
    };
    let html = page.render()?;
    info!(
        chapters = doc.chapters.len(),
        blocks = doc.block_count(),
        bytes = html.len(),
        "compiled artifact"
    );
    Ok(html)
}

/// Plain-text outline: one line per chapter and per block.
pub fn outline(doc: &Document) -> Result<String, CompileError> {
    let variants = resolve(doc)?;
    let mut out = String::new();
    for (ci, (chapter, kinds)) in doc.chapters.iter().zip(&variants).enumerate() {
        out.push_str(&format!("{:02} {} {}\n", ci + 1, chapter.emoji, chapter.title));
        for (block, variant) in chapter.blocks.iter().zip(kinds) {
            let summary = template_for(*variant).render_outline(block);
            out.push_str(&format!(
                "   {} {:<14} {}\n",
                variant.meta().icon,
                variant.tag(),
                summary
            ));
        }
    }
    Ok(out)
}
