//! Stateful widgets.
//!
//! Each widget's root carries `data-widget` and every piece of configuration
//! its handler needs as escaped attributes. Anything random-looking is drawn
//! here from the export seed, never in the artifact.

use super::{clip, empty_media, open_block, read_props, BlockTemplate, RenderContext};
use crate::escape::Html;
use webook_core::props::{
    ChecklistProps, FlashcardsProps, FrameProps, MatchingProps, PollProps, QuizProps, SortableProps,
};
use webook_core::Block;
use webook_runtime::{distribution_matrix, permutation, Behavior, ChecklistState, FlashcardDeck};

const LETTERS: &[&str] = &[
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V", "W", "X", "Y", "Z",
];

fn letter(out: &mut Html, index: usize) {
    if let Some(l) = LETTERS.get(index) {
        out.raw(*l);
    } else {
        out.value(index + 1);
    }
}

pub struct Quiz;

impl BlockTemplate for Quiz {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        ctx.require(Behavior::Quiz);
        let props: QuizProps = read_props(block);
        let correct = if props.feedback.correct.is_empty() {
            "✅"
        } else {
            props.feedback.correct.as_str()
        };
        let incorrect = if props.feedback.incorrect.is_empty() {
            "❌"
        } else {
            props.feedback.incorrect.as_str()
        };

        open_block(out, ctx, block, "b-quiz");
        out.raw(" data-widget=\"quiz\"")
            .attr("data-feedback-correct", correct)
            .attr("data-feedback-incorrect", incorrect)
            .raw("><div class=\"b-quiz-label\">❓ ")
            .text(ctx.labels.quiz)
            .raw(" · ")
            .value(props.points.max(1))
            .raw(" ")
            .text(ctx.labels.points)
            .raw("</div><div class=\"b-quiz-q\">")
            .text(&block.content)
            .raw("</div><div class=\"b-quiz-opts\">");
        for (i, option) in props.options.iter().enumerate() {
            out.raw("<button type=\"button\" class=\"b-quiz-opt\"")
                .attr_value("data-option", i)
                .raw(if option.is_correct {
                    " data-correct=\"true\""
                } else {
                    " data-correct=\"false\""
                })
                .raw("><span class=\"b-quiz-letter\">");
            letter(out, i);
            out.raw("</span><span class=\"b-quiz-text\">")
                .text(&option.text)
                .raw("</span>");
            if !option.explanation.is_empty() {
                out.raw("<span class=\"b-quiz-explain\" hidden>")
                    .text(&option.explanation)
                    .raw("</span>");
            }
            out.raw("</button>");
        }
        out.raw("</div><div class=\"b-quiz-feedback\" role=\"status\"></div></div>\n");
    }

    fn render_outline(&self, block: &Block) -> String {
        let props: QuizProps = read_props(block);
        let correct = match props.correct_index() {
            Some(i) => LETTERS.get(i).map(|l| l.to_string()).unwrap_or_else(|| (i + 1).to_string()),
            None => "none".to_string(),
        };
        format!(
            "{} [{} options, correct: {}]",
            clip(&block.content),
            props.options.len(),
            correct
        )
    }
}

fn matrix_json(rows: &[Vec<u32>]) -> String {
    let rows: Vec<String> = rows
        .iter()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            format!("[{}]", cells.join(","))
        })
        .collect();
    format!("[{}]", rows.join(","))
}

pub struct Poll;

impl BlockTemplate for Poll {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        ctx.require(Behavior::Poll);
        let props: PollProps = read_props(block);
        let rows = distribution_matrix(ctx.seed, block.id.as_str(), props.options.len());

        open_block(out, ctx, block, "b-poll");
        out.raw(" data-widget=\"poll\"")
            .attr("data-distribution", &matrix_json(&rows))
            .raw("><div class=\"b-poll-q\">")
            .text(&block.content)
            .raw("</div>");
        for (i, option) in props.options.iter().enumerate() {
            out.raw("<button type=\"button\" class=\"b-poll-opt\" aria-pressed=\"false\"")
                .attr_value("data-option", i)
                .raw("><span class=\"b-poll-radio\"></span><span class=\"b-poll-text\">")
                .text(option)
                .raw("</span><span class=\"b-poll-bar-wrap\"><span class=\"b-poll-bar\"></span></span><span class=\"b-poll-pct\">0%</span></button>");
        }
        out.raw("</div>\n");
    }

    fn render_outline(&self, block: &Block) -> String {
        let props: PollProps = read_props(block);
        format!("{} [{}]", clip(&block.content), props.options.join(" / "))
    }
}

pub struct Checklist;

impl BlockTemplate for Checklist {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        ctx.require(Behavior::Checklist);
        let props: ChecklistProps = read_props(block);
        let state = ChecklistState::new(props.items.iter().map(|i| i.done).collect());

        open_block(out, ctx, block, "b-checklist");
        out.raw(" data-widget=\"checklist\"><div class=\"b-checklist-progress\"><div class=\"b-progress-header\"><span class=\"b-progress-label\">")
            .text(ctx.labels.progress)
            .raw("</span><span class=\"b-progress-val\">")
            .text(&state.label())
            .raw("</span></div><div class=\"b-progress-track\"><div class=\"b-progress-fill\" style=\"width:")
            .value(state.percent().round() as u32)
            .raw("%\"></div></div></div>");
        if !block.content.trim().is_empty() {
            out.raw("<div class=\"b-checklist-title\">")
                .text(&block.content)
                .raw("</div>");
        }
        for item in &props.items {
            out.raw(if item.done {
                "<button type=\"button\" class=\"b-check-item done\" role=\"checkbox\" aria-checked=\"true\">"
            } else {
                "<button type=\"button\" class=\"b-check-item\" role=\"checkbox\" aria-checked=\"false\">"
            })
            .raw("<span class=\"b-check-box\">✓</span><span class=\"b-check-text\">")
            .text(&item.text)
            .raw("</span></button>");
        }
        out.raw("</div>\n");
    }

    fn render_outline(&self, block: &Block) -> String {
        let props: ChecklistProps = read_props(block);
        let state = ChecklistState::new(props.items.iter().map(|i| i.done).collect());
        format!("☑ {} done", state.label())
    }
}

pub struct Flashcards;

impl BlockTemplate for Flashcards {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        ctx.require(Behavior::Flashcards);
        let props: FlashcardsProps = read_props(block);
        let deck = FlashcardDeck::new(props.cards.len());

        open_block(out, ctx, block, "b-flashcards");
        out.raw(" data-widget=\"flashcards\"><div class=\"b-flashcard-wrap\"><div class=\"b-flashcard\"><div class=\"b-flashcard-face b-flashcard-front\">");
        for (i, card) in props.cards.iter().enumerate() {
            out.raw(if i == 0 {
                "<div class=\"fc-front\">"
            } else {
                "<div class=\"fc-front\" hidden>"
            })
            .text(&card.front)
            .raw("</div>");
        }
        out.raw("</div><div class=\"b-flashcard-face b-flashcard-back\">");
        for (i, card) in props.cards.iter().enumerate() {
            out.raw(if i == 0 {
                "<div class=\"fc-back\">"
            } else {
                "<div class=\"fc-back\" hidden>"
            })
            .text(&card.back)
            .raw("</div>");
        }
        out.raw("</div></div></div><div class=\"b-flashcard-nav\"><button type=\"button\" class=\"b-fc-btn\" data-step=\"-1\">")
            .text(ctx.labels.prev_card)
            .raw("</button><span class=\"b-fc-counter\">")
            .text(&deck.counter())
            .raw("</span><button type=\"button\" class=\"b-fc-btn\" data-step=\"1\">")
            .text(ctx.labels.next_card)
            .raw("</button></div><div class=\"b-fc-hint\">")
            .text(ctx.labels.flip_hint)
            .raw("</div></div>\n");
    }

    fn render_outline(&self, block: &Block) -> String {
        let props: FlashcardsProps = read_props(block);
        format!("🃏 {} cards", props.cards.len())
    }
}

pub struct Sortable;

impl BlockTemplate for Sortable {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        ctx.require(Behavior::Sortable);
        let props: SortableProps = read_props(block);
        let scope = format!("sortable:{}", block.id);
        let display = permutation(ctx.seed, &scope, props.items.len());

        open_block(out, ctx, block, "b-sortable");
        out.raw(" data-widget=\"sortable\"")
            .attr("data-correct", ctx.labels.order_correct)
            .attr("data-incorrect", ctx.labels.order_incorrect)
            .raw("><div class=\"b-sort-instruction\">")
            .text(&block.content)
            .raw("</div><div class=\"b-sort-items\">");
        for index in display {
            let item = &props.items[index];
            out.raw("<div class=\"b-sort-item\" draggable=\"true\"")
                .attr_value("data-order", item.order)
                .raw("><span class=\"b-sort-grip\">⠿</span><span class=\"b-sort-text\">")
                .text(&item.text)
                .raw("</span><button type=\"button\" class=\"b-sort-move\" data-move=\"-1\"")
                .attr("aria-label", ctx.labels.move_up)
                .raw(">↑</button><button type=\"button\" class=\"b-sort-move\" data-move=\"1\"")
                .attr("aria-label", ctx.labels.move_down)
                .raw(">↓</button></div>");
        }
        out.raw("</div><button type=\"button\" class=\"b-sort-check-btn\">")
            .text(ctx.labels.check)
            .raw("</button><div class=\"b-sort-result\" role=\"status\" hidden></div></div>\n");
    }

    fn render_outline(&self, block: &Block) -> String {
        let props: SortableProps = read_props(block);
        format!("{} [{} items]", clip(&block.content), props.items.len())
    }
}

pub struct Matching;

impl BlockTemplate for Matching {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        ctx.require(Behavior::Matching);
        let props: MatchingProps = read_props(block);
        let scope = format!("matching:{}", block.id);
        let right_order = permutation(ctx.seed, &scope, props.pairs.len());

        open_block(out, ctx, block, "b-matching");
        out.raw(" data-widget=\"matching\"><div class=\"b-match-instruction\">")
            .text(&block.content)
            .raw("</div><div class=\"b-match-grid\"><div class=\"b-match-col\"><div class=\"b-match-col-title\">")
            .text(ctx.labels.terms)
            .raw("</div>");
        for (i, pair) in props.pairs.iter().enumerate() {
            out.raw("<button type=\"button\" class=\"b-match-item left-item\"")
                .attr_value("data-pair", i)
                .raw(">")
                .text(&pair.left)
                .raw("</button>");
        }
        out.raw("</div><div class=\"b-match-col\"><div class=\"b-match-col-title\">")
            .text(ctx.labels.definitions)
            .raw("</div>");
        for pair_index in right_order {
            out.raw("<button type=\"button\" class=\"b-match-item right-item\"")
                .attr_value("data-pair", pair_index)
                .raw(">")
                .text(&props.pairs[pair_index].right)
                .raw("</button>");
        }
        out.raw("</div></div></div>\n");
    }

    fn render_outline(&self, block: &Block) -> String {
        let props: MatchingProps = read_props(block);
        format!("{} [{} pairs]", clip(&block.content), props.pairs.len())
    }
}

const MIN_FRAME: u32 = 80;
const MAX_FRAME: u32 = 2000;

/// Author HTML in a sandboxed frame: interactive tools and mini apps
pub struct Frame {
    pub variant: &'static str,
}

impl BlockTemplate for Frame {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        if block.content.trim().is_empty() {
            return empty_media(out, ctx, block, self.variant);
        }
        let props: FrameProps = read_props(block);
        open_block(out, ctx, block, "b-tool");
        out.raw(">");
        if !props.label.is_empty() {
            out.raw("<div class=\"b-tool-label\">")
                .text(&props.label)
                .raw("</div>");
        }
        out.raw("<iframe sandbox=\"allow-scripts allow-forms\"")
            .attr("title", &props.label)
            .attr("srcdoc", &block.content)
            .raw(" style=\"height:")
            .value(props.height.clamp(MIN_FRAME, MAX_FRAME))
            .raw("px\"></iframe></div>\n");
    }

    fn render_outline(&self, block: &Block) -> String {
        let props: FrameProps = read_props(block);
        format!(
            "⚡ {} ({} chars of HTML)",
            props.label,
            block.content.chars().count()
        )
    }
}
