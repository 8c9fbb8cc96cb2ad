use super::text::AccentBox;
use super::{clip, open_block, read_props, BlockTemplate, RenderContext};
use crate::escape::Html;
use crate::theme::palette;
use webook_core::props::{
    ComparisonProps, ComparisonSide, CountdownProps, KeytermProps, ProgressBarProps, RatingProps,
    StatsCardProps, StepsProps, TableProps, TimelineProps, ToggleProps,
};
use webook_core::Block;
use webook_runtime::{Behavior, RatingState};

pub const HIGHLIGHT: AccentBox = AccentBox {
    class: "b-hl",
    default_icon: "💡",
    default_tone: "blue",
};

pub struct Table;

impl BlockTemplate for Table {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        let props: TableProps = read_props(block);
        open_block(out, ctx, block, "b-table");
        out.raw("><table>");
        if !props.headers.is_empty() {
            out.raw("<thead><tr>");
            for header in &props.headers {
                out.raw("<th>").text(header).raw("</th>");
            }
            out.raw("</tr></thead>");
        }
        out.raw("<tbody>");
        for row in &props.rows {
            out.raw("<tr>");
            for cell in row {
                out.raw("<td>").text(cell).raw("</td>");
            }
            out.raw("</tr>");
        }
        out.raw("</tbody></table></div>\n");
    }

    fn render_outline(&self, block: &Block) -> String {
        let props: TableProps = read_props(block);
        format!(
            "▦ {} × {} ({})",
            props.headers.len(),
            props.rows.len(),
            props.headers.join(", ")
        )
    }
}

pub struct Toggle;

impl BlockTemplate for Toggle {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        ctx.require(Behavior::Toggle);
        let props: ToggleProps = read_props(block);
        open_block(out, ctx, block, "b-toggle");
        out.raw(" data-widget=\"toggle\"><button type=\"button\" class=\"b-toggle-header\" aria-expanded=\"false\"><span class=\"b-toggle-icon\">▶</span><span>")
            .text(&block.content)
            .raw("</span></button><div class=\"b-toggle-body\"><div class=\"b-toggle-content\">")
            .text(&props.body)
            .raw("</div></div></div>\n");
    }

    fn render_outline(&self, block: &Block) -> String {
        format!("▶ {}", clip(&block.content))
    }
}

pub struct Timeline;

impl BlockTemplate for Timeline {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        let props: TimelineProps = read_props(block);
        let last = props.events.len().saturating_sub(1);
        open_block(out, ctx, block, "b-timeline");
        out.raw(">");
        for (i, event) in props.events.iter().enumerate() {
            out.raw("<div class=\"b-tl-item\"><div class=\"b-tl-track\"><div class=\"b-tl-dot\"></div>");
            if i < last {
                out.raw("<div class=\"b-tl-line\"></div>");
            }
            out.raw("</div><div class=\"b-tl-content\"><div class=\"b-tl-date\">")
                .text(&event.date)
                .raw("</div><div class=\"b-tl-title\">")
                .text(&event.title)
                .raw("</div><div class=\"b-tl-desc\">")
                .text(&event.desc)
                .raw("</div></div></div>");
        }
        out.raw("</div>\n");
    }

    fn render_outline(&self, block: &Block) -> String {
        let props: TimelineProps = read_props(block);
        let dates: Vec<&str> = props.events.iter().map(|e| e.date.as_str()).collect();
        format!("⏳ {}", dates.join(" → "))
    }
}

pub struct Steps;

impl BlockTemplate for Steps {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        let props: StepsProps = read_props(block);
        open_block(out, ctx, block, "b-steps");
        out.raw(">");
        for (i, step) in props.steps.iter().enumerate() {
            out.raw("<div class=\"b-step\"><div class=\"b-step-num\">")
                .value(i + 1)
                .raw("</div><div class=\"b-step-body\"><div class=\"b-step-title\">")
                .text(&step.title)
                .raw("</div><div class=\"b-step-desc\">")
                .text(&step.desc)
                .raw("</div></div></div>");
        }
        out.raw("</div>\n");
    }

    fn render_outline(&self, block: &Block) -> String {
        let props: StepsProps = read_props(block);
        format!("{} steps", props.steps.len())
    }
}

pub struct Keyterm;

impl BlockTemplate for Keyterm {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        let props: KeytermProps = read_props(block);
        open_block(out, ctx, block, "b-keyterm");
        out.raw("><span class=\"b-keyterm-icon\">📖</span><div><div class=\"b-keyterm-term\">")
            .text(&block.content)
            .raw("</div><div class=\"b-keyterm-def\">")
            .text(&props.definition)
            .raw("</div></div></div>\n");
    }

    fn render_outline(&self, block: &Block) -> String {
        let props: KeytermProps = read_props(block);
        format!("{}: {}", clip(&block.content), clip(&props.definition))
    }
}

pub struct ProgressBar;

impl BlockTemplate for ProgressBar {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        let props: ProgressBarProps = read_props(block);
        let pct = props.percent();
        open_block(out, ctx, block, "b-progressbar");
        out.raw(">");
        if props.show_label {
            out.raw("<div class=\"b-progress-header\"><span class=\"b-progress-label\">")
                .text(&block.content)
                .raw("</span><span class=\"b-progress-val\">")
                .value(pct)
                .raw("%</span></div>");
        }
        out.raw("<div class=\"b-progress-track\" role=\"progressbar\" aria-valuemin=\"0\" aria-valuemax=\"100\"")
            .attr_value("aria-valuenow", pct)
            .raw("><div class=\"b-progress-fill tone-")
            .raw(palette(&props.color))
            .raw("\" style=\"width:")
            .value(pct)
            .raw("%\"></div></div></div>\n");
    }

    fn render_outline(&self, block: &Block) -> String {
        let props: ProgressBarProps = read_props(block);
        format!("{} {}%", clip(&block.content), props.percent())
    }
}

pub struct Rating;

impl Rating {
    fn state(props: &RatingProps) -> RatingState {
        RatingState::new(props.stars(), props.value)
    }
}

impl BlockTemplate for Rating {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        ctx.require(Behavior::Rating);
        let props: RatingProps = read_props(block);
        let state = Self::state(&props);
        open_block(out, ctx, block, "b-rating");
        out.raw(" data-widget=\"rating\"><div class=\"b-rating-label\">")
            .text(&block.content)
            .raw("</div><div class=\"b-rating-stars\" role=\"radiogroup\">");
        for (i, lit) in state.lit().into_iter().enumerate() {
            let value = i as u32 + 1;
            out.raw(if lit {
                "<button type=\"button\" class=\"b-rating-star active\" role=\"radio\""
            } else {
                "<button type=\"button\" class=\"b-rating-star\" role=\"radio\""
            })
            .attr_value("data-value", value)
            .raw(if value == state.value() {
                " aria-checked=\"true\">★</button>"
            } else {
                " aria-checked=\"false\">★</button>"
            });
        }
        let result = state
            .label()
            .unwrap_or_else(|| ctx.labels.rate_prompt.to_string());
        out.raw("</div><div class=\"b-rating-result\">")
            .text(&result)
            .raw("</div></div>\n");
    }

    fn render_outline(&self, block: &Block) -> String {
        let props: RatingProps = read_props(block);
        let state = Self::state(&props);
        format!(
            "{} ({})",
            clip(&block.content),
            state.label().unwrap_or_else(|| "unrated".to_string())
        )
    }
}

/// Day count is computed by the reader's clock at load time
pub struct Countdown;

impl BlockTemplate for Countdown {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        ctx.require(Behavior::Countdown);
        let props: CountdownProps = read_props(block);
        let label = if props.label.trim().is_empty() {
            ctx.labels.days
        } else {
            props.label.as_str()
        };
        open_block(out, ctx, block, "b-countdown");
        out.raw(" data-widget=\"countdown\"");
        if let Some(target) = props.target() {
            out.attr_value("data-target", target.timestamp_millis());
        }
        out.raw("><div><div class=\"b-cd-num\">?</div><div class=\"b-cd-label\">")
            .text(label)
            .raw("</div></div><div class=\"b-cd-text\">")
            .text(&block.content)
            .raw("</div></div>\n");
    }

    fn render_outline(&self, block: &Block) -> String {
        let props: CountdownProps = read_props(block);
        let target = match props.target() {
            Some(t) => t.format("%Y-%m-%d").to_string(),
            None => "no date".to_string(),
        };
        format!("{} → {}", clip(&block.content), target)
    }
}

pub struct StatsCard;

impl BlockTemplate for StatsCard {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        let props: StatsCardProps = read_props(block);
        open_block(out, ctx, block, "b-stats");
        out.raw(">");
        for stat in &props.stats {
            out.raw("<div class=\"b-stat\"><div class=\"b-stat-val\">")
                .text(&stat.value)
                .raw("</div><div class=\"b-stat-label\">")
                .text(&stat.label)
                .raw("</div></div>");
        }
        out.raw("</div>\n");
    }

    fn render_outline(&self, block: &Block) -> String {
        let props: StatsCardProps = read_props(block);
        props
            .stats
            .iter()
            .map(|s| format!("{} {}", s.value, s.label))
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

pub struct Comparison;

fn comparison_side(out: &mut Html, side: &ComparisonSide, fallback_title: &str, fallback_tone: &str) {
    let title = if side.title.trim().is_empty() {
        fallback_title
    } else {
        side.title.as_str()
    };
    let tone = if side.color.is_empty() {
        palette(fallback_tone)
    } else {
        palette(&side.color)
    };
    out.raw("<div class=\"b-comp-col tone-")
        .raw(tone)
        .raw("\"><div class=\"b-comp-title\">")
        .text(title)
        .raw("</div>");
    for item in &side.items {
        out.raw("<div class=\"b-comp-item\"><span class=\"b-comp-check\">✓</span><span>")
            .text(item)
            .raw("</span></div>");
    }
    out.raw("</div>");
}

impl BlockTemplate for Comparison {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        let props: ComparisonProps = read_props(block);
        open_block(out, ctx, block, "b-comparison");
        out.raw(">");
        comparison_side(out, &props.left, ctx.labels.option_a, "blue");
        comparison_side(out, &props.right, ctx.labels.option_b, "green");
        out.raw("</div>\n");
    }

    fn render_outline(&self, block: &Block) -> String {
        let props: ComparisonProps = read_props(block);
        format!("{} vs {}", props.left.title, props.right.title)
    }
}
