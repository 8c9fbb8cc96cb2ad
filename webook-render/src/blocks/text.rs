use super::{clip, open_block, open_toned, read_props, BlockTemplate, RenderContext};
use crate::escape::Html;
use crate::theme::palette;
use webook_core::props::{AccentProps, CodeProps};
use webook_core::Block;

/// Chapter titles take `<h1>`, so heading blocks start one level down
pub struct Heading {
    pub level: u8,
}

impl BlockTemplate for Heading {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        let (open, close) = match self.level {
            1 => ("<h2 class=\"b-h1\">", "</h2>"),
            2 => ("<h3 class=\"b-h2\">", "</h3>"),
            _ => ("<h4 class=\"b-h3\">", "</h4>"),
        };
        open_block(out, ctx, block, "b-heading");
        out.raw(">")
            .raw(open)
            .text(&block.content)
            .raw(close)
            .raw("</div>\n");
    }
}

pub struct Paragraph;

impl BlockTemplate for Paragraph {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        open_block(out, ctx, block, "b-paragraph");
        out.raw("><p class=\"b-p\">")
            .text(&block.content)
            .raw("</p></div>\n");
    }
}

pub struct Quote;

impl BlockTemplate for Quote {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        open_block(out, ctx, block, "b-quote");
        out.raw("><div class=\"b-quote-bar\"></div><blockquote class=\"b-quote-text\">")
            .text(&block.content)
            .raw("</blockquote></div>\n");
    }

    fn render_outline(&self, block: &Block) -> String {
        format!("“{}”", clip(&block.content))
    }
}

/// Icon plus text on a tinted panel: callout, note, highlight box
pub struct AccentBox {
    pub class: &'static str,
    pub default_icon: &'static str,
    pub default_tone: &'static str,
}

pub const CALLOUT: AccentBox = AccentBox {
    class: "b-callout",
    default_icon: "💡",
    default_tone: "amber",
};

pub const NOTE: AccentBox = AccentBox {
    class: "b-note",
    default_icon: "📌",
    default_tone: "blue",
};

impl BlockTemplate for AccentBox {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        let props: AccentProps = read_props(block);
        let tone = if props.color.is_empty() {
            self.default_tone
        } else {
            palette(&props.color)
        };
        let icon = if props.icon.is_empty() {
            self.default_icon
        } else {
            props.icon.as_str()
        };
        open_toned(out, ctx, block, self.class, tone);
        out.raw("><span class=\"b-callout-icon\">")
            .text(icon)
            .raw("</span><div class=\"b-callout-text\">")
            .text(&block.content)
            .raw("</div></div>\n");
    }
}

pub struct Codeblock;

impl BlockTemplate for Codeblock {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        let props: CodeProps = read_props(block);
        let lang = if props.language.is_empty() {
            "code"
        } else {
            props.language.as_str()
        };
        open_block(out, ctx, block, "b-code");
        out.raw("><div class=\"b-code-header\"><span class=\"b-code-lang\">")
            .text(lang)
            .raw("</span></div><pre><code")
            .attr("data-lang", lang)
            .raw(">")
            .text(&block.content)
            .raw("</code></pre></div>\n");
    }

    fn render_outline(&self, block: &Block) -> String {
        let props: CodeProps = read_props(block);
        format!("[{}] {}", props.language, clip(&block.content))
    }
}
