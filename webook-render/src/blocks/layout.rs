use super::{clip, open_block, read_props, BlockTemplate, RenderContext};
use crate::escape::Html;
use webook_core::props::{Columns2Props, Columns3Props, SpacerProps};
use webook_core::Block;

const MAX_SPACER: u32 = 400;

pub struct Divider;

impl BlockTemplate for Divider {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        open_block(out, ctx, block, "b-divider");
        out.raw(
            "><div class=\"b-divider-line\"></div><div class=\"b-divider-icon\">✦</div><div class=\"b-divider-line\"></div></div>\n",
        );
    }

    fn render_outline(&self, _block: &Block) -> String {
        "───".to_string()
    }
}

pub struct Spacer;

impl BlockTemplate for Spacer {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        let props: SpacerProps = read_props(block);
        open_block(out, ctx, block, "b-spacer");
        out.raw(" style=\"height:")
            .value(props.height.min(MAX_SPACER))
            .raw("px\"></div>\n");
    }

    fn render_outline(&self, block: &Block) -> String {
        let props: SpacerProps = read_props(block);
        format!("↕ {}px", props.height)
    }
}

pub struct Columns {
    pub count: u8,
}

impl Columns {
    fn cells(&self, block: &Block) -> Vec<String> {
        if self.count == 3 {
            let p: Columns3Props = read_props(block);
            vec![p.col1, p.col2, p.col3]
        } else {
            let p: Columns2Props = read_props(block);
            vec![p.col1, p.col2]
        }
    }
}

impl BlockTemplate for Columns {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        let class = if self.count == 3 {
            "b-cols cols-3"
        } else {
            "b-cols cols-2"
        };
        open_block(out, ctx, block, class);
        out.raw(">");
        for cell in self.cells(block) {
            out.raw("<div class=\"b-col\">").text(&cell).raw("</div>");
        }
        out.raw("</div>\n");
    }

    fn render_outline(&self, block: &Block) -> String {
        self.cells(block)
            .iter()
            .map(|c| clip(c))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}
