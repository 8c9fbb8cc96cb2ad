//! Media blocks. The block content holds the source URL; a missing or
//! disallowed URL renders the empty-media placeholder.

use super::{empty_media, open_block, read_props, BlockTemplate, RenderContext};
use crate::escape::Html;
use crate::url::{file_name, sanitize_url, video_embed};
use webook_core::props::{FileProps, ImageProps};
use webook_core::Block;
use webook_runtime::Behavior;

pub struct Image;

impl BlockTemplate for Image {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        let Some(src) = sanitize_url(&block.content) else {
            return empty_media(out, ctx, block, "image");
        };
        let props: ImageProps = read_props(block);
        open_block(out, ctx, block, "b-image");
        out.raw("><figure><img")
            .attr("src", src)
            .attr("alt", &props.alt)
            .raw(" loading=\"lazy\">");
        if !props.alt.is_empty() {
            out.raw("<figcaption>").text(&props.alt).raw("</figcaption>");
        }
        out.raw("</figure></div>\n");
    }

    fn render_outline(&self, block: &Block) -> String {
        let props: ImageProps = read_props(block);
        format!("{} {}", block.content.trim(), props.alt).trim().to_string()
    }
}

pub struct Video;

impl BlockTemplate for Video {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        let Some(src) = sanitize_url(&block.content) else {
            return empty_media(out, ctx, block, "video");
        };
        open_block(out, ctx, block, "b-video");
        out.raw(">");
        match video_embed(src) {
            Some(player) => {
                out.raw("<iframe")
                    .attr("src", &player)
                    .raw(" sandbox=\"allow-scripts allow-same-origin allow-presentation\" allowfullscreen loading=\"lazy\"></iframe>");
            }
            None => {
                out.raw("<video controls preload=\"metadata\"")
                    .attr("src", src)
                    .raw("></video>");
            }
        }
        out.raw("</div>\n");
    }
}

pub struct Audio;

impl BlockTemplate for Audio {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        let Some(src) = sanitize_url(&block.content) else {
            return empty_media(out, ctx, block, "audio");
        };
        open_block(out, ctx, block, "b-audio");
        out.raw("><audio controls preload=\"none\"")
            .attr("src", src)
            .raw("></audio></div>\n");
    }
}

pub struct Embed;

impl BlockTemplate for Embed {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        let Some(src) = sanitize_url(&block.content) else {
            return empty_media(out, ctx, block, "embed");
        };
        open_block(out, ctx, block, "b-embed");
        out.raw("><iframe")
            .attr("src", src)
            .raw(" sandbox=\"allow-scripts allow-same-origin\" loading=\"lazy\"></iframe></div>\n");
    }
}

pub struct File;

impl BlockTemplate for File {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        let Some(href) = sanitize_url(&block.content) else {
            return empty_media(out, ctx, block, "file");
        };
        let props: FileProps = read_props(block);
        let name = if props.name.trim().is_empty() {
            file_name(href)
        } else {
            props.name.as_str()
        };
        open_block(out, ctx, block, "b-file");
        out.raw("><a")
            .attr("href", href)
            .attr("download", name)
            .attr("title", ctx.labels.download)
            .raw("><span>📎</span>")
            .text(name)
            .raw("</a></div>\n");
    }

    fn render_outline(&self, block: &Block) -> String {
        let props: FileProps = read_props(block);
        if props.name.is_empty() {
            file_name(block.content.trim()).to_string()
        } else {
            props.name
        }
    }
}

/// Reads the enclosing chapter aloud through the host's speech synthesis
pub struct AudioNarrator;

impl BlockTemplate for AudioNarrator {
    fn render_export(&self, block: &Block, ctx: &mut RenderContext<'_>, out: &mut Html) {
        ctx.require(Behavior::Narrator);
        let label = if block.content.trim().is_empty() {
            ctx.labels.listen
        } else {
            block.content.as_str()
        };
        open_block(out, ctx, block, "b-narrator");
        out.raw(" data-widget=\"narrator\"><button type=\"button\" class=\"b-narrator-btn\">")
            .text(label)
            .raw("</button></div>\n");
    }
}
