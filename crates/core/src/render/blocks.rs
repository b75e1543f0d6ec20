use crate::document::block::{
    ContentBlock, GalleryBlock, ImageBlock, MapBlock, QuoteBlock, TeamBlock, TextBlock,
    TwoColumnBlock, VideoBlock,
};

use super::node::{Element, RenderNode};
use super::portable_text;
use super::video::embed_url;
use super::{
    RenderParams, CONTENT_IMAGE_WIDTH, GALLERY_IMAGE_WIDTH, IMAGE_QUALITY, TEAM_IMAGE_WIDTH,
};

/// Two-column blocks may nest arbitrarily in the schema; rendering stops
/// at this depth and yields nothing past it.
pub const MAX_COLUMN_DEPTH: usize = 8;

/// Render one content block. Total over the whole union: any block that
/// cannot be rendered comes back as [`RenderNode::Empty`].
pub fn render_block(block: &ContentBlock, params: &RenderParams) -> RenderNode {
    render_at_depth(block, params, 0)
}

/// Render a project's full block sequence in order, dropping empty output.
pub fn render_blocks(blocks: &[ContentBlock], params: &RenderParams) -> RenderNode {
    RenderNode::Fragment(
        blocks
            .iter()
            .map(|block| render_at_depth(block, params, 0))
            .filter(|node| !node.is_empty())
            .collect(),
    )
}

fn render_at_depth(block: &ContentBlock, params: &RenderParams, depth: usize) -> RenderNode {
    match block {
        ContentBlock::TextBlock(b) => render_text(b),
        ContentBlock::ImageBlock(b) => render_image(b, params),
        ContentBlock::QuoteBlock(b) => render_quote(b),
        ContentBlock::GalleryBlock(b) => render_gallery(b, params),
        ContentBlock::MapBlock(b) => render_map(b),
        ContentBlock::VideoBlock(b) => render_video(b),
        ContentBlock::TeamBlock(b) => render_team(b, params),
        ContentBlock::TwoColumnBlock(b) => render_two_column(b, params, depth),
        // Forward compatibility: tags this build does not know render to
        // nothing instead of failing the page.
        ContentBlock::Unknown => RenderNode::Empty,
    }
}

fn render_text(block: &TextBlock) -> RenderNode {
    if block.content.is_empty() {
        return RenderNode::Empty;
    }
    Element::new("div")
        .attr("class", "text-block")
        .child(portable_text::render(&block.content))
        .into()
}

fn render_image(block: &ImageBlock, params: &RenderParams) -> RenderNode {
    let Some(url) = block
        .image
        .as_ref()
        .and_then(|image| image.url(&params.assets, CONTENT_IMAGE_WIDTH, IMAGE_QUALITY))
    else {
        // No resolvable asset means no output, not a broken-image box.
        return RenderNode::Empty;
    };
    let height = block
        .ratio
        .map(|ratio| (CONTENT_IMAGE_WIDTH as f64 * ratio) as u32)
        .unwrap_or(600);
    let alt = block
        .image
        .as_ref()
        .and_then(|image| image.alt.clone())
        .unwrap_or_default();

    let mut figure = Element::new("figure").attr("class", "image-block").child(
        Element::new("img")
            .attr("src", url)
            .attr("alt", alt)
            .attr("width", CONTENT_IMAGE_WIDTH.to_string())
            .attr("height", height.to_string())
            .into(),
    );
    if let Some(caption) = &block.caption {
        figure = figure.child(Element::new("figcaption").text(caption.clone()).into());
    }
    figure.into()
}

fn render_quote(block: &QuoteBlock) -> RenderNode {
    // quoteText is required by the schema; an empty one is bad data and
    // the whole block degrades rather than rendering a bare dash.
    if block.quote_text.trim().is_empty() {
        return RenderNode::Empty;
    }
    let mut figure = Element::new("figure").attr("class", "quote-block").child(
        Element::new("blockquote")
            .text(block.quote_text.clone())
            .into(),
    );
    if block.author_name.is_some() || block.author_title.is_some() {
        let mut caption = Element::new("figcaption");
        if let Some(name) = &block.author_name {
            caption = caption.child(
                Element::new("span")
                    .attr("class", "quote-author")
                    .text(name.clone())
                    .into(),
            );
        }
        if let Some(title) = &block.author_title {
            caption = caption.child(
                Element::new("span")
                    .attr("class", "quote-author-title")
                    .text(title.clone())
                    .into(),
            );
        }
        figure = figure.child(caption.into());
    }
    figure.into()
}

fn render_gallery(block: &GalleryBlock, params: &RenderParams) -> RenderNode {
    let items: Vec<RenderNode> = block
        .images
        .iter()
        .filter_map(|item| {
            // Items without a resolvable asset are dropped outright;
            // the remaining items keep their relative order.
            let url = item
                .image
                .as_ref()
                .and_then(|image| image.url(&params.assets, GALLERY_IMAGE_WIDTH, IMAGE_QUALITY))?;
            let mut figure = Element::new("figure").child(
                Element::new("img")
                    .attr("src", url)
                    .attr("alt", item.alt.clone().unwrap_or_default())
                    .into(),
            );
            if let Some(caption) = &item.caption {
                figure = figure.child(Element::new("figcaption").text(caption.clone()).into());
            }
            Some(figure.into())
        })
        .collect();

    Element::new("div")
        .attr("class", "gallery-block")
        .children(items)
        .into()
}

fn render_map(block: &MapBlock) -> RenderNode {
    let title = block
        .title
        .clone()
        .unwrap_or_else(|| "Project Location".to_string());
    let mut map = Element::new("div").attr("class", "map-block");
    if let Some(title) = &block.title {
        map = map.child(
            Element::new("div")
                .attr("class", "map-title")
                .text(title.clone())
                .into(),
        );
    }
    // Coordinates are handed to the client-side map untouched; this layer
    // only labels them.
    map.child(
        Element::new("div")
            .attr("class", "map-embed")
            .attr("data-latitude", block.latitude.to_string())
            .attr("data-longitude", block.longitude.to_string())
            .attr("data-title", title)
            .into(),
    )
    .child(
        Element::new("div")
            .attr("class", "map-coordinates")
            .text(format!(
                "Lat: {:.6}, Lng: {:.6}",
                block.latitude, block.longitude
            ))
            .into(),
    )
    .into()
}

fn render_video(block: &VideoBlock) -> RenderNode {
    let url = block.video_url.trim();
    if url.is_empty() {
        return RenderNode::Empty;
    }
    let mut figure = Element::new("figure").attr("class", "video-block").child(
        Element::new("iframe")
            .attr("src", embed_url(url).as_str().to_string())
            .attr("title", "Video")
            .attr("allowfullscreen", "")
            .into(),
    );
    if let Some(caption) = &block.caption {
        figure = figure.child(Element::new("figcaption").text(caption.clone()).into());
    }
    figure.into()
}

fn render_team(block: &TeamBlock, params: &RenderParams) -> RenderNode {
    let mut section = Element::new("section").attr("class", "team-block");
    if let Some(title) = &block.title {
        section = section.child(Element::new("h3").text(title.clone()).into());
    }
    let members: Vec<RenderNode> = block
        .members
        .iter()
        .filter(|member| !member.name.trim().is_empty())
        .map(|member| {
            let portrait = member
                .image
                .as_ref()
                .and_then(|image| image.url(&params.assets, TEAM_IMAGE_WIDTH, IMAGE_QUALITY))
                .map(|url| {
                    Element::new("img")
                        .attr("src", url)
                        .attr("alt", member.name.clone())
                        .into()
                })
                .unwrap_or_else(|| initial_glyph(&member.name));
            let mut card = Element::new("div")
                .attr("class", "team-member")
                .child(portrait)
                .child(Element::new("h4").text(member.name.clone()).into());
            if let Some(role) = &member.role {
                card = card.child(
                    Element::new("p")
                        .attr("class", "team-role")
                        .text(role.clone())
                        .into(),
                );
            }
            if let Some(bio) = &member.bio {
                card = card.child(
                    Element::new("p")
                        .attr("class", "team-bio")
                        .text(bio.clone())
                        .into(),
                );
            }
            card.into()
        })
        .collect();
    section.children(members).into()
}

/// Placeholder for members without a portrait: the first character of the
/// name, uppercased.
fn initial_glyph(name: &str) -> RenderNode {
    let glyph: String = name
        .trim()
        .chars()
        .next()
        .map(|ch| ch.to_uppercase().collect())
        .unwrap_or_default();
    Element::new("span")
        .attr("class", "team-initial")
        .text(glyph)
        .into()
}

fn render_two_column(block: &TwoColumnBlock, params: &RenderParams, depth: usize) -> RenderNode {
    if depth >= MAX_COLUMN_DEPTH {
        tracing::warn!(depth, "two-column nesting exceeds limit, dropping block");
        return RenderNode::Empty;
    }
    let column = |blocks: &[ContentBlock]| -> RenderNode {
        Element::new("div")
            .attr("class", "column")
            .children(
                blocks
                    .iter()
                    .map(|sub| render_at_depth(sub, params, depth + 1))
                    .filter(|node| !node.is_empty()),
            )
            .into()
    };
    Element::new("div")
        .attr("class", "two-column-block")
        .child(column(&block.left_column))
        .child(column(&block.right_column))
        .into()
}
