//! Email-ready HTML for a composed newsletter.
//!
//! Blocks are emitted in document order. Text and attribute values are
//! escaped; custom HTML blocks are passed through untouched.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use super::style;
use crate::models::{Block, BlockKind, DocumentSettings};

/// Render a whole document: header band with the title, then every block
pub fn render_template(settings: &DocumentSettings, blocks: &[Block]) -> String {
    let mut body = String::new();
    for block in blocks {
        let html = render_block(block, settings);
        if !html.is_empty() {
            body.push_str(&html);
            body.push('\n');
        }
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body style="margin: 0; background-color: {body_color};">
<div style="max-width: {width}px; margin: 0 auto; font-family: {font}; color: {text_color};">
<div style="background-color: {header_color}; color: #ffffff; padding: 24px;">
<h1 style="margin: 0;">{title}</h1>
</div>
<div style="padding: 24px;">
{body}</div>
</div>
</body>
</html>
"#,
        title = text(&settings.title),
        body_color = attr(&settings.body_color),
        width = settings.width,
        font = attr(&settings.font_family),
        text_color = attr(&settings.text_color),
        header_color = attr(&settings.header_color),
    )
}

/// Render one block. Blocks with nothing to show (an image without a URL)
/// render as an empty string.
pub fn render_block(block: &Block, settings: &DocumentSettings) -> String {
    let align = style::alignment_style(block.alignment);

    match &block.kind {
        BlockKind::Heading {
            content,
            heading_level,
        } => {
            let level = heading_level.get();
            format!(r#"<h{level} style="{align}">{}</h{level}>"#, text(content))
        }
        BlockKind::Paragraph { content } => {
            format!(r#"<p style="{align}">{}</p>"#, text(content))
        }
        BlockKind::Image { image_url: None } => String::new(),
        BlockKind::Image {
            image_url: Some(url),
        } => format!(
            r#"<div style="{align}"><img src="{}" alt="" style="max-width: 100%;"></div>"#,
            attr(url)
        ),
        BlockKind::Button {
            button_text,
            button_url,
        } => format!(
            r#"<div style="{align}"><a href="{}" style="display: inline-block; padding: 12px 24px; background-color: {}; color: #ffffff; text-decoration: none; border-radius: 4px;">{}</a></div>"#,
            attr(button_url),
            attr(&settings.accent_color),
            text(button_text)
        ),
        BlockKind::Divider => {
            r#"<hr style="border: none; border-top: 1px solid #e5e7eb; margin: 16px 0;">"#
                .to_string()
        }
        BlockKind::Spacer { height } => {
            format!(r#"<div style="{}"></div>"#, style::spacer_style(*height))
        }
        BlockKind::ShapeSquare(_) | BlockKind::ShapeCircle(_) | BlockKind::ShapeTriangle(_) => {
            let Some((kind, shape)) = block.kind.shape() else {
                return String::new();
            };
            format!(
                r#"<div style="{}"><div style="{}"></div></div>"#,
                style::shape_container_style(block.alignment),
                attr(&style::shape_style(kind, shape))
            )
        }
        BlockKind::FullArticle {
            title,
            content,
            image_url,
            video_url,
            show_image,
            show_video,
        } => {
            let mut html = format!(r#"<div style="{align}"><h2>{}</h2>"#, text(title));
            if let (true, Some(url)) = (*show_image, image_url) {
                html.push_str(&format!(
                    r#"<img src="{}" alt="" style="max-width: 100%;">"#,
                    attr(url)
                ));
            }
            html.push_str(&format!("<p>{}</p>", text(content)));
            if let (true, Some(url)) = (*show_video, video_url) {
                html.push_str(&format!(
                    r#"<p><a href="{}">Watch the video</a></p>"#,
                    attr(url)
                ));
            }
            html.push_str("</div>");
            html
        }
        BlockKind::CustomHtml { html } => html.clone().unwrap_or_default(),
    }
}
