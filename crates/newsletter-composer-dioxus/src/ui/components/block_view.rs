use dioxus::prelude::*;
use newsletter_composer_engine::editing::{BlockRow, Direction};
use newsletter_composer_engine::models::{Block, BlockKind, HeadingLevel};
use newsletter_composer_engine::render::style;

/// One block on the canvas.
///
/// Stateless: it draws `row` and reports clicks. Move and delete controls
/// appear only on the selected block, and a move control only when the block
/// can actually move that way.
#[component]
pub fn BlockView(
    row: BlockRow,
    accent_color: String,
    on_click: Callback<()>,
    on_move: Callback<Direction>,
    on_delete: Callback<()>,
) -> Element {
    let class = if row.is_selected {
        "block selected"
    } else {
        "block"
    };
    let block_type = row.block.block_type().as_str();
    let body = block_body(&row.block, &accent_color);

    rsx! {
        div {
            class: "{class}",
            "data-block-type": "{block_type}",
            onclick: move |evt| {
                evt.stop_propagation();
                on_click.call(());
            },
            if row.is_selected {
                div {
                    class: "block-controls",
                    if row.can_move_up {
                        button {
                            class: "block-control move-up",
                            title: "Move up",
                            onclick: move |evt| {
                                evt.stop_propagation();
                                on_move.call(Direction::Up);
                            },
                            "↑"
                        }
                    }
                    if row.can_move_down {
                        button {
                            class: "block-control move-down",
                            title: "Move down",
                            onclick: move |evt| {
                                evt.stop_propagation();
                                on_move.call(Direction::Down);
                            },
                            "↓"
                        }
                    }
                    button {
                        class: "block-control delete",
                        title: "Delete block",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            on_delete.call(());
                        },
                        "✕"
                    }
                }
            }
            {body}
        }
    }
}

fn block_body(block: &Block, accent_color: &str) -> Element {
    let align = style::alignment_style(block.alignment);

    match &block.kind {
        BlockKind::Heading {
            content,
            heading_level,
        } => match heading_level {
            HeadingLevel::H1 => rsx! { h1 { style: "{align}", "{content}" } },
            HeadingLevel::H2 => rsx! { h2 { style: "{align}", "{content}" } },
            HeadingLevel::H3 => rsx! { h3 { style: "{align}", "{content}" } },
        },
        BlockKind::Paragraph { content } => rsx! {
            p { class: "block-paragraph", style: "{align}", "{content}" }
        },
        BlockKind::Image {
            image_url: Some(url),
        } => rsx! {
            div { style: "{align}", img { class: "block-image", src: "{url}", alt: "" } }
        },
        BlockKind::Image { image_url: None } => rsx! {
            div { class: "image-placeholder", style: "{align}", "Add an image URL in the block settings" }
        },
        BlockKind::Button {
            button_text,
            button_url,
        } => rsx! {
            div {
                style: "{align}",
                a {
                    class: "block-button",
                    href: "{button_url}",
                    style: "background-color: {accent_color};",
                    onclick: move |evt: MouseEvent| evt.prevent_default(),
                    "{button_text}"
                }
            }
        },
        BlockKind::Divider => rsx! { hr { class: "block-divider" } },
        BlockKind::Spacer { height } => {
            let spacer = style::spacer_style(*height);
            rsx! { div { class: "block-spacer", style: "{spacer}" } }
        }
        BlockKind::ShapeSquare(_) | BlockKind::ShapeCircle(_) | BlockKind::ShapeTriangle(_) => {
            let Some((kind, shape)) = block.kind.shape() else {
                return rsx! {};
            };
            let container = style::shape_container_style(block.alignment);
            let shape_css = style::shape_style(kind, shape);
            let shape_class = format!("block-shape shape-{}", kind.as_str());
            rsx! {
                div { style: "{container}", div { class: "{shape_class}", style: "{shape_css}" } }
            }
        }
        BlockKind::FullArticle {
            title,
            content,
            image_url,
            video_url,
            show_image,
            show_video,
        } => {
            let image = match (*show_image, image_url) {
                (true, Some(url)) => rsx! { img { class: "block-image", src: "{url}", alt: "" } },
                (true, None) => rsx! { div { class: "image-placeholder", "Article image" } },
                (false, _) => rsx! {},
            };
            let video = match (*show_video, video_url) {
                (true, Some(url)) => rsx! { video { class: "block-video", src: "{url}", controls: true } },
                (true, None) => rsx! { div { class: "video-placeholder", "Article video" } },
                (false, _) => rsx! {},
            };
            rsx! {
                article {
                    class: "block-article",
                    style: "{align}",
                    h2 { "{title}" }
                    {image}
                    p { "{content}" }
                    {video}
                }
            }
        }
        BlockKind::CustomHtml { html } => {
            let summary = match html {
                Some(markup) => format!("Custom HTML ({} characters)", markup.len()),
                None => "Custom HTML".to_string(),
            };
            rsx! { div { class: "custom-html-placeholder", "{summary}" } }
        }
    }
}
