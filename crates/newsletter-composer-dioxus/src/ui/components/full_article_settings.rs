use dioxus::prelude::*;
use newsletter_composer_engine::editing::BlockPatch;
use newsletter_composer_engine::models::{Block, BlockKind};

/// Dedicated panel for full-article blocks
#[component]
pub fn FullArticleSettings(block: Block, on_update: Callback<BlockPatch>) -> Element {
    let BlockKind::FullArticle {
        title,
        content,
        image_url,
        video_url,
        show_image,
        show_video,
    } = block.kind
    else {
        return rsx! {};
    };
    let image_url = image_url.unwrap_or_default();
    let video_url = video_url.unwrap_or_default();

    rsx! {
        div {
            class: "settings-panel",
            h3 { "Article settings" }
            div {
                class: "control-group",
                label { "Title" }
                input {
                    value: "{title}",
                    oninput: move |evt| on_update.call(BlockPatch {
                        title: Some(evt.value()),
                        ..BlockPatch::default()
                    }),
                }
            }
            div {
                class: "control-group",
                label { "Content" }
                textarea {
                    rows: "8",
                    value: "{content}",
                    oninput: move |evt| on_update.call(BlockPatch::content(evt.value())),
                }
            }
            div {
                class: "control-group",
                label {
                    input {
                        r#type: "checkbox",
                        checked: show_image,
                        onchange: move |evt| on_update.call(BlockPatch {
                            show_image: Some(evt.checked()),
                            ..BlockPatch::default()
                        }),
                    }
                    " Show image"
                }
                if show_image {
                    input {
                        r#type: "url",
                        placeholder: "Image URL",
                        value: "{image_url}",
                        oninput: move |evt| on_update.call(BlockPatch {
                            image_url: Some(evt.value()),
                            ..BlockPatch::default()
                        }),
                    }
                }
            }
            div {
                class: "control-group",
                label {
                    input {
                        r#type: "checkbox",
                        checked: show_video,
                        onchange: move |evt| on_update.call(BlockPatch {
                            show_video: Some(evt.checked()),
                            ..BlockPatch::default()
                        }),
                    }
                    " Show video"
                }
                if show_video {
                    input {
                        r#type: "url",
                        placeholder: "Video URL",
                        value: "{video_url}",
                        oninput: move |evt| on_update.call(BlockPatch {
                            video_url: Some(evt.value()),
                            ..BlockPatch::default()
                        }),
                    }
                }
            }
        }
    }
}
