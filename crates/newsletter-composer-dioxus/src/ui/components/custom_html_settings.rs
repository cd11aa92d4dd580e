use dioxus::prelude::*;
use newsletter_composer_engine::editing::BlockPatch;
use newsletter_composer_engine::models::{Block, BlockKind};

/// Raw markup editor. The markup is exported unescaped.
#[component]
pub fn CustomHtmlSettings(block: Block, on_update: Callback<BlockPatch>) -> Element {
    let html = match &block.kind {
        BlockKind::CustomHtml { html } => html.clone().unwrap_or_default(),
        _ => return rsx! {},
    };

    rsx! {
        div {
            class: "settings-panel",
            h3 { "Custom HTML" }
            div {
                class: "control-group",
                label { "HTML" }
                textarea {
                    class: "code-input",
                    rows: "12",
                    spellcheck: "false",
                    placeholder: "<table>...</table>",
                    value: "{html}",
                    oninput: move |evt| on_update.call(BlockPatch {
                        html: Some(evt.value()),
                        ..BlockPatch::default()
                    }),
                }
                p { class: "control-hint", "Inserted into the export as-is." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use newsletter_composer_engine::models::BlockType;

    #[component]
    fn Harness(block: Block) -> Element {
        rsx! {
            CustomHtmlSettings { block, on_update: move |_: BlockPatch| {} }
        }
    }

    #[test]
    fn test_markup_shown_in_editor() {
        let block = BlockPatch {
            html: Some("<b>Sale</b>".to_string()),
            ..BlockPatch::default()
        }
        .apply_to(&Block::new(BlockType::CustomHtml, 0))
        .unwrap();
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { block });
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("code-input"));
        assert!(html.contains("Sale"));
        assert!(!html.contains("<b>Sale</b>"));
    }
}
