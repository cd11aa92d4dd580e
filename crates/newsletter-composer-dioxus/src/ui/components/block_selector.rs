use dioxus::prelude::*;
use newsletter_composer_engine::models::{CatalogEntry, Category};

use super::block_settings::ChoiceButton;

/// Modal catalog of insertable blocks, grouped into category tabs.
///
/// Choosing an entry reports it through `on_select_block` and then closes.
/// The active tab is local state and starts at the first category.
#[component]
pub fn BlockSelector(on_select_block: Callback<CatalogEntry>, on_close: Callback<()>) -> Element {
    let mut category = use_signal(Category::default);
    let active = category();

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "block-selector",
                onclick: move |evt| evt.stop_propagation(),
                div {
                    class: "selector-header",
                    h2 { "Add a block" }
                    button {
                        class: "close-button",
                        title: "Close",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                div {
                    class: "selector-tabs",
                    for tab in Category::ALL {
                        ChoiceButton {
                            label: tab.label().to_string(),
                            active: tab == active,
                            on_choose: move |_: ()| category.set(tab),
                        }
                    }
                }
                div {
                    class: "selector-grid",
                    for entry in active.entries().iter().copied() {
                        EntryCard {
                            entry,
                            on_choose: move |chosen: CatalogEntry| {
                                on_select_block.call(chosen);
                                on_close.call(());
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EntryCard(entry: CatalogEntry, on_choose: Callback<CatalogEntry>) -> Element {
    let label = entry.label;
    let description = entry.description;

    rsx! {
        button {
            class: "entry-card",
            onclick: move |_| on_choose.call(entry),
            span { class: "entry-label", "{label}" }
            span { class: "entry-description", "{description}" }
        }
    }
}
