use dioxus::prelude::*;
use newsletter_composer_engine::editing::{
    BlockPatch, Cmd, Phase, Position, SettingsPatch, Snapshot,
};
use newsletter_composer_engine::models::{BlockType, CatalogEntry};
use newsletter_composer_engine::notify::Notification;

use super::{
    BlockSelector, BlockSettings, CustomHtmlSettings, DocumentSettingsPanel, FullArticleSettings,
    LayoutTab, ToastList,
};

/// Whole editor screen, drawn from one snapshot.
///
/// Every edit leaves through `on_command`; saving goes through `on_save` so
/// the owner can run the store call off the render path.
#[component]
pub fn ComposerView(
    snapshot: Snapshot,
    notifications: Vec<Notification>,
    on_command: Callback<Cmd>,
    on_save: Callback<()>,
    on_dismiss: Callback<usize>,
) -> Element {
    if snapshot.phase == Phase::Loading {
        return rsx! {
            div { class: "loading", "Loading your newsletter..." }
        };
    }

    let status = if snapshot.saving {
        "Saving..."
    } else if snapshot.unsaved_changes {
        "Unsaved changes"
    } else {
        "All changes saved"
    };
    let save_label = if snapshot.saving {
        "Saving..."
    } else {
        "Save Template"
    };
    let saving = snapshot.saving;
    let selector = snapshot.selector;
    let sidebar = settings_sidebar(&snapshot, on_command);

    rsx! {
        div {
            class: "composer",
            header {
                class: "toolbar",
                h1 { "Newsletter Layout" }
                span { class: "save-status", "{status}" }
                div {
                    class: "toolbar-actions",
                    button {
                        class: "add-block",
                        onclick: move |_| on_command.call(Cmd::OpenSelector { position: Position::Bottom }),
                        "+ Add Block"
                    }
                    button {
                        class: "save-button",
                        disabled: saving,
                        onclick: move |_| on_save.call(()),
                        "{save_label}"
                    }
                }
            }
            div {
                class: "composer-body",
                main { class: "composer-main", LayoutTab { snapshot, on_command } }
                aside { class: "composer-sidebar", {sidebar} }
            }
            if let Some(position) = selector {
                BlockSelector {
                    on_select_block: move |entry: CatalogEntry| on_command.call(Cmd::AddBlock {
                        block_type: entry.block_type,
                        heading_level: entry.heading_level,
                        position,
                    }),
                    on_close: move |_: ()| on_command.call(Cmd::CloseSelector),
                }
            }
            ToastList { notifications, on_dismiss }
        }
    }
}

/// Document settings with nothing selected, otherwise the panel the selected
/// block's type calls for
fn settings_sidebar(snapshot: &Snapshot, on_command: Callback<Cmd>) -> Element {
    let Some(row) = snapshot.selected_row() else {
        return rsx! {
            DocumentSettingsPanel {
                settings: snapshot.settings.clone(),
                on_update: move |patch: SettingsPatch| on_command.call(Cmd::UpdateSettings { patch }),
            }
        };
    };

    let id = row.block.id;
    let block = row.block.clone();
    let on_update = move |patch: BlockPatch| on_command.call(Cmd::UpdateBlock { id, patch });

    match (block.block_type(), snapshot.selected_capabilities()) {
        (BlockType::FullArticle, _) => rsx! { FullArticleSettings { block, on_update } },
        (BlockType::CustomHtml, _) => rsx! { CustomHtmlSettings { block, on_update } },
        (_, Some(capabilities)) => rsx! { BlockSettings { block, capabilities, on_update } },
        (_, None) => rsx! {},
    }
}
