use dioxus::prelude::*;
use newsletter_composer_engine::editing::{BlockRow, Cmd, Direction, Position, Snapshot};

use super::BlockView;

/// The newsletter canvas: a header band with the title, then every block
/// with an insert point after each one.
///
/// Clicking the empty canvas clears the selection.
#[component]
pub fn LayoutTab(snapshot: Snapshot, on_command: Callback<Cmd>) -> Element {
    let settings = &snapshot.settings;
    let canvas_style = format!(
        "max-width: {}px; background-color: {}; color: {}; font-family: {};",
        settings.width, settings.body_color, settings.text_color, settings.font_family
    );
    let header_style = format!("background-color: {};", settings.header_color);
    let title = settings.title.clone();
    let accent = settings.accent_color.clone();
    let is_empty = snapshot.is_empty();
    let rows = snapshot.rows.clone();

    rsx! {
        div {
            class: "layout-tab",
            onclick: move |_| on_command.call(Cmd::Select { id: None }),
            div {
                class: "newsletter-canvas",
                style: "{canvas_style}",
                div { class: "newsletter-header", style: "{header_style}", h1 { "{title}" } }
                div {
                    class: "newsletter-body",
                    if is_empty {
                        div {
                            class: "empty-state",
                            p { "Your newsletter is empty." }
                            button {
                                class: "add-first-block",
                                onclick: move |evt| {
                                    evt.stop_propagation();
                                    on_command.call(Cmd::OpenSelector { position: Position::Top });
                                },
                                "Add first block +"
                            }
                        }
                    }
                    for (key, row) in rows.into_iter().map(|row| (row.block.id.to_string(), row)) {
                        LayoutRow {
                            key: "{key}",
                            row,
                            accent_color: accent.clone(),
                            on_command,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LayoutRow(row: BlockRow, accent_color: String, on_command: Callback<Cmd>) -> Element {
    let id = row.block.id;
    let index = row.index;

    rsx! {
        BlockView {
            row,
            accent_color,
            on_click: move |_: ()| on_command.call(Cmd::Select { id: Some(id) }),
            on_move: move |direction: Direction| on_command.call(Cmd::MoveBlock { id, direction }),
            on_delete: move |_: ()| on_command.call(Cmd::DeleteBlock { id }),
        }
        InsertButton { on_click: move |_: ()| on_command.call(Cmd::OpenSelector { position: Position::After(index) }) }
    }
}

#[component]
fn InsertButton(on_click: Callback<()>) -> Element {
    rsx! {
        div {
            class: "insert-point",
            button {
                class: "insert-button",
                title: "Insert block here",
                onclick: move |evt| {
                    evt.stop_propagation();
                    on_click.call(());
                },
                "+"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use newsletter_composer_engine::editing::Composer;
    use newsletter_composer_engine::models::{BlockType, OwnerId};

    #[component]
    fn Harness(snapshot: Snapshot) -> Element {
        rsx! {
            LayoutTab { snapshot, on_command: move |_: Cmd| {} }
        }
    }

    fn render_tab(composer: &Composer) -> String {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                snapshot: composer.snapshot(),
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_empty_document_offers_first_block() {
        let composer = Composer::new(OwnerId::from("ada"));
        let html = render_tab(&composer);

        assert!(html.contains("Add first block +"));
        assert!(html.contains("My Newsletter"));
        assert!(html.contains("max-width: 600px"));
    }

    #[test]
    fn test_blocks_render_in_order_with_insert_points() {
        let mut composer = Composer::new(OwnerId::from("ada"));
        composer.add_block(BlockType::Heading, Position::Bottom);
        composer.add_block(BlockType::Paragraph, Position::Bottom);
        let html = render_tab(&composer);

        assert!(!html.contains("Add first block +"));
        let heading = html.find("New Heading").unwrap();
        let paragraph = html.find("Start writing your content here...").unwrap();
        assert!(heading < paragraph);
        assert_eq!(html.matches("insert-button").count(), 2);
    }

    #[test]
    fn test_new_block_is_rendered_selected() {
        let mut composer = Composer::new(OwnerId::from("ada"));
        composer.add_block(BlockType::Spacer, Position::Bottom);
        let html = render_tab(&composer);

        assert!(html.contains("block selected"));
        assert!(html.contains("Delete block"));
    }
}
