use dioxus::prelude::*;
use newsletter_composer_engine::editing::{BlockPatch, validation};
use newsletter_composer_engine::models::{
    Alignment, Block, BlockKind, Capabilities, HeadingLevel, ShapeKind, ShapeStyle,
};

/// Generic settings panel for the selected block.
///
/// Shows only the controls `capabilities` enables, plus shape controls for
/// any shape block. Every change is sent as a patch holding just that field;
/// range limits on the numeric inputs are hints and the composer validates.
/// Numeric fields send on commit so partial values are never validated.
#[component]
pub fn BlockSettings(
    block: Block,
    capabilities: Capabilities,
    on_update: Callback<BlockPatch>,
) -> Element {
    let block_type = block.block_type();
    let caps = capabilities.effective_for(block_type);
    let title = format!("{block_type} settings");

    let alignment = block.alignment;
    let content = block.kind.content().unwrap_or_default().to_string();
    let heading_level = match &block.kind {
        BlockKind::Heading { heading_level, .. } => heading_level.get(),
        _ => HeadingLevel::H2.get(),
    };
    let image_url = match &block.kind {
        BlockKind::Image { image_url } => image_url.clone().unwrap_or_default(),
        _ => String::new(),
    };
    let (button_text, button_url) = match &block.kind {
        BlockKind::Button {
            button_text,
            button_url,
        } => (button_text.clone(), button_url.clone()),
        _ => (String::new(), String::new()),
    };
    let height = match &block.kind {
        BlockKind::Spacer { height } => *height,
        _ => 0,
    };
    let shape = block
        .kind
        .shape()
        .map(|(kind, style)| (kind, style.clone()));

    rsx! {
        div {
            class: "settings-panel",
            h3 { "{title}" }
            if caps.alignment {
                div {
                    class: "control-group",
                    label { "Alignment" }
                    div {
                        class: "button-group",
                        for choice in Alignment::ALL {
                            ChoiceButton {
                                label: capitalize(choice.as_str()),
                                active: choice == alignment,
                                on_choose: move |_: ()| on_update.call(BlockPatch::alignment(choice)),
                            }
                        }
                    }
                }
            }
            if caps.heading_level {
                div {
                    class: "control-group",
                    label { "Heading level" }
                    select {
                        value: "{heading_level}",
                        onchange: move |evt| {
                            if let Some(level) = parse_heading_level(&evt.value()) {
                                on_update.call(BlockPatch::heading_level(level));
                            }
                        },
                        for level in HeadingLevel::ALL {
                            option { value: "{level}", selected: level.get() == heading_level, "Heading {level}" }
                        }
                    }
                }
            }
            if caps.text {
                div {
                    class: "control-group",
                    label { "Text" }
                    textarea {
                        rows: "4",
                        value: "{content}",
                        oninput: move |evt| on_update.call(BlockPatch::content(evt.value())),
                    }
                }
            }
            if caps.image {
                div {
                    class: "control-group",
                    label { "Image URL" }
                    input {
                        r#type: "url",
                        placeholder: "https://",
                        value: "{image_url}",
                        oninput: move |evt| on_update.call(BlockPatch {
                            image_url: Some(evt.value()),
                            ..BlockPatch::default()
                        }),
                    }
                }
            }
            if caps.button {
                div {
                    class: "control-group",
                    label { "Button text" }
                    input {
                        value: "{button_text}",
                        oninput: move |evt| on_update.call(BlockPatch {
                            button_text: Some(evt.value()),
                            ..BlockPatch::default()
                        }),
                    }
                    label { "Button URL" }
                    input {
                        r#type: "url",
                        value: "{button_url}",
                        oninput: move |evt| on_update.call(BlockPatch {
                            button_url: Some(evt.value()),
                            ..BlockPatch::default()
                        }),
                    }
                }
            }
            if caps.spacer {
                div {
                    class: "control-group",
                    label { "Spacer height (px)" }
                    input {
                        r#type: "number",
                        min: "{validation::SPACER_HEIGHT.start()}",
                        max: "{validation::SPACER_HEIGHT.end()}",
                        value: "{height}",
                        onchange: move |evt| {
                            if let Some(height) = parse_int(&evt.value()) {
                                on_update.call(BlockPatch::height(height));
                            }
                        },
                    }
                }
            }
            if caps.shape {
                if let Some((kind, style)) = shape {
                    ShapeControls { kind, style, on_update }
                }
            }
        }
    }
}

#[component]
fn ShapeControls(kind: ShapeKind, style: ShapeStyle, on_update: Callback<BlockPatch>) -> Element {
    let size = style.shape_size;
    let color = style.shape_color.clone();
    let radius = style
        .border_radius
        .as_deref()
        .and_then(validation::radius_amount)
        .unwrap_or(0);
    let current = kind.as_str();

    rsx! {
        div {
            class: "control-group",
            label { "Shape" }
            select {
                value: "{current}",
                onchange: move |evt| {
                    if let Ok(shape_type) = evt.value().parse::<ShapeKind>() {
                        on_update.call(BlockPatch {
                            shape_type: Some(shape_type),
                            ..BlockPatch::default()
                        });
                    }
                },
                for choice in ShapeKind::ALL {
                    option {
                        value: choice.as_str(),
                        selected: choice == kind,
                        {capitalize(choice.as_str())}
                    }
                }
            }
            label { "Size (px)" }
            input {
                r#type: "number",
                min: "{validation::SHAPE_SIZE.start()}",
                max: "{validation::SHAPE_SIZE.end()}",
                value: "{size}",
                onchange: move |evt| {
                    if let Some(size) = parse_int(&evt.value()) {
                        on_update.call(BlockPatch::shape_size(size));
                    }
                },
            }
            label { "Color" }
            input {
                r#type: "color",
                value: "{color}",
                oninput: move |evt| on_update.call(BlockPatch {
                    shape_color: Some(evt.value()),
                    ..BlockPatch::default()
                }),
            }
            if kind == ShapeKind::Square {
                label { "Corner radius (px)" }
                input {
                    r#type: "number",
                    min: "0",
                    value: "{radius}",
                    onchange: move |evt| {
                        if let Some(radius) = parse_int(&evt.value()) {
                            on_update.call(BlockPatch {
                                border_radius: Some(format!("{radius}px")),
                                ..BlockPatch::default()
                            });
                        }
                    },
                }
            }
        }
    }
}

/// Toggle-style button used by the alignment group and the selector tabs
#[component]
pub fn ChoiceButton(label: String, active: bool, on_choose: Callback<()>) -> Element {
    let class = if active {
        "choice-button active"
    } else {
        "choice-button"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| on_choose.call(()),
            "{label}"
        }
    }
}

/// Whole-number input; anything else produces no update
fn parse_int(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

fn parse_heading_level(value: &str) -> Option<HeadingLevel> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(|n| HeadingLevel::try_from(n).ok())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use newsletter_composer_engine::models::BlockType;

    #[component]
    fn Harness(block: Block, capabilities: Capabilities) -> Element {
        rsx! {
            BlockSettings { block, capabilities, on_update: move |_: BlockPatch| {} }
        }
    }

    fn render_panel(block_type: BlockType, capabilities: Capabilities) -> String {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                block: Block::new(block_type, 0),
                capabilities,
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    fn caps_for(block_type: BlockType) -> Capabilities {
        Capabilities::for_block_type(block_type).unwrap()
    }

    #[test]
    fn test_heading_panel_controls() {
        let html = render_panel(BlockType::Heading, caps_for(BlockType::Heading));

        assert!(html.contains("Alignment"));
        assert!(html.contains("Heading level"));
        assert!(html.contains("New Heading"));
        assert!(!html.contains("Spacer height"));
        assert!(!html.contains("Button URL"));
    }

    #[test]
    fn test_spacer_panel_controls() {
        let html = render_panel(BlockType::Spacer, caps_for(BlockType::Spacer));

        assert!(html.contains("Spacer height"));
        assert!(html.contains(r#"max="200""#));
        assert!(!html.contains("<textarea"));
    }

    #[test]
    fn test_divider_panel_has_alignment_only() {
        let html = render_panel(BlockType::Divider, caps_for(BlockType::Divider));

        assert!(html.contains("Alignment"));
        assert!(!html.contains("control-group\"><label>Text"));
        assert!(!html.contains("Shape"));
    }

    #[test]
    fn test_shape_controls_shown_for_any_shape_block() {
        let html = render_panel(BlockType::ShapeCircle, caps_for(BlockType::Divider));

        assert!(html.contains("Size (px)"));
        assert!(html.contains("Color"));
        assert!(!html.contains("Corner radius"));
    }

    #[test]
    fn test_square_offers_corner_radius() {
        let html = render_panel(BlockType::ShapeSquare, caps_for(BlockType::ShapeSquare));

        assert!(html.contains("Corner radius"));
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int(" -3 "), Some(-3));
        assert_eq!(parse_int("4.5"), None);
        assert_eq!(parse_int("tall"), None);
        assert_eq!(parse_int(""), None);
    }

    #[test]
    fn test_parse_heading_level() {
        assert_eq!(parse_heading_level("1"), Some(HeadingLevel::H1));
        assert_eq!(parse_heading_level("4"), None);
        assert_eq!(parse_heading_level("two"), None);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("center"), "Center");
        assert_eq!(capitalize(""), "");
    }
}
