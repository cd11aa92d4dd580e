use dioxus::prelude::*;
use newsletter_composer_engine::editing::{SettingsPatch, validation};
use newsletter_composer_engine::models::DocumentSettings;
use newsletter_composer_engine::models::settings::FONT_FAMILIES;

#[derive(Clone, Copy, PartialEq)]
enum ColorField {
    Header,
    Body,
    Text,
    Accent,
}

impl ColorField {
    const ALL: [ColorField; 4] = [
        ColorField::Header,
        ColorField::Body,
        ColorField::Text,
        ColorField::Accent,
    ];

    fn label(self) -> &'static str {
        match self {
            ColorField::Header => "Header color",
            ColorField::Body => "Background color",
            ColorField::Text => "Text color",
            ColorField::Accent => "Accent color",
        }
    }

    fn value(self, settings: &DocumentSettings) -> String {
        match self {
            ColorField::Header => settings.header_color.clone(),
            ColorField::Body => settings.body_color.clone(),
            ColorField::Text => settings.text_color.clone(),
            ColorField::Accent => settings.accent_color.clone(),
        }
    }

    fn patch(self, color: String) -> SettingsPatch {
        let mut patch = SettingsPatch::default();
        match self {
            ColorField::Header => patch.header_color = Some(color),
            ColorField::Body => patch.body_color = Some(color),
            ColorField::Text => patch.text_color = Some(color),
            ColorField::Accent => patch.accent_color = Some(color),
        }
        patch
    }
}

/// Sidebar shown when no block is selected
#[component]
pub fn DocumentSettingsPanel(
    settings: DocumentSettings,
    on_update: Callback<SettingsPatch>,
) -> Element {
    let title = settings.title.clone();
    let font_family = settings.font_family.clone();
    let width = settings.width;

    rsx! {
        div {
            class: "settings-panel",
            h3 { "Newsletter settings" }
            div {
                class: "control-group",
                label { "Title" }
                input {
                    value: "{title}",
                    oninput: move |evt| on_update.call(SettingsPatch {
                        title: Some(evt.value()),
                        ..SettingsPatch::default()
                    }),
                }
            }
            for field in ColorField::ALL {
                ColorInput {
                    label: field.label().to_string(),
                    value: field.value(&settings),
                    on_change: move |color: String| on_update.call(field.patch(color)),
                }
            }
            div {
                class: "control-group",
                label { "Font" }
                select {
                    value: "{font_family}",
                    onchange: move |evt| on_update.call(SettingsPatch {
                        font_family: Some(evt.value()),
                        ..SettingsPatch::default()
                    }),
                    for font in FONT_FAMILIES.iter().copied() {
                        option { value: font, selected: font == font_family, "{font}" }
                    }
                }
            }
            div {
                class: "control-group",
                label { "Width (px)" }
                input {
                    r#type: "number",
                    min: "{validation::WIDTH.start()}",
                    max: "{validation::WIDTH.end()}",
                    step: "10",
                    value: "{width}",
                    onchange: move |evt| {
                        if let Ok(width) = evt.value().trim().parse::<u32>() {
                            on_update.call(SettingsPatch {
                                width: Some(width),
                                ..SettingsPatch::default()
                            });
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn ColorInput(label: String, value: String, on_change: Callback<String>) -> Element {
    rsx! {
        div {
            class: "control-group color-control",
            label { "{label}" }
            input {
                r#type: "color",
                value: "{value}",
                oninput: move |evt| on_change.call(evt.value()),
            }
            span { class: "color-value", "{value}" }
        }
    }
}
