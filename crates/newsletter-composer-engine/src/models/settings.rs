use serde::{Deserialize, Serialize};

pub const MIN_WIDTH: u32 = 300;
pub const MAX_WIDTH: u32 = 800;

/// Document-level presentation settings, persisted alongside the blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSettings {
    pub title: String,
    pub header_color: String,
    pub body_color: String,
    pub text_color: String,
    pub accent_color: String,
    pub font_family: String,
    /// Content width in pixels, within [`MIN_WIDTH`, `MAX_WIDTH`]
    pub width: u32,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            title: "My Newsletter".to_string(),
            header_color: "#4f46e5".to_string(),
            body_color: "#ffffff".to_string(),
            text_color: "#1f2937".to_string(),
            accent_color: "#6366f1".to_string(),
            font_family: "Arial, sans-serif".to_string(),
            width: 600,
        }
    }
}

/// Font stacks offered by the settings editor
pub const FONT_FAMILIES: &[&str] = &[
    "Arial, sans-serif",
    "Helvetica, sans-serif",
    "Georgia, serif",
    "Times New Roman, serif",
    "Verdana, sans-serif",
    "Courier New, monospace",
];
