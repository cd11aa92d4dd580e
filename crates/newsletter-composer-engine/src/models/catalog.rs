use crate::models::{BlockType, HeadingLevel};

/// Selector tabs, in display order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    Text,
    Media,
    Layout,
    Advanced,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Text,
        Category::Media,
        Category::Layout,
        Category::Advanced,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Text => "Text",
            Category::Media => "Media",
            Category::Layout => "Layout",
            Category::Advanced => "Advanced",
        }
    }

    pub fn entries(&self) -> &'static [CatalogEntry] {
        match self {
            Category::Text => TEXT_ENTRIES,
            Category::Media => MEDIA_ENTRIES,
            Category::Layout => LAYOUT_ENTRIES,
            Category::Advanced => ADVANCED_ENTRIES,
        }
    }
}

/// One insertable item in the block selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub label: &'static str,
    pub description: &'static str,
    pub block_type: BlockType,
    /// Level applied after creation, for the per-level heading entries
    pub heading_level: Option<HeadingLevel>,
}

impl CatalogEntry {
    const fn plain(label: &'static str, description: &'static str, block_type: BlockType) -> Self {
        Self {
            label,
            description,
            block_type,
            heading_level: None,
        }
    }

    const fn heading(label: &'static str, level: HeadingLevel) -> Self {
        Self {
            label,
            description: "Section title",
            block_type: BlockType::Heading,
            heading_level: Some(level),
        }
    }
}

const TEXT_ENTRIES: &[CatalogEntry] = &[
    CatalogEntry::heading("Heading 1", HeadingLevel::H1),
    CatalogEntry::heading("Heading 2", HeadingLevel::H2),
    CatalogEntry::heading("Heading 3", HeadingLevel::H3),
    CatalogEntry::plain("Paragraph", "Body text", BlockType::Paragraph),
];

const MEDIA_ENTRIES: &[CatalogEntry] = &[
    CatalogEntry::plain("Image", "Picture from a URL", BlockType::Image),
    CatalogEntry::plain("Shape - Square", "Colored square", BlockType::ShapeSquare),
    CatalogEntry::plain("Shape - Circle", "Colored circle", BlockType::ShapeCircle),
    CatalogEntry::plain(
        "Shape - Triangle",
        "Colored triangle",
        BlockType::ShapeTriangle,
    ),
    CatalogEntry::plain("Button", "Call-to-action link", BlockType::Button),
];

const LAYOUT_ENTRIES: &[CatalogEntry] = &[
    CatalogEntry::plain("Divider", "Horizontal rule", BlockType::Divider),
    CatalogEntry::plain("Spacer", "Vertical gap", BlockType::Spacer),
];

const ADVANCED_ENTRIES: &[CatalogEntry] = &[
    CatalogEntry::plain(
        "Full Article",
        "Title, body, image and video",
        BlockType::FullArticle,
    ),
    CatalogEntry::plain("Custom HTML", "Raw markup", BlockType::CustomHtml),
];

/// Find an entry by its label, e.g. "Shape - Circle"
pub fn find_entry(label: &str) -> Option<&'static CatalogEntry> {
    Category::ALL
        .iter()
        .flat_map(|category| category.entries())
        .find(|entry| entry.label == label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_category_is_text() {
        assert_eq!(Category::default(), Category::Text);
        assert_ne!(Category::default(), Category::Media);
    }

    #[test]
    fn test_every_creatable_type_is_offered() {
        for block_type in BlockType::ALL {
            let offered = Category::ALL
                .iter()
                .flat_map(|c| c.entries())
                .any(|e| e.block_type == block_type);
            assert!(offered, "{block_type} missing from the selector");
        }
    }

    #[test]
    fn test_heading_entries_carry_levels() {
        let levels: Vec<_> = Category::Text
            .entries()
            .iter()
            .filter_map(|e| e.heading_level)
            .collect();
        assert_eq!(levels, HeadingLevel::ALL.to_vec());
    }

    #[test]
    fn test_find_entry_by_label() {
        let entry = find_entry("Shape - Circle").unwrap();
        assert_eq!(entry.block_type, BlockType::ShapeCircle);
        assert!(Category::Media.entries().contains(entry));
        assert!(find_entry("Carousel").is_none());
    }
}
