use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder text given to freshly inserted text blocks
pub const DEFAULT_HEADING_TEXT: &str = "New Heading";
pub const DEFAULT_PARAGRAPH_TEXT: &str = "Start writing your content here...";
pub const DEFAULT_BUTTON_TEXT: &str = "Click Here";
pub const DEFAULT_BUTTON_URL: &str = "#";
pub const DEFAULT_SPACER_HEIGHT: i32 = 20;
pub const DEFAULT_SHAPE_SIZE: i32 = 100;
pub const DEFAULT_SHAPE_COLOR: &str = "#3b82f6";
pub const DEFAULT_SQUARE_RADIUS: &str = "4px";
pub const DEFAULT_ARTICLE_TITLE: &str = "Article Title";
pub const DEFAULT_ARTICLE_CONTENT: &str = "Write your article here...";

/// Stable identifier for a block, unique within a document for the block's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub uuid::Uuid);

impl BlockId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// First 8 hex characters, for display only
    pub fn short(&self) -> String {
        self.0.as_simple().to_string()[..8].to_string()
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub const ALL: [Alignment; 3] = [Alignment::Left, Alignment::Center, Alignment::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

impl FromStr for Alignment {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Alignment::Left),
            "center" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            other => Err(UnknownValue::Alignment(other.to_string())),
        }
    }
}

/// Heading levels the composer offers; serialized as the bare integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    pub const ALL: [HeadingLevel; 3] = [HeadingLevel::H1, HeadingLevel::H2, HeadingLevel::H3];

    pub fn get(self) -> u8 {
        u8::from(self)
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        match level {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = UnknownValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(HeadingLevel::H1),
            2 => Ok(HeadingLevel::H2),
            3 => Ok(HeadingLevel::H3),
            other => Err(UnknownValue::HeadingLevel(other)),
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Square,
    Circle,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Square, ShapeKind::Circle, ShapeKind::Triangle];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownValue::ShapeKind(s.to_string()))
    }
}

/// Styling shared by the three shape variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeStyle {
    /// Explicit override of the geometry; when absent the block type decides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape_type: Option<ShapeKind>,
    pub shape_size: i32,
    pub shape_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
}

impl ShapeStyle {
    fn with_defaults(border_radius: Option<&str>) -> Self {
        Self {
            shape_type: None,
            shape_size: DEFAULT_SHAPE_SIZE,
            shape_color: DEFAULT_SHAPE_COLOR.to_string(),
            border_radius: border_radius.map(str::to_string),
        }
    }
}

/// Type-specific payload of a block, tagged by `type` in the persisted record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BlockKind {
    #[serde(rename_all = "camelCase")]
    Heading {
        content: String,
        heading_level: HeadingLevel,
    },
    Paragraph {
        content: String,
    },
    #[serde(rename_all = "camelCase")]
    Image {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Button {
        button_text: String,
        button_url: String,
    },
    Divider,
    Spacer {
        height: i32,
    },
    ShapeSquare(ShapeStyle),
    ShapeCircle(ShapeStyle),
    ShapeTriangle(ShapeStyle),
    #[serde(rename_all = "camelCase")]
    FullArticle {
        title: String,
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        video_url: Option<String>,
        #[serde(default)]
        show_image: bool,
        #[serde(default)]
        show_video: bool,
    },
    CustomHtml {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        html: Option<String>,
    },
}

impl BlockKind {
    /// Type-specific defaults for a freshly created block of `block_type`
    pub fn defaults_for(block_type: BlockType) -> Self {
        match block_type {
            BlockType::Heading => BlockKind::Heading {
                content: DEFAULT_HEADING_TEXT.to_string(),
                heading_level: HeadingLevel::H2,
            },
            BlockType::Paragraph => BlockKind::Paragraph {
                content: DEFAULT_PARAGRAPH_TEXT.to_string(),
            },
            BlockType::Image => BlockKind::Image { image_url: None },
            BlockType::Button => BlockKind::Button {
                button_text: DEFAULT_BUTTON_TEXT.to_string(),
                button_url: DEFAULT_BUTTON_URL.to_string(),
            },
            BlockType::Spacer => BlockKind::Spacer {
                height: DEFAULT_SPACER_HEIGHT,
            },
            BlockType::ShapeSquare => {
                BlockKind::ShapeSquare(ShapeStyle::with_defaults(Some(DEFAULT_SQUARE_RADIUS)))
            }
            BlockType::ShapeCircle => BlockKind::ShapeCircle(ShapeStyle::with_defaults(None)),
            BlockType::ShapeTriangle => BlockKind::ShapeTriangle(ShapeStyle::with_defaults(None)),
            BlockType::FullArticle => BlockKind::FullArticle {
                title: DEFAULT_ARTICLE_TITLE.to_string(),
                content: DEFAULT_ARTICLE_CONTENT.to_string(),
                image_url: None,
                video_url: None,
                show_image: true,
                show_video: false,
            },
            // No type-specific defaults: minimal common shape only
            BlockType::Divider => BlockKind::Divider,
            BlockType::CustomHtml => BlockKind::CustomHtml { html: None },
        }
    }

    pub fn block_type(&self) -> BlockType {
        match self {
            BlockKind::Heading { .. } => BlockType::Heading,
            BlockKind::Paragraph { .. } => BlockType::Paragraph,
            BlockKind::Image { .. } => BlockType::Image,
            BlockKind::Button { .. } => BlockType::Button,
            BlockKind::Divider => BlockType::Divider,
            BlockKind::Spacer { .. } => BlockType::Spacer,
            BlockKind::ShapeSquare(_) => BlockType::ShapeSquare,
            BlockKind::ShapeCircle(_) => BlockType::ShapeCircle,
            BlockKind::ShapeTriangle(_) => BlockType::ShapeTriangle,
            BlockKind::FullArticle { .. } => BlockType::FullArticle,
            BlockKind::CustomHtml { .. } => BlockType::CustomHtml,
        }
    }

    /// The shape geometry to draw and its style, for shape variants only.
    /// An explicit `shape_type` overrides the geometry implied by the tag.
    pub fn shape(&self) -> Option<(ShapeKind, &ShapeStyle)> {
        let (implied, style) = match self {
            BlockKind::ShapeSquare(style) => (ShapeKind::Square, style),
            BlockKind::ShapeCircle(style) => (ShapeKind::Circle, style),
            BlockKind::ShapeTriangle(style) => (ShapeKind::Triangle, style),
            _ => return None,
        };
        Some((style.shape_type.unwrap_or(implied), style))
    }

    pub(crate) fn shape_mut(&mut self) -> Option<&mut ShapeStyle> {
        match self {
            BlockKind::ShapeSquare(style)
            | BlockKind::ShapeCircle(style)
            | BlockKind::ShapeTriangle(style) => Some(style),
            _ => None,
        }
    }

    /// Body text for the variants that carry one
    pub fn content(&self) -> Option<&str> {
        match self {
            BlockKind::Heading { content, .. }
            | BlockKind::Paragraph { content }
            | BlockKind::FullArticle { content, .. } => Some(content),
            _ => None,
        }
    }
}

/// One content unit of a composed newsletter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    /// Position at creation time. Advisory only: display order is the
    /// block's index in the document, and this is never recomputed.
    pub order: usize,
    #[serde(default)]
    pub alignment: Alignment,
    #[serde(flatten)]
    pub kind: BlockKind,
}

impl Block {
    /// Create a block with a fresh id and the defaults for `block_type`.
    ///
    /// `current_length` is the length of the document the block is about to
    /// join and becomes the advisory `order`.
    pub fn new(block_type: BlockType, current_length: usize) -> Self {
        let alignment = if block_type.is_shape() {
            Alignment::Center
        } else {
            Alignment::Left
        };

        Self {
            id: BlockId::new(),
            order: current_length,
            alignment,
            kind: BlockKind::defaults_for(block_type),
        }
    }

    pub fn block_type(&self) -> BlockType {
        self.kind.block_type()
    }
}

/// Type token naming each kind of block, matching the persisted `type` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Heading,
    Paragraph,
    Image,
    Button,
    Divider,
    Spacer,
    ShapeSquare,
    ShapeCircle,
    ShapeTriangle,
    FullArticle,
    CustomHtml,
}

impl BlockType {
    pub const ALL: [BlockType; 11] = [
        BlockType::Heading,
        BlockType::Paragraph,
        BlockType::Image,
        BlockType::Button,
        BlockType::Divider,
        BlockType::Spacer,
        BlockType::ShapeSquare,
        BlockType::ShapeCircle,
        BlockType::ShapeTriangle,
        BlockType::FullArticle,
        BlockType::CustomHtml,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Heading => "heading",
            BlockType::Paragraph => "paragraph",
            BlockType::Image => "image",
            BlockType::Button => "button",
            BlockType::Divider => "divider",
            BlockType::Spacer => "spacer",
            BlockType::ShapeSquare => "shape-square",
            BlockType::ShapeCircle => "shape-circle",
            BlockType::ShapeTriangle => "shape-triangle",
            BlockType::FullArticle => "full-article",
            BlockType::CustomHtml => "custom-html",
        }
    }

    pub fn is_shape(&self) -> bool {
        self.as_str().starts_with("shape-")
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockType {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::ALL
            .into_iter()
            .find(|block_type| block_type.as_str() == s)
            .ok_or_else(|| UnknownValue::BlockType(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnknownValue {
    #[error("Unknown block type: {0}")]
    BlockType(String),
    #[error("Unknown alignment: {0}")]
    Alignment(String),
    #[error("Unknown shape: {0}")]
    ShapeKind(String),
    #[error("Heading level must be 1, 2 or 3, got {0}")]
    HeadingLevel(u8),
}
