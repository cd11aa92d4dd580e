use crate::editing::validation::{self, ValidationError};
use crate::models::{
    Alignment, Block, BlockKind, BlockType, DocumentSettings, HeadingLevel, ShapeKind,
};

/// Partial update of one block. Only the `Some` fields change.
///
/// A field that the block's variant cannot carry is rejected rather than
/// ignored, so a spacer can never pick up a `buttonUrl`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockPatch {
    pub alignment: Option<Alignment>,
    pub content: Option<String>,
    pub heading_level: Option<HeadingLevel>,
    /// Empty string clears the image
    pub image_url: Option<String>,
    pub button_text: Option<String>,
    pub button_url: Option<String>,
    pub height: Option<i32>,
    pub shape_type: Option<ShapeKind>,
    pub shape_size: Option<i32>,
    pub shape_color: Option<String>,
    pub border_radius: Option<String>,
    pub title: Option<String>,
    /// Empty string clears the video
    pub video_url: Option<String>,
    pub show_image: Option<bool>,
    pub show_video: Option<bool>,
    pub html: Option<String>,
}

impl BlockPatch {
    pub fn alignment(alignment: Alignment) -> Self {
        Self {
            alignment: Some(alignment),
            ..Self::default()
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn heading_level(level: HeadingLevel) -> Self {
        Self {
            heading_level: Some(level),
            ..Self::default()
        }
    }

    pub fn height(height: i32) -> Self {
        Self {
            height: Some(height),
            ..Self::default()
        }
    }

    pub fn shape_size(size: i32) -> Self {
        Self {
            shape_size: Some(size),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow-merge this patch into a copy of `block`.
    ///
    /// The original is left untouched when any field fails validation.
    pub fn apply_to(&self, block: &Block) -> Result<Block, ValidationError> {
        let block_type = block.block_type();
        let not_applicable = |field: &'static str| ValidationError::FieldNotApplicable {
            field,
            block_type,
        };

        let mut next = block.clone();

        if let Some(alignment) = self.alignment {
            next.alignment = alignment;
        }

        if let Some(text) = &self.content {
            match &mut next.kind {
                BlockKind::Heading { content, .. }
                | BlockKind::Paragraph { content }
                | BlockKind::FullArticle { content, .. } => *content = text.clone(),
                _ => return Err(not_applicable("content")),
            }
        }

        if let Some(level) = self.heading_level {
            match &mut next.kind {
                BlockKind::Heading { heading_level, .. } => *heading_level = level,
                _ => return Err(not_applicable("headingLevel")),
            }
        }

        if let Some(url) = &self.image_url {
            match &mut next.kind {
                BlockKind::Image { image_url } | BlockKind::FullArticle { image_url, .. } => {
                    *image_url = non_empty(url)
                }
                _ => return Err(not_applicable("imageUrl")),
            }
        }

        if let Some(text) = &self.button_text {
            match &mut next.kind {
                BlockKind::Button { button_text, .. } => *button_text = text.clone(),
                _ => return Err(not_applicable("buttonText")),
            }
        }

        if let Some(url) = &self.button_url {
            match &mut next.kind {
                BlockKind::Button { button_url, .. } => *button_url = url.clone(),
                _ => return Err(not_applicable("buttonUrl")),
            }
        }

        if let Some(value) = self.height {
            match &mut next.kind {
                BlockKind::Spacer { height } => *height = validation::spacer_height(value)?,
                _ => return Err(not_applicable("height")),
            }
        }

        self.apply_shape_fields(&mut next.kind, block_type)?;

        if let Some(text) = &self.title {
            match &mut next.kind {
                BlockKind::FullArticle { title, .. } => *title = text.clone(),
                _ => return Err(not_applicable("title")),
            }
        }

        if let Some(url) = &self.video_url {
            match &mut next.kind {
                BlockKind::FullArticle { video_url, .. } => *video_url = non_empty(url),
                _ => return Err(not_applicable("videoUrl")),
            }
        }

        if let Some(flag) = self.show_image {
            match &mut next.kind {
                BlockKind::FullArticle { show_image, .. } => *show_image = flag,
                _ => return Err(not_applicable("showImage")),
            }
        }

        if let Some(flag) = self.show_video {
            match &mut next.kind {
                BlockKind::FullArticle { show_video, .. } => *show_video = flag,
                _ => return Err(not_applicable("showVideo")),
            }
        }

        if let Some(markup) = &self.html {
            match &mut next.kind {
                BlockKind::CustomHtml { html } => *html = non_empty(markup),
                _ => return Err(not_applicable("html")),
            }
        }

        Ok(next)
    }

    fn apply_shape_fields(
        &self,
        kind: &mut BlockKind,
        block_type: BlockType,
    ) -> Result<(), ValidationError> {
        let touches_shape = self.shape_type.is_some()
            || self.shape_size.is_some()
            || self.shape_color.is_some()
            || self.border_radius.is_some();
        if !touches_shape {
            return Ok(());
        }

        let Some(style) = kind.shape_mut() else {
            let field = if self.shape_type.is_some() {
                "shapeType"
            } else if self.shape_size.is_some() {
                "shapeSize"
            } else if self.shape_color.is_some() {
                "shapeColor"
            } else {
                "borderRadius"
            };
            return Err(ValidationError::FieldNotApplicable { field, block_type });
        };

        if let Some(shape_type) = self.shape_type {
            style.shape_type = Some(shape_type);
        }
        if let Some(size) = self.shape_size {
            style.shape_size = validation::shape_size(size)?;
        }
        if let Some(color) = &self.shape_color {
            style.shape_color = validation::color("shapeColor", color)?;
        }
        if let Some(radius) = &self.border_radius {
            style.border_radius = Some(validation::border_radius(radius)?);
        }
        Ok(())
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Partial update of the document settings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPatch {
    pub title: Option<String>,
    pub header_color: Option<String>,
    pub body_color: Option<String>,
    pub text_color: Option<String>,
    pub accent_color: Option<String>,
    pub font_family: Option<String>,
    pub width: Option<u32>,
}

impl SettingsPatch {
    pub fn apply_to(&self, settings: &DocumentSettings) -> Result<DocumentSettings, ValidationError> {
        let mut next = settings.clone();

        if let Some(title) = &self.title {
            next.title = title.clone();
        }
        if let Some(color) = &self.header_color {
            next.header_color = validation::color("headerColor", color)?;
        }
        if let Some(color) = &self.body_color {
            next.body_color = validation::color("bodyColor", color)?;
        }
        if let Some(color) = &self.text_color {
            next.text_color = validation::color("textColor", color)?;
        }
        if let Some(color) = &self.accent_color {
            next.accent_color = validation::color("accentColor", color)?;
        }
        if let Some(font) = &self.font_family {
            next.font_family = font.clone();
        }
        if let Some(width) = self.width {
            next.width = validation::width(width)?;
        }

        Ok(next)
    }
}
