use regex::Regex;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

use crate::models::settings::{MAX_WIDTH, MIN_WIDTH};
use crate::models::{Block, BlockKind, BlockType, DocumentSettings};

pub const SPACER_HEIGHT: RangeInclusive<i32> = 1..=200;
pub const SHAPE_SIZE: RangeInclusive<i32> = 10..=500;
pub const WIDTH: RangeInclusive<u32> = MIN_WIDTH..=MAX_WIDTH;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color pattern is valid")
});

static BORDER_RADIUS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?\d+)(px|%)?$").expect("border radius pattern is valid")
});

/// A field value the editor refuses to store
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Spacer height must be between 1 and 200, got {0}")]
    SpacerHeight(i32),
    #[error("Shape size must be between 10 and 500, got {0}")]
    ShapeSize(i32),
    #[error("Border radius must be a non-negative length, got {0:?}")]
    BorderRadius(String),
    #[error("Width must be between 300 and 800 pixels, got {0}")]
    Width(u32),
    #[error("{field} must be a hex color like #1a2b3c, got {value:?}")]
    Color { field: &'static str, value: String },
    #[error("{field} does not apply to {block_type} blocks")]
    FieldNotApplicable {
        field: &'static str,
        block_type: BlockType,
    },
}

pub fn spacer_height(height: i32) -> Result<i32, ValidationError> {
    if SPACER_HEIGHT.contains(&height) {
        Ok(height)
    } else {
        Err(ValidationError::SpacerHeight(height))
    }
}

pub fn shape_size(size: i32) -> Result<i32, ValidationError> {
    if SHAPE_SIZE.contains(&size) {
        Ok(size)
    } else {
        Err(ValidationError::ShapeSize(size))
    }
}

pub fn width(width: u32) -> Result<u32, ValidationError> {
    if WIDTH.contains(&width) {
        Ok(width)
    } else {
        Err(ValidationError::Width(width))
    }
}

pub fn color(field: &'static str, value: &str) -> Result<String, ValidationError> {
    if HEX_COLOR.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(ValidationError::Color {
            field,
            value: value.to_string(),
        })
    }
}

/// Accepts `12`, `12px` or `50%`; a bare number is stored as pixels
pub fn border_radius(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    let invalid = || ValidationError::BorderRadius(value.to_string());

    let captures = BORDER_RADIUS.captures(trimmed).ok_or_else(invalid)?;
    let amount: i64 = captures[1].parse().map_err(|_| invalid())?;
    if amount < 0 {
        return Err(invalid());
    }

    let unit = captures.get(2).map_or("px", |m| m.as_str());
    Ok(format!("{amount}{unit}"))
}

/// Leading integer of a CSS length, as shown in numeric inputs
pub fn radius_amount(value: &str) -> Option<i32> {
    BORDER_RADIUS
        .captures(value.trim())
        .and_then(|c| c[1].parse().ok())
}

/// Reset stored settings values the editor would refuse to their defaults.
/// Returns one error per replaced value.
pub fn repair_settings(settings: &mut DocumentSettings) -> Vec<ValidationError> {
    let defaults = DocumentSettings::default();
    let mut repaired = Vec::new();

    if let Err(e) = width(settings.width) {
        settings.width = defaults.width;
        repaired.push(e);
    }
    for (field, value, default) in [
        ("headerColor", &mut settings.header_color, defaults.header_color),
        ("bodyColor", &mut settings.body_color, defaults.body_color),
        ("textColor", &mut settings.text_color, defaults.text_color),
        ("accentColor", &mut settings.accent_color, defaults.accent_color),
    ] {
        if let Err(e) = color(field, value) {
            *value = default;
            repaired.push(e);
        }
    }
    repaired
}

/// Reset stored block values the editor would refuse to the defaults for
/// the block's type. Returns one error per replaced value.
pub fn repair_block(block: &mut Block) -> Vec<ValidationError> {
    let defaults = BlockKind::defaults_for(block.block_type());
    let mut repaired = Vec::new();

    match (&mut block.kind, defaults) {
        (BlockKind::Spacer { height }, BlockKind::Spacer { height: default }) => {
            if let Err(e) = spacer_height(*height) {
                *height = default;
                repaired.push(e);
            }
        }
        (kind, defaults) => {
            let (Some(style), Some((_, default))) = (kind.shape_mut(), defaults.shape()) else {
                return repaired;
            };
            if let Err(e) = shape_size(style.shape_size) {
                style.shape_size = default.shape_size;
                repaired.push(e);
            }
            if let Err(e) = color("shapeColor", &style.shape_color) {
                style.shape_color = default.shape_color.clone();
                repaired.push(e);
            }
            if let Some(radius) = &style.border_radius {
                match border_radius(radius) {
                    Ok(normalized) => style.border_radius = Some(normalized),
                    Err(e) => {
                        style.border_radius = default.border_radius.clone();
                        repaired.push(e);
                    }
                }
            }
        }
    }
    repaired
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, true)]
    #[case(200, true)]
    #[case(0, false)]
    #[case(-5, false)]
    #[case(201, false)]
    fn test_spacer_height_bounds(#[case] height: i32, #[case] ok: bool) {
        assert_eq!(spacer_height(height).is_ok(), ok);
    }

    #[rstest]
    #[case(10, true)]
    #[case(500, true)]
    #[case(9, false)]
    #[case(501, false)]
    fn test_shape_size_bounds(#[case] size: i32, #[case] ok: bool) {
        assert_eq!(shape_size(size).is_ok(), ok);
    }

    #[rstest]
    #[case("#fff", true)]
    #[case("#3B82F6", true)]
    #[case("3b82f6", false)]
    #[case("#12345", false)]
    #[case("red", false)]
    #[case("", false)]
    fn test_colors(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(color("shapeColor", value).is_ok(), ok);
    }

    #[rstest]
    #[case("4px", Ok("4px"))]
    #[case("12", Ok("12px"))]
    #[case(" 50% ", Ok("50%"))]
    #[case("0", Ok("0px"))]
    fn test_border_radius_normalized(#[case] input: &str, #[case] expected: Result<&str, ()>) {
        assert_eq!(
            border_radius(input).map_err(|_| ()),
            expected.map(str::to_string)
        );
    }

    #[rstest]
    #[case("-3px")]
    #[case("abc")]
    #[case("4em")]
    fn test_border_radius_rejected(#[case] input: &str) {
        assert_eq!(
            border_radius(input),
            Err(ValidationError::BorderRadius(input.to_string()))
        );
    }

    #[test]
    fn test_radius_amount() {
        assert_eq!(radius_amount("4px"), Some(4));
        assert_eq!(radius_amount("50%"), Some(50));
        assert_eq!(radius_amount("wide"), None);
    }

    #[test]
    fn test_repair_settings_resets_refused_values() {
        let mut settings = DocumentSettings {
            width: 5000,
            accent_color: "tomato".to_string(),
            title: "Kept".to_string(),
            ..DocumentSettings::default()
        };

        let repaired = repair_settings(&mut settings);

        assert_eq!(repaired.len(), 2);
        assert_eq!(repaired[0], ValidationError::Width(5000));
        assert_eq!(settings.width, DocumentSettings::default().width);
        assert_eq!(settings.accent_color, DocumentSettings::default().accent_color);
        assert_eq!(settings.title, "Kept");
    }

    #[test]
    fn test_repair_block_resets_refused_values() {
        let mut spacer = Block::new(BlockType::Spacer, 0);
        spacer.kind = BlockKind::Spacer { height: -5 };
        assert_eq!(
            repair_block(&mut spacer),
            vec![ValidationError::SpacerHeight(-5)]
        );
        assert_eq!(spacer.kind, BlockKind::defaults_for(BlockType::Spacer));

        let mut square = Block::new(BlockType::ShapeSquare, 0);
        if let Some(style) = square.kind.shape_mut() {
            style.shape_size = 0;
            style.border_radius = Some("8".to_string());
        }
        assert_eq!(repair_block(&mut square), vec![ValidationError::ShapeSize(0)]);
        let (_, style) = square.kind.shape().unwrap();
        assert_eq!(style.shape_size, 100);
        assert_eq!(style.border_radius.as_deref(), Some("8px"));
    }

    #[test]
    fn test_repair_leaves_valid_block_alone() {
        let mut heading = Block::new(BlockType::Heading, 0);
        let before = heading.clone();

        assert!(repair_block(&mut heading).is_empty());
        assert_eq!(heading, before);
    }

    #[test]
    fn test_width_bounds() {
        assert!(width(300).is_ok());
        assert!(width(800).is_ok());
        assert_eq!(width(299), Err(ValidationError::Width(299)));
        assert_eq!(width(801), Err(ValidationError::Width(801)));
    }
}
