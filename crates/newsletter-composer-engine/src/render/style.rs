//! Inline CSS shared by the desktop renderer and the HTML export

use crate::models::{Alignment, ShapeKind, ShapeStyle};

pub fn text_align(alignment: Alignment) -> &'static str {
    alignment.as_str()
}

/// Flexbox equivalent of an alignment, for boxes that are not text
pub fn justify(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "flex-start",
        Alignment::Center => "center",
        Alignment::Right => "flex-end",
    }
}

pub fn alignment_style(alignment: Alignment) -> String {
    format!("text-align: {};", text_align(alignment))
}

/// Wrapper that positions a shape horizontally
pub fn shape_container_style(alignment: Alignment) -> String {
    format!("display: flex; justify-content: {};", justify(alignment))
}

pub fn spacer_style(height: i32) -> String {
    format!("height: {height}px;")
}

/// Box styling for a shape.
///
/// Squares and circles are sized colored boxes. A triangle is a zero-size
/// box whose bottom border is colored and whose side borders are transparent,
/// `size` tall and `size` wide at the base.
pub fn shape_style(kind: ShapeKind, style: &ShapeStyle) -> String {
    let size = style.shape_size;
    let color = &style.shape_color;
    match kind {
        ShapeKind::Square => {
            let radius = style.border_radius.as_deref().unwrap_or("0");
            format!(
                "width: {size}px; height: {size}px; background-color: {color}; border-radius: {radius};"
            )
        }
        ShapeKind::Circle => format!(
            "width: {size}px; height: {size}px; background-color: {color}; border-radius: 50%;"
        ),
        ShapeKind::Triangle => {
            let half = size / 2;
            format!(
                "width: 0; height: 0; border-left: {half}px solid transparent; border-right: {half}px solid transparent; border-bottom: {size}px solid {color};"
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Block, BlockType};

    fn default_style(block_type: BlockType) -> (ShapeKind, ShapeStyle) {
        let block = Block::new(block_type, 0);
        let (kind, style) = block.kind.shape().unwrap();
        (kind, style.clone())
    }

    #[test]
    fn test_square_uses_border_radius() {
        let (kind, style) = default_style(BlockType::ShapeSquare);
        assert_eq!(
            shape_style(kind, &style),
            "width: 100px; height: 100px; background-color: #3b82f6; border-radius: 4px;"
        );
    }

    #[test]
    fn test_circle_is_fully_rounded() {
        let (kind, style) = default_style(BlockType::ShapeCircle);
        assert!(shape_style(kind, &style).ends_with("border-radius: 50%;"));
    }

    #[test]
    fn test_triangle_is_border_drawn() {
        let (kind, mut style) = default_style(BlockType::ShapeTriangle);
        style.shape_size = 60;
        assert_eq!(
            shape_style(kind, &style),
            "width: 0; height: 0; border-left: 30px solid transparent; border-right: 30px solid transparent; border-bottom: 60px solid #3b82f6;"
        );
    }

    #[test]
    fn test_override_changes_geometry() {
        let mut block = Block::new(BlockType::ShapeSquare, 0);
        if let crate::models::BlockKind::ShapeSquare(style) = &mut block.kind {
            style.shape_type = Some(ShapeKind::Circle);
        }
        let (kind, style) = block.kind.shape().unwrap();
        assert_eq!(kind, ShapeKind::Circle);
        assert!(shape_style(kind, style).contains("50%"));
    }

    #[test]
    fn test_alignment_helpers() {
        assert_eq!(alignment_style(Alignment::Right), "text-align: right;");
        assert_eq!(
            shape_container_style(Alignment::Center),
            "display: flex; justify-content: center;"
        );
        assert_eq!(spacer_style(20), "height: 20px;");
    }
}
