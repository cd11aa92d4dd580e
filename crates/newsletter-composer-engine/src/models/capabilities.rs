use crate::models::BlockType;

/// Which editing controls the generic settings panel shows for a block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub alignment: bool,
    pub text: bool,
    pub heading_level: bool,
    pub image: bool,
    pub button: bool,
    pub spacer: bool,
    pub shape: bool,
}

impl Capabilities {
    const ALIGN_ONLY: Capabilities = Capabilities {
        alignment: true,
        text: false,
        heading_level: false,
        image: false,
        button: false,
        spacer: false,
        shape: false,
    };

    /// Descriptor for the generic panel, keyed by block type.
    ///
    /// Returns `None` for blocks that have a dedicated settings component
    /// (full articles) or no editable fields beyond raw markup.
    pub fn for_block_type(block_type: BlockType) -> Option<Self> {
        let base = Self::ALIGN_ONLY;
        let caps = match block_type {
            BlockType::Heading => Capabilities {
                text: true,
                heading_level: true,
                ..base
            },
            BlockType::Paragraph => Capabilities { text: true, ..base },
            BlockType::Image => Capabilities { image: true, ..base },
            BlockType::Button => Capabilities {
                button: true,
                ..base
            },
            BlockType::Spacer => Capabilities {
                spacer: true,
                ..base
            },
            BlockType::ShapeSquare | BlockType::ShapeCircle | BlockType::ShapeTriangle => {
                Capabilities { shape: true, ..base }
            }
            BlockType::Divider => base,
            BlockType::FullArticle | BlockType::CustomHtml => return None,
        };
        Some(caps)
    }

    /// The descriptor a panel actually renders with: any `shape-*` block gets
    /// shape controls regardless of what it was handed.
    pub fn effective_for(self, block_type: BlockType) -> Self {
        Capabilities {
            shape: self.shape || block_type.is_shape(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(BlockType::Heading, Some((true, true, true, false, false, false, false)))]
    #[case(BlockType::Paragraph, Some((true, true, false, false, false, false, false)))]
    #[case(BlockType::Image, Some((true, false, false, true, false, false, false)))]
    #[case(BlockType::Button, Some((true, false, false, false, true, false, false)))]
    #[case(BlockType::Spacer, Some((true, false, false, false, false, true, false)))]
    #[case(BlockType::ShapeSquare, Some((true, false, false, false, false, false, true)))]
    #[case(BlockType::ShapeCircle, Some((true, false, false, false, false, false, true)))]
    #[case(BlockType::ShapeTriangle, Some((true, false, false, false, false, false, true)))]
    #[case(BlockType::Divider, Some((true, false, false, false, false, false, false)))]
    #[case(BlockType::FullArticle, None)]
    #[case(BlockType::CustomHtml, None)]
    fn test_capability_mapping(
        #[case] block_type: BlockType,
        #[case] expected: Option<(bool, bool, bool, bool, bool, bool, bool)>,
    ) {
        let actual = Capabilities::for_block_type(block_type).map(|c| {
            (
                c.alignment,
                c.text,
                c.heading_level,
                c.image,
                c.button,
                c.spacer,
                c.shape,
            )
        });
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_shape_prefix_forces_shape_controls() {
        let caps = Capabilities::default().effective_for(BlockType::ShapeTriangle);
        assert!(caps.shape);
        assert!(!caps.alignment);

        let caps = Capabilities::default().effective_for(BlockType::Paragraph);
        assert!(!caps.shape);
    }
}
