pub mod block;
pub mod capabilities;
pub mod catalog;
pub mod settings;
pub mod template;

pub use block::{
    Alignment, Block, BlockId, BlockKind, BlockType, HeadingLevel, ShapeKind, ShapeStyle,
    UnknownValue,
};
pub use capabilities::Capabilities;
pub use catalog::{CatalogEntry, Category};
pub use settings::DocumentSettings;
pub use template::{NewTemplate, OwnerId, Template, TemplateId, TemplateRecord};
