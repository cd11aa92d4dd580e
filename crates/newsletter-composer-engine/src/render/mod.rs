//! Presentation helpers that do not depend on a UI toolkit

pub mod html;
pub mod style;

pub use html::{render_block, render_template};
