use crate::editing::commands::Position;
use crate::editing::composer::{Composer, Phase};
use crate::models::{Block, BlockId, Capabilities, DocumentSettings};

/// Immutable view of a composer session for rendering.
///
/// Frontends draw from snapshots and send [`Cmd`](crate::editing::Cmd)s back;
/// they never hold a mutable reference to the document. `version` changes on
/// every document mutation, so a UI can skip redraws when it has not moved.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub version: u64,
    pub phase: Phase,
    /// One row per block, in display order
    pub rows: Vec<BlockRow>,
    pub settings: DocumentSettings,
    pub selected: Option<BlockId>,
    /// Insertion point while the block selector is open
    pub selector: Option<Position>,
    pub saving: bool,
    pub unsaved_changes: bool,
}

/// A block plus everything its renderer needs to draw controls
#[derive(Debug, Clone, PartialEq)]
pub struct BlockRow {
    pub block: Block,
    pub index: usize,
    pub is_selected: bool,
    /// False for the first row
    pub can_move_up: bool,
    /// False for the last row
    pub can_move_down: bool,
}

impl Snapshot {
    pub fn selected_row(&self) -> Option<&BlockRow> {
        self.rows.iter().find(|row| row.is_selected)
    }

    /// Descriptor for the generic settings panel, if the selected block uses it
    pub fn selected_capabilities(&self) -> Option<Capabilities> {
        let block_type = self.selected_row()?.block.block_type();
        Capabilities::for_block_type(block_type)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub(crate) fn create_snapshot(composer: &Composer) -> Snapshot {
    let blocks = composer.blocks();
    let last = blocks.len().saturating_sub(1);
    let selected = composer.selected();

    let rows = blocks
        .iter()
        .enumerate()
        .map(|(index, block)| BlockRow {
            block: block.clone(),
            index,
            is_selected: selected == Some(block.id),
            can_move_up: index > 0,
            can_move_down: index < last,
        })
        .collect();

    Snapshot {
        version: composer.version(),
        phase: composer.phase(),
        rows,
        settings: composer.settings().clone(),
        selected,
        selector: composer.selector(),
        saving: composer.is_saving(),
        unsaved_changes: composer.has_unsaved_changes(),
    }
}
