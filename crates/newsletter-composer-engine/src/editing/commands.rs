use crate::editing::patch::{BlockPatch, SettingsPatch};
use crate::models::{BlockId, BlockType, HeadingLevel};

/// Where a new block goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Top,
    Bottom,
    /// Immediately after the block at this index
    After(usize),
}

impl Position {
    /// Insertion index for a document of `len` blocks
    pub fn insertion_index(self, len: usize) -> usize {
        match self {
            Position::Top => 0,
            Position::Bottom => len,
            Position::After(index) => index.saturating_add(1).min(len),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Every edit a frontend can make to the session document
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    AddBlock {
        block_type: BlockType,
        heading_level: Option<HeadingLevel>,
        position: Position,
    },
    UpdateBlock {
        id: BlockId,
        patch: BlockPatch,
    },
    MoveBlock {
        id: BlockId,
        direction: Direction,
    },
    DeleteBlock {
        id: BlockId,
    },
    Select {
        id: Option<BlockId>,
    },
    UpdateSettings {
        patch: SettingsPatch,
    },
    OpenSelector {
        position: Position,
    },
    CloseSelector,
}

/// What applying a command did
#[derive(Debug, Clone, PartialEq)]
pub struct Applied {
    /// Document version after the command
    pub version: u64,
    /// False for no-ops such as moving the first block up
    pub changed: bool,
    /// Id of the block created by `AddBlock`
    pub inserted: Option<BlockId>,
}
