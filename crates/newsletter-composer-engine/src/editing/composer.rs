use crate::editing::commands::{Applied, Cmd, Direction, Position};
use crate::editing::patch::{BlockPatch, SettingsPatch};
use crate::editing::validation::{self, ValidationError};
use crate::models::{
    Block, BlockId, BlockKind, BlockType, CatalogEntry, DocumentSettings, HeadingLevel,
    NewTemplate, OwnerId, Template, TemplateId, TemplateRecord,
};
use crate::notify::Notifier;
use crate::store::{Store, StoreError};

pub const DEFAULT_TEMPLATE_NAME: &str = "My Newsletter Template";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditError {
    #[error("No block with id {0}")]
    BlockNotFound(BlockId),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
}

/// A save that has been started but whose store call has not completed
#[derive(Debug, Clone)]
pub struct PendingSave {
    pub record: TemplateRecord,
    version: u64,
}

impl PendingSave {
    /// Run the insert or update against `store`
    pub fn execute<S: Store + ?Sized>(&self, store: &S) -> Result<TemplateId, StoreError> {
        match &self.record {
            TemplateRecord::Insert(new) => store.insert_template(new),
            TemplateRecord::Update(template) => {
                store.update_template(template).map(|()| template.id)
            }
        }
    }
}

/// Owner of one editing session's document.
///
/// Holds the ordered block list and document settings, and is the only
/// place either is mutated. Display order is the order of `blocks`.
#[derive(Debug, Clone)]
pub struct Composer {
    owner: OwnerId,
    template_name: String,
    phase: Phase,
    blocks: Vec<Block>,
    settings: DocumentSettings,
    template_id: Option<TemplateId>,
    selected: Option<BlockId>,
    /// Insertion point while the block selector is open
    selector: Option<Position>,
    /// Presentational only: a second save may start while this is set
    saving: bool,
    version: u64,
    saved_version: u64,
}

impl Composer {
    pub fn new(owner: OwnerId) -> Self {
        Self {
            owner,
            template_name: DEFAULT_TEMPLATE_NAME.to_string(),
            phase: Phase::Loading,
            blocks: Vec::new(),
            settings: DocumentSettings::default(),
            template_id: None,
            selected: None,
            selector: None,
            saving: false,
            version: 0,
            saved_version: 0,
        }
    }

    pub fn with_template_name(mut self, name: impl Into<String>) -> Self {
        self.template_name = name.into();
        self
    }

    /// Populate the session from `store`.
    ///
    /// Settings come from the latest template when there is one, otherwise
    /// from the owner's settings record, otherwise the built-in defaults.
    /// On failure the session still becomes ready with defaults and an empty
    /// document; the error is logged and returned but nothing is shown to the
    /// user.
    pub fn load<S: Store + ?Sized>(&mut self, store: &S) -> Result<(), StoreError> {
        self.phase = Phase::Loading;
        self.selected = None;
        self.selector = None;

        let result = store.fetch_settings(&self.owner).and_then(|settings| {
            store
                .fetch_latest_template(&self.owner)
                .map(|template| (settings, template))
        });

        let outcome = match result {
            Ok((settings_record, Some(template))) => {
                log::info!(
                    "Loaded template {} with {} blocks for {}",
                    template.id,
                    template.blocks.len(),
                    self.owner
                );
                if settings_record.is_some() {
                    log::debug!("Template settings take precedence over the settings record");
                }
                self.template_id = Some(template.id);
                self.template_name = template.name;
                self.settings = template.settings;
                self.blocks = template.blocks;
                self.repair_loaded();
                Ok(())
            }
            Ok((settings_record, None)) => {
                log::info!("No template stored yet for {}", self.owner);
                self.template_id = None;
                self.settings = settings_record.unwrap_or_default();
                self.blocks.clear();
                self.repair_loaded();
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to load template for {}: {e}", self.owner);
                self.template_id = None;
                self.settings = DocumentSettings::default();
                self.blocks.clear();
                Err(e)
            }
        };

        self.version += 1;
        self.saved_version = self.version;
        self.phase = Phase::Ready;
        outcome
    }

    /// Stored records bypass edit validation; bring any refused value back
    /// to its default so the document holds only what the editor accepts
    fn repair_loaded(&mut self) {
        for e in validation::repair_settings(&mut self.settings) {
            log::warn!("Reset stored setting to its default: {e}");
        }
        for block in &mut self.blocks {
            for e in validation::repair_block(block) {
                log::warn!("Reset stored value of block {}: {e}", block.id.short());
            }
        }
    }

    /// Apply an edit command (the entry point frontends use)
    pub fn apply(&mut self, cmd: Cmd) -> Result<Applied, EditError> {
        let before = self.version;
        let mut inserted = None;

        match cmd {
            Cmd::AddBlock {
                block_type,
                heading_level,
                position,
            } => {
                inserted = Some(self.insert(block_type, heading_level, position));
            }
            Cmd::UpdateBlock { id, patch } => self.update_block(id, &patch)?,
            Cmd::MoveBlock { id, direction } => {
                self.move_block(id, direction)?;
            }
            Cmd::DeleteBlock { id } => {
                self.delete_block(id)?;
            }
            Cmd::Select { id } => self.select(id)?,
            Cmd::UpdateSettings { patch } => self.update_settings(&patch)?,
            Cmd::OpenSelector { position } => self.open_selector(position),
            Cmd::CloseSelector => self.close_selector(),
        }

        Ok(Applied {
            version: self.version,
            changed: self.version != before,
            inserted,
        })
    }

    /// Create a block of `block_type` at `position`, select it and close the selector
    pub fn add_block(&mut self, block_type: BlockType, position: Position) -> BlockId {
        self.insert(block_type, None, position)
    }

    /// Insert the block a selector entry describes
    pub fn add_entry(&mut self, entry: &CatalogEntry, position: Position) -> BlockId {
        self.insert(entry.block_type, entry.heading_level, position)
    }

    fn insert(
        &mut self,
        block_type: BlockType,
        preset_level: Option<HeadingLevel>,
        position: Position,
    ) -> BlockId {
        let mut block = Block::new(block_type, self.blocks.len());
        if let (Some(level), BlockKind::Heading { heading_level, .. }) =
            (preset_level, &mut block.kind)
        {
            *heading_level = level;
        }

        let id = block.id;
        let index = position.insertion_index(self.blocks.len());
        self.blocks.insert(index, block);
        self.selected = Some(id);
        self.selector = None;
        self.bump();
        log::debug!("Added {block_type} block {} at index {index}", id.short());
        id
    }

    /// Merge `patch` into the block with `id`; no other block is touched
    pub fn update_block(&mut self, id: BlockId, patch: &BlockPatch) -> Result<(), EditError> {
        let index = self.index_of(id)?;
        if patch.is_empty() {
            return Ok(());
        }
        let next = patch.apply_to(&self.blocks[index])?;
        if next != self.blocks[index] {
            self.blocks[index] = next;
            self.bump();
        }
        Ok(())
    }

    /// Swap the block with its neighbour. Returns false (and changes
    /// nothing) when the block is already at that edge.
    pub fn move_block(&mut self, id: BlockId, direction: Direction) -> Result<bool, EditError> {
        let index = self.index_of(id)?;
        let target = match direction {
            Direction::Up if index > 0 => index - 1,
            Direction::Down if index + 1 < self.blocks.len() => index + 1,
            _ => return Ok(false),
        };
        self.blocks.swap(index, target);
        self.bump();
        Ok(true)
    }

    /// Remove the block, clearing the selection if it was selected
    pub fn delete_block(&mut self, id: BlockId) -> Result<Block, EditError> {
        let index = self.index_of(id)?;
        let removed = self.blocks.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.bump();
        Ok(removed)
    }

    pub fn select(&mut self, id: Option<BlockId>) -> Result<(), EditError> {
        if let Some(id) = id {
            self.index_of(id)?;
        }
        self.selected = id;
        Ok(())
    }

    pub fn update_settings(&mut self, patch: &SettingsPatch) -> Result<(), EditError> {
        let next = patch.apply_to(&self.settings)?;
        if next != self.settings {
            self.settings = next;
            self.bump();
        }
        Ok(())
    }

    pub fn open_selector(&mut self, position: Position) {
        self.selector = Some(position);
    }

    pub fn close_selector(&mut self) {
        self.selector = None;
    }

    /// Capture the document for saving and raise the saving flag
    pub fn begin_save(&mut self) -> PendingSave {
        self.saving = true;
        let record = match self.template_id {
            Some(id) => TemplateRecord::Update(Template {
                id,
                owner: self.owner.clone(),
                name: self.template_name.clone(),
                settings: self.settings.clone(),
                blocks: self.blocks.clone(),
            }),
            None => TemplateRecord::Insert(NewTemplate {
                owner: self.owner.clone(),
                name: self.template_name.clone(),
                settings: self.settings.clone(),
                blocks: self.blocks.clone(),
            }),
        };
        PendingSave {
            record,
            version: self.version,
        }
    }

    /// Record the outcome of a save and notify the user.
    ///
    /// A failure leaves the in-memory document exactly as it was so the
    /// user can retry.
    pub fn finish_save<N: Notifier + ?Sized>(
        &mut self,
        pending: PendingSave,
        result: Result<TemplateId, StoreError>,
        notifier: &N,
    ) -> Result<TemplateId, StoreError> {
        self.saving = false;
        match result {
            Ok(id) => {
                self.template_id = Some(id);
                self.saved_version = self.saved_version.max(pending.version);
                log::info!("Saved template {id} ({} blocks)", pending.record.blocks().len());
                notifier.success("Newsletter template saved successfully");
                Ok(id)
            }
            Err(e) => {
                log::error!("Failed to save template: {e}");
                notifier.error(&format!("Failed to save template: {e}"));
                Err(e)
            }
        }
    }

    /// Insert or update the template in one step
    pub fn save<S: Store + ?Sized, N: Notifier + ?Sized>(
        &mut self,
        store: &S,
        notifier: &N,
    ) -> Result<TemplateId, StoreError> {
        let pending = self.begin_save();
        let result = pending.execute(store);
        self.finish_save(pending, result, notifier)
    }

    pub fn snapshot(&self) -> crate::editing::Snapshot {
        crate::editing::snapshot::create_snapshot(self)
    }

    pub fn owner(&self) -> &OwnerId {
        &self.owner
    }

    pub fn template_name(&self) -> &str {
        &self.template_name
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn settings(&self) -> &DocumentSettings {
        &self.settings
    }

    pub fn template_id(&self) -> Option<TemplateId> {
        self.template_id
    }

    pub fn selected(&self) -> Option<BlockId> {
        self.selected
    }

    pub fn selected_block(&self) -> Option<&Block> {
        self.selected.and_then(|id| self.block(id))
    }

    pub fn selector(&self) -> Option<Position> {
        self.selector
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.version != self.saved_version
    }

    fn index_of(&self, id: BlockId) -> Result<usize, EditError> {
        self.blocks
            .iter()
            .position(|b| b.id == id)
            .ok_or(EditError::BlockNotFound(id))
    }

    fn bump(&mut self) {
        self.version += 1;
    }
}
