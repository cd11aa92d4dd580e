/*!
 * # Editing Core
 *
 * The [`Composer`] is the single owner of a session's document: the ordered
 * block list and the document settings. Nothing else mutates either.
 *
 * ## Architecture Overview
 *
 * ### 1. Array order is display order
 * - Blocks live in a `Vec<Block>`; a block's index is where it is drawn
 * - `Block::order` is written once at creation and never recomputed
 *
 * ### 2. Command-based editing
 * - Every edit can be expressed as a [`Cmd`] and applied with [`Composer::apply`]
 * - Edits apply synchronously, in the order they are issued
 * - Partial updates arrive as [`BlockPatch`]/[`SettingsPatch`] values and are
 *   validated at this boundary; a rejected patch leaves the document unchanged
 *
 * ### 3. Read API: immutable snapshots
 * - [`Composer::snapshot`] returns [`BlockRow`]s with selection and move flags
 * - Frontends render from snapshots and never hold the document mutably
 *
 * ### 4. Persistence
 * - `load` and `save` talk to a [`Store`](crate::store::Store)
 * - A save is split into [`Composer::begin_save`] and [`Composer::finish_save`]
 *   so a UI can run the store call from a task; `saving` is a flag, not a lock,
 *   and the last writer wins
 *
 * ## Module Structure
 *
 * - **`composer`**: `Composer` with load/save and every document mutation
 * - **`commands`**: `Cmd`, `Position`, `Direction` and the `Applied` result
 * - **`patch`**: `BlockPatch` and `SettingsPatch` partial updates
 * - **`validation`**: bounds and format checks shared by the patches
 * - **`snapshot`**: `Snapshot`/`BlockRow` view generation
 *
 * ## Usage Pattern
 *
 * ```rust
 * use newsletter_composer_engine::editing::*;
 * use newsletter_composer_engine::models::{BlockType, OwnerId};
 * use newsletter_composer_engine::notify::LogNotifier;
 * use newsletter_composer_engine::store::MemoryStore;
 *
 * let store = MemoryStore::new();
 * let mut composer = Composer::new(OwnerId::new("ada@example.com"));
 * composer.load(&store).unwrap();
 *
 * let heading = composer.add_block(BlockType::Heading, Position::Bottom);
 * composer
 *     .apply(Cmd::UpdateBlock {
 *         id: heading,
 *         patch: BlockPatch::content("Monthly update"),
 *     })
 *     .unwrap();
 *
 * let snapshot = composer.snapshot();
 * assert_eq!(snapshot.rows.len(), 1);
 *
 * composer.save(&store, &LogNotifier).unwrap();
 * ```
 */

pub mod commands;
pub mod composer;
pub mod patch;
pub mod snapshot;
pub mod validation;

pub use commands::{Applied, Cmd, Direction, Position};
pub use composer::{Composer, DEFAULT_TEMPLATE_NAME, EditError, PendingSave, Phase};
pub use patch::{BlockPatch, SettingsPatch};
pub use snapshot::{BlockRow, Snapshot};
pub use validation::ValidationError;
