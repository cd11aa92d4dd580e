pub mod editing;
pub mod models;
pub mod notify;
pub mod render;
pub mod store;

// Re-export key types for easier usage
pub use editing::{
    Applied, BlockPatch, BlockRow, Cmd, Composer, Direction, EditError, PendingSave, Phase,
    Position, SettingsPatch, Snapshot, ValidationError,
};
pub use models::*;
pub use notify::{LogNotifier, Notification, Notifier, RecordingNotifier};
pub use store::{JsonStore, MemoryStore, Store, StoreError};
