//! Persistence collaborator for composed templates.
//!
//! The composer needs exactly four operations and treats each one as all or
//! nothing. Records are JSON-shaped; [`JsonStore`] keeps one file per record,
//! [`MemoryStore`] keeps them in a map for tests and demos.

mod json;
mod memory;

use std::path::PathBuf;
use std::sync::Arc;

use crate::models::{DocumentSettings, NewTemplate, OwnerId, Template, TemplateId};

pub use json::JsonStore;
pub use memory::MemoryStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Template not found: {0}")]
    TemplateNotFound(TemplateId),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed record at {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid store directory: {0}")]
    InvalidStoreDir(String),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub trait Store {
    /// The owner's standalone settings record, if one was ever written
    fn fetch_settings(&self, owner: &OwnerId) -> Result<Option<DocumentSettings>, StoreError>;

    /// The owner's most recently created template
    fn fetch_latest_template(&self, owner: &OwnerId) -> Result<Option<Template>, StoreError>;

    fn insert_template(&self, template: &NewTemplate) -> Result<TemplateId, StoreError>;

    /// Overwrite an existing template in place. Last writer wins.
    fn update_template(&self, template: &Template) -> Result<(), StoreError>;
}

impl<S: Store + ?Sized> Store for &S {
    fn fetch_settings(&self, owner: &OwnerId) -> Result<Option<DocumentSettings>, StoreError> {
        (**self).fetch_settings(owner)
    }

    fn fetch_latest_template(&self, owner: &OwnerId) -> Result<Option<Template>, StoreError> {
        (**self).fetch_latest_template(owner)
    }

    fn insert_template(&self, template: &NewTemplate) -> Result<TemplateId, StoreError> {
        (**self).insert_template(template)
    }

    fn update_template(&self, template: &Template) -> Result<(), StoreError> {
        (**self).update_template(template)
    }
}

impl<S: Store + ?Sized> Store for Arc<S> {
    fn fetch_settings(&self, owner: &OwnerId) -> Result<Option<DocumentSettings>, StoreError> {
        (**self).fetch_settings(owner)
    }

    fn fetch_latest_template(&self, owner: &OwnerId) -> Result<Option<Template>, StoreError> {
        (**self).fetch_latest_template(owner)
    }

    fn insert_template(&self, template: &NewTemplate) -> Result<TemplateId, StoreError> {
        (**self).insert_template(template)
    }

    fn update_template(&self, template: &Template) -> Result<(), StoreError> {
        (**self).update_template(template)
    }
}
