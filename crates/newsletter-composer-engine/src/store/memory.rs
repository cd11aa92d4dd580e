use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{Store, StoreError};
use crate::models::{DocumentSettings, NewTemplate, OwnerId, Template, TemplateId};

#[derive(Debug, Default)]
struct Records {
    settings: HashMap<OwnerId, DocumentSettings>,
    templates: BTreeMap<TemplateId, Template>,
}

/// In-process store. Can be switched offline to exercise failure paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Records>,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// While offline every operation fails with [`StoreError::Unavailable`]
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn put_settings(&self, owner: &OwnerId, settings: DocumentSettings) {
        self.records().settings.insert(owner.clone(), settings);
    }

    /// All templates stored for `owner`, oldest first
    pub fn templates_for(&self, owner: &OwnerId) -> Vec<Template> {
        self.records()
            .templates
            .values()
            .filter(|t| &t.owner == owner)
            .cloned()
            .collect()
    }

    fn records(&self) -> std::sync::MutexGuard<'_, Records> {
        // Recover from poisoned mutex (another thread panicked while holding lock)
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("memory store is offline".to_string()))
        } else {
            Ok(())
        }
    }
}

impl Store for MemoryStore {
    fn fetch_settings(&self, owner: &OwnerId) -> Result<Option<DocumentSettings>, StoreError> {
        self.check_online()?;
        Ok(self.records().settings.get(owner).cloned())
    }

    fn fetch_latest_template(&self, owner: &OwnerId) -> Result<Option<Template>, StoreError> {
        self.check_online()?;
        Ok(self
            .records()
            .templates
            .values()
            .rev()
            .find(|t| &t.owner == owner)
            .cloned())
    }

    fn insert_template(&self, template: &NewTemplate) -> Result<TemplateId, StoreError> {
        self.check_online()?;
        let id = TemplateId::new();
        self.records()
            .templates
            .insert(id, Template::from_new(id, template.clone()));
        Ok(id)
    }

    fn update_template(&self, template: &Template) -> Result<(), StoreError> {
        self.check_online()?;
        let mut records = self.records();
        match records.templates.get_mut(&template.id) {
            Some(existing) => {
                *existing = template.clone();
                Ok(())
            }
            None => Err(StoreError::TemplateNotFound(template.id)),
        }
    }
}
