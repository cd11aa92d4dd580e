use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{Store, StoreError};
use crate::models::{DocumentSettings, NewTemplate, OwnerId, Template, TemplateId};

const SETTINGS_DIR: &str = "settings";
const TEMPLATES_DIR: &str = "templates";

/// File-backed store: `settings/<owner>.json` and `templates/<id>.json` under a root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Open an existing store directory
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        validate_store_dir(&root)?;
        Ok(Self { root })
    }

    /// Open a store directory, creating it (and its record folders) if needed
    pub fn create(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(root.join(SETTINGS_DIR))?;
        fs::create_dir_all(root.join(TEMPLATES_DIR))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write the owner's standalone settings record
    pub fn put_settings(
        &self,
        owner: &OwnerId,
        settings: &DocumentSettings,
    ) -> Result<(), StoreError> {
        write_record(&self.settings_path(owner), settings)
    }

    fn settings_path(&self, owner: &OwnerId) -> PathBuf {
        self.root
            .join(SETTINGS_DIR)
            .join(format!("{}.json", owner_file_stem(owner)))
    }

    fn template_path(&self, id: TemplateId) -> PathBuf {
        self.root.join(TEMPLATES_DIR).join(format!("{id}.json"))
    }

    fn scan_templates(&self) -> Result<Vec<PathBuf>, StoreError> {
        let dir = self.root.join(TEMPLATES_DIR);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_file()
                && let Some(ext) = path.extension()
                && ext == "json"
            {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

impl Store for JsonStore {
    fn fetch_settings(&self, owner: &OwnerId) -> Result<Option<DocumentSettings>, StoreError> {
        read_record(&self.settings_path(owner))
    }

    fn fetch_latest_template(&self, owner: &OwnerId) -> Result<Option<Template>, StoreError> {
        let mut latest: Option<Template> = None;
        for path in self.scan_templates()? {
            // Files are not keyed by owner, so an unreadable one is skipped
            // rather than failing every owner's load
            let template = match read_record::<Template>(&path) {
                Ok(Some(template)) => template,
                Ok(None) => continue,
                Err(e @ StoreError::Malformed { .. }) => {
                    log::warn!("Skipping template file: {e}");
                    continue;
                }
                Err(e) => return Err(e),
            };
            if &template.owner != owner {
                continue;
            }
            if latest.as_ref().is_none_or(|current| template.id > current.id) {
                latest = Some(template);
            }
        }
        Ok(latest)
    }

    fn insert_template(&self, template: &NewTemplate) -> Result<TemplateId, StoreError> {
        let id = TemplateId::new();
        let record = Template::from_new(id, template.clone());
        write_record(&self.template_path(id), &record)?;
        log::debug!("Inserted template {id} for {}", record.owner);
        Ok(id)
    }

    fn update_template(&self, template: &Template) -> Result<(), StoreError> {
        let path = self.template_path(template.id);
        if !path.exists() {
            return Err(StoreError::TemplateNotFound(template.id));
        }
        write_record(&path, template)?;
        log::debug!("Updated template {}", template.id);
        Ok(())
    }
}

pub fn validate_store_dir(path: &Path) -> Result<(), StoreError> {
    if !path.exists() || !path.is_dir() {
        return Err(StoreError::InvalidStoreDir(format!(
            "{} does not exist or is not a directory",
            path.display()
        )));
    }
    Ok(())
}

fn read_record<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| StoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })
}

/// Write via a sibling temp file and rename, so a failed write never leaves
/// a half-written record behind
fn write_record<T: Serialize>(path: &Path, record: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(record)?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, content)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Owner ids are opaque strings; keep file names portable by hex-escaping
/// anything outside `[A-Za-z0-9_-]`
fn owner_file_stem(owner: &OwnerId) -> String {
    let mut stem = String::with_capacity(owner.as_str().len());
    for byte in owner.as_str().bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-' {
            stem.push(byte as char);
        } else {
            stem.push_str(&format!("%{byte:02X}"));
        }
    }
    stem
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Block, BlockType};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn new_template(owner: &str) -> NewTemplate {
        NewTemplate {
            owner: OwnerId::new(owner),
            name: "Newsletter".to_string(),
            settings: DocumentSettings::default(),
            blocks: vec![
                Block::new(BlockType::Heading, 0),
                Block::new(BlockType::ShapeTriangle, 1),
            ],
        }
    }

    #[test]
    fn test_open_rejects_missing_dir() {
        let result = JsonStore::open("/this/path/does/not/exist");
        assert!(matches!(result, Err(StoreError::InvalidStoreDir(_))));
    }

    #[test]
    fn test_insert_then_fetch_latest() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::create(dir.path()).unwrap();
        let new = new_template("ada@example.com");

        let id = store.insert_template(&new).unwrap();
        let loaded = store
            .fetch_latest_template(&new.owner)
            .unwrap()
            .expect("template should exist");

        assert_eq!(loaded, Template::from_new(id, new));
        assert!(dir.path().join("templates").join(format!("{id}.json")).exists());
    }

    #[test]
    fn test_latest_ignores_other_owners() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::create(dir.path()).unwrap();

        let ada_id = store.insert_template(&new_template("ada")).unwrap();
        store.insert_template(&new_template("grace")).unwrap();

        let latest = store
            .fetch_latest_template(&OwnerId::new("ada"))
            .unwrap()
            .unwrap();
        assert_eq!(latest.id, ada_id);
        assert!(
            store
                .fetch_latest_template(&OwnerId::new("linus"))
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_update_overwrites_in_place() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::create(dir.path()).unwrap();
        let id = store.insert_template(&new_template("ada")).unwrap();

        let mut template = store
            .fetch_latest_template(&OwnerId::new("ada"))
            .unwrap()
            .unwrap();
        template.blocks.clear();
        store.update_template(&template).unwrap();

        let reloaded = store
            .fetch_latest_template(&OwnerId::new("ada"))
            .unwrap()
            .unwrap();
        assert_eq!(reloaded.id, id);
        assert!(reloaded.blocks.is_empty());
    }

    #[test]
    fn test_update_missing_template_fails() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::create(dir.path()).unwrap();
        let template = Template::from_new(TemplateId::new(), new_template("ada"));

        assert!(matches!(
            store.update_template(&template),
            Err(StoreError::TemplateNotFound(_))
        ));
    }

    #[test]
    fn test_settings_record_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::create(dir.path()).unwrap();
        let owner = OwnerId::new("team/marketing");
        let settings = DocumentSettings {
            width: 720,
            ..DocumentSettings::default()
        };

        assert!(store.fetch_settings(&owner).unwrap().is_none());
        store.put_settings(&owner, &settings).unwrap();
        assert_eq!(store.fetch_settings(&owner).unwrap(), Some(settings));
        assert!(
            dir.path()
                .join("settings")
                .join("team%2Fmarketing.json")
                .exists()
        );
    }

    #[test]
    fn test_malformed_template_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::create(dir.path()).unwrap();
        let id = store.insert_template(&new_template("ada")).unwrap();
        fs::write(dir.path().join("templates").join("broken.json"), "{ nope").unwrap();

        let latest = store.fetch_latest_template(&OwnerId::new("ada")).unwrap();
        assert_eq!(latest.map(|t| t.id), Some(id));
        assert!(
            store
                .fetch_latest_template(&OwnerId::new("grace"))
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_malformed_settings_record_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::create(dir.path()).unwrap();
        fs::write(dir.path().join("settings").join("ada.json"), "{ nope").unwrap();

        let result = store.fetch_settings(&OwnerId::new("ada"));
        assert!(matches!(result, Err(StoreError::Malformed { .. })));
    }

    #[test]
    fn test_non_json_files_ignored() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::create(dir.path()).unwrap();
        fs::write(dir.path().join("templates").join("notes.txt"), "hello").unwrap();

        assert!(
            store
                .fetch_latest_template(&OwnerId::new("ada"))
                .unwrap()
                .is_none()
        );
    }
}
