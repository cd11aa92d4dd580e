use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::{Block, DocumentSettings};

/// Identity under which templates are stored and looked up
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OwnerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Template identifier (UUIDv7, so ids sort by creation time)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(uuid::Uuid);

impl TemplateId {
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl Default for TemplateId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TemplateId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s).map(Self)
    }
}

/// A template that has not been stored yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTemplate {
    pub owner: OwnerId,
    pub name: String,
    pub settings: DocumentSettings,
    pub blocks: Vec<Block>,
}

/// The persisted aggregate: document settings plus the ordered block list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: TemplateId,
    pub owner: OwnerId,
    pub name: String,
    pub settings: DocumentSettings,
    pub blocks: Vec<Block>,
}

impl Template {
    pub fn from_new(id: TemplateId, new: NewTemplate) -> Self {
        Self {
            id,
            owner: new.owner,
            name: new.name,
            settings: new.settings,
            blocks: new.blocks,
        }
    }
}

/// What a save hands to the store: an insert the first time, an update after
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateRecord {
    Insert(NewTemplate),
    Update(Template),
}

impl TemplateRecord {
    pub fn blocks(&self) -> &[Block] {
        match self {
            TemplateRecord::Insert(new) => &new.blocks,
            TemplateRecord::Update(template) => &template.blocks,
        }
    }

    pub fn settings(&self) -> &DocumentSettings {
        match self {
            TemplateRecord::Insert(new) => &new.settings,
            TemplateRecord::Update(template) => &template.settings,
        }
    }
}
