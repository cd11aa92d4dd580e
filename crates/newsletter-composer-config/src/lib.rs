use anyhow::{anyhow, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_OWNER: &str = "local";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding `settings/` and `templates/` records
    pub store_path: PathBuf,
    /// Identity templates are saved under
    #[serde(default = "default_owner")]
    pub owner: String,
    /// Name given to a template on its first save
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
}

fn default_owner() -> String {
    DEFAULT_OWNER.to_string()
}

impl Config {
    pub fn new(store_path: impl Into<PathBuf>) -> Self {
        Self {
            store_path: store_path.into(),
            owner: default_owner(),
            template_name: None,
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.store_path = Self::expand_path(&config.store_path).unwrap_or(config.store_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/newsletter-composer");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expand `~` and `$VARS` in a user-supplied path
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        shellexpand::full(&path_str)
            .ok()
            .map(|expanded| PathBuf::from(expanded.as_ref()))
    }
}

/// Where a frontend stores templates and whose templates it edits
#[derive(Debug, Clone, PartialEq)]
pub struct Launch {
    pub store_path: PathBuf,
    pub owner: String,
    pub template_name: Option<String>,
    /// Whether `store_path` came from the config file rather than an argument
    pub from_config: bool,
}

impl Launch {
    /// Store path from the single CLI argument, otherwise from the config file.
    /// Owner and template name always come from the config when there is one.
    pub fn resolve(args: &[String], config: Option<Config>) -> anyhow::Result<Self> {
        let (owner, template_name) = config
            .as_ref()
            .map(|c| (c.owner.clone(), c.template_name.clone()))
            .unwrap_or_else(|| (default_owner(), None));

        match args {
            [path] => {
                let store_path = PathBuf::from(path);
                let store_path = Config::expand_path(&store_path).unwrap_or(store_path);
                log::info!(
                    "Using store path from CLI argument: {}",
                    store_path.display()
                );
                Ok(Self {
                    store_path,
                    owner,
                    template_name,
                    from_config: false,
                })
            }
            [] => {
                let config = config
                    .ok_or_else(|| anyhow!("No store path provided and no config file found"))?;
                log::info!(
                    "Loaded store path from config: {}",
                    config.store_path.display()
                );
                Ok(Self {
                    store_path: config.store_path,
                    owner,
                    template_name,
                    from_config: true,
                })
            }
            _ => bail!("Expected at most one argument, got {}", args.len()),
        }
    }
}
