use crate::error::{BinsplitError, Result};
use crate::split::DEFAULT_CHUNK_SIZE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration stored as TOML in `<base_dir>/binsplit.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BinsplitConfig {
    #[serde(default)]
    pub binsplit: BinsplitSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinsplitSettings {
    /// Maximum chunk size in bytes used by `split`.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: u64,
}

impl Default for BinsplitSettings {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
        }
    }
}

fn default_chunk_size() -> u64 {
    DEFAULT_CHUNK_SIZE
}

impl BinsplitConfig {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BinsplitError::Config(format!(
                "config file not found at {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| BinsplitError::TomlDe(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| BinsplitError::TomlSer(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.binsplit.chunk_size == 0 {
            return Err(BinsplitError::InvalidChunkSize(0));
        }
        Ok(())
    }

    /// Resolve the config file path: `<base_dir>/binsplit.toml`
    pub fn default_path(base_dir: &Path) -> PathBuf {
        base_dir.join("binsplit.toml")
    }
}
