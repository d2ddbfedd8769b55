//! Audit configuration, loaded from JSON.
use crate::declaration::{DeclarationCache, JsonDeclarationSource};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Type declaration directory {0} does not exist")]
    MissingDeclarationDir(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuditConfig {
    /// Directory holding one declaration file per package.
    pub declaration_dir: PathBuf,
    #[serde(default = "default_extension")]
    pub declaration_extension: String,
}

fn default_extension() -> String {
    "json".to_string()
}

impl AuditConfig {
    pub fn new(declaration_dir: impl Into<PathBuf>) -> Self {
        Self { declaration_dir: declaration_dir.into(), declaration_extension: default_extension() }
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Builds an empty declaration cache over the configured directory.
    pub fn declaration_cache(&self) -> Result<DeclarationCache<JsonDeclarationSource>, ConfigError> {
        if !self.declaration_dir.is_dir() {
            return Err(ConfigError::MissingDeclarationDir(self.declaration_dir.clone()));
        }
        let source =
            JsonDeclarationSource::with_extension(&self.declaration_dir, &self.declaration_extension);
        Ok(DeclarationCache::new(source))
    }
}
