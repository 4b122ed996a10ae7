//! Configuration for app settings module

use crate::contract::DataStore;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Storage backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Settings are lost when the process exits
    #[default]
    Memory,
    /// One JSON document per data store under `root_dir`
    File,
}

/// App settings configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Store used by calls that do not name one
    #[serde(default)]
    pub default_store: DataStore,

    /// Storage backend
    #[serde(default)]
    pub backend: Backend,

    /// Directory for the file backend
    #[serde(default)]
    pub root_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_store: DataStore::Local,
            backend: Backend::Memory,
            root_dir: None,
        }
    }
}

impl Config {
    /// Parse and validate a YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let cfg: Config = serde_yaml::from_str(yaml).context("invalid app settings config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.backend == Backend::File && self.root_dir.is_none() {
            bail!("root_dir is required for the file backend");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let cfg = Config::from_yaml("{}").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_file_backend() {
        let cfg = Config::from_yaml(
            "default_store: roaming\nbackend: file\nroot_dir: /var/lib/app/settings\n",
        )
        .unwrap();
        assert_eq!(cfg.default_store, DataStore::Roaming);
        assert_eq!(cfg.backend, Backend::File);
        assert_eq!(cfg.root_dir, Some(PathBuf::from("/var/lib/app/settings")));
    }

    #[test]
    fn test_file_backend_requires_root_dir() {
        let err = Config::from_yaml("backend: file\n").unwrap_err();
        assert!(err.to_string().contains("root_dir"));
    }

    #[test]
    fn test_unknown_store_rejected() {
        assert!(Config::from_yaml("default_store: temporary\n").is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Config::from_yaml("max_data_size: 10\n").is_err());
    }
}
