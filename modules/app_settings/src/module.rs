//! Module declaration and lifecycle

use crate::config::{Backend, Config};
use crate::domain::{Settings, StoreSelector};
use anyhow::{Context, Result};
use parking_lot::RwLock;

/// App settings module
///
/// Built once from [`Config`]; hands out facades that share its containers.
#[derive(Default)]
pub struct SettingsModule {
    config: RwLock<Config>,
    settings: RwLock<Option<Settings>>,
}

impl SettingsModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the containers and the facade
    pub fn init(&self, cfg: Config) -> Result<()> {
        cfg.validate()?;

        let selector = match (cfg.backend, &cfg.root_dir) {
            (Backend::File, Some(root)) => StoreSelector::open(root)
                .with_context(|| format!("failed to open settings under {}", root.display()))?,
            (Backend::File, None) => anyhow::bail!("root_dir is required for the file backend"),
            (Backend::Memory, _) => StoreSelector::in_memory(),
        };

        let settings = Settings::new(selector).with_default_store(cfg.default_store);
        tracing::info!(
            backend = ?cfg.backend,
            default_store = %cfg.default_store,
            "App settings initialized"
        );

        *self.config.write() = cfg;
        *self.settings.write() = Some(settings);
        Ok(())
    }

    /// Initialize from a YAML configuration document
    pub fn init_from_yaml(&self, yaml: &str) -> Result<()> {
        self.init(Config::from_yaml(yaml)?)
    }

    /// A facade over the module's containers
    pub fn settings(&self) -> Result<Settings> {
        self.settings
            .read()
            .clone()
            .ok_or_else(|| anyhow::anyhow!("App settings module not initialized"))
    }

    pub fn config(&self) -> Config {
        self.config.read().clone()
    }
}
