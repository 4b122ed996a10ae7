//! Common test utilities shared by the integration tests

#![allow(dead_code)]

use app_settings::{DataStore, Settings, SettingsContainer, SettingsError, StoreSelector};
use async_trait::async_trait;
use std::sync::{Arc, Once};
use tempfile::TempDir;

static TRACING: Once = Once::new();

/// Install a test subscriber once; honours `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn print_test_header(test_name: &str, purpose: &str) {
    println!("\n🧪 TEST: {}", test_name);
    println!("📋 PURPOSE: {}", purpose);
}

/// A facade under test and whatever keeps its backend alive
pub struct Backend {
    pub name: &'static str,
    pub settings: Settings,
    _dir: Option<TempDir>,
}

impl Backend {
    pub fn memory() -> Self {
        Self {
            name: "memory",
            settings: Settings::in_memory(),
            _dir: None,
        }
    }

    pub fn file() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::open(dir.path()).unwrap();
        Self {
            name: "file",
            settings,
            _dir: Some(dir),
        }
    }
}

/// Every shipped backend, fresh
pub fn backends() -> Vec<Backend> {
    init_tracing();
    vec![Backend::memory(), Backend::file()]
}

/// Container whose every operation fails with a storage error
pub struct FailingContainer;

#[async_trait]
impl SettingsContainer for FailingContainer {
    fn get(&self, _name: &str) -> Result<Option<String>, SettingsError> {
        Err(SettingsError::Storage {
            message: "backend offline".to_string(),
        })
    }

    fn set(&self, _name: &str, _value: String) -> Result<(), SettingsError> {
        Err(SettingsError::Storage {
            message: "backend offline".to_string(),
        })
    }

    fn len(&self) -> Result<usize, SettingsError> {
        Ok(0)
    }

    async fn clear_all(&self) -> Result<(), SettingsError> {
        Err(SettingsError::Storage {
            message: "backend offline".to_string(),
        })
    }
}

/// Local store works, roaming store is offline
pub fn settings_with_offline_roaming() -> Settings {
    init_tracing();
    let selector = StoreSelector::builder()
        .with_container(DataStore::Local, Arc::new(app_settings::MemoryContainer::new()))
        .with_container(DataStore::Roaming, Arc::new(FailingContainer))
        .build();
    Settings::new(selector)
}

/// Only the local store is registered
pub fn settings_local_only() -> Settings {
    init_tracing();
    let selector = StoreSelector::builder()
        .with_container(DataStore::Local, Arc::new(app_settings::MemoryContainer::new()))
        .build();
    Settings::new(selector)
}
