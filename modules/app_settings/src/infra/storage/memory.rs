//! In-memory container, lives as long as the process

use crate::contract::SettingsError;
use crate::domain::repository::SettingsContainer;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct MemoryContainer {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryContainer {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsContainer for MemoryContainer {
    fn get(&self, name: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.values.read().get(name).cloned())
    }

    fn set(&self, name: &str, value: String) -> Result<(), SettingsError> {
        self.values.write().insert(name.to_string(), value);
        Ok(())
    }

    fn len(&self) -> Result<usize, SettingsError> {
        Ok(self.values.read().len())
    }

    async fn clear_all(&self) -> Result<(), SettingsError> {
        self.values.write().clear();
        Ok(())
    }
}
