//! Data store to container resolution

use super::repository::SettingsContainer;
use crate::contract::{DataStore, SettingsError};
use crate::infra::storage::{FileContainer, MemoryContainer};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Maps each data store to the container that backs it
///
/// A data store without a registered container is rejected with
/// [`SettingsError::InvalidScope`].
#[derive(Clone, Default)]
pub struct StoreSelector {
    containers: BTreeMap<DataStore, Arc<dyn SettingsContainer>>,
}

impl StoreSelector {
    pub fn builder() -> StoreSelectorBuilder {
        StoreSelectorBuilder::default()
    }

    /// Process-lifetime containers for every data store
    pub fn in_memory() -> Self {
        DataStore::ALL
            .into_iter()
            .fold(Self::builder(), |builder, store| {
                builder.with_container(store, Arc::new(MemoryContainer::new()))
            })
            .build()
    }

    /// File-backed containers under `root`, one `<store>.json` document each
    pub fn open(root: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let root = root.as_ref();
        std::fs::create_dir_all(root).map_err(|e| {
            SettingsError::storage(format!("cannot create {}: {}", root.display(), e))
        })?;

        let mut builder = Self::builder();
        for store in DataStore::ALL {
            let path = root.join(format!("{}.json", store));
            builder = builder.with_container(store, FileContainer::open(path)?);
        }
        Ok(builder.build())
    }

    /// Resolve the container for a data store
    pub fn resolve(&self, store: DataStore) -> Result<Arc<dyn SettingsContainer>, SettingsError> {
        self.containers
            .get(&store)
            .cloned()
            .ok_or_else(|| SettingsError::invalid_scope(store))
    }

    /// Data stores with a registered container
    pub fn stores(&self) -> Vec<DataStore> {
        self.containers.keys().copied().collect()
    }
}

impl fmt::Debug for StoreSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreSelector")
            .field("stores", &self.stores())
            .finish()
    }
}

/// Builder for custom container wiring
#[derive(Default)]
pub struct StoreSelectorBuilder {
    containers: BTreeMap<DataStore, Arc<dyn SettingsContainer>>,
}

impl StoreSelectorBuilder {
    /// Register (or replace) the container for a data store
    pub fn with_container(mut self, store: DataStore, container: Arc<dyn SettingsContainer>) -> Self {
        self.containers.insert(store, container);
        self
    }

    pub fn build(self) -> StoreSelector {
        StoreSelector {
            containers: self.containers,
        }
    }
}
