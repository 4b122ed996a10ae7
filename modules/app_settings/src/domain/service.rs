//! Typed settings facade
//!
//! Strict calls (`read`, `write`, `clear`) return [`SettingsError`]. Lenient
//! calls (`try_read`, `safe_read`, `try_write`) never fail: they log the error
//! and substitute a default, a fallback or `false`.

use super::selector::StoreSelector;
use crate::contract::{DataStore, FromSettingText, SettingsError, ToSettingText};
use std::path::Path;
use std::sync::Arc;
use tokio::runtime::{Handle, RuntimeFlavor};

/// Typed read/write access to settings in local and roaming data stores
///
/// Calls without an explicit store use the facade's default store
/// ([`DataStore::Local`] unless changed). Cloning is cheap and clones share
/// the same containers.
#[derive(Debug, Clone)]
pub struct Settings {
    selector: Arc<StoreSelector>,
    default_store: DataStore,
}

impl Settings {
    /// Create a facade over the given containers, defaulting to the local store
    pub fn new(selector: StoreSelector) -> Self {
        Self {
            selector: Arc::new(selector),
            default_store: DataStore::default(),
        }
    }

    /// Facade over process-lifetime containers
    pub fn in_memory() -> Self {
        Self::new(StoreSelector::in_memory())
    }

    /// Facade over file-backed containers under `root`
    pub fn open(root: impl AsRef<Path>) -> Result<Self, SettingsError> {
        Ok(Self::new(StoreSelector::open(root)?))
    }

    pub fn default_store(&self) -> DataStore {
        self.default_store
    }

    /// Change the store used by subsequent calls on this facade
    pub fn set_default_store(&mut self, store: DataStore) {
        tracing::debug!(from = %self.default_store, to = %store, "Default data store changed");
        self.default_store = store;
    }

    /// A facade over the same containers with another default store
    pub fn with_default_store(&self, store: DataStore) -> Self {
        Self {
            selector: self.selector.clone(),
            default_store: store,
        }
    }

    pub fn selector(&self) -> &StoreSelector {
        &self.selector
    }

    // ===== Strict reads =====

    /// Read a setting from the default store
    pub fn read<T: FromSettingText>(&self, name: &str) -> Result<T, SettingsError> {
        self.read_from(name, self.default_store)
    }

    /// Read a setting from the given store
    ///
    /// Fails with `NotFound` if nothing is stored under `name` and with
    /// `Conversion` if the stored text is not a valid `T`.
    pub fn read_from<T: FromSettingText>(
        &self,
        name: &str,
        store: DataStore,
    ) -> Result<T, SettingsError> {
        let container = self.selector.resolve(store)?;
        let value = container
            .get(name)?
            .ok_or_else(|| SettingsError::NotFound {
                name: name.to_string(),
            })?;

        tracing::debug!(store = %store, name, "Read setting");
        T::from_setting_text(&value).ok_or_else(|| SettingsError::Conversion {
            name: name.to_string(),
            value,
            target: T::TYPE_NAME,
        })
    }

    // ===== Lenient reads =====

    /// Read from the default store; `(T::default(), false)` on any failure
    pub fn try_read<T: FromSettingText + Default>(&self, name: &str) -> (T, bool) {
        self.try_read_from(name, self.default_store)
    }

    /// Read from the given store; `(T::default(), false)` on any failure
    pub fn try_read_from<T: FromSettingText + Default>(
        &self,
        name: &str,
        store: DataStore,
    ) -> (T, bool) {
        match self.read_from(name, store) {
            Ok(value) => (value, true),
            Err(e) => {
                log_lenient_failure("try_read", name, store, &e);
                (T::default(), false)
            }
        }
    }

    /// Read from the default store, returning `fallback` on any failure
    pub fn safe_read<T: FromSettingText>(&self, name: &str, fallback: T) -> T {
        self.safe_read_from(name, fallback, self.default_store)
    }

    /// Read from the given store, returning `fallback` on any failure
    pub fn safe_read_from<T: FromSettingText>(&self, name: &str, fallback: T, store: DataStore) -> T {
        match self.read_from(name, store) {
            Ok(value) => value,
            Err(e) => {
                log_lenient_failure("safe_read", name, store, &e);
                fallback
            }
        }
    }

    // ===== Writes =====

    /// Write a setting to the default store
    pub fn write<T: ToSettingText + ?Sized>(&self, name: &str, value: &T) -> Result<(), SettingsError> {
        self.write_to(name, value, self.default_store)
    }

    /// Write a setting to the given store, replacing any previous value
    ///
    /// Fails with `Serialization` if the value has no text form.
    pub fn write_to<T: ToSettingText + ?Sized>(
        &self,
        name: &str,
        value: &T,
        store: DataStore,
    ) -> Result<(), SettingsError> {
        let container = self.selector.resolve(store)?;
        let text = value
            .to_setting_text()
            .map_err(|reason| SettingsError::Serialization {
                name: name.to_string(),
                reason,
            })?;

        container.set(name, text)?;
        tracing::debug!(store = %store, name, "Wrote setting");
        Ok(())
    }

    /// Write to the default store; `false` if the write failed
    pub fn try_write<T: ToSettingText + ?Sized>(&self, name: &str, value: &T) -> bool {
        self.try_write_to(name, value, self.default_store)
    }

    /// Write to the given store; `false` if the write failed
    pub fn try_write_to<T: ToSettingText + ?Sized>(&self, name: &str, value: &T, store: DataStore) -> bool {
        match self.write_to(name, value, store) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(store = %store, name, error = %e, "try_write failed");
                false
            }
        }
    }

    // ===== Clear =====

    /// Remove every setting in the given store
    ///
    /// May be polled by any executor; the file backend only offloads to
    /// Tokio's blocking pool when a Tokio runtime is present.
    pub async fn clear(&self, store: DataStore) -> Result<(), SettingsError> {
        let container = self.selector.resolve(store)?;
        container.clear_all().await?;
        tracing::info!(store = %store, "Cleared data store");
        Ok(())
    }

    /// Blocking variant of [`Settings::clear`]
    ///
    /// Outside a Tokio runtime the clear runs on a private current-thread
    /// runtime. Inside a multi-thread runtime the worker is handed off with
    /// `block_in_place`. A current-thread runtime cannot block on itself, so
    /// that case returns a `Storage` error; await `clear` there instead.
    pub fn clear_blocking(&self, store: DataStore) -> Result<(), SettingsError> {
        match Handle::try_current() {
            Ok(handle) => {
                if matches!(handle.runtime_flavor(), RuntimeFlavor::CurrentThread) {
                    return Err(SettingsError::storage(
                        "clear_blocking called on a current-thread runtime",
                    ));
                }
                tokio::task::block_in_place(|| handle.block_on(self.clear(store)))
            }
            Err(_) => tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(SettingsError::storage)?
                .block_on(self.clear(store)),
        }
    }
}

fn log_lenient_failure(operation: &str, name: &str, store: DataStore, error: &SettingsError) {
    if error.is_value_error() {
        tracing::debug!(store = %store, name, error = %error, "{} fell back to default", operation);
    } else {
        tracing::warn!(store = %store, name, error = %error, "{} fell back to default", operation);
    }
}
