//! Container trait for raw setting access
//!
//! A container holds the text values of one data store.
//! Implementations are in infra/storage.

use crate::contract::SettingsError;
use async_trait::async_trait;

/// Untyped key-value container backing a single data store
///
/// Missing keys are expected: `get` returns `Ok(None)` for them.
#[async_trait]
pub trait SettingsContainer: Send + Sync {
    /// Get the stored text for a setting
    fn get(&self, name: &str) -> Result<Option<String>, SettingsError>;

    /// Create or overwrite a setting
    fn set(&self, name: &str, value: String) -> Result<(), SettingsError>;

    /// Number of stored settings
    fn len(&self) -> Result<usize, SettingsError>;

    /// Whether the container holds no settings
    fn is_empty(&self) -> Result<bool, SettingsError> {
        Ok(self.len()? == 0)
    }

    /// Remove every setting in the container
    async fn clear_all(&self) -> Result<(), SettingsError>;
}
