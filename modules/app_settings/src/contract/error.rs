//! Contract error types for app settings
//!
//! These errors are backend-agnostic and returned by every strict facade call.

use super::model::DataStore;

/// App settings errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// No value stored under the setting name
    #[error("No setting exists for name \"{name}\"")]
    NotFound {
        /// Setting name
        name: String,
    },
    /// Stored text cannot be parsed as the requested type
    #[error("Value \"{value}\" of setting \"{name}\" is not of type {target}")]
    Conversion {
        /// Setting name
        name: String,
        /// Stored text
        value: String,
        /// Requested type name
        target: &'static str,
    },
    /// Value has no textual representation
    #[error("Setting \"{name}\" cannot be serialized: {reason}")]
    Serialization {
        /// Setting name
        name: String,
        /// Why the value has no text form
        reason: String,
    },
    /// No container is registered for the data store
    #[error("Invalid data store: {store}")]
    InvalidScope {
        /// Name of the rejected store
        store: String,
    },
    /// Backend failure (I/O, corrupt document, runtime)
    #[error("Storage error: {message}")]
    Storage {
        /// Backend error message
        message: String,
    },
}

impl SettingsError {
    pub(crate) fn invalid_scope(store: DataStore) -> Self {
        Self::InvalidScope {
            store: store.to_string(),
        }
    }

    pub(crate) fn storage(err: impl std::fmt::Display) -> Self {
        Self::Storage {
            message: err.to_string(),
        }
    }

    /// Whether the error comes from a missing or unconvertible value,
    /// as opposed to a wiring or backend problem
    pub fn is_value_error(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Conversion { .. })
    }
}
