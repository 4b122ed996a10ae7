//! Contract models for app settings

use super::error::SettingsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Storage scope a setting lives in
///
/// Each scope has its own independent set of settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum DataStore {
    /// Settings kept on this device only
    #[default]
    Local,
    /// Settings synchronized across the user's devices
    Roaming,
}

impl DataStore {
    /// All known data stores
    pub const ALL: [DataStore; 2] = [DataStore::Local, DataStore::Roaming];

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            DataStore::Local => "local",
            DataStore::Roaming => "roaming",
        }
    }
}

impl fmt::Display for DataStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataStore {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataStore::ALL
            .into_iter()
            .find(|store| store.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SettingsError::InvalidScope {
                store: s.to_string(),
            })
    }
}
