//! App Settings Module
//!
//! Typed access to named settings kept in local and roaming data stores.
//! Values are stored as text and converted to the requested type on read.

// Public exports
pub mod contract;
pub use contract::{DataStore, FromSettingText, SettingsError, ToSettingText};

pub mod config;
pub use config::{Backend, Config};

pub mod domain;
pub use domain::{Settings, SettingsContainer, StoreSelector};

pub mod module;
pub use module::SettingsModule;

pub mod infra;
pub use infra::storage::{FileContainer, MemoryContainer};
