//! Domain layer - store resolution and the typed facade

pub mod repository;
pub mod selector;
pub mod service;

pub use repository::SettingsContainer;
pub use selector::{StoreSelector, StoreSelectorBuilder};
pub use service::Settings;
