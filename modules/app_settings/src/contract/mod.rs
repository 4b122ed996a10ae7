//! Contract layer - public types shared by the facade and storage backends
//!
//! Transport-agnostic: no backend types appear here.

pub mod error;
pub mod model;
pub mod value;

pub use error::SettingsError;
pub use model::DataStore;
pub use value::{FromSettingText, ToSettingText};
