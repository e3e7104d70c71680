pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    AppSettings, HashingSettings, HttpSettings, Settings, SettingsError, StorageSettings,
};
