//! Persisted user settings and the asynchronous bridge used to reach them.

mod bridge;
mod store;

pub use bridge::{SettingsBridge, SettingsError};
pub use store::{FileSettingsStore, SettingsStore};
#[cfg(test)]
pub use store::MemorySettingsStore;

use crate::config::ThemeMode;
use serde::{Deserialize, Serialize};

/// Small record round-tripped through the settings store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: ThemeMode,
}

impl Settings {
    pub fn to_display_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|err| format!("<unprintable settings: {err}>"))
    }
}
