use super::Settings;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// Blocking key-value persistence for `Settings`.
pub trait SettingsStore {
    fn read(&mut self) -> Result<Settings>;
    fn write(&mut self, settings: &Settings) -> Result<()>;
}

/// TOML file store; a missing file reads as defaults.
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsStore for FileSettingsStore {
    fn read(&mut self) -> Result<Settings> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No settings file yet; using defaults");
                return Ok(Settings::default());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("reading settings from {}", self.path.display()));
            }
        };
        toml::from_str(&data)
            .with_context(|| format!("parsing settings from {}", self.path.display()))
    }

    fn write(&mut self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating settings dir {}", parent.display()))?;
        }
        let contents = toml::to_string(settings).context("serializing settings")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("writing settings to {}", self.path.display()))
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct MemorySettingsStore {
    pub(crate) stored: Option<Settings>,
    pub(crate) read_delay: Option<std::time::Duration>,
}

#[cfg(test)]
impl SettingsStore for MemorySettingsStore {
    fn read(&mut self) -> Result<Settings> {
        if let Some(delay) = self.read_delay {
            std::thread::sleep(delay);
        }
        Ok(self.stored.unwrap_or_default())
    }

    fn write(&mut self, settings: &Settings) -> Result<()> {
        self.stored = Some(*settings);
        Ok(())
    }
}
