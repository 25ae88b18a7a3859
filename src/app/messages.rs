use crate::annotation::FieldChange;
use crate::backend::JobEvent;
use crate::config::ThemeMode;
use crate::settings::{Settings, SettingsError};
use std::path::PathBuf;

/// Messages emitted by the UI and by completed background work.
#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(FieldChange),
    PreviewRendered {
        request_id: u64,
        result: Result<String, String>,
    },
    PickSource,
    SourcePicked(Option<PathBuf>),
    StartJob,
    Job {
        run_id: u64,
        event: JobEvent,
    },
    CapabilityChecked(bool),
    ToggleTheme,
    ReloadSettings,
    SettingsLoaded {
        request_id: u64,
        result: Result<Settings, SettingsError>,
    },
    SettingsSaved {
        theme: ThemeMode,
        result: Result<(), SettingsError>,
    },
    PollSystemTheme,
    SystemThemeSampled(Option<ThemeMode>),
    SystemThemeChanged(ThemeMode),
    OpenResourceFolder,
    ResourceFolderOpened(Result<(), String>),
    PollSystemSignals,
}
