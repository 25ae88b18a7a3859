use crate::annotation::AnnotationConfig;
use crate::settings::Settings;

mod appearance;
mod core;
mod fields;
mod job;
mod preview;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug)]
pub(super) enum Effect {
    RenderPreview {
        request_id: u64,
        config: AnnotationConfig,
    },
    PickSource,
    StartJob {
        run_id: u64,
        config: AnnotationConfig,
    },
    ProbeCapability,
    LoadSettings {
        request_id: u64,
    },
    SaveSettings(Settings),
    SampleSystemTheme,
    OpenResourceFolder,
    QuitSafely,
}
