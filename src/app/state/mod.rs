mod constants;
mod job;
mod preview;
mod theme;

use crate::annotation::ConfigStore;
use crate::backend::Backends;
use crate::config::{AppConfig, ThemeMode};
use crate::feedback::{Origin, WorkMessage};
use iced::Task;

use super::messages::Message;
use super::update::Effect;

pub(crate) use constants::*;
#[cfg(test)]
pub(in crate::app) use job::JobPhase;
pub(in crate::app) use job::{JobOutcome, JobState};
pub(in crate::app) use preview::PreviewState;
pub(in crate::app) use theme::ThemeState;

/// Working-screen state. One instance per mounted screen; nothing here is global.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) store: ConfigStore,
    pub(super) preview: PreviewState,
    pub(super) job: JobState,
    pub(super) theme: ThemeState,
    pub(super) work_message: WorkMessage,
    pub(super) work_origin: Origin,
    pub(super) tool_available: Option<bool>,
    pub(super) settings_text: String,
    pub(super) backends: Backends,
}

impl App {
    /// Build the screen and the effects that run once on mount: the
    /// capability probe, the settings load, and the first preview.
    pub(super) fn mount(
        config: AppConfig,
        backends: Backends,
        initial_source: Option<String>,
    ) -> (App, Vec<Effect>) {
        let mut initial = config.annotation.clone();
        if let Some(source) = initial_source {
            initial.source_path = source;
        }
        let mut app = App {
            store: ConfigStore::new(initial),
            preview: PreviewState::new(),
            job: JobState::new(),
            theme: ThemeState::new(ThemeMode::default()),
            work_message: WorkMessage::cleared(),
            work_origin: Origin::None,
            tool_available: None,
            settings_text: String::new(),
            backends,
            config,
        };

        let mut effects = vec![Effect::ProbeCapability];
        let load_id = app.theme.begin_load();
        effects.push(Effect::LoadSettings {
            request_id: load_id,
        });
        let snapshot = app.store.snapshot();
        app.refresh_advice(&snapshot);
        app.request_preview(snapshot, &mut effects);
        tracing::info!(
            source = %app.store.current().source_path,
            format = %app.store.current().format,
            "Working screen mounted"
        );
        (app, effects)
    }

    pub(super) fn bootstrap(
        config: AppConfig,
        backends: Backends,
        initial_source: Option<String>,
    ) -> (App, Task<Message>) {
        let (mut app, effects) = Self::mount(config, backends, initial_source);
        let task = Task::batch(effects.into_iter().map(|effect| app.run_effect(effect)));
        (app, task)
    }

    pub(super) fn set_work_message(&mut self, message: WorkMessage, origin: Origin) {
        self.work_message = message;
        self.work_origin = if self.work_message.is_empty() {
            Origin::None
        } else {
            origin
        };
    }

    pub fn theme(&self) -> iced::Theme {
        crate::theme::Theme::from(self.theme.current).into()
    }
}
