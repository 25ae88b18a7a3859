use super::super::super::messages::Message;
use super::super::super::state::{App, JOB_EVENT_BUFFER};
use super::super::Effect;
use crate::backend::{JobEvent, open_in_file_manager};
use iced::Task;
use iced::futures::SinkExt;
use tracing::{debug, info};

impl App {
    pub(in crate::app) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::RenderPreview { request_id, config } => {
                let renderer = self.backends.renderer.clone();
                let sample = self.config.sample_text.clone();
                debug!(request_id, "Dispatching preview render");
                Task::perform(renderer.render_preview(config, sample), move |result| {
                    Message::PreviewRendered { request_id, result }
                })
            }
            Effect::PickSource => {
                let picker = self.backends.picker.clone();
                Task::perform(picker.pick_file(), Message::SourcePicked)
            }
            Effect::StartJob { run_id, config } => {
                let jobs = self.backends.jobs.clone();
                info!(run_id, book = %config.source_path, "Dispatching conversion job");
                let events = iced::stream::channel(JOB_EVENT_BUFFER, move |mut output| async move {
                    let outcome = jobs.run_job(config, output.clone()).await;
                    let _ = output.send(JobEvent::Finished(outcome)).await;
                });
                Task::run(events, move |event| Message::Job { run_id, event })
            }
            Effect::ProbeCapability => {
                let probe = self.backends.probe.clone();
                Task::perform(probe.tool_available(), Message::CapabilityChecked)
            }
            Effect::LoadSettings { request_id } => {
                let bridge = self.backends.settings.clone();
                Task::perform(async move { bridge.load().await }, move |result| {
                    Message::SettingsLoaded { request_id, result }
                })
            }
            Effect::SaveSettings(settings) => {
                let bridge = self.backends.settings.clone();
                let theme = settings.theme;
                Task::perform(async move { bridge.save(settings).await }, move |result| {
                    Message::SettingsSaved { theme, result }
                })
            }
            Effect::SampleSystemTheme => {
                Task::perform(crate::system_theme::detect(), Message::SystemThemeSampled)
            }
            Effect::OpenResourceFolder => {
                let dir = self.backends.resource_dir.clone();
                info!(path = %dir.display(), "Opening resource folder");
                Task::perform(
                    async move {
                        open_in_file_manager(&dir)
                            .await
                            .map_err(|err| format!("{err:#}"))
                    },
                    Message::ResourceFolderOpened,
                )
            }
            Effect::QuitSafely => {
                info!("Interrupt received; closing the working screen");
                iced::exit()
            }
        }
    }
}
