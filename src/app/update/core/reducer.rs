use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::FieldChanged(change) => self.handle_field_changed(change, &mut effects),
            Message::PreviewRendered { request_id, result } => {
                self.handle_preview_rendered(request_id, result)
            }
            Message::PickSource => self.handle_pick_source(&mut effects),
            Message::SourcePicked(path) => self.handle_source_picked(path, &mut effects),
            Message::StartJob => self.handle_start_job(&mut effects),
            Message::Job { run_id, event } => self.handle_job_event(run_id, event),
            Message::CapabilityChecked(available) => self.handle_capability_checked(available),
            Message::ToggleTheme => self.handle_toggle_theme(&mut effects),
            Message::ReloadSettings => self.handle_reload_settings(&mut effects),
            Message::SettingsLoaded { request_id, result } => {
                self.handle_settings_loaded(request_id, result)
            }
            Message::SettingsSaved { theme, result } => self.handle_settings_saved(theme, result),
            Message::PollSystemTheme => effects.push(Effect::SampleSystemTheme),
            Message::SystemThemeSampled(sample) => {
                self.handle_system_theme_sampled(sample)
            }
            Message::SystemThemeChanged(theme) => self.handle_system_theme_changed(theme),
            Message::OpenResourceFolder => effects.push(Effect::OpenResourceFolder),
            Message::ResourceFolderOpened(result) => self.handle_resource_folder_opened(result),
            Message::PollSystemSignals => self.handle_poll_system_signals(&mut effects),
        }

        effects
    }

    fn handle_poll_system_signals(&mut self, effects: &mut Vec<Effect>) {
        if crate::take_sigint_requested() {
            effects.push(Effect::QuitSafely);
        }
    }
}
