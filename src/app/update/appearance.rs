use super::super::state::App;
use super::Effect;
use crate::config::ThemeMode;
use crate::settings::{Settings, SettingsError};
use tracing::{debug, info, warn};

impl App {
    pub(super) fn handle_toggle_theme(&mut self, effects: &mut Vec<Effect>) {
        let next = self.theme.toggle();
        info!(theme = %next, "Toggled theme");
        effects.push(Effect::SaveSettings(Settings { theme: next }));
    }

    pub(super) fn handle_reload_settings(&mut self, effects: &mut Vec<Effect>) {
        let request_id = self.theme.begin_load();
        debug!(request_id, "Reloading settings");
        effects.push(Effect::LoadSettings { request_id });
    }

    pub(super) fn handle_settings_loaded(
        &mut self,
        request_id: u64,
        result: Result<Settings, SettingsError>,
    ) {
        match result {
            Ok(settings) => {
                self.settings_text = settings.to_display_json();
                if self.theme.accept_loaded(request_id, settings.theme) {
                    info!(request_id, theme = %settings.theme, "Applied stored theme");
                } else {
                    debug!(
                        request_id,
                        theme = %settings.theme,
                        "Stored theme superseded by a newer choice"
                    );
                }
            }
            Err(err) => {
                warn!(request_id, "Settings load failed: {err}");
                self.settings_text = format!("Settings unavailable: {err}");
            }
        }
    }

    pub(super) fn handle_settings_saved(
        &mut self,
        theme: ThemeMode,
        result: Result<(), SettingsError>,
    ) {
        match result {
            Ok(()) => debug!(%theme, "Theme saved"),
            Err(err) => warn!(%theme, "Theme save failed; keeping it for this session: {err}"),
        }
    }

    pub(super) fn handle_system_theme_sampled(&mut self, sample: Option<ThemeMode>) {
        if let Some(theme) = self.theme.observe_system_sample(sample) {
            self.handle_system_theme_changed(theme);
        }
    }

    pub(super) fn handle_system_theme_changed(&mut self, theme: ThemeMode) {
        if self.theme.accept_system(theme) {
            info!(%theme, "Following desktop colour scheme");
        } else {
            debug!(%theme, "Desktop colour scheme ignored after explicit toggle");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::messages::Message;
    use crate::backend::fakes::inert_backends;
    use crate::config::AppConfig;

    fn mount_with_load() -> (App, u64) {
        let (app, effects) = App::mount(AppConfig::default(), inert_backends(), None);
        let load = effects
            .iter()
            .find_map(|effect| match effect {
                Effect::LoadSettings { request_id } => Some(*request_id),
                _ => None,
            })
            .expect("settings load on mount");
        (app, load)
    }

    #[test]
    fn toggle_is_optimistic_and_persisted() {
        let (mut app, _load) = mount_with_load();
        let effects = app.reduce(Message::ToggleTheme);

        assert_eq!(app.theme.current, ThemeMode::Dark);
        assert!(effects.iter().any(|effect| matches!(
            effect,
            Effect::SaveSettings(Settings {
                theme: ThemeMode::Dark
            })
        )));
    }

    #[test]
    fn late_mount_load_does_not_undo_toggle() {
        let (mut app, load) = mount_with_load();
        app.reduce(Message::ToggleTheme);
        app.reduce(Message::SettingsLoaded {
            request_id: load,
            result: Ok(Settings {
                theme: ThemeMode::Light,
            }),
        });
        assert_eq!(app.theme.current, ThemeMode::Dark);
    }

    #[test]
    fn mount_load_applies_without_toggle() {
        let (mut app, load) = mount_with_load();
        app.reduce(Message::SettingsLoaded {
            request_id: load,
            result: Ok(Settings {
                theme: ThemeMode::Dark,
            }),
        });
        assert_eq!(app.theme.current, ThemeMode::Dark);
        assert_eq!(app.settings_text, r#"{"theme":"dark"}"#);
    }

    #[test]
    fn load_failure_keeps_theme() {
        let (mut app, load) = mount_with_load();
        app.reduce(Message::SettingsLoaded {
            request_id: load,
            result: Err(SettingsError::Timeout(std::time::Duration::from_secs(5))),
        });
        assert_eq!(app.theme.current, ThemeMode::Light);
        assert!(app.settings_text.starts_with("Settings unavailable"));
    }

    #[test]
    fn reload_after_toggle_is_honoured() {
        let (mut app, _load) = mount_with_load();
        app.reduce(Message::ToggleTheme);
        let effects = app.reduce(Message::ReloadSettings);
        let reload = effects
            .iter()
            .find_map(|effect| match effect {
                Effect::LoadSettings { request_id } => Some(*request_id),
                _ => None,
            })
            .expect("reload request");
        app.reduce(Message::SettingsLoaded {
            request_id: reload,
            result: Ok(Settings {
                theme: ThemeMode::Light,
            }),
        });
        assert_eq!(app.theme.current, ThemeMode::Light);
    }

    #[test]
    fn desktop_signal_applies_until_user_toggles() {
        let (mut app, _load) = mount_with_load();
        app.reduce(Message::SystemThemeSampled(Some(ThemeMode::Light)));
        app.reduce(Message::SystemThemeSampled(Some(ThemeMode::Dark)));
        assert_eq!(app.theme.current, ThemeMode::Dark);

        app.reduce(Message::ToggleTheme);
        assert_eq!(app.theme.current, ThemeMode::Light);
        app.reduce(Message::SystemThemeChanged(ThemeMode::Dark));
        assert_eq!(app.theme.current, ThemeMode::Light);
    }

    #[test]
    fn first_desktop_sample_does_not_override_stored_theme() {
        let (mut app, load) = mount_with_load();
        app.reduce(Message::SettingsLoaded {
            request_id: load,
            result: Ok(Settings {
                theme: ThemeMode::Dark,
            }),
        });
        app.reduce(Message::SystemThemeSampled(Some(ThemeMode::Light)));
        assert_eq!(app.theme.current, ThemeMode::Dark);

        app.reduce(Message::SystemThemeSampled(Some(ThemeMode::Light)));
        assert_eq!(app.theme.current, ThemeMode::Dark);
    }

    #[test]
    fn poll_requests_a_sample() {
        let (mut app, _load) = mount_with_load();
        let effects = app.reduce(Message::PollSystemTheme);
        assert!(matches!(effects.as_slice(), [Effect::SampleSystemTheme]));
    }
}
