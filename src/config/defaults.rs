pub(crate) fn default_window_width() -> f32 {
    960.0
}

pub(crate) fn default_window_height() -> f32 {
    720.0
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}

pub(crate) fn default_backend_command() -> String {
    "wordwise-backend".to_string()
}

pub(crate) fn default_ebook_convert_bin() -> String {
    "ebook-convert".to_string()
}

pub(crate) fn default_resource_dir() -> String {
    "resources".to_string()
}

pub(crate) fn default_settings_path() -> String {
    ".cache/settings.toml".to_string()
}

pub(crate) fn default_settings_timeout_secs() -> f32 {
    5.0
}

pub(crate) fn default_system_theme_poll_secs() -> f32 {
    5.0
}

pub(crate) fn default_sample_text() -> String {
    "It was the best of times, it was the worst of times, it was the age of wisdom, \
     it was the age of foolishness, it was the epoch of belief, it was the epoch of \
     incredulity, it was the season of Light, it was the season of Darkness."
        .to_string()
}
