use super::defaults;
use super::models::{AppConfig, LogLevel};
use crate::annotation::AnnotationConfig;
use serde::Deserialize;

/// On-disk layout of `conf/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    backend: BackendConfig,
    #[serde(default)]
    settings: SettingsConfig,
    #[serde(default)]
    preview: PreviewConfig,
    #[serde(default)]
    annotation: AnnotationConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            log_level: tables.logging.log_level,
            window_width: tables.window.width,
            window_height: tables.window.height,
            backend_command: tables.backend.command,
            backend_args: tables.backend.args,
            ebook_convert_bin: tables.backend.ebook_convert_bin,
            resource_dir: tables.backend.resource_dir,
            settings_path: tables.settings.path,
            settings_timeout_secs: tables.settings.timeout_secs,
            system_theme_poll_secs: tables.settings.system_theme_poll_secs,
            sample_text: tables.preview.sample_text,
            annotation: tables.annotation.sanitized(),
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            logging: LoggingConfig {
                log_level: config.log_level,
            },
            window: WindowConfig {
                width: config.window_width,
                height: config.window_height,
            },
            backend: BackendConfig {
                command: config.backend_command.clone(),
                args: config.backend_args.clone(),
                ebook_convert_bin: config.ebook_convert_bin.clone(),
                resource_dir: config.resource_dir.clone(),
            },
            settings: SettingsConfig {
                path: config.settings_path.clone(),
                timeout_secs: config.settings_timeout_secs,
                system_theme_poll_secs: config.system_theme_poll_secs,
            },
            preview: PreviewConfig {
                sample_text: config.sample_text.clone(),
            },
            annotation: config.annotation.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct BackendConfig {
    #[serde(default = "defaults::default_backend_command")]
    command: String,
    #[serde(default)]
    args: Vec<String>,
    #[serde(default = "defaults::default_ebook_convert_bin")]
    ebook_convert_bin: String,
    #[serde(default = "defaults::default_resource_dir")]
    resource_dir: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        BackendConfig {
            command: defaults::default_backend_command(),
            args: Vec::new(),
            ebook_convert_bin: defaults::default_ebook_convert_bin(),
            resource_dir: defaults::default_resource_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct SettingsConfig {
    #[serde(default = "defaults::default_settings_path")]
    path: String,
    #[serde(default = "defaults::default_settings_timeout_secs")]
    timeout_secs: f32,
    #[serde(default = "defaults::default_system_theme_poll_secs")]
    system_theme_poll_secs: f32,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        SettingsConfig {
            path: defaults::default_settings_path(),
            timeout_secs: defaults::default_settings_timeout_secs(),
            system_theme_poll_secs: defaults::default_system_theme_poll_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct PreviewConfig {
    #[serde(default = "defaults::default_sample_text")]
    sample_text: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        PreviewConfig {
            sample_text: defaults::default_sample_text(),
        }
    }
}
