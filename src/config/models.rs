use crate::annotation::AnnotationConfig;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// High-level app configuration; built from the sectioned TOML file.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_level: LogLevel,
    pub window_width: f32,
    pub window_height: f32,
    pub backend_command: String,
    pub backend_args: Vec<String>,
    pub ebook_convert_bin: String,
    pub resource_dir: String,
    pub settings_path: String,
    pub settings_timeout_secs: f32,
    pub system_theme_poll_secs: f32,
    pub sample_text: String,
    pub annotation: AnnotationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_level: crate::config::defaults::default_log_level(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            backend_command: crate::config::defaults::default_backend_command(),
            backend_args: Vec::new(),
            ebook_convert_bin: crate::config::defaults::default_ebook_convert_bin(),
            resource_dir: crate::config::defaults::default_resource_dir(),
            settings_path: crate::config::defaults::default_settings_path(),
            settings_timeout_secs: crate::config::defaults::default_settings_timeout_secs(),
            system_theme_poll_secs: crate::config::defaults::default_system_theme_poll_secs(),
            sample_text: crate::config::defaults::default_sample_text(),
            annotation: AnnotationConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn settings_timeout(&self) -> Duration {
        secs_or(self.settings_timeout_secs, crate::config::defaults::default_settings_timeout_secs())
    }

    /// `None` when polling the desktop colour scheme is disabled.
    pub fn system_theme_poll_interval(&self) -> Option<Duration> {
        if self.system_theme_poll_secs.is_finite() && self.system_theme_poll_secs > 0.0 {
            Some(secs_or(
                self.system_theme_poll_secs,
                crate::config::defaults::default_system_theme_poll_secs(),
            ))
        } else {
            None
        }
    }

    pub fn settings_path(&self) -> PathBuf {
        PathBuf::from(&self.settings_path)
    }
}

/// Positive, representable durations only; anything else uses `fallback`.
fn secs_or(value: f32, fallback: f32) -> Duration {
    match Duration::try_from_secs_f32(value) {
        Ok(duration) if !duration.is_zero() => duration,
        _ => Duration::try_from_secs_f32(fallback).unwrap_or(Duration::from_secs(5)),
    }
}

/// Visual theme persisted in the settings record.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Light
    }
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Debug
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
