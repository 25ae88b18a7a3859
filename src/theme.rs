//! Mapping from the persisted theme choice and message severities to iced styling.

use crate::config::ThemeMode;
use crate::feedback::Severity;
use iced::{Color, Theme as IcedTheme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl From<ThemeMode> for Theme {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::Light => Theme::Light,
        }
    }
}

impl From<Theme> for IcedTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => IcedTheme::Light,
            Theme::Dark => IcedTheme::Dark,
        }
    }
}

const WARNING_AMBER: Color = Color::from_rgb(0.85, 0.55, 0.1);

/// Text colour for a work message; `None` keeps the theme's default.
pub fn severity_color(theme: &IcedTheme, severity: Severity) -> Option<Color> {
    let palette = theme.extended_palette();
    match severity {
        Severity::Neutral => None,
        Severity::Info => Some(palette.primary.base.color),
        Severity::Success => Some(palette.success.base.color),
        Severity::Warning => Some(WARNING_AMBER),
        Severity::Error => Some(palette.danger.base.color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_maps_to_iced_theme() {
        assert_eq!(IcedTheme::from(Theme::from(ThemeMode::Dark)), IcedTheme::Dark);
        assert_eq!(IcedTheme::from(Theme::from(ThemeMode::Light)), IcedTheme::Light);
    }

    #[test]
    fn neutral_uses_default_text_colour() {
        assert_eq!(severity_color(&IcedTheme::Light, Severity::Neutral), None);
        assert_eq!(
            severity_color(&IcedTheme::Dark, Severity::Warning),
            Some(WARNING_AMBER)
        );
    }
}
