//! Desktop colour-scheme sampling.
//!
//! Each poll runs the platform query once; the reducer turns successive
//! samples into change signals.

use crate::config::ThemeMode;
use std::process::Stdio;
use tokio::process::Command;
use tracing::trace;

#[cfg(target_os = "macos")]
const QUERY: (&str, &[&str]) = ("defaults", &["read", "-g", "AppleInterfaceStyle"]);
#[cfg(not(target_os = "macos"))]
const QUERY: (&str, &[&str]) = (
    "gsettings",
    &["get", "org.gnome.desktop.interface", "color-scheme"],
);

/// `None` when the desktop gives no usable answer.
pub async fn detect() -> Option<ThemeMode> {
    let (program, args) = QUERY;
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .output()
        .await
        .ok()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    trace!(
        program,
        status = %output.status,
        value = %stdout.trim(),
        "Sampled desktop colour scheme"
    );
    if cfg!(target_os = "macos") {
        // The key only exists while dark mode is on.
        let dark = output.status.success() && parse_color_scheme(&stdout) == Some(ThemeMode::Dark);
        return Some(if dark { ThemeMode::Dark } else { ThemeMode::Light });
    }
    if !output.status.success() {
        return None;
    }
    parse_color_scheme(&stdout)
}

pub fn parse_color_scheme(raw: &str) -> Option<ThemeMode> {
    let value = raw.trim().trim_matches(|c| c == '\'' || c == '"').to_ascii_lowercase();
    match value.as_str() {
        "prefer-dark" | "dark" => Some(ThemeMode::Dark),
        "prefer-light" | "light" | "default" => Some(ThemeMode::Light),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_gsettings_output() {
        assert_eq!(parse_color_scheme("'prefer-dark'\n"), Some(ThemeMode::Dark));
        assert_eq!(parse_color_scheme("'default'\n"), Some(ThemeMode::Light));
        assert_eq!(parse_color_scheme("'prefer-light'"), Some(ThemeMode::Light));
    }

    #[test]
    fn parses_macos_style_value() {
        assert_eq!(parse_color_scheme("Dark\n"), Some(ThemeMode::Dark));
    }

    #[test]
    fn unknown_values_are_not_signals() {
        assert_eq!(parse_color_scheme(""), None);
        assert_eq!(parse_color_scheme("'high-contrast'"), None);
    }
}
