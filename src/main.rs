//! Entry point for Wordwise Studio.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse the optional book path from the command line.
//! - Load user configuration from `conf/config.toml`.
//! - Start the collaborators and launch the working screen.

mod advisor;
mod annotation;
mod app;
mod backend;
mod config;
mod feedback;
mod settings;
mod system_theme;
mod theme;

use crate::app::run_app;
use crate::backend::Backends;
use crate::config::{load_config, serialize_config};
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

static SIGINT_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Consume a pending Ctrl+C request, if any.
pub(crate) fn take_sigint_requested() -> bool {
    SIGINT_REQUESTED.swap(false, Ordering::SeqCst)
}

fn main() {
    let reload_handle = init_tracing();
    install_sigint_handler();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let initial_source = parse_args()?;
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        level = %config.log_level,
        backend = %config.backend_command,
        settings = %config.settings_path,
        "Starting Wordwise Studio"
    );
    match serialize_config(&config) {
        Ok(effective) => debug!("Effective configuration:\n{effective}"),
        Err(err) => warn!("Could not render effective configuration: {err:#}"),
    }
    if let Some(path) = &initial_source {
        info!(path = %path.display(), "Opening with book");
    }
    let backends = Backends::from_config(&config)?;
    run_app(
        config,
        backends,
        initial_source.map(|path| path.to_string_lossy().into_owned()),
    )
    .context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> Result<Option<PathBuf>> {
    let Some(path) = env::args().nth(1) else {
        return Ok(None);
    };
    let path = PathBuf::from(path);
    if !path.exists() {
        return Err(anyhow!("File not found: {}", path.display()));
    }
    Ok(Some(path))
}

fn install_sigint_handler() {
    if let Err(err) = ctrlc::set_handler(|| {
        SIGINT_REQUESTED.store(true, Ordering::SeqCst);
    }) {
        warn!("Failed to install Ctrl+C signal handler: {err}");
    }
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
