//! External collaborators the working screen talks to.
//!
//! Every call returns a boxed future so the UI runtime can suspend on it
//! without knowing which implementation sits behind the trait.

mod folder;
mod picker;
mod probe;
mod process;

pub use folder::open_in_file_manager;
pub use picker::DialogFilePicker;
pub use probe::EbookConvertProbe;
pub use process::{EMPTY_SOURCE_ERROR, ProcessBackend};

use crate::annotation::AnnotationConfig;
use crate::config::AppConfig;
use crate::feedback::WorkMessage;
use crate::settings::{FileSettingsStore, SettingsBridge};
use anyhow::Result;
use iced::futures::channel::mpsc;
use iced::futures::future::BoxFuture;
use std::path::PathBuf;
use std::sync::Arc;

/// Out-of-band notification emitted while a conversion job runs.
#[derive(Debug, Clone, PartialEq)]
pub enum JobEvent {
    Progress(f32),
    Status(WorkMessage),
    Finished(Result<String, String>),
}

pub type JobEventSender = mpsc::Sender<JobEvent>;

pub trait Renderer: Send + Sync {
    fn render_preview(
        &self,
        config: AnnotationConfig,
        sample: String,
    ) -> BoxFuture<'static, Result<String, String>>;
}

pub trait JobRunner: Send + Sync {
    /// Runs one job to completion. Progress and status go out through
    /// `events`; the terminal outcome is the return value.
    fn run_job(
        &self,
        config: AnnotationConfig,
        events: JobEventSender,
    ) -> BoxFuture<'static, Result<String, String>>;
}

pub trait CapabilityProbe: Send + Sync {
    fn tool_available(&self) -> BoxFuture<'static, bool>;
}

pub trait FilePicker: Send + Sync {
    /// `None` when the user cancels.
    fn pick_file(&self) -> BoxFuture<'static, Option<PathBuf>>;
}

/// Handles to every collaborator, owned by one screen instance.
#[derive(Clone)]
pub struct Backends {
    pub renderer: Arc<dyn Renderer>,
    pub jobs: Arc<dyn JobRunner>,
    pub probe: Arc<dyn CapabilityProbe>,
    pub picker: Arc<dyn FilePicker>,
    pub settings: SettingsBridge,
    pub resource_dir: PathBuf,
}

impl Backends {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let process = Arc::new(ProcessBackend::new(
            config.backend_command.clone(),
            config.backend_args.clone(),
        ));
        let settings = SettingsBridge::spawn(
            FileSettingsStore::new(config.settings_path()),
            config.settings_timeout(),
        )?;
        Ok(Self {
            renderer: process.clone(),
            jobs: process,
            probe: Arc::new(EbookConvertProbe::new(config.ebook_convert_bin.clone())),
            picker: Arc::new(DialogFilePicker),
            settings,
            resource_dir: PathBuf::from(&config.resource_dir),
        })
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use super::*;
    use crate::settings::MemorySettingsStore;
    use iced::futures::FutureExt;
    use iced::futures::future::ready;
    use std::time::Duration;

    /// Collaborator that answers immediately and never does real work.
    pub(crate) struct Inert;

    impl Renderer for Inert {
        fn render_preview(
            &self,
            _config: AnnotationConfig,
            sample: String,
        ) -> BoxFuture<'static, Result<String, String>> {
            ready(Ok(sample)).boxed()
        }
    }

    impl JobRunner for Inert {
        fn run_job(
            &self,
            _config: AnnotationConfig,
            _events: JobEventSender,
        ) -> BoxFuture<'static, Result<String, String>> {
            ready(Ok("done".to_string())).boxed()
        }
    }

    impl CapabilityProbe for Inert {
        fn tool_available(&self) -> BoxFuture<'static, bool> {
            ready(true).boxed()
        }
    }

    impl FilePicker for Inert {
        fn pick_file(&self) -> BoxFuture<'static, Option<PathBuf>> {
            ready(None).boxed()
        }
    }

    pub(crate) fn inert_backends() -> Backends {
        let inert = Arc::new(Inert);
        Backends {
            renderer: inert.clone(),
            jobs: inert.clone(),
            probe: inert.clone(),
            picker: inert,
            settings: SettingsBridge::spawn(MemorySettingsStore::default(), Duration::from_secs(1))
                .expect("spawn in-memory settings bridge"),
            resource_dir: PathBuf::from("resources"),
        }
    }
}
