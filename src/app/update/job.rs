use super::super::state::{App, JobOutcome};
use super::Effect;
use crate::annotation::FieldChange;
use crate::backend::JobEvent;
use crate::feedback::{Origin, Severity, WorkMessage};
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub(in crate::app) const MISSING_TOOL_HINT: &str =
    "ebook-convert was not found; install Calibre to produce AZW3/MOBI/PDF output.";

impl App {
    pub(super) fn handle_pick_source(&mut self, effects: &mut Vec<Effect>) {
        if !self.job.begin_selecting() {
            warn!(phase = ?self.job.phase, "Ignoring book selection while busy");
            return;
        }
        effects.push(Effect::PickSource);
    }

    pub(super) fn handle_source_picked(&mut self, path: Option<PathBuf>, effects: &mut Vec<Effect>) {
        self.job.finish_selecting();
        let Some(path) = path else {
            debug!("Book selection cancelled");
            return;
        };
        info!(path = %path.display(), "Book selected");
        self.handle_field_changed(
            FieldChange::SourcePath(path.to_string_lossy().trim().to_string()),
            effects,
        );
    }

    pub(super) fn handle_start_job(&mut self, effects: &mut Vec<Effect>) {
        let Some(run_id) = self.job.begin_run() else {
            warn!(phase = ?self.job.phase, "Ignoring start request while busy");
            return;
        };
        self.set_work_message(WorkMessage::cleared(), Origin::None);
        effects.push(Effect::StartJob {
            run_id,
            config: self.store.snapshot(),
        });
    }

    pub(super) fn handle_job_event(&mut self, run_id: u64, event: JobEvent) {
        if self.job.active_run() != Some(run_id) {
            debug!(run_id, active = ?self.job.active_run(), "Dropping event from inactive run");
            return;
        }
        match event {
            JobEvent::Progress(percent) => {
                if self.job.record_progress(run_id, percent) {
                    debug!(run_id, progress = self.job.progress, "Job progress");
                }
            }
            JobEvent::Status(message) => self.set_work_message(message, Origin::Job),
            JobEvent::Finished(Ok(text)) => {
                info!(run_id, "Conversion finished: {text}");
                self.job.finish(run_id, JobOutcome::Succeeded(text.clone()));
                self.set_work_message(WorkMessage::new(Severity::Success, text), Origin::Job);
            }
            JobEvent::Finished(Err(error)) => {
                warn!(run_id, "Conversion failed: {error}");
                self.job.finish(run_id, JobOutcome::Failed(error.clone()));
                self.set_work_message(WorkMessage::new(Severity::Error, error), Origin::Job);
            }
        }
    }

    pub(super) fn handle_capability_checked(&mut self, available: bool) {
        self.tool_available = Some(available);
        if available {
            debug!("ebook-convert is available");
            return;
        }
        info!("ebook-convert is not installed");
        if self.work_message.is_empty() {
            self.set_work_message(
                WorkMessage::new(Severity::Info, MISSING_TOOL_HINT),
                Origin::Probe,
            );
        }
    }

    pub(super) fn handle_resource_folder_opened(&mut self, result: Result<(), String>) {
        if let Err(error) = result {
            warn!("Could not open resource folder: {error}");
            self.set_work_message(WorkMessage::new(Severity::Error, error), Origin::Folder);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::messages::Message;
    use crate::app::state::JobPhase;
    use crate::backend::fakes::inert_backends;
    use crate::config::AppConfig;

    fn build_test_app() -> App {
        let (app, _effects) = App::mount(AppConfig::default(), inert_backends(), None);
        app
    }

    fn started_run(effects: &[Effect]) -> Option<u64> {
        effects.iter().find_map(|effect| match effect {
            Effect::StartJob { run_id, .. } => Some(*run_id),
            _ => None,
        })
    }

    #[test]
    fn double_start_dispatches_one_job() {
        let mut app = build_test_app();
        let first = app.reduce(Message::StartJob);
        let second = app.reduce(Message::StartJob);

        assert!(started_run(&first).is_some());
        assert!(second.is_empty());
        assert!(app.job.is_working());
    }

    #[test]
    fn start_is_rejected_while_selecting() {
        let mut app = build_test_app();
        let effects = app.reduce(Message::PickSource);
        assert!(effects.iter().any(|effect| matches!(effect, Effect::PickSource)));
        assert_eq!(app.job.phase, JobPhase::Selecting);

        assert!(app.reduce(Message::StartJob).is_empty());
        assert!(app.reduce(Message::PickSource).is_empty());
    }

    #[test]
    fn picked_source_updates_config_and_preview() {
        let mut app = build_test_app();
        app.reduce(Message::PickSource);
        let effects = app.reduce(Message::SourcePicked(Some(PathBuf::from("/books/emma.epub"))));

        assert!(app.job.is_idle());
        assert_eq!(app.store.current().source_path, "/books/emma.epub");
        assert!(effects.iter().any(|effect| matches!(
            effect,
            Effect::RenderPreview { config, .. } if config.source_path == "/books/emma.epub"
        )));
    }

    #[test]
    fn cancelled_pick_changes_nothing_else() {
        let mut app = build_test_app();
        let before = app.store.snapshot();
        let issued = app.preview.latest_issued;
        app.reduce(Message::PickSource);
        let effects = app.reduce(Message::SourcePicked(None));

        assert!(effects.is_empty());
        assert!(app.job.is_idle());
        assert_eq!(app.store.snapshot(), before);
        assert_eq!(app.preview.latest_issued, issued);
    }

    #[test]
    fn progress_is_monotonic_and_resets_per_run() {
        let mut app = build_test_app();
        let run = started_run(&app.reduce(Message::StartJob)).expect("run");
        for percent in [10.0, 45.4, 30.0] {
            app.reduce(Message::Job {
                run_id: run,
                event: JobEvent::Progress(percent),
            });
        }
        assert_eq!(app.job.progress, 45);

        app.reduce(Message::Job {
            run_id: run,
            event: JobEvent::Finished(Ok("done".to_string())),
        });
        let next = started_run(&app.reduce(Message::StartJob)).expect("second run");
        assert_eq!(app.job.progress, 0);

        app.reduce(Message::Job {
            run_id: run,
            event: JobEvent::Progress(99.0),
        });
        assert_eq!(app.job.progress, 0);
        assert_eq!(app.job.active_run(), Some(next));
    }

    #[test]
    fn successful_run_reports_and_returns_to_idle() {
        let mut app = build_test_app();
        let run = started_run(&app.reduce(Message::StartJob)).expect("run");
        assert!(app.job.is_working());

        app.reduce(Message::Job {
            run_id: run,
            event: JobEvent::Status(WorkMessage::new(Severity::Info, "Annotating words")),
        });
        assert_eq!(app.work_message.text, "Annotating words");

        app.reduce(Message::Job {
            run_id: run,
            event: JobEvent::Progress(45.0),
        });
        app.reduce(Message::Job {
            run_id: run,
            event: JobEvent::Finished(Ok("done".to_string())),
        });

        assert!(!app.job.is_working());
        assert_eq!(app.job.progress, 45);
        assert_eq!(app.work_message.severity, Severity::Success);
        assert_eq!(app.work_message.text, "done");
        assert_eq!(
            app.job.last_outcome,
            Some(JobOutcome::Succeeded("done".to_string()))
        );
    }

    #[test]
    fn failed_run_shows_error_verbatim() {
        let mut app = build_test_app();
        let run = started_run(&app.reduce(Message::StartJob)).expect("run");
        app.reduce(Message::Job {
            run_id: run,
            event: JobEvent::Finished(Err(crate::backend::EMPTY_SOURCE_ERROR.to_string())),
        });

        assert!(app.job.is_idle());
        assert_eq!(app.work_message.severity, Severity::Error);
        assert_eq!(app.work_message.text, crate::backend::EMPTY_SOURCE_ERROR);
        assert!(started_run(&app.reduce(Message::StartJob)).is_some());
    }

    #[test]
    fn missing_tool_is_advisory_only() {
        let mut app = build_test_app();
        app.reduce(Message::CapabilityChecked(false));
        assert_eq!(app.tool_available, Some(false));
        assert_eq!(app.work_message.severity, Severity::Info);
        assert!(started_run(&app.reduce(Message::StartJob)).is_some());
    }
}
