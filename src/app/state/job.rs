/// Conversion job lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobPhase {
    Idle,
    Selecting,
    Running { run_id: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    Succeeded(String),
    Failed(String),
}

pub struct JobState {
    pub(in crate::app) phase: JobPhase,
    pub(in crate::app) progress: u8,
    pub(in crate::app) last_run_id: u64,
    pub(in crate::app) last_outcome: Option<JobOutcome>,
}

impl JobState {
    pub(in crate::app) fn new() -> Self {
        Self {
            phase: JobPhase::Idle,
            progress: 0,
            last_run_id: 0,
            last_outcome: None,
        }
    }

    pub(in crate::app) fn is_idle(&self) -> bool {
        self.phase == JobPhase::Idle
    }

    pub(in crate::app) fn is_working(&self) -> bool {
        matches!(self.phase, JobPhase::Running { .. })
    }

    pub(in crate::app) fn active_run(&self) -> Option<u64> {
        match self.phase {
            JobPhase::Running { run_id } => Some(run_id),
            _ => None,
        }
    }

    pub(in crate::app) fn begin_selecting(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.phase = JobPhase::Selecting;
        true
    }

    pub(in crate::app) fn finish_selecting(&mut self) {
        if self.phase == JobPhase::Selecting {
            self.phase = JobPhase::Idle;
        }
    }

    /// Enter `Running` with fresh progress; `None` while another action owns the screen.
    pub(in crate::app) fn begin_run(&mut self) -> Option<u64> {
        if !self.is_idle() {
            return None;
        }
        self.last_run_id = self.last_run_id.wrapping_add(1).max(1);
        self.phase = JobPhase::Running {
            run_id: self.last_run_id,
        };
        self.progress = 0;
        self.last_outcome = None;
        Some(self.last_run_id)
    }

    /// Monotonic within a run; values are rounded and clamped to 0..=100.
    pub(in crate::app) fn record_progress(&mut self, run_id: u64, percent: f32) -> bool {
        if self.active_run() != Some(run_id) || !percent.is_finite() {
            return false;
        }
        let value = percent.clamp(0.0, 100.0).round() as u8;
        if value <= self.progress {
            return false;
        }
        self.progress = value;
        true
    }

    pub(in crate::app) fn finish(&mut self, run_id: u64, outcome: JobOutcome) -> bool {
        if self.active_run() != Some(run_id) {
            return false;
        }
        self.phase = JobPhase::Idle;
        self.last_outcome = Some(outcome);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_monotonic_and_clamped() {
        let mut job = JobState::new();
        let run = job.begin_run().expect("run starts");
        assert!(job.record_progress(run, 45.0));
        assert!(!job.record_progress(run, 30.0));
        assert_eq!(job.progress, 45);
        assert!(job.record_progress(run, 180.0));
        assert_eq!(job.progress, 100);
        assert!(!job.record_progress(run, f32::NAN));
    }

    #[test]
    fn new_run_resets_progress() {
        let mut job = JobState::new();
        let first = job.begin_run().expect("first run");
        job.record_progress(first, 90.0);
        job.finish(first, JobOutcome::Succeeded("ok".to_string()));

        let second = job.begin_run().expect("second run");
        assert_ne!(first, second);
        assert_eq!(job.progress, 0);
        assert!(job.last_outcome.is_none());
    }

    #[test]
    fn stale_run_events_are_ignored() {
        let mut job = JobState::new();
        let first = job.begin_run().expect("first run");
        job.finish(first, JobOutcome::Failed("boom".to_string()));
        let second = job.begin_run().expect("second run");

        assert!(!job.record_progress(first, 70.0));
        assert!(!job.finish(first, JobOutcome::Succeeded("late".to_string())));
        assert_eq!(job.active_run(), Some(second));
    }

    #[test]
    fn selecting_blocks_run_and_vice_versa() {
        let mut job = JobState::new();
        assert!(job.begin_selecting());
        assert!(job.begin_run().is_none());
        job.finish_selecting();
        let run = job.begin_run().expect("run after selection");
        assert!(!job.begin_selecting());
        assert_eq!(job.phase, JobPhase::Running { run_id: run });
    }
}
