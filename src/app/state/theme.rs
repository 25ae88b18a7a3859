use crate::config::ThemeMode;

/// Applied theme plus the ordering data that decides which source wins.
///
/// Load requests and user toggles share one sequence. A loaded value is
/// applied only when its request was issued after the latest toggle, and the
/// desktop signal is ignored once the user has toggled on this screen.
pub struct ThemeState {
    pub(in crate::app) current: ThemeMode,
    sequence: u64,
    last_toggle: Option<u64>,
    last_applied_load: u64,
    last_system_sample: Option<ThemeMode>,
}

impl ThemeState {
    pub(in crate::app) fn new(initial: ThemeMode) -> Self {
        Self {
            current: initial,
            sequence: 0,
            last_toggle: None,
            last_applied_load: 0,
            last_system_sample: None,
        }
    }

    fn next_sequence(&mut self) -> u64 {
        self.sequence = self.sequence.wrapping_add(1).max(1);
        self.sequence
    }

    pub(in crate::app) fn begin_load(&mut self) -> u64 {
        self.next_sequence()
    }

    /// Optimistically flip the theme and return the value to persist.
    pub(in crate::app) fn toggle(&mut self) -> ThemeMode {
        let seq = self.next_sequence();
        self.last_toggle = Some(seq);
        self.current = self.current.toggled();
        self.current
    }

    pub(in crate::app) fn accept_loaded(&mut self, request_id: u64, theme: ThemeMode) -> bool {
        if self.last_toggle.is_some_and(|toggle| toggle > request_id) {
            return false;
        }
        if request_id < self.last_applied_load {
            return false;
        }
        self.last_applied_load = request_id;
        self.current = theme;
        true
    }

    pub(in crate::app) fn accept_system(&mut self, theme: ThemeMode) -> bool {
        if self.last_toggle.is_some() {
            return false;
        }
        self.current = theme;
        true
    }

    /// Turn a polled sample into a change signal. The first sample only sets
    /// the baseline; repeats and unknowns yield `None`.
    pub(in crate::app) fn observe_system_sample(
        &mut self,
        sample: Option<ThemeMode>,
    ) -> Option<ThemeMode> {
        let sample = sample?;
        let previous = self.last_system_sample.replace(sample)?;
        (previous != sample).then_some(sample)
    }
}
