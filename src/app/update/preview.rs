use super::super::state::App;
use tracing::{debug, warn};

impl App {
    pub(super) fn handle_preview_rendered(&mut self, request_id: u64, result: Result<String, String>) {
        let latest = self.preview.latest_issued;
        match result {
            Ok(markup) => {
                if !self.preview.apply_rendered(request_id, markup) {
                    debug!(request_id, latest, "Dropping stale preview");
                }
            }
            Err(error) => {
                if self.preview.is_current(request_id) {
                    warn!(request_id, "Preview render failed: {error}");
                    self.preview.apply_failure(request_id, error);
                } else {
                    debug!(request_id, latest, "Dropping stale preview failure");
                }
            }
        }
    }
}
