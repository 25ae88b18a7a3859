use tracing::warn;

/// Rendered sample plus the bookkeeping that keeps out-of-order replies out.
pub struct PreviewState {
    pub(in crate::app) latest_issued: u64,
    pub(in crate::app) latest_applied: u64,
    latest_failed: u64,
    pub(in crate::app) markup: String,
    pub(in crate::app) display_text: String,
    pub(in crate::app) last_error: Option<String>,
}

impl PreviewState {
    pub(in crate::app) fn new() -> Self {
        Self {
            latest_issued: 0,
            latest_applied: 0,
            latest_failed: 0,
            markup: String::new(),
            display_text: String::new(),
            last_error: None,
        }
    }

    /// Allocate the identity of the next render request.
    pub(in crate::app) fn issue(&mut self) -> u64 {
        self.latest_issued = self.latest_issued.wrapping_add(1).max(1);
        self.latest_issued
    }

    /// Only the reply to the most recently issued request may be shown.
    pub(in crate::app) fn is_current(&self, request_id: u64) -> bool {
        request_id == self.latest_issued
    }

    pub(in crate::app) fn apply_rendered(&mut self, request_id: u64, markup: String) -> bool {
        if !self.is_current(request_id) {
            return false;
        }
        self.display_text = markup_to_text(&markup);
        self.markup = markup;
        self.latest_applied = request_id;
        self.last_error = None;
        true
    }

    pub(in crate::app) fn apply_failure(&mut self, request_id: u64, error: String) -> bool {
        if !self.is_current(request_id) {
            return false;
        }
        self.latest_failed = request_id;
        self.last_error = Some(error);
        true
    }

    pub(in crate::app) fn is_pending(&self) -> bool {
        self.latest_applied != self.latest_issued && self.latest_failed != self.latest_issued
    }
}

fn markup_to_text(markup: &str) -> String {
    match html2text::from_read(markup.as_bytes(), super::PREVIEW_WRAP_COLUMNS) {
        Ok(text) => text,
        Err(err) => {
            warn!("html2text failed on preview markup: {err}");
            markup.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PreviewState;

    #[test]
    fn out_of_order_reply_is_dropped() {
        let mut preview = PreviewState::new();
        let first = preview.issue();
        let second = preview.issue();

        assert!(preview.apply_rendered(second, "<p>second</p>".to_string()));
        assert!(!preview.apply_rendered(first, "<p>first</p>".to_string()));
        assert_eq!(preview.markup, "<p>second</p>");
        assert_eq!(preview.latest_applied, second);
    }

    #[test]
    fn failure_keeps_previous_markup() {
        let mut preview = PreviewState::new();
        let first = preview.issue();
        preview.apply_rendered(first, "<p>good</p>".to_string());
        let second = preview.issue();

        assert!(preview.apply_failure(second, "renderer offline".to_string()));
        assert_eq!(preview.markup, "<p>good</p>");
        assert_eq!(preview.last_error.as_deref(), Some("renderer offline"));
        assert!(!preview.is_pending());
    }

    #[test]
    fn request_after_failure_is_pending() {
        let mut preview = PreviewState::new();
        let first = preview.issue();
        preview.apply_failure(first, "renderer offline".to_string());
        assert!(!preview.is_pending());

        let second = preview.issue();
        assert!(preview.is_pending());
        assert!(preview.apply_rendered(second, "<p>back</p>".to_string()));
        assert!(!preview.is_pending());
        assert!(preview.last_error.is_none());
    }

    #[test]
    fn display_text_strips_markup() {
        let mut preview = PreviewState::new();
        let id = preview.issue();
        preview.apply_rendered(id, "<p>hello <b>world</b></p>".to_string());
        assert!(preview.display_text.contains("hello"));
        assert!(!preview.display_text.contains("<p>"));
    }
}
