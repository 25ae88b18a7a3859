//! Warnings derived from option combinations.

use crate::annotation::{AnnotationConfig, AnnotationStyle};
use crate::feedback::{Severity, WorkMessage};

pub const KINDLE_OVERLAY_WARNING: &str = "Kindle formats (AZW3/MOBI) cannot render on-top annotations; choose the inline style or an EPUB/PDF output.";

/// Inspect the whole configuration and return the warning to show, if any.
pub fn advise(config: &AnnotationConfig) -> Option<WorkMessage> {
    if config.style == AnnotationStyle::Overlay && !config.format.supports_overlay() {
        return Some(WorkMessage::new(Severity::Warning, KINDLE_OVERLAY_WARNING));
    }
    None
}
