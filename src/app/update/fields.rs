use super::super::state::App;
use super::Effect;
use crate::advisor::advise;
use crate::annotation::{AnnotationConfig, FieldChange};
use crate::feedback::{Origin, WorkMessage};
use tracing::debug;

impl App {
    /// Notifying setter: one apply, one advisor pass, one render request.
    pub(super) fn handle_field_changed(&mut self, change: FieldChange, effects: &mut Vec<Effect>) {
        let field = change.field_name();
        let snapshot = self.store.apply(change);
        debug!(field, "Annotation option changed");
        self.refresh_advice(&snapshot);
        self.request_preview(snapshot, effects);
    }

    pub(in crate::app) fn refresh_advice(&mut self, config: &AnnotationConfig) {
        match advise(config) {
            Some(warning) => self.set_work_message(warning, Origin::Advisor),
            None if self.work_origin == Origin::Advisor => {
                self.set_work_message(WorkMessage::cleared(), Origin::None)
            }
            None => {}
        }
    }

    pub(in crate::app) fn request_preview(
        &mut self,
        config: AnnotationConfig,
        effects: &mut Vec<Effect>,
    ) {
        let request_id = self.preview.issue();
        effects.push(Effect::RenderPreview { request_id, config });
    }
}
