use crate::error::{ChartError, ChartResult};
use crate::extensions::InteractionListener;
use crate::interaction::{InteractionEvent, InteractionEventKind};
use crate::render::Renderer;

use super::InteractionController;

impl<R: Renderer> InteractionController<R> {
    /// Registers a listener with unique identifier.
    pub fn register_listener(&mut self, listener: Box<dyn InteractionListener>) -> ChartResult<()> {
        let listener_id = listener.id().to_owned();
        if listener_id.is_empty() {
            return Err(ChartError::InvalidData(
                "listener id must not be empty".to_owned(),
            ));
        }
        if self.listeners.contains_key(&listener_id) {
            return Err(ChartError::InvalidData(format!(
                "listener with id `{listener_id}` is already registered"
            )));
        }
        self.listeners.insert(listener_id, listener);
        Ok(())
    }

    /// Unregisters a listener by id. Returns `true` when removed.
    pub fn unregister_listener(&mut self, listener_id: &str) -> bool {
        self.listeners.shift_remove(listener_id).is_some()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn has_listener(&self, listener_id: &str) -> bool {
        self.listeners.contains_key(listener_id)
    }

    /// Snapshot of the current model tagged with `kind`.
    #[must_use]
    pub fn snapshot_event(&self, kind: InteractionEventKind) -> InteractionEvent {
        InteractionEvent {
            kind,
            labels: self.model.sequence.labels().to_vec(),
            values: self.model.sequence.values().to_vec(),
            gradient: self.model.derived.clone(),
        }
    }

    pub(super) fn emit(&mut self, kind: InteractionEventKind) {
        if self.listeners.is_empty() {
            return;
        }
        let event = self.snapshot_event(kind);
        for listener in self.listeners.values_mut() {
            listener.on_event(&event);
        }
    }
}
