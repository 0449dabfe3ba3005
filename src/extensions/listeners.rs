use crate::interaction::InteractionEvent;

/// Observer hook for editor events.
///
/// Listeners receive a consistent snapshot after each handled input and
/// cannot mutate the chart model directly.
pub trait InteractionListener {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &InteractionEvent);
}

/// Adapts a closure into a listener.
pub struct FnListener<F> {
    id: String,
    callback: F,
}

impl<F> FnListener<F>
where
    F: FnMut(&InteractionEvent),
{
    pub fn new(id: impl Into<String>, callback: F) -> Self {
        Self {
            id: id.into(),
            callback,
        }
    }
}

impl<F> InteractionListener for FnListener<F>
where
    F: FnMut(&InteractionEvent),
{
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: &InteractionEvent) {
        (self.callback)(event);
    }
}
