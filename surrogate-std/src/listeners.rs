//! Reusable listeners.

use surrogate_core::{BoxError, InterceptionEvent, InterceptionListener};

/// A listener that logs events for debugging/observation.
pub struct LoggingListener;

impl InterceptionListener for LoggingListener {
    fn on_event(&self, event: &mut InterceptionEvent) -> Result<(), BoxError> {
        tracing::debug!(
            method = event.method(),
            params = ?event.params(),
            return_early = event.return_early(),
            return_value = ?event.return_value(),
            "interception event"
        );
        Ok(())
    }
}
