//! Event bus collaborator contract.

use crate::error::{BoxError, DispatchError};
use crate::event::InterceptionEvent;

/// Synchronous publish/subscribe collaborator.
///
/// `dispatch` hands the payload to zero or more listeners, in registration
/// order, each allowed to mutate its fields. A listener error aborts the
/// dispatch and propagates out of the intercepted call; it is never
/// suppressed.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `EventBus`",
    label = "missing `EventBus` implementation",
    note = "The proxy factory dispatches interception events through this trait."
)]
pub trait EventBus: Send + Sync {
    /// Dispatch a named event to its listeners, synchronously and in order.
    fn dispatch(&self, event_name: &str, event: &mut InterceptionEvent)
    -> Result<(), DispatchError>;
}

/// A subscriber receiving interception events by mutable reference.
pub trait InterceptionListener: Send + Sync {
    /// Inspect and possibly mutate one dispatched event.
    fn on_event(&self, event: &mut InterceptionEvent) -> Result<(), BoxError>;
}

// Closures subscribe directly.
impl<F> InterceptionListener for F
where
    F: Fn(&mut InterceptionEvent) -> Result<(), BoxError> + Send + Sync,
{
    fn on_event(&self, event: &mut InterceptionEvent) -> Result<(), BoxError> {
        self(event)
    }
}
