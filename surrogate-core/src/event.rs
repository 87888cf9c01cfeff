//! The per-invocation interception event payload.

use crate::target::Interceptable;
use crate::value::{ArgList, Value};
use std::fmt;
use std::sync::Arc;

/// Payload dispatched to listeners around every intercepted call.
///
/// Created fresh per hook invocation and discarded immediately after
/// dispatch; never persisted or shared across calls. Listeners receive it
/// by mutable reference and may rewrite the outcome fields:
///
/// - `return_value` - `Null` before a PRE dispatch; a non-null value stored
///   during PRE short-circuits the real call. On POST it carries the real
///   method's result and may be overwritten.
/// - `return_early` - set by a listener to force the event's `return_value`
///   (including `Null`) to become the call's result.
///
/// `method` is the literal invoked slot; for calls routed through the
/// catch-all it stays the catch-all identifier while the *event name* uses
/// the resolved real name. `params` is the shared argument container, so
/// element mutations reach the real call.
pub struct InterceptionEvent {
    subject: Arc<dyn Interceptable>,
    proxy: Value,
    method: String,
    params: ArgList,
    return_early: bool,
    return_value: Value,
}

impl InterceptionEvent {
    /// Assemble a payload for one hook dispatch.
    pub fn new(
        subject: Arc<dyn Interceptable>,
        proxy: Value,
        method: impl Into<String>,
        params: ArgList,
        return_value: Value,
    ) -> Self {
        Self {
            subject,
            proxy,
            method: method.into(),
            params,
            return_early: false,
            return_value,
        }
    }

    /// The real target instance behind the proxy.
    pub fn subject(&self) -> &Arc<dyn Interceptable> {
        &self.subject
    }

    /// Handle to the proxy the call went through.
    pub fn proxy(&self) -> &Value {
        &self.proxy
    }

    /// The literal invoked method slot.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The shared argument container.
    pub fn params(&self) -> &ArgList {
        &self.params
    }

    /// Current return value.
    pub fn return_value(&self) -> Value {
        self.return_value.clone()
    }

    /// Store a return value for the caller.
    pub fn set_return_value(&mut self, value: Value) {
        self.return_value = value;
    }

    /// Whether a listener requested an early return.
    pub fn return_early(&self) -> bool {
        self.return_early
    }

    /// Request that `return_value` replace the call's result.
    pub fn set_return_early(&mut self, flag: bool) {
        self.return_early = flag;
    }
}

impl fmt::Debug for InterceptionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterceptionEvent")
            .field("subject", &self.subject.descriptor().type_name())
            .field("method", &self.method)
            .field("params", &self.params)
            .field("return_early", &self.return_early)
            .field("return_value", &self.return_value)
            .finish()
    }
}
