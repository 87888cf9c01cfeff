//! Testing utilities for Surrogate.
//!
//! - [`RecordingBus`]: wraps an inner bus and records dispatched event names
//!   in order
//! - [`ScriptedListener`]: sets payload fields the way a real listener would
//! - [`FailingListener`]: always errors, for propagation tests
//! - Sample targets: [`Gadget`], [`GadgetWithCatchAll`], [`SealedGadget`],
//!   [`TokenTurnstile`]

use parking_lot::Mutex;
use std::sync::Arc;
use surrogate_core::{
    ArgList, BoxError, CATCH_ALL, DispatchError, EventBus, Interceptable, InterceptionEvent,
    InterceptionListener, ProxyError, TypeDescriptor, Value,
};

// ============================================================================
// Recording Bus
// ============================================================================

/// An [`EventBus`] decorator recording every dispatched event name, in order,
/// before delegating to the inner bus.
///
/// # Example
///
/// ```rust,ignore
/// let inner = Arc::new(SyncEventBus::new());
/// let bus = Arc::new(RecordingBus::new(inner));
///
/// // ... create a proxy over `bus`, invoke methods ...
///
/// assert_eq!(bus.event_names(), vec!["test.pre_foo", "test.post_foo"]);
/// ```
pub struct RecordingBus {
    inner: Arc<dyn EventBus>,
    names: Mutex<Vec<String>>,
}

impl RecordingBus {
    /// Wrap an inner bus.
    pub fn new(inner: Arc<dyn EventBus>) -> Self {
        Self {
            inner,
            names: Mutex::new(Vec::new()),
        }
    }

    /// The event names dispatched so far, in order.
    pub fn event_names(&self) -> Vec<String> {
        self.names.lock().clone()
    }

    /// Number of events dispatched so far.
    pub fn count(&self) -> usize {
        self.names.lock().len()
    }

    /// Forget everything recorded.
    pub fn clear(&self) {
        self.names.lock().clear();
    }
}

impl EventBus for RecordingBus {
    fn dispatch(
        &self,
        event_name: &str,
        event: &mut InterceptionEvent,
    ) -> Result<(), DispatchError> {
        self.names.lock().push(event_name.to_owned());
        self.inner.dispatch(event_name, event)
    }
}

// ============================================================================
// Scripted Listener
// ============================================================================

/// A listener that writes fixed values into the event payload.
///
/// Mirrors how real listeners drive the interception contract: storing a
/// return value, requesting an early return, or rewriting an argument slot.
#[derive(Clone, Default)]
pub struct ScriptedListener {
    return_value: Option<Value>,
    return_early: Option<bool>,
    set_param: Option<(usize, Value)>,
}

impl ScriptedListener {
    /// A listener that touches nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` into the event's `return_value`.
    pub fn with_return_value(mut self, value: Value) -> Self {
        self.return_value = Some(value);
        self
    }

    /// Set the event's `return_early` flag.
    pub fn with_return_early(mut self, flag: bool) -> Self {
        self.return_early = Some(flag);
        self
    }

    /// Rewrite the argument at `index`.
    pub fn with_param(mut self, index: usize, value: Value) -> Self {
        self.set_param = Some((index, value));
        self
    }
}

impl InterceptionListener for ScriptedListener {
    fn on_event(&self, event: &mut InterceptionEvent) -> Result<(), BoxError> {
        if let Some(value) = &self.return_value {
            event.set_return_value(value.clone());
        }
        if let Some(flag) = self.return_early {
            event.set_return_early(flag);
        }
        if let Some((index, value)) = &self.set_param {
            event.params().set(*index, value.clone());
        }
        Ok(())
    }
}

// ============================================================================
// Failing Listener
// ============================================================================

/// A listener that always fails, for error-propagation tests.
pub struct FailingListener {
    message: String,
}

impl FailingListener {
    /// Fail with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl InterceptionListener for FailingListener {
    fn on_event(&self, _event: &mut InterceptionEvent) -> Result<(), BoxError> {
        Err(self.message.clone().into())
    }
}

// ============================================================================
// Sample Targets
// ============================================================================

/// A plain target with three declared methods and no catch-all.
///
/// `firstMethod` and `secondMethod` return their own names; `echoMethod`
/// returns its first argument, which makes listener argument rewrites
/// observable.
pub struct Gadget;

impl Interceptable for Gadget {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::new("Gadget").with_methods(["firstMethod", "secondMethod", "echoMethod"])
    }

    fn call(&self, method: &str, args: &ArgList) -> Result<Value, ProxyError> {
        match method {
            "firstMethod" => Ok(Value::from("firstMethod")),
            "secondMethod" => Ok(Value::from("secondMethod")),
            "echoMethod" => Ok(args.first().unwrap_or_default()),
            _ => Err(ProxyError::method_not_found("Gadget", method)),
        }
    }
}

/// A target with one declared method and a native catch-all that returns
/// the literal catch-all identifier.
pub struct GadgetWithCatchAll;

impl Interceptable for GadgetWithCatchAll {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::new("GadgetWithCatchAll")
            .with_methods(["firstMethod"])
            .with_catch_all()
    }

    fn call(&self, method: &str, _args: &ArgList) -> Result<Value, ProxyError> {
        match method {
            "firstMethod" => Ok(Value::from("firstMethod")),
            _ => Err(ProxyError::method_not_found("GadgetWithCatchAll", method)),
        }
    }

    fn call_any(&self, _name: &str, _args: &ArgList) -> Result<Value, ProxyError> {
        Ok(Value::from(CATCH_ALL))
    }
}

/// A target whose catch-all slot is sealed against generated overrides.
pub struct SealedGadget;

impl Interceptable for SealedGadget {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::new("SealedGadget")
            .with_methods(["firstMethod"])
            .with_sealed([CATCH_ALL])
    }

    fn call(&self, method: &str, _args: &ArgList) -> Result<Value, ProxyError> {
        match method {
            "firstMethod" => Ok(Value::from("firstMethod")),
            _ => Err(ProxyError::method_not_found("SealedGadget", method)),
        }
    }
}

/// A multi-word type name for namespace-derivation tests
/// (`TokenTurnstile` → `token_turnstile`).
pub struct TokenTurnstile;

impl Interceptable for TokenTurnstile {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::new("TokenTurnstile").with_methods(["firstMethod"])
    }

    fn call(&self, method: &str, _args: &ArgList) -> Result<Value, ProxyError> {
        match method {
            "firstMethod" => Ok(Value::from("firstMethod")),
            _ => Err(ProxyError::method_not_found("TokenTurnstile", method)),
        }
    }
}
