//! Synchronous event bus with registration-ordered listeners.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use surrogate_core::{DispatchError, EventBus, InterceptionEvent, InterceptionListener};

/// The reference [`EventBus`] implementation.
///
/// Listeners subscribe to exact event names and run synchronously, in
/// registration order, each receiving the payload by mutable reference.
/// The first listener error aborts the dispatch.
#[derive(Default)]
pub struct SyncEventBus {
    listeners: RwLock<HashMap<String, Vec<Arc<dyn InterceptionListener>>>>,
}

impl SyncEventBus {
    /// Create a bus with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a listener to an exact event name.
    pub fn subscribe(
        &self,
        event_name: impl Into<String>,
        listener: impl InterceptionListener + 'static,
    ) {
        self.listeners
            .write()
            .entry(event_name.into())
            .or_default()
            .push(Arc::new(listener));
    }

    /// Number of listeners subscribed to an event name.
    pub fn listener_count(&self, event_name: &str) -> usize {
        self.listeners
            .read()
            .get(event_name)
            .map_or(0, Vec::len)
    }
}

impl EventBus for SyncEventBus {
    fn dispatch(
        &self,
        event_name: &str,
        event: &mut InterceptionEvent,
    ) -> Result<(), DispatchError> {
        // Snapshot outside the lock so listeners may subscribe re-entrantly.
        let subscribed = self.listeners.read().get(event_name).cloned();
        let Some(subscribed) = subscribed else {
            return Ok(());
        };
        for listener in subscribed {
            listener
                .on_event(event)
                .map_err(|source| DispatchError::Listener {
                    event: event_name.to_owned(),
                    source,
                })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use surrogate_core::{ArgList, BoxError, Interceptable, ProxyError, TypeDescriptor, Value};

    struct Probe;

    impl Interceptable for Probe {
        fn descriptor(&self) -> TypeDescriptor {
            TypeDescriptor::new("Probe")
        }

        fn call(&self, method: &str, _args: &ArgList) -> Result<Value, ProxyError> {
            Err(ProxyError::method_not_found("Probe", method))
        }
    }

    fn probe_event() -> InterceptionEvent {
        InterceptionEvent::new(
            Arc::new(Probe),
            Value::Null,
            "probe",
            ArgList::new(),
            Value::Null,
        )
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let bus = SyncEventBus::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for id in 0..3usize {
            let order = order.clone();
            bus.subscribe("probe.event", move |_event: &mut InterceptionEvent| -> Result<(), BoxError> {
                order.lock().push(id);
                Ok(())
            });
        }

        assert_eq!(bus.listener_count("probe.event"), 3);
        assert_eq!(bus.listener_count("never.subscribed"), 0);

        let mut event = probe_event();
        bus.dispatch("probe.event", &mut event).unwrap();
        assert_eq!(*order.lock(), vec![0, 1, 2]);
    }

    #[test]
    fn listener_error_stops_the_dispatch() {
        let bus = SyncEventBus::new();
        bus.subscribe("probe.event", |_event: &mut InterceptionEvent| -> Result<(), BoxError> {
            Err("boom".into())
        });
        let reached = Arc::new(Mutex::new(false));
        let flag = reached.clone();
        bus.subscribe("probe.event", move |_event: &mut InterceptionEvent| -> Result<(), BoxError> {
            *flag.lock() = true;
            Ok(())
        });

        let mut event = probe_event();
        let err = bus.dispatch("probe.event", &mut event).unwrap_err();
        assert!(matches!(err, DispatchError::Listener { .. }));
        assert!(!*reached.lock(), "later listeners must not run");
    }

    #[test]
    fn unknown_event_name_is_a_no_op() {
        let bus = SyncEventBus::new();
        let mut event = probe_event();
        bus.dispatch("never.subscribed", &mut event).unwrap();
    }
}
