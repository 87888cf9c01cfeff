//! The event-dispatching proxy factory.

use crate::classify::classify;
use crate::namespace::{Phase, event_name, underscore};
use crate::synthesize::synthesize_catch_all;
use std::sync::Arc;
use surrogate_core::{
    CATCH_ALL, DispatchError, EventBus, HookMap, HookOutcome, InterceptionEvent, Invocation,
    ProxyBuilder, ProxyError, ProxyObject, Value,
};
use surrogate_std::{ProxyConfig, ScopeLocalizerBuilder, ValueHolderBuilder};

/// Generates proxies that dispatch pre/post interception events around a
/// chosen set of methods.
///
/// Configuration is fixed at construction: the event bus, the backend
/// [`ProxyConfig`] and the proxy shape (value-holder or scope-localized).
/// One factory produces any number of proxies; repeated requests over the
/// same `(type name, method set, magic surface)` shape reuse the builder's
/// cached structure.
///
/// # Example
///
/// ```rust,ignore
/// let bus = Arc::new(SyncEventBus::new());
/// bus.subscribe("gadget.pre_first_method", |event: &mut InterceptionEvent| {
///     event.set_return_value(Value::from("cached"));
///     Ok(())
/// });
///
/// let factory = ProxyFactory::new(bus);
/// let proxy = factory.create_proxy(
///     &Value::Object(Arc::new(Gadget)),
///     &["firstMethod".into()],
///     None,
/// )?;
/// assert_eq!(proxy.call("firstMethod", &ArgList::new())?, Value::from("cached"));
/// ```
pub struct ProxyFactory {
    bus: Arc<dyn EventBus>,
    config: Arc<ProxyConfig>,
    builder: Arc<dyn ProxyBuilder>,
    use_holder: bool,
}

impl ProxyFactory {
    /// A factory with the default ephemeral configuration, producing
    /// value-holder proxies.
    pub fn new(bus: Arc<dyn EventBus>) -> Self {
        Self::assemble(bus, Arc::new(ProxyConfig::ephemeral()), true)
    }

    /// A factory with an explicit backend configuration and proxy shape.
    ///
    /// Callers supplying a configuration are assumed to manage persistent
    /// generated artifacts, so the artifacts location is made loadable here,
    /// once, before the factory is handed out.
    pub fn with_config(
        bus: Arc<dyn EventBus>,
        config: ProxyConfig,
        use_holder: bool,
    ) -> Result<Self, ProxyError> {
        config.ensure_loadable()?;
        Ok(Self::assemble(bus, Arc::new(config), use_holder))
    }

    fn assemble(bus: Arc<dyn EventBus>, config: Arc<ProxyConfig>, use_holder: bool) -> Self {
        let builder: Arc<dyn ProxyBuilder> = if use_holder {
            Arc::new(ValueHolderBuilder::new())
        } else {
            Arc::new(ScopeLocalizerBuilder::new())
        };
        Self {
            bus,
            config,
            builder,
            use_holder,
        }
    }

    /// Whether this factory produces value-holder proxies.
    pub fn uses_holder(&self) -> bool {
        self.use_holder
    }

    /// The backend configuration.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }

    /// The proxy-generation backend.
    pub fn builder(&self) -> &Arc<dyn ProxyBuilder> {
        &self.builder
    }

    /// Build a proxy over `target` intercepting the requested methods.
    ///
    /// `target` must be an object-like value. Requested names missing from
    /// the target's surface are routed through its catch-all slot,
    /// synthesizing one when the target has none. Events publish under
    /// `event_ns`, or under the target's short type name in underscore form
    /// when omitted.
    pub fn create_proxy(
        &self,
        target: &Value,
        methods: &[Value],
        event_ns: Option<&str>,
    ) -> Result<Arc<dyn ProxyObject>, ProxyError> {
        let instance = target
            .as_object()
            .cloned()
            .ok_or(ProxyError::InvalidArgument(target.type_label()))?;
        let descriptor = instance.descriptor();

        let namespace = match event_ns {
            Some(ns) => ns.to_owned(),
            None => underscore(descriptor.short_name()),
        };

        let classification = classify(&descriptor, methods);
        let generated = if classification.needs_synthesis() {
            Some(synthesize_catch_all(&descriptor, classification.magic())?)
        } else {
            None
        };

        let hooks = self.build_hooks(
            &namespace,
            classification.intercepted(),
            classification.needs_synthesis(),
        );

        tracing::debug!(
            type_name = descriptor.type_name(),
            namespace,
            intercepted = ?classification.intercepted(),
            magic = ?classification.magic(),
            "creating proxy"
        );

        let proxy = self
            .builder
            .create_proxy(instance, descriptor, hooks, generated)?;
        Ok(proxy)
    }

    /// Build the per-method hook pairs for one proxy.
    fn build_hooks(&self, namespace: &str, intercepted: &[String], generated_call: bool) -> HookMap {
        let mut hooks = HookMap::new();
        for method in intercepted {
            let bus = Arc::clone(&self.bus);
            let ns = namespace.to_owned();
            hooks.insert_pre(
                method.clone(),
                Box::new(move |invocation| {
                    let event =
                        dispatch_interception(bus.as_ref(), &ns, Phase::Pre, invocation, Value::Null)?;
                    // A stored return value or an explicit early-return flag
                    // both bypass the real method.
                    if event.return_early() || !event.return_value().is_null() {
                        Ok(HookOutcome::ShortCircuit(event.return_value()))
                    } else {
                        Ok(HookOutcome::Continue)
                    }
                }),
            );

            // No parent catch-all behind a generated slot, post event not
            // needed.
            if generated_call && method == CATCH_ALL {
                continue;
            }

            let bus = Arc::clone(&self.bus);
            let ns = namespace.to_owned();
            hooks.insert_post(
                method.clone(),
                Box::new(move |invocation, return_value| {
                    let event =
                        dispatch_interception(bus.as_ref(), &ns, Phase::Post, invocation, return_value)?;
                    if event.return_early() {
                        Ok(HookOutcome::ShortCircuit(event.return_value()))
                    } else {
                        Ok(HookOutcome::Continue)
                    }
                }),
            );
        }
        hooks
    }
}

/// Dispatch one interception event and hand back the mutated payload.
///
/// The event name snake-cases the invoked method; for the catch-all slot,
/// the *resolved* name carried as the first runtime argument. The payload's
/// `method` field keeps the literal slot name either way.
fn dispatch_interception(
    bus: &dyn EventBus,
    namespace: &str,
    phase: Phase,
    invocation: &Invocation<'_>,
    return_value: Value,
) -> Result<InterceptionEvent, DispatchError> {
    let resolved = if invocation.method == CATCH_ALL {
        invocation
            .params
            .first()
            .and_then(|value| value.as_str().map(str::to_owned))
            .unwrap_or_else(|| invocation.method.to_owned())
    } else {
        invocation.method.to_owned()
    };
    let name = event_name(namespace, phase, &resolved);

    let mut event = InterceptionEvent::new(
        Arc::clone(invocation.instance),
        invocation.proxy.clone(),
        invocation.method,
        invocation.params.clone(),
        return_value,
    );
    bus.dispatch(&name, &mut event)?;
    Ok(event)
}
