//! Call-time interception dispatch shared by both proxy shapes.

use crate::builder::plan::ProxyPlan;
use std::sync::Arc;
use surrogate_core::{
    ArgList, CATCH_ALL, HookMap, HookOutcome, Interceptable, Invocation, ProxyError, Value,
};

/// The interception machinery behind a proxy's call surface.
///
/// Holds the target, the per-proxy hook closures and the shared structural
/// plan. The hosting proxy shape forwards its calls here together with a
/// handle to itself for the event payload's `proxy` field.
pub(crate) struct InterceptorCore {
    target: Arc<dyn Interceptable>,
    hooks: HookMap,
    plan: Arc<ProxyPlan>,
}

impl InterceptorCore {
    pub(crate) fn new(
        target: Arc<dyn Interceptable>,
        hooks: HookMap,
        plan: Arc<ProxyPlan>,
    ) -> Self {
        Self {
            target,
            hooks,
            plan,
        }
    }

    pub(crate) fn target(&self) -> &Arc<dyn Interceptable> {
        &self.target
    }

    pub(crate) fn plan(&self) -> &ProxyPlan {
        &self.plan
    }

    /// Entry point for the proxy's `call` surface.
    pub(crate) fn invoke(
        &self,
        proxy: &Value,
        method: &str,
        args: &ArgList,
    ) -> Result<Value, ProxyError> {
        if method == CATCH_ALL {
            // Direct catch-all invocation: args carry (name, arguments).
            let Some(name) = args.first().and_then(|v| v.as_str().map(str::to_owned)) else {
                return Err(ProxyError::method_not_found(
                    self.plan.descriptor().type_name(),
                    CATCH_ALL,
                ));
            };
            let forwarded = match args.get(1) {
                Some(Value::List(list)) => list,
                _ => ArgList::new(),
            };
            return self.invoke_magic(proxy, &name, &forwarded);
        }

        if self.plan.descriptor().has_method(method) {
            if self.plan.is_intercepted(method) {
                self.invoke_intercepted(proxy, method, args)
            } else {
                self.target.call(method, args)
            }
        } else {
            self.invoke_magic(proxy, method, args)
        }
    }

    fn invoke_intercepted(
        &self,
        proxy: &Value,
        method: &str,
        args: &ArgList,
    ) -> Result<Value, ProxyError> {
        let invocation = Invocation {
            proxy,
            instance: &self.target,
            method,
            params: args,
        };
        if let Some(pre) = self.hooks.pre(method) {
            if let HookOutcome::ShortCircuit(value) = pre(&invocation)? {
                return Ok(value);
            }
        }
        let returned = self.target.call(method, args)?;
        match self.hooks.post(method) {
            Some(post) => match post(&invocation, returned.clone())? {
                HookOutcome::ShortCircuit(value) => Ok(value),
                HookOutcome::Continue => Ok(returned),
            },
            None => Ok(returned),
        }
    }

    /// Entry point for invocations with no declared method of that name.
    pub(crate) fn invoke_magic(
        &self,
        proxy: &Value,
        name: &str,
        args: &ArgList,
    ) -> Result<Value, ProxyError> {
        let descriptor = self.plan.descriptor();
        if !self.plan.routes_magic() {
            // Catch-all neither intercepted nor synthesized: plain
            // delegation, no events.
            return if descriptor.has_catch_all() {
                self.target.call_any(name, args)
            } else {
                Err(ProxyError::method_not_found(descriptor.type_name(), name))
            };
        }

        if self.plan.validates_magic()
            && !self
                .plan
                .surface()
                .is_some_and(|surface| surface.permits(name))
        {
            return Err(ProxyError::method_not_found(descriptor.type_name(), name));
        }

        // Event naming resolves the real invoked name from params[0]; the
        // payload's `method` field keeps the literal catch-all slot.
        let params =
            ArgList::from_values(vec![Value::from(name), Value::List(args.clone())]);
        let invocation = Invocation {
            proxy,
            instance: &self.target,
            method: CATCH_ALL,
            params: &params,
        };
        if let Some(pre) = self.hooks.pre(CATCH_ALL) {
            if let HookOutcome::ShortCircuit(value) = pre(&invocation)? {
                return Ok(value);
            }
        }

        let returned = if self.plan.delegates_magic() && descriptor.has_catch_all() {
            self.target.call_any(name, args)?
        } else {
            // Generated slot with no parent catch-all: the delegation step
            // is the method-not-found failure itself.
            return Err(ProxyError::method_not_found(descriptor.type_name(), name));
        };

        match self.hooks.post(CATCH_ALL) {
            Some(post) => match post(&invocation, returned.clone())? {
                HookOutcome::ShortCircuit(value) => Ok(value),
                HookOutcome::Continue => Ok(returned),
            },
            None => Ok(returned),
        }
    }
}
