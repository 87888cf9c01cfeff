//! Scope-localized proxy shape.

use crate::builder::plan::PlanCache;
use crate::builder::proxy::InterceptorCore;
use std::sync::{Arc, Weak};
use surrogate_core::{
    ArgList, GeneratedMember, GenerationError, HookMap, Interceptable, ProxyBuilder, ProxyError,
    ProxyObject, TypeDescriptor, Value,
};

/// Builds proxies that indirect call sites through the interceptor without
/// an explicit holder.
///
/// Same external call surface as [`ValueHolderBuilder`] proxies, but the
/// holder capability is absent: `wrapped()` returns `None`.
#[derive(Default)]
pub struct ScopeLocalizerBuilder {
    cache: PlanCache,
}

impl ScopeLocalizerBuilder {
    /// Create a builder with an empty plan cache.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProxyBuilder for ScopeLocalizerBuilder {
    fn create_proxy(
        &self,
        target: Arc<dyn Interceptable>,
        descriptor: TypeDescriptor,
        hooks: HookMap,
        generated: Option<GeneratedMember>,
    ) -> Result<Arc<dyn ProxyObject>, GenerationError> {
        let plan = self
            .cache
            .get_or_compile(&descriptor, hooks.intercepted_names(), generated);
        let proxy = Arc::new_cyclic(|handle: &Weak<ScopeLocalizedProxy>| ScopeLocalizedProxy {
            core: InterceptorCore::new(target, hooks, plan),
            handle: handle.clone(),
        });
        Ok(proxy)
    }

    fn structural_generations(&self) -> usize {
        self.cache.generations()
    }
}

/// A proxy with the target's call surface and no holder accessor.
pub struct ScopeLocalizedProxy {
    core: InterceptorCore,
    handle: Weak<ScopeLocalizedProxy>,
}

impl ScopeLocalizedProxy {
    fn self_value(&self) -> Value {
        match self.handle.upgrade() {
            Some(proxy) => Value::Object(proxy as Arc<dyn Interceptable>),
            None => Value::Null,
        }
    }
}

impl Interceptable for ScopeLocalizedProxy {
    fn descriptor(&self) -> TypeDescriptor {
        self.core.plan().proxy_descriptor().clone()
    }

    fn call(&self, method: &str, args: &ArgList) -> Result<Value, ProxyError> {
        self.core.invoke(&self.self_value(), method, args)
    }

    fn call_any(&self, name: &str, args: &ArgList) -> Result<Value, ProxyError> {
        self.core.invoke_magic(&self.self_value(), name, args)
    }
}

impl ProxyObject for ScopeLocalizedProxy {}
