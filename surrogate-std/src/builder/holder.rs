//! Value-holder proxy shape.

use crate::builder::plan::PlanCache;
use crate::builder::proxy::InterceptorCore;
use std::sync::{Arc, Weak};
use surrogate_core::{
    ArgList, GeneratedMember, GenerationError, HookMap, Interceptable, ProxyBuilder, ProxyError,
    ProxyObject, TypeDescriptor, Value,
};

/// Builds proxies that hold the target and expose it through
/// [`ProxyObject::wrapped`].
///
/// The safer of the two shapes when identity-preserving interception after
/// an override is required.
#[derive(Default)]
pub struct ValueHolderBuilder {
    cache: PlanCache,
}

impl ValueHolderBuilder {
    /// Create a builder with an empty plan cache.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProxyBuilder for ValueHolderBuilder {
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
        let proxy = Arc::new_cyclic(|handle: &Weak<ValueHolderProxy>| ValueHolderProxy {
            core: InterceptorCore::new(target, hooks, plan),
            handle: handle.clone(),
        });
        Ok(proxy)
    }

    fn structural_generations(&self) -> usize {
        self.cache.generations()
    }
}

/// A proxy wrapping the real instance; unwrap it with
/// [`ProxyObject::wrapped`].
pub struct ValueHolderProxy {
    core: InterceptorCore,
    handle: Weak<ValueHolderProxy>,
}

impl ValueHolderProxy {
    fn self_value(&self) -> Value {
        match self.handle.upgrade() {
            Some(proxy) => Value::Object(proxy as Arc<dyn Interceptable>),
            None => Value::Null,
        }
    }
}

impl Interceptable for ValueHolderProxy {
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

impl ProxyObject for ValueHolderProxy {
    fn wrapped(&self) -> Option<Arc<dyn Interceptable>> {
        Some(Arc::clone(self.core.target()))
    }
}
