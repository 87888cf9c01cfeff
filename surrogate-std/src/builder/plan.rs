//! Structural proxy plans and their cache.
//!
//! Compiling a plan is the builder's "expensive" structural step: it turns
//! the intercepted method set and an optional generated member into the
//! call-time dispatch table. Plans are cached per `(type name, method set,
//! magic surface)` so repeated `create_proxy` calls over the same shape reuse
//! the structure and only the per-proxy hook closures differ.

use parking_lot::Mutex;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use surrogate_core::{CATCH_ALL, CallStep, GeneratedCallSurface, GeneratedMember, TypeDescriptor};

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
struct PlanKey {
    type_name: String,
    methods: BTreeSet<String>,
    // Distinct magic-name surfaces compile to distinct structures even
    // though both intercept the same catch-all slot.
    surface: Option<BTreeSet<String>>,
}

/// Compiled dispatch structure shared by all proxies of one shape.
#[derive(Debug)]
pub(crate) struct ProxyPlan {
    descriptor: TypeDescriptor,
    proxy_descriptor: TypeDescriptor,
    intercepted: BTreeSet<String>,
    surface: Option<GeneratedCallSurface>,
    validate_magic: bool,
    delegate_magic: bool,
}

impl ProxyPlan {
    fn compile(
        descriptor: TypeDescriptor,
        intercepted: BTreeSet<String>,
        generated: Option<GeneratedMember>,
    ) -> Self {
        let mut validate_magic = false;
        let mut delegate_magic = false;
        let surface = match generated {
            Some(member) => {
                // The member's body-as-data drives the magic route.
                for step in member.body() {
                    match step {
                        CallStep::Validate => validate_magic = true,
                        CallStep::DelegateOrFail => delegate_magic = true,
                        CallStep::Intercept => {}
                    }
                }
                Some(member.into_surface())
            }
            None => {
                // Intercepting a native catch-all routes every magic
                // invocation, with no name validation.
                delegate_magic = intercepted.contains(CATCH_ALL);
                None
            }
        };

        // A generated member extends the proxy's own surface.
        let mut proxy_descriptor = descriptor.clone();
        if surface.is_some() {
            proxy_descriptor = proxy_descriptor.with_catch_all();
        }

        Self {
            descriptor,
            proxy_descriptor,
            intercepted,
            surface,
            validate_magic,
            delegate_magic,
        }
    }

    /// The target's surface snapshot.
    pub(crate) fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    /// The proxy's surface snapshot (target plus generated members).
    pub(crate) fn proxy_descriptor(&self) -> &TypeDescriptor {
        &self.proxy_descriptor
    }

    /// Whether hooks are installed for this method slot.
    pub(crate) fn is_intercepted(&self, method: &str) -> bool {
        self.intercepted.contains(method)
    }

    /// Whether magic invocations route through the interception path.
    pub(crate) fn routes_magic(&self) -> bool {
        self.surface.is_some() || self.intercepted.contains(CATCH_ALL)
    }

    /// The generated allowed-name surface, when the catch-all is synthesized.
    pub(crate) fn surface(&self) -> Option<&GeneratedCallSurface> {
        self.surface.as_ref()
    }

    /// Whether the magic route validates invoked names.
    pub(crate) fn validates_magic(&self) -> bool {
        self.validate_magic
    }

    /// Whether the magic route delegates to an underlying catch-all.
    pub(crate) fn delegates_magic(&self) -> bool {
        self.delegate_magic
    }
}

/// Per-builder cache of compiled plans.
#[derive(Default)]
pub(crate) struct PlanCache {
    plans: Mutex<HashMap<PlanKey, Arc<ProxyPlan>>>,
    misses: AtomicUsize,
}

impl PlanCache {
    /// Fetch the plan for this shape, compiling it on first sight.
    pub(crate) fn get_or_compile(
        &self,
        descriptor: &TypeDescriptor,
        intercepted: BTreeSet<String>,
        generated: Option<GeneratedMember>,
    ) -> Arc<ProxyPlan> {
        let key = PlanKey {
            type_name: descriptor.type_name().to_owned(),
            methods: intercepted.clone(),
            surface: generated
                .as_ref()
                .map(|member| member.surface().allowed().map(str::to_owned).collect()),
        };
        let mut plans = self.plans.lock();
        if let Some(plan) = plans.get(&key) {
            tracing::trace!(type_name = %key.type_name, "proxy plan cache hit");
            return Arc::clone(plan);
        }
        self.misses.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(
            type_name = %key.type_name,
            methods = ?key.methods,
            "compiling proxy plan"
        );
        let plan = Arc::new(ProxyPlan::compile(
            descriptor.clone(),
            intercepted,
            generated,
        ));
        plans.insert(key, Arc::clone(&plan));
        plan
    }

    /// Number of plans compiled so far.
    pub(crate) fn generations(&self) -> usize {
        self.misses.load(Ordering::SeqCst)
    }
}
