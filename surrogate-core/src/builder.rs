//! Proxy builder collaborator contract.

use crate::error::GenerationError;
use crate::generated::GeneratedMember;
use crate::hook::HookMap;
use crate::target::{Interceptable, TypeDescriptor};
use std::sync::Arc;

/// A built proxy: the target's public call surface plus proxy capabilities.
///
/// Every proxy satisfies the interception capability through its
/// [`Interceptable`] supertrait. The holder capability is optional:
/// value-holder proxies expose the wrapped target, scope-localized proxies
/// do not.
pub trait ProxyObject: Interceptable {
    /// Unwrap the held target, if this proxy is a value holder.
    fn wrapped(&self) -> Option<Arc<dyn Interceptable>> {
        None
    }
}

impl std::fmt::Debug for dyn ProxyObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn ProxyObject")
    }
}

/// The code-generation backend that assembles proxies.
///
/// Given the per-method hook pairs, the target's descriptor and an optional
/// generated member, produce a proxy preserving the target's full public
/// call surface. Structural synthesis for a given `(type name, method set,
/// magic surface)` shape is expensive and must be cached by the builder;
/// callers create any number
/// of proxies without forcing regeneration. Failures propagate unmodified.
pub trait ProxyBuilder: Send + Sync {
    /// Build a proxy around `target`.
    fn create_proxy(
        &self,
        target: Arc<dyn Interceptable>,
        descriptor: TypeDescriptor,
        hooks: HookMap,
        generated: Option<GeneratedMember>,
    ) -> Result<Arc<dyn ProxyObject>, GenerationError>;

    /// How many structural syntheses this builder has performed.
    ///
    /// Stays flat across repeated `create_proxy` calls for an identical
    /// `(type name, method set, magic surface)` shape.
    fn structural_generations(&self) -> usize;
}
