//! Standard proxy builders.
//!
//! Two mutually exclusive shapes behind the one [`ProxyBuilder`] contract
//! from `surrogate-core`:
//!
//! - [`ValueHolderBuilder`] - the proxy holds the target and can be
//!   unwrapped.
//! - [`ScopeLocalizerBuilder`] - the proxy indirects calls without an
//!   explicit holder.
//!
//! Both share the call-time interception machinery and a per-builder plan
//! cache, so repeated builds over the same `(type name, method set, magic
//! surface)` shape reuse the compiled structure.
//!
//! [`ProxyBuilder`]: surrogate_core::ProxyBuilder

mod holder;
mod localizer;
mod plan;
mod proxy;

pub use holder::{ValueHolderBuilder, ValueHolderProxy};
pub use localizer::{ScopeLocalizedProxy, ScopeLocalizerBuilder};
