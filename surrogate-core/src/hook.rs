//! Generated hook-pair contract.
//!
//! The factory synthesizes one PRE/POST closure pair per intercepted method
//! and hands them to the proxy builder as a [`HookMap`]. Hooks communicate
//! their decision through [`HookOutcome`], a tagged variant rather than a
//! mutated by-reference flag, so the host wrapper branches on the tag:
//!
//! - PRE `ShortCircuit(v)`: skip the real method *and* the POST hook,
//!   return `v`.
//! - POST `ShortCircuit(v)`: replace the real return value with `v`.
//! - `Continue`: keep going / keep the real value.

use crate::error::DispatchError;
use crate::target::Interceptable;
use crate::value::{ArgList, Value};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

/// What a hook decided about the call in flight.
#[derive(Clone, Debug, PartialEq)]
pub enum HookOutcome {
    /// Proceed with the normal call flow.
    Continue,
    /// Replace the call's result with the carried value.
    ShortCircuit(Value),
}

/// Everything a hook sees about the invocation it wraps.
///
/// `method` is the literal invoked slot; for catch-all routing the resolved
/// real name travels as the first element of `params`.
pub struct Invocation<'a> {
    /// Handle to the proxy being called.
    pub proxy: &'a Value,
    /// The real target instance.
    pub instance: &'a Arc<dyn Interceptable>,
    /// The literal invoked method slot.
    pub method: &'a str,
    /// The shared argument container.
    pub params: &'a ArgList,
}

/// Hook run before the real method.
pub type PreHook = Box<dyn Fn(&Invocation<'_>) -> Result<HookOutcome, DispatchError> + Send + Sync>;

/// Hook run after the real method, receiving its return value.
pub type PostHook =
    Box<dyn Fn(&Invocation<'_>, Value) -> Result<HookOutcome, DispatchError> + Send + Sync>;

/// Per-method hook pairs, keyed by method name.
///
/// Every intercepted method has a PRE hook; the POST hook may be absent (the
/// synthesized catch-all slot registers none).
#[derive(Default)]
pub struct HookMap {
    pre: HashMap<String, PreHook>,
    post: HashMap<String, PostHook>,
}

impl HookMap {
    /// Create an empty hook map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the PRE hook for a method.
    pub fn insert_pre(&mut self, method: impl Into<String>, hook: PreHook) {
        self.pre.insert(method.into(), hook);
    }

    /// Register the POST hook for a method.
    pub fn insert_post(&mut self, method: impl Into<String>, hook: PostHook) {
        self.post.insert(method.into(), hook);
    }

    /// Look up the PRE hook for a method.
    pub fn pre(&self, method: &str) -> Option<&PreHook> {
        self.pre.get(method)
    }

    /// Look up the POST hook for a method.
    pub fn post(&self, method: &str) -> Option<&PostHook> {
        self.post.get(method)
    }

    /// The set of intercepted method names (PRE hook keys).
    pub fn intercepted_names(&self) -> BTreeSet<String> {
        self.pre.keys().cloned().collect()
    }

    /// Whether no hooks are registered at all.
    pub fn is_empty(&self) -> bool {
        self.pre.is_empty() && self.post.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hook_map_tracks_registered_slots() {
        let mut hooks = HookMap::new();
        assert!(hooks.is_empty());

        hooks.insert_pre(
            "firstMethod",
            Box::new(|_: &Invocation<'_>| Ok(HookOutcome::Continue)),
        );
        hooks.insert_post(
            "firstMethod",
            Box::new(|_: &Invocation<'_>, value: Value| Ok(HookOutcome::ShortCircuit(value))),
        );

        assert!(!hooks.is_empty());
        assert!(hooks.pre("firstMethod").is_some());
        assert!(hooks.post("firstMethod").is_some());
        assert!(hooks.pre("secondMethod").is_none());
        let names: Vec<String> = hooks.intercepted_names().into_iter().collect();
        assert_eq!(names, ["firstMethod"]);
    }
}
