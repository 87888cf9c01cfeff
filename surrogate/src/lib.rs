//! # surrogate - Event-Dispatching Proxy Factory
//!
//! `surrogate` wraps arbitrary objects in generated proxies that publish
//! **pre** and **post** interception events around a chosen set of methods.
//! Listeners subscribed on the event bus may rewrite arguments in place,
//! short-circuit the real call, or replace its return value.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use surrogate::{ProxyFactory, SyncEventBus, Value};
//!
//! let bus = Arc::new(SyncEventBus::new());
//! bus.subscribe("gadget.pre_first_method", |event: &mut InterceptionEvent| {
//!     event.set_return_value(Value::from("cached"));
//!     Ok(())
//! });
//!
//! let factory = ProxyFactory::new(bus);
//! let proxy = factory.create_proxy(&target, &["firstMethod".into()], None)?;
//! ```
//!
//! Method names absent from the target's surface route through its catch-all
//! slot; when the target has none, the factory synthesizes one.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod classify;
mod factory;
mod namespace;
mod synthesize;

pub use crate::classify::{MethodClassification, classify};
pub use crate::factory::ProxyFactory;
pub use crate::namespace::{Phase, event_name, underscore};
pub use crate::synthesize::synthesize_catch_all;

pub use surrogate_core::{
    // Dynamic values
    ArgList,
    // Errors
    BoxError,
    // Catch-all slot name
    CATCH_ALL,
    CallStep,
    DispatchError,
    // Bus
    EventBus,
    GeneratedCallSurface,
    GeneratedMember,
    GenerationError,
    // Hooks
    HookMap,
    HookOutcome,
    // Target contract
    Interceptable,
    // Event payload
    InterceptionEvent,
    InterceptionListener,
    Invocation,
    PostHook,
    PreHook,
    ProxyBuilder,
    ProxyError,
    ProxyObject,
    TypeDescriptor,
    Value,
};

pub use surrogate_std::{
    CacheStrategy, ProxyConfig, ScopeLocalizedProxy, ScopeLocalizerBuilder, SyncEventBus,
    ValueHolderBuilder, ValueHolderProxy, registered_loader_paths,
};

/// Standard listener implementations.
pub mod listeners {
    pub use surrogate_std::listeners::LoggingListener;
}

/// Testing utilities.
pub mod testing {
    pub use surrogate_std::testing::{
        FailingListener, Gadget, GadgetWithCatchAll, RecordingBus, ScriptedListener, SealedGadget,
        TokenTurnstile,
    };
}

/// Prelude module - common imports for surrogate.
///
/// # Usage
///
/// ```rust,ignore
/// use surrogate::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        ArgList,
        BoxError,
        CATCH_ALL,
        DispatchError,
        EventBus,
        Interceptable,
        InterceptionEvent,
        InterceptionListener,
        ProxyError,
        ProxyFactory,
        ProxyObject,
        SyncEventBus,
        TypeDescriptor,
        Value,
    };
}
