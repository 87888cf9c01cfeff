//! # surrogate-core
//!
//! Core traits and data model for the Surrogate proxy factory.
//!
//! This crate has minimal dependencies and defines the seams the rest of the
//! workspace plugs into:
//!
//! - [`Value`] / [`ArgList`] - the dynamic value model; argument lists have
//!   handle semantics so listeners mutate arguments by reference.
//! - [`Interceptable`] / [`TypeDescriptor`] - the object-like contract a
//!   proxy can stand in for, with a reflective surface snapshot queried once
//!   per proxy construction.
//! - [`InterceptionEvent`] - the payload dispatched to listeners before and
//!   after every intercepted call.
//! - [`EventBus`] / [`InterceptionListener`] - the synchronous, ordered
//!   publish/subscribe collaborator.
//! - [`HookMap`] / [`HookOutcome`] - the generated pre/post hook-pair
//!   contract; short-circuit decisions travel as a tagged variant.
//! - [`GeneratedMember`] / [`GeneratedCallSurface`] - catch-all synthesis as
//!   data, consumed by the proxy builder.
//! - [`ProxyBuilder`] / [`ProxyObject`] - the code-generation backend
//!   contract and the capability surface of a built proxy.
//!
//! # Error Types
//!
//! - [`ProxyError`] - Top-level error type
//! - [`DispatchError`] - Event-dispatch errors
//! - [`GenerationError`] - Backend generation errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod builder;
mod bus;
mod error;
mod event;
mod generated;
mod hook;
mod target;
mod value;

// Re-exports
pub use builder::{ProxyBuilder, ProxyObject};
pub use bus::{EventBus, InterceptionListener};
pub use error::{BoxError, DispatchError, GenerationError, ProxyError};
pub use event::InterceptionEvent;
pub use generated::{CallStep, GeneratedCallSurface, GeneratedMember};
pub use hook::{HookMap, HookOutcome, Invocation, PostHook, PreHook};
pub use target::{CATCH_ALL, Interceptable, TypeDescriptor};
pub use value::{ArgList, Value};
