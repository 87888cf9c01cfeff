//! Error types for Surrogate.
//!
//! Structured hierarchy using `thiserror`:
//!
//! - [`ProxyError`] - Top-level error for proxy construction and invocation
//! - [`DispatchError`] - Errors raised while dispatching interception events
//! - [`GenerationError`] - Errors from the proxy-generation backend
//!
//! Nothing here is caught or retried internally: construction errors surface
//! from `create_proxy`, call-time errors surface from the intercepted call,
//! and listener failures interrupt the pre/post sequence.

use std::path::PathBuf;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for proxy construction and invocation.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// The proxy target was not an object-like value.
    #[error("object-like value expected, got {0}")]
    InvalidArgument(&'static str),

    /// No method of that name exists on the type.
    ///
    /// Targets raise this variant themselves for undeclared calls, and the
    /// generated catch-all raises it for names outside its allowed surface,
    /// so proxy and native failure shapes are indistinguishable to callers.
    #[error("no such method {type_name}::{method}")]
    MethodNotFound {
        /// Declared name of the undecorated target type.
        type_name: String,
        /// The attempted method name.
        method: String,
    },

    /// An error occurred while dispatching an interception event.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// The generation backend could not produce the proxy.
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),

    /// A custom error surfaced by a target implementation.
    #[error(transparent)]
    Custom(BoxError),
}

impl ProxyError {
    /// Build a [`ProxyError::MethodNotFound`] for the given slot.
    pub fn method_not_found(type_name: impl Into<String>, method: impl Into<String>) -> Self {
        ProxyError::MethodNotFound {
            type_name: type_name.into(),
            method: method.into(),
        }
    }
}

/// Errors raised while dispatching interception events.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A listener failed; the intercepted call is abandoned.
    #[error("listener failed while handling {event}")]
    Listener {
        /// Full name of the event being dispatched.
        event: String,
        /// The listener's error.
        #[source]
        source: BoxError,
    },
}

/// Errors from the proxy-generation backend.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// A generated member would override a sealed (non-overridable) slot.
    #[error("cannot override sealed method {type_name}::{method}")]
    SealedSlot {
        /// Declared name of the target type.
        type_name: String,
        /// The sealed slot name.
        method: String,
    },

    /// The generated-artifacts location could not be prepared.
    #[error("cannot prepare generated-artifacts location {}", path.display())]
    Artifacts {
        /// The configured artifacts directory.
        path: PathBuf,
        /// The underlying filesystem error.
        #[source]
        source: std::io::Error,
    },
}

// Convenience conversion for target implementations.
impl From<BoxError> for ProxyError {
    fn from(err: BoxError) -> Self {
        ProxyError::Custom(err)
    }
}
