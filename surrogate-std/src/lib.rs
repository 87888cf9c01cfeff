//! # surrogate-std
//!
//! Standard implementations for the Surrogate proxy factory:
//!
//! - [`SyncEventBus`] - synchronous, registration-ordered event bus
//! - [`builder`] - the value-holder and scope-localized proxy builders with
//!   their shared plan cache
//! - [`ProxyConfig`] - generated-artifacts location and loader registration
//! - [`listeners`] - reusable listeners (logging)
//! - [`testing`] - recording bus, scripted listeners and sample targets

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod builder;
mod bus;
mod config;
pub mod listeners;
pub mod testing;

pub use builder::{
    ScopeLocalizedProxy, ScopeLocalizerBuilder, ValueHolderBuilder, ValueHolderProxy,
};
pub use bus::SyncEventBus;
pub use config::{CacheStrategy, ProxyConfig, registered_loader_paths};
