#![allow(dead_code)]

use std::sync::Arc;
use surrogate::testing::RecordingBus;
use surrogate::{ArgList, SyncEventBus, Value};

// ============================================================================
// Test Harness
// ============================================================================

/// A [`SyncEventBus`] wrapped in a [`RecordingBus`], the wiring every
/// integration test starts from: subscribe on `bus`, hand `recorder` to the
/// factory, assert on `recorder.event_names()`.
pub struct Harness {
    pub bus: Arc<SyncEventBus>,
    pub recorder: Arc<RecordingBus>,
}

pub fn harness() -> Harness {
    let bus = Arc::new(SyncEventBus::new());
    let recorder = Arc::new(RecordingBus::new(bus.clone()));
    Harness { bus, recorder }
}

/// Shorthand for an [`ArgList`] of the given values.
pub fn args<const N: usize>(values: [Value; N]) -> ArgList {
    ArgList::from_values(values.into())
}

/// Method-name values the way callers hand them to `create_proxy`.
pub fn method_names<const N: usize>(names: [&str; N]) -> Vec<Value> {
    names.iter().map(|name| Value::from(*name)).collect()
}
