//! Listener control over the call outcome: pre-phase short-circuits,
//! post-phase overrides, argument rewrites and error propagation.

use std::sync::Arc;
use surrogate::testing::{FailingListener, Gadget, ScriptedListener};
use surrogate::{ArgList, ProxyError, ProxyFactory, Value};

mod common;
use common::{args, harness, method_names};

fn first_method_proxy(h: &common::Harness) -> Arc<dyn surrogate::ProxyObject> {
    ProxyFactory::new(h.recorder.clone())
        .create_proxy(
            &Value::Object(Arc::new(Gadget)),
            &method_names(["firstMethod", "echoMethod"]),
            None,
        )
        .unwrap()
}

#[test]
fn pre_return_value_short_circuits_the_real_call() {
    let h = harness();
    h.bus.subscribe(
        "gadget.pre_first_method",
        ScriptedListener::new().with_return_value(Value::from("from listener")),
    );
    let proxy = first_method_proxy(&h);

    let result = proxy.call("firstMethod", &ArgList::new()).unwrap();

    assert_eq!(result, Value::from("from listener"));
    assert_eq!(
        h.recorder.event_names(),
        vec!["gadget.pre_first_method"],
        "a short-circuited call skips the post event"
    );
}

#[test]
fn pre_return_early_with_null_yields_null() {
    let h = harness();
    h.bus.subscribe(
        "gadget.pre_first_method",
        ScriptedListener::new().with_return_early(true),
    );
    let proxy = first_method_proxy(&h);

    let result = proxy.call("firstMethod", &ArgList::new()).unwrap();

    assert_eq!(result, Value::Null, "early return forwards the stored value");
    assert_eq!(h.recorder.event_names(), vec!["gadget.pre_first_method"]);
}

#[test]
fn pre_return_early_with_value_yields_that_value() {
    let h = harness();
    h.bus.subscribe(
        "gadget.pre_first_method",
        ScriptedListener::new()
            .with_return_early(true)
            .with_return_value(Value::Int(7)),
    );
    let proxy = first_method_proxy(&h);

    assert_eq!(
        proxy.call("firstMethod", &ArgList::new()).unwrap(),
        Value::Int(7)
    );
}

#[test]
fn post_return_value_without_early_flag_is_ignored() {
    let h = harness();
    h.bus.subscribe(
        "gadget.post_first_method",
        ScriptedListener::new().with_return_value(Value::from("ignored")),
    );
    let proxy = first_method_proxy(&h);

    let result = proxy.call("firstMethod", &ArgList::new()).unwrap();

    assert_eq!(
        result,
        Value::from("firstMethod"),
        "without return_early the real value stands"
    );
}

#[test]
fn post_return_early_replaces_the_real_value() {
    let h = harness();
    h.bus.subscribe(
        "gadget.post_first_method",
        ScriptedListener::new()
            .with_return_early(true)
            .with_return_value(Value::from("overridden")),
    );
    let proxy = first_method_proxy(&h);

    assert_eq!(
        proxy.call("firstMethod", &ArgList::new()).unwrap(),
        Value::from("overridden")
    );
}

#[test]
fn post_return_early_with_null_override_yields_null() {
    let h = harness();
    h.bus.subscribe(
        "gadget.post_first_method",
        ScriptedListener::new()
            .with_return_early(true)
            .with_return_value(Value::Null),
    );
    let proxy = first_method_proxy(&h);

    assert_eq!(
        proxy.call("firstMethod", &ArgList::new()).unwrap(),
        Value::Null,
        "an explicit null override replaces the real value"
    );
}

#[test]
fn post_return_early_alone_replaces_with_the_real_value() {
    // The post payload is seeded with the real return value, so flagging
    // return_early without storing anything changes nothing observable.
    let h = harness();
    h.bus.subscribe(
        "gadget.post_first_method",
        ScriptedListener::new().with_return_early(true),
    );
    let proxy = first_method_proxy(&h);

    assert_eq!(
        proxy.call("firstMethod", &ArgList::new()).unwrap(),
        Value::from("firstMethod")
    );
}

#[test]
fn without_listeners_the_real_value_flows_through() {
    let h = harness();
    let proxy = first_method_proxy(&h);

    assert_eq!(
        proxy.call("firstMethod", &ArgList::new()).unwrap(),
        Value::from("firstMethod")
    );
    assert_eq!(h.recorder.count(), 2, "both events still dispatch");
}

#[test]
fn pre_listener_argument_rewrite_reaches_the_real_call() {
    let h = harness();
    h.bus.subscribe(
        "gadget.pre_echo_method",
        ScriptedListener::new().with_param(0, Value::from("rewritten")),
    );
    let proxy = first_method_proxy(&h);

    let result = proxy
        .call("echoMethod", &args([Value::from("original")]))
        .unwrap();

    assert_eq!(
        result,
        Value::from("rewritten"),
        "params are shared, so the rewrite is visible to the target"
    );
}

#[test]
fn listener_error_aborts_the_call() {
    let h = harness();
    h.bus
        .subscribe("gadget.pre_first_method", FailingListener::new("boom"));
    let proxy = first_method_proxy(&h);

    let err = proxy.call("firstMethod", &ArgList::new()).unwrap_err();

    assert!(matches!(err, ProxyError::Dispatch(_)));
    assert_eq!(
        h.recorder.event_names(),
        vec!["gadget.pre_first_method"],
        "the real call and the post event are abandoned"
    );
}
