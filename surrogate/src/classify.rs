//! Method classification.
//!
//! Partitions a requested method list against the target's declared surface:
//! confirmed members get intercepted directly, absent names become "magic"
//! names routed through the catch-all slot. The classification is computed
//! once per proxy from the cached [`TypeDescriptor`], never per call.

use surrogate_core::{CATCH_ALL, TypeDescriptor, Value};

/// Outcome of classifying one proxy request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MethodClassification {
    intercepted: Vec<String>,
    magic: Vec<String>,
    needs_synthesis: bool,
}

impl MethodClassification {
    /// Method slots that get hook pairs, in request order; includes the
    /// catch-all slot when magic names were requested.
    pub fn intercepted(&self) -> &[String] {
        &self.intercepted
    }

    /// Requested names absent from the declared surface, in request order.
    pub fn magic(&self) -> &[String] {
        &self.magic
    }

    /// Whether a catch-all member must be synthesized (magic names exist
    /// and the target has no native catch-all).
    pub fn needs_synthesis(&self) -> bool {
        self.needs_synthesis
    }
}

/// Classify a requested method list against the target's surface.
///
/// Duplicates are tolerated and collapse to one entry. Non-string entries
/// cannot route anywhere and are silently skipped rather than rejected.
/// Explicitly requesting the literal catch-all
/// identifier on a target without one routes it into the magic set like any
/// other absent name, so synthesis still proceeds and augments.
pub fn classify(descriptor: &TypeDescriptor, requested: &[Value]) -> MethodClassification {
    let mut intercepted: Vec<String> = Vec::new();
    let mut magic: Vec<String> = Vec::new();

    for entry in requested {
        let Some(name) = entry.as_str() else {
            continue;
        };
        let exists =
            descriptor.has_method(name) || (name == CATCH_ALL && descriptor.has_catch_all());
        let bucket = if exists { &mut intercepted } else { &mut magic };
        if !bucket.iter().any(|seen| seen == name) {
            bucket.push(name.to_owned());
        }
    }

    let mut needs_synthesis = false;
    if !magic.is_empty() && !intercepted.iter().any(|name| name == CATCH_ALL) {
        intercepted.push(CATCH_ALL.to_owned());
        needs_synthesis = !descriptor.has_catch_all();
    }

    MethodClassification {
        intercepted,
        magic,
        needs_synthesis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::new("Gadget").with_methods(["firstMethod", "secondMethod"])
    }

    fn names(values: &[&str]) -> Vec<Value> {
        values.iter().map(|&name| Value::from(name)).collect()
    }

    #[test]
    fn declared_names_are_confirmed() {
        let classification = classify(&descriptor(), &names(&["firstMethod", "secondMethod"]));
        assert_eq!(classification.intercepted(), ["firstMethod", "secondMethod"]);
        assert!(classification.magic().is_empty());
        assert!(!classification.needs_synthesis());
    }

    #[test]
    fn absent_names_become_magic_and_append_the_catch_all() {
        let classification = classify(&descriptor(), &names(&["firstMethod", "thirdMethod"]));
        assert_eq!(classification.intercepted(), ["firstMethod", CATCH_ALL]);
        assert_eq!(classification.magic(), ["thirdMethod"]);
        assert!(classification.needs_synthesis());
    }

    #[test]
    fn native_catch_all_suppresses_synthesis() {
        let native = TypeDescriptor::new("Widget")
            .with_methods(["firstMethod"])
            .with_catch_all();
        let classification = classify(&native, &names(&["thirdMethod"]));
        assert_eq!(classification.intercepted(), [CATCH_ALL]);
        assert_eq!(classification.magic(), ["thirdMethod"]);
        assert!(!classification.needs_synthesis());
    }

    #[test]
    fn duplicates_collapse_preserving_order() {
        let classification = classify(
            &descriptor(),
            &names(&["secondMethod", "firstMethod", "secondMethod"]),
        );
        assert_eq!(classification.intercepted(), ["secondMethod", "firstMethod"]);
    }

    #[test]
    fn non_string_entries_are_skipped() {
        let requested = vec![Value::Int(7), Value::from("firstMethod"), Value::Null];
        let classification = classify(&descriptor(), &requested);
        assert_eq!(classification.intercepted(), ["firstMethod"]);
        assert!(classification.magic().is_empty());
    }

    #[test]
    fn explicit_catch_all_request_still_synthesizes() {
        let classification = classify(&descriptor(), &names(&[CATCH_ALL, "thirdMethod"]));
        assert_eq!(classification.magic(), [CATCH_ALL, "thirdMethod"]);
        assert_eq!(classification.intercepted(), [CATCH_ALL]);
        assert!(classification.needs_synthesis());
    }

    #[test]
    fn empty_request_intercepts_nothing() {
        let classification = classify(&descriptor(), &[]);
        assert!(classification.intercepted().is_empty());
        assert!(!classification.needs_synthesis());
    }
}
