//! Generated-member descriptors.
//!
//! The catch-all synthesizer does not emit code; it emits a typed
//! [`GeneratedMember`] describing the member the proxy builder must install:
//! slot name, parameter shape, the allowed-name [`GeneratedCallSurface`], and
//! the body as a sequence of [`CallStep`]s the builder compiles into its
//! dispatch plan.

use crate::target::CATCH_ALL;
use std::collections::BTreeSet;

/// One step of a generated member's body, expressed as data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallStep {
    /// Reject invoked names outside the allowed surface.
    Validate,
    /// Delegate to the underlying catch-all, or fail when none exists.
    DelegateOrFail,
    /// Run the pre/post interception dance around the delegation.
    Intercept,
}

/// The allowed magic names compiled into an exact match rule.
///
/// Any invocation whose name is not in the set fails with the same
/// method-not-found shape the undecorated target raises.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratedCallSurface {
    allowed: BTreeSet<String>,
}

impl GeneratedCallSurface {
    /// Compile a surface from the allowed names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact, case-sensitive membership test.
    pub fn permits(&self, name: &str) -> bool {
        self.allowed.contains(name)
    }

    /// The allowed names, ordered.
    pub fn allowed(&self) -> impl Iterator<Item = &str> {
        self.allowed.iter().map(String::as_str)
    }

    /// Number of allowed names.
    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    /// Whether the surface permits nothing.
    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }
}

/// A member definition synthesized for the proxy, as data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedMember {
    name: String,
    params: &'static [&'static str],
    surface: GeneratedCallSurface,
    body: Vec<CallStep>,
}

impl GeneratedMember {
    /// The catch-all member: `(name, arguments)` signature, validate-then-
    /// delegate-or-fail body wrapped in interception.
    pub fn catch_all(surface: GeneratedCallSurface) -> Self {
        Self {
            name: CATCH_ALL.to_owned(),
            params: &["name", "arguments"],
            surface,
            body: vec![CallStep::Validate, CallStep::DelegateOrFail, CallStep::Intercept],
        }
    }

    /// The slot this member occupies.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter names of the generated signature.
    pub fn params(&self) -> &[&str] {
        self.params
    }

    /// The allowed-name surface.
    pub fn surface(&self) -> &GeneratedCallSurface {
        &self.surface
    }

    /// The body steps, in order.
    pub fn body(&self) -> &[CallStep] {
        &self.body
    }

    /// Consume the member, keeping only its surface.
    pub fn into_surface(self) -> GeneratedCallSurface {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_match_is_exact_and_case_sensitive() {
        let surface = GeneratedCallSurface::new(["thirdMethod"]);
        assert!(surface.permits("thirdMethod"));
        assert!(!surface.permits("thirdmethod"));
        assert!(!surface.permits("third"));
        assert!(!surface.permits("thirdMethodX"));
    }
}
