//! The interceptable-target contract and its reflective descriptor.
//!
//! A proxy can stand in for anything implementing [`Interceptable`]: a
//! string-keyed callable surface plus a [`TypeDescriptor`] describing it.
//! The descriptor is the capability query the factory runs *once* per
//! `create_proxy`; interception never re-inspects the target per call.

use crate::error::ProxyError;
use crate::value::{ArgList, Value};

/// Name of the catch-all invocation slot.
///
/// Invoking this slot routes a `(name, arguments)` pair through the target's
/// fallback path instead of a declared method. Request lists may contain the
/// literal identifier; the classifier treats it like any other absent name.
pub const CATCH_ALL: &str = "__call";

/// An object-like value whose method calls can be proxied.
///
/// `call` handles declared methods only; `call_any` is the native catch-all
/// entry point and defaults to the same method-not-found failure an
/// undeclared `call` raises, so targets without a fallback path need not
/// implement it. Targets with a native catch-all must also set the flag on
/// their descriptor.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot back a proxy",
    label = "missing `Interceptable` implementation",
    note = "Implement `descriptor` and `call` to make `{Self}` proxyable."
)]
pub trait Interceptable: Send + Sync + 'static {
    /// Snapshot of this object's callable surface.
    fn descriptor(&self) -> TypeDescriptor;

    /// Invoke a declared method.
    fn call(&self, method: &str, args: &ArgList) -> Result<Value, ProxyError>;

    /// Invoke the native catch-all slot with the real invoked name.
    fn call_any(&self, name: &str, _args: &ArgList) -> Result<Value, ProxyError> {
        Err(ProxyError::method_not_found(
            self.descriptor().type_name(),
            name,
        ))
    }
}

/// Reflective snapshot of a type's callable surface.
///
/// Built once by the target, consumed by the classifier and the proxy
/// builder. Sealed slots are names that may not be overridden by generated
/// members; trying to synthesize over one is a generation failure.
#[derive(Clone, Debug)]
pub struct TypeDescriptor {
    type_name: String,
    methods: Vec<String>,
    has_catch_all: bool,
    sealed: Vec<String>,
}

impl TypeDescriptor {
    /// Start a descriptor for the given type name.
    ///
    /// The name may be module-qualified; [`TypeDescriptor::short_name`]
    /// strips the path when deriving event namespaces.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            methods: Vec::new(),
            has_catch_all: false,
            sealed: Vec::new(),
        }
    }

    /// Declare the type's regular callable members.
    pub fn with_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods.extend(methods.into_iter().map(Into::into));
        self
    }

    /// Mark the type as having a native catch-all handler.
    pub fn with_catch_all(mut self) -> Self {
        self.has_catch_all = true;
        self
    }

    /// Declare slots that generated members may not override.
    pub fn with_sealed<I, S>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sealed.extend(slots.into_iter().map(Into::into));
        self
    }

    /// The full type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The type name with any module path stripped.
    pub fn short_name(&self) -> &str {
        self.type_name
            .rsplit("::")
            .next()
            .unwrap_or(&self.type_name)
    }

    /// Declared method names, in declaration order.
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// Whether `name` is a declared method (exact, case-sensitive).
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.iter().any(|method| method == name)
    }

    /// Whether the type has a native catch-all handler.
    pub fn has_catch_all(&self) -> bool {
        self.has_catch_all
    }

    /// Whether `name` is sealed against generated overrides.
    pub fn is_sealed(&self, name: &str) -> bool {
        self.sealed.iter().any(|slot| slot == name)
    }
}
