//! Dynamic value model shared by targets, proxies and listeners.
//!
//! Intercepted calls move untyped data: a method invocation carries a list of
//! [`Value`]s in, and one [`Value`] out. Argument lists are [`ArgList`]s, a
//! shared container with handle semantics: cloning an `ArgList` clones the
//! handle, not the elements, so a listener mutating `params` during dispatch
//! is mutating the very list the real method will receive.

use crate::target::Interceptable;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// A dynamically typed value flowing through intercepted calls.
///
/// `Null` doubles as the "no value" marker in the interception contract: a
/// PRE event starts with a `Null` return value, and a listener storing a
/// non-null value there short-circuits the real call.
#[derive(Clone, Default)]
pub enum Value {
    /// The absence of a value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A string.
    Str(String),
    /// A shared list; see [`ArgList`] for its reference semantics.
    List(ArgList),
    /// An object-like value that can back a proxy.
    Object(Arc<dyn Interceptable>),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the string content, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the object handle, if this is an `Object`.
    pub fn as_object(&self) -> Option<&Arc<dyn Interceptable>> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Borrow the shared list handle, if this is a `List`.
    pub fn as_list(&self) -> Option<&ArgList> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// A short label for the value's shape, used in error messages.
    pub fn type_label(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Object(_) => "object",
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(v) => write!(f, "Bool({v})"),
            Value::Int(v) => write!(f, "Int({v})"),
            Value::Float(v) => write!(f, "Float({v})"),
            Value::Str(v) => write!(f, "Str({v:?})"),
            Value::List(v) => write!(f, "List({v:?})"),
            Value::Object(object) => write!(f, "Object({})", object.descriptor().type_name()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            // Objects compare by identity, not structure.
            (Value::Object(a), Value::Object(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::List(ArgList::from_values(values))
    }
}

impl From<Arc<dyn Interceptable>> for Value {
    fn from(object: Arc<dyn Interceptable>) -> Self {
        Value::Object(object)
    }
}

/// A shared, indexable argument container.
///
/// Plays the by-reference role the interception contract requires: the same
/// handle is stored in the event payload and handed to the real method, so
/// element mutations made by listeners are visible downstream. Nested `List`
/// values are themselves shared, which is what gives catch-all argument
/// bundles per-element reference semantics.
#[derive(Clone, Default)]
pub struct ArgList(Arc<Mutex<Vec<Value>>>);

impl ArgList {
    /// Create an empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an argument list holding the given values.
    pub fn from_values(values: Vec<Value>) -> Self {
        Self(Arc::new(Mutex::new(values)))
    }

    /// Clone out the element at `index`.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.lock().get(index).cloned()
    }

    /// Clone out the first element.
    pub fn first(&self) -> Option<Value> {
        self.get(0)
    }

    /// Replace the element at `index`. Returns `false` if out of bounds.
    pub fn set(&self, index: usize, value: Value) -> bool {
        let mut values = self.0.lock();
        match values.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Append a value.
    pub fn push(&self, value: Value) {
        self.0.lock().push(value);
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.0.lock().len()
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }

    /// Clone the contents out into a plain `Vec`.
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.lock().clone()
    }
}

impl fmt::Debug for ArgList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.to_vec()).finish()
    }
}

impl PartialEq for ArgList {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.to_vec() == other.to_vec()
    }
}

impl From<Vec<Value>> for ArgList {
    fn from(values: Vec<Value>) -> Self {
        Self::from_values(values)
    }
}

impl FromIterator<Value> for ArgList {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from_values(iter.into_iter().collect())
    }
}
