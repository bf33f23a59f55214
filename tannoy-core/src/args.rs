//! Named-argument payloads.
//!
//! A fired occurrence carries its values as an [`Args`] bag: a mapping from
//! argument name to opaque [`Value`]. The registry validates the bag's key
//! set against the declared contract and otherwise never looks inside a
//! value; handlers recover concrete types with [`Args::get`].

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A single named-argument value.
///
/// `Value` wraps the payload in an `Arc`, making cloning O(1): the same
/// occurrence can be delivered to every handler, and recorded by test
/// doubles, without copying the underlying data. The payload's type is
/// opaque to the registry; only the handler that knows what an argument
/// carries downcasts it back.
///
/// # Example
///
/// ```rust,ignore
/// let value = Value::new(String::from("Hello There"));
/// assert_eq!(value.downcast_ref::<String>().unwrap(), "Hello There");
/// assert!(value.downcast_ref::<u32>().is_none());
/// ```
#[derive(Clone)]
pub struct Value {
    payload: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Value {
    /// Wrap an owned payload.
    pub fn new<T: Any + Send + Sync>(payload: T) -> Self {
        Self {
            payload: Arc::new(payload),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Borrow the payload as `T`, if that is its concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref()
    }

    /// Whether the payload's concrete type is `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.payload.is::<T>()
    }

    /// The payload's type name, for diagnostics only.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Value").field(&self.type_name).finish()
    }
}

/// The keyword-style argument bag delivered to handlers.
///
/// Keys are kept sorted, so diagnostics and iteration order are stable
/// regardless of insertion order; the declared contract is a set, not a
/// sequence, on the fire path.
///
/// # Example
///
/// ```rust,ignore
/// let args = Args::new()
///     .with("user", "|Nyx|")
///     .with("message", String::from("Hello There"));
/// assert_eq!(args.get::<&str>("user"), Some(&"|Nyx|"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Args {
    values: BTreeMap<String, Value>,
}

impl Args {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a payload under `name`, replacing any previous entry.
    pub fn insert<T: Any + Send + Sync>(&mut self, name: &str, payload: T) {
        self.insert_value(name, Value::new(payload));
    }

    /// Insert an already-wrapped [`Value`] under `name`.
    pub fn insert_value(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_owned(), value);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with<T: Any + Send + Sync>(mut self, name: &str, payload: T) -> Self {
        self.insert(name, payload);
        self
    }

    /// Borrow the payload under `name` as `T`.
    ///
    /// `None` when the name is absent or the payload is not a `T`.
    pub fn get<T: Any>(&self, name: &str) -> Option<&T> {
        self.values.get(name).and_then(Value::downcast_ref)
    }

    /// The raw [`Value`] under `name`.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Whether the bag contains `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Argument names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of arguments in the bag.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Build an [`Args`] bag with keyword syntax.
///
/// Each `name = value` pair becomes one named argument; names follow the
/// same identifier rules as `declare` by construction, since they are Rust
/// identifiers.
///
/// # Example
///
/// ```rust,ignore
/// let args = args! {
///     user = "|Nyx|",
///     target = "Tritium",
///     message = String::from("Hello There"),
/// };
/// ```
#[macro_export]
macro_rules! args {
    () => { $crate::Args::new() };
    ($($name:ident = $value:expr),+ $(,)?) => {{
        let mut bag = $crate::Args::new();
        $( bag.insert(stringify!($name), $value); )+
        bag
    }};
}
