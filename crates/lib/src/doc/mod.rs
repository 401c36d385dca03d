//! Document-level access API.
//!
//! The [`Doc`] type is a read-only handle on one mapping node of a parsed
//! document. Every accessor takes a `/`-separated [`Path`], resolves it, and
//! coerces whatever it finds into the requested type.
//!
//! # Fallbacks
//!
//! Accessors take an `Option` fallback. The fallback only covers *absence*: if
//! nothing exists at the path, the fallback is returned instead of
//! [`AccessError::NotFound`]. A value that exists but has the wrong shape is
//! always [`AccessError::InvalidType`], fallback or not.
//!
//! Each accessor has a `*_value` twin that never fails. It returns the fallback
//! (or the type's zero value) on any error.
//!
//! # Usage
//!
//! ```
//! use mappath::Doc;
//!
//! let doc = Doc::from_json_str(r#"{
//!     "server": {"port": "8080", "tls": "yes"},
//!     "peers": [{"host": "a"}, {"host": "b"}]
//! }"#)?;
//!
//! assert_eq!(doc.get_int("server/port", None)?, 8080);
//! assert_eq!(doc.get_bool("server/tls", None)?, true);
//! assert_eq!(doc.get_int("server/workers", Some(4))?, 4);
//! assert_eq!(doc.get_string("peers/1/host", None)?, "b");
//!
//! for peer in doc.get_children("peers", None)? {
//!     assert!(peer.has("host"));
//! }
//! # Ok::<(), mappath::Error>(())
//! ```

use std::fmt;

pub mod coerce;
pub mod errors;
mod load;
pub mod path;
pub mod resolve;
pub mod value;

// Convenience re-exports for core Doc types
pub use coerce::FromValue;
pub use errors::{AccessError, CoerceError};
pub use load::Format;
pub use path::{Path, PathBuf};
pub use resolve::resolve;
pub use value::{Kind, Map, Value};

// Re-export the macro from crate root
pub use crate::path;

/// Result type for accessor calls.
pub type AccessResult<T> = std::result::Result<T, AccessError>;

/// A read-only handle on a mapping node.
///
/// `Doc` owns its mapping. Handles produced by [`Doc::get_child`] and
/// [`Doc::get_children`] own a copy of the sub-mapping they wrap, so a child
/// handle stays valid independently of its parent.
///
/// # Examples
///
/// ```
/// # use mappath::{Doc, doc::Value};
/// let doc = Doc::new()
///     .with("name", "Alice")
///     .with("age", 30)
///     .with("scores", vec![1.5, 2.5]);
///
/// assert_eq!(doc.get_string("name", None).unwrap(), "Alice");
/// assert_eq!(doc.get_string("age", None).unwrap(), "30");
/// assert_eq!(doc.get_ints("scores", None).unwrap(), vec![1, 2]);
/// assert_eq!(doc.get("scores/0"), Some(&Value::Float(1.5)));
/// ```
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
#[serde(transparent)]
pub struct Doc {
    root: Map,
}

fn not_found(path: &Path) -> AccessError {
    AccessError::NotFound {
        path: path.as_str().to_string(),
    }
}

impl Doc {
    /// Creates a new empty document
    pub fn new() -> Self {
        Self { root: Map::new() }
    }

    /// Wraps an already-decoded mapping
    pub fn from_map(root: Map) -> Self {
        Self { root }
    }

    /// Returns the underlying mapping
    pub fn root(&self) -> &Map {
        &self.root
    }

    /// Consumes the handle, returning the underlying mapping
    pub fn into_map(self) -> Map {
        self.root
    }

    /// Returns the number of direct keys
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Returns true if the document has no keys
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns an iterator over the direct keys, in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.root.keys()
    }

    /// Returns an iterator over the direct key-value pairs, in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.root.iter()
    }

    /// Builder method to insert a direct key and return self.
    ///
    /// The key is used verbatim; it is not interpreted as a path.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.root.insert(key.into(), value.into());
        self
    }

    /// Renders the document as compact JSON.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// Raw access
impl Doc {
    /// Gets the raw value at a path
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&Value> {
        resolve(&self.root, path.as_ref())
    }

    /// Returns true if something exists at the path
    pub fn has(&self, path: impl AsRef<Path>) -> bool {
        self.get(path).is_some()
    }

    /// Gets the raw value at a path, or [`AccessError::NotFound`]
    pub fn lookup(&self, path: impl AsRef<Path>) -> AccessResult<&Value> {
        let path = path.as_ref();
        self.get(path).ok_or_else(|| not_found(path))
    }

    /// Gets a copy of the raw value at a path, or `fallback` if nothing is there
    pub fn get_or(&self, path: impl AsRef<Path>, fallback: impl Into<Value>) -> Value {
        self.get(path).cloned().unwrap_or_else(|| fallback.into())
    }
}

// Generic coercion
impl Doc {
    /// Gets the value at a path converted to `T`.
    ///
    /// Returns `fallback` if nothing exists at the path and a fallback was
    /// given. A value that cannot be converted fails even with a fallback.
    ///
    /// ```
    /// # use mappath::{Doc, doc::AccessError};
    /// let doc = Doc::new().with("name", "Alice");
    ///
    /// assert_eq!(doc.get_as::<String>("name", None).unwrap(), "Alice");
    /// assert_eq!(doc.get_as("missing", Some(7i64)).unwrap(), 7);
    /// assert!(doc.get_as::<i64>("missing", None).unwrap_err().is_not_found());
    /// assert!(doc.get_as("name", Some(7i64)).unwrap_err().is_type_error());
    /// ```
    pub fn get_as<T: FromValue>(
        &self,
        path: impl AsRef<Path>,
        fallback: Option<T>,
    ) -> AccessResult<T> {
        let path = path.as_ref();
        match resolve(&self.root, path) {
            Some(value) => T::from_value(value).map_err(|err| err.at(path.as_str(), None)),
            None => fallback.ok_or_else(|| not_found(path)),
        }
    }

    /// Like [`Doc::get_as`], but returns `fallback` or `T::default()` on any error.
    pub fn get_as_or_default<T: FromValue + Default>(
        &self,
        path: impl AsRef<Path>,
        fallback: Option<T>,
    ) -> T {
        self.get_as(path, None)
            .unwrap_or_else(|_| fallback.unwrap_or_default())
    }

    /// Gets the list at a path with each element converted to `T`.
    ///
    /// - A missing path returns `fallback`, or [`AccessError::NotFound`].
    /// - A non-list value is [`AccessError::InvalidType`].
    /// - An empty list is returned as-is without checking `T`.
    /// - A `T` with no element conversion is [`AccessError::UnsupportedType`].
    /// - The first element that fails to convert aborts the call with
    ///   [`AccessError::InvalidType`] carrying its index.
    ///
    /// ```
    /// # use mappath::{Doc, doc::Value};
    /// let doc = Doc::new()
    ///     .with("ports", vec![Value::from("80"), Value::from(443), Value::from(8080.0)])
    ///     .with("empty", Vec::<Value>::new());
    ///
    /// assert_eq!(doc.get_list::<i64>("ports", None).unwrap(), vec![80, 443, 8080]);
    /// assert!(doc.get_list::<i64>("empty", None).unwrap().is_empty());
    /// assert!(doc.get_list::<Value>("ports", None).unwrap_err().is_unsupported());
    /// ```
    pub fn get_list<T: FromValue>(
        &self,
        path: impl AsRef<Path>,
        fallback: Option<Vec<T>>,
    ) -> AccessResult<Vec<T>> {
        let path = path.as_ref();
        let Some(value) = resolve(&self.root, path) else {
            return fallback.ok_or_else(|| not_found(path));
        };
        let Value::List(items) = value else {
            return Err(CoerceError::new(value.kind(), Kind::List).at(path.as_str(), None));
        };
        if items.is_empty() {
            return Ok(Vec::new());
        }
        if !T::KIND.is_list_element() {
            return Err(AccessError::UnsupportedType { target: T::KIND });
        }

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                T::from_value(item).map_err(|err| err.at(path.as_str(), Some(index)))
            })
            .collect()
    }

    /// Like [`Doc::get_list`], but returns `fallback` or an empty list on any error.
    pub fn list_value<T: FromValue>(
        &self,
        path: impl AsRef<Path>,
        fallback: Option<Vec<T>>,
    ) -> Vec<T> {
        self.get_list(path, None)
            .unwrap_or_else(|_| fallback.unwrap_or_default())
    }
}

// Scalar accessors
impl Doc {
    /// Gets a bool. Strings `true`/`yes`/`false`/`no` and numbers convert.
    pub fn get_bool(&self, path: impl AsRef<Path>, fallback: Option<bool>) -> AccessResult<bool> {
        self.get_as(path, fallback)
    }

    /// Gets a bool, or `fallback`/`false` on any error
    pub fn bool_value(&self, path: impl AsRef<Path>, fallback: Option<bool>) -> bool {
        self.get_as_or_default(path, fallback)
    }

    /// Gets an integer. Floats truncate toward zero; strings are parsed.
    pub fn get_int(&self, path: impl AsRef<Path>, fallback: Option<i64>) -> AccessResult<i64> {
        self.get_as(path, fallback)
    }

    /// Gets an integer, or `fallback`/`0` on any error
    pub fn int_value(&self, path: impl AsRef<Path>, fallback: Option<i64>) -> i64 {
        self.get_as_or_default(path, fallback)
    }

    /// Gets a float. Integers widen; strings are parsed.
    pub fn get_float(&self, path: impl AsRef<Path>, fallback: Option<f64>) -> AccessResult<f64> {
        self.get_as(path, fallback)
    }

    /// Gets a float, or `fallback`/`0.0` on any error
    pub fn float_value(&self, path: impl AsRef<Path>, fallback: Option<f64>) -> f64 {
        self.get_as_or_default(path, fallback)
    }

    /// Gets a string. Scalars are formatted; floats use 9 fractional digits.
    pub fn get_string(
        &self,
        path: impl AsRef<Path>,
        fallback: Option<String>,
    ) -> AccessResult<String> {
        self.get_as(path, fallback)
    }

    /// Gets a string, or `fallback`/`""` on any error
    pub fn string_value(&self, path: impl AsRef<Path>, fallback: Option<String>) -> String {
        self.get_as_or_default(path, fallback)
    }

    /// Gets a copy of the mapping at a path
    pub fn get_map(&self, path: impl AsRef<Path>, fallback: Option<Map>) -> AccessResult<Map> {
        self.get_as(path, fallback)
    }

    /// Gets a mapping, or `fallback`/an empty mapping on any error
    pub fn map_value(&self, path: impl AsRef<Path>, fallback: Option<Map>) -> Map {
        self.get_as_or_default(path, fallback)
    }

    /// Gets a handle on the mapping at a path.
    ///
    /// Fails with [`AccessError::InvalidType`] if the path holds anything but a
    /// mapping.
    pub fn get_child(&self, path: impl AsRef<Path>, fallback: Option<Doc>) -> AccessResult<Doc> {
        self.get_as(path, fallback)
    }

    /// Gets a handle, or `fallback`/an empty handle on any error
    pub fn child_value(&self, path: impl AsRef<Path>, fallback: Option<Doc>) -> Doc {
        self.get_as_or_default(path, fallback)
    }
}

// List accessors
impl Doc {
    /// Gets a list of bools
    pub fn get_bools(
        &self,
        path: impl AsRef<Path>,
        fallback: Option<Vec<bool>>,
    ) -> AccessResult<Vec<bool>> {
        self.get_list(path, fallback)
    }

    pub fn bools_value(&self, path: impl AsRef<Path>, fallback: Option<Vec<bool>>) -> Vec<bool> {
        self.list_value(path, fallback)
    }

    /// Gets a list of integers
    pub fn get_ints(
        &self,
        path: impl AsRef<Path>,
        fallback: Option<Vec<i64>>,
    ) -> AccessResult<Vec<i64>> {
        self.get_list(path, fallback)
    }

    pub fn ints_value(&self, path: impl AsRef<Path>, fallback: Option<Vec<i64>>) -> Vec<i64> {
        self.list_value(path, fallback)
    }

    /// Gets a list of floats
    pub fn get_floats(
        &self,
        path: impl AsRef<Path>,
        fallback: Option<Vec<f64>>,
    ) -> AccessResult<Vec<f64>> {
        self.get_list(path, fallback)
    }

    pub fn floats_value(&self, path: impl AsRef<Path>, fallback: Option<Vec<f64>>) -> Vec<f64> {
        self.list_value(path, fallback)
    }

    /// Gets a list of strings
    pub fn get_strings(
        &self,
        path: impl AsRef<Path>,
        fallback: Option<Vec<String>>,
    ) -> AccessResult<Vec<String>> {
        self.get_list(path, fallback)
    }

    pub fn strings_value(
        &self,
        path: impl AsRef<Path>,
        fallback: Option<Vec<String>>,
    ) -> Vec<String> {
        self.list_value(path, fallback)
    }

    /// Gets a list of mappings
    pub fn get_maps(
        &self,
        path: impl AsRef<Path>,
        fallback: Option<Vec<Map>>,
    ) -> AccessResult<Vec<Map>> {
        self.get_list(path, fallback)
    }

    pub fn maps_value(&self, path: impl AsRef<Path>, fallback: Option<Vec<Map>>) -> Vec<Map> {
        self.list_value(path, fallback)
    }

    /// Gets a handle for each mapping in a list, in list order
    pub fn get_children(
        &self,
        path: impl AsRef<Path>,
        fallback: Option<Vec<Doc>>,
    ) -> AccessResult<Vec<Doc>> {
        self.get_list(path, fallback)
    }

    pub fn children_value(&self, path: impl AsRef<Path>, fallback: Option<Vec<Doc>>) -> Vec<Doc> {
        self.list_value(path, fallback)
    }
}

/// A handle converts from a mapping exactly like [`Map`] does.
impl FromValue for Doc {
    const KIND: Kind = Kind::Map;

    fn from_value(value: &Value) -> Result<Self, CoerceError> {
        Map::from_value(value).map(Doc::from_map)
    }
}

impl From<Map> for Doc {
    fn from(root: Map) -> Self {
        Doc::from_map(root)
    }
}

impl From<Doc> for Value {
    fn from(doc: Doc) -> Self {
        Value::Map(doc.root)
    }
}

impl FromIterator<(String, Value)> for Doc {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Doc::from_map(iter.into_iter().collect())
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.root.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}
