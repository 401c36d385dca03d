//! Path types for hierarchical document access.
//!
//! A path is a string of segments separated by `/`. Each segment is either a
//! mapping key or a base-10 index into a sequence. There is no escaping, so a
//! key that itself contains `/` cannot be addressed. The Path/PathBuf types
//! follow the same borrowed/owned pattern as std::path::Path/PathBuf.
//!
//! # Core Types
//!
//! - [`Path`] - An unsized borrowed path type (always behind a reference)
//! - [`PathBuf`] - An owned path type that can be constructed and extended
//!
//! Paths are never normalized. `"a//b"`, `"/a"` and `"a/"` keep their empty
//! segments, and an empty segment never matches anything during resolution.
//!
//! # Usage
//!
//! ```rust
//! use mappath::doc::{Path, PathBuf};
//! use mappath::path;
//!
//! let path = Path::new("servers/0/host");
//! assert_eq!(path.segments().collect::<Vec<_>>(), vec!["servers", "0", "host"]);
//!
//! let built = PathBuf::new().push("servers").push_index(0).push("host");
//! assert_eq!(built.as_str(), "servers/0/host");
//!
//! let from_macro = path!("servers", 0, "host");
//! assert_eq!(from_macro, built);
//! ```

use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

use crate::constants::PATH_SEPARATOR;

/// An owned path for hierarchical document access.
///
/// # Examples
///
/// ```rust
/// # use mappath::doc::PathBuf;
/// # use std::str::FromStr;
/// let path = PathBuf::from_str("user/profile/name").unwrap();
/// assert_eq!(path.len(), 3);
///
/// let path = PathBuf::new().push("user").push("profile").push("name");
/// let segments: Vec<&str> = path.segments().collect();
/// assert_eq!(segments, vec!["user", "profile", "name"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PathBuf {
    inner: String,
}

/// A borrowed path for hierarchical document access.
///
/// `Path` is the borrowed counterpart to `PathBuf`, similar to how `&str`
/// relates to `String`. Any string is a valid `Path`.
///
/// This type is unsized and must always be used behind a reference.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

impl Path {
    /// Wraps a string slice as a `Path`.
    pub fn new<S: AsRef<str> + ?Sized>(s: &S) -> &Path {
        let s = s.as_ref();
        // SAFETY: Path is repr(transparent) over str
        unsafe { &*(s as *const str as *const Path) }
    }

    /// Returns an iterator over every segment, including empty ones.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.inner.split(PATH_SEPARATOR)
    }

    /// Returns the number of segments in the path.
    pub fn len(&self) -> usize {
        if self.inner.is_empty() {
            0
        } else {
            self.segments().count()
        }
    }

    /// Returns `true` if the path is the empty string.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the last segment of the path, or `None` if empty.
    pub fn last_segment(&self) -> Option<&str> {
        if self.inner.is_empty() {
            None
        } else {
            self.inner.rsplit(PATH_SEPARATOR).next()
        }
    }

    /// Returns the path without its last segment, or `None` for single-segment paths.
    pub fn parent(&self) -> Option<&Path> {
        self.inner
            .rfind(PATH_SEPARATOR)
            .map(|idx| Path::new(&self.inner[..idx]))
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Converts this `Path` to an owned `PathBuf`.
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf {
            inner: self.inner.to_string(),
        }
    }
}

impl PathBuf {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Appends a segment (or a pre-joined run of segments) to the end of this path.
    ///
    /// The segment is taken verbatim; a `/` inside it splits it into several
    /// segments.
    ///
    /// ```rust
    /// # use mappath::doc::PathBuf;
    /// let path = PathBuf::new().push("user").push("profile/name");
    /// assert_eq!(path.as_str(), "user/profile/name");
    /// assert_eq!(path.len(), 3);
    /// ```
    pub fn push(mut self, segment: impl AsRef<str>) -> Self {
        if !self.inner.is_empty() {
            self.inner.push(PATH_SEPARATOR);
        }
        self.inner.push_str(segment.as_ref());
        self
    }

    /// Appends a sequence index segment.
    pub fn push_index(self, index: usize) -> Self {
        self.push(index.to_string())
    }

    /// Joins this path with another path.
    pub fn join(self, other: impl AsRef<Path>) -> Self {
        let other = other.as_ref();
        if other.is_empty() {
            return self;
        }
        self.push(other.as_str())
    }

    /// Consumes the `PathBuf`, returning the underlying string.
    pub fn into_string(self) -> String {
        self.inner
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        Path::new(self.inner.as_str())
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for str {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<Path> for String {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for PathBuf {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self
    }
}

impl ToOwned for Path {
    type Owned = PathBuf;

    fn to_owned(&self) -> PathBuf {
        self.to_path_buf()
    }
}

impl FromStr for PathBuf {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            inner: s.to_string(),
        })
    }
}

impl From<&str> for PathBuf {
    fn from(s: &str) -> Self {
        Self {
            inner: s.to_string(),
        }
    }
}

impl From<String> for PathBuf {
    fn from(inner: String) -> Self {
        Self { inner }
    }
}

impl From<&Path> for PathBuf {
    fn from(path: &Path) -> Self {
        path.to_path_buf()
    }
}

impl PartialEq<Path> for PathBuf {
    fn eq(&self, other: &Path) -> bool {
        self.as_str() == other.as_str()
    }
}

impl PartialEq<&Path> for PathBuf {
    fn eq(&self, other: &&Path) -> bool {
        self.as_str() == other.as_str()
    }
}

impl PartialEq<str> for Path {
    fn eq(&self, other: &str) -> bool {
        &self.inner == other
    }
}

impl PartialEq<&str> for PathBuf {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.is_empty() {
            write!(f, "(empty path)")
        } else {
            write!(f, "{}", &self.inner)
        }
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.deref(), f)
    }
}

/// Constructs a path.
///
/// - `path!()` - Empty path (`PathBuf`)
/// - `path!("a/b/c")` - Single literal (`&'static Path`, no allocation)
/// - `path!("servers", 0, "host")` - Segments from anything `Display` (`PathBuf`)
///
/// # Examples
///
/// ```rust
/// # use mappath::path;
/// let literal = path!("servers/0/host");
/// let built = path!("servers", 0, "host");
/// assert_eq!(built, literal);
///
/// let name = "db";
/// let mixed = path!(name, "port");
/// assert_eq!(mixed.as_str(), "db/port");
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::doc::PathBuf::new()
    };

    ($single:literal) => {
        $crate::doc::Path::new(concat!($single))
    };

    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let path = $crate::doc::PathBuf::new().push($first.to_string());
        $(
            let path = path.push($rest.to_string());
        )*
        path
    }};
}
