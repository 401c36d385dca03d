//!
//! mappath: read-only path lookups into parsed JSON/YAML documents.
//!
//! Configuration-style data access: "get me the int at this path, or a default
//! if absent." Documents are loaded once into an immutable tree of
//! [`doc::Value`]s and queried through a [`Doc`] handle with `/`-separated
//! paths.
//!
//! ## Core Concepts
//!
//! * **Documents (`doc::Doc`)**: A read-only handle on one mapping node. Sub-mappings
//!   can be wrapped as handles of their own with `get_child`/`get_children`.
//! * **Paths (`doc::Path`)**: Strings like `servers/0/host`. Segments are map keys or
//!   list indices; there is no escaping and no wildcards.
//! * **Resolution (`doc::resolve`)**: Walks a path through maps and lists. Absence is
//!   not an error at this level.
//! * **Coercion (`doc::FromValue`)**: Converts whatever was found into the requested
//!   type, e.g. the string `"8080"` into an integer or `1.5` into `"1.500000000"`.
//!
//! ## Fallbacks
//!
//! Every accessor takes an optional fallback that replaces a missing value.
//! It never hides a value of the wrong type.
//!
//! ```
//! use mappath::Doc;
//!
//! let doc = Doc::from_json_str(r#"{"db": {"port": 5432, "name": "main"}}"#)?;
//! assert_eq!(doc.get_int("db/port", None)?, 5432);
//! assert_eq!(doc.get_int("db/pool", Some(8))?, 8);
//! assert!(doc.get_int("db/name", Some(8)).is_err());
//! # Ok::<(), mappath::Error>(())
//! ```

pub mod constants;
pub mod doc;

/// Re-export the `Doc` struct for easier access.
pub use doc::Doc;

/// Result type used throughout the mappath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the mappath library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "yaml")]
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The decoded document is not a mapping at the top level
    #[error("document root must be a map, found {found}")]
    InvalidRoot { found: doc::Kind },

    /// Structured access errors from the doc module
    #[error(transparent)]
    Access(doc::AccessError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Json(_) => "json",
            #[cfg(feature = "yaml")]
            Error::Yaml(_) => "yaml",
            Error::InvalidRoot { .. } | Error::Access(_) => "doc",
        }
    }

    /// Check if this error indicates nothing exists at a path.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Access(access_err) => access_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is a value of the wrong type.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Access(access_err) => access_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error came from decoding a document.
    pub fn is_decode_error(&self) -> bool {
        match self {
            Error::Json(_) | Error::InvalidRoot { .. } => true,
            #[cfg(feature = "yaml")]
            Error::Yaml(_) => true,
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Get the access error if this is one.
    pub fn as_access_error(&self) -> Option<&doc::AccessError> {
        match self {
            Error::Access(access_err) => Some(access_err),
            _ => None,
        }
    }
}
