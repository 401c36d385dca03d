//! Building a [`Doc`] from decoder output and files.
//!
//! Decoding is delegated to `serde_json` and (with the `yaml` feature)
//! `serde_yaml`. Their output is converted into [`Value`] once, here, and the
//! top level must be a mapping.

use std::{fs, path::Path as FsPath};

use super::{Doc, value::Value};
use crate::{Error, Result};

/// Serialization format of a document source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl Format {
    /// Picks a format from a file extension.
    ///
    /// `.yaml` and `.yml` select YAML when the `yaml` feature is enabled;
    /// everything else is JSON.
    pub fn from_extension(path: impl AsRef<FsPath>) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            #[cfg(feature = "yaml")]
            Some("yaml" | "yml") => Format::Yaml,
            _ => Format::Json,
        }
    }

    /// Returns the lower-case name of this format
    pub fn name(&self) -> &'static str {
        match self {
            Format::Json => "json",
            #[cfg(feature = "yaml")]
            Format::Yaml => "yaml",
        }
    }
}

impl Doc {
    /// Wraps a decoded value, which must be a mapping.
    ///
    /// ```
    /// # use mappath::{Doc, doc::Value};
    /// assert!(Doc::from_value(Value::from(vec![1, 2])).is_err());
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Map(root) => Ok(Doc::from_map(root)),
            other => Err(Error::InvalidRoot {
                found: other.kind(),
            }),
        }
    }

    /// Decodes bytes in the given format.
    pub fn from_slice(bytes: &[u8], format: Format) -> Result<Self> {
        match format {
            Format::Json => Self::from_json_slice(bytes),
            #[cfg(feature = "yaml")]
            Format::Yaml => Self::from_yaml_slice(bytes),
        }
    }

    /// Decodes a JSON document
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let decoded: serde_json::Value = serde_json::from_slice(bytes)?;
        Self::from_value(decoded.into())
    }

    /// Decodes a JSON document
    pub fn from_json_str(s: &str) -> Result<Self> {
        Self::from_json_slice(s.as_bytes())
    }

    /// Reads and decodes a JSON file
    pub fn from_json_file(path: impl AsRef<FsPath>) -> Result<Self> {
        Self::from_file_as(path.as_ref(), Format::Json)
    }

    /// Decodes a YAML document. Non-string mapping keys are stringified.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_slice(bytes: &[u8]) -> Result<Self> {
        let decoded: serde_yaml::Value = serde_yaml::from_slice(bytes)?;
        Self::from_value(decoded.into())
    }

    /// Decodes a YAML document. Non-string mapping keys are stringified.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Self::from_yaml_slice(s.as_bytes())
    }

    /// Reads and decodes a YAML file
    #[cfg(feature = "yaml")]
    pub fn from_yaml_file(path: impl AsRef<FsPath>) -> Result<Self> {
        Self::from_file_as(path.as_ref(), Format::Yaml)
    }

    /// Reads a file, picking the decoder from its extension.
    ///
    /// See [`Format::from_extension`].
    pub fn from_file(path: impl AsRef<FsPath>) -> Result<Self> {
        let path = path.as_ref();
        Self::from_file_as(path, Format::from_extension(path))
    }

    /// Reads a file and decodes it in the given format.
    pub fn from_file_as(path: impl AsRef<FsPath>, format: Format) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), format = format.name(), "loading document");
        let bytes = fs::read(path)?;
        Self::from_slice(&bytes, format)
    }
}

impl TryFrom<Value> for Doc {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Doc::from_value(value)
    }
}
