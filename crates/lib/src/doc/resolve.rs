//! Path resolution.
//!
//! Walks a [`Path`] through nested maps and lists. Absence is a plain `None`;
//! turning it into an error is the accessor layer's job.

use super::{
    path::Path,
    value::{Map, Value},
};

/// Resolves `path` against `root`, returning the value it points at.
///
/// - Map nodes descend by key.
/// - List nodes descend by a base-10 index in `[0, len)`.
/// - Scalars end the walk; remaining segments mean not found.
/// - The empty path and any empty segment never match.
///
/// # Examples
///
/// ```
/// # use mappath::doc::{Map, Path, Value, resolve};
/// let mut inner = Map::new();
/// inner.insert("b".to_string(), Value::from("x"));
/// let mut root = Map::new();
/// root.insert("a".to_string(), Value::List(vec![Value::Map(inner)]));
///
/// assert_eq!(resolve(&root, Path::new("a/0/b")), Some(&Value::from("x")));
/// assert_eq!(resolve(&root, Path::new("a/1/b")), None);
/// ```
pub fn resolve<'a>(root: &'a Map, path: &Path) -> Option<&'a Value> {
    if path.is_empty() {
        tracing::trace!("empty path never resolves");
        return None;
    }

    let mut segments = path.segments();
    // A non-empty path always yields at least one segment
    let first = segments.next()?;
    let mut current = lookup_key(root, first, path)?;

    for segment in segments {
        current = match current {
            Value::Map(map) => lookup_key(map, segment, path)?,
            Value::List(list) => lookup_index(list, segment, path)?,
            scalar => {
                tracing::trace!(
                    path = path.as_str(),
                    segment,
                    kind = %scalar.kind(),
                    "cannot descend into scalar"
                );
                return None;
            }
        };
    }

    Some(current)
}

fn lookup_key<'a>(map: &'a Map, segment: &str, path: &Path) -> Option<&'a Value> {
    if segment.is_empty() {
        tracing::trace!(path = path.as_str(), "empty segment never matches");
        return None;
    }
    let value = map.get(segment);
    if value.is_none() {
        tracing::trace!(path = path.as_str(), segment, "key not found");
    }
    value
}

fn lookup_index<'a>(list: &'a [Value], segment: &str, path: &Path) -> Option<&'a Value> {
    let Ok(index) = segment.parse::<usize>() else {
        tracing::trace!(path = path.as_str(), segment, "segment is not a list index");
        return None;
    };
    let value = list.get(index);
    if value.is_none() {
        tracing::trace!(
            path = path.as_str(),
            index,
            len = list.len(),
            "list index out of range"
        );
    }
    value
}
