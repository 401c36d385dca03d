//! Tests for raw path resolution through the `Doc` API.

use mappath::{
    Doc,
    doc::{Map, Path, PathBuf, Value, resolve},
    path,
};

use super::helpers::*;

#[test]
fn test_get_existing_paths() {
    let doc = sample_doc();

    let cases: Vec<(&str, Value)> = vec![
        // map access
        ("hello", Value::from("world")),
        ("foo/bar", Value::from("baz")),
        ("foo/baz/bam", Value::Int(42)),
        // list access
        ("array/realints/0", Value::Int(1)),
        ("array/realints/3", Value::Int(4)),
        ("3d-array/0/0/0", Value::Int(1)),
        ("3d-array/1/0/0", Value::Int(11)),
        ("3d-array/1/1/2", Value::Int(16)),
        // mixed access
        ("mixed/array1/0", Value::Int(1)),
        ("mixed/array2/0/foo/0", Value::Int(1)),
        ("mixed/array2/0/bar/1", Value::from("two")),
        ("mixed/array2/1/bar/1", Value::from("six")),
        // containers
        ("array/realints", Value::from(vec![1, 2, 3, 4])),
        ("scalar/nothing", Value::Null),
    ];

    for (path, expected) in cases {
        assert_eq!(doc.get(path), Some(&expected), "path {path}");
        assert!(doc.has(path), "has({path})");
        assert_eq!(doc.lookup(path), Ok(&expected), "lookup({path})");
    }

    let mut bam = Map::new();
    bam.insert("bam".to_string(), Value::Int(42));
    assert_eq!(doc.get("foo/baz"), Some(&Value::Map(bam)));
}

#[test]
fn test_missing_paths_on_empty_doc() {
    let doc = Doc::new();
    for path in ["foo", "foo/bar", "foo/bar/baz"] {
        assert!(doc.get(path).is_none());
        assert!(!doc.has(path));
        assert_not_found(doc.lookup(path), path);
    }
}

#[test]
fn test_wrong_paths() {
    let doc = sample_doc();
    for path in [
        "bar",
        "foo/foo",
        "foo/bar/foo",
        "array/5",
        "array/realints/4",
        "array/realints/x",
        "3d-array/0/0/4",
        "3d-array/4/0/0",
        "hello/0",
    ] {
        assert!(!doc.has(path), "has({path})");
        assert_not_found(doc.lookup(path), path);
    }
}

#[test]
fn test_get_or() {
    let doc = sample_doc();

    assert_eq!(doc.get_or("foo/bar", "dflt"), Value::from("baz"));
    assert_eq!(doc.get_or("foo/nope", "dflt"), Value::from("dflt"));
    // Null is a value, so the fallback does not apply
    assert_eq!(doc.get_or("scalar/nothing", 1), Value::Null);
}

#[test]
fn test_list_index_then_key() {
    let doc = Doc::from_json_str(r#"{"a": [{"b": "x"}]}"#).unwrap();

    assert_eq!(doc.get_string("a/0/b", None).unwrap(), "x");
    assert_not_found(doc.get_string("a/1/b", None), "a/1/b");
}

#[test]
fn test_empty_segments_are_not_found() {
    let doc = Doc::new().with("", "empty-key").with("a", Doc::new().with("b", 1));

    for path in ["", "/", "/a", "a/", "a//b"] {
        assert!(!doc.has(path), "has({path:?})");
    }
}

#[test]
fn test_resolution_is_deterministic() {
    let doc = sample_doc();
    for path in ["mixed/array2/1/foo/2", "scalar/realfloat", "foo/baz"] {
        let first = doc.get(path).cloned();
        assert!(first.is_some());
        for _ in 0..3 {
            assert_eq!(doc.get(path).cloned(), first);
        }
    }
}

#[test]
fn test_path_types_are_interchangeable() {
    let doc = sample_doc();
    let owned = PathBuf::new().push("mixed").push("array2").push_index(1).push("bar");
    let borrowed = Path::new("mixed/array2/1/bar");
    let from_macro = path!("mixed", "array2", 1, "bar");

    let expected = doc.get("mixed/array2/1/bar");
    assert!(expected.is_some());
    assert_eq!(doc.get(&owned), expected);
    assert_eq!(doc.get(borrowed), expected);
    assert_eq!(doc.get(&from_macro), expected);
    assert_eq!(doc.get(path!("mixed/array2/1/bar")), expected);
    assert_eq!(resolve(doc.root(), borrowed), expected);
}

#[test]
fn test_root_access() {
    let mut root = Map::new();
    root.insert("foo".to_string(), Value::from("bar"));
    let doc = Doc::from_map(root.clone());
    assert_eq!(doc.root(), &root);
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.into_map(), root);
}
