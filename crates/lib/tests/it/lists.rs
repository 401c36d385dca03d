//! Tests for list accessors: element conversion, indexing of failures, and
//! the unsupported-element check.

use mappath::doc::{AccessError, Kind, Map, Value};

use super::helpers::*;

#[test]
fn test_get_bools() {
    let doc = sample_doc();
    let expected = vec![true, true, false, false];

    assert_eq!(doc.get_bools("array/realbools", None), Ok(expected.clone()));
    assert_eq!(doc.get_bools("array/stringbools", None), Ok(expected));
    assert_eq!(
        doc.get_bools("array/realints", None),
        Ok(vec![true, true, true, true])
    );

    let err = assert_invalid_type(doc.get_bools("array/strings", None));
    assert_eq!(err.index(), Some(0));
}

#[test]
fn test_get_ints() {
    let doc = sample_doc();
    let expected = vec![1, 2, 3, 4];

    for path in [
        "array/realints",
        "array/realfloats",
        "array/stringints",
        "array/stringfloats",
    ] {
        assert_eq!(doc.get_ints(path, None), Ok(expected.clone()), "path {path}");
    }
    assert_eq!(doc.get_ints("array/realbools", None), Ok(vec![1, 1, 0, 0]));
    assert_eq!(doc.get_ints("array/mixed", None), Ok(vec![1, 2, 3, 1]));
}

#[test]
fn test_get_floats() {
    let doc = sample_doc();

    assert_eq!(
        doc.get_floats("array/realfloats", None),
        Ok(vec![1.01, 2.02, 3.03, 4.04])
    );
    assert_eq!(
        doc.get_floats("array/stringfloats", None),
        Ok(vec![1.01, 2.02, 3.03, 4.04])
    );
    assert_eq!(
        doc.get_floats("array/realints", None),
        Ok(vec![1.0, 2.0, 3.0, 4.0])
    );
}

#[test]
fn test_get_strings() {
    let doc = sample_doc();

    assert_eq!(
        doc.get_strings("array/strings", None),
        Ok(vec!["foo".to_string(), "bar".to_string(), "baz".to_string()])
    );
    assert_eq!(
        doc.get_strings("array/realints", None),
        Ok(vec!["1", "2", "3", "4"].into_iter().map(String::from).collect())
    );
    assert_eq!(
        doc.get_strings("array/mixed", None),
        Ok(vec!["1", "2", "3.500000000", "true"]
            .into_iter()
            .map(String::from)
            .collect())
    );
    assert_eq!(
        doc.get_strings("mixed/array2/1/bar", None),
        Ok(vec!["five".to_string(), "six".to_string()])
    );
}

#[test]
fn test_get_maps() {
    let doc = sample_doc();

    let maps = doc.get_maps("mixed/array2", None).unwrap();
    assert_eq!(maps.len(), 2);
    assert_eq!(
        maps[1].get("foo"),
        Some(&Value::from(vec![11, 12, 13, 14]))
    );

    let err = assert_invalid_type(doc.get_maps("array/realints", None));
    assert!(matches!(
        err,
        AccessError::InvalidType {
            actual: Kind::Int,
            expected: Kind::Map,
            index: Some(0),
            ..
        }
    ));
}

#[test]
fn test_empty_list_is_empty_for_every_type() {
    let doc = sample_doc();
    let path = "array/empty";

    assert_eq!(doc.get_bools(path, None), Ok(vec![]));
    assert_eq!(doc.get_ints(path, None), Ok(vec![]));
    assert_eq!(doc.get_floats(path, None), Ok(vec![]));
    assert_eq!(doc.get_strings(path, None), Ok(Vec::<String>::new()));
    assert_eq!(doc.get_maps(path, None), Ok(Vec::<Map>::new()));
    assert!(doc.get_children(path, None).unwrap().is_empty());
    // The element check only runs once there is an element to convert
    assert_eq!(doc.get_list::<Value>(path, None), Ok(vec![]));
    // An empty list is present, so the fallback is not used
    assert_eq!(doc.get_ints(path, Some(vec![9])), Ok(vec![]));
}

#[test]
fn test_failure_carries_first_bad_index() {
    let doc = sample_doc();

    let err = assert_invalid_type(doc.get_ints("array/badints", None));
    assert_eq!(err.index(), Some(1));
    assert_eq!(err.path(), Some("array/badints"));
    assert_eq!(
        err.to_string(),
        "cannot convert string at \"array/badints\" [1] into int"
    );

    let err = assert_invalid_type(doc.get_floats("array/strings", None));
    assert_eq!(err.index(), Some(0));
}

#[test]
fn test_non_list_is_invalid_type() {
    let doc = sample_doc();

    for path in ["hello", "foo", "scalar/realint", "scalar/nothing"] {
        let err = assert_invalid_type(doc.get_ints(path, Some(vec![1])));
        assert!(
            matches!(
                err,
                AccessError::InvalidType {
                    expected: Kind::List,
                    index: None,
                    ..
                }
            ),
            "path {path}: {err:?}"
        );
    }
}

#[test]
fn test_unsupported_element_type() {
    let doc = sample_doc();

    let err = doc.get_list::<Value>("array/realints", None).unwrap_err();
    assert!(err.is_unsupported());
    assert_eq!(err, AccessError::UnsupportedType { target: Kind::Any });
    assert_eq!(err.path(), None);

    let err = doc.get_list::<Vec<Value>>("3d-array", None).unwrap_err();
    assert_eq!(err, AccessError::UnsupportedType { target: Kind::List });
    assert_eq!(
        err.to_string(),
        "type list is not supported as a list element"
    );
}

#[test]
fn test_list_fallbacks() {
    let doc = sample_doc();

    assert_eq!(doc.get_ints("array/none", Some(vec![7, 8])), Ok(vec![7, 8]));
    assert_not_found(doc.get_ints("array/none", None), "array/none");
    assert_not_found(doc.get_strings("array/realints/9", None), "array/realints/9");

    assert_eq!(doc.ints_value("array/badints", Some(vec![0])), vec![0]);
    assert_eq!(doc.ints_value("array/badints", None), Vec::<i64>::new());
    assert_eq!(doc.bools_value("array/stringbools", None), vec![true, true, false, false]);
    assert_eq!(doc.floats_value("hello", Some(vec![0.5])), vec![0.5]);
    assert_eq!(
        doc.strings_value("nope", Some(vec!["a".to_string()])),
        vec!["a".to_string()]
    );
    assert!(doc.maps_value("array/strings", None).is_empty());
}

#[test]
fn test_generic_list_element_types() {
    let doc = sample_doc();

    assert_eq!(
        doc.get_list::<u8>("3d-array/1/1", None),
        Ok(vec![14, 15, 16])
    );
    assert_eq!(
        doc.get_list::<f32>("array/realints", None),
        Ok(vec![1.0, 2.0, 3.0, 4.0])
    );
    assert_eq!(
        doc.list_value::<i32>("array/badints", Some(vec![-1])),
        vec![-1]
    );
}
