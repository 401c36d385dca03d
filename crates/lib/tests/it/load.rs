//! Tests for decoding documents from strings and files.

use std::fs;

use mappath::{
    Doc, Error,
    doc::{Format, Kind},
};

const JSON_CONFIG: &str = r#"{
    "server": {"host": "localhost", "port": 8080},
    "features": ["a", "b"],
    "ratio": 0.25
}"#;

#[cfg(feature = "yaml")]
const YAML_CONFIG: &str = "
server:
  host: localhost
  port: 8080
features:
  - a
  - b
ratio: 0.25
";

fn check_config(doc: &Doc) {
    assert_eq!(doc.get_string("server/host", None).unwrap(), "localhost");
    assert_eq!(doc.get_int("server/port", None), Ok(8080));
    assert_eq!(
        doc.get_strings("features", None),
        Ok(vec!["a".to_string(), "b".to_string()])
    );
    assert_eq!(doc.get_string("ratio", None).unwrap(), "0.250000000");
}

#[test]
fn test_json_from_str_and_file() {
    check_config(&Doc::from_json_str(JSON_CONFIG).unwrap());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, JSON_CONFIG).unwrap();

    check_config(&Doc::from_json_file(&path).unwrap());
    check_config(&Doc::from_file(&path).unwrap());
    check_config(&Doc::from_file_as(&path, Format::Json).unwrap());
}

#[cfg(feature = "yaml")]
#[test]
fn test_yaml_from_str_and_file() {
    let from_str = Doc::from_yaml_str(YAML_CONFIG).unwrap();
    check_config(&from_str);

    let dir = tempfile::tempdir().unwrap();
    for name in ["config.yaml", "config.yml"] {
        let path = dir.path().join(name);
        fs::write(&path, YAML_CONFIG).unwrap();
        assert_eq!(Doc::from_file(&path).unwrap(), from_str);
        assert_eq!(Doc::from_yaml_file(&path).unwrap(), from_str);
    }
}

#[cfg(feature = "yaml")]
#[test]
fn test_yaml_and_json_decode_alike() {
    let json = Doc::from_json_str(JSON_CONFIG).unwrap();
    let yaml = Doc::from_yaml_str(YAML_CONFIG).unwrap();
    assert_eq!(json, yaml);
}

#[cfg(feature = "yaml")]
#[test]
fn test_yaml_non_string_keys() {
    let doc = Doc::from_yaml_str("ports:\n  80: http\n  443: https\ntrue: yes-key\n").unwrap();

    assert_eq!(doc.get_string("ports/80", None).unwrap(), "http");
    assert_eq!(doc.get_string("ports/443", None).unwrap(), "https");
    assert_eq!(doc.get_string("true", None).unwrap(), "yes-key");
}

#[test]
fn test_json_extension_override() {
    // YAML extension with JSON content still loads when the format is forced
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, JSON_CONFIG).unwrap();

    check_config(&Doc::from_file_as(&path, Format::Json).unwrap());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Doc::from_file(dir.path().join("absent.json")).unwrap_err();

    assert!(err.is_io_error());
    assert!(!err.is_decode_error());
    assert_eq!(err.module(), "io");
}

#[test]
fn test_invalid_json_is_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"a\": ").unwrap();

    let err = Doc::from_file(&path).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert!(err.is_decode_error());
    assert_eq!(err.module(), "json");
}

#[cfg(feature = "yaml")]
#[test]
fn test_invalid_yaml_is_decode_error() {
    let err = Doc::from_yaml_str("a: [1, 2").unwrap_err();
    assert!(matches!(err, Error::Yaml(_)));
    assert!(err.is_decode_error());
}

#[test]
fn test_root_must_be_a_map() {
    let err = Doc::from_json_str("[1, 2, 3]").unwrap_err();
    assert!(matches!(err, Error::InvalidRoot { found: Kind::List }));
    assert!(err.is_decode_error());
    assert_eq!(
        err.to_string(),
        "document root must be a map, found list"
    );

    let err = Doc::from_json_str("null").unwrap_err();
    assert!(matches!(err, Error::InvalidRoot { found: Kind::Null }));

    #[cfg(feature = "yaml")]
    {
        let err = Doc::from_yaml_str("- a\n- b\n").unwrap_err();
        assert!(matches!(err, Error::InvalidRoot { found: Kind::List }));
    }
}

#[test]
fn test_large_unsigned_becomes_float() {
    let doc = Doc::from_json_str(r#"{"big": 18446744073709551615, "small": 5}"#).unwrap();

    assert_eq!(doc.get_as::<mappath::doc::Value>("small", None).unwrap().kind(), Kind::Int);
    assert_eq!(doc.get_as::<mappath::doc::Value>("big", None).unwrap().kind(), Kind::Float);
    // Too large for an i64 after conversion
    assert!(doc.get_int("big", None).unwrap_err().is_type_error());
}
