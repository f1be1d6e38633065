//! Integration tests for loading bindings.toml files from disk.

use f08gen_core::Mode;
use f08gen_manifest::{BindingsToml, Error, Manifest};
use tempfile::TempDir;

const BINDINGS: &str = r#"
[generator]
mode = "modern"

[functions.testall]
params = [
  { kind = "INT", name = "count" },
  { kind = "REQUEST_ARRAY_INOUT", name = "array_of_requests", count = "count", options = { conversion = "loop" } },
  { kind = "LOGICAL_OUT", name = "flag" },
  { kind = "STATUS_ARRAY", name = "array_of_statuses", count = "count" },
]

[functions.isend]
bigcount = true
params = [
  { kind = "BUFFER_ASYNC", name = "buf" },
  { kind = "COUNT", name = "count" },
  { kind = "DATATYPE", name = "datatype" },
  { kind = "COMM", name = "comm" },
  { kind = "REQUEST_OUT", name = "request" },
]
"#;

#[test]
fn test_open_bindings_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("bindings.toml");
    std::fs::write(&path, BINDINGS).expect("Failed to write bindings.toml");

    let file = BindingsToml::open(&path).expect("Failed to open bindings.toml");
    assert_eq!(file.path(), path);
    assert_eq!(file.content(), BINDINGS);

    let manifest = file.manifest();
    assert_eq!(manifest.generator.mode, Mode::Modern);
    assert_eq!(
        manifest.functions.keys().collect::<Vec<_>>(),
        vec!["testall", "isend"]
    );
    assert!(manifest.functions["isend"].bigcount);
    assert_eq!(manifest.functions["testall"].params[3].kind, "STATUS_ARRAY");
}

#[test]
fn test_from_file_matches_open() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("bindings.toml");
    std::fs::write(&path, BINDINGS).expect("Failed to write bindings.toml");

    let manifest = Manifest::from_file(&path).expect("Failed to parse bindings.toml");
    let opened = BindingsToml::open(&path).unwrap().into_manifest();
    assert_eq!(manifest.param_count(), opened.param_count());
    assert_eq!(manifest.param_count(), 9);
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("missing.toml");

    let err = BindingsToml::open(&path).unwrap_err();
    match *err {
        Error::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_error_report_names_the_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("broken.toml");
    std::fs::write(&path, "[functions.send\n").unwrap();

    let err = Manifest::from_file(&path).unwrap_err();
    match *err {
        Error::Parse { src, span, .. } => {
            assert_eq!(src.name(), path.display().to_string());
            assert!(span.is_some());
        }
        other => panic!("unexpected error: {other}"),
    }
}
