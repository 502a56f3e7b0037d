use std::path::Path;

use cadval::io::{Format, IoError, resolve_input_format};

#[test]
fn explicit_format_takes_priority() {
    let format =
        resolve_input_format(Some(Format::Yaml), Some(Path::new("clientes.json"))).expect("format");
    assert_eq!(format, Format::Yaml);
}

#[test]
fn extension_fallback_works() {
    let yaml = resolve_input_format(None, Some(Path::new("clientes.yml"))).expect("yaml");
    let jsonl = resolve_input_format(None, Some(Path::new("clientes.ndjson"))).expect("jsonl");
    assert_eq!(yaml, Format::Yaml);
    assert_eq!(jsonl, Format::Jsonl);
}

#[test]
fn unknown_extension_is_error() {
    let err =
        resolve_input_format(None, Some(Path::new("clientes.unknown"))).expect_err("must fail");
    match err {
        IoError::UnsupportedPathExtension { path } => assert_eq!(path, "clientes.unknown"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_path_and_explicit_format_is_error() {
    let err = resolve_input_format(None, None).expect_err("must fail");
    assert!(matches!(err, IoError::UnresolvedFormat));
}
