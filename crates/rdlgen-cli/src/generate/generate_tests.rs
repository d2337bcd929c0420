#![allow(non_snake_case)]

use super::*;
use std::fs;
use tempfile::TempDir;

const SCHEMA: &str = r#"{
    "name": "AddressBook",
    "namespace": "com.example.book",
    "version": 1,
    "types": [
        {"StringTypeDef": {"type": "String", "name": "Email",
            "annotations": {"x_format": "email"}}},
        {"StructTypeDef": {"type": "Struct", "name": "Base",
            "fields": [{"name": "id", "type": "Int64"}]}},
        {"StructTypeDef": {"type": "Base", "name": "Contact",
            "fields": [
                {"name": "name", "type": "String", "optional": true},
                {"name": "email", "type": "Email"}
            ]}}
    ]
}"#;

fn write_schema(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("schema.json");
    fs::write(&path, content).unwrap();
    path
}

fn options(dir: &TempDir, schema: PathBuf) -> JavaOptions {
    JavaOptions {
        schema,
        output: Some(dir.path().join("out").to_string_lossy().into_owned()),
        namespace: None,
        no_artifacts: false,
    }
}

// java command tests

#[test]
fn run_java___writes_models_and_artifacts_into_package_dir() {
    let temp = TempDir::new().unwrap();
    let opts = options(&temp, write_schema(&temp, SCHEMA));

    let report = run_java(&opts, &Config::default()).unwrap();

    let pkg_dir = temp
        .path()
        .join("out")
        .join("com")
        .join("example")
        .join("book")
        .join("generated");
    assert_eq!(report.package, "com.example.book.generated");
    assert_eq!(report.sources, 7);
    assert_eq!(report.files.len(), 7);
    for name in ["Base", "Contact", "ResourceError", "ResourceException", "ErrorDetail"] {
        assert!(pkg_dir.join(format!("{name}.java")).is_file(), "missing {name}");
    }

    let contact = fs::read_to_string(pkg_dir.join("Contact.java")).unwrap();
    assert!(contact.contains("// This file is generated by rdlgen"));
    assert!(contact.contains("package com.example.book.generated;"));
    assert!(contact.contains("public long getId()"));
    assert!(contact.contains("public String getName()"));
}

#[test]
fn run_java___no_artifacts___models_only() {
    let temp = TempDir::new().unwrap();
    let mut opts = options(&temp, write_schema(&temp, SCHEMA));
    opts.no_artifacts = true;

    let report = run_java(&opts, &Config::default()).unwrap();

    assert_eq!(report.sources, 2);
}

#[test]
fn run_java___artifacts_disabled_in_config___models_only() {
    let temp = TempDir::new().unwrap();
    let opts = options(&temp, write_schema(&temp, SCHEMA));
    let mut config = Config::default();
    config.java.generate_artifacts = false;

    let report = run_java(&opts, &config).unwrap();

    assert_eq!(report.sources, 2);
}

#[test]
fn run_java___namespace_option___overrides_config_and_schema() {
    let temp = TempDir::new().unwrap();
    let mut opts = options(&temp, write_schema(&temp, SCHEMA));
    opts.namespace = Some("org.acme".to_string());
    let mut config = Config::default();
    config.java.namespace = "net.other".to_string();

    let report = run_java(&opts, &config).unwrap();

    assert_eq!(report.package, "org.acme.generated");
    assert!(
        temp.path()
            .join("out/org/acme/generated/Contact.java")
            .is_file()
    );
}

#[test]
fn run_java___config_banner___appears_in_header() {
    let temp = TempDir::new().unwrap();
    let opts = options(&temp, write_schema(&temp, SCHEMA));
    let mut config = Config::default();
    config.generator.banner = "book-gen".to_string();

    let report = run_java(&opts, &config).unwrap();

    let base = report
        .files
        .iter()
        .find(|p| p.ends_with("Base.java"))
        .unwrap();
    let code = fs::read_to_string(base).unwrap();
    assert!(code.contains("// This file is generated by book-gen"));
}

#[test]
fn run_java___unknown_field_type___fails() {
    let temp = TempDir::new().unwrap();
    let schema = r#"{"types": [{"StructTypeDef": {"type": "Struct", "name": "X",
        "fields": [{"name": "y", "type": "Nowhere"}]}}]}"#;
    let opts = options(&temp, write_schema(&temp, schema));

    let err = run_java(&opts, &Config::default()).unwrap_err();

    assert!(format!("{err:#}").contains("cannot find type 'Nowhere'"));
}

#[test]
fn run_java___missing_schema___fails_with_path() {
    let temp = TempDir::new().unwrap();
    let opts = options(&temp, temp.path().join("absent.json"));

    let err = run_java(&opts, &Config::default()).unwrap_err();

    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn run_java___malformed_schema___fails() {
    let temp = TempDir::new().unwrap();
    let opts = options(&temp, write_schema(&temp, r#"{"types": [{"Bogus": {}}]}"#));

    let err = run_java(&opts, &Config::default()).unwrap_err();

    assert!(format!("{err:#}").contains("schema parse error"));
}

// types command tests

#[test]
fn run_types___lists_flattened_fields() {
    let temp = TempDir::new().unwrap();
    let schema = write_schema(&temp, SCHEMA);

    let table = run_types(&schema, "Contact").unwrap();

    assert_eq!(
        table,
        "Contact (3 fields)\n  id    long\n  name  String optional\n  email String x_format=email\n"
    );
}

#[test]
fn run_types___non_struct___fails() {
    let temp = TempDir::new().unwrap();
    let schema = write_schema(&temp, SCHEMA);

    let err = run_types(&schema, "Email").unwrap_err();

    assert!(err.to_string().contains("StringTypeDef"));
}

#[test]
fn run_types___unknown_type___fails() {
    let temp = TempDir::new().unwrap();
    let schema = write_schema(&temp, SCHEMA);

    let err = run_types(&schema, "Missing").unwrap_err();

    assert!(err.to_string().contains("cannot find type 'Missing'"));
}

// check command tests

#[test]
fn run_check___reports_counts_and_paths() {
    let temp = TempDir::new().unwrap();
    let schema = write_schema(&temp, SCHEMA);

    let report = run_check(&schema, &Config::default()).unwrap();

    assert_eq!(
        report,
        CheckReport {
            name: "AddressBook".to_string(),
            types: 3,
            structs: 2,
            fields: 4,
            package: "com.example.book.generated".to_string(),
            root_path: "/address-book/v1".to_string(),
        }
    );
    assert!(report.to_string().contains("✓ Root path: /address-book/v1"));
}

#[test]
fn run_check___config_base_path___used_for_root_path() {
    let temp = TempDir::new().unwrap();
    let schema = write_schema(&temp, SCHEMA);
    let mut config = Config::default();
    config.java.base_path = "/api".to_string();

    let report = run_check(&schema, &config).unwrap();

    assert_eq!(report.root_path, "/api/v1");
}

#[test]
fn run_check___circular_parents___fails() {
    let temp = TempDir::new().unwrap();
    let schema = write_schema(
        &temp,
        r#"{"types": [
            {"StructTypeDef": {"type": "B", "name": "A"}},
            {"StructTypeDef": {"type": "A", "name": "B"}}
        ]}"#,
    );

    let err = run_check(&schema, &Config::default()).unwrap_err();

    assert!(format!("{err:#}").contains("circular type reference"));
}
